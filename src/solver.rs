use crate::error::Result;
use crate::letter_set::{ALPHABET_SIZE, LetterSet, letter_index};
use crate::letterbox::Letterbox;
use crate::words::filter_valid_words;
use crate::{debug_log, info_log};
use std::fmt;

/// How many second words to try per starting word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Stop at the first second word (in dictionary order) that completes
    /// the box. Fast, but only one pairing per starting word is reported.
    #[default]
    FirstMatch,
    /// Report every second word that completes the box.
    Exhaustive,
}

/// A chain of one or two words covering every letter of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    fn single(word: &str) -> Self {
        Self {
            words: vec![word.to_string()],
        }
    }

    fn pair(first: &str, second: &str) -> Self {
        Self {
            words: vec![first.to_string(), second.to_string()],
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the chain.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.words.join(" -> "))
    }
}

/// Searches a dictionary for one- and two-word solutions to a box.
pub struct Solver {
    letterbox: Letterbox,
    valid_words: Vec<String>,
    word_letters: Vec<LetterSet>,
    // Indices into `valid_words`, bucketed by first letter.
    by_first_letter: [Vec<usize>; ALPHABET_SIZE],
}

impl Solver {
    pub fn new<S: AsRef<str>>(letterbox: Letterbox, dictionary: &[S]) -> Self {
        let valid_words = filter_valid_words(&letterbox, dictionary);
        let word_letters: Vec<LetterSet> = valid_words
            .iter()
            .map(|word| word.chars().collect())
            .collect();

        let mut by_first_letter: [Vec<usize>; ALPHABET_SIZE] = std::array::from_fn(|_| Vec::new());
        for (i, word) in valid_words.iter().enumerate() {
            if let Some(first) = word.chars().next().and_then(letter_index) {
                by_first_letter[first].push(i);
            }
        }

        Self {
            letterbox,
            valid_words,
            word_letters,
            by_first_letter,
        }
    }

    /// Convenience constructor validating raw side strings first.
    pub fn from_sides<S: AsRef<str>, W: AsRef<str>>(sides: &[S], dictionary: &[W]) -> Result<Self> {
        Ok(Self::new(Letterbox::new(sides)?, dictionary))
    }

    pub fn letterbox(&self) -> &Letterbox {
        &self.letterbox
    }

    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    fn chain_indices(&self, word: &str) -> &[usize] {
        match word.chars().last().and_then(letter_index) {
            Some(last) => &self.by_first_letter[last],
            None => &[],
        }
    }

    /// Valid words starting with the last letter of `word`, in dictionary order.
    pub fn next_words<'a>(&'a self, word: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.chain_indices(word)
            .iter()
            .map(|&i| self.valid_words[i].as_str())
    }

    /// Finds solutions using [`SearchStrategy::FirstMatch`].
    pub fn solve(&self) -> Vec<Solution> {
        self.solve_with(SearchStrategy::FirstMatch)
    }

    /// Returns one-word solutions followed by two-word solutions, each group
    /// in the order its starting words appear in the dictionary.
    ///
    /// A starting word that solves the box alone is not extended further.
    pub fn solve_with(&self, strategy: SearchStrategy) -> Vec<Solution> {
        let full = self.letterbox.letters();
        let mut answers = Vec::new();

        for (i, word) in self.valid_words.iter().enumerate() {
            let used = self.word_letters[i];
            if used == full {
                debug_log!("solve_with() - One-word solution '{}'", word);
                answers.push(Solution::single(word));
                continue;
            }

            for &j in self.chain_indices(word) {
                let next = &self.valid_words[j];
                if next == word {
                    continue;
                }
                if used.union(self.word_letters[j]) == full {
                    answers.push(Solution::pair(word, next));
                    if strategy == SearchStrategy::FirstMatch {
                        break;
                    }
                }
            }
        }

        answers.sort_by_key(Solution::len);
        info_log!(
            "solve_with() - {} solutions from {} valid words ({:?})",
            answers.len(),
            self.valid_words.len(),
            strategy
        );
        answers
    }
}
