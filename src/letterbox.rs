//! The puzzle box: four sides of letters and the adjacency rule between them.
//!
//! All lookups are answered from tables built once in [`Letterbox::new`]:
//! a letter → side table sized by the alphabet and a letter-pair legality
//! table sized by the alphabet squared.

use crate::error::{LetterboxError, Result};
use crate::letter_set::{ALPHABET_SIZE, LetterSet, letter_index};
use crate::debug_log;
use std::fmt;

pub const SIDE_COUNT: usize = 4;

/// One edge of the box. Letters are stored lowercase, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    letters: Vec<char>,
}

impl Side {
    fn new(letters: &str) -> Self {
        Self {
            letters: letters.chars().map(|c| c.to_ascii_lowercase()).collect(),
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Checks that `sides` describes a playable box: exactly four groups, all
/// non-empty, all the same length, ASCII letters only.
pub fn validate_sides<S: AsRef<str>>(sides: &[S]) -> Result<()> {
    if sides.len() != SIDE_COUNT {
        return Err(LetterboxError::malformed(format!(
            "expected {SIDE_COUNT} sides, got {}",
            sides.len()
        )));
    }

    let side_len = sides[0].as_ref().chars().count();
    if side_len == 0 {
        return Err(LetterboxError::malformed("sides must not be empty"));
    }

    for side in sides {
        let side = side.as_ref();
        if side.chars().count() != side_len {
            return Err(LetterboxError::malformed(
                "sides must all have the same number of letters",
            ));
        }
        if let Some(bad) = side.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(LetterboxError::malformed(format!(
                "side '{side}' contains non-letter '{bad}'"
            )));
        }
    }
    Ok(())
}

/// Immutable puzzle configuration.
///
/// Sides are expected to be disjoint. If malformed input repeats a letter on
/// several sides, the first side holding it (in construction order) owns it.
#[derive(Debug, Clone)]
pub struct Letterbox {
    sides: [Side; SIDE_COUNT],
    letters: LetterSet,
    side_of_letter: [Option<usize>; ALPHABET_SIZE],
    legal_pairs: [[bool; ALPHABET_SIZE]; ALPHABET_SIZE],
}

impl Letterbox {
    /// Builds a box from four side strings, ordered top, right, left, bottom.
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self> {
        validate_sides(sides)?;

        let sides: [Side; SIDE_COUNT] = std::array::from_fn(|i| Side::new(sides[i].as_ref()));

        let mut side_of_letter = [None; ALPHABET_SIZE];
        let mut letters = LetterSet::empty();
        for (side_index, side) in sides.iter().enumerate() {
            for &letter in side.letters() {
                letters.insert(letter);
                if let Some(i) = letter_index(letter)
                    && side_of_letter[i].is_none()
                {
                    side_of_letter[i] = Some(side_index);
                }
            }
        }

        let mut legal_pairs = [[false; ALPHABET_SIZE]; ALPHABET_SIZE];
        for (a, row) in legal_pairs.iter_mut().enumerate() {
            for (b, legal) in row.iter_mut().enumerate() {
                if let (Some(side_a), Some(side_b)) = (side_of_letter[a], side_of_letter[b]) {
                    *legal = side_a != side_b;
                }
            }
        }

        debug_log!("Letterbox::new() - {} letters across {SIDE_COUNT} sides", letters.len());

        Ok(Self {
            sides,
            letters,
            side_of_letter,
            legal_pairs,
        })
    }

    pub fn sides(&self) -> &[Side; SIDE_COUNT] {
        &self.sides
    }

    /// Every distinct letter on the box.
    pub fn letters(&self) -> LetterSet {
        self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }

    fn side_index(&self, letter: char) -> Result<usize> {
        letter_index(letter)
            .and_then(|i| self.side_of_letter[i])
            .ok_or(LetterboxError::NotInBox(letter))
    }

    /// The side holding `letter`.
    pub fn side_of(&self, letter: char) -> Result<&Side> {
        self.side_index(letter).map(|i| &self.sides[i])
    }

    /// True when `a` and `b` sit on different sides and may be played
    /// back to back.
    pub fn is_legal_pair(&self, a: char, b: char) -> Result<bool> {
        let a = letter_index(a)
            .filter(|&i| self.side_of_letter[i].is_some())
            .ok_or(LetterboxError::NotInBox(a))?;
        let b = letter_index(b)
            .filter(|&i| self.side_of_letter[i].is_some())
            .ok_or(LetterboxError::NotInBox(b))?;
        Ok(self.legal_pairs[a][b])
    }

    /// Legality of a sliding window of up to two letters. A window shorter
    /// than two letters (the tail of a word) has no adjacency constraint.
    pub fn is_legal_window(&self, window: &str) -> Result<bool> {
        let mut chars = window.chars();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => self.is_legal_pair(a, b),
            _ => Ok(true),
        }
    }
}

impl fmt::Display for Letterbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{side}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_box() -> Letterbox {
        Letterbox::new(&["abc", "def", "ghi", "jkl"]).unwrap()
    }

    #[test]
    fn test_letters_cover_all_sides() {
        let letterbox = sample_box();
        let letters = letterbox.letters();
        assert_eq!(letters.len(), 12);
        assert_eq!(letters.iter().collect::<String>(), "abcdefghijkl");
        assert!(!letterbox.contains('m'));
    }

    #[test]
    fn test_new_lowercases_sides() {
        let letterbox = Letterbox::new(&["ABC", "dEf", "GHI", "jkl"]).unwrap();
        assert_eq!(letterbox.to_string(), "abc-def-ghi-jkl");
        assert!(letterbox.contains('a'));
        assert!(!letterbox.contains('A'));
    }

    #[test]
    fn test_side_of() {
        let letterbox = sample_box();
        assert_eq!(letterbox.side_of('e').unwrap().to_string(), "def");
        assert_eq!(letterbox.side_of('l').unwrap().to_string(), "jkl");
    }

    #[test]
    fn test_side_of_missing_letter_is_error() {
        let letterbox = sample_box();
        assert!(matches!(
            letterbox.side_of('z'),
            Err(LetterboxError::NotInBox('z'))
        ));
        assert!(matches!(
            letterbox.side_of('?'),
            Err(LetterboxError::NotInBox('?'))
        ));
    }

    #[test]
    fn test_legal_pairs() {
        let letterbox = sample_box();
        assert!(letterbox.is_legal_pair('a', 'd').unwrap());
        assert!(letterbox.is_legal_pair('f', 'i').unwrap());
        assert!(!letterbox.is_legal_pair('i', 'g').unwrap());
        assert!(!letterbox.is_legal_pair('a', 'a').unwrap());
    }

    #[test]
    fn test_legal_pair_is_symmetric() {
        let letterbox = sample_box();
        let letters: Vec<char> = letterbox.letters().iter().collect();
        for &a in &letters {
            for &b in &letters {
                assert_eq!(
                    letterbox.is_legal_pair(a, b).unwrap(),
                    letterbox.is_legal_pair(b, a).unwrap(),
                    "pair {a}{b}"
                );
            }
        }
    }

    #[test]
    fn test_legal_pair_outside_box_is_error() {
        let letterbox = sample_box();
        assert!(matches!(
            letterbox.is_legal_pair('a', 'z'),
            Err(LetterboxError::NotInBox('z'))
        ));
    }

    #[test]
    fn test_short_window_is_legal() {
        let letterbox = sample_box();
        assert!(letterbox.is_legal_window("a").unwrap());
        assert!(letterbox.is_legal_window("").unwrap());
        assert!(!letterbox.is_legal_window("ab").unwrap());
        assert!(letterbox.is_legal_window("ad").unwrap());
    }

    #[test]
    fn test_overlapping_sides_first_side_wins() {
        let letterbox = Letterbox::new(&["abc", "aef", "ghi", "jkl"]).unwrap();
        assert_eq!(letterbox.side_of('a').unwrap().to_string(), "abc");
        // 'a' belongs to the first side only, so it pairs legally with 'e'.
        assert!(letterbox.is_legal_pair('a', 'e').unwrap());
        assert!(!letterbox.is_legal_pair('a', 'b').unwrap());
    }

    #[test]
    fn test_single_letter_sides() {
        let letterbox = Letterbox::new(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(letterbox.letters().len(), 4);
        assert!(letterbox.is_legal_pair('a', 'b').unwrap());
    }

    #[test]
    fn test_wrong_side_count_is_malformed() {
        assert!(matches!(
            Letterbox::new(&["abc", "def", "ghi"]),
            Err(LetterboxError::MalformedBox { .. })
        ));
        assert!(matches!(
            Letterbox::new(&["abc", "def", "ghi", "jkl", "mno"]),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_unequal_sides_are_malformed() {
        assert!(matches!(
            Letterbox::new(&["abc", "de", "ghi", "jkl"]),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_empty_sides_are_malformed() {
        assert!(matches!(
            Letterbox::new(&["", "", "", ""]),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_non_letters_are_malformed() {
        assert!(matches!(
            Letterbox::new(&["ab1", "def", "ghi", "jkl"]),
            Err(LetterboxError::MalformedBox { .. })
        ));
        assert!(matches!(
            Letterbox::new(&["abé", "def", "ghi", "jkl"]),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }
}
