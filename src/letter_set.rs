use std::fmt;

pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in `0..26`.
pub(crate) fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}

/// Set of lowercase ASCII letters, one bit per letter.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(&self, letter: char) -> bool {
        letter_index(letter).is_some_and(|i| self.bits & (1 << i) != 0)
    }

    /// Adds `letter`, returning false if it is not a lowercase ASCII letter.
    pub fn insert(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(i) => {
                self.bits |= 1 << i;
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0..ALPHABET_SIZE as u8)
            .filter(|i| self.bits & (1 << i) != 0)
            .map(|i| (b'a' + i) as char)
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().collect::<String>())
    }
}
