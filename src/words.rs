use crate::letterbox::Letterbox;
use crate::{debug_log, info_log};

pub const MIN_WORD_LENGTH: usize = 3;

/// Returns true if `word` (already lowercase) can be played on `letterbox`:
/// at least [`MIN_WORD_LENGTH`] letters, every letter on the box, and no two
/// consecutive letters from the same side.
pub fn word_obeys_rules(letterbox: &Letterbox, word: &str) -> bool {
    let letters: Vec<char> = word.chars().collect();
    if letters.len() < MIN_WORD_LENGTH {
        return false;
    }

    if !letters.iter().all(|&c| letterbox.contains(c)) {
        return false;
    }

    letters
        .windows(2)
        .all(|pair| matches!(letterbox.is_legal_pair(pair[0], pair[1]), Ok(true)))
}

/// Lowercases each entry of `dictionary` and keeps the ones playable on
/// `letterbox`. Order and duplicates are preserved.
pub fn filter_valid_words<S: AsRef<str>>(letterbox: &Letterbox, dictionary: &[S]) -> Vec<String> {
    let valid: Vec<String> = dictionary
        .iter()
        .map(|word| word.as_ref().to_lowercase())
        .filter(|word| {
            let ok = word_obeys_rules(letterbox, word);
            if !ok {
                debug_log!("filter_valid_words() - Rejected '{}'", word);
            }
            ok
        })
        .collect();

    info_log!(
        "filter_valid_words() - {} of {} words are valid for {}",
        valid.len(),
        dictionary.len(),
        letterbox
    );
    valid
}
