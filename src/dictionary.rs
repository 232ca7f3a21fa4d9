use crate::error::{LetterboxError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "letterboxed";
pub const DEFAULT_DICTIONARY_FILE: &str = "words.txt";

/// Splits newline-delimited text into words. Blank lines are dropped; order
/// and duplicates are kept, and no other filtering happens here.
pub fn load_dictionary_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_error = |source| LetterboxError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(io_error)?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }

    if words.is_empty() {
        return Err(LetterboxError::EmptyDictionary);
    }
    Ok(words)
}

/// `<data dir>/letterboxed/words.txt`, used when no dictionary is given.
pub fn default_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_DICTIONARY_FILE))
}
