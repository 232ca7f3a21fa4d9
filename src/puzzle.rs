//! Letters providers: turn user input or the NYT Letter Boxed page (live or
//! saved) into the four side strings (and, for the page, its word list).

use crate::debug_log;
use crate::error::{LetterboxError, Result};
use crate::letterbox::{SIDE_COUNT, validate_sides};
use std::fmt;

pub const LETTERS_SEPARATOR: char = '-';
pub const NYT_URL: &str = "https://www.nytimes.com/puzzles/letter-boxed";

const SIDES_KEY: &str = "\"sides\"";
const DICTIONARY_KEY: &str = "\"dictionary\"";

/// The inputs the solver needs: four sides (top, right, left, bottom) and a
/// candidate word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub sides: [String; SIDE_COUNT],
    pub dictionary: Vec<String>,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sides: Vec<String> = self.sides.iter().map(|s| s.to_uppercase()).collect();
        write!(f, "{}", sides.join(LETTERS_SEPARATOR.to_string().as_str()))
    }
}

fn into_sides(groups: Vec<String>) -> Result<[String; SIDE_COUNT]> {
    validate_sides(groups.as_slice())?;
    let groups: Vec<String> = groups.iter().map(|g| g.to_lowercase()).collect();
    groups
        .try_into()
        .map_err(|_| LetterboxError::malformed(format!("expected {SIDE_COUNT} sides")))
}

/// Parses `top-rgt-lft-btm`, e.g. `abc-def-ghi-jkl`.
pub fn parse_letters(letters: &str) -> Result<[String; SIDE_COUNT]> {
    let groups: Vec<String> = letters
        .trim()
        .split(LETTERS_SEPARATOR)
        .map(str::to_string)
        .collect();
    if groups.len() != SIDE_COUNT {
        return Err(LetterboxError::malformed(format!(
            "must be {SIDE_COUNT} groups separated by '{LETTERS_SEPARATOR}'"
        )));
    }
    into_sides(groups)
}

/// Returns the JSON array text (brackets included) at the start of `text`,
/// skipping leading whitespace.
fn array_at(text: &str) -> Option<&str> {
    let text = text.trim_start();
    if !text.starts_with('[') {
        return None;
    }

    let mut in_string = false;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            ']' if !in_string => return Some(&text[..=i]),
            _ => {}
        }
    }
    None
}

/// Returns the first JSON array in `text` that follows `key:`. Occurrences
/// of `key` holding anything other than an array are skipped.
fn json_array_after<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.match_indices(key).find_map(|(start, _)| {
        let after_key = text[start + key.len()..].trim_start();
        array_at(after_key.strip_prefix(':')?)
    })
}

/// Extracts the puzzle from the text of the NYT Letter Boxed page, which
/// embeds `"sides":["ABC",...]` and `"dictionary":["WORD",...]` in its
/// game data. A page without a dictionary yields an empty word list.
pub fn parse_nyt_page(page: &str) -> Result<Puzzle> {
    let sides = json_array_after(page, SIDES_KEY).ok_or(LetterboxError::PuzzleNotFound)?;
    let sides: Vec<String> = serde_json::from_str(sides)?;

    let dictionary: Vec<String> = match json_array_after(page, DICTIONARY_KEY) {
        Some(words) => serde_json::from_str(words)?,
        None => Vec::new(),
    };

    Ok(Puzzle {
        sides: into_sides(sides)?,
        dictionary,
    })
}

/// Source of page bodies by URL.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP(S).
pub struct HttpFetcher;

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |source: Box<dyn std::error::Error + Send + Sync>| {
            LetterboxError::Fetch {
                url: url.to_string(),
                source,
            }
        };

        debug_log!("GET {}", url);
        let response = ureq::get(url)
            .call()
            .map_err(|e| fetch_error(Box::new(e)))?;
        response.into_string().map_err(|e| fetch_error(Box::new(e)))
    }
}

/// Downloads today's puzzle from the NYT site.
pub fn fetch_nyt_puzzle<F: PageFetcher + ?Sized>(fetcher: &F) -> Result<Puzzle> {
    parse_nyt_page(&fetcher.fetch(NYT_URL)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><script>window.gameData = {"id":1234,"sides":["RME","WCL","TGK","API"],"printDate":"2026-10-18","dictionary":["ACME","CAGE","EPIC","MAGIC"],"par":5}</script></html>"#;

    #[test]
    fn test_parse_letters() {
        let sides = parse_letters("ABC-def-Ghi-jkl").unwrap();
        assert_eq!(sides, ["abc", "def", "ghi", "jkl"].map(String::from));
    }

    #[test]
    fn test_parse_letters_trims_input() {
        assert!(parse_letters("  abc-def-ghi-jkl\n").is_ok());
    }

    #[test]
    fn test_parse_letters_wrong_group_count() {
        assert!(matches!(
            parse_letters("abc-def-ghi"),
            Err(LetterboxError::MalformedBox { .. })
        ));
        assert!(matches!(
            parse_letters("abc-def-ghi-jkl-mno"),
            Err(LetterboxError::MalformedBox { .. })
        ));
        assert!(matches!(
            parse_letters("abcdefghijkl"),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_parse_letters_unequal_groups() {
        assert!(matches!(
            parse_letters("abc-de-ghi-jkl"),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_parse_letters_non_letters() {
        assert!(matches!(
            parse_letters("ab1-def-ghi-jkl"),
            Err(LetterboxError::MalformedBox { .. })
        ));
        assert!(matches!(
            parse_letters("---"),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_parse_nyt_page() {
        let puzzle = parse_nyt_page(PAGE).unwrap();
        assert_eq!(puzzle.sides, ["rme", "wcl", "tgk", "api"].map(String::from));
        assert_eq!(puzzle.dictionary, vec!["ACME", "CAGE", "EPIC", "MAGIC"]);
        assert_eq!(puzzle.to_string(), "RME-WCL-TGK-API");
    }

    #[test]
    fn test_parse_nyt_page_tolerates_whitespace() {
        let page = r#"{ "sides" : [ "ABC", "DEF", "GHI", "JKL" ] }"#;
        let puzzle = parse_nyt_page(page).unwrap();
        assert_eq!(puzzle.sides[3], "jkl");
        assert!(puzzle.dictionary.is_empty());
    }

    #[test]
    fn test_parse_nyt_page_missing_sides() {
        assert!(matches!(
            parse_nyt_page("<html>No puzzle today</html>"),
            Err(LetterboxError::PuzzleNotFound)
        ));
        assert!(matches!(
            parse_nyt_page(r#"{"sides":"ABC"}"#),
            Err(LetterboxError::PuzzleNotFound)
        ));
    }

    #[test]
    fn test_parse_nyt_page_bad_side_count() {
        let page = r#"{"sides":["ABC","DEF","GHI"],"dictionary":[]}"#;
        assert!(matches!(
            parse_nyt_page(page),
            Err(LetterboxError::MalformedBox { .. })
        ));
    }

    #[test]
    fn test_parse_nyt_page_bad_json() {
        let page = r#"{"sides":["ABC","DEF",GHI,"JKL"]}"#;
        assert!(matches!(parse_nyt_page(page), Err(LetterboxError::Json(_))));
    }

    struct PageAt(&'static str, &'static str);

    impl PageFetcher for PageAt {
        fn fetch(&self, url: &str) -> Result<String> {
            if url == self.0 {
                Ok(self.1.to_string())
            } else {
                Err(LetterboxError::Fetch {
                    url: url.to_string(),
                    source: "404 Not Found".into(),
                })
            }
        }
    }

    #[test]
    fn test_fetch_nyt_puzzle() {
        let puzzle = fetch_nyt_puzzle(&PageAt(NYT_URL, PAGE)).unwrap();
        assert_eq!(puzzle.to_string(), "RME-WCL-TGK-API");
        assert_eq!(puzzle.dictionary.len(), 4);
    }

    #[test]
    fn test_fetch_nyt_puzzle_errors() {
        let missing = fetch_nyt_puzzle(&PageAt("https://example.com", PAGE));
        assert!(matches!(missing, Err(LetterboxError::Fetch { url, .. }) if url == NYT_URL));

        let no_puzzle = fetch_nyt_puzzle(&PageAt(NYT_URL, "<html></html>"));
        assert!(matches!(no_puzzle, Err(LetterboxError::PuzzleNotFound)));
    }

    #[test]
    fn test_parse_nyt_page_skips_non_array_keys() {
        let page = r#"{"layout":{"sides":4},"gameData":{"sides":["ABC","DEF","GHI","JKL"],"dictionary":["GADJEK"]}}"#;
        let puzzle = parse_nyt_page(page).unwrap();
        assert_eq!(puzzle.to_string(), "ABC-DEF-GHI-JKL");
        assert_eq!(puzzle.dictionary, vec!["GADJEK"]);
    }

    #[test]
    fn test_json_array_after_uses_first_array_occurrence() {
        let text = r#""dictionary":null, "dictionary" : ["A"], "dictionary":["B"]"#;
        assert_eq!(json_array_after(text, DICTIONARY_KEY), Some(r#"["A"]"#));
        assert_eq!(json_array_after(r#""dictionary":{}"#, DICTIONARY_KEY), None);
    }

    #[test]
    fn test_json_array_after_skips_brackets_in_strings() {
        let text = r#""dictionary":["A]B","C\"]"] trailing"#;
        assert_eq!(
            json_array_after(text, DICTIONARY_KEY),
            Some(r#"["A]B","C\"]"]"#)
        );
    }
}
