// Library interface for letterboxed-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod letter_set;
pub mod letterbox;
pub mod logging;
pub mod puzzle;
pub mod session;
pub mod solver;
pub mod tui;
pub mod words;

// Re-export commonly used items for easier testing
pub use dictionary::{default_dictionary_path, load_dictionary_from_file, load_dictionary_from_str};
pub use error::LetterboxError;
pub use letter_set::LetterSet;
pub use letterbox::{Letterbox, Side};
pub use puzzle::{
    HttpFetcher, NYT_URL, PageFetcher, Puzzle, fetch_nyt_puzzle, parse_letters, parse_nyt_page,
};
pub use session::{SolutionView, present_solutions};
pub use solver::{SearchStrategy, Solution, Solver};
pub use words::{filter_valid_words, word_obeys_rules};
