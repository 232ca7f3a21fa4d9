use crate::dictionary::{default_dictionary_path, load_dictionary_from_file};
use crate::error::{LetterboxError, Result};
use crate::letterbox::Letterbox;
use crate::puzzle::{
    HttpFetcher, PageFetcher, Puzzle, fetch_nyt_puzzle, parse_letters, parse_nyt_page,
};
use crate::session::SolutionView;
use crate::solver::{SearchStrategy, Solution};
use clap::{ArgGroup, Parser};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// NYT Letter Boxed solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["letters", "page", "nyt"])))]
pub struct Cli {
    /// Letters on the box, one group per side
    #[arg(short = 'l', long = "letters", value_name = "top-rgt-lft-btm")]
    pub letters: Option<String>,

    /// Saved copy of the NYT Letter Boxed page to take today's puzzle from
    #[arg(short = 'p', long = "page", value_name = "FILE")]
    pub page: Option<PathBuf>,

    /// Download today's puzzle from the NYT site
    #[arg(short = 'n', long = "nyt")]
    pub nyt: bool,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary", value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Show every second word for each starting word, not only the first
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Browse the solutions in a terminal UI
    #[arg(short = 't', long = "tui")]
    pub tui: bool,

    /// Log debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

impl Cli {
    pub fn strategy(&self) -> SearchStrategy {
        if self.all {
            SearchStrategy::Exhaustive
        } else {
            SearchStrategy::FirstMatch
        }
    }

    /// True when the sides come from an NYT page rather than `--letters`.
    pub fn from_page(&self) -> bool {
        self.nyt || self.page.is_some()
    }

    /// Resolves the sides and the word list from the options, fetching the
    /// live page over HTTP for `--nyt`.
    pub fn load_puzzle(&self) -> Result<Puzzle> {
        self.load_puzzle_with(&HttpFetcher)
    }

    /// Like [`Cli::load_puzzle`], with `fetcher` serving the `--nyt` page.
    ///
    /// The dictionary comes from `--dictionary` if given, else from the page,
    /// else from the default dictionary path.
    pub fn load_puzzle_with<F: PageFetcher + ?Sized>(&self, fetcher: &F) -> Result<Puzzle> {
        let mut puzzle = if self.nyt {
            fetch_nyt_puzzle(fetcher)?
        } else if let Some(path) = &self.page {
            let page = fs::read_to_string(path).map_err(|source| LetterboxError::Io {
                path: path.clone(),
                source,
            })?;
            parse_nyt_page(&page)?
        } else if let Some(letters) = &self.letters {
            Puzzle {
                sides: parse_letters(letters)?,
                dictionary: Vec::new(),
            }
        } else {
            return Err(LetterboxError::malformed("no letters given"));
        };

        match self.dictionary_source(&puzzle) {
            DictionarySource::File(path) => {
                puzzle.dictionary = load_dictionary_from_file(path)?;
            }
            DictionarySource::Page => {}
            DictionarySource::Default => {
                let path = default_dictionary_path()
                    .filter(|path| path.is_file())
                    .ok_or(LetterboxError::MissingDictionary)?;
                info!("Using default dictionary '{}'", path.display());
                puzzle.dictionary = load_dictionary_from_file(&path)?;
            }
        }

        Ok(puzzle)
    }

    fn dictionary_source(&self, puzzle: &Puzzle) -> DictionarySource<'_> {
        if let Some(path) = &self.dictionary {
            return DictionarySource::File(path.as_path());
        }
        if !puzzle.dictionary.is_empty() {
            return DictionarySource::Page;
        }
        if self.from_page() {
            info!("Page has no embedded word list, falling back to the default dictionary");
        }
        DictionarySource::Default
    }
}

/// Where the word list for a run comes from.
#[derive(Debug, PartialEq, Eq)]
enum DictionarySource<'a> {
    File(&'a Path),
    Page,
    Default,
}

/// Prints solutions one per line as `word1 -> word2`.
pub struct CliView<W: Write> {
    out: W,
    show_banner: bool,
}

impl<W: Write> CliView<W> {
    /// `show_banner` prints the puzzle letters first, which is useful when
    /// they came from a page rather than the command line.
    pub fn new(out: W, show_banner: bool) -> Self {
        Self { out, show_banner }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionView for CliView<W> {
    fn display_puzzle(&mut self, letterbox: &Letterbox) -> io::Result<()> {
        if self.show_banner {
            let letters = letterbox.to_string().to_uppercase();
            writeln!(self.out, "\nToday's puzzle is {letters}\n")?;
        }
        Ok(())
    }

    fn display_solutions(&mut self, solutions: &[Solution]) -> io::Result<()> {
        for solution in solutions {
            writeln!(self.out, "{solution}")?;
        }
        writeln!(self.out)
    }

    fn display_no_solutions(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
