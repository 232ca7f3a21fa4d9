use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LetterboxError>;

#[derive(Debug, Error)]
pub enum LetterboxError {
    #[error("Malformed box: {reason}")]
    MalformedBox { reason: String },

    #[error("Letter '{0}' is not on any side of the box")]
    NotInBox(char),

    #[error("Dictionary contains no words")]
    EmptyDictionary,

    #[error("No dictionary given and none found at the default location")]
    MissingDictionary,

    #[error("Unable to find puzzle sides in page")]
    PuzzleNotFound,

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LetterboxError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedBox {
            reason: reason.into(),
        }
    }
}
