// Library error types.
//
// The summarization core is pure computation, so the only failures are caller
// mistakes (an identifier outside the closed set) and a stop-word list that
// could not be loaded at startup. Application code wraps these in anyhow.

use std::path::PathBuf;

use thiserror::Error;

/// Why a stop-word list could not be loaded.
///
/// `Clone` because a failed load is kept by the `Summarizer` and handed back
/// on every Luhn request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StopWordError {
    #[error("stop-word list {} could not be read: {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("stop-word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Errors surfaced to callers of the summarizers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// The identifier is not one of FREQUENCY, LUHN or SUMBASIC.
    #[error("unknown summarizer type: {0:?}")]
    UnknownSummarizer(String),

    /// Luhn needs the stop-word list and it failed to load.
    #[error("Luhn summarizer unavailable: {0}")]
    StopWords(#[from] StopWordError),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
