// The closed set of summarization algorithms and the values they produce.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SummarizeError;

/// Which ranking algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SummarizerType {
    Frequency,
    Luhn,
    SumBasic,
}

impl SummarizerType {
    /// Every valid summarizer, in the order they are listed to users.
    pub const ALL: [SummarizerType; 3] = [Self::Frequency, Self::Luhn, Self::SumBasic];

    /// The wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Frequency => "FREQUENCY",
            Self::Luhn => "LUHN",
            Self::SumBasic => "SUMBASIC",
        }
    }

    /// Sentences selected when the caller does not ask for a specific count.
    pub fn default_target_count(self) -> usize {
        match self {
            Self::Frequency => 3,
            Self::Luhn => 3,
            Self::SumBasic => 5,
        }
    }
}

impl fmt::Display for SummarizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummarizerType {
    type Err = SummarizeError;

    /// Only the exact uppercase identifiers are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SummarizeError::UnknownSummarizer(s.to_string()))
    }
}

/// One entry of the capability listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizerTypeInfo {
    pub identifier: SummarizerType,
    pub default_sentences: usize,
}

/// The sentences an algorithm selected, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    #[serde(rename = "summarizerType")]
    pub summarizer_type: SummarizerType,
    #[serde(rename = "summary")]
    pub sentences: Vec<String>,
}

impl Summary {
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
