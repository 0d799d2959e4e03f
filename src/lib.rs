// Tidbit: extractive summarization of article text.
//
// This is the library root. Each module corresponds to a stage of the
// summarization pipeline: text preparation, the ranking algorithms, batch
// execution and output formatting.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod summarizers;
pub mod text;

pub use error::{StopWordError, SummarizeError};
pub use summarizers::{Summarizer, SummarizerType, Summary};
