// Summarizers: the three ranking algorithms and the dispatcher over them.
//
// Each algorithm is a pure function from text to sentences. `Summarizer`
// holds what they need from process startup (the stop-word list and the
// per-algorithm sentence counts) and maps a `SummarizerType` to a call.

pub mod frequency;
pub mod luhn;
pub mod ranking;
pub mod sumbasic;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, StopWordError, SummarizeError};
use crate::text::segmenter::segment;
use crate::text::stopwords::StopWords;

pub use types::{Summary, SummarizerType, SummarizerTypeInfo};

/// Dispatches summarization requests. Cheap to clone and safe to share
/// across threads; every call builds its own frequency tables.
#[derive(Debug, Clone)]
pub struct Summarizer {
    /// A failed load is kept so that Luhn reports it on every request
    stop_words: std::result::Result<Arc<StopWords>, StopWordError>,
    target_counts: HashMap<SummarizerType, usize>,
}

impl Summarizer {
    /// Build with a loaded stop-word list and the default sentence counts.
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_stop_words(Ok(Arc::new(stop_words)))
    }

    fn with_stop_words(stop_words: std::result::Result<Arc<StopWords>, StopWordError>) -> Self {
        let target_counts = SummarizerType::ALL
            .into_iter()
            .map(|kind| (kind, kind.default_target_count()))
            .collect();
        Self {
            stop_words,
            target_counts,
        }
    }

    /// Build from configuration, loading the stop-word list once.
    ///
    /// A stop-word list that fails to load disables Luhn only; the other
    /// summarizers keep working.
    pub fn from_config(config: &Config) -> Self {
        let stop_words = match &config.stop_words_path {
            Some(path) => StopWords::from_file(path).map(Arc::new),
            None => Ok(Arc::new(StopWords::english())),
        };

        if let Err(e) = &stop_words {
            warn!(error = %e, "Stop-word list failed to load; Luhn summarizer disabled");
        }

        let mut summarizer = Self::with_stop_words(stop_words);
        for (kind, count) in &config.target_counts {
            summarizer = summarizer.with_target_count(*kind, *count);
        }
        summarizer
    }

    /// Override how many sentences an algorithm selects by default.
    pub fn with_target_count(mut self, kind: SummarizerType, count: usize) -> Self {
        self.target_counts.insert(kind, count);
        self
    }

    pub fn target_count(&self, kind: SummarizerType) -> usize {
        self.target_counts
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_target_count())
    }

    /// The capability listing: every identifier with its configured count.
    pub fn summarizer_types(&self) -> Vec<SummarizerTypeInfo> {
        SummarizerType::ALL
            .into_iter()
            .map(|kind| SummarizerTypeInfo {
                identifier: kind,
                default_sentences: self.target_count(kind),
            })
            .collect()
    }

    /// Summarize with the algorithm's configured sentence count.
    pub fn summarize(&self, text: &str, kind: SummarizerType) -> Result<Summary> {
        self.summarize_with_count(text, kind, self.target_count(kind))
    }

    /// Parse a caller-supplied identifier and summarize. An unknown identifier
    /// is rejected before any text is processed.
    pub fn summarize_identifier(&self, text: &str, identifier: &str) -> Result<Summary> {
        let kind: SummarizerType = identifier.parse()?;
        self.summarize(text, kind)
    }

    /// Summarize selecting at most `target_count` sentences.
    pub fn summarize_with_count(
        &self,
        text: &str,
        kind: SummarizerType,
        target_count: usize,
    ) -> Result<Summary> {
        let sentences = segment(text);
        let selected = match kind {
            SummarizerType::Frequency => frequency::summarize_sentences(&sentences, target_count),
            SummarizerType::Luhn => {
                luhn::summarize_sentences(&sentences, target_count, self.stop_words()?)
            }
            SummarizerType::SumBasic => sumbasic::summarize_sentences(&sentences, target_count),
        };

        info!(
            summarizer = %kind,
            sentences = sentences.len(),
            selected = selected.len(),
            "Summarized document"
        );

        Ok(Summary {
            summarizer_type: kind,
            sentences: selected,
        })
    }

    fn stop_words(&self) -> Result<&StopWords> {
        self.stop_words
            .as_deref()
            .map_err(|e| SummarizeError::StopWords(e.clone()))
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}
