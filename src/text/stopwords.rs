// Stop-word list used by the Luhn summarizer to discard function words.
//
// The default list is the English list shipped with the `stop-words` crate.
// A plain-text list (whitespace-separated words) can be loaded instead; a
// list that is missing or empty is an error, never an empty filter.

use std::collections::HashSet;
use std::path::Path;

use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::error::StopWordError;

/// A fixed set of lowercase stop words.
#[derive(Debug, Clone, PartialEq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The bundled English list.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// Build from any collection of words (lowercased on the way in).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Load a whitespace-separated word list from disk.
    pub fn from_file(path: &Path) -> Result<Self, StopWordError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StopWordError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let list = Self::from_words(contents.split_whitespace());
        if list.is_empty() {
            return Err(StopWordError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), words = list.len(), "Loaded stop-word list");
        Ok(list)
    }

    /// Check a normalized (lowercase) word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_list_covers_function_words() {
        let sw = StopWords::english();
        assert!(!sw.is_empty());
        assert!(sw.is_stop_word("the"));
        assert!(sw.is_stop_word("and"));
        assert!(!sw.is_stop_word("summarization"));
    }

    #[test]
    fn from_words_lowercases() {
        let sw = StopWords::from_words(["The", "OF"]);
        assert!(sw.is_stop_word("the"));
        assert!(sw.is_stop_word("of"));
        assert_eq!(sw.len(), 2);
    }

    #[test]
    fn from_file_reads_one_word_per_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a\nan\nthe").unwrap();
        let sw = StopWords::from_file(file.path()).unwrap();
        assert_eq!(sw.len(), 3);
        assert!(sw.is_stop_word("an"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = StopWords::from_file(Path::new("/nonexistent/stop-word-list.txt")).unwrap_err();
        assert!(matches!(err, StopWordError::Unreadable { .. }));
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = StopWords::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StopWordError::Empty { .. }));
    }
}
