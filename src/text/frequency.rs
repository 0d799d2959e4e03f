// Relative word frequencies over a segmented document.
//
// Tokens are whitespace-delimited words with surrounding punctuation stripped
// and lowercased. A word's relative frequency is its count divided by the
// total token count of the whole document, so the table always sums to 1.0.

use std::collections::HashMap;

use super::segmenter::Sentence;

/// Characters stripped from both ends of every token.
pub const STRIP_CHARS: &[char] = &['.', '!', '?', ',', '(', ')', '\n'];

/// Normalize a raw whitespace-delimited token.
pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(STRIP_CHARS).to_lowercase()
}

/// Iterate over the normalized tokens of a piece of text.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(normalize_token)
}

/// Word -> relative frequency, built fresh for every summarization call.
///
/// Words are also kept in first-seen order so that anything picking "the"
/// most frequent word breaks ties the same way on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    frequencies: HashMap<String, f64>,
    order: Vec<String>,
    total_tokens: usize,
}

impl WordFrequencyTable {
    /// Count every token across all sentences.
    pub fn from_sentences(sentences: &[Sentence]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order = Vec::new();
        let mut total_tokens = 0;

        for sentence in sentences {
            for word in tokens(sentence.text()) {
                total_tokens += 1;
                match counts.get_mut(&word) {
                    Some(count) => *count += 1,
                    None => {
                        order.push(word.clone());
                        counts.insert(word, 1);
                    }
                }
            }
        }

        let frequencies = counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / total_tokens as f64))
            .collect();

        Self {
            frequencies,
            order,
            total_tokens,
        }
    }

    /// Relative frequency of a normalized word, 0.0 if it never appeared.
    pub fn get(&self, word: &str) -> f64 {
        self.frequencies.get(word).copied().unwrap_or(0.0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// (word, frequency) pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.get(word)))
    }

    /// Owned copy of the word -> frequency mapping, for callers that mutate it.
    pub fn to_map(&self) -> HashMap<String, f64> {
        self.frequencies.clone()
    }

    /// Words in first-seen order.
    pub fn words(&self) -> &[String] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segmenter::segment;

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize_token("(Hello,"), "hello");
        assert_eq!(normalize_token("World!?"), "world");
        assert_eq!(normalize_token("don't"), "don't");
        assert_eq!(normalize_token("..."), "");
    }

    #[test]
    fn frequencies_are_relative_to_whole_document() {
        let table = WordFrequencyTable::from_sentences(&segment("The cat sat. The dog ran."));
        assert_eq!(table.total_tokens(), 6);
        assert!((table.get("the") - 2.0 / 6.0).abs() < 1e-12);
        assert!((table.get("cat") - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(table.get("missing"), 0.0);
    }

    #[test]
    fn first_seen_order_is_kept() {
        let table = WordFrequencyTable::from_sentences(&segment("Beta alpha beta. Gamma."));
        assert_eq!(table.words(), &["beta", "alpha", "gamma"]);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = WordFrequencyTable::from_sentences(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total_tokens(), 0);
    }
}
