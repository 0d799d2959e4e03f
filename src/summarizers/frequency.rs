// Frequency summarizer.
//
// A sentence's score is the sum of its words' relative frequencies divided by
// its length in characters, which penalizes long sentences. Sentences with
// fewer than MIN_SENTENCE_WORDS words are never selected.

use tracing::debug;

use super::ranking::{rank_by_score, top_in_document_order, ScoredSentence};
use crate::text::frequency::{tokens, WordFrequencyTable};
use crate::text::segmenter::{segment, Sentence};

pub const DEFAULT_TARGET_COUNT: usize = 3;
pub const MIN_SENTENCE_WORDS: usize = 5;

/// Summarize raw text with the frequency algorithm.
pub fn summarize(text: &str, target_count: usize) -> Vec<String> {
    let sentences = segment(text);
    summarize_sentences(&sentences, target_count)
}

/// Summarize an already segmented document.
pub fn summarize_sentences(sentences: &[Sentence], target_count: usize) -> Vec<String> {
    let table = WordFrequencyTable::from_sentences(sentences);

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .filter(|s| s.word_count() >= MIN_SENTENCE_WORDS)
        .map(|s| ScoredSentence::new(s, score_sentence(s, &table)))
        .collect();

    debug!(
        sentences = sentences.len(),
        candidates = scored.len(),
        target_count,
        "Frequency scoring complete"
    );

    rank_by_score(&mut scored);
    top_in_document_order(scored, target_count)
}

/// Sum of word frequencies, normalized by character length.
pub fn score_sentence(sentence: &Sentence, table: &WordFrequencyTable) -> f64 {
    let len = sentence.char_len();
    if len == 0 {
        return 0.0;
    }
    let total: f64 = tokens(sentence.text()).map(|w| table.get(&w)).sum();
    total / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sentences_are_never_selected() {
        let text = "Short one. Tiny. The market rallied as investors bought shares.";
        let summary = summarize(text, 3);
        assert_eq!(summary, vec!["The market rallied as investors bought shares."]);
    }

    #[test]
    fn prefers_sentences_made_of_frequent_words() {
        let text = "Rust makes systems programming safe and fast. \
                    Rust programming is safe and Rust is fast. \
                    Yesterday my neighbour painted her garden fence green.";
        let summary = summarize(text, 1);
        assert_eq!(summary, vec!["Rust programming is safe and Rust is fast."]);
    }

    #[test]
    fn score_divides_by_character_length() {
        let sentences = segment("aa bb cc dd ee.");
        let table = WordFrequencyTable::from_sentences(&sentences);
        let score = score_sentence(&sentences[0], &table);
        // Five distinct words, each 1/5, over 15 characters
        assert!((score - 1.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn empty_text_gives_empty_summary() {
        assert!(summarize("", DEFAULT_TARGET_COUNT).is_empty());
    }
}
