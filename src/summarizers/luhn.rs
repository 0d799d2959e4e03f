// Luhn summarizer.
//
// "Significant" words are non-stop-words whose relative frequency falls
// strictly inside (MIN_FREQ, MAX_FREQ). Each sentence is scored by how many
// significant words it holds relative to the widest gap between two
// consecutive significant words:
//
//   score = significant_count^2 / max_gap
//
// When no gap is ever recorded (zero or one significant word) the score is
// f64::MAX, so sparse sentences with a single signal word always rank first.

use std::collections::HashSet;

use tracing::debug;

use super::ranking::{rank_by_score, top_in_document_order, ScoredSentence};
use crate::text::frequency::{tokens, WordFrequencyTable, STRIP_CHARS};
use crate::text::segmenter::{segment, Sentence};
use crate::text::stopwords::StopWords;

pub const DEFAULT_TARGET_COUNT: usize = 3;
pub const MIN_FREQ: f64 = 0.001;
pub const MAX_FREQ: f64 = 0.5;
/// Sentences shorter than this (in characters, ignoring edge punctuation)
/// score zero and are never selected.
pub const MIN_SENTENCE_CHARS: usize = 5;

/// Summarize raw text with Luhn's significance algorithm.
pub fn summarize(text: &str, target_count: usize, stop_words: &StopWords) -> Vec<String> {
    let sentences = segment(text);
    summarize_sentences(&sentences, target_count, stop_words)
}

/// Summarize an already segmented document.
pub fn summarize_sentences(
    sentences: &[Sentence],
    target_count: usize,
    stop_words: &StopWords,
) -> Vec<String> {
    let table = WordFrequencyTable::from_sentences(sentences);
    let significant = significant_words(&table, stop_words);

    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .map(|s| ScoredSentence::new(s, score_sentence(s, &significant)))
        .collect();
    rank_by_score(&mut scored);

    // Too-short sentences take part in the sort but never in the selection
    let eligible: Vec<ScoredSentence> = scored
        .into_iter()
        .filter(|s| !is_too_short(&s.text))
        .collect();

    debug!(
        sentences = sentences.len(),
        significant_words = significant.len(),
        eligible = eligible.len(),
        target_count,
        "Luhn scoring complete"
    );

    top_in_document_order(eligible, target_count)
}

/// Words that are neither stop words nor too rare or too common.
pub fn significant_words(table: &WordFrequencyTable, stop_words: &StopWords) -> HashSet<String> {
    table
        .iter()
        .filter(|&(word, freq)| !stop_words.is_stop_word(word) && freq > MIN_FREQ && freq < MAX_FREQ)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Score one sentence against the significant-word set.
pub fn score_sentence(sentence: &Sentence, significant: &HashSet<String>) -> f64 {
    if is_too_short(sentence.text()) {
        return 0.0;
    }

    let mut count: u64 = 0;
    let mut max_gap: usize = 0;
    let mut last_position: Option<usize> = None;

    for (position, word) in tokens(sentence.text()).enumerate() {
        if !significant.contains(&word) {
            continue;
        }
        count += 1;
        if let Some(last) = last_position {
            max_gap = max_gap.max(position - last);
        }
        last_position = Some(position);
    }

    if max_gap == 0 {
        f64::MAX
    } else {
        (count * count) as f64 / max_gap as f64
    }
}

fn is_too_short(text: &str) -> bool {
    text.trim_matches(STRIP_CHARS).chars().count() < MIN_SENTENCE_CHARS
}
