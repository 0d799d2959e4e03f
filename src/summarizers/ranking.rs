// Scored sentences and the shared "top N, back in document order" step.

use std::cmp::Ordering;

use crate::text::segmenter::Sentence;

/// A sentence with the score an algorithm gave it. Lives only for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub text: String,
    pub score: f64,
    pub index: usize,
}

impl ScoredSentence {
    pub fn new(sentence: &Sentence, score: f64) -> Self {
        Self {
            text: sentence.text().to_string(),
            score,
            index: sentence.index(),
        }
    }
}

/// Sort highest score first. The sort is stable, so equal scores keep
/// document order and the top-N cutoff is deterministic.
pub fn rank_by_score(scored: &mut [ScoredSentence]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Keep the first `target_count` of an already ranked list and return their
/// text re-sorted by order index.
pub fn top_in_document_order(mut ranked: Vec<ScoredSentence>, target_count: usize) -> Vec<String> {
    ranked.truncate(target_count);
    into_document_order(ranked)
}

/// Re-sort selected sentences by order index and drop the scores.
pub fn into_document_order(mut selected: Vec<ScoredSentence>) -> Vec<String> {
    selected.sort_by_key(|s| s.index);
    selected.into_iter().map(|s| s.text).collect()
}
