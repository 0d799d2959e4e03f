// SumBasic summarizer.
//
// Word probabilities start as the document's relative frequencies. Sentences
// are ranked once by their average word probability. Then, repeatedly, the
// most probable word is taken and the best-ranked unselected sentence holding
// it joins the summary; every word of that sentence has its probability
// squared so repeated content loses weight quickly.
//
// The sentence ranking is computed once and is not refreshed as word
// probabilities change.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::ranking::{into_document_order, rank_by_score, ScoredSentence};
use crate::text::frequency::{tokens, WordFrequencyTable};
use crate::text::segmenter::{segment, Sentence};

pub const DEFAULT_TARGET_COUNT: usize = 5;
pub const MIN_SENTENCE_WORDS: usize = 5;

/// Summarize raw text with SumBasic.
pub fn summarize(text: &str, target_count: usize) -> Vec<String> {
    let sentences = segment(text);
    summarize_sentences(&sentences, target_count)
}

/// Summarize an already segmented document.
///
/// A document with no more than `target_count` sentences is returned whole.
pub fn summarize_sentences(sentences: &[Sentence], target_count: usize) -> Vec<String> {
    if sentences.len() <= target_count {
        return sentences.iter().map(|s| s.text().to_string()).collect();
    }

    let table = WordFrequencyTable::from_sentences(sentences);
    // Private working copy; the table itself is never mutated
    let mut probabilities = table.to_map();

    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .map(|s| ScoredSentence::new(s, score_sentence(s, &table)))
        .collect();
    rank_by_score(&mut ranked);

    let ranked_words: Vec<Vec<String>> = ranked.iter().map(|s| tokens(&s.text).collect()).collect();
    let mut chosen = vec![false; ranked.len()];
    let mut exhausted: HashSet<String> = HashSet::new();
    let mut selected = Vec::with_capacity(target_count);

    while selected.len() < target_count {
        let Some(word) = highest_probability_word(table.words(), &probabilities, &exhausted) else {
            break;
        };

        let hit = (0..ranked.len()).find(|&i| !chosen[i] && ranked_words[i].contains(&word));
        let Some(i) = hit else {
            // Every sentence holding this word is already in the summary
            exhausted.insert(word);
            continue;
        };

        chosen[i] = true;
        for w in &ranked_words[i] {
            if let Some(p) = probabilities.get_mut(w) {
                *p *= *p;
            }
        }
        selected.push(ranked[i].clone());
    }

    debug!(
        sentences = sentences.len(),
        selected = selected.len(),
        exhausted_words = exhausted.len(),
        target_count,
        "SumBasic selection complete"
    );

    into_document_order(selected)
}

/// Average word probability. Sentences under MIN_SENTENCE_WORDS words score 0.
pub fn score_sentence(sentence: &Sentence, table: &WordFrequencyTable) -> f64 {
    let num_words = sentence.word_count();
    if num_words < MIN_SENTENCE_WORDS {
        return 0.0;
    }
    tokens(sentence.text())
        .map(|w| table.get(&w) / num_words as f64)
        .sum()
}

/// The most probable word not yet exhausted. Ties go to the word seen first.
fn highest_probability_word(
    words: &[String],
    probabilities: &HashMap<String, f64>,
    exhausted: &HashSet<String>,
) -> Option<String> {
    let mut best: Option<(&String, f64)> = None;
    for word in words.iter().filter(|w| !exhausted.contains(*w)) {
        let p = probabilities.get(word).copied().unwrap_or(0.0);
        if best.map_or(true, |(_, best_p)| p > best_p) {
            best = Some((word, p));
        }
    }
    best.map(|(word, _)| word.clone())
}
