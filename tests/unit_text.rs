// Unit tests for text preparation: segmentation, word frequencies, stop words.
//
// Everything here is pure and deterministic; no files are touched except the
// temporary stop-word lists.

use std::io::Write;

use tidbit::text::frequency::{normalize_token, tokens, WordFrequencyTable};
use tidbit::text::segmenter::{segment, segment_texts};
use tidbit::text::stopwords::StopWords;
use tidbit::StopWordError;

// ============================================================
// Segmenter: abbreviations and boundaries
// ============================================================

#[test]
fn honorific_then_pronoun_sentence() {
    let s = segment_texts("Dr. Smith went home. He left at 5 p.m. yesterday.");
    assert_eq!(s[0], "Dr. Smith went home.");
    assert!(s[1].starts_with("He left at 5"));
    assert!(s.iter().all(|sentence| !sentence.ends_with("Dr.")));
}

#[test]
fn every_honorific_is_protected() {
    for honorific in ["Mr.", "Mrs.", "Ms.", "Dr.", "St."] {
        let text = format!("We met {honorific} Jones today. It was brief.");
        let s = segment_texts(&text);
        assert_eq!(s.len(), 2, "{honorific} split the sentence: {s:?}");
        assert_eq!(s[0], format!("We met {honorific} Jones today."));
    }
}

#[test]
fn initials_are_not_boundaries() {
    let s = segment_texts("The novel by J. Smith sold well. Critics agreed.");
    assert_eq!(s, vec!["The novel by J. Smith sold well.", "Critics agreed."]);
}

#[test]
fn two_letter_acronym_before_starter_splits() {
    let s = segment_texts("The talks were held in the U.K. They ended early.");
    assert_eq!(s, vec!["The talks were held in the U.K.", "They ended early."]);
}

#[test]
fn three_letter_acronym_mid_sentence() {
    let s = segment_texts("Officials in the U.S.A. economy office declined to comment.");
    assert_eq!(s.len(), 1);
}

#[test]
fn every_domain_suffix_is_protected() {
    for tld in ["com", "net", "org", "io", "gov"] {
        let text = format!("See data.{tld} for more. Then decide.");
        let s = segment_texts(&text);
        assert_eq!(s.len(), 2, ".{tld} split the sentence: {s:?}");
        assert_eq!(s[0], format!("See data.{tld} for more."));
    }
}

#[test]
fn suffix_followed_by_however_splits() {
    let s = segment_texts("The deal closed with Globex Corp. However the price was not disclosed.");
    assert_eq!(
        s,
        vec![
            "The deal closed with Globex Corp.",
            "However the price was not disclosed."
        ]
    );
}

#[test]
fn junior_mid_sentence_is_kept() {
    let s = segment_texts("Martin Luther King Jr. spoke in Washington. Crowds listened.");
    assert_eq!(
        s,
        vec!["Martin Luther King Jr. spoke in Washington.", "Crowds listened."]
    );
}

#[test]
fn curly_quotes_keep_the_closing_quote() {
    let s = segment_texts("She said “we won.” Everyone cheered.");
    assert_eq!(s, vec!["She said “we won”.", "Everyone cheered."]);
}

#[test]
fn question_and_exclamation_inside_quotes() {
    let s = segment_texts("He asked \"why?\" Nobody answered. She yelled \"run!\" They ran.");
    assert_eq!(
        s,
        vec![
            "He asked \"why\"?",
            "Nobody answered.",
            "She yelled \"run\"!",
            "They ran."
        ]
    );
}

#[test]
fn order_indices_are_consecutive_from_zero() {
    let sentences = segment("A first one. A second one? A third one! A fourth one.");
    for (expected, sentence) in sentences.iter().enumerate() {
        assert_eq!(sentence.index(), expected);
    }
}

#[test]
fn sentences_are_trimmed() {
    let sentences = segment("   Padded sentence.     Another one.   ");
    assert_eq!(sentences[0].text(), "Padded sentence.");
    assert_eq!(sentences[1].text(), "Another one.");
}

#[test]
fn whitespace_only_text_is_empty() {
    assert!(segment(" \n \n ").is_empty());
}

// ============================================================
// Word frequency table
// ============================================================

#[test]
fn two_word_sentence_repeated_sums_to_one() {
    let sentences = segment("Hello world. Hello world. Hello world.");
    let table = WordFrequencyTable::from_sentences(&sentences);
    assert_eq!(table.len(), 2);
    let sum: f64 = table.iter().map(|(_, f)| f).sum();
    assert!((sum - 1.0).abs() < 1e-12, "sum was {sum}");
    assert!((table.get("hello") - 0.5).abs() < 1e-12);
    assert!((table.get("world") - 0.5).abs() < 1e-12);
}

#[test]
fn frequencies_sum_to_one_on_prose() {
    let sentences = segment(
        "The committee met on Tuesday. Its members (all seven) voted! \
         Was the outcome expected? Most observers said yes, eventually.",
    );
    let table = WordFrequencyTable::from_sentences(&sentences);
    let sum: f64 = table.iter().map(|(_, f)| f).sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    assert!(table.iter().all(|(_, f)| f > 0.0 && f <= 1.0));
}

#[test]
fn punctuation_variants_collapse_to_one_word() {
    let sentences = segment("Budget, budget! (Budget) budget?");
    let table = WordFrequencyTable::from_sentences(&sentences);
    assert!((table.get("budget") - 1.0).abs() < 1e-12);
}

#[test]
fn tokens_normalize_each_word() {
    let words: Vec<String> = tokens("The (Big) Dog, barked!").collect();
    assert_eq!(words, vec!["the", "big", "dog", "barked"]);
    assert_eq!(normalize_token("\nEnd."), "end");
}

// ============================================================
// Stop words
// ============================================================

#[test]
fn custom_list_replaces_bundled_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "foo bar\nbaz").unwrap();
    let sw = StopWords::from_file(file.path()).unwrap();
    assert!(sw.is_stop_word("baz"));
    assert!(!sw.is_stop_word("the"));
}

#[test]
fn whitespace_only_list_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "   \n\n  ").unwrap();
    assert!(matches!(
        StopWords::from_file(file.path()),
        Err(StopWordError::Empty { .. })
    ));
}
