// Rule-based sentence segmentation for English prose.
//
// Periods that do not end a sentence (honorifics, initials, acronyms, company
// suffixes, web domains) are first swapped for a placeholder, then every
// remaining terminator gets a stop marker after it. Splitting on the stop
// marker and restoring the placeholders yields the sentences in document order.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Stands in for a period that must not end a sentence.
const PERIOD_MARK: &str = "\u{E000}";
/// Marks the end of a sentence.
const STOP_MARK: &str = "\u{E001}";

/// Words and honorifics that start a new sentence after an acronym or suffix.
const STARTERS: &str =
    r"(Mr|Mrs|Ms|Dr|He\s|She\s|It\s|They\s|Their\s|Our\s|We\s|But\s|However\s|That\s|This\s|Wherever)";

/// A sentence and its zero-based position in the segmented document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    index: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Order index, the only key used to put a summary back in document order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

struct Rules {
    prefixes: Regex,
    websites: Regex,
    initials: Regex,
    acronym_then_starter: Regex,
    three_caps: Regex,
    two_caps: Regex,
    suffix_then_starter: Regex,
    suffixes: Regex,
    single_cap: Regex,
}

fn rules() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        // The patterns are constants; a failure here is a programming error.
        let compile = |pattern: &str| {
            Regex::new(pattern).unwrap_or_else(|e| panic!("invalid segmenter pattern {pattern}: {e}"))
        };
        Rules {
            prefixes: compile(r"(Mr|St|Mrs|Ms|Dr)[.]"),
            websites: compile(r"[.](com|net|org|io|gov)"),
            initials: compile(r"\s([A-Z])[.] "),
            acronym_then_starter: compile(&format!(r"([A-Z][.][A-Z][.](?:[A-Z][.])?) {STARTERS}")),
            three_caps: compile(r"([A-Z])[.]([A-Z])[.]([A-Z])[.]"),
            two_caps: compile(r"([A-Z])[.]([A-Z])[.]"),
            suffix_then_starter: compile(&format!(r" (Inc|Ltd|Jr|Sr|Co|Corp)[.] {STARTERS}")),
            suffixes: compile(r" (Inc|Ltd|Jr|Sr|Co|Corp)[.]"),
            single_cap: compile(r" ([A-Z])[.]"),
        }
    })
}

/// Split raw text into trimmed, non-empty sentences in order of appearance.
///
/// An unterminated final fragment is kept as the last sentence. Text with no
/// visible characters yields an empty vector.
pub fn segment(text: &str) -> Vec<Sentence> {
    let marked = mark_boundaries(text);

    marked
        .split(STOP_MARK)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(index, s)| Sentence::new(s, index))
        .collect()
}

/// Convenience for callers that only need the sentence strings.
pub fn segment_texts(text: &str) -> Vec<String> {
    segment(text).into_iter().map(Sentence::into_text).collect()
}

fn mark_boundaries(text: &str) -> String {
    let r = rules();

    let mut text = format!(" {text}  ").replace('\n', " ");

    text = r
        .prefixes
        .replace_all(&text, format!("${{1}}{PERIOD_MARK}"))
        .into_owned();
    text = r
        .websites
        .replace_all(&text, format!("{PERIOD_MARK}${{1}}"))
        .into_owned();
    text = text.replace("Ph.D.", &format!("Ph{PERIOD_MARK}D{PERIOD_MARK}"));
    text = r
        .initials
        .replace_all(&text, format!(" ${{1}}{PERIOD_MARK} "))
        .into_owned();
    text = r
        .acronym_then_starter
        .replace_all(&text, format!("${{1}}{STOP_MARK} ${{2}}"))
        .into_owned();
    text = r
        .three_caps
        .replace_all(
            &text,
            format!("${{1}}{PERIOD_MARK}${{2}}{PERIOD_MARK}${{3}}{PERIOD_MARK}"),
        )
        .into_owned();
    text = r
        .two_caps
        .replace_all(&text, format!("${{1}}{PERIOD_MARK}${{2}}{PERIOD_MARK}"))
        .into_owned();
    text = r
        .suffix_then_starter
        .replace_all(&text, format!(" ${{1}}.{STOP_MARK} ${{2}}"))
        .into_owned();
    text = r
        .suffixes
        .replace_all(&text, format!(" ${{1}}{PERIOD_MARK}"))
        .into_owned();
    text = r
        .single_cap
        .replace_all(&text, format!(" ${{1}}{PERIOD_MARK}"))
        .into_owned();

    // Move terminators outside closing quotes so the quote stays with its sentence
    text = text
        .replace(".\u{201D}", "\u{201D}.")
        .replace(".\"", "\".")
        .replace("!\"", "\"!")
        .replace("?\"", "\"?");

    text = text
        .replace('.', &format!(".{STOP_MARK}"))
        .replace('?', &format!("?{STOP_MARK}"))
        .replace('!', &format!("!{STOP_MARK}"));

    text.replace(PERIOD_MARK, ".")
}
