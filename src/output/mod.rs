// Output formatting: terminal display and JSON payloads.

pub mod json;
pub mod terminal;

/// Shorten a sentence for preview output, cutting on a char boundary and
/// appending "..." when anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
