//! Bounded evidence excerpts.

use crate::rag::terms::TermSet;

/// Appended when an excerpt stops before the end of the text.
pub const TRUNCATION_MARKER: &str = "...";

/// Snippet limit when the evidence is a single document.
pub const SNIPPET_SINGLE_CHARS: usize = 300;

/// Snippet limit when the evidence combines several documents.
pub const SNIPPET_COMBINED_CHARS: usize = 500;

/// Cut an excerpt of at most `max_chars` characters from `text`.
///
/// The window is anchored on the first term (in term-set order) found
/// case-insensitively in the text, starting `max_chars * 2 / 5` characters
/// before the match. Without a match the excerpt is the start of the text.
/// [`TRUNCATION_MARKER`] is appended when the window ends before the text does.
pub fn extract_snippet(text: &str, terms: &TermSet, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let before = max_chars * 2 / 5;
    let after = max_chars - before;

    let anchor = terms
        .iter()
        .find_map(|term| find_case_insensitive(&chars, term));

    let (start, end) = match anchor {
        Some(idx) => (idx.saturating_sub(before), (idx + after).min(chars.len())),
        None => (0, max_chars.min(chars.len())),
    };

    let mut snippet: String = chars[start..end].iter().collect();
    if end < chars.len() {
        snippet.push_str(TRUNCATION_MARKER);
    }
    snippet
}

/// Character index of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.to_lowercase().chars().collect();
    if needle.is_empty() {
        return None;
    }

    (0..haystack.len()).find(|&start| {
        let mut lowered = haystack[start..].iter().flat_map(|c| c.to_lowercase());
        needle.iter().all(|n| lowered.next() == Some(*n))
    })
}
