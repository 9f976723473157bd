//! Evidence assembly and size capping.

use crate::rag::score::{ScoredDocument, TermMatcher};
use crate::rag::snippet::{extract_snippet, SNIPPET_COMBINED_CHARS, SNIPPET_SINGLE_CHARS};
use crate::rag::terms::TermSet;
use docqa_core::Document;
use docqa_prompt::combine_documents;

/// Documents judged relevant to a question, plus the text derived from them.
#[derive(Debug, Clone)]
pub struct Evidence {
    /// Selected documents, in selection order
    pub documents: Vec<ScoredDocument>,

    /// Single document content, or all documents under labeled headers
    pub combined_text: String,

    /// Bounded excerpt of `combined_text`
    pub snippet: String,

    /// Whether the cap dropped or shortened any selected document
    pub degraded: bool,
}

impl Evidence {
    /// Build evidence from selected documents, keeping at most
    /// `max_chars` characters of document content.
    pub fn assemble(selected: Vec<ScoredDocument>, terms: &TermSet, max_chars: usize) -> Self {
        let (documents, degraded) = cap_evidence(selected, terms, max_chars);

        let (combined_text, snippet_chars) = match documents.as_slice() {
            [single] => (single.document.content.clone(), SNIPPET_SINGLE_CHARS),
            many => (
                combine_documents(&many.iter().map(|s| s.document.clone()).collect::<Vec<_>>()),
                SNIPPET_COMBINED_CHARS,
            ),
        };
        let snippet = extract_snippet(&combined_text, terms, snippet_chars);

        Self {
            documents,
            combined_text,
            snippet,
            degraded,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The selected documents, for prompt assembly.
    pub fn to_documents(&self) -> Vec<Document> {
        self.documents.iter().map(|s| s.document.clone()).collect()
    }

    /// Display names of the contributing documents, comma-joined.
    pub fn source_names(&self) -> String {
        self.documents
            .iter()
            .map(|s| s.document.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Drop lowest-scoring documents until the content fits in `max_chars`.
///
/// Among equal scores the later document goes first. A lone document that
/// still does not fit is cut to a `max_chars` window around its first
/// whole-word match, with the same lead-in ratio as snippets. If the window
/// no longer scores against `terms` the document is dropped.
fn cap_evidence(
    mut documents: Vec<ScoredDocument>,
    terms: &TermSet,
    max_chars: usize,
) -> (Vec<ScoredDocument>, bool) {
    let total_chars =
        |docs: &[ScoredDocument]| docs.iter().map(|s| s.document.content.chars().count()).sum::<usize>();

    let mut degraded = false;

    while documents.len() > 1 && total_chars(&documents) > max_chars {
        let Some(weakest) = documents
            .iter()
            .enumerate()
            .min_by(|(ia, a), (ib, b)| a.score.cmp(&b.score).then(ib.cmp(ia)))
            .map(|(i, _)| i)
        else {
            break;
        };

        let dropped = documents.remove(weakest);
        tracing::warn!(
            "Evidence over {} chars, dropping '{}' (score {})",
            max_chars,
            dropped.document.name,
            dropped.score
        );
        degraded = true;
    }

    let mut unmatched = false;
    if let [only] = documents.as_mut_slice() {
        if only.document.content.chars().count() > max_chars {
            let matcher = TermMatcher::new(terms);
            only.document.content = match_window(&only.document.content, &matcher, max_chars);
            only.score = matcher.score(&only.document.content);
            tracing::warn!(
                "Cut '{}' to {} chars of evidence (score now {})",
                only.document.name,
                max_chars,
                only.score
            );
            degraded = true;
            unmatched = only.score == 0;
        }
    }

    if unmatched {
        tracing::warn!("No matching text fits in {} chars, dropping evidence", max_chars);
        documents.clear();
    }

    (documents, degraded)
}

/// `max_chars` characters of `text` around the first whole-word match.
fn match_window(text: &str, matcher: &TermMatcher, max_chars: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let anchor = matcher
        .first_match(text)
        .map_or(0, |byte| text[..byte].chars().count());

    let start = anchor
        .saturating_sub(max_chars * 2 / 5)
        .min(chars.len().saturating_sub(max_chars));
    let end = (start + max_chars).min(chars.len());

    chars[start..end].iter().collect()
}
