//! Keyword retrieval and grounded answering.
//!
//! A question is tokenized into terms, documents are scored by whole-word
//! term occurrences, and the selected evidence is handed to the LLM inside a
//! prompt that forbids outside knowledge.

pub mod ask;
pub mod evidence;
pub mod score;
pub mod select;
pub mod snippet;
pub mod terms;
pub mod types;

pub use ask::{AnswerOptions, AnswerService};
pub use evidence::Evidence;
pub use score::{score, ScoredDocument, TermMatcher};
pub use select::select;
pub use snippet::{extract_snippet, SNIPPET_COMBINED_CHARS, SNIPPET_SINGLE_CHARS, TRUNCATION_MARKER};
pub use terms::{tokenize, TermSet, MIN_TERM_CHARS};
pub use types::{AnswerOutcome, AnswerResult, NONE_SENTINEL, NO_DOCUMENTS_ANSWER, NO_EVIDENCE_ANSWER};
