//! Answer result types.

use docqa_prompt::REFUSAL_PHRASE;
use serde::{Deserialize, Serialize};

/// Placeholder for `source` and `snippet` when no evidence was used.
pub const NONE_SENTINEL: &str = "-";

/// Answer when the store holds no documents at all.
pub const NO_DOCUMENTS_ANSWER: &str = "No documents available.";

/// Answer when no stored document matches the question.
pub const NO_EVIDENCE_ANSWER: &str =
    "I don't know. (The answer is not present in the uploaded documents.)";

/// How a question reached its terminal answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerOutcome {
    /// The LLM answered from local evidence
    #[default]
    Answered,

    /// The store was empty; the LLM was not called
    NoDocuments,

    /// No document matched the question; the LLM was not called
    NoEvidence,
}

/// The answer/source/snippet triple returned for a question.
///
/// Built once by the answer service and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    answer: String,
    source: String,
    snippet: String,
    #[serde(skip)]
    outcome: AnswerOutcome,
}

impl AnswerResult {
    /// An answer produced by the LLM from the named sources.
    pub fn answered(
        answer: impl Into<String>,
        source: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            answer: answer.into(),
            source: source.into(),
            snippet: snippet.into(),
            outcome: AnswerOutcome::Answered,
        }
    }

    pub fn no_documents() -> Self {
        Self::sentinel(NO_DOCUMENTS_ANSWER, AnswerOutcome::NoDocuments)
    }

    pub fn no_evidence() -> Self {
        Self::sentinel(NO_EVIDENCE_ANSWER, AnswerOutcome::NoEvidence)
    }

    fn sentinel(answer: &str, outcome: AnswerOutcome) -> Self {
        Self {
            answer: answer.to_string(),
            source: NONE_SENTINEL.to_string(),
            snippet: NONE_SENTINEL.to_string(),
            outcome,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn outcome(&self) -> AnswerOutcome {
        self.outcome
    }

    /// Whether the answer is a refusal, from local evidence or from the LLM.
    pub fn is_refusal(&self) -> bool {
        self.outcome == AnswerOutcome::NoEvidence || self.answer.starts_with(REFUSAL_PHRASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_documents_sentinel() {
        let result = AnswerResult::no_documents();
        assert_eq!(result.answer(), "No documents available.");
        assert_eq!(result.source(), "-");
        assert_eq!(result.snippet(), "-");
        assert_eq!(result.outcome(), AnswerOutcome::NoDocuments);
        assert!(!result.is_refusal());
    }

    #[test]
    fn test_no_evidence_sentinel_starts_with_refusal_phrase() {
        let result = AnswerResult::no_evidence();
        assert!(result.answer().starts_with(REFUSAL_PHRASE));
        assert_eq!(result.source(), NONE_SENTINEL);
        assert_eq!(result.outcome(), AnswerOutcome::NoEvidence);
        assert!(result.is_refusal());
    }

    #[test]
    fn test_llm_refusal_is_detected() {
        let result = AnswerResult::answered("I don't know.", "A", "The sky is blue.");
        assert_eq!(result.outcome(), AnswerOutcome::Answered);
        assert!(result.is_refusal());
    }

    #[test]
    fn test_serialization_shape() {
        let result = AnswerResult::answered("Blue.", "A, B", "The sky is blue.");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "answer": "Blue.",
                "source": "A, B",
                "snippet": "The sky is blue."
            })
        );
    }
}
