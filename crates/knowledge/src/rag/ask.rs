//! Question answering orchestration.
//!
//! Tokenizes the question, selects local evidence, and only then pays for an
//! LLM call with a grounded prompt.

use crate::rag::evidence::Evidence;
use crate::rag::select::select;
use crate::rag::terms::tokenize;
use crate::rag::types::AnswerResult;
use crate::store::DocumentStore;
use docqa_core::config::DEFAULT_MAX_EVIDENCE_CHARS;
use docqa_core::{AppConfig, AppError, AppResult, SelectionPolicy};
use docqa_llm::{LlmClient, LlmRequest};
use docqa_prompt::build_grounded_prompt;
use std::sync::Arc;

/// Settings applied to every question.
#[derive(Debug, Clone)]
pub struct AnswerOptions {
    /// Model identifier passed to the LLM
    pub model: String,

    /// How relevant documents are chosen
    pub policy: SelectionPolicy,

    /// Upper bound on evidence characters placed in the prompt
    pub max_evidence_chars: usize,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl AnswerOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            policy: SelectionPolicy::default(),
            max_evidence_chars: DEFAULT_MAX_EVIDENCE_CHARS,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.model.clone(),
            policy: config.retrieval.policy,
            max_evidence_chars: config.retrieval.max_evidence_chars,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_evidence_chars(mut self, max_evidence_chars: usize) -> Self {
        self.max_evidence_chars = max_evidence_chars;
        self
    }
}

/// Answers questions from stored documents.
///
/// Holds no per-question state, so one instance can serve concurrent
/// questions.
pub struct AnswerService {
    store: Arc<dyn DocumentStore>,
    llm: Arc<dyn LlmClient>,
    options: AnswerOptions,
}

impl AnswerService {
    pub fn new(store: Arc<dyn DocumentStore>, llm: Arc<dyn LlmClient>, options: AnswerOptions) -> Self {
        Self {
            store,
            llm,
            options,
        }
    }

    /// Answer `question` from the stored documents.
    ///
    /// Returns a sentinel result without calling the LLM when the store is
    /// empty or no document matches.
    ///
    /// # Errors
    /// - `AppError::InvalidInput` if the question is blank
    /// - `AppError::StoreUnavailable` if documents cannot be fetched
    /// - `AppError::Upstream` if the LLM call fails
    pub async fn answer_question(&self, question: &str) -> AppResult<AnswerResult> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::InvalidInput("Question is required".to_string()));
        }

        let terms = tokenize(question);
        tracing::info!(
            policy = %self.options.policy,
            "Answering question with {} term(s)",
            terms.len()
        );

        let documents = self.store.fetch_all_documents().await?;
        if documents.is_empty() {
            tracing::info!("Document store is empty, skipping LLM call");
            return Ok(AnswerResult::no_documents());
        }

        let selected = select(&documents, &terms, self.options.policy);
        if selected.is_empty() {
            tracing::info!(
                "No evidence among {} documents, skipping LLM call",
                documents.len()
            );
            return Ok(AnswerResult::no_evidence());
        }

        let evidence = Evidence::assemble(selected, &terms, self.options.max_evidence_chars);
        if evidence.is_empty() {
            tracing::info!("No matching evidence fits the cap, skipping LLM call");
            return Ok(AnswerResult::no_evidence());
        }

        let prompt = build_grounded_prompt(&evidence.to_documents(), question)?;

        tracing::debug!(
            "Prompt {} built from [{}] ({} evidence chars, degraded: {})",
            prompt.metadata.template_id,
            evidence.source_names(),
            prompt.metadata.evidence_chars,
            evidence.degraded
        );

        let mut request =
            LlmRequest::new(prompt.user, &self.options.model).with_system(prompt.system);
        if let Some(temperature) = self.options.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.options.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let response = self.llm.complete(&request).await.map_err(|e| match e {
            AppError::Upstream(_) => e,
            other => AppError::Upstream(other.to_string()),
        })?;

        tracing::info!(
            "Answered from {} document(s) via {}",
            evidence.documents.len(),
            self.llm.provider_name()
        );

        Ok(AnswerResult::answered(
            response.content.trim(),
            evidence.source_names(),
            evidence.snippet,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_config() {
        let mut config = AppConfig::default();
        config.model = "mistral".to_string();
        config.retrieval.policy = SelectionPolicy::BestMatch;
        config.retrieval.max_evidence_chars = 500;

        let options = AnswerOptions::from_config(&config);
        assert_eq!(options.model, "mistral");
        assert_eq!(options.policy, SelectionPolicy::BestMatch);
        assert_eq!(options.max_evidence_chars, 500);
    }

    #[test]
    fn test_options_builders() {
        let options = AnswerOptions::new("llama3.2")
            .with_policy(SelectionPolicy::BestMatch)
            .with_max_evidence_chars(42);

        assert_eq!(options.policy, SelectionPolicy::BestMatch);
        assert_eq!(options.max_evidence_chars, 42);
        assert_eq!(options.temperature, None);
    }
}
