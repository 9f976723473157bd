//! Grounded prompt assembly for docqa.
//!
//! This crate turns selected evidence documents and a question into the exact
//! instruction text sent to the LLM:
//! - Handlebars templates for single- and multi-document evidence
//! - Grounding rules with a stable refusal phrase
//! - Combined evidence text with labeled document boundaries

pub mod builder;
pub mod templates;
pub mod types;

// Re-export main types
pub use builder::{build_grounded_prompt, combine_documents};
pub use templates::{DOCUMENT_DELIMITER, REFUSAL_PHRASE};
pub use types::{BuiltPrompt, BuiltPromptMetadata};
