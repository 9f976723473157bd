//! Prompt types for docqa.

use serde::{Deserialize, Serialize};

/// A fully built prompt ready for LLM execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// System message
    pub system: String,

    /// User message (required)
    pub user: String,

    /// Metadata about the built prompt
    pub metadata: BuiltPromptMetadata,
}

/// Metadata about a built prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltPromptMetadata {
    /// Template the prompt was rendered from
    #[serde(rename = "templateId")]
    pub template_id: String,

    /// Names of the documents embedded as evidence, in prompt order
    #[serde(rename = "documentNames")]
    pub document_names: Vec<String>,

    /// Characters of document content embedded
    #[serde(rename = "evidenceChars")]
    pub evidence_chars: usize,
}

impl BuiltPrompt {
    /// Create a new built prompt.
    pub fn new(
        system: String,
        user: String,
        template_id: impl Into<String>,
        document_names: Vec<String>,
        evidence_chars: usize,
    ) -> Self {
        Self {
            system,
            user,
            metadata: BuiltPromptMetadata {
                template_id: template_id.into(),
                document_names,
                evidence_chars,
            },
        }
    }
}
