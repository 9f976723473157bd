//! Grounded prompt builder.

use crate::templates::{
    DOCUMENT_DELIMITER, GROUNDING_RULES, MULTI_DOCUMENT_ID, MULTI_DOCUMENT_TEMPLATE,
    REFUSAL_PHRASE, SINGLE_DOCUMENT_ID, SINGLE_DOCUMENT_TEMPLATE, SYSTEM_TEMPLATE,
};
use crate::types::BuiltPrompt;
use docqa_core::{AppError, AppResult, Document};
use handlebars::Handlebars;
use std::collections::HashMap;

/// Build the prompt that asks the LLM to answer `question` from `documents` only.
///
/// A single document is embedded verbatim under a `Document:` section.
/// Several documents are embedded as combined evidence (see
/// [`combine_documents`]). Either way the prompt carries the grounding rules
/// and the refusal phrase.
///
/// # Errors
/// Returns `AppError::Prompt` when `documents` is empty or rendering fails.
///
/// # Example
/// ```
/// use docqa_core::Document;
/// use docqa_prompt::build_grounded_prompt;
///
/// let docs = vec![Document::new("1", "A", "The sky is blue.")];
/// let built = build_grounded_prompt(&docs, "What color is the sky?").unwrap();
/// assert!(built.user.contains("The sky is blue."));
/// ```
pub fn build_grounded_prompt(documents: &[Document], question: &str) -> AppResult<BuiltPrompt> {
    let (template_id, template, evidence_key, evidence) = match documents {
        [] => {
            return Err(AppError::Prompt(
                "Cannot build a grounded prompt without evidence".to_string(),
            ))
        }
        [single] => (
            SINGLE_DOCUMENT_ID,
            SINGLE_DOCUMENT_TEMPLATE,
            "document",
            single.content.clone(),
        ),
        many => (
            MULTI_DOCUMENT_ID,
            MULTI_DOCUMENT_TEMPLATE,
            "documents",
            combine_documents(many),
        ),
    };

    tracing::debug!(
        "Building prompt {} from {} document(s)",
        template_id,
        documents.len()
    );

    let mut variables = HashMap::new();
    variables.insert("refusal".to_string(), REFUSAL_PHRASE.to_string());

    let system = render_template(SYSTEM_TEMPLATE, &variables)?;
    let rules = render_template(GROUNDING_RULES, &variables)?;
    variables.insert("rules".to_string(), rules);
    variables.insert("question".to_string(), question.trim().to_string());
    variables.insert(evidence_key.to_string(), evidence);

    let user = render_template(template, &variables)?;

    Ok(BuiltPrompt::new(
        system,
        user,
        template_id,
        documents.iter().map(|d| d.name.clone()).collect(),
        documents.iter().map(|d| d.content.chars().count()).sum(),
    ))
}

/// Concatenate documents under numbered `Document N (name):` headers.
///
/// Used both as multi-document prompt evidence and as the text the combined
/// snippet is cut from.
pub fn combine_documents(documents: &[Document]) -> String {
    documents
        .iter()
        .enumerate()
        .map(|(i, doc)| format!("Document {} ({}):\n{}", i + 1, doc.name, doc.content))
        .collect::<Vec<_>>()
        .join(DOCUMENT_DELIMITER)
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<String, String>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Evidence is plain text; never HTML-escape it
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    let rendered = handlebars
        .render("prompt", variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))?;

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, content: &str) -> Document {
        Document::new(name, name, content)
    }

    #[test]
    fn test_single_document_prompt() {
        let docs = vec![doc("A", "The sky is blue.")];
        let built = build_grounded_prompt(&docs, "  What color is the sky?  ").unwrap();

        assert!(built.user.contains("Document:\nThe sky is blue.\n"));
        assert!(built.user.contains("Question:\nWhat color is the sky?\n"));
        assert!(built.user.contains("reply exactly \"I don't know\""));
        assert!(built.user.contains("Do not use outside knowledge."));
        assert!(built.user.contains("Never fabricate"));
        assert!(!built.user.contains("{{"));
        assert!(built.system.contains("reply exactly \"I don't know\""));
        assert!(!built.system.contains("The sky is blue."));
        assert_eq!(built.metadata.template_id, SINGLE_DOCUMENT_ID);
        assert_eq!(built.metadata.document_names, vec!["A"]);
        assert_eq!(built.metadata.evidence_chars, 16);
    }

    #[test]
    fn test_multi_document_prompt() {
        let docs = vec![
            doc("sky.txt", "The sky is blue."),
            doc("grass.txt", "Grass is green."),
        ];
        let built = build_grounded_prompt(&docs, "What colors are the sky and grass?").unwrap();

        assert!(built.user.contains("Document 1 (sky.txt):\nThe sky is blue."));
        assert!(built.user.contains("Document 2 (grass.txt):\nGrass is green."));
        assert!(built.user.contains("\n---\n"));
        assert!(built.user.contains("combine what they say"));
        assert!(built.user.contains(REFUSAL_PHRASE));
        assert_eq!(built.metadata.template_id, MULTI_DOCUMENT_ID);
        assert_eq!(built.metadata.document_names, vec!["sky.txt", "grass.txt"]);
    }

    #[test]
    fn test_evidence_is_not_escaped_or_interpreted() {
        let docs = vec![doc("A", "if a < b && c > d { {{not_a_var}} }")];
        let built = build_grounded_prompt(&docs, "What is <b>?").unwrap();

        assert!(built.user.contains("if a < b && c > d { {{not_a_var}} }"));
        assert!(built.user.contains("What is <b>?"));
    }

    #[test]
    fn test_empty_evidence_is_rejected() {
        let result = build_grounded_prompt(&[], "anything");
        assert!(matches!(result, Err(AppError::Prompt(_))));
    }

    #[test]
    fn test_combine_documents() {
        let combined = combine_documents(&[doc("a", "first"), doc("b", "second")]);
        assert_eq!(combined, "Document 1 (a):\nfirst\n\n---\n\nDocument 2 (b):\nsecond");
    }

    #[test]
    fn test_render_template_missing_variable_fails_in_strict_mode() {
        let vars = HashMap::new();
        assert!(render_template("Question: {{missing}}", &vars).is_err());
    }
}
