//! Built-in prompt templates.
//!
//! Both templates end with the same grounding rules. The refusal phrase is
//! injected from [`REFUSAL_PHRASE`] so callers can match on it.

/// Exact phrase the LLM is told to answer with when the evidence is silent.
pub const REFUSAL_PHRASE: &str = "I don't know";

/// Separator placed between documents in combined evidence.
pub const DOCUMENT_DELIMITER: &str = "\n\n---\n\n";

/// System message sent with every grounded prompt.
pub const SYSTEM_TEMPLATE: &str = r#"You answer questions about documents the user has uploaded.
Use only the text supplied in the user message. When it does not contain the answer, reply exactly "{{refusal}}"."#;

pub const SINGLE_DOCUMENT_ID: &str = "docqa.answer.single";
pub const MULTI_DOCUMENT_ID: &str = "docqa.answer.multi";

/// Evidence is one document, embedded verbatim.
pub const SINGLE_DOCUMENT_TEMPLATE: &str = r#"Answer the question using ONLY the text below.
If the answer is not present, say "{{refusal}}".

Document:
{{document}}

Question:
{{question}}

Rules:
{{rules}}"#;

/// Evidence is several documents, each under a numbered header.
pub const MULTI_DOCUMENT_TEMPLATE: &str = r#"Answer the question using ONLY the documents below.
If the answer is not present in any of them, say "{{refusal}}".

{{documents}}

Question:
{{question}}

Rules:
{{rules}}
- If several documents are relevant, combine what they say."#;

/// Grounding rules shared by every template.
pub const GROUNDING_RULES: &str = r#"- Answer only from the supplied text.
- If the supplied text does not contain the answer, reply exactly "{{refusal}}".
- Do not use outside knowledge.
- Never fabricate facts, names, numbers or quotes."#;
