//! Stored document types shared across crates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored document. The whole content is the unit of retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque identifier assigned by the store
    pub id: String,

    /// Display name, reported as the answer source
    pub name: String,

    /// Full text content
    pub content: String,

    /// When the document was stored
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Create a document stamped with the current time.
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Listing view without the content.
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}

/// Listing entry for a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_drops_content() {
        let doc = Document::new("1", "sky.txt", "The sky is blue.");
        let summary = doc.summary();
        assert_eq!(summary.id, "1");
        assert_eq!(summary.name, "sky.txt");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("content").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
