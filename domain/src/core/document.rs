//! Document value object

use serde::{Deserialize, Serialize};

/// A document to be reviewed by the council (Value Object)
///
/// Represents the plan or specification text that is fed into every
/// stage of the deliberation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    content: String,
}

impl Document {
    /// Create a new document
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(!content.trim().is_empty(), "Document cannot be empty");
        Self { content }
    }

    /// Try to create a new document, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the document content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl From<&str> for Document {
    fn from(s: &str) -> Self {
        Document::new(s)
    }
}

impl From<String> for Document {
    fn from(s: String) -> Self {
        Document::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("# Migration plan");
        assert_eq!(doc.content(), "# Migration plan");
    }

    #[test]
    #[should_panic]
    fn test_empty_document_panics() {
        Document::new("   ");
    }

    #[test]
    fn test_try_new() {
        assert!(Document::try_new("").is_none());
        assert!(Document::try_new("plan").is_some());
    }
}
