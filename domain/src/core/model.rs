//! Model identifier value object

use serde::{Deserialize, Serialize};

/// Provider-scoped LLM model identifier (Value Object)
///
/// Identifiers carry an optional provider prefix, e.g.
/// `openrouter:deepseek/deepseek-v3.2` or
/// `anthropic:claude-sonnet-4-5-20250929`. The domain treats the
/// identifier as opaque text; provider-prefix normalization is the
/// gateway adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Default model for the executive roles in Stages 1-3
    pub fn default_executive() -> Self {
        Self::new("openrouter:deepseek/deepseek-v3.2")
    }

    /// Default model for the CEO synthesis in Stage 4
    pub fn default_ceo() -> Self {
        Self::new("anthropic:claude-sonnet-4-5-20250929")
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::new(s)
    }
}

impl From<String> for ModelId {
    fn from(s: String) -> Self {
        ModelId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_id_display() {
        let id = ModelId::new("openrouter:deepseek/deepseek-v3.2");
        assert_eq!(id.to_string(), "openrouter:deepseek/deepseek-v3.2");
    }

    #[test]
    fn test_defaults_are_provider_scoped() {
        assert!(ModelId::default_executive().as_str().starts_with("openrouter:"));
        assert!(ModelId::default_ceo().as_str().starts_with("anthropic:"));
    }
}
