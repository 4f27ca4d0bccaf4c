//! Raw JSONC configuration data types
//!
//! These structs represent the exact structure of the council config
//! file. They are deserialized directly and converted into the domain
//! [`CouncilConfig`] afterwards.

use council_domain::{CouncilConfig, ModelId, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Complete file configuration (raw JSONC structure)
///
/// # Example
///
/// ```jsonc
/// {
///   // Shared context included in every stage prompt
///   "operational_context": "Mid-size B2B SaaS, EU customers.",
///   "custom_role_instructions": {
///     "CISO": "GDPR applies to all customer data."
///   },
///   "executive_model": "openrouter:deepseek/deepseek-v3.2",
///   "ceo_model": "anthropic:claude-sonnet-4-5-20250929"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Context text included in every stage prompt
    pub operational_context: String,
    /// Per-role instruction text, keyed by role name
    pub custom_role_instructions: HashMap<String, String>,
    /// Model for the executive roles (Stages 1-3)
    pub executive_model: Option<String>,
    /// Model for the CEO synthesis (Stage 4)
    pub ceo_model: Option<String>,
}

impl FileConfig {
    /// Convert into the domain configuration, applying model defaults
    /// and the canonical four-role council.
    pub fn into_council_config(self) -> CouncilConfig {
        let role_instructions: HashMap<Role, String> = self
            .custom_role_instructions
            .into_iter()
            // Role::from_str is infallible; unknown names become Custom(...)
            .map(|(name, text)| (name.parse().unwrap(), text))
            .collect();

        CouncilConfig::new(Role::default_council())
            .with_operational_context(self.operational_context)
            .with_role_instructions(role_instructions)
            .with_executive_model(
                self.executive_model
                    .map(ModelId::new)
                    .unwrap_or_else(ModelId::default_executive),
            )
            .with_ceo_model(
                self.ceo_model
                    .map(ModelId::new)
                    .unwrap_or_else(ModelId::default_ceo),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_config_uses_defaults() {
        let config = FileConfig::default().into_council_config();
        assert_eq!(config.roles, Role::default_council());
        assert_eq!(config.executive_model, ModelId::default_executive());
        assert_eq!(config.ceo_model, ModelId::default_ceo());
        assert_eq!(config.operational_context, "");
    }

    #[test]
    fn test_role_instructions_keyed_by_role() {
        let mut file = FileConfig::default();
        file.custom_role_instructions
            .insert("CISO".to_string(), "SOC 2 is in scope.".to_string());

        let config = file.into_council_config();
        assert_eq!(config.instructions_for(&Role::Ciso), "SOC 2 is in scope.");
        assert_eq!(config.instructions_for(&Role::Cpo), "");
    }

    #[test]
    fn test_explicit_models_override_defaults() {
        let file = FileConfig {
            executive_model: Some("openrouter:qwen/qwen3-max".to_string()),
            ceo_model: Some("anthropic:claude-opus-4-6".to_string()),
            ..Default::default()
        };
        let config = file.into_council_config();
        assert_eq!(config.executive_model.as_str(), "openrouter:qwen/qwen3-max");
        assert_eq!(config.ceo_model.as_str(), "anthropic:claude-opus-4-6");
    }
}
