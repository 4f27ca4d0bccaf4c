//! Deliberation domain entities

use crate::core::model::ModelId;
use crate::core::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stage of a council run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Stage 1 - every role reviews the document from its domain
    Reviews,
    /// Stage 2 - every role raises cross-domain questions
    Questions,
    /// Stage 3 - addressed roles answer their directed questions
    Responses,
    /// Stage 4 - the CEO model synthesizes the decision
    Synthesis,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Reviews => "reviews",
            Stage::Questions => "questions",
            Stage::Responses => "responses",
            Stage::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Reviews => "Executive Domain Reviews",
            Stage::Questions => "Cross-Domain Questions",
            Stage::Responses => "Responses to Questions",
            Stage::Synthesis => "CEO Synthesis",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Configuration for a council run (Entity)
///
/// Loaded once before orchestration and immutable thereafter. The role
/// list is an explicit configuration value, not process-wide state, so
/// concurrent runs cannot interfere.
#[derive(Debug, Clone)]
pub struct CouncilConfig {
    /// Roles on the council, in canonical call/result order
    pub roles: Vec<Role>,
    /// Operational context text included in every stage prompt
    pub operational_context: String,
    /// Per-role instruction text; absent roles default to empty text
    pub role_instructions: HashMap<Role, String>,
    /// Model used for the executive roles in Stages 1-3
    pub executive_model: ModelId,
    /// Model used for the CEO synthesis in Stage 4
    pub ceo_model: ModelId,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            roles: Role::default_council(),
            operational_context: String::new(),
            role_instructions: HashMap::new(),
            executive_model: ModelId::default_executive(),
            ceo_model: ModelId::default_ceo(),
        }
    }
}

impl CouncilConfig {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            roles,
            ..Default::default()
        }
    }

    pub fn with_operational_context(mut self, context: impl Into<String>) -> Self {
        self.operational_context = context.into();
        self
    }

    pub fn with_role_instructions(mut self, instructions: HashMap<Role, String>) -> Self {
        self.role_instructions = instructions;
        self
    }

    pub fn with_executive_model(mut self, model: ModelId) -> Self {
        self.executive_model = model;
        self
    }

    pub fn with_ceo_model(mut self, model: ModelId) -> Self {
        self.ceo_model = model;
        self
    }

    /// Instruction text for a role; empty when none was configured
    pub fn instructions_for(&self, role: &Role) -> &str {
        self.role_instructions
            .get(role)
            .map(String::as_str)
            .unwrap_or("")
    }
}
