//! Deliberation value objects - immutable result types for council runs.
//!
//! These types represent the outputs of each stage:
//! - [`StageResult`] - One role's response within a single stage
//! - [`CouncilResult`] - Complete result containing all four stages

use crate::core::role::Role;
use serde::{Deserialize, Serialize};

/// Response from a single role in one deliberation stage
///
/// Never mutated after creation. Sequences of stage results are ordered
/// by canonical role order, not by call completion order. A failed
/// gateway call is recorded with its inline `ERROR: ...` text as the
/// response, so later stages see the failure as visible context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    /// The role that produced this response
    pub role: Role,
    /// The response content
    pub response: String,
}

impl StageResult {
    /// Creates a stage result for a role.
    pub fn new(role: Role, response: impl Into<String>) -> Self {
        Self {
            role,
            response: response.into(),
        }
    }
}

/// Complete result of a council run
///
/// Created once at the end of a run and owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilResult {
    /// Stage 1: domain reviews, one per role in canonical order
    pub stage1: Vec<StageResult>,
    /// Stage 2: cross-domain questions, one per role in canonical order
    pub stage2: Vec<StageResult>,
    /// Stage 3: responses from addressed roles (empty if skipped)
    pub stage3: Vec<StageResult>,
    /// Stage 4: the synthesized executive decision
    pub synthesis: String,
}

impl CouncilResult {
    /// Creates a complete result from all four stages.
    pub fn new(
        stage1: Vec<StageResult>,
        stage2: Vec<StageResult>,
        stage3: Vec<StageResult>,
        synthesis: impl Into<String>,
    ) -> Self {
        Self {
            stage1,
            stage2,
            stage3,
            synthesis: synthesis.into(),
        }
    }

    /// Whether the Stage-3 gate skipped the response round entirely.
    pub fn responses_skipped(&self) -> bool {
        self.stage3.is_empty()
    }
}
