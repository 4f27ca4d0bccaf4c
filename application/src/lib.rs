//! Application layer for cxo-council
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_council::{
    RunCouncilError, RunCouncilInput, RunCouncilUseCase, SKIPPED_RESPONSES_TEXT,
};
