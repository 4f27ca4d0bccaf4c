//! Application use cases

pub mod run_council;

pub use run_council::{RunCouncilError, RunCouncilInput, RunCouncilUseCase};
