//! Deliberation domain
//!
//! The four-stage council deliberation over a document:
//!
//! ```text
//! Stage 1 (Reviews)    every role reviews the document
//!        |
//! Stage 2 (Questions)  every role raises cross-domain questions
//!        |
//!   [question gate]    which roles were addressed?
//!        |
//! Stage 3 (Responses)  only addressed roles answer (may be skipped)
//!        |
//! Stage 4 (Synthesis)  the CEO model produces the decision
//! ```
//!
//! This module holds the vocabulary of that flow: the [`Stage`] state
//! machine, the immutable per-stage results, the question router that
//! drives the Stage-3 gate, and the transcript aggregation that turns a
//! stage's results into prompt context for the next stage.

pub mod entities;
pub mod questions;
pub mod transcript;
pub mod value_objects;

// Re-export main types
pub use entities::{CouncilConfig, Stage};
pub use questions::{NO_QUESTIONS_SENTINEL, extract_directed_questions, roles_with_questions};
pub use value_objects::{CouncilResult, StageResult};
