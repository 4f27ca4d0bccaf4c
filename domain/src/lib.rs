//! Domain layer for cxo-council
//!
//! This crate contains the core deliberation logic and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council is a fixed, ordered set of executive roles (CPO, CTO, COO,
//! CISO by default) that review a document in four stages:
//!
//! 1. **Reviews**: each role assesses the document from its domain
//! 2. **Questions**: each role raises cross-domain questions to peers
//! 3. **Responses**: roles that were addressed answer their questions
//! 4. **Synthesis**: the CEO synthesizes everything into a decision
//!
//! Stage 3 only runs for roles that actually received a directed
//! question; the routing lives in [`deliberation::questions`].

pub mod core;
pub mod deliberation;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::{document::Document, model::ModelId, role::Role};
pub use crate::deliberation::{
    entities::{CouncilConfig, Stage},
    questions::{NO_QUESTIONS_SENTINEL, extract_directed_questions, roles_with_questions},
    transcript,
    value_objects::{CouncilResult, StageResult},
};
pub use crate::prompt::template::{PromptSet, render};
