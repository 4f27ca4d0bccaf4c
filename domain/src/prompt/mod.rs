//! Prompt construction for the four deliberation stages.

pub mod template;

pub use template::{PromptSet, render};
