//! Core domain concepts shared across all subdomains.
//!
//! - [`role::Role`] — the executive personas that sit on the council
//! - [`model::ModelId`] — provider-scoped LLM model identifiers
//! - [`document::Document`] — the text under review

pub mod document;
pub mod model;
pub mod role;
