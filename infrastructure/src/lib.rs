//! Infrastructure layer for cxo-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod openrouter;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use openrouter::OpenRouterGateway;
