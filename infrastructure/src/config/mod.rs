//! Council configuration loading (JSONC files)

pub mod file_config;
pub mod loader;

pub use file_config::FileConfig;
pub use loader::{ConfigError, ConfigLoader};
