//! Configuration file loader with JSONC comment stripping

use super::file_config::FileConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file names probed in the working directory, in order
const CONFIG_CANDIDATES: &[&str] = &["council-config.jsonc", "cxo-council-config.jsonc"];

/// Errors raised while locating or parsing the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "No council config found. Create council-config.jsonc or specify one with --config"
    )]
    NotFound,

    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration loader that handles file discovery and comment stripping
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit path, or discover one.
    ///
    /// Priority:
    /// 1. Explicit config path (if provided)
    /// 2. `./council-config.jsonc`
    /// 3. `./cxo-council-config.jsonc`
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::discover().ok_or(ConfigError::NotFound)?,
        };

        debug!("Loading council config from {}", path.display());

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let clean = Self::strip_comments(&content);
        serde_json::from_str(&clean).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Find the first candidate config file in the working directory
    pub fn discover() -> Option<PathBuf> {
        CONFIG_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    }

    /// Drop full-line `//` comments so the file parses as JSON.
    ///
    /// Only lines whose trimmed content starts with `//` are removed;
    /// a trailing comment on a value line is left in place and will
    /// fail parsing. Known limitation, kept intentionally.
    fn strip_comments(content: &str) -> String {
        content
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "custom.jsonc",
            r#"{
  "operational_context": "Fintech startup",
  "executive_model": "openrouter:deepseek/deepseek-v3.2"
}"#,
        );

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.operational_context, "Fintech startup");
        assert_eq!(
            config.executive_model.as_deref(),
            Some("openrouter:deepseek/deepseek-v3.2")
        );
    }

    #[test]
    fn test_full_line_comments_are_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "commented.jsonc",
            r#"{
  // who we are
  "operational_context": "Dev tools vendor",
  "custom_role_instructions": {
    // security gets extra scope
    "CISO": "Threat-model everything."
  }
}"#,
        );

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.operational_context, "Dev tools vendor");
        assert_eq!(
            config.custom_role_instructions.get("CISO").unwrap(),
            "Threat-model everything."
        );
    }

    #[test]
    fn test_trailing_comment_breaks_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "trailing.jsonc",
            "{\n  \"operational_context\": \"X\" // inline comment\n}",
        );

        let err = ConfigLoader::load(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_path_is_io_error() {
        let err = ConfigLoader::load(Some(Path::new("/nonexistent/council.jsonc"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "extra.jsonc", r#"{"future_field": true}"#);

        let config = ConfigLoader::load(Some(path.as_path())).unwrap();
        assert_eq!(config.operational_context, "");
    }
}
