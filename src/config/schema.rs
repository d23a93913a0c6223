//! Configuration schema types for `lettericon.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output section: where icons are written and how they are named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the icons (created if missing)
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// File name prefix; files are named `{prefix}{size}.png`
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { dir: default_dir(), prefix: default_prefix() }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_prefix() -> String {
    "icon".to_string()
}

/// Root configuration structure for `lettericon.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// A single configuration validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "output.prefix")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lettericon.toml: '{}' {}", self.field, self.message)
    }
}

impl IconConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.output.prefix.is_empty() {
            errors.push(ConfigValidationError {
                field: "output.prefix".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        } else if self.output.prefix.contains(['/', '\\']) {
            errors.push(ConfigValidationError {
                field: "output.prefix".to_string(),
                message: "must not contain path separators".to_string(),
            });
        }

        if self.output.dir.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "output.dir".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }
}
