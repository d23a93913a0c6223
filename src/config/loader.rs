//! Configuration loading and discovery for `lettericon.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::IconConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Name of the configuration file looked up in the directory tree.
pub const CONFIG_FILE_NAME: &str = "lettericon.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse lettericon.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out_dir: Option<PathBuf>,
    /// Override file name prefix
    pub prefix: Option<String>,
}

/// Find lettericon.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find lettericon.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a lettericon.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate one. If no config file is found, returns the default
/// configuration.
///
/// A relative `output.dir` in a file is resolved against the directory
/// containing that file.
pub fn load_config(path: Option<&Path>) -> Result<IconConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => {
            debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(IconConfig::default())
        }
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<IconConfig, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let contents = fs::read_to_string(path)?;
    let mut config: IconConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = path.parent() {
        config.output.dir = resolve_path(root, &config.output.dir);
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The merged
/// configuration is validated again, since overrides bypass the file checks.
pub fn merge_cli_overrides(
    config: &mut IconConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref dir) = overrides.out_dir {
        config.output.dir = dir.clone();
    }

    if let Some(ref prefix) = overrides.prefix {
        config.output.prefix = prefix.clone();
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Resolve a path relative to the directory holding the config file.
///
/// If the path is absolute, returns it unchanged.
fn resolve_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || root.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents.as_bytes())
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\nprefix = \"icon\"");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "");

        let subdir = temp.path().join("extension").join("assets");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_resolves_dir_against_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\ndir = \"build/icons\"\n");

        let config = load_config(Some(&config_path)).expect("should load config");
        assert_eq!(config.output.dir, temp.path().join("build/icons"));
        assert_eq!(config.output.prefix, "icon");
    }

    #[test]
    fn test_load_config_keeps_absolute_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let abs = temp.path().join("abs");
        let contents = format!("[output]\ndir = {:?}\n", abs.display().to_string());
        let config_path = write_config(temp.path(), &contents);

        let config = load_config(Some(&config_path)).expect("should load config");
        assert_eq!(config.output.dir, abs);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output\n");

        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), "[output]\nprefix = \"\"\n");

        let err = load_config(Some(&config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("output.prefix"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let err = load_config(Some(&temp.path().join(CONFIG_FILE_NAME))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    #[serial]
    fn test_load_config_discovers_from_cwd() {
        let temp = TempDir::new().expect("should create temp dir");
        write_config(temp.path(), "[output]\nprefix = \"ext\"\n");
        let nested = temp.path().join("nested");
        fs::create_dir_all(&nested).expect("should create nested dir");

        let original = env::current_dir().expect("should read cwd");
        env::set_current_dir(&nested).expect("should change cwd");
        let result = load_config(None);
        env::set_current_dir(original).expect("should restore cwd");

        let config = result.expect("should load discovered config");
        assert_eq!(config.output.prefix, "ext");
    }

    #[test]
    #[serial]
    fn test_load_config_defaults_without_file() {
        let temp = TempDir::new().expect("should create temp dir");

        let original = env::current_dir().expect("should read cwd");
        env::set_current_dir(temp.path()).expect("should change cwd");
        let result = load_config(None);
        env::set_current_dir(original).expect("should restore cwd");

        // Only meaningful when no lettericon.toml exists above the temp dir
        if find_config_from(temp.path().to_path_buf()).is_none() {
            assert_eq!(result.expect("should fall back to defaults"), IconConfig::default());
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = IconConfig::default();
        let overrides = CliOverrides {
            out_dir: Some(PathBuf::from("dist")),
            prefix: Some("logo".to_string()),
        };
        merge_cli_overrides(&mut config, &overrides).expect("overrides are valid");
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert_eq!(config.output.prefix, "logo");
    }

    #[test]
    fn test_merge_cli_overrides_empty_keeps_config() {
        let mut config = IconConfig::default();
        merge_cli_overrides(&mut config, &CliOverrides::default()).expect("no-op merge");
        assert_eq!(config, IconConfig::default());
    }

    #[test]
    fn test_merge_cli_overrides_revalidates() {
        let mut config = IconConfig::default();
        let overrides = CliOverrides { prefix: Some("a/b".to_string()), ..Default::default() };
        let err = merge_cli_overrides(&mut config, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
