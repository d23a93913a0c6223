//! Configuration for lettericon
//!
//! Provides types and loading for the optional `lettericon.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, load_config, merge_cli_overrides, CliOverrides};
pub use loader::{ConfigError, CONFIG_FILE_NAME};
pub use schema::*;
