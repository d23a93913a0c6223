//! Generate command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::font::{default_candidates, GlyphSource};
use crate::icons::{generate_icons, GLYPH};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the generate command
pub fn run_generate(
    out_dir: Option<PathBuf>,
    prefix: Option<String>,
    config_path: Option<&Path>,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let overrides = CliOverrides { out_dir, prefix };
    if let Err(e) = merge_cli_overrides(&mut config, &overrides) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let glyphs = GlyphSource::resolve(&default_candidates(), GLYPH);

    match generate_icons(&config, &glyphs) {
        Ok(icons) => {
            for icon in &icons {
                println!("Created {}", icon.path.display());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
