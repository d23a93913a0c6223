//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod fonts;
mod generate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Lettericon - Render the orange "A" browser extension icons to PNG
#[derive(Parser)]
#[command(name = "lettericon")]
#[command(about = "Lettericon - Render single-letter browser extension icons (24, 48, 128 px) to PNG")]
#[command(version)]
pub struct Cli {
    /// Show debug diagnostics (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate icon24.png, icon48.png and icon128.png
    Generate {
        /// Output directory (default: from lettericon.toml, else ./icons)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// File name prefix; files are named {prefix}{size}.png (default: icon)
        #[arg(long)]
        prefix: Option<String>,

        /// Path to a lettericon.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List the font files probed on this platform
    Fonts,
}

/// Install the stderr log subscriber.
///
/// Warnings are shown by default, `--verbose` enables debug output, and a
/// `RUST_LOG` directive takes precedence over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded in a larger program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate { out_dir, prefix, config } => {
            generate::run_generate(out_dir, prefix, config.as_deref())
        }
        Commands::Fonts => fonts::run_fonts(),
    }
}
