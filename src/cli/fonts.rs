//! Fonts command: show how font probing resolves on this machine

use std::process::ExitCode;

use crate::font::{default_candidates, first_existing, GlyphSource};
use crate::icons::GLYPH;

use super::EXIT_SUCCESS;

/// Execute the fonts command
pub fn run_fonts() -> ExitCode {
    let candidates = default_candidates();
    let chosen = first_existing(&candidates);

    println!("Font candidates (probed in order):");
    for path in &candidates {
        let marker = if Some(path.as_path()) == chosen {
            "*"
        } else if path.is_file() {
            "+"
        } else {
            " "
        };
        println!("  {} {}", marker, path.display());
    }

    let source = GlyphSource::resolve(&candidates, GLYPH);
    println!();
    println!("Using: {}", source.describe());

    ExitCode::from(EXIT_SUCCESS)
}
