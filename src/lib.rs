//! Lettericon - render single-letter browser extension icons
//!
//! This library provides functionality to:
//! - Probe system fonts, falling back to a built-in bitmap font
//! - Render an orange "A" centered on white square canvases
//! - Write the 24, 48 and 128 pixel icons as PNG files

pub mod cli;
pub mod color;
pub mod config;
pub mod font;
pub mod icons;
pub mod output;
pub mod renderer;
