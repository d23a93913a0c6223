//! The icon set: fixed sizes, glyph and colors, rendered and written to disk

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::IconConfig;
use crate::font::GlyphSource;
use crate::output::{icon_path, save_png, OutputError};
use crate::renderer::render_icon;

/// Edge lengths of the generated icons, in generation order.
pub const ICON_SIZES: [u32; 3] = [24, 48, 128];

/// The character drawn on every icon.
pub const GLYPH: char = 'A';

/// Top-level error for icon generation
#[derive(Debug, Error)]
pub enum IconError {
    /// An icon could not be encoded or written
    #[error("cannot write '{path}': {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: OutputError,
    },
}

/// An icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Render every size in [`ICON_SIZES`] and save it under `config.output`.
///
/// Icons are produced in order and generation stops at the first write
/// failure; icons already written are left in place.
pub fn generate_icons(
    config: &IconConfig,
    glyphs: &GlyphSource,
) -> Result<Vec<GeneratedIcon>, IconError> {
    info!(font = %glyphs.describe(), dir = %config.output.dir.display(), "generating icons");

    let mut generated = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = icon_path(&config.output.dir, &config.output.prefix, size);
        let image = render_icon(size, GLYPH, glyphs);
        debug!(size, path = %path.display(), "rendered icon");

        save_png(&image, &path).map_err(|source| IconError::Output { path: path.clone(), source })?;
        generated.push(GeneratedIcon { size, path });
    }

    Ok(generated)
}
