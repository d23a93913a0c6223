//! Glyph sources: system TrueType fonts with a built-in fallback
//!
//! Font candidates are probed in order and the first one present on disk
//! is loaded. If it cannot be loaded, or nothing is found, the built-in
//! bitmap font is used instead, so rendering never fails for lack of a
//! font.

pub mod builtin;
pub mod candidates;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};
use thiserror::Error;
use tracing::{debug, warn};

pub use candidates::{default_candidates, first_existing};

/// Error type for font loading failures
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file could not be read
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not a font fontdue understands
    #[error("cannot parse '{path}': {message}")]
    Parse { path: PathBuf, message: String },
    /// The font has no outline for the requested character
    #[error("'{path}' has no glyph for '{ch}'")]
    MissingGlyph { path: PathBuf, ch: char },
}

/// A rasterized glyph, cropped to its ink bounding box.
///
/// `coverage` is row-major, `width * height` bytes, 0 = background and
/// 255 = fully covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl Glyph {
    pub fn empty() -> Self {
        Self { width: 0, height: 0, coverage: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Coverage at `(x, y)` inside the glyph box.
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Where glyphs come from.
pub enum GlyphSource {
    /// A TrueType/OpenType font loaded from disk
    TrueType { path: PathBuf, font: Box<Font> },
    /// The built-in bitmap font
    Builtin,
}

impl GlyphSource {
    /// Load a font file, checking that it can draw `ch`.
    pub fn load(path: &Path, ch: char) -> Result<Self, FontError> {
        let bytes =
            fs::read(path).map_err(|source| FontError::Io { path: path.to_path_buf(), source })?;
        // Collections (.ttc) use their first face
        let settings = FontSettings { collection_index: 0, ..FontSettings::default() };
        let font = Font::from_bytes(bytes, settings)
            .map_err(|e| FontError::Parse { path: path.to_path_buf(), message: e.to_string() })?;

        if font.lookup_glyph_index(ch) == 0 {
            return Err(FontError::MissingGlyph { path: path.to_path_buf(), ch });
        }

        Ok(GlyphSource::TrueType { path: path.to_path_buf(), font: Box::new(font) })
    }

    /// Probe `candidates` and load the first one that exists.
    ///
    /// Only the first existing file is tried. A load failure there is
    /// logged and falls back to the built-in font, as does finding none.
    pub fn resolve(candidates: &[PathBuf], ch: char) -> Self {
        let source = match first_existing(candidates) {
            Some(path) => {
                debug!(path = %path.display(), "loading font");
                match GlyphSource::load(path, ch) {
                    Ok(source) => Some(source),
                    Err(e) => {
                        warn!("Font error: {}", e);
                        None
                    }
                }
            }
            None => {
                debug!(tried = candidates.len(), "no font candidate found");
                None
            }
        };

        source.unwrap_or_else(|| {
            warn!("Using default font");
            GlyphSource::Builtin
        })
    }

    /// Human-readable name for logs and the `fonts` command.
    pub fn describe(&self) -> String {
        match self {
            GlyphSource::TrueType { path, .. } => path.display().to_string(),
            GlyphSource::Builtin => "built-in bitmap font".to_string(),
        }
    }

    /// Rasterize `ch` with an em size of `px_size` pixels.
    pub fn rasterize(&self, ch: char, px_size: u32) -> Glyph {
        match self {
            GlyphSource::TrueType { font, .. } => {
                let (metrics, coverage) = font.rasterize(ch, px_size as f32);
                if metrics.width == 0 || metrics.height == 0 {
                    return Glyph::empty();
                }
                Glyph { width: metrics.width as u32, height: metrics.height as u32, coverage }
            }
            GlyphSource::Builtin => builtin::rasterize(ch, px_size),
        }
    }
}

impl std::fmt::Debug for GlyphSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlyphSource::TrueType { path, .. } => {
                f.debug_struct("TrueType").field("path", path).finish_non_exhaustive()
            }
            GlyphSource::Builtin => write!(f, "Builtin"),
        }
    }
}
