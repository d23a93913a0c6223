//! PNG output and icon file naming

use image::RgbImage;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGB image to a PNG file.
///
/// Missing parent directories are created first.
///
/// # Arguments
///
/// * `image` - The image to save
/// * `path` - The output file path
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Path of the icon of edge `size`: `dir/{prefix}{size}.png`.
///
/// | dir | prefix | size | path |
/// |-----|--------|------|------|
/// | `icons` | `icon` | 24 | `icons/icon24.png` |
/// | `.` | `logo-` | 128 | `./logo-128.png` |
pub fn icon_path(dir: &Path, prefix: &str, size: u32) -> PathBuf {
    dir.join(format!("{}{}.png", prefix, size))
}
