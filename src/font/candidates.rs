//! Platform font candidates, probed in order

use std::path::{Path, PathBuf};

#[cfg(target_os = "macos")]
const PLATFORM_FONTS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/SFNS.ttf",
];

#[cfg(target_os = "windows")]
const PLATFORM_FONTS: &[&str] = &[
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

/// Font files to try on this platform, most preferred first.
pub fn default_candidates() -> Vec<PathBuf> {
    PLATFORM_FONTS.iter().map(PathBuf::from).collect()
}

/// Return the first candidate that exists on disk.
pub fn first_existing(candidates: &[PathBuf]) -> Option<&Path> {
    candidates.iter().map(PathBuf::as_path).find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_default_candidates_not_empty() {
        let candidates = default_candidates();
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_first_existing_skips_missing() {
        let temp = TempDir::new().expect("should create temp dir");
        let second = temp.path().join("second.ttf");
        let third = temp.path().join("third.ttf");
        File::create(&second).expect("should create font file");
        File::create(&third).expect("should create font file");

        let candidates = vec![temp.path().join("missing.ttf"), second.clone(), third];
        assert_eq!(first_existing(&candidates), Some(second.as_path()));
    }

    #[test]
    fn test_first_existing_ignores_directories() {
        let temp = TempDir::new().expect("should create temp dir");
        let candidates = vec![temp.path().to_path_buf()];
        assert_eq!(first_existing(&candidates), None);
    }

    #[test]
    fn test_first_existing_none() {
        assert_eq!(first_existing(&[]), None);
    }
}
