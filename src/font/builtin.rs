//! Built-in bitmap font used when no system font can be loaded

use super::Glyph;

const CELL_WIDTH: usize = 5;
const CELL_HEIGHT: usize = 7;

const GLYPH_A: [&str; CELL_HEIGHT] = [
    ".###.",
    "#...#",
    "#...#",
    "#####",
    "#...#",
    "#...#",
    "#...#",
];

/// Whether the built-in font has a bitmap for `ch`.
pub fn has_glyph(ch: char) -> bool {
    ch == 'A'
}

/// Rasterize `ch` at roughly `px_size` pixels tall.
///
/// The 5x7 cell is scaled by the largest integer factor whose height fits
/// in `px_size` (never below 1), so edges stay hard. Characters without a
/// bitmap produce an empty glyph.
pub fn rasterize(ch: char, px_size: u32) -> Glyph {
    if !has_glyph(ch) {
        return Glyph::empty();
    }

    let factor = (px_size as usize / CELL_HEIGHT).max(1);
    let width = CELL_WIDTH * factor;
    let height = CELL_HEIGHT * factor;
    let mut coverage = vec![0u8; width * height];

    for (row, line) in GLYPH_A.iter().enumerate() {
        for (col, cell) in line.bytes().enumerate() {
            if cell != b'#' {
                continue;
            }
            for dy in 0..factor {
                let y = row * factor + dy;
                let start = y * width + col * factor;
                coverage[start..start + factor].fill(255);
            }
        }
    }

    Glyph { width: width as u32, height: height as u32, coverage }
}
