//! Icon rendering: one centered glyph on a square canvas

use image::{Rgb, RgbImage};

use crate::color::{blend, BACKGROUND, FOREGROUND};
use crate::font::{Glyph, GlyphSource};

/// Glyph em size as a fraction of the icon edge.
pub const GLYPH_SCALE: f32 = 0.7;

/// Glyph pixel size for an icon of edge `size` (truncated toward zero).
pub fn glyph_px_size(size: u32) -> u32 {
    (size as f32 * GLYPH_SCALE) as u32
}

/// Top-left position that centers a `width` x `height` box on a
/// `size` x `size` canvas, using floor division.
///
/// Boxes larger than the canvas get a negative offset so they stay
/// centered and overflow evenly.
pub fn centered_origin(size: u32, width: u32, height: u32) -> (i64, i64) {
    let x = (size as i64 - width as i64).div_euclid(2);
    let y = (size as i64 - height as i64).div_euclid(2);
    (x, y)
}

/// Render an icon of edge `size` showing `ch` from `glyphs`.
///
/// The canvas is white and the glyph is blended in orange by coverage.
/// Parts of the glyph that fall outside the canvas are clipped.
pub fn render_icon(size: u32, ch: char, glyphs: &GlyphSource) -> RgbImage {
    let mut image = RgbImage::from_pixel(size, size, BACKGROUND);
    let glyph = glyphs.rasterize(ch, glyph_px_size(size));
    draw_glyph(&mut image, &glyph, FOREGROUND);
    image
}

/// Blend `glyph` into the center of `image` in `color`.
pub fn draw_glyph(image: &mut RgbImage, glyph: &Glyph, color: Rgb<u8>) {
    if glyph.is_empty() {
        return;
    }

    let size = image.width();
    let (ox, oy) = centered_origin(size, glyph.width, glyph.height);
    let (img_w, img_h) = (image.width() as i64, image.height() as i64);

    for gy in 0..glyph.height {
        let y = oy + gy as i64;
        if y < 0 || y >= img_h {
            continue;
        }
        for gx in 0..glyph.width {
            let x = ox + gx as i64;
            if x < 0 || x >= img_w {
                continue;
            }
            let coverage = glyph.coverage_at(gx, gy);
            if coverage == 0 {
                continue;
            }
            let pixel = image.get_pixel_mut(x as u32, y as u32);
            *pixel = blend(*pixel, color, coverage);
        }
    }
}
