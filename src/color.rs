//! Icon colors and coverage blending
//!
//! Icons are opaque RGB: an orange glyph over a white background. Glyph
//! rasterizers produce 8-bit coverage, which is blended here into the
//! background rather than alpha-composited onto a transparent canvas.

use image::Rgb;

/// Glyph color, `#FF9900`.
pub const FOREGROUND: Rgb<u8> = Rgb([255, 153, 0]);

/// Canvas color, `#FFFFFF`.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Blend `fg` over `bg` by an 8-bit coverage value.
///
/// A coverage of 0 yields `bg`, 255 yields `fg`. Intermediate values are
/// linearly interpolated per channel and rounded to nearest.
///
/// # Examples
///
/// ```
/// use lettericon::color::{blend, BACKGROUND, FOREGROUND};
///
/// assert_eq!(blend(BACKGROUND, FOREGROUND, 0), BACKGROUND);
/// assert_eq!(blend(BACKGROUND, FOREGROUND, 255), FOREGROUND);
/// ```
pub fn blend(bg: Rgb<u8>, fg: Rgb<u8>, coverage: u8) -> Rgb<u8> {
    match coverage {
        0 => bg,
        255 => fg,
        c => {
            let c = c as i32;
            let mut out = [0u8; 3];
            for i in 0..3 {
                let b = bg.0[i] as i32;
                let f = fg.0[i] as i32;
                // (f - b) * c / 255, rounded half away from zero
                let delta = (f - b) * c;
                let rounded = if delta >= 0 { (delta + 127) / 255 } else { (delta - 127) / 255 };
                out[i] = (b + rounded) as u8;
            }
            Rgb(out)
        }
    }
}

/// Format a color as `#RRGGBB`.
pub fn to_hex(color: Rgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.0[0], color.0[1], color.0[2])
}
