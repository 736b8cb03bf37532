//! Luminance-weighted grayscale projection.
//!
//! Defined once on `Rgb` with the ITU-R BT.709 weights; every other type
//! converts to `Rgb`, desaturates, and converts back.

use crate::color::{Cmyk, Hsl, Hsv, Rgb, Rgb32};
use crate::convert::{
    cmyk_to_rgb, hsl_to_rgb, hsv_to_rgb, rgb32_to_rgb, rgb_to_cmyk, rgb_to_hsl, rgb_to_hsv,
    rgb_to_rgb32,
};

/// BT.709 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Replaces r, g and b with their weighted luminance. Alpha is kept.
///
/// The luma is taken as an offset from green (the weights sum to 1), so a
/// color that is already gray comes back bit for bit.
pub fn rgb_to_grayscale(c: Rgb) -> Rgb {
    let [wr, _, wb] = LUMA_WEIGHTS;
    let value = c.g + wr * (c.r - c.g) + wb * (c.b - c.g);
    Rgb::new(value, value, value, c.a)
}

pub fn rgb32_to_grayscale(c: Rgb32) -> Rgb32 {
    rgb_to_rgb32(rgb_to_grayscale(rgb32_to_rgb(c)))
}

pub fn hsv_to_grayscale(c: Hsv) -> Hsv {
    rgb_to_hsv(rgb_to_grayscale(hsv_to_rgb(c)))
}

pub fn hsl_to_grayscale(c: Hsl) -> Hsl {
    rgb_to_hsl(rgb_to_grayscale(hsl_to_rgb(c)))
}

pub fn cmyk_to_grayscale(c: Cmyk) -> Cmyk {
    rgb_to_cmyk(rgb_to_grayscale(cmyk_to_rgb(c)))
}
