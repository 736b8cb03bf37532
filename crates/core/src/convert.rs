//! Pairwise conversion graph between the five color types.
//!
//! `Rgb` is the hub: only the eight edges touching it have formulas of their
//! own. The other twelve edges convert to `Rgb` and then to the target. Every
//! function is pure and carries alpha through untouched (rescaled only across
//! the byte/float boundary).

use crate::color::{Cmyk, Hsl, Hsv, Rgb, Rgb32};
use crate::hue::{chromatic_hue, extremes, hue_degrees, sextant_rgb};
use crate::scalar::{abs, byte_clamp, max};

// -- Direct edges --

/// Scales each byte channel to [0, 1].
pub fn rgb32_to_rgb(c: Rgb32) -> Rgb {
    Rgb {
        r: f64::from(c.r) / 255.0,
        g: f64::from(c.g) / 255.0,
        b: f64::from(c.b) / 255.0,
        a: f64::from(c.a) / 255.0,
    }
}

/// Quantizes each channel with a saturating clamp, truncating toward zero.
pub fn rgb_to_rgb32(c: Rgb) -> Rgb32 {
    Rgb32 {
        r: byte_clamp(c.r),
        g: byte_clamp(c.g),
        b: byte_clamp(c.b),
        a: byte_clamp(c.a),
    }
}

pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let (c_max, _, delta) = extremes(c);
    let s = if c_max == 0.0 { 0.0 } else { delta / c_max };
    let h = if delta == 0.0 {
        0.0
    } else {
        chromatic_hue(c, c_max, delta)
    };
    Hsv {
        h,
        s,
        v: c_max,
        a: c.a,
    }
}

pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let chroma = c.s * c.v;
    let m = c.v - chroma;
    let (r, g, b) = sextant_rgb(hue_degrees(c.h), chroma);
    Rgb::new(r + m, g + m, b + m, c.a)
}

/// Achromatic colors get hue and saturation 0.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let (c_max, c_min, delta) = extremes(c);
    let l = (c_max + c_min) * 0.5;
    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        (
            chromatic_hue(c, c_max, delta),
            delta / (1.0 - abs(2.0 * l - 1.0)),
        )
    };
    Hsl { h, s, l, a: c.a }
}

pub fn hsl_to_rgb(c: Hsl) -> Rgb {
    let chroma = (1.0 - abs(2.0 * c.l - 1.0)) * c.s;
    let m = c.l - chroma * 0.5;
    let (r, g, b) = sextant_rgb(hue_degrees(c.h), chroma);
    Rgb::new(r + m, g + m, b + m, c.a)
}

/// Converts to CMYK with `k = 1 - max(r, g, b)`.
///
/// Pure black (`k == 1`) would divide zero by zero; it is mapped to
/// `c = m = y = 0` instead of NaN.
pub fn rgb_to_cmyk(c: Rgb) -> Cmyk {
    let k = 1.0 - max(max(c.r, c.g), c.b);
    let ink = 1.0 - k;
    if ink == 0.0 {
        return Cmyk::new(0.0, 0.0, 0.0, k, c.a);
    }
    Cmyk {
        c: (1.0 - c.r - k) / ink,
        m: (1.0 - c.g - k) / ink,
        y: (1.0 - c.b - k) / ink,
        k,
        a: c.a,
    }
}

pub fn cmyk_to_rgb(c: Cmyk) -> Rgb {
    Rgb {
        r: (1.0 - c.c) * (1.0 - c.k),
        g: (1.0 - c.m) * (1.0 - c.k),
        b: (1.0 - c.y) * (1.0 - c.k),
        a: c.a,
    }
}

// -- Composed edges (through Rgb) --

pub fn rgb32_to_hsv(c: Rgb32) -> Hsv {
    rgb_to_hsv(rgb32_to_rgb(c))
}

pub fn rgb32_to_hsl(c: Rgb32) -> Hsl {
    rgb_to_hsl(rgb32_to_rgb(c))
}

pub fn rgb32_to_cmyk(c: Rgb32) -> Cmyk {
    rgb_to_cmyk(rgb32_to_rgb(c))
}

pub fn hsv_to_rgb32(c: Hsv) -> Rgb32 {
    rgb_to_rgb32(hsv_to_rgb(c))
}

pub fn hsv_to_hsl(c: Hsv) -> Hsl {
    rgb_to_hsl(hsv_to_rgb(c))
}

pub fn hsv_to_cmyk(c: Hsv) -> Cmyk {
    rgb_to_cmyk(hsv_to_rgb(c))
}

pub fn hsl_to_rgb32(c: Hsl) -> Rgb32 {
    rgb_to_rgb32(hsl_to_rgb(c))
}

pub fn hsl_to_hsv(c: Hsl) -> Hsv {
    rgb_to_hsv(hsl_to_rgb(c))
}

pub fn hsl_to_cmyk(c: Hsl) -> Cmyk {
    rgb_to_cmyk(hsl_to_rgb(c))
}

pub fn cmyk_to_rgb32(c: Cmyk) -> Rgb32 {
    rgb_to_rgb32(cmyk_to_rgb(c))
}

pub fn cmyk_to_hsv(c: Cmyk) -> Hsv {
    rgb_to_hsv(cmyk_to_rgb(c))
}

pub fn cmyk_to_hsl(c: Cmyk) -> Hsl {
    rgb_to_hsl(cmyk_to_rgb(c))
}
