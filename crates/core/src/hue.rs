//! Hue extraction and synthesis.
//!
//! Hue is a fraction of a full turn in [0, 1). The sextant math below is shared
//! with the HSV and HSL conversions so all three agree on tie-breaking.

use crate::color::Rgb;
use crate::scalar::{abs, max, min, modulo};

/// Largest channel, smallest channel and their difference.
#[inline]
pub(crate) fn extremes(c: Rgb) -> (f64, f64, f64) {
    let c_max = max(max(c.r, c.g), c.b);
    let c_min = min(min(c.r, c.g), c.b);
    (c_max, c_min, c_max - c_min)
}

/// Hue of a chromatic color given its precomputed `c_max` and `delta`.
///
/// Branches are tested red, green, blue in that order, so ties go to the
/// earlier channel. Negative results wrap into [0, 1); a negative sliver too
/// small to survive `+ 1.0` lands on 0 rather than 1.
pub(crate) fn chromatic_hue(c: Rgb, c_max: f64, delta: f64) -> f64 {
    let sextant = if c_max == c.r {
        (c.g - c.b) / delta
    } else if c_max == c.g {
        2.0 + (c.b - c.r) / delta
    } else {
        4.0 + (c.r - c.g) / delta
    };
    let hue = sextant * 60.0 / 360.0;
    if hue >= 0.0 {
        return hue;
    }
    let wrapped = hue + 1.0;
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Extracts the hue of a floating RGB color as a fraction of a turn.
///
/// Achromatic colors (all channels equal) have hue 0.
pub fn rgb_to_hue(c: Rgb) -> f64 {
    let (c_max, _, delta) = extremes(c);
    if delta == 0.0 {
        0.0
    } else {
        chromatic_hue(c, c_max, delta)
    }
}

/// Places `chroma` and its secondary component into one of six 60 degree bands.
///
/// `degrees` must already be wrapped into [0, 360). Returns `(r, g, b)` before
/// any lightness offset is added.
pub(crate) fn sextant_rgb(degrees: f64, chroma: f64) -> (f64, f64, f64) {
    let x = chroma * (1.0 - abs(modulo(degrees / 60.0, 2.0) - 1.0));
    if degrees >= 0.0 && degrees < 60.0 {
        (chroma, x, 0.0)
    } else if degrees >= 60.0 && degrees < 120.0 {
        (x, chroma, 0.0)
    } else if degrees >= 120.0 && degrees < 180.0 {
        (0.0, chroma, x)
    } else if degrees >= 180.0 && degrees < 240.0 {
        (0.0, x, chroma)
    } else if degrees >= 240.0 && degrees < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    }
}

/// Wraps a hue fraction onto the wheel and converts it to degrees.
#[inline]
pub(crate) fn hue_degrees(hue: f64) -> f64 {
    modulo(hue, 1.0) * 360.0
}

/// Synthesizes a fully saturated, full value opaque color from a hue.
///
/// Any real hue is accepted and wrapped onto the wheel first.
pub fn hue_to_rgb(hue: f64) -> Rgb {
    let (r, g, b) = sextant_rgb(hue_degrees(hue), 1.0);
    Rgb::opaque(r, g, b)
}

impl Rgb {
    /// Hue as a fraction of a turn. See [`rgb_to_hue`].
    pub fn hue(self) -> f64 {
        rgb_to_hue(self)
    }

    /// Fully saturated opaque color of the given hue. See [`hue_to_rgb`].
    pub fn from_hue(hue: f64) -> Rgb {
        hue_to_rgb(hue)
    }
}
