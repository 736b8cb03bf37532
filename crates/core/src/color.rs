//! Color value types.
//!
//! Five representations of a single color sample: `Rgb32` (bytes), `Rgb`
//! (floating point, the hub every conversion routes through), `Hsv`, `Hsl` and
//! `Cmyk`. Floating channels nominally live in [0, 1]; hue is a fraction of a
//! full turn, not degrees. Nothing here enforces a range, so intermediate
//! arithmetic such as blending is never silently clipped. The only clamping
//! happens when quantizing to `Rgb32`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 8-bit RGBA color.
///
/// Serializes as a hex string (`"#rrggbb"` when opaque, `"#rrggbbaa"` otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Floating point RGBA color with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

/// Hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

/// Cyan, magenta, yellow, black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
    pub a: f64,
}

impl Rgb32 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color (alpha 255).
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses `"#rrggbb"` or `"#rrggbbaa"` (leading `#` optional, case insensitive).
    ///
    /// Six digits yield an opaque color. Returns `ColorError::InvalidHex`
    /// for any other length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Rgb32, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorError::InvalidHex(format!(
                "expected 6 or 8 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(format!("'{hex}' contains a non-hex digit")));
        }
        let byte = |i: usize, name: &str| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ColorError::InvalidHex(format!("invalid {name} component: {e}")))
        };
        let r = byte(0, "red")?;
        let g = byte(2, "green")?;
        let b = byte(4, "blue")?;
        let a = if hex.len() == 8 { byte(6, "alpha")? } else { 255 };
        Ok(Rgb32 { r, g, b, a })
    }

    /// Formats as `"#rrggbb"`, or `"#rrggbbaa"` when alpha is not 255.
    pub fn to_hex(self) -> String {
        let Rgb32 { r, g, b, a } = self;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self { h, s, v, a }
    }

    pub const fn opaque(h: f64, s: f64, v: f64) -> Self {
        Self::new(h, s, v, 1.0)
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    pub const fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64, a: f64) -> Self {
        Self { c, m, y, k, a }
    }

    pub const fn opaque(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::new(c, m, y, k, 1.0)
    }
}

// Every default is opaque black.

impl Default for Rgb32 {
    fn default() -> Self {
        Self::opaque(0, 0, 0)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

impl Default for Hsv {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

impl Default for Hsl {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

impl Default for Cmyk {
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0, 1.0)
    }
}

impl Serialize for Rgb32 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb32 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb32::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Rgb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {} G: {} B: {} A: {}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R: {} G: {} B: {} A: {}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H: {} S: {} V: {} A: {}", self.h, self.s, self.v, self.a)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H: {} S: {} L: {} A: {}", self.h, self.s, self.l, self.a)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C: {} M: {} Y: {} K: {} A: {}",
            self.c, self.m, self.y, self.k, self.a
        )
    }
}

/// Implements a componentwise binary operator (alpha included) between two
/// values of the same color type.
macro_rules! componentwise {
    ($ty:ident, $trait:ident, $method:ident, $op:tt, [$($field:ident),+]) => {
        impl $trait for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field $op rhs.$field),+ }
            }
        }
    };
}

componentwise!(Rgb, Add, add, +, [r, g, b, a]);
componentwise!(Rgb, Sub, sub, -, [r, g, b, a]);
componentwise!(Rgb, Mul, mul, *, [r, g, b, a]);
componentwise!(Rgb, Div, div, /, [r, g, b, a]);
componentwise!(Hsv, Mul, mul, *, [h, s, v, a]);
componentwise!(Hsv, Div, div, /, [h, s, v, a]);
componentwise!(Hsl, Mul, mul, *, [h, s, l, a]);
componentwise!(Hsl, Div, div, /, [h, s, l, a]);
componentwise!(Cmyk, Mul, mul, *, [c, m, y, k, a]);
componentwise!(Cmyk, Div, div, /, [c, m, y, k, a]);

impl Mul<f64> for Rgb {
    type Output = Rgb;

    /// Scales all four channels, alpha included.
    fn mul(self, rhs: f64) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Div<f64> for Rgb {
    type Output = Rgb;

    fn div(self, rhs: f64) -> Rgb {
        Rgb::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Defaults and constructors --

    #[test]
    fn defaults_are_opaque_black() {
        assert_eq!(Rgb32::default(), Rgb32::new(0, 0, 0, 255));
        assert_eq!(Rgb::default(), Rgb::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Hsv::default(), Hsv::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Hsl::default(), Hsl::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Cmyk::default(), Cmyk::new(0.0, 0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn opaque_constructors_default_alpha() {
        assert_eq!(Rgb32::opaque(1, 2, 3).a, 255);
        assert_eq!(Rgb::opaque(0.1, 0.2, 0.3).a, 1.0);
        assert_eq!(Hsv::opaque(0.1, 0.2, 0.3).a, 1.0);
        assert_eq!(Hsl::opaque(0.1, 0.2, 0.3).a, 1.0);
        assert_eq!(Cmyk::opaque(0.1, 0.2, 0.3, 0.4).a, 1.0);
    }

    #[test]
    fn equality_compares_every_channel() {
        assert_ne!(Rgb32::new(1, 2, 3, 4), Rgb32::new(1, 2, 3, 5));
        assert_ne!(Rgb::opaque(0.5, 0.5, 0.5), Rgb::new(0.5, 0.5, 0.5, 0.9));
        assert_ne!(
            Cmyk::opaque(0.0, 0.0, 0.0, 0.5),
            Cmyk::opaque(0.0, 0.0, 0.0, 0.6)
        );
    }

    // -- Display --

    #[test]
    fn rgb32_display_lists_integer_channels() {
        assert_eq!(
            Rgb32::new(255, 128, 0, 255).to_string(),
            "R: 255 G: 128 B: 0 A: 255"
        );
    }

    #[test]
    fn float_display_uses_shortest_form() {
        assert_eq!(Hsv::opaque(0.5, 1.0, 1.0).to_string(), "H: 0.5 S: 1 V: 1 A: 1");
        assert_eq!(
            Rgb::new(1.0, 0.25, 0.0, 1.0).to_string(),
            "R: 1 G: 0.25 B: 0 A: 1"
        );
        assert_eq!(
            Hsl::new(0.0, 0.0, 0.5, 0.5).to_string(),
            "H: 0 S: 0 L: 0.5 A: 0.5"
        );
        assert_eq!(
            Cmyk::default().to_string(),
            "C: 0 M: 0 Y: 0 K: 1 A: 1"
        );
    }

    // -- Arithmetic --

    #[test]
    fn rgb_arithmetic_is_componentwise_including_alpha() {
        let a = Rgb::new(0.5, 0.25, 1.0, 1.0);
        let b = Rgb::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Rgb::new(1.0, 0.75, 1.5, 1.5));
        assert_eq!(a - b, Rgb::new(0.0, -0.25, 0.5, 0.5));
        assert_eq!(a * b, Rgb::new(0.25, 0.125, 0.5, 0.5));
        assert_eq!(a / b, Rgb::new(1.0, 0.5, 2.0, 2.0));
        assert_eq!(a * 2.0, Rgb::new(1.0, 0.5, 2.0, 2.0));
        assert_eq!(a / 2.0, Rgb::new(0.25, 0.125, 0.5, 0.5));
    }

    #[test]
    fn arithmetic_does_not_clamp() {
        let sum = Rgb::opaque(0.8, 0.8, 0.8) + Rgb::opaque(0.8, 0.8, 0.8);
        assert!(sum.r > 1.0, "expected unclamped sum, got {}", sum.r);
        assert_eq!(sum.a, 2.0);
    }

    #[test]
    fn cylindrical_and_cmyk_arithmetic_is_componentwise() {
        let hsv = Hsv::new(0.5, 0.5, 0.5, 1.0) * Hsv::new(0.5, 2.0, 1.0, 0.5);
        assert_eq!(hsv, Hsv::new(0.25, 1.0, 0.5, 0.5));
        let hsl = Hsl::new(0.5, 0.5, 0.5, 1.0) / Hsl::new(0.5, 2.0, 1.0, 0.5);
        assert_eq!(hsl, Hsl::new(1.0, 0.25, 0.5, 2.0));
        let cmyk = Cmyk::new(0.5, 0.5, 0.5, 0.5, 1.0) / Cmyk::new(1.0, 0.5, 0.25, 0.5, 1.0);
        assert_eq!(cmyk, Cmyk::new(0.5, 1.0, 2.0, 1.0, 1.0));
        let cmyk = Cmyk::new(0.5, 0.5, 0.5, 0.5, 1.0) * Cmyk::new(1.0, 0.5, 0.0, 0.5, 0.5);
        assert_eq!(cmyk, Cmyk::new(0.5, 0.25, 0.0, 0.25, 0.5));
    }

    // -- Hex --

    #[test]
    fn from_hex_parses_six_digits_as_opaque() {
        let c = Rgb32::from_hex("#ff8000").unwrap();
        assert_eq!(c, Rgb32::new(255, 128, 0, 255));
    }

    #[test]
    fn from_hex_parses_eight_digits_without_hash() {
        let c = Rgb32::from_hex("C0FFEE80").unwrap();
        assert_eq!(c, Rgb32::new(0xc0, 0xff, 0xee, 0x80));
    }

    #[test]
    fn from_hex_returns_error_for_invalid_input() {
        assert!(Rgb32::from_hex("#gggggg").is_err());
        assert!(Rgb32::from_hex("#fff").is_err());
        assert!(Rgb32::from_hex("").is_err());
        assert!(Rgb32::from_hex("#ff00ff0").is_err());
        assert!(Rgb32::from_hex("#ff00ff00ff").is_err());
        assert!(Rgb32::from_hex("ééé").is_err());
        assert!(Rgb32::from_hex("#+f+f+f").is_err());
        assert!(Rgb32::from_hex("+1+2+3ff").is_err());
    }

    #[test]
    fn to_hex_omits_alpha_when_opaque() {
        assert_eq!(Rgb32::opaque(255, 0, 0).to_hex(), "#ff0000");
        assert_eq!(Rgb32::new(0, 0, 0, 0).to_hex(), "#00000000");
    }

    #[test]
    fn hex_round_trip_is_exact() {
        for original in ["#c0ffee", "#12345678", "#000000", "#ffffff00"] {
            let color = Rgb32::from_hex(original).unwrap();
            assert_eq!(color.to_hex(), original);
        }
    }

    // -- Serde --

    #[test]
    fn rgb32_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb32::opaque(255, 0, 0)).unwrap();
        assert_eq!(json, "\"#ff0000\"");
    }

    #[test]
    fn rgb32_deserialize_rejects_invalid_hex() {
        let result: Result<Rgb32, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    #[test]
    fn float_types_serialize_as_named_channels() {
        let json = serde_json::to_value(Cmyk::new(0.0, 0.5, 1.0, 0.25, 1.0)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"c": 0.0, "m": 0.5, "y": 1.0, "k": 0.25, "a": 1.0})
        );
        let back: Hsv = serde_json::from_str(r#"{"h":0.5,"s":1.0,"v":1.0,"a":1.0}"#).unwrap();
        assert_eq!(back, Hsv::opaque(0.5, 1.0, 1.0));
    }
}
