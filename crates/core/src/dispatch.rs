//! Uniform conversion API over the five color types.
//!
//! Three layers, from static to dynamic:
//! - `From` impls for all twenty edges, so `Hsv::from(rgb)` and `rgb.into()` work.
//! - The [`Color`] trait: name the destination (`c.to_hsv()`) and let the
//!   source type pick the pairwise function.
//! - [`AnyColor`] + [`ColorKind`]: a tagged union for callers that only know
//!   the source and target at runtime (the CLI).

use std::fmt;
use std::str::FromStr;

use crate::color::{Cmyk, Hsl, Hsv, Rgb, Rgb32};
use crate::convert::*;
use crate::error::ColorError;
use crate::gray::{
    cmyk_to_grayscale, hsl_to_grayscale, hsv_to_grayscale, rgb32_to_grayscale, rgb_to_grayscale,
};
use serde::{Deserialize, Serialize};

macro_rules! from_edge {
    ($src:ident => $dst:ident, $f:ident) => {
        impl From<$src> for $dst {
            fn from(c: $src) -> $dst {
                $f(c)
            }
        }
    };
}

from_edge!(Rgb32 => Rgb, rgb32_to_rgb);
from_edge!(Rgb32 => Hsv, rgb32_to_hsv);
from_edge!(Rgb32 => Hsl, rgb32_to_hsl);
from_edge!(Rgb32 => Cmyk, rgb32_to_cmyk);
from_edge!(Rgb => Rgb32, rgb_to_rgb32);
from_edge!(Rgb => Hsv, rgb_to_hsv);
from_edge!(Rgb => Hsl, rgb_to_hsl);
from_edge!(Rgb => Cmyk, rgb_to_cmyk);
from_edge!(Hsv => Rgb32, hsv_to_rgb32);
from_edge!(Hsv => Rgb, hsv_to_rgb);
from_edge!(Hsv => Hsl, hsv_to_hsl);
from_edge!(Hsv => Cmyk, hsv_to_cmyk);
from_edge!(Hsl => Rgb32, hsl_to_rgb32);
from_edge!(Hsl => Rgb, hsl_to_rgb);
from_edge!(Hsl => Hsv, hsl_to_hsv);
from_edge!(Hsl => Cmyk, hsl_to_cmyk);
from_edge!(Cmyk => Rgb32, cmyk_to_rgb32);
from_edge!(Cmyk => Rgb, cmyk_to_rgb);
from_edge!(Cmyk => Hsv, cmyk_to_hsv);
from_edge!(Cmyk => Hsl, cmyk_to_hsl);

/// A color value that can be converted to every other representation.
///
/// The targets are reached through the `From` edges above; converting to the
/// type's own representation goes through the reflexive `From` and returns
/// the value unchanged.
pub trait Color: Copy + Into<Rgb32> + Into<Rgb> + Into<Hsv> + Into<Hsl> + Into<Cmyk> {
    /// Which representation this type is.
    const KIND: ColorKind;

    fn to_rgb32(self) -> Rgb32 {
        Into::<Rgb32>::into(self)
    }

    fn to_rgb(self) -> Rgb {
        Into::<Rgb>::into(self)
    }

    fn to_hsv(self) -> Hsv {
        Into::<Hsv>::into(self)
    }

    fn to_hsl(self) -> Hsl {
        Into::<Hsl>::into(self)
    }

    fn to_cmyk(self) -> Cmyk {
        Into::<Cmyk>::into(self)
    }

    /// Luminance-weighted gray in the same representation.
    fn to_grayscale(self) -> Self;
}

impl Color for Rgb32 {
    const KIND: ColorKind = ColorKind::Rgb32;

    fn to_grayscale(self) -> Self {
        rgb32_to_grayscale(self)
    }
}

impl Color for Rgb {
    const KIND: ColorKind = ColorKind::Rgb;

    fn to_grayscale(self) -> Self {
        rgb_to_grayscale(self)
    }
}

impl Color for Hsv {
    const KIND: ColorKind = ColorKind::Hsv;

    fn to_grayscale(self) -> Self {
        hsv_to_grayscale(self)
    }
}

impl Color for Hsl {
    const KIND: ColorKind = ColorKind::Hsl;

    fn to_grayscale(self) -> Self {
        hsl_to_grayscale(self)
    }
}

impl Color for Cmyk {
    const KIND: ColorKind = ColorKind::Cmyk;

    fn to_grayscale(self) -> Self {
        cmyk_to_grayscale(self)
    }
}

/// Grayscale projection for any color type.
pub fn to_grayscale<C: Color>(c: C) -> C {
    c.to_grayscale()
}

/// All recognized color kind names.
const KIND_NAMES: &[&str] = &["rgb32", "rgb", "hsv", "hsl", "cmyk"];

/// The five color representations, as a runtime tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Rgb32,
    Rgb,
    Hsv,
    Hsl,
    Cmyk,
}

impl ColorKind {
    /// Every kind, in the same order as [`ColorKind::list_names`].
    pub const ALL: [ColorKind; 5] = [
        ColorKind::Rgb32,
        ColorKind::Rgb,
        ColorKind::Hsv,
        ColorKind::Hsl,
        ColorKind::Cmyk,
    ];

    /// Looks up a kind by name (case insensitive).
    ///
    /// Returns `ColorError::UnknownKind` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        match name.to_ascii_lowercase().as_str() {
            "rgb32" => Ok(ColorKind::Rgb32),
            "rgb" => Ok(ColorKind::Rgb),
            "hsv" => Ok(ColorKind::Hsv),
            "hsl" => Ok(ColorKind::Hsl),
            "cmyk" => Ok(ColorKind::Cmyk),
            _ => Err(ColorError::UnknownKind(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorKind::Rgb32 => "rgb32",
            ColorKind::Rgb => "rgb",
            ColorKind::Hsv => "hsv",
            ColorKind::Hsl => "hsl",
            ColorKind::Cmyk => "cmyk",
        }
    }

    /// Returns a slice of all recognized kind names.
    pub fn list_names() -> &'static [&'static str] {
        KIND_NAMES
    }

    /// Number of color channels, excluding alpha.
    pub fn channel_count(self) -> usize {
        match self {
            ColorKind::Cmyk => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A color of any of the five representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AnyColor {
    Rgb32(Rgb32),
    Rgb(Rgb),
    Hsv(Hsv),
    Hsl(Hsl),
    Cmyk(Cmyk),
}

/// Applies `$body` to the inner value of an `AnyColor`, whatever its variant.
macro_rules! with_inner {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyColor::Rgb32($inner) => $body,
            AnyColor::Rgb($inner) => $body,
            AnyColor::Hsv($inner) => $body,
            AnyColor::Hsl($inner) => $body,
            AnyColor::Cmyk($inner) => $body,
        }
    };
}

impl AnyColor {
    pub fn kind(self) -> ColorKind {
        match self {
            AnyColor::Rgb32(_) => ColorKind::Rgb32,
            AnyColor::Rgb(_) => ColorKind::Rgb,
            AnyColor::Hsv(_) => ColorKind::Hsv,
            AnyColor::Hsl(_) => ColorKind::Hsl,
            AnyColor::Cmyk(_) => ColorKind::Cmyk,
        }
    }

    /// Converts to the `target` representation using the pairwise function
    /// selected by the source variant. Same-kind conversion is the identity.
    pub fn convert(self, target: ColorKind) -> AnyColor {
        with_inner!(self, c => match target {
            ColorKind::Rgb32 => AnyColor::Rgb32(c.to_rgb32()),
            ColorKind::Rgb => AnyColor::Rgb(c.to_rgb()),
            ColorKind::Hsv => AnyColor::Hsv(c.to_hsv()),
            ColorKind::Hsl => AnyColor::Hsl(c.to_hsl()),
            ColorKind::Cmyk => AnyColor::Cmyk(c.to_cmyk()),
        })
    }

    /// The hub representation of this color, whatever its kind.
    pub fn to_rgb(self) -> Rgb {
        with_inner!(self, c => c.to_rgb())
    }

    /// Grayscale projection, keeping the representation.
    pub fn grayscale(self) -> AnyColor {
        with_inner!(self, c => AnyColor::from(c.to_grayscale()))
    }

    /// Parses a color of the given kind from text.
    ///
    /// Channels are separated by commas and/or whitespace; alpha is optional
    /// and defaults to opaque. `rgb32` channels are integers 0-255 and may
    /// also be given as a hex string (`#rrggbb` or `#rrggbbaa`, `#` optional).
    /// All other kinds take real numbers, which are not range checked.
    pub fn parse(kind: ColorKind, text: &str) -> Result<AnyColor, ColorError> {
        let text = text.trim();
        tracing::trace!(%kind, text, "parsing color");

        if kind == ColorKind::Rgb32 && text.starts_with('#') {
            return Rgb32::from_hex(text).map(AnyColor::Rgb32);
        }

        let fields: Vec<&str> = text
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        // A lone six or eight character field can only be hex.
        if kind == ColorKind::Rgb32 && fields.len() == 1 && matches!(fields[0].len(), 6 | 8) {
            return Rgb32::from_hex(fields[0]).map(AnyColor::Rgb32);
        }

        let n = kind.channel_count();
        if fields.len() != n && fields.len() != n + 1 {
            return Err(ColorError::InvalidChannels {
                kind: kind.to_string(),
                expected: format!("{n} or {}", n + 1),
                got: fields.len(),
            });
        }

        let color = match kind {
            ColorKind::Rgb32 => {
                let v = parse_channels::<u8>(&fields)?;
                AnyColor::Rgb32(Rgb32::new(v[0], v[1], v[2], alpha_or(&v, 3, 255)))
            }
            ColorKind::Rgb => {
                let v = parse_channels::<f64>(&fields)?;
                AnyColor::Rgb(Rgb::new(v[0], v[1], v[2], alpha_or(&v, 3, 1.0)))
            }
            ColorKind::Hsv => {
                let v = parse_channels::<f64>(&fields)?;
                AnyColor::Hsv(Hsv::new(v[0], v[1], v[2], alpha_or(&v, 3, 1.0)))
            }
            ColorKind::Hsl => {
                let v = parse_channels::<f64>(&fields)?;
                AnyColor::Hsl(Hsl::new(v[0], v[1], v[2], alpha_or(&v, 3, 1.0)))
            }
            ColorKind::Cmyk => {
                let v = parse_channels::<f64>(&fields)?;
                AnyColor::Cmyk(Cmyk::new(v[0], v[1], v[2], v[3], alpha_or(&v, 4, 1.0)))
            }
        };
        Ok(color)
    }
}

/// Parses every field as `T`, failing on the first bad one.
fn parse_channels<T>(fields: &[&str]) -> Result<Vec<T>, ColorError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fields
        .iter()
        .map(|s| {
            s.parse::<T>()
                .map_err(|e| ColorError::InvalidNumber(format!("'{s}': {e}")))
        })
        .collect()
}

/// Channel `index` if present, else the opaque default.
fn alpha_or<T: Copy>(v: &[T], index: usize, opaque: T) -> T {
    v.get(index).copied().unwrap_or(opaque)
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_inner!(self, c => fmt::Display::fmt(c, f))
    }
}

macro_rules! any_from {
    ($ty:ident) => {
        impl From<$ty> for AnyColor {
            fn from(c: $ty) -> AnyColor {
                AnyColor::$ty(c)
            }
        }
    };
}

any_from!(Rgb32);
any_from!(Rgb);
any_from!(Hsv);
any_from!(Hsl);
any_from!(Cmyk);
