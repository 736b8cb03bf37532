#![deny(unsafe_code)]
//! Color-space conversion engine.
//!
//! Five color representations (`Rgb32`, `Rgb`, `Hsv`, `Hsl`, `Cmyk`), a complete
//! pairwise conversion graph between them routed through floating point `Rgb`,
//! BT.709 grayscale projection for every type, and hue extraction/synthesis.
//! Everything operates on single values and every conversion is a pure function.

pub mod color;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod gray;
pub mod hue;
pub mod scalar;

pub use color::{Cmyk, Hsl, Hsv, Rgb, Rgb32};
pub use dispatch::{to_grayscale, AnyColor, Color, ColorKind};
pub use error::ColorError;
pub use hue::{hue_to_rgb, rgb_to_hue};
