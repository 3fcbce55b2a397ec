//! Color representation and conversion module
//!
//! This module holds the conversion kernel between RGB, HEX, HSL, HSV and
//! CMYK, and the `Color` value object built on top of it.

pub mod conversion;
pub mod model;

pub use conversion::{Cmyk, Hex, Hsl, Hsv};
pub use model::{Color, ColorArgs, ColorInput, ColorSpace};
