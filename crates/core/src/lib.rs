#![deny(unsafe_code)]
//! Color science engine for the chromakit palette tool.
//!
//! Provides the canonical [`ColorValue`], conversions to and from HSL, HSV,
//! CMYK, LAB, LCH, OKLCH, YPbPr and xvYCC ([`space`]), WCAG contrast
//! ([`contrast`]), CIE76 distance ([`distance`]), harmonies, scales,
//! gradients, seeded random palettes, text parsing and formatting.
//!
//! Everything here is pure and synchronous: no I/O, no shared state.

pub mod color;
pub mod config;
pub mod contrast;
pub mod distance;
pub mod error;
pub mod format;
pub mod gamut;
pub mod gradient;
pub mod harmony;
pub mod palette;
pub mod parse;
pub mod prng;
pub mod random;
pub mod scale;
pub mod space;

pub use color::{ColorValue, LinearRgb, Srgb};
pub use config::EngineConfig;
pub use contrast::{
    best_text_color, colorblind_risk, contrast_ratio, relative_luminance, ColorblindRisk,
    ContrastLevel, WcagReport,
};
pub use distance::{compare, delta_e, ColorDifference, Perceptibility};
pub use error::ColorError;
pub use gamut::{ClampToRange, GamutPolicy, ReduceChroma};
pub use gradient::{Gradient, GradientEnd, GradientKind, GradientStop};
pub use harmony::{harmony, harmony_in, Harmony, HueSpace, HARMONY_LEN};
pub use palette::{Palette, Swatch};
pub use parse::{parse_color, parse_or};
pub use prng::Xorshift64;
pub use random::RandomPaletteSampler;
pub use scale::{scale, scale_with, ScaleBounds, ScaleMode};
pub use space::{ColorSpace, Projection};
