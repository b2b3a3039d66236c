//! The canonical color value and its floating-point sRGB views.
//!
//! A [`ColorValue`] is a packed 8-bit sRGB triple. Every other projection
//! (HSL, LAB, OKLCH, ...) is derived from it on demand and converted back
//! through a [`GamutPolicy`], so a `ColorValue` is always a legal color.
//!
//! [`Srgb`] and [`LinearRgb`] are the unquantized working forms used by the
//! converters. They may temporarily hold out-of-range values (for example
//! after an OKLCH color outside the sRGB gamut is decoded); quantizing back
//! to a `ColorValue` resolves that through the policy.

use crate::error::ColorError;
use crate::gamut::{ClampToRange, GamutPolicy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One color as an 8-bit sRGB triple.
///
/// Serializes as an uppercase hex string `"#RRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color with gamma-encoded components, nominally in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear-light RGB (gamma-decoded sRGB).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorValue {
    /// Pure black, `#000000`.
    pub const BLACK: ColorValue = ColorValue::new(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: ColorValue = ColorValue::new(255, 255, 255);

    /// A color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks the low 24 bits of `packed` as `0xRRGGBB`.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Packs the color as `0xRRGGBB`.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parses `#RRGGBB` or `#RGB`, with or without the leading `#`,
    /// case insensitive.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = |reason: &str| ColorError::InvalidHex {
            input: hex.to_string(),
            reason: reason.to_string(),
        };

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("contains a non-hex character"));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|e| invalid(&e.to_string()));
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let nibble = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            n => Err(invalid(&format!("expected 3 or 6 hex digits, got {n}"))),
        }
    }

    /// Formats the color as uppercase `#RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// The channel-inverted complement `(255 - r, 255 - g, 255 - b)`.
    pub const fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// The color as gamma-encoded floats in [0, 1].
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }

    /// The color as linear-light floats in [0, 1].
    pub fn to_linear(self) -> LinearRgb {
        srgb_to_linear(self.to_srgb())
    }

    /// Quantizes `srgb` after clipping each channel to [0, 1].
    pub fn from_srgb(srgb: Srgb) -> Self {
        Self::from_srgb_with(srgb, &ClampToRange)
    }

    /// Quantizes `srgb` after resolving out-of-gamut values with `policy`.
    pub fn from_srgb_with<P: GamutPolicy>(srgb: Srgb, policy: &P) -> Self {
        let mapped = policy.apply(srgb);
        Self::new(
            quantize(mapped.r),
            quantize(mapped.g),
            quantize(mapped.b),
        )
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s)
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ColorValue::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Srgb {
    /// True when every channel lies in [-tolerance, 1 + tolerance].
    pub fn is_in_gamut(self, tolerance: f64) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&c| c >= -tolerance && c <= 1.0 + tolerance)
    }
}

/// Rounds a [0, 1] channel to 8 bits, half away from zero. NaN maps to 0.
fn quantize(c: f64) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Decodes one gamma-encoded sRGB channel.
///
/// Odd-symmetric around zero so that out-of-gamut negative values survive a
/// decode/encode round trip.
fn decode_channel(c: f64) -> f64 {
    let magnitude = c.abs();
    let linear = if magnitude <= 0.04045 {
        magnitude / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// Encodes one linear channel with the sRGB transfer function.
fn encode_channel(c: f64) -> f64 {
    let magnitude = c.abs();
    let encoded = if magnitude <= 0.0031308 {
        magnitude * 12.92
    } else {
        1.055 * magnitude.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: decode_channel(c.r),
        g: decode_channel(c.g),
        b: decode_channel(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma. Does not clip.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: encode_channel(c.r),
        g: encode_channel(c.g),
        b: encode_channel(c.b),
    }
}
