//! HSL and HSV, the hexcone models over gamma-encoded sRGB.

use super::normalize_hue;
use crate::color::{ColorValue, Srgb};
use serde::{Deserialize, Serialize};

/// HSL: hue in [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// HSV: hue in [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Hue of an sRGB color given its max channel and chroma `delta`.
/// Achromatic colors (delta 0) get hue 0.
fn hexcone_hue(c: Srgb, max: f64, delta: f64) -> f64 {
    if delta <= 0.0 {
        return 0.0;
    }
    let sector = if max == c.r {
        ((c.g - c.b) / delta).rem_euclid(6.0)
    } else if max == c.g {
        (c.b - c.r) / delta + 2.0
    } else {
        (c.r - c.g) / delta + 4.0
    };
    normalize_hue(60.0 * sector)
}

/// Places chroma `c` and secondary component `x` by hue sector, offset by `m`.
fn hexcone_rgb(h: f64, chroma: f64, m: f64) -> Srgb {
    let h = normalize_hue(h) / 60.0;
    let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    Srgb {
        r: r + m,
        g: g + m,
        b: b + m,
    }
}

fn extrema(c: Srgb) -> (f64, f64) {
    (c.r.max(c.g).max(c.b), c.r.min(c.g).min(c.b))
}

impl ColorValue {
    /// HSL projection with hue in [0, 360).
    pub fn to_hsl(self) -> Hsl {
        let c = self.to_srgb();
        let (max, min) = extrema(c);
        let delta = max - min;
        let l = 0.5 * (max + min);
        let s = if delta <= 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        Hsl {
            h: hexcone_hue(c, max, delta),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }

    /// HSV projection with hue in [0, 360).
    pub fn to_hsv(self) -> Hsv {
        let c = self.to_srgb();
        let (max, min) = extrema(c);
        let delta = max - min;
        let s = if max <= 0.0 { 0.0 } else { delta / max };
        Hsv {
            h: hexcone_hue(c, max, delta),
            s: s.clamp(0.0, 1.0),
            v: max,
        }
    }
}

impl Hsl {
    /// Converts to RGB. Saturation and lightness are clamped first.
    pub fn to_color(self) -> ColorValue {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        ColorValue::from_srgb(hexcone_rgb(self.h, chroma, l - 0.5 * chroma))
    }
}

impl Hsv {
    /// Converts to RGB. Saturation and value are clamped first.
    pub fn to_color(self) -> ColorValue {
        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);
        let chroma = v * s;
        ColorValue::from_srgb(hexcone_rgb(self.h, chroma, v - chroma))
    }
}
