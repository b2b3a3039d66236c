//! Naive subtractive CMYK. Not ICC accurate; it is the formula design
//! tools show next to the hex code.

use crate::color::{ColorValue, Srgb};
use serde::{Deserialize, Serialize};

/// CMYK with every component in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl ColorValue {
    /// K = 1 - max(R, G, B); pure black reports C = M = Y = 0.
    pub fn to_cmyk(self) -> Cmyk {
        let rgb = self.to_srgb();
        let k = 1.0 - rgb.r.max(rgb.g).max(rgb.b);
        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }
        let residual = |channel: f64| ((1.0 - channel - k) / (1.0 - k)).clamp(0.0, 1.0);
        Cmyk {
            c: residual(rgb.r),
            m: residual(rgb.g),
            y: residual(rgb.b),
            k: k.clamp(0.0, 1.0),
        }
    }
}

impl Cmyk {
    /// Naive CMYK to RGB, ignoring ink profiles.
    pub fn to_color(self) -> ColorValue {
        let unit = |v: f64| v.clamp(0.0, 1.0);
        let white = 1.0 - unit(self.k);
        ColorValue::from_srgb(Srgb {
            r: (1.0 - unit(self.c)) * white,
            g: (1.0 - unit(self.m)) * white,
            b: (1.0 - unit(self.y)) * white,
        })
    }
}
