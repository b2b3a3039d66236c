//! OKLab and its cylindrical form OKLCH.
//!
//! OKLCH is the interpolation space for scales and gradients: equal steps in
//! its lightness read as equal steps to the eye, and hue stays put while
//! lightness and chroma move.

use super::{interpolate_hue, normalize_hue};
use crate::color::{linear_to_srgb, srgb_to_linear, ColorValue, LinearRgb, Srgb};
use crate::gamut::{ClampToRange, GamutPolicy};
use serde::{Deserialize, Serialize};

/// Below this chroma an OKLCH color is treated as achromatic (hue 0).
const ACHROMATIC_CHROMA: f64 = 1e-4;

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCH: lightness in [0, 1], chroma >= 0, hue in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Converts linear RGB to OKLab: LMS matrix, cube root, OKLab matrix.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab back to linear RGB. The result may leave [0, 1].
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Converts OKLab to polar form. Near-zero chroma reports hue 0.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let chroma = c.a.hypot(c.b);
    let h = if chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    OkLch {
        l: c.l,
        c: chroma,
        h,
    }
}

/// Polar OKLCH back to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let (sin, cos) = c.h.to_radians().sin_cos();
    OkLab {
        l: c.l,
        a: c.c * cos,
        b: c.c * sin,
    }
}

/// sRGB to OKLCH via linear RGB and OKLab.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

impl ColorValue {
    /// OKLab projection.
    pub fn to_oklab(self) -> OkLab {
        linear_to_oklab(self.to_linear())
    }

    /// OKLCH projection, lightness clamped to [0, 1].
    pub fn to_oklch(self) -> OkLch {
        let lch = oklab_to_oklch(self.to_oklab());
        OkLch {
            l: lch.l.clamp(0.0, 1.0),
            ..lch
        }
    }
}

impl OkLab {
    /// Converts to RGB, clipping out-of-gamut channels.
    pub fn to_color(self) -> ColorValue {
        self.to_color_with(&ClampToRange)
    }

    /// Converts to RGB, mapping out-of-gamut values through `policy`.
    pub fn to_color_with<P: GamutPolicy>(self, policy: &P) -> ColorValue {
        ColorValue::from_srgb_with(linear_to_srgb(oklab_to_linear(self)), policy)
    }
}

impl OkLch {
    /// Converts to RGB, clipping out-of-gamut channels.
    pub fn to_color(self) -> ColorValue {
        self.to_color_with(&ClampToRange)
    }

    /// Converts to RGB, mapping out-of-gamut values through `policy`.
    pub fn to_color_with<P: GamutPolicy>(self, policy: &P) -> ColorValue {
        oklch_to_oklab(self.normalized()).to_color_with(policy)
    }

    /// Clamps lightness to [0, 1], chroma to >= 0 and wraps hue.
    pub fn normalized(self) -> Self {
        Self {
            l: self.l.clamp(0.0, 1.0),
            c: self.c.max(0.0),
            h: normalize_hue(self.h),
        }
    }

    /// Linear interpolation of lightness and chroma, shortest-arc hue.
    pub fn lerp(self, other: OkLch, t: f64) -> OkLch {
        OkLch {
            l: self.l + t * (other.l - self.l),
            c: self.c + t * (other.c - self.c),
            h: interpolate_hue(self.h, other.h, t),
        }
    }
}

/// Samples a piecewise-linear OKLCH path at `t` in [0, 1].
///
/// The points are evenly spaced along `t`: 0 is the first point and 1 the
/// last. `t` is clamped and NaN reads as 0.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn sample_path(points: &[OkLch], t: f64) -> OkLch {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let n = points.len();
    if n == 1 {
        return points[0];
    }

    let scaled = t * (n - 1) as f64;
    let idx = (scaled as usize).min(n - 2);
    let frac = scaled - idx as f64;
    points[idx].lerp(points[idx + 1], frac)
}
