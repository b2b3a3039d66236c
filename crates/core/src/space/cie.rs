//! CIE XYZ, CIELAB and CIELCh under a D65 white.
//!
//! XYZ is only a pivot between linear RGB and LAB; it is deliberately not a
//! [`ColorSpace`](super::ColorSpace) and has no string form.

use super::normalize_hue;
use crate::color::{linear_to_srgb, ColorValue, LinearRgb};
use crate::gamut::{ClampToRange, GamutPolicy};
use serde::{Deserialize, Serialize};

/// D65 reference white, Y normalized to 1.
const WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// CIE ε = 216 / 24389.
const EPSILON: f64 = 216.0 / 24389.0;

/// CIE κ = 24389 / 27.
const KAPPA: f64 = 24389.0 / 27.0;

/// Below this chroma an LCH color is treated as achromatic (hue 0).
const ACHROMATIC_CHROMA: f64 = 1e-3;

/// CIE 1931 tristimulus values, Y in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// CIELAB: L in [0, 100], a and b unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// CIELCh: L in [0, 100], C >= 0, H in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Linear sRGB to CIE XYZ (D65).
pub fn linear_to_xyz(c: LinearRgb) -> Xyz {
    Xyz {
        x: 0.4124564 * c.r + 0.3575761 * c.g + 0.1804375 * c.b,
        y: 0.2126729 * c.r + 0.7151522 * c.g + 0.0721750 * c.b,
        z: 0.0193339 * c.r + 0.1191920 * c.g + 0.9503041 * c.b,
    }
}

/// CIE XYZ (D65) to linear sRGB. Channels may leave [0, 1].
pub fn xyz_to_linear(c: Xyz) -> LinearRgb {
    LinearRgb {
        r: 3.2404542 * c.x - 1.5371385 * c.y - 0.4985314 * c.z,
        g: -0.9692660 * c.x + 1.8760108 * c.y + 0.0415560 * c.z,
        b: 0.0556434 * c.x - 0.2040259 * c.y + 1.0572252 * c.z,
    }
}

/// The LAB companding function: cube root with a linear toe.
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inverse(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// XYZ to CIE LAB, D65 reference white.
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_f(c.x / WHITE.x);
    let fy = lab_f(c.y / WHITE.y);
    let fz = lab_f(c.z / WHITE.z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// CIE LAB to XYZ, D65 reference white.
pub fn lab_to_xyz(c: Lab) -> Xyz {
    let fy = (c.l + 16.0) / 116.0;
    let fx = fy + c.a / 500.0;
    let fz = fy - c.b / 200.0;
    let y = if c.l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        c.l / KAPPA
    };
    Xyz {
        x: lab_f_inverse(fx) * WHITE.x,
        y: y * WHITE.y,
        z: lab_f_inverse(fz) * WHITE.z,
    }
}

/// LAB to polar LCH. Near-neutral colors get hue 0.
pub fn lab_to_lch(c: Lab) -> Lch {
    let chroma = c.a.hypot(c.b);
    let h = if chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    Lch {
        l: c.l,
        c: chroma,
        h,
    }
}

/// Polar LCH back to LAB.
pub fn lch_to_lab(c: Lch) -> Lab {
    let (sin, cos) = c.h.to_radians().sin_cos();
    Lab {
        l: c.l,
        a: c.c * cos,
        b: c.c * sin,
    }
}

impl ColorValue {
    /// CIE XYZ projection, D65.
    pub fn to_xyz(self) -> Xyz {
        linear_to_xyz(self.to_linear())
    }

    /// LAB projection, L clamped to [0, 100].
    pub fn to_lab(self) -> Lab {
        let lab = xyz_to_lab(self.to_xyz());
        Lab {
            l: lab.l.clamp(0.0, 100.0),
            ..lab
        }
    }

    /// LCH projection, L clamped to [0, 100].
    pub fn to_lch(self) -> Lch {
        lab_to_lch(self.to_lab())
    }
}

impl Xyz {
    /// Converts to RGB, clipping out-of-gamut channels.
    pub fn to_color(self) -> ColorValue {
        self.to_color_with(&ClampToRange)
    }

    /// Converts to RGB, mapping out-of-gamut values through `policy`.
    pub fn to_color_with<P: GamutPolicy>(self, policy: &P) -> ColorValue {
        ColorValue::from_srgb_with(linear_to_srgb(xyz_to_linear(self)), policy)
    }
}

impl Lab {
    /// Converts to RGB, clipping out-of-gamut channels.
    pub fn to_color(self) -> ColorValue {
        self.to_color_with(&ClampToRange)
    }

    /// Converts to RGB, mapping out-of-gamut values through `policy`.
    pub fn to_color_with<P: GamutPolicy>(self, policy: &P) -> ColorValue {
        let lab = Lab {
            l: self.l.clamp(0.0, 100.0),
            ..self
        };
        lab_to_xyz(lab).to_color_with(policy)
    }
}

impl Lch {
    /// Converts to RGB, clipping out-of-gamut channels.
    pub fn to_color(self) -> ColorValue {
        self.to_color_with(&ClampToRange)
    }

    /// Converts to RGB, mapping out-of-gamut values through `policy`.
    pub fn to_color_with<P: GamutPolicy>(self, policy: &P) -> ColorValue {
        let lch = Lch {
            l: self.l,
            c: self.c.max(0.0),
            h: normalize_hue(self.h),
        };
        lch_to_lab(lch).to_color_with(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_maps_to_reference_white() {
        let lab = ColorValue::WHITE.to_lab();
        assert!((lab.l - 100.0).abs() < 1e-3, "L: {}", lab.l);
        assert!(lab.a.abs() < 1e-3, "a: {}", lab.a);
        assert!(lab.b.abs() < 1e-3, "b: {}", lab.b);
    }

    #[test]
    fn black_is_zero() {
        let lab = ColorValue::BLACK.to_lab();
        assert!(lab.l.abs() < 1e-9, "L: {}", lab.l);
        assert!(lab.a.abs() < 1e-9);
        assert!(lab.b.abs() < 1e-9);
    }

    #[test]
    fn pure_red_matches_reference_values() {
        // Reference: L 53.24, a 80.09, b 67.20
        let lab = ColorValue::new(255, 0, 0).to_lab();
        assert!((lab.l - 53.24).abs() < 0.05, "L: {}", lab.l);
        assert!((lab.a - 80.09).abs() < 0.05, "a: {}", lab.a);
        assert!((lab.b - 67.20).abs() < 0.05, "b: {}", lab.b);

        let lch = ColorValue::new(255, 0, 0).to_lch();
        assert!((lch.c - 104.55).abs() < 0.05, "C: {}", lch.c);
        assert!((lch.h - 39.99).abs() < 0.05, "H: {}", lch.h);
    }

    #[test]
    fn dark_colors_use_linear_toe() {
        // Linear segment is exercised below L = 8.
        let c = ColorValue::new(3, 3, 3);
        let lab = c.to_lab();
        assert!(lab.l < 8.0, "L: {}", lab.l);
        assert_eq!(lab.to_color(), c);
    }

    #[test]
    fn grays_report_hue_zero() {
        let lch = ColorValue::new(128, 128, 128).to_lch();
        assert_eq!(lch.h, 0.0);
    }

    #[test]
    fn out_of_gamut_lch_is_clipped_not_rejected() {
        let c = Lch {
            l: 50.0,
            c: 200.0,
            h: 140.0,
        }
        .to_color();
        // Clipping is lossy at the extremes; we only require a legal color.
        assert!(c.g > c.r && c.g > c.b, "expected a green, got {c}");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rgb_lab_rgb_round_trip_within_one_unit(r: u8, g: u8, b: u8) {
                let c = ColorValue::new(r, g, b);
                let back = c.to_lab().to_color();
                prop_assert!(back.r.abs_diff(r) <= 1, "{} -> {}", c, back);
                prop_assert!(back.g.abs_diff(g) <= 1, "{} -> {}", c, back);
                prop_assert!(back.b.abs_diff(b) <= 1, "{} -> {}", c, back);
            }

            #[test]
            fn rgb_lch_rgb_round_trip_within_one_unit(r: u8, g: u8, b: u8) {
                let c = ColorValue::new(r, g, b);
                let back = c.to_lch().to_color();
                prop_assert!(back.r.abs_diff(r) <= 1, "{} -> {}", c, back);
                prop_assert!(back.g.abs_diff(g) <= 1, "{} -> {}", c, back);
                prop_assert!(back.b.abs_diff(b) <= 1, "{} -> {}", c, back);
            }

            #[test]
            fn lab_projection_stays_in_range(r: u8, g: u8, b: u8) {
                let lch = ColorValue::new(r, g, b).to_lch();
                prop_assert!((0.0..=100.0).contains(&lch.l), "L: {}", lch.l);
                prop_assert!(lch.c >= 0.0, "C: {}", lch.c);
                prop_assert!((0.0..360.0).contains(&lch.h), "H: {}", lch.h);
            }
        }
    }
}
