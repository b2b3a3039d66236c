//! Color spaces and the conversions between them.
//!
//! Every projection is computed from a [`ColorValue`] and converts back to
//! one. The spaces split into modules by family:
//!
//! - [`cylindrical`]: HSL and HSV
//! - [`cmyk`]: naive subtractive CMYK
//! - [`cie`]: XYZ (pivot only), LAB and LCH
//! - [`oklab`]: OKLab and OKLCH
//! - [`video`]: YPbPr and xvYCC
//!
//! [`ColorSpace`] names the user-facing formats and [`Projection`] carries a
//! color expressed in one of them.

pub mod cie;
pub mod cmyk;
pub mod cylindrical;
pub mod oklab;
pub mod video;

pub use cie::{Lab, Lch, Xyz};
pub use cmyk::Cmyk;
pub use cylindrical::{Hsl, Hsv};
pub use oklab::{OkLab, OkLch};
pub use video::{XvYcc, YPbPr};

use crate::color::ColorValue;
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user-facing color formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    Hex,
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Lab,
    Lch,
    Oklch,
    YPbPr,
    XvYcc,
}

impl ColorSpace {
    /// Every space, in display order.
    pub const ALL: [ColorSpace; 10] = [
        ColorSpace::Hex,
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Cmyk,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Oklch,
        ColorSpace::YPbPr,
        ColorSpace::XvYcc,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Hex => "hex",
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Cmyk => "cmyk",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::Oklch => "oklch",
            ColorSpace::YPbPr => "ypbpr",
            ColorSpace::XvYcc => "xvycc",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name() == wanted)
            .ok_or_else(|| ColorError::UnknownSpace(s.to_string()))
    }
}

/// One color expressed in one [`ColorSpace`].
///
/// `Display` renders the snapshot-stable string for the space, e.g.
/// `hsl(210, 50%, 40%)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "space", content = "value", rename_all = "lowercase")]
pub enum Projection {
    Hex(ColorValue),
    Rgb(ColorValue),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
    Lab(Lab),
    Lch(Lch),
    Oklch(OkLch),
    YPbPr(YPbPr),
    XvYcc(XvYcc),
}

impl Projection {
    /// The space this projection belongs to.
    pub fn space(&self) -> ColorSpace {
        match *self {
            Projection::Hex(_) => ColorSpace::Hex,
            Projection::Rgb(_) => ColorSpace::Rgb,
            Projection::Hsl(_) => ColorSpace::Hsl,
            Projection::Hsv(_) => ColorSpace::Hsv,
            Projection::Cmyk(_) => ColorSpace::Cmyk,
            Projection::Lab(_) => ColorSpace::Lab,
            Projection::Lch(_) => ColorSpace::Lch,
            Projection::Oklch(_) => ColorSpace::Oklch,
            Projection::YPbPr(_) => ColorSpace::YPbPr,
            Projection::XvYcc(_) => ColorSpace::XvYcc,
        }
    }

    /// Converts back to RGB. LAB, LCH and OKLCH clip out-of-gamut channels.
    pub fn to_color(&self) -> ColorValue {
        match *self {
            Projection::Hex(c) | Projection::Rgb(c) => c,
            Projection::Hsl(c) => c.to_color(),
            Projection::Hsv(c) => c.to_color(),
            Projection::Cmyk(c) => c.to_color(),
            Projection::Lab(c) => c.to_color(),
            Projection::Lch(c) => c.to_color(),
            Projection::Oklch(c) => c.to_color(),
            Projection::YPbPr(c) => c.to_color(),
            Projection::XvYcc(c) => c.to_color(),
        }
    }

    /// Raw numeric components in the space's natural order.
    pub fn components(&self) -> Vec<f64> {
        match *self {
            Projection::Hex(c) | Projection::Rgb(c) => {
                vec![f64::from(c.r), f64::from(c.g), f64::from(c.b)]
            }
            Projection::Hsl(c) => vec![c.h, c.s, c.l],
            Projection::Hsv(c) => vec![c.h, c.s, c.v],
            Projection::Cmyk(c) => vec![c.c, c.m, c.y, c.k],
            Projection::Lab(c) => vec![c.l, c.a, c.b],
            Projection::Lch(c) => vec![c.l, c.c, c.h],
            Projection::Oklch(c) => vec![c.l, c.c, c.h],
            Projection::YPbPr(c) => vec![c.y, c.pb, c.pr],
            Projection::XvYcc(c) => vec![c.y, c.cb, c.cr],
        }
    }
}

impl ColorValue {
    /// Expresses this color in `space`.
    pub fn project(self, space: ColorSpace) -> Projection {
        match space {
            ColorSpace::Hex => Projection::Hex(self),
            ColorSpace::Rgb => Projection::Rgb(self),
            ColorSpace::Hsl => Projection::Hsl(self.to_hsl()),
            ColorSpace::Hsv => Projection::Hsv(self.to_hsv()),
            ColorSpace::Cmyk => Projection::Cmyk(self.to_cmyk()),
            ColorSpace::Lab => Projection::Lab(self.to_lab()),
            ColorSpace::Lch => Projection::Lch(self.to_lch()),
            ColorSpace::Oklch => Projection::Oklch(self.to_oklch()),
            ColorSpace::YPbPr => Projection::YPbPr(self.to_ypbpr()),
            ColorSpace::XvYcc => Projection::XvYcc(self.to_xvycc()),
        }
    }
}

/// Wraps a hue angle into [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid of a tiny negative angle rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Interpolates hue along the shorter arc, wrapping at 360.
pub fn interpolate_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let delta = match h1 - h0 {
        d if d > 180.0 => d - 360.0,
        d if d < -180.0 => d + 360.0,
        d => d,
    };
    normalize_hue(h0 + t * delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn space_names_round_trip_through_from_str() {
        for space in ColorSpace::ALL {
            assert_eq!(space.name().parse::<ColorSpace>().unwrap(), space);
        }
        assert_eq!("OKLCH".parse::<ColorSpace>().unwrap(), ColorSpace::Oklch);
    }

    #[test]
    fn xyz_is_not_a_user_facing_space() {
        assert!(matches!(
            "xyz".parse::<ColorSpace>(),
            Err(ColorError::UnknownSpace(_))
        ));
    }

    #[test]
    fn projection_reports_its_space() {
        let c = ColorValue::new(10, 20, 30);
        for space in ColorSpace::ALL {
            assert_eq!(c.project(space).space(), space);
        }
    }

    #[test]
    fn cmyk_projection_has_four_components() {
        let p = ColorValue::new(10, 20, 30).project(ColorSpace::Cmyk);
        assert_eq!(p.components().len(), 4);
    }

    #[test]
    fn every_projection_returns_to_nearly_the_same_color() {
        let c = ColorValue::new(0x7B, 0x5B, 0xFF);
        for space in ColorSpace::ALL {
            let back = c.project(space).to_color();
            assert!(
                back.r.abs_diff(c.r) <= 1 && back.g.abs_diff(c.g) <= 1 && back.b.abs_diff(c.b) <= 1,
                "{space}: {c} -> {back}"
            );
        }
    }

    #[test]
    fn normalize_hue_wraps_negative_and_large_angles() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0));
        assert!(approx_eq(normalize_hue(390.0), 30.0));
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-1e-15), 0.0);
    }

    #[test]
    fn hue_wraparound_350_to_10_goes_through_zero() {
        let h = interpolate_hue(350.0, 10.0, 0.5);
        assert!(approx_eq(h, 0.0), "midpoint hue should be 0, got {h}");
    }

    #[test]
    fn hue_interpolation_no_wraparound() {
        assert!(approx_eq(interpolate_hue(90.0, 180.0, 0.5), 135.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_hue_always_in_range(h in -1e6_f64..1e6) {
                let n = normalize_hue(h);
                prop_assert!((0.0..360.0).contains(&n), "normalize_hue({h}) = {n}");
            }

            #[test]
            fn hue_interpolation_stays_in_range(
                h0 in 0.0_f64..360.0,
                h1 in 0.0_f64..360.0,
                t in 0.0_f64..=1.0,
            ) {
                let h = interpolate_hue(h0, h1, t);
                prop_assert!((0.0..360.0).contains(&h), "hue {h} for h0={h0}, h1={h1}, t={t}");
            }
        }
    }
}
