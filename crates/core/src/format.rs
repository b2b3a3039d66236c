//! Snapshot-stable string forms for every user-facing color space.
//!
//! All rounding is half away from zero, and a value that rounds to zero is
//! printed without a sign. Hues that round up to 360 print as 0.
//!
//! | space  | example                          |
//! |--------|----------------------------------|
//! | hex    | `#FF0000`                        |
//! | rgb    | `rgb(255, 0, 0)`                 |
//! | hsl    | `hsl(0, 100%, 50%)`              |
//! | hsv    | `hsv(0, 100%, 100%)`             |
//! | cmyk   | `cmyk(0%, 100%, 100%, 0%)`       |
//! | lab    | `lab(53.24 80.09 67.20)`         |
//! | lch    | `lch(53.24 104.55 40.00)`        |
//! | oklch  | `oklch(62.8% 0.258 29)`          |
//! | ypbpr  | `ypbpr(76.25, -43.03, 127.50)`   |
//! | xvycc  | `xvycc(67.77, -36.52, 159.38)`   |

use crate::space::{Cmyk, Hsl, Hsv, Lab, Lch, OkLch, Projection, XvYcc, YPbPr};
use std::fmt;

/// Rounds `value` to `decimals` places, half away from zero, without
/// producing negative zero.
///
/// Decimal halves such as `1.005` are stored just below the half, so the
/// scaled value is pushed a few ULPs away from zero before rounding.
pub fn round_half_away(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let nudged = scaled + scaled.abs() * HALF_SLACK * scaled.signum();
    nudged.round() / scale + 0.0
}

/// Relative slack absorbing representation error in decimal halves.
const HALF_SLACK: f64 = 4.0 * f64::EPSILON;

/// Rounds and prints with exactly `decimals` places.
pub fn fixed(value: f64, decimals: u32) -> String {
    format!(
        "{:.*}",
        decimals as usize,
        round_half_away(value, decimals)
    )
}

/// Rounds and prints with at most `decimals` places, dropping trailing zeros.
pub fn trimmed(value: f64, decimals: u32) -> String {
    let s = fixed(value, decimals);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Whole degrees in [0, 360).
fn degrees(h: f64) -> String {
    let rounded = round_half_away(h, 0);
    format!("{}", if rounded >= 360.0 { 0.0 } else { rounded })
}

/// A unit fraction as a whole percentage.
fn percent(v: f64) -> String {
    format!("{}%", round_half_away(v * 100.0, 0))
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}, {})",
            degrees(self.h),
            percent(self.s),
            percent(self.l)
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({}, {}, {})",
            degrees(self.h),
            percent(self.s),
            percent(self.v)
        )
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}, {}, {}, {})",
            percent(self.c),
            percent(self.m),
            percent(self.y),
            percent(self.k)
        )
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lab({} {} {})",
            fixed(self.l, 2),
            fixed(self.a, 2),
            fixed(self.b, 2)
        )
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = round_half_away(self.h, 2);
        write!(
            f,
            "lch({} {} {})",
            fixed(self.l, 2),
            fixed(self.c, 2),
            fixed(if h >= 360.0 { 0.0 } else { h }, 2)
        )
    }
}

impl fmt::Display for OkLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {})",
            fixed(self.l * 100.0, 1),
            fixed(self.c, 3),
            degrees(self.h)
        )
    }
}

impl fmt::Display for YPbPr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ypbpr({}, {}, {})",
            fixed(self.y, 2),
            fixed(self.pb, 2),
            fixed(self.pr, 2)
        )
    }
}

impl fmt::Display for XvYcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "xvycc({}, {}, {})",
            fixed(self.y, 2),
            fixed(self.cb, 2),
            fixed(self.cr, 2)
        )
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Hex(c) => write!(f, "{}", c.to_hex()),
            Projection::Rgb(c) => write!(f, "rgb({}, {}, {})", c.r, c.g, c.b),
            Projection::Hsl(c) => c.fmt(f),
            Projection::Hsv(c) => c.fmt(f),
            Projection::Cmyk(c) => c.fmt(f),
            Projection::Lab(c) => c.fmt(f),
            Projection::Lch(c) => c.fmt(f),
            Projection::Oklch(c) => c.fmt(f),
            Projection::YPbPr(c) => c.fmt(f),
            Projection::XvYcc(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;
    use crate::space::ColorSpace;

    fn show(hex: &str, space: ColorSpace) -> String {
        ColorValue::from_hex(hex).unwrap().project(space).to_string()
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(0.125, 2), 0.13);
    }

    #[test]
    fn decimal_halves_stored_below_the_half_still_round_up() {
        assert_eq!(fixed(0.299 * 255.0, 2), "76.25");
        assert_eq!(fixed(1.005, 2), "1.01");
        assert_eq!(fixed(-1.005, 2), "-1.01");
        assert_eq!(fixed(2.675, 2), "2.68");
        assert_eq!(fixed(1.004_999, 2), "1.00");
    }

    #[test]
    fn rounding_never_yields_negative_zero() {
        assert_eq!(fixed(-0.0001, 2), "0.00");
        assert_eq!(fixed(-0.004, 2), "0.00");
    }

    #[test]
    fn trimmed_drops_trailing_zeros() {
        assert_eq!(trimmed(50.0, 1), "50");
        assert_eq!(trimmed(100.0 / 3.0, 1), "33.3");
        assert_eq!(trimmed(12.25, 2), "12.25");
    }

    #[test]
    fn red_in_every_space() {
        assert_eq!(show("#FF0000", ColorSpace::Hex), "#FF0000");
        assert_eq!(show("#FF0000", ColorSpace::Rgb), "rgb(255, 0, 0)");
        assert_eq!(show("#FF0000", ColorSpace::Hsl), "hsl(0, 100%, 50%)");
        assert_eq!(show("#FF0000", ColorSpace::Hsv), "hsv(0, 100%, 100%)");
        assert_eq!(show("#FF0000", ColorSpace::Cmyk), "cmyk(0%, 100%, 100%, 0%)");
        assert_eq!(show("#FF0000", ColorSpace::Lab), "lab(53.24 80.09 67.20)");
        assert_eq!(show("#FF0000", ColorSpace::Lch), "lch(53.24 104.55 40.00)");
        assert_eq!(show("#FF0000", ColorSpace::Oklch), "oklch(62.8% 0.258 29)");
        assert_eq!(show("#FF0000", ColorSpace::YPbPr), "ypbpr(76.25, -43.03, 127.50)");
    }

    #[test]
    fn hsl_of_a_mid_blue() {
        // #336699: h 210, s 50%, l 40%
        assert_eq!(show("#336699", ColorSpace::Hsl), "hsl(210, 50%, 40%)");
    }

    #[test]
    fn white_lab_has_no_signed_zeros() {
        assert_eq!(show("#FFFFFF", ColorSpace::Lab), "lab(100.00 0.00 0.00)");
        assert_eq!(show("#FFFFFF", ColorSpace::Oklch), "oklch(100.0% 0.000 0)");
    }

    #[test]
    fn hue_that_rounds_to_360_prints_as_zero() {
        let hsl = Hsl {
            h: 359.7,
            s: 1.0,
            l: 0.5,
        };
        assert_eq!(hsl.to_string(), "hsl(0, 100%, 50%)");
    }
}
