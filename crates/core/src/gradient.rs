//! Evenly spaced gradient stops, interpolated in OKLCH.
//!
//! A gradient runs from the base color to an end chosen by [`GradientEnd`],
//! or brackets the base between a lighter and a darker version of itself.
//! Hue takes the shorter way around the wheel. `Display` renders CSS.

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::format::trimmed;
use crate::gamut::ReduceChroma;
use crate::space::oklab::sample_path;
use crate::space::{normalize_hue, OkLch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fewest stops a gradient accepts.
pub const MIN_STOPS: usize = 2;
/// Most stops a gradient accepts.
pub const MAX_STOPS: usize = 20;

/// OKLCH lightness distance between the base and each end of an
/// [`GradientEnd::Auto`] bracket.
const BRACKET: f64 = 0.25;
const BRACKET_MIN_L: f64 = 0.05;
const BRACKET_MAX_L: f64 = 0.97;

/// Where the gradient ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientEnd {
    /// Lighter base, base, darker base.
    #[default]
    Auto,
    /// Base hue + 180°.
    Complementary,
    /// Base hue + 30°.
    Analogous,
    /// Base hue + 120°.
    Triadic,
    /// Same hue, lightness mirrored around 0.5.
    Monochromatic,
}

impl GradientEnd {
    /// Every end strategy, in display order.
    pub const ALL: [GradientEnd; 5] = [
        GradientEnd::Auto,
        GradientEnd::Complementary,
        GradientEnd::Analogous,
        GradientEnd::Triadic,
        GradientEnd::Monochromatic,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            GradientEnd::Auto => "auto",
            GradientEnd::Complementary => "complementary",
            GradientEnd::Analogous => "analogous",
            GradientEnd::Triadic => "triadic",
            GradientEnd::Monochromatic => "monochromatic",
        }
    }

    /// The OKLCH control points the stops are sampled from.
    fn path(self, base: OkLch) -> Vec<OkLch> {
        let rotated = |degrees: f64| OkLch {
            h: normalize_hue(base.h + degrees),
            ..base
        };
        match self {
            GradientEnd::Auto => vec![
                OkLch {
                    l: (base.l + BRACKET).min(BRACKET_MAX_L),
                    ..base
                },
                base,
                OkLch {
                    l: (base.l - BRACKET).max(BRACKET_MIN_L),
                    ..base
                },
            ],
            GradientEnd::Complementary => vec![base, rotated(180.0)],
            GradientEnd::Analogous => vec![base, rotated(30.0)],
            GradientEnd::Triadic => vec![base, rotated(120.0)],
            GradientEnd::Monochromatic => vec![
                base,
                OkLch {
                    l: 1.0 - base.l,
                    ..base
                },
            ],
        }
    }
}

impl fmt::Display for GradientEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientEnd {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GradientEnd::ALL
            .into_iter()
            .find(|end| end.name() == wanted)
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

/// CSS gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    /// `angle` in degrees, CSS convention (90 runs left to right).
    Linear { angle: f64 },
    Radial,
    /// `from` is the starting angle in degrees.
    Conic { from: f64 },
}

impl Default for GradientKind {
    fn default() -> Self {
        GradientKind::Linear { angle: 90.0 }
    }
}

impl GradientKind {
    /// CSS function name: `linear`, `radial` or `conic`.
    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Linear { .. } => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic { .. } => "conic",
        }
    }
}

/// One color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: ColorValue,
    /// Position in percent, 0 to 100.
    pub offset: f64,
}

/// A CSS-renderable gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Builds `stops` evenly spaced stops from `base` toward `end`.
    pub fn build(
        base: ColorValue,
        stops: usize,
        end: GradientEnd,
        kind: GradientKind,
    ) -> Result<Self, ColorError> {
        if !(MIN_STOPS..=MAX_STOPS).contains(&stops) {
            return Err(ColorError::StopCount {
                got: stops,
                min: MIN_STOPS,
                max: MAX_STOPS,
            });
        }

        let path = end.path(base.to_oklch());
        let policy = ReduceChroma::default();
        let stops = (0..stops)
            .map(|i| {
                let t = i as f64 / (stops - 1) as f64;
                GradientStop {
                    color: sample_path(&path, t).to_color_with(&policy),
                    offset: t * 100.0,
                }
            })
            .collect();
        Ok(Self { kind, stops })
    }

    /// Stop colors in offset order.
    pub fn colors(&self) -> Vec<ColorValue> {
        self.stops.iter().map(|s| s.color).collect()
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GradientKind::Linear { angle } => write!(f, "linear-gradient({}deg", trimmed(angle, 2))?,
            GradientKind::Radial => f.write_str("radial-gradient(circle")?,
            GradientKind::Conic { from } => {
                write!(f, "conic-gradient(from {}deg", trimmed(from, 2))?
            }
        }
        for stop in &self.stops {
            write!(f, ", {} {}%", stop.color, trimmed(stop.offset, 2))?;
        }
        f.write_str(")")
    }
}
