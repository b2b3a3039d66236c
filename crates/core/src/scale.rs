//! Tint/shade ramps in OKLCH.
//!
//! A scale keeps the base hue and chroma and walks lightness from light to
//! dark. Colors go back to sRGB through [`ReduceChroma`], so the lightness
//! ordering survives gamut mapping.

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::gamut::ReduceChroma;
use crate::space::oklab::sample_path;
use crate::space::OkLch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fewest steps a scale accepts.
pub const MIN_STEPS: usize = 5;
/// Most steps a scale accepts.
pub const MAX_STEPS: usize = 11;

/// The base lightness used as the middle of a WCAG-aware ramp is held in
/// this range so both halves keep room to descend.
const MID_MIN: f64 = 0.20;
const MID_MAX: f64 = 0.90;

/// How a scale places lightness between its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleMode {
    /// Lightness evenly spaced from `light` to `dark`.
    #[default]
    Uniform,
    /// Light end, base color, dark end, sampled evenly.
    WcagAware,
}

impl ScaleMode {
    /// Every mode, in display order.
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Uniform, ScaleMode::WcagAware];

    /// Name used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Uniform => "uniform",
            ScaleMode::WcagAware => "wcag",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleMode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(ScaleMode::Uniform),
            "wcag" | "wcag-aware" | "wcag_aware" => Ok(ScaleMode::WcagAware),
            _ => Err(ColorError::UnknownHarmony(s.to_string())),
        }
    }
}

/// OKLCH lightness endpoints for each mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleBounds {
    pub light: f64,
    pub dark: f64,
    pub wcag_light: f64,
    pub wcag_dark: f64,
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            light: 0.95,
            dark: 0.10,
            wcag_light: 0.95,
            wcag_dark: 0.15,
        }
    }
}

impl ScaleBounds {
    /// Checks every bound is in [0, 1] and the pairs leave room for a ramp.
    pub fn validate(&self) -> Result<(), ColorError> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(ColorError::InvalidConfig(format!(
                    "scale.{name} = {v} is outside [0, 1]"
                )))
            }
        };
        unit("light", self.light)?;
        unit("dark", self.dark)?;
        unit("wcag_light", self.wcag_light)?;
        unit("wcag_dark", self.wcag_dark)?;

        if self.dark >= self.light {
            return Err(ColorError::InvalidConfig(format!(
                "scale.dark ({}) must be below scale.light ({})",
                self.dark, self.light
            )));
        }
        if self.wcag_light <= MID_MAX || self.wcag_dark >= MID_MIN {
            return Err(ColorError::InvalidConfig(format!(
                "scale.wcag_light must exceed {MID_MAX} and scale.wcag_dark must be below {MID_MIN}"
            )));
        }
        Ok(())
    }
}

/// The unquantized OKLCH ramp, light to dark.
pub fn scale_path(
    base: ColorValue,
    steps: usize,
    mode: ScaleMode,
    bounds: &ScaleBounds,
) -> Result<Vec<OkLch>, ColorError> {
    if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
        return Err(ColorError::StepCount {
            got: steps,
            min: MIN_STEPS,
            max: MAX_STEPS,
        });
    }

    let base = base.to_oklch();
    let at = |l: f64| OkLch { l, ..base };
    let path = match mode {
        ScaleMode::Uniform => vec![at(bounds.light), at(bounds.dark)],
        ScaleMode::WcagAware => vec![
            at(bounds.wcag_light),
            at(base.l.clamp(MID_MIN, MID_MAX)),
            at(bounds.wcag_dark),
        ],
    };

    Ok((0..steps)
        .map(|i| sample_path(&path, i as f64 / (steps - 1) as f64))
        .collect())
}

/// A light-to-dark ramp of `steps` colors with the default bounds.
pub fn scale(base: ColorValue, steps: usize, mode: ScaleMode) -> Result<Vec<ColorValue>, ColorError> {
    scale_with(base, steps, mode, &ScaleBounds::default())
}

/// Like [`scale`], with explicit lightness bounds.
pub fn scale_with(
    base: ColorValue,
    steps: usize,
    mode: ScaleMode,
    bounds: &ScaleBounds,
) -> Result<Vec<ColorValue>, ColorError> {
    let policy = ReduceChroma::default();
    Ok(scale_path(base, steps, mode, bounds)?
        .into_iter()
        .map(|c| c.to_color_with(&policy))
        .collect())
}
