//! CIE76 perceptual distance.

use crate::color::ColorValue;
use crate::space::Lab;
use serde::Serialize;
use std::fmt;

/// Euclidean distance between two LAB colors.
pub fn delta_e_lab(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 ΔE between two colors. Exactly 0 for identical inputs.
pub fn delta_e(a: ColorValue, b: ColorValue) -> f64 {
    if a == b {
        return 0.0;
    }
    delta_e_lab(a.to_lab(), b.to_lab())
}

/// How visible a ΔE is to a typical observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Perceptibility {
    /// ΔE < 1
    Imperceptible,
    /// ΔE < 2
    BarelyNoticeable,
    /// ΔE < 5
    Noticeable,
    /// ΔE < 10
    Significant,
    VeryDifferent,
}

impl Perceptibility {
    /// Buckets a ΔE value.
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Perceptibility::Imperceptible
        } else if delta_e < 2.0 {
            Perceptibility::BarelyNoticeable
        } else if delta_e < 5.0 {
            Perceptibility::Noticeable
        } else if delta_e < 10.0 {
            Perceptibility::Significant
        } else {
            Perceptibility::VeryDifferent
        }
    }

    /// Lowercase description of the bucket.
    pub fn label(self) -> &'static str {
        match self {
            Perceptibility::Imperceptible => "imperceptible",
            Perceptibility::BarelyNoticeable => "barely noticeable",
            Perceptibility::Noticeable => "noticeable",
            Perceptibility::Significant => "significant",
            Perceptibility::VeryDifferent => "very different",
        }
    }
}

impl fmt::Display for Perceptibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A ΔE together with its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDifference {
    pub delta_e: f64,
    pub perceptibility: Perceptibility,
}

/// ΔE between two colors with its perceptibility bucket.
pub fn compare(a: ColorValue, b: ColorValue) -> ColorDifference {
    let delta_e = delta_e(a, b);
    ColorDifference {
        delta_e,
        perceptibility: Perceptibility::classify(delta_e),
    }
}
