//! Fixed-length color harmonies.
//!
//! Each [`Harmony`] is a static table of six (hue offset, lightness offset)
//! steps applied to the base color. Order is part of the contract: index 0
//! is always the first table entry, so UIs can lay swatches out by position.
//!
//! Offsets are applied in HSL by default, or in OKLCH when a [`HueSpace`] is
//! given. Lightness offsets are percentage points of the space's lightness.

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::gamut::ReduceChroma;
use crate::space::{normalize_hue, Hsl, OkLch};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of colors in every harmony.
pub const HARMONY_LEN: usize = 6;

/// One entry of a harmony table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyStep {
    /// Degrees added to the base hue.
    pub hue: f64,
    /// Percentage points added to the base lightness.
    pub lightness: f64,
}

const fn step(hue: f64, lightness: f64) -> HarmonyStep {
    HarmonyStep { hue, lightness }
}

const fn hues(offsets: [f64; HARMONY_LEN]) -> [HarmonyStep; HARMONY_LEN] {
    let mut out = [step(0.0, 0.0); HARMONY_LEN];
    let mut i = 0;
    while i < HARMONY_LEN {
        out[i] = step(offsets[i], 0.0);
        i += 1;
    }
    out
}

static MONOCHROMATIC: [HarmonyStep; HARMONY_LEN] = [
    step(0.0, -40.0),
    step(0.0, -20.0),
    step(0.0, -10.0),
    step(0.0, 0.0),
    step(0.0, 10.0),
    step(0.0, 30.0),
];

static ANALOGOUS: [HarmonyStep; HARMONY_LEN] =
    hues([-30.0, -15.0, 0.0, 15.0, 30.0, 45.0]);

static COMPLEMENTARY: [HarmonyStep; HARMONY_LEN] = [
    step(0.0, 0.0),
    step(0.0, 20.0),
    step(0.0, -20.0),
    step(180.0, 0.0),
    step(180.0, 20.0),
    step(180.0, -20.0),
];

static SPLIT_COMPLEMENTARY: [HarmonyStep; HARMONY_LEN] =
    hues([-150.0, -120.0, 0.0, 120.0, 150.0, 180.0]);

static TRIADIC: [HarmonyStep; HARMONY_LEN] = hues([120.0, 90.0, 0.0, -90.0, -120.0, -150.0]);

static TETRADIC: [HarmonyStep; HARMONY_LEN] = hues([0.0, 90.0, 180.0, 270.0, 45.0, 135.0]);

/// A six-color hue scheme derived from one base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Harmony {
    Monochromatic,
    Analogous,
    Complementary,
    SplitComplementary,
    Triadic,
    Tetradic,
}

impl Harmony {
    /// Every harmony, in display order.
    pub const ALL: [Harmony; 6] = [
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::SplitComplementary,
        Harmony::Triadic,
        Harmony::Tetradic,
    ];

    /// Kebab-case name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Analogous => "analogous",
            Harmony::Complementary => "complementary",
            Harmony::SplitComplementary => "split-complementary",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
        }
    }

    /// Hue offsets and lightness shifts for each of the six colors.
    pub fn steps(self) -> &'static [HarmonyStep; HARMONY_LEN] {
        match self {
            Harmony::Monochromatic => &MONOCHROMATIC,
            Harmony::Analogous => &ANALOGOUS,
            Harmony::Complementary => &COMPLEMENTARY,
            Harmony::SplitComplementary => &SPLIT_COMPLEMENTARY,
            Harmony::Triadic => &TRIADIC,
            Harmony::Tetradic => &TETRADIC,
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Harmony::ALL
            .into_iter()
            .find(|h| h.name() == wanted)
            .ok_or_else(|| ColorError::UnknownHarmony(s.to_string()))
    }
}

/// The cylindrical space harmony offsets are applied in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueSpace {
    #[default]
    Hsl,
    Oklch,
}

impl HueSpace {
    /// Name used on the command line and in config.
    pub fn name(self) -> &'static str {
        match self {
            HueSpace::Hsl => "hsl",
            HueSpace::Oklch => "oklch",
        }
    }
}

impl fmt::Display for HueSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HueSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" => Ok(HueSpace::Hsl),
            "oklch" => Ok(HueSpace::Oklch),
            _ => Err(ColorError::UnknownSpace(s.to_string())),
        }
    }
}

/// Applies a harmony table to an HSL color without quantizing.
pub fn harmony_hsl(base: Hsl, kind: Harmony) -> [Hsl; HARMONY_LEN] {
    kind.steps().map(|s| Hsl {
        h: normalize_hue(base.h + s.hue),
        s: base.s,
        l: (base.l + s.lightness / 100.0).clamp(0.0, 1.0),
    })
}

/// Applies a harmony table to an OKLCH color without quantizing.
pub fn harmony_oklch(base: OkLch, kind: Harmony) -> [OkLch; HARMONY_LEN] {
    kind.steps().map(|s| OkLch {
        l: (base.l + s.lightness / 100.0).clamp(0.0, 1.0),
        c: base.c,
        h: normalize_hue(base.h + s.hue),
    })
}

/// The six-color harmony of `base`, computed in HSL.
pub fn harmony(base: ColorValue, kind: Harmony) -> [ColorValue; HARMONY_LEN] {
    harmony_in(base, kind, HueSpace::Hsl)
}

/// The six-color harmony of `base`, computed in `space`.
///
/// OKLCH results are brought into sRGB by reducing chroma so the hue
/// offsets survive.
pub fn harmony_in(base: ColorValue, kind: Harmony, space: HueSpace) -> [ColorValue; HARMONY_LEN] {
    match space {
        HueSpace::Hsl => harmony_hsl(base.to_hsl(), kind).map(Hsl::to_color),
        HueSpace::Oklch => {
            let policy = ReduceChroma::default();
            harmony_oklch(base.to_oklch(), kind).map(|c| c.to_color_with(&policy))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn names_round_trip() {
        for kind in Harmony::ALL {
            assert_eq!(kind.name().parse::<Harmony>().unwrap(), kind);
        }
        assert_eq!(
            "split_complementary".parse::<Harmony>().unwrap(),
            Harmony::SplitComplementary
        );
        assert!(matches!(
            "pentadic".parse::<Harmony>(),
            Err(ColorError::UnknownHarmony(_))
        ));
    }

    #[test]
    fn every_table_has_six_steps() {
        for kind in Harmony::ALL {
            assert_eq!(kind.steps().len(), HARMONY_LEN);
        }
    }

    #[test]
    fn monochromatic_keeps_hue_and_moves_lightness() {
        let base = Hsl {
            h: 200.0,
            s: 0.5,
            l: 0.5,
        };
        let out = harmony_hsl(base, Harmony::Monochromatic);
        let lightness: Vec<f64> = out.iter().map(|c| (c.l * 100.0).round()).collect();
        assert_eq!(lightness, vec![10.0, 30.0, 40.0, 50.0, 60.0, 80.0]);
        assert!(out.iter().all(|c| c.h == 200.0));
    }

    #[test]
    fn lightness_offsets_clamp() {
        let base = Hsl {
            h: 0.0,
            s: 1.0,
            l: 0.9,
        };
        let out = harmony_hsl(base, Harmony::Monochromatic);
        assert_eq!(out[5].l, 1.0);
    }

    #[test]
    fn complementary_index_three_is_opposite() {
        // #3366CC has HSL hue 220
        let base = ColorValue::new(0x33, 0x66, 0xCC);
        let out = harmony(base, Harmony::Complementary);
        assert_eq!(out[0], base);
        let h = out[3].to_hsl().h;
        assert!(hue_distance(h, 40.0) < 1.5, "hue {h}");
    }

    #[test]
    fn triadic_order_is_significant() {
        let base = Hsl {
            h: 10.0,
            s: 0.8,
            l: 0.5,
        };
        let hues: Vec<f64> = harmony_hsl(base, Harmony::Triadic)
            .iter()
            .map(|c| c.h)
            .collect();
        assert_eq!(hues, vec![130.0, 100.0, 10.0, 280.0, 250.0, 220.0]);
    }

    #[test]
    fn oklch_harmony_shifts_oklch_hue() {
        let base = ColorValue::new(0x33, 0x66, 0xCC);
        let base_h = base.to_oklch().h;
        let out = harmony_in(base, Harmony::Tetradic, HueSpace::Oklch);
        let h = out[2].to_oklch().h;
        assert!(
            hue_distance(h, base_h + 180.0) < 3.0,
            "base {base_h}, got {h}"
        );
    }

    #[test]
    fn hue_space_parses() {
        assert_eq!("OKLCH".parse::<HueSpace>().unwrap(), HueSpace::Oklch);
        assert_eq!(HueSpace::default(), HueSpace::Hsl);
        assert!("lab".parse::<HueSpace>().is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn kind() -> impl Strategy<Value = Harmony> {
            proptest::sample::select(Harmony::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn hue_is_base_plus_offset(
                h in 0.0_f64..360.0,
                s in 0.0_f64..=1.0,
                l in 0.0_f64..=1.0,
                kind in kind(),
            ) {
                let base = Hsl { h, s, l };
                let out = harmony_hsl(base, kind);
                for (c, step) in out.iter().zip(kind.steps()) {
                    let expected = normalize_hue(h + step.hue);
                    prop_assert!(hue_distance(c.h, expected) < 1e-9);
                    prop_assert!((0.0..360.0).contains(&c.h));
                    prop_assert!((0.0..=1.0).contains(&c.l));
                }
            }

            #[test]
            fn quantized_hue_tracks_offset_for_vivid_colors(
                h in 0.0_f64..360.0,
                s in 0.6_f64..=1.0,
                l in 0.4_f64..=0.6,
            ) {
                // hue-only tables keep lightness, so vivid inputs stay vivid
                let base = Hsl { h, s, l }.to_color();
                let base_h = base.to_hsl().h;
                let out = harmony(base, Harmony::Analogous);
                for (c, step) in out.iter().zip(Harmony::Analogous.steps()) {
                    let got = c.to_hsl().h;
                    let expected = normalize_hue(base_h + step.hue);
                    prop_assert!(hue_distance(got, expected) < 1.5, "expected {}, got {}", expected, got);
                }
            }
        }
    }
}
