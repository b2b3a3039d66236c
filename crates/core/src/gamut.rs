//! Gamut policies: how RGB-producing conversions resolve colors that fall
//! outside the sRGB cube.
//!
//! Every conversion into [`ColorValue`](crate::ColorValue) takes a policy.
//! [`ClampToRange`] is the default and clips each channel independently,
//! which is cheap but not invertible at the extremes: a LAB or OKLCH color
//! with more chroma than sRGB can show at its lightness comes back with a
//! shifted hue and lightness. [`ReduceChroma`] instead keeps OKLCH lightness
//! and hue and lowers chroma until the color fits.

use crate::color::{linear_to_srgb, srgb_to_linear, Srgb};
use crate::space::oklab::{linear_to_oklab, oklab_to_linear, oklab_to_oklch, oklch_to_oklab, OkLch};

/// Channels within this distance of the unit interval count as in gamut.
const GAMUT_TOLERANCE: f64 = 1e-6;

/// Maps a possibly out-of-range sRGB color into [0, 1] per channel.
pub trait GamutPolicy {
    fn apply(&self, color: Srgb) -> Srgb;
}

/// Clips every channel to [0, 1] independently. NaN becomes 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampToRange;

impl GamutPolicy for ClampToRange {
    fn apply(&self, color: Srgb) -> Srgb {
        Srgb {
            r: clamp_unit(color.r),
            g: clamp_unit(color.g),
            b: clamp_unit(color.b),
        }
    }
}

/// Bisects OKLCH chroma at fixed lightness and hue until the color is
/// inside sRGB, then clips any residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceChroma {
    pub iterations: u32,
}

impl Default for ReduceChroma {
    fn default() -> Self {
        Self { iterations: 24 }
    }
}

impl GamutPolicy for ReduceChroma {
    fn apply(&self, color: Srgb) -> Srgb {
        if color.is_in_gamut(GAMUT_TOLERANCE) {
            return ClampToRange.apply(color);
        }

        let lch = oklab_to_oklch(linear_to_oklab(srgb_to_linear(color)));
        if !(lch.l.is_finite() && lch.c.is_finite()) {
            return ClampToRange.apply(color);
        }
        if lch.l >= 1.0 {
            return Srgb { r: 1.0, g: 1.0, b: 1.0 };
        }
        if lch.l <= 0.0 {
            return Srgb { r: 0.0, g: 0.0, b: 0.0 };
        }

        let (mut lo, mut hi) = (0.0, lch.c);
        for _ in 0..self.iterations {
            let mid = 0.5 * (lo + hi);
            if unclipped_srgb(OkLch { c: mid, ..lch }).is_in_gamut(GAMUT_TOLERANCE) {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        tracing::trace!(
            l = lch.l,
            from = lch.c,
            to = lo,
            "reduced chroma to fit sRGB gamut"
        );
        ClampToRange.apply(unclipped_srgb(OkLch { c: lo, ..lch }))
    }
}

fn unclipped_srgb(lch: OkLch) -> Srgb {
    linear_to_srgb(oklab_to_linear(oklch_to_oklab(lch)))
}

fn clamp_unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::oklab::srgb_to_oklch;

    #[test]
    fn clamp_leaves_in_gamut_colors_untouched() {
        let c = Srgb {
            r: 0.2,
            g: 0.4,
            b: 0.8,
        };
        assert_eq!(ClampToRange.apply(c), c);
    }

    #[test]
    fn clamp_clips_each_channel_independently() {
        let c = ClampToRange.apply(Srgb {
            r: 1.3,
            g: -0.2,
            b: f64::NAN,
        });
        assert_eq!(c, Srgb { r: 1.0, g: 0.0, b: 0.0 });
    }

    #[test]
    fn reduce_chroma_keeps_in_gamut_colors() {
        let c = Srgb {
            r: 0.5,
            g: 0.25,
            b: 0.75,
        };
        let mapped = ReduceChroma::default().apply(c);
        assert!((mapped.r - c.r).abs() < 1e-12);
        assert!((mapped.g - c.g).abs() < 1e-12);
        assert!((mapped.b - c.b).abs() < 1e-12);
    }

    #[test]
    fn reduce_chroma_preserves_lightness_and_hue() {
        // Far more chroma than sRGB can show at this lightness.
        let target = OkLch {
            l: 0.9,
            c: 0.35,
            h: 264.0,
        };
        let mapped = ReduceChroma::default().apply(unclipped_srgb(target));
        assert!(mapped.is_in_gamut(0.0), "not in gamut: {mapped:?}");

        let back = srgb_to_oklch(mapped);
        assert!((back.l - target.l).abs() < 1e-3, "L drifted to {}", back.l);
        assert!(back.c < target.c, "chroma was not reduced: {}", back.c);
        assert!((back.h - target.h).abs() < 1.0, "hue drifted to {}", back.h);
    }

    #[test]
    fn clamp_shifts_lightness_where_reduce_chroma_does_not() {
        let target = OkLch {
            l: 0.9,
            c: 0.35,
            h: 264.0,
        };
        let raw = unclipped_srgb(target);
        let clipped = srgb_to_oklch(ClampToRange.apply(raw));
        let reduced = srgb_to_oklch(ReduceChroma::default().apply(raw));
        assert!(
            (reduced.l - target.l).abs() < (clipped.l - target.l).abs(),
            "reduced L {} should be closer to {} than clipped L {}",
            reduced.l,
            target.l,
            clipped.l
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn both_policies_always_land_in_unit_cube(
                l in 0.0_f64..=1.0,
                c in 0.0_f64..=0.5,
                h in 0.0_f64..360.0,
            ) {
                let raw = unclipped_srgb(OkLch { l, c, h });
                let clipped = ClampToRange.apply(raw);
                let reduced = ReduceChroma::default().apply(raw);
                prop_assert!(clipped.is_in_gamut(0.0), "clipped: {:?}", clipped);
                prop_assert!(reduced.is_in_gamut(0.0), "reduced: {:?}", reduced);
            }
        }
    }
}
