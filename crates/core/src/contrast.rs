//! WCAG 2.x contrast and a coarse colorblind-confusion check.
//!
//! Luminance uses the WCAG 2.0 linearization (0.03928 threshold), which is
//! what published contrast checkers report. It differs from the sRGB decode
//! in [`crate::color`] only in the fourth decimal of the threshold.

use crate::color::ColorValue;
use serde::Serialize;
use std::fmt;

/// Minimum ratio for normal text at AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal text at AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for large text at AAA.
pub const AAA_LARGE: f64 = 4.5;
/// Minimum ratio for UI components and graphics.
pub const UI_COMPONENT: f64 = 3.0;

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1]: 0 is black, 1 is white.
pub fn relative_luminance(color: ColorValue) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio in [1, 21]. Symmetric in its arguments.
pub fn contrast_ratio(a: ColorValue, b: ColorValue) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The strongest WCAG grade a ratio reaches for body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastLevel {
    Fail,
    /// Passes AA for large text only.
    AaLarge,
    Aa,
    Aaa,
}

impl ContrastLevel {
    /// The highest level a ratio satisfies.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_NORMAL {
            ContrastLevel::Aaa
        } else if ratio >= AA_NORMAL {
            ContrastLevel::Aa
        } else if ratio >= AA_LARGE {
            ContrastLevel::AaLarge
        } else {
            ContrastLevel::Fail
        }
    }

    /// Short human label, e.g. `AA Large`.
    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::Fail => "Fail",
            ContrastLevel::AaLarge => "AA Large",
            ContrastLevel::Aa => "AA",
            ContrastLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which colorblind confusion pairs two colors fall into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorblindRisk {
    pub red_green: bool,
    pub blue_yellow: bool,
}

impl ColorblindRisk {
    /// True when either axis is at risk.
    pub fn any(self) -> bool {
        self.red_green || self.blue_yellow
    }
}

fn reddish(c: ColorValue) -> bool {
    c.r > 150 && c.g < 100
}

fn greenish(c: ColorValue) -> bool {
    c.g > 150 && c.r < 100
}

fn bluish(c: ColorValue) -> bool {
    c.b > 150 && c.r < 100 && c.g < 150
}

fn yellowish(c: ColorValue) -> bool {
    c.r > 150 && c.g > 150 && c.b < 100
}

/// Flags pairs that are hard to tell apart with red/green or blue/yellow
/// color vision deficiency. A channel-threshold heuristic, not a simulation.
pub fn colorblind_risk(a: ColorValue, b: ColorValue) -> ColorblindRisk {
    let pair = |x: fn(ColorValue) -> bool, y: fn(ColorValue) -> bool| {
        (x(a) && y(b)) || (y(a) && x(b))
    };
    ColorblindRisk {
        red_green: pair(reddish, greenish),
        blue_yellow: pair(bluish, yellowish),
    }
}

/// Black or white, whichever contrasts more with `background`. Ties go to
/// black.
pub fn best_text_color(background: ColorValue) -> ColorValue {
    if contrast_ratio(ColorValue::WHITE, background) > contrast_ratio(ColorValue::BLACK, background)
    {
        ColorValue::WHITE
    } else {
        ColorValue::BLACK
    }
}

/// Full accessibility summary for a foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WcagReport {
    pub ratio: f64,
    pub normal_aa: bool,
    pub normal_aaa: bool,
    pub large_aa: bool,
    pub large_aaa: bool,
    pub ui_component: bool,
    pub level: ContrastLevel,
    pub colorblind: ColorblindRisk,
}

impl WcagReport {
    /// Ratio, per-threshold verdicts and colorblind risk for a text pair.
    pub fn evaluate(foreground: ColorValue, background: ColorValue) -> Self {
        let ratio = contrast_ratio(foreground, background);
        Self {
            ratio,
            normal_aa: ratio >= AA_NORMAL,
            normal_aaa: ratio >= AAA_NORMAL,
            large_aa: ratio >= AA_LARGE,
            large_aaa: ratio >= AAA_LARGE,
            ui_component: ratio >= UI_COMPONENT,
            level: ContrastLevel::from_ratio(ratio),
            colorblind: colorblind_risk(foreground, background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixed;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(ColorValue::BLACK), 0.0);
        assert!((relative_luminance(ColorValue::WHITE) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn white_on_black_is_21_to_1() {
        let ratio = contrast_ratio(ColorValue::WHITE, ColorValue::BLACK);
        assert!((ratio - 21.0).abs() < EPSILON, "ratio: {ratio}");
        assert_eq!(fixed(ratio, 2), "21.00");
    }

    #[test]
    fn identical_colors_have_ratio_one() {
        let c = ColorValue::new(0x7B, 0x5B, 0xFF);
        assert!((contrast_ratio(c, c) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn black_on_white_passes_everything() {
        let report = WcagReport::evaluate(ColorValue::BLACK, ColorValue::WHITE);
        assert!(report.normal_aa && report.normal_aaa);
        assert!(report.large_aa && report.large_aaa);
        assert!(report.ui_component);
        assert_eq!(report.level, ContrastLevel::Aaa);
        assert!(!report.colorblind.any());
    }

    #[test]
    fn mid_gray_on_white_is_large_text_only() {
        // #949494 on white sits just above 3:1
        let report = WcagReport::evaluate(ColorValue::new(0x94, 0x94, 0x94), ColorValue::WHITE);
        assert!(report.ratio > 3.0 && report.ratio < 4.5, "ratio: {}", report.ratio);
        assert!(report.large_aa && report.ui_component);
        assert!(!report.normal_aa && !report.large_aaa);
        assert_eq!(report.level, ContrastLevel::AaLarge);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Fail);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLarge);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
        assert!(ContrastLevel::Aaa > ContrastLevel::Fail);
    }

    #[test]
    fn red_green_pair_is_flagged_in_either_order() {
        let red = ColorValue::new(200, 50, 50);
        let green = ColorValue::new(50, 200, 50);
        assert!(colorblind_risk(red, green).red_green);
        assert!(colorblind_risk(green, red).red_green);
        assert!(!colorblind_risk(red, green).blue_yellow);
    }

    #[test]
    fn blue_yellow_pair_is_flagged() {
        let blue = ColorValue::new(40, 80, 220);
        let yellow = ColorValue::new(230, 220, 40);
        let risk = colorblind_risk(blue, yellow);
        assert!(risk.blue_yellow);
        assert!(!risk.red_green);
        assert!(risk.any());
    }

    #[test]
    fn unrelated_colors_are_not_flagged() {
        let risk = colorblind_risk(ColorValue::new(200, 50, 50), ColorValue::new(40, 80, 220));
        assert!(!risk.any());
    }

    #[test]
    fn best_text_color_picks_the_stronger_extreme() {
        assert_eq!(best_text_color(ColorValue::WHITE), ColorValue::BLACK);
        assert_eq!(best_text_color(ColorValue::BLACK), ColorValue::WHITE);
        assert_eq!(best_text_color(ColorValue::new(0xFF, 0xEB, 0x3B)), ColorValue::BLACK);
        assert_eq!(best_text_color(ColorValue::new(0x1A, 0x23, 0x7E)), ColorValue::WHITE);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn color() -> impl Strategy<Value = ColorValue> {
            any::<[u8; 3]>().prop_map(|[r, g, b]| ColorValue::new(r, g, b))
        }

        proptest! {
            #[test]
            fn contrast_is_symmetric(a in color(), b in color()) {
                prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
            }

            #[test]
            fn contrast_stays_in_wcag_range(a in color(), b in color()) {
                let ratio = contrast_ratio(a, b);
                prop_assert!((1.0..=21.0 + EPSILON).contains(&ratio), "ratio {}", ratio);
            }

            #[test]
            fn colorblind_risk_is_symmetric(a in color(), b in color()) {
                prop_assert_eq!(colorblind_risk(a, b), colorblind_risk(b, a));
            }

            #[test]
            fn best_text_color_reaches_large_text_contrast(bg in color()) {
                // max(white, black) contrast is never below ~4.58
                let text = best_text_color(bg);
                prop_assert!(contrast_ratio(text, bg) >= AA_LARGE);
            }
        }
    }
}
