//! End-to-end checks of the public API against reference values.

use chromakit_core::format::fixed;
use chromakit_core::{
    contrast_ratio, delta_e, harmony, parse_color, parse_or, scale, ColorError, ColorSpace,
    ColorValue, EngineConfig, Gradient, GradientEnd, GradientKind, Harmony, Palette,
    RandomPaletteSampler, ScaleMode, WcagReport,
};

fn color(s: &str) -> ColorValue {
    parse_color(s).unwrap_or_else(|e| panic!("{s}: {e}"))
}

#[test]
fn red_as_hsl() {
    assert_eq!(
        color("#FF0000").project(ColorSpace::Hsl).to_string(),
        "hsl(0, 100%, 50%)"
    );
}

#[test]
fn white_on_black_is_21_and_passes_aaa() {
    let ratio = contrast_ratio(ColorValue::WHITE, ColorValue::BLACK);
    assert_eq!(fixed(ratio, 2), "21.00");
    assert!(WcagReport::evaluate(ColorValue::WHITE, ColorValue::BLACK).normal_aaa);
}

#[test]
fn complementary_fourth_color_is_opposite_hue() {
    let base = color("#3366CC");
    let base_h = base.to_hsl().h;
    let out = harmony(base, Harmony::Complementary);
    let expected = (base_h + 180.0).rem_euclid(360.0);
    let got = out[3].to_hsl().h;
    assert!((got - expected).abs() < 1.5, "expected {expected}, got {got}");
}

#[test]
fn delta_e_of_identical_colors_is_zero() {
    let c = color("#112233");
    assert_eq!(fixed(delta_e(c, c), 2), "0.00");
}

#[test]
fn uniform_scale_endpoints() {
    let out = scale(color("#7B5BFF"), 9, ScaleMode::Uniform).unwrap();
    assert_eq!(out.len(), 9);
    assert!((out[0].to_oklch().l - 0.95).abs() < 0.01);
    assert!((out[8].to_oklch().l - 0.10).abs() < 0.01);
}

#[test]
fn unparsable_input_uses_the_configured_fallback() {
    let config = EngineConfig::from_json(r##"{ "fallback": "#808080" }"##).unwrap();
    assert_eq!(parse_or("definitely not a color", config.fallback), ColorValue::new(128, 128, 128));
    assert!(matches!(
        parse_color("definitely not a color"),
        Err(ColorError::InvalidFunction { .. })
    ));
}

#[test]
fn every_space_round_trips_a_mid_tone() {
    let c = color("#7B5BFF");
    for space in ColorSpace::ALL {
        let text = c.project(space).to_string();
        assert!(!text.contains("-0."), "{space}: negative zero in {text}");
        let back = c.project(space).to_color();
        assert!(
            back.r.abs_diff(c.r) <= 1 && back.g.abs_diff(c.g) <= 1 && back.b.abs_diff(c.b) <= 1,
            "{space}: {c} -> {back}"
        );
    }
}

#[test]
fn generated_palette_merges_around_locks() {
    let mut sampler = RandomPaletteSampler::new(2024);
    let palette = Palette::from_colors(sampler.sample(5).unwrap()).with_lock(2, true);
    let kept = palette.swatches()[2].color;
    let merged = palette.merge(&harmony(color("#3366CC"), Harmony::Analogous));
    assert_eq!(merged.len(), 6);
    assert_eq!(merged.swatches()[2].color, kept);
}

#[test]
fn gradient_css_starts_at_the_base() {
    let g = Gradient::build(
        color("#3366CC"),
        3,
        GradientEnd::Triadic,
        GradientKind::Linear { angle: 45.0 },
    )
    .unwrap();
    assert!(g.to_string().starts_with("linear-gradient(45deg, #3366CC 0%, "), "{g}");
    assert!(g.to_string().ends_with(" 100%)"), "{g}");
}
