//! Text to [`ColorValue`].
//!
//! Accepted forms, case insensitive and with surrounding whitespace ignored:
//!
//! - `#RRGGBB`, `#RGB`, with or without the `#`
//! - `rgb(r, g, b)` / `rgba(r, g, b, a)`, integers 0–255 or percentages
//! - `hsl(h, s%, l%)`, `hsv(h, s%, v%)`, `cmyk(c%, m%, y%, k%)`
//! - `lab(L a b)`, `lch(L C H)`, `oklch(L% C H)` (or `L` as a 0–1 fraction)
//! - a bare tuple `r, g, b` or `r g b`
//!
//! Components may be separated by commas, whitespace or a `/` before an
//! alpha value. Alpha is accepted and ignored. Hues may carry a `deg` suffix.
//! Parsing never substitutes a color on failure; [`parse_or`] makes the
//! caller's fallback explicit.

use crate::color::{ColorValue, Srgb};
use crate::error::ColorError;
use crate::space::{Cmyk, Hsl, Hsv, Lab, Lch, OkLch};

/// Chroma that `100%` stands for in `oklch()`.
const OKLCH_FULL_CHROMA: f64 = 0.4;

/// A numeric component as written: its value and whether it had a `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Component {
    value: f64,
    percent: bool,
}

impl Component {
    /// Reads a percentage, or a bare number as a percentage, as a unit fraction.
    fn unit(self) -> f64 {
        self.value / 100.0
    }

    /// Percentages scale against `full`; bare numbers pass through.
    fn scaled(self, full: f64) -> f64 {
        if self.percent {
            self.value / 100.0 * full
        } else {
            self.value
        }
    }
}

/// Parses any supported color notation.
pub fn parse_color(input: &str) -> Result<ColorValue, ColorError> {
    let lowercase = input.trim().to_ascii_lowercase();
    let s = lowercase.as_str();

    if let Some(open) = s.find('(') {
        let name = s[..open].trim_end();
        let body = s[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| invalid(input, "missing closing parenthesis"))?;
        parse_function(input, name, body)
    } else if s.contains(|c: char| c == ',' || c.is_whitespace()) {
        let parts = components(input, s)?;
        rgb_from(input, &parts)
    } else {
        ColorValue::from_hex(s).map_err(|_| ColorError::InvalidHex {
            input: input.to_string(),
            reason: hex_reason(s),
        })
    }
}

/// Parses `input`, returning `fallback` when it is not a color.
pub fn parse_or(input: &str, fallback: ColorValue) -> ColorValue {
    match parse_color(input) {
        Ok(color) => color,
        Err(error) => {
            tracing::debug!(input, %error, %fallback, "unparsable color, using fallback");
            fallback
        }
    }
}

fn hex_reason(s: &str) -> String {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        "contains a non-hex character".to_string()
    } else {
        format!("expected 3 or 6 hex digits, got {}", digits.len())
    }
}

fn invalid(input: &str, reason: &str) -> ColorError {
    ColorError::InvalidFunction {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_function(input: &str, name: &str, body: &str) -> Result<ColorValue, ColorError> {
    let parts = components(input, body)?;
    match name {
        "rgb" | "rgba" => rgb_from(input, &parts),
        "hsl" | "hsla" => {
            let [h, s, l] = exactly::<3>(input, &parts, true)?;
            Ok(Hsl {
                h: h.value,
                s: s.unit(),
                l: l.unit(),
            }
            .to_color())
        }
        "hsv" | "hsb" => {
            let [h, s, v] = exactly::<3>(input, &parts, true)?;
            Ok(Hsv {
                h: h.value,
                s: s.unit(),
                v: v.unit(),
            }
            .to_color())
        }
        "cmyk" => {
            let [c, m, y, k] = exactly::<4>(input, &parts, false)?;
            Ok(Cmyk {
                c: c.unit(),
                m: m.unit(),
                y: y.unit(),
                k: k.unit(),
            }
            .to_color())
        }
        "lab" => {
            let [l, a, b] = exactly::<3>(input, &parts, true)?;
            Ok(Lab {
                l: l.value,
                a: a.value,
                b: b.value,
            }
            .to_color())
        }
        "lch" => {
            let [l, c, h] = exactly::<3>(input, &parts, true)?;
            Ok(Lch {
                l: l.value,
                c: c.value,
                h: h.value,
            }
            .to_color())
        }
        "oklch" => {
            let [l, c, h] = exactly::<3>(input, &parts, true)?;
            Ok(OkLch {
                l: l.scaled(1.0),
                c: c.scaled(OKLCH_FULL_CHROMA),
                h: h.value,
            }
            .to_color())
        }
        _ => Err(invalid(input, &format!("unknown color function '{name}'"))),
    }
}

fn rgb_from(input: &str, parts: &[Component]) -> Result<ColorValue, ColorError> {
    let [r, g, b] = exactly::<3>(input, parts, true)?;
    Ok(ColorValue::from_srgb(Srgb {
        r: r.scaled(255.0) / 255.0,
        g: g.scaled(255.0) / 255.0,
        b: b.scaled(255.0) / 255.0,
    }))
}

/// Takes exactly `N` components, plus one trailing alpha when `alpha` is
/// allowed.
fn exactly<const N: usize>(
    input: &str,
    parts: &[Component],
    alpha: bool,
) -> Result<[Component; N], ColorError> {
    let allowed = if alpha { N..=N + 1 } else { N..=N };
    if !allowed.contains(&parts.len()) {
        return Err(invalid(
            input,
            &format!("expected {N} components, got {}", parts.len()),
        ));
    }
    let mut out = [Component {
        value: 0.0,
        percent: false,
    }; N];
    out.copy_from_slice(&parts[..N]);
    Ok(out)
}

fn components(input: &str, body: &str) -> Result<Vec<Component>, ColorError> {
    body.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| component(input, token))
        .collect()
}

fn component(input: &str, token: &str) -> Result<Component, ColorError> {
    let (number, percent) = match token.strip_suffix('%') {
        Some(rest) => (rest, true),
        None => (token.strip_suffix("deg").unwrap_or(token), false),
    };
    let value: f64 = number
        .parse()
        .map_err(|_| invalid(input, &format!("'{token}' is not a number")))?;
    if !value.is_finite() {
        return Err(ColorError::NonFiniteComponent(input.to_string()));
    }
    Ok(Component { value, percent })
}
