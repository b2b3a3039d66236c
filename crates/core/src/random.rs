//! Random palettes built from colors and their complements.
//!
//! Each draw yields a random color and its channel-inverted complement. A
//! pair is rejected when either color is already in the palette. Draws
//! stop once the palette holds at least K colors and the result is cut to
//! exactly K, so an odd K drops the last pair's complement.
//!
//! Draws are capped by `max_attempts`. If the cap is hit, the remaining
//! slots are filled by walking the 2^24 color cube with an odd stride from
//! a random start, which visits every color once and so always finds unused
//! ones.

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::prng::Xorshift64;
use std::time::{SystemTime, UNIX_EPOCH};

/// Smallest palette the sampler produces.
pub const MIN_PALETTE: usize = 1;
/// Largest palette the sampler produces.
pub const MAX_PALETTE: usize = 10;
/// Pair draws attempted before the walk fills the rest.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

const CUBE: u32 = 1 << 24;
const CUBE_MASK: u32 = CUBE - 1;
/// Odd, so stepping by it modulo 2^24 has full period.
const WALK_STRIDE: u32 = 0x9E_3779;

/// Seeded generator of palettes made of complementary pairs.
#[derive(Debug, Clone)]
pub struct RandomPaletteSampler {
    rng: Xorshift64,
    max_attempts: u32,
}

impl RandomPaletteSampler {
    /// A seeded sampler with the default attempt cap.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xorshift64::new(seed),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Seeds from the system clock.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    /// Caps the number of pair draws. Zero skips straight to the walk.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// One uniformly random color, with no dedup.
    pub fn next_color(&mut self) -> ColorValue {
        self.rng.next_color()
    }

    /// Exactly `k` distinct colors.
    pub fn sample(&mut self, k: usize) -> Result<Vec<ColorValue>, ColorError> {
        if !(MIN_PALETTE..=MAX_PALETTE).contains(&k) {
            return Err(ColorError::PaletteSize {
                got: k,
                min: MIN_PALETTE,
                max: MAX_PALETTE,
            });
        }

        let mut colors: Vec<ColorValue> = Vec::with_capacity(k + 1);
        let mut attempts = 0;
        while colors.len() < k && attempts < self.max_attempts {
            attempts += 1;
            let color = self.rng.next_color();
            let complement = color.inverted();
            if colors.contains(&color) || colors.contains(&complement) {
                continue;
            }
            colors.push(color);
            colors.push(complement);
        }

        if colors.len() < k {
            tracing::warn!(
                attempts,
                have = colors.len(),
                want = k,
                "random palette draws exhausted, filling by walk"
            );
            let start = self.rng.next_bits(24) as u32;
            let missing = k - colors.len();
            let walked: Vec<ColorValue> = (0..CUBE)
                .map(|i| {
                    ColorValue::from_u32(start.wrapping_add(i.wrapping_mul(WALK_STRIDE)) & CUBE_MASK)
                })
                .filter(|c| !colors.contains(c))
                .take(missing)
                .collect();
            colors.extend(walked);
        }

        colors.truncate(k);
        Ok(colors)
    }
}
