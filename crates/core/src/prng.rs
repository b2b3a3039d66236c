//! Seedable Xorshift64 generator behind random palettes.
//!
//! Pure integer arithmetic, so a seed reproduces the same palette on every
//! platform. Not suitable for anything security related.

use crate::color::ColorValue;
use serde::{Deserialize, Serialize};

/// Xorshift64 with shifts (13, 7, 17).
///
/// A zero seed is a fixed point of the algorithm and is replaced by a
/// non-zero constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const ZERO_SEED_REPLACEMENT: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator. A zero seed is replaced with a fixed nonzero one.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 {
                Self::ZERO_SEED_REPLACEMENT
            } else {
                seed
            },
        }
    }

    /// Advances the state and returns it.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// The top `bits` bits of the next value. `bits` is capped at 64.
    pub fn next_bits(&mut self, bits: u32) -> u64 {
        match bits.min(64) {
            0 => 0,
            n => self.next_u64() >> (64 - n),
        }
    }

    /// A uniformly random 24-bit color.
    pub fn next_color(&mut self) -> ColorValue {
        ColorValue::from_u32(self.next_bits(24) as u32)
    }
}
