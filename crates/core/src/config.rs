//! Engine configuration, loaded from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration:
//!
//! ```json
//! {
//!   "fallback": "#000000",
//!   "sampler": { "max_attempts": 1000 },
//!   "scale": { "light": 0.95, "dark": 0.10, "wcag_light": 0.95, "wcag_dark": 0.15 },
//!   "harmony": { "space": "hsl" }
//! }
//! ```

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::harmony::HueSpace;
use crate::random::{RandomPaletteSampler, DEFAULT_MAX_ATTEMPTS};
use crate::scale::ScaleBounds;
use serde::{Deserialize, Serialize};

/// Random palette sampler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Pair draws before the deterministic walk takes over. 0 walks only.
    pub max_attempts: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Harmony generation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    pub space: HueSpace,
}

/// All engine settings, each section optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Color substituted by callers when input does not parse.
    pub fallback: ColorValue,
    pub sampler: SamplerConfig,
    pub scale: ScaleBounds,
    pub harmony: HarmonyConfig,
}

impl EngineConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ColorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints the JSON shape cannot express.
    pub fn validate(&self) -> Result<(), ColorError> {
        self.scale.validate()
    }

    /// A sampler honoring `sampler.max_attempts`, seeded from `seed` or the
    /// clock.
    pub fn sampler(&self, seed: Option<u64>) -> RandomPaletteSampler {
        let sampler = match seed {
            Some(seed) => RandomPaletteSampler::new(seed),
            None => RandomPaletteSampler::from_entropy(),
        };
        sampler.with_max_attempts(self.sampler.max_attempts)
    }
}
