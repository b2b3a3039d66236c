//! Ordered swatches with lock flags.
//!
//! A palette is a value: operations that change it return a new palette and
//! leave the original alone. Locked swatches survive [`Palette::merge`] and
//! [`Palette::shuffle`]; unlocked ones are replaced by position.

use crate::color::ColorValue;
use crate::error::ColorError;
use crate::random::RandomPaletteSampler;
use serde::{Deserialize, Serialize};

/// One palette slot. Locked swatches survive regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swatch {
    pub color: ColorValue,
    #[serde(default)]
    pub locked: bool,
}

impl Swatch {
    /// An unlocked swatch.
    pub fn new(color: ColorValue) -> Self {
        Self {
            color,
            locked: false,
        }
    }
}

/// An ordered set of swatches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Unlocked swatches for each color, in order.
    pub fn from_colors(colors: impl IntoIterator<Item = ColorValue>) -> Self {
        Self {
            swatches: colors.into_iter().map(Swatch::new).collect(),
        }
    }

    /// Parses each string as `#RRGGBB` or `#RGB`.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, ColorError> {
        let colors = hexes
            .iter()
            .map(|h| ColorValue::from_hex(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_colors(colors))
    }

    /// Number of swatches.
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    /// True when the palette holds no swatches.
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Swatches in display order.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// The swatch colors, locked or not.
    pub fn colors(&self) -> Vec<ColorValue> {
        self.swatches.iter().map(|s| s.color).collect()
    }

    /// Uppercase `#RRGGBB` strings in order.
    pub fn hexes(&self) -> Vec<String> {
        self.swatches.iter().map(|s| s.color.to_hex()).collect()
    }

    /// A copy with the swatch at `index` locked or unlocked. Out-of-range
    /// indices return an unchanged copy.
    pub fn with_lock(&self, index: usize, locked: bool) -> Self {
        let mut swatches = self.swatches.clone();
        if let Some(swatch) = swatches.get_mut(index) {
            swatch.locked = locked;
        }
        Self { swatches }
    }

    /// Replaces unlocked swatches with `generated` by position.
    ///
    /// Swatches past the end of `generated` are kept. Extra generated
    /// colors are appended unlocked.
    pub fn merge(&self, generated: &[ColorValue]) -> Self {
        let len = self.swatches.len().max(generated.len());
        let swatches = (0..len)
            .filter_map(|i| match (self.swatches.get(i), generated.get(i)) {
                (Some(s), _) if s.locked => Some(*s),
                (_, Some(&color)) => Some(Swatch::new(color)),
                (kept, None) => kept.copied(),
            })
            .collect();
        Self { swatches }
    }

    /// Fresh random colors for every unlocked swatch.
    pub fn shuffle(&self, sampler: &mut RandomPaletteSampler) -> Self {
        let swatches = self
            .swatches
            .iter()
            .map(|s| {
                if s.locked {
                    *s
                } else {
                    Swatch::new(sampler.next_color())
                }
            })
            .collect();
        Self { swatches }
    }
}
