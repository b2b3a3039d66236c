//! Error types for the chromakit color engine.

use thiserror::Error;

/// Errors produced by engine operations.
///
/// Conversions themselves never fail. Errors only arise at the boundary
/// (parsing text) or when a generator is asked for a size outside its
/// documented domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A hex color string could not be parsed.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// A functional (`rgb(...)`, `hsl(...)`, ...) or tuple color could not be parsed.
    #[error("invalid color '{input}': {reason}")]
    InvalidFunction { input: String, reason: String },

    /// A numeric component was NaN or infinite.
    #[error("non-finite component in color '{0}'")]
    NonFiniteComponent(String),

    /// A color space name was not recognized.
    #[error("unknown color space: {0}")]
    UnknownSpace(String),

    /// A harmony, scale mode or gradient end name was not recognized.
    #[error("unknown harmony or mode: {0}")]
    UnknownHarmony(String),

    /// A scale was requested with a step count outside [min, max].
    #[error("scale step count {got} outside [{min}, {max}]")]
    StepCount { got: usize, min: usize, max: usize },

    /// A gradient was requested with a stop count outside [min, max].
    #[error("gradient stop count {got} outside [{min}, {max}]")]
    StopCount { got: usize, min: usize, max: usize },

    /// A random palette was requested with a size outside [min, max].
    #[error("palette size {got} outside [{min}, {max}]")]
    PaletteSize { got: usize, min: usize, max: usize },

    /// Configuration could not be parsed or failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
