//! CLI errors and their exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: engine error (step, stop or palette count out of range)
//! - 11: I/O error (reading `--config`)
//! - 12: input error (unparsable color in `--strict` mode, bad config, unknown name)
//! - 13: serialization error

use chromakit_core::ColorError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// The engine refused a request it understood (step, stop or palette count).
    Engine(ColorError),
    /// The `--config` file could not be read.
    Io(String),
    /// The request itself was malformed.
    Input(String),
    /// JSON output failed to encode.
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Engine(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        match e {
            ColorError::StepCount { .. }
            | ColorError::StopCount { .. }
            | ColorError::PaletteSize { .. } => CliError::Engine(e),
            other => CliError::Input(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
