//! Error types for loading simulation settings.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or validating simulation parameters
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The settings file is not valid TOML for `SimulationParameters`
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A parameter is outside the range the engine accepts
    #[error("Invalid parameter: {0}")]
    Invalid(String),
}
