//! CLI error type and result alias.

use thiserror::Error;

use payback_core::ValidationError;
use payback_engine::mc::{NoiseSpecError, SimulationError};

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Scenario file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid TOML.
    #[error("invalid scenario file: {0}")]
    Scenario(#[from] toml::de::Error),

    /// CSV export failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The assembled parameter set is out of domain.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The noise specification is invalid.
    #[error(transparent)]
    Noise(#[from] NoiseSpecError),

    /// The simulation configuration is invalid.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// A flag value could not be interpreted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
