//! Error types for the Monte Carlo engine.
//!
//! Noise-spec binding and configuration are validated before any trial
//! runs; an "unreached" payback or a run where no trial breaks even are
//! valid outcomes, never errors.

use thiserror::Error;

use payback_core::ValidationError;

/// Error binding or validating a noise specification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseSpecError {
    /// The field name does not refer to a perturbable parameter.
    #[error("unknown noise field '{0}' (expected one of: salary, bill_rate, ramp_horizon)")]
    UnknownField(String),

    /// A field appears more than once in the specification.
    #[error("duplicate noise entry for field '{0}'")]
    DuplicateField(&'static str),

    /// Relative standard deviation outside [0, 1).
    #[error("relative std dev for '{field}' must be in [0, 1), got {value}")]
    InvalidStdDev {
        /// Perturbed field name.
        field: &'static str,
        /// Offending deviation.
        value: f64,
    },
}

/// Error configuring or starting a Monte Carlo simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Trial count outside the valid range.
    #[error("trial count {0} must be in range [1, 10_000_000]")]
    InvalidTrialCount(usize),

    /// The base parameter set failed validation.
    #[error(transparent)]
    InvalidParameters(#[from] ValidationError),

    /// The noise specification failed validation.
    #[error(transparent)]
    InvalidNoise(#[from] NoiseSpecError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_actionable() {
        let err = NoiseSpecError::UnknownField("salery".to_string());
        assert!(err.to_string().contains("salery"));
        assert!(err.to_string().contains("salary"));

        let err = SimulationError::InvalidTrialCount(0);
        assert!(err.to_string().contains('0'));
    }

    #[test]
    fn validation_error_converts() {
        let err: SimulationError = ValidationError::HorizonTooShort(0).into();
        assert!(matches!(err, SimulationError::InvalidParameters(_)));
    }
}
