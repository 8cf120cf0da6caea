//! Error types for parameter validation.
//!
//! All validation happens at construction time, before any month of the
//! projection is computed, so a failed run never produces a partial series.

use thiserror::Error;

/// Validation error for an out-of-domain or malformed parameter field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A monetary or rate field that must be >= 0 received a negative value.
    #[error("field '{field}' must be non-negative, got {value}")]
    Negative {
        /// Parameter field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A field that must be strictly positive received a non-positive value.
    #[error("field '{field}' must be strictly positive, got {value}")]
    NonPositive {
        /// Parameter field name.
        field: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A floating-point field received NaN or an infinity.
    #[error("field '{field}' must be finite")]
    NonFinite {
        /// Parameter field name.
        field: &'static str,
    },

    /// Maximum utilization outside the valid range (0, 1].
    #[error("max utilization must be in (0, 1], got {0}")]
    UtilizationOutOfRange(f64),

    /// Linear ramp horizon shorter than one month.
    #[error("linear ramp horizon must be at least 1 month")]
    RampHorizonTooShort,

    /// Simulation horizon shorter than one month.
    #[error("simulation horizon must be at least 1 month, got {0}")]
    HorizonTooShort(u32),
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field() {
        let err = ValidationError::Negative {
            field: "annual_salary",
            value: -1.0,
        };
        assert!(err.to_string().contains("annual_salary"));

        let err = ValidationError::UtilizationOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn helpers_reject_nan() {
        assert!(check_non_negative("x", f64::NAN).is_err());
        assert!(check_positive("x", f64::INFINITY).is_err());
        assert!(check_non_negative("x", 0.0).is_ok());
        assert!(check_positive("x", 0.0).is_err());
    }
}
