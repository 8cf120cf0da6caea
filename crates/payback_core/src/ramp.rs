//! Utilization ramp curves.
//!
//! A newly assigned employee does not bill at full capacity from day one.
//! The ramp model maps an elapsed-month index to a fractional utilization
//! in `[0, U_max]`. Two families are supported:
//!
//! - **Exponential**: `U_t = U_max * (1 - e^(-alpha * t))`, asymptotic to
//!   `U_max`.
//! - **Linear**: `U_t = U_max * min(1, t / months)`, reaching exactly
//!   `U_max` at `t = months`.
//!
//! The model and its parameters are fixed for the life of one
//! [`ParameterSet`](crate::params::ParameterSet).

use serde::{Deserialize, Serialize};

use crate::error::{check_positive, ValidationError};

/// Ramp model family with its speed parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RampModel {
    /// Exponential saturation with decay parameter `alpha` (> 0).
    Exponential {
        /// Ramp-up decay parameter; larger values reach `U_max` faster.
        alpha: f64,
    },
    /// Straight-line ramp reaching `U_max` after `months` months (>= 1).
    Linear {
        /// Months until full utilization.
        months: u32,
    },
}

impl RampModel {
    /// Validates the model's speed parameter.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NonPositive`] for an exponential `alpha <= 0`
    /// - [`ValidationError::RampHorizonTooShort`] for a linear horizon of 0
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            RampModel::Exponential { alpha } => check_positive("ramp.alpha", alpha),
            RampModel::Linear { months } => {
                if months == 0 {
                    Err(ValidationError::RampHorizonTooShort)
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A validated ramp curve bound to a maximum utilization.
///
/// # Examples
///
/// ```rust
/// use payback_core::ramp::{RampModel, RampProfile};
///
/// let linear = RampProfile::new(RampModel::Linear { months: 6 }, 1.0).unwrap();
/// assert_eq!(linear.utilization(0), 0.0);
/// assert_eq!(linear.utilization(3), 0.5);
/// assert_eq!(linear.utilization(6), 1.0);
/// assert_eq!(linear.utilization(24), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampProfile {
    model: RampModel,
    u_max: f64,
}

impl RampProfile {
    /// Creates a profile from a model and a maximum utilization in (0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UtilizationOutOfRange`] for `u_max`
    /// outside (0, 1], or the model's own validation error.
    pub fn new(model: RampModel, u_max: f64) -> Result<Self, ValidationError> {
        model.validate()?;
        if !u_max.is_finite() || u_max <= 0.0 || u_max > 1.0 {
            return Err(ValidationError::UtilizationOutOfRange(u_max));
        }
        Ok(Self { model, u_max })
    }

    /// Returns the maximum utilization bound.
    #[inline]
    pub fn u_max(&self) -> f64 {
        self.u_max
    }

    /// Utilization fraction for elapsed month `t`.
    ///
    /// Non-decreasing in `t` and bounded in `[0, U_max]`; months at or
    /// before the start (`t <= 0`) contribute no activity. The exponential
    /// branch clamps explicitly so floating drift can never exceed `U_max`
    /// for large `t`.
    pub fn utilization(&self, t: i64) -> f64 {
        if t <= 0 {
            return 0.0;
        }
        match self.model {
            RampModel::Exponential { alpha } => {
                (self.u_max * (1.0 - (-alpha * t as f64).exp())).min(self.u_max)
            }
            RampModel::Linear { months } => self.u_max * (t as f64 / months as f64).min(1.0),
        }
    }
}
