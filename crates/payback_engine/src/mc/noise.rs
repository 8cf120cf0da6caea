//! Noise specification and parameter perturbation.
//!
//! A [`NoiseSpec`] names the parameter fields that vary across trials,
//! each with a relative standard deviation and a distribution family:
//!
//! - [`NoiseKind::Normal`] (default): multiplicative normal jitter,
//!   `x' = x * (1 + sigma * Z)` with `Z ~ N(0, 1)`.
//! - [`NoiseKind::LogNormal`]: mean-preserving multiplicative log-normal
//!   jitter, `x' = x * exp(sigma * Z - sigma^2 / 2)`.
//!
//! Perturbed values are clamped back into the field's validity domain
//! rather than re-drawn: monetary fields clamp below at zero, a linear
//! ramp horizon rounds to the nearest month and clamps to at least one,
//! and an exponential ramp parameter clamps to a small positive floor.
//! Draws happen in the declaration order of [`NoiseField`], which fixes
//! the per-trial random sequence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use payback_core::params::ParameterSet;
use payback_core::ramp::RampModel;

use super::error::NoiseSpecError;
use crate::rng::TrialRng;

/// Smallest exponential ramp parameter a perturbation may produce.
const MIN_RAMP_ALPHA: f64 = 1e-6;

/// A parameter field that may vary across Monte Carlo trials.
///
/// Declaration order is the draw order within a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseField {
    /// Annual salary.
    Salary,
    /// Hourly bill rate.
    BillRate,
    /// Ramp speed parameter: linear horizon months, or the exponential
    /// decay parameter when the base model is exponential.
    RampHorizon,
}

impl NoiseField {
    /// All perturbable fields in draw order.
    pub const ALL: [NoiseField; 3] = [
        NoiseField::Salary,
        NoiseField::BillRate,
        NoiseField::RampHorizon,
    ];

    /// Canonical configuration-key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoiseField::Salary => "salary",
            NoiseField::BillRate => "bill_rate",
            NoiseField::RampHorizon => "ramp_horizon",
        }
    }
}

impl fmt::Display for NoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoiseField {
    type Err = NoiseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "salary" => Ok(NoiseField::Salary),
            "bill_rate" => Ok(NoiseField::BillRate),
            "ramp_horizon" => Ok(NoiseField::RampHorizon),
            other => Err(NoiseSpecError::UnknownField(other.to_string())),
        }
    }
}

/// Distribution family for one field's jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Multiplicative normal: `x * (1 + sigma * Z)`.
    #[default]
    Normal,
    /// Mean-preserving log-normal: `x * exp(sigma * Z - sigma^2 / 2)`.
    LogNormal,
}

/// Noise configuration for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldNoise {
    /// Which field varies.
    pub field: NoiseField,
    /// Relative standard deviation in [0, 1).
    pub rel_std_dev: f64,
    /// Distribution family.
    #[serde(default)]
    pub kind: NoiseKind,
}

impl FieldNoise {
    /// Normal jitter on `field` with relative deviation `rel_std_dev`.
    pub fn normal(field: NoiseField, rel_std_dev: f64) -> Self {
        Self {
            field,
            rel_std_dev,
            kind: NoiseKind::Normal,
        }
    }

    /// Log-normal jitter on `field` with relative deviation `rel_std_dev`.
    pub fn log_normal(field: NoiseField, rel_std_dev: f64) -> Self {
        Self {
            field,
            rel_std_dev,
            kind: NoiseKind::LogNormal,
        }
    }

    /// One multiplicative jitter factor drawn from this entry's family.
    fn draw_factor(&self, rng: &mut TrialRng) -> f64 {
        let z = rng.sample_normal();
        match self.kind {
            NoiseKind::Normal => 1.0 + self.rel_std_dev * z,
            NoiseKind::LogNormal => {
                (self.rel_std_dev * z - 0.5 * self.rel_std_dev * self.rel_std_dev).exp()
            }
        }
    }
}

/// A validated set of per-field noise entries.
///
/// # Examples
///
/// ```rust
/// use payback_engine::mc::{FieldNoise, NoiseField, NoiseSpec};
///
/// let spec = NoiseSpec::new(vec![
///     FieldNoise::normal(NoiseField::Salary, 0.10),
///     FieldNoise::normal(NoiseField::BillRate, 0.10),
/// ])
/// .unwrap();
/// assert_eq!(spec.entries().len(), 2);
///
/// // Duplicate fields are rejected before any trial runs
/// assert!(NoiseSpec::new(vec![
///     FieldNoise::normal(NoiseField::Salary, 0.1),
///     FieldNoise::normal(NoiseField::Salary, 0.2),
/// ])
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoiseSpec {
    entries: Vec<FieldNoise>,
}

impl NoiseSpec {
    /// Validates and wraps a list of field entries.
    ///
    /// # Errors
    ///
    /// - [`NoiseSpecError::DuplicateField`] when a field appears twice
    /// - [`NoiseSpecError::InvalidStdDev`] when a deviation is outside
    ///   [0, 1) or non-finite
    pub fn new(entries: Vec<FieldNoise>) -> Result<Self, NoiseSpecError> {
        for (i, entry) in entries.iter().enumerate() {
            if !entry.rel_std_dev.is_finite()
                || entry.rel_std_dev < 0.0
                || entry.rel_std_dev >= 1.0
            {
                return Err(NoiseSpecError::InvalidStdDev {
                    field: entry.field.as_str(),
                    value: entry.rel_std_dev,
                });
            }
            if entries[..i].iter().any(|e| e.field == entry.field) {
                return Err(NoiseSpecError::DuplicateField(entry.field.as_str()));
            }
        }
        Ok(Self { entries })
    }

    /// A spec with no perturbed fields (every trial equals the base run).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The validated entries.
    pub fn entries(&self) -> &[FieldNoise] {
        &self.entries
    }

    /// Derives one perturbed parameter set for a trial.
    ///
    /// The base set is never mutated. Draws follow [`NoiseField`]
    /// declaration order regardless of entry order, so equal specs
    /// produce equal trials.
    pub fn perturb(&self, base: &ParameterSet, rng: &mut TrialRng) -> ParameterSet {
        let mut derived = base.clone();
        for field in NoiseField::ALL {
            let Some(entry) = self.entries.iter().find(|e| e.field == field) else {
                continue;
            };
            let factor = entry.draw_factor(rng);
            match field {
                NoiseField::Salary => {
                    derived.annual_salary = (base.annual_salary * factor).max(0.0);
                }
                NoiseField::BillRate => {
                    derived.bill_rate_hourly = (base.bill_rate_hourly * factor).max(0.0);
                }
                NoiseField::RampHorizon => {
                    derived.ramp = match base.ramp {
                        RampModel::Linear { months } => RampModel::Linear {
                            months: (months as f64 * factor).round().max(1.0) as u32,
                        },
                        RampModel::Exponential { alpha } => RampModel::Exponential {
                            alpha: (alpha * factor).max(MIN_RAMP_ALPHA),
                        },
                    };
                }
            }
        }
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_roundtrip() {
        for field in NoiseField::ALL {
            assert_eq!(field.as_str().parse::<NoiseField>().unwrap(), field);
        }
        assert_eq!(
            "salery".parse::<NoiseField>(),
            Err(NoiseSpecError::UnknownField("salery".to_string()))
        );
    }

    #[test]
    fn std_dev_domain_is_enforced() {
        assert!(NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, 0.0)]).is_ok());
        assert!(NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, 1.0)]).is_err());
        assert!(NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, -0.1)]).is_err());
        assert!(NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, f64::NAN)]).is_err());
    }

    #[test]
    fn perturbation_never_mutates_the_base() {
        let base = ParameterSet::default();
        let spec = NoiseSpec::new(vec![
            FieldNoise::normal(NoiseField::Salary, 0.3),
            FieldNoise::normal(NoiseField::BillRate, 0.3),
        ])
        .unwrap();
        let snapshot = base.clone();
        let mut rng = TrialRng::for_trial(7, 0);
        let derived = spec.perturb(&base, &mut rng);
        assert_eq!(base, snapshot);
        derived.validate().unwrap();
    }

    #[test]
    fn perturbed_values_stay_in_domain() {
        // A huge deviation is rejected by NoiseSpec, so exercise clamping
        // through many trials at the top of the allowed range instead.
        let base = ParameterSet::builder()
            .annual_salary(1_000.0)
            .build()
            .unwrap();
        let spec = NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, 0.99)]).unwrap();
        for trial in 0..500 {
            let mut rng = TrialRng::for_trial(11, trial);
            let derived = spec.perturb(&base, &mut rng);
            assert!(derived.annual_salary >= 0.0);
            derived.validate().unwrap();
        }
    }

    #[test]
    fn ramp_horizon_noise_respects_model_family() {
        let mut rng = TrialRng::for_trial(3, 0);
        let spec = NoiseSpec::new(vec![FieldNoise::normal(NoiseField::RampHorizon, 0.5)]).unwrap();

        let linear = ParameterSet::builder()
            .ramp(RampModel::Linear { months: 6 })
            .build()
            .unwrap();
        match spec.perturb(&linear, &mut rng).ramp {
            RampModel::Linear { months } => assert!(months >= 1),
            other => panic!("linear base must stay linear, got {other:?}"),
        }

        let exponential = ParameterSet::default();
        match spec.perturb(&exponential, &mut rng).ramp {
            RampModel::Exponential { alpha } => assert!(alpha >= MIN_RAMP_ALPHA),
            other => panic!("exponential base must stay exponential, got {other:?}"),
        }
    }

    #[test]
    fn log_normal_factor_is_positive() {
        let base = ParameterSet::default();
        let spec =
            NoiseSpec::new(vec![FieldNoise::log_normal(NoiseField::BillRate, 0.5)]).unwrap();
        for trial in 0..200 {
            let mut rng = TrialRng::for_trial(19, trial);
            let derived = spec.perturb(&base, &mut rng);
            assert!(derived.bill_rate_hourly > 0.0);
        }
    }

    #[test]
    fn empty_spec_is_identity() {
        let base = ParameterSet::default();
        let mut rng = TrialRng::for_trial(5, 0);
        assert_eq!(NoiseSpec::empty().perturb(&base, &mut rng), base);
    }
}
