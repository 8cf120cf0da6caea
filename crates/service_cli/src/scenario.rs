//! TOML scenario files.
//!
//! A scenario file mirrors the [`ParameterSet`] fields under
//! `[parameters]`, Monte Carlo settings under `[monte_carlo]`, and noise
//! entries as an array of `[[noise]]` tables. Every key is optional; the
//! built-in calibration fills omitted parameters.
//!
//! ```toml
//! [parameters]
//! annual_salary = 6_000_000.0
//! bill_rate_hourly = 7_000.0
//! training_months = 3
//! ramp = { kind = "linear", months = 6 }
//!
//! [monte_carlo]
//! trials = 10000
//! seed = 42
//!
//! [[noise]]
//! field = "salary"
//! rel_std_dev = 0.10
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use payback_core::params::ParameterSet;
use payback_engine::mc::{FieldNoise, NoiseSpec};

use crate::Result;

/// Monte Carlo settings section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct McSection {
    /// Number of trials.
    pub trials: usize,
    /// Random seed.
    pub seed: u64,
    /// Fan trials out across worker threads.
    pub parallel: bool,
}

impl Default for McSection {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: 0,
            parallel: false,
        }
    }
}

/// Parsed scenario file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Economic parameters; omitted keys fall back to defaults.
    pub parameters: ParameterSet,
    /// Monte Carlo settings.
    pub monte_carlo: McSection,
    /// Per-field noise entries (validated when bound into a spec).
    pub noise: Vec<FieldNoise>,
}

impl Scenario {
    /// Loads and parses a scenario file, or returns defaults for `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)?;
                Ok(toml::from_str(&text)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Binds the file's noise entries into a validated spec.
    pub fn noise_spec(&self) -> Result<NoiseSpec> {
        Ok(NoiseSpec::new(self.noise.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payback_core::ramp::RampModel;
    use payback_engine::mc::NoiseField;

    #[test]
    fn partial_scenario_falls_back_to_defaults() {
        let s: Scenario = toml::from_str(
            r#"
            [parameters]
            annual_salary = 7000000.0
            training_months = 2
            "#,
        )
        .unwrap();
        assert_eq!(s.parameters.annual_salary, 7_000_000.0);
        assert_eq!(s.parameters.training_months, 2);
        // Untouched keys keep the calibration defaults
        assert_eq!(s.parameters.hours_per_month, 160.0);
        assert_eq!(s.monte_carlo.trials, 10_000);
        assert!(s.noise.is_empty());
    }

    #[test]
    fn full_scenario_parses() {
        let s: Scenario = toml::from_str(
            r#"
            [parameters]
            bill_rate_hourly = 7000.0
            max_utilization = 1.0
            ramp = { kind = "linear", months = 6 }

            [parameters.recruiting]
            sourcing = 300000.0

            [monte_carlo]
            trials = 500
            seed = 42
            parallel = true

            [[noise]]
            field = "salary"
            rel_std_dev = 0.10

            [[noise]]
            field = "bill_rate"
            rel_std_dev = 0.10
            kind = "log_normal"
            "#,
        )
        .unwrap();
        assert_eq!(s.parameters.ramp, RampModel::Linear { months: 6 });
        assert_eq!(s.parameters.recruiting.sourcing, 300_000.0);
        assert_eq!(s.monte_carlo.seed, 42);
        assert!(s.monte_carlo.parallel);
        let spec = s.noise_spec().unwrap();
        assert_eq!(spec.entries().len(), 2);
        assert_eq!(spec.entries()[0].field, NoiseField::Salary);
    }

    #[test]
    fn duplicate_noise_fields_fail_at_binding() {
        let s: Scenario = toml::from_str(
            r#"
            [[noise]]
            field = "salary"
            rel_std_dev = 0.1

            [[noise]]
            field = "salary"
            rel_std_dev = 0.2
            "#,
        )
        .unwrap();
        assert!(s.noise_spec().is_err());
    }
}
