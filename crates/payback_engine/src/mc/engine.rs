//! Monte Carlo simulation orchestration.
//!
//! [`MonteCarloEngine`] runs `trials` independent projections of a
//! perturbed base parameter set. Trials are embarrassingly parallel: each
//! derives its own RNG from `{seed, trial index}`, so the Rayon-parallel
//! path reproduces the sequential path bit for bit, and results are
//! collected in trial-index order either way.

use rayon::prelude::*;
use tracing::info;

use payback_core::params::ParameterSet;

use super::error::SimulationError;
use super::noise::NoiseSpec;
use super::result::MonteCarloResult;
use crate::projection::project;
use crate::rng::TrialRng;

/// Maximum number of trials allowed per run.
pub const MAX_TRIALS: usize = 10_000_000;

/// Monte Carlo run configuration.
///
/// Immutable; use [`McConfig::builder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use payback_engine::mc::McConfig;
///
/// let config = McConfig::builder()
///     .trials(10_000)
///     .seed(42)
///     .parallel(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.trials(), 10_000);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct McConfig {
    trials: usize,
    seed: u64,
    parallel: bool,
}

impl McConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> McConfigBuilder {
        McConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Returns the run seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns whether trials fan out across Rayon workers.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

/// Builder for [`McConfig`].
#[derive(Debug, Clone)]
pub struct McConfigBuilder {
    trials: usize,
    seed: u64,
    parallel: bool,
}

impl Default for McConfigBuilder {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: 0,
            parallel: false,
        }
    }
}

impl McConfigBuilder {
    /// Sets the number of trials in [1, 10_000_000].
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel trial fan-out.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidTrialCount`] when `trials` is 0
    /// or above [`MAX_TRIALS`].
    pub fn build(self) -> Result<McConfig, SimulationError> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(SimulationError::InvalidTrialCount(self.trials));
        }
        Ok(McConfig {
            trials: self.trials,
            seed: self.seed,
            parallel: self.parallel,
        })
    }
}

/// Monte Carlo payback-distribution engine.
///
/// # Examples
///
/// ```rust
/// use payback_core::params::ParameterSet;
/// use payback_engine::mc::{FieldNoise, McConfig, MonteCarloEngine, NoiseField, NoiseSpec};
///
/// let base = ParameterSet::default();
/// let noise = NoiseSpec::new(vec![FieldNoise::normal(NoiseField::BillRate, 0.10)]).unwrap();
/// let config = McConfig::builder().trials(100).seed(7).build().unwrap();
///
/// let result = MonteCarloEngine::new(config).simulate(&base, &noise).unwrap();
/// assert_eq!(result.summary.trials, 100);
/// ```
pub struct MonteCarloEngine {
    config: McConfig,
}

impl MonteCarloEngine {
    /// Creates an engine from a validated configuration.
    #[inline]
    pub fn new(config: McConfig) -> Self {
        Self { config }
    }

    /// Returns the engine's configuration.
    #[inline]
    pub fn config(&self) -> &McConfig {
        &self.config
    }

    /// Runs the full simulation against a base parameter set.
    ///
    /// The base set is validated before any trial runs; zero reached
    /// trials is a valid outcome reported through the summary, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidParameters`] when the base set
    /// fails validation.
    pub fn simulate(
        &self,
        base: &ParameterSet,
        noise: &NoiseSpec,
    ) -> Result<MonteCarloResult, SimulationError> {
        base.validate()?;

        info!(
            trials = self.config.trials,
            seed = self.config.seed,
            parallel = self.config.parallel,
            noise_fields = noise.entries().len(),
            "running monte carlo simulation"
        );

        let seed = self.config.seed;
        let run = |trial: u64| run_trial(base, noise, seed, trial);

        let outcomes = if self.config.parallel {
            (0..self.config.trials as u64)
                .into_par_iter()
                .map(run)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            (0..self.config.trials as u64)
                .map(run)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(MonteCarloResult::from_outcomes(outcomes))
    }
}

/// One independent trial: derive the trial RNG, perturb, project, record.
fn run_trial(
    base: &ParameterSet,
    noise: &NoiseSpec,
    seed: u64,
    trial: u64,
) -> Result<Option<u32>, SimulationError> {
    let mut rng = TrialRng::for_trial(seed, trial);
    let derived = noise.perturb(base, &mut rng);
    let series = project(&derived)?;
    Ok(series.payback_month)
}
