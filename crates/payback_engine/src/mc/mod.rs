//! Monte Carlo payback-distribution engine.
//!
//! Wraps many independent projector runs: each trial perturbs the
//! stochastic fields of a base [`ParameterSet`](payback_core::params::ParameterSet)
//! according to a [`NoiseSpec`], re-runs the deterministic projection, and
//! records the resulting payback month. The trial outcomes are aggregated
//! into a [`MonteCarloResult`] with distribution summary statistics.
//!
//! # Module Structure
//!
//! - [`noise`]: perturbable field names, distribution families and the
//!   validated noise specification
//! - [`engine`]: [`McConfig`] and the [`MonteCarloEngine`] orchestrating
//!   sequential or Rayon-parallel trial fan-out
//! - [`result`]: trial outcomes and the [`PaybackSummary`] statistics
//! - [`error`]: noise-spec and simulation error types

pub mod engine;
pub mod error;
pub mod noise;
pub mod result;

pub use engine::{McConfig, McConfigBuilder, MonteCarloEngine};
pub use error::{NoiseSpecError, SimulationError};
pub use noise::{FieldNoise, NoiseField, NoiseKind, NoiseSpec};
pub use result::{MonteCarloResult, PaybackSummary};
