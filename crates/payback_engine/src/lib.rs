//! # payback_engine: Projection and Monte Carlo Engines
//!
//! Layer 2 of the workspace. Builds on [`payback_core`] to provide:
//!
//! - [`projection::project`]: the deterministic monthly cashflow/DCF
//!   projection producing a [`projection::CashflowSeries`] with the derived
//!   payback month
//! - [`mc`]: the Monte Carlo engine that perturbs stochastic parameter
//!   fields, re-runs the projector per trial, and aggregates the resulting
//!   payback distribution into a [`mc::MonteCarloResult`]
//! - [`rng::TrialRng`]: seeded, per-trial random number generation for
//!   reproducible simulations
//!
//! # Examples
//!
//! ```rust
//! use payback_core::params::ParameterSet;
//! use payback_engine::mc::{FieldNoise, McConfig, MonteCarloEngine, NoiseField, NoiseSpec};
//! use payback_engine::projection::project;
//!
//! let params = ParameterSet::default();
//!
//! // Deterministic projection
//! let series = project(&params).unwrap();
//! assert_eq!(series.months.len(), params.horizon_months as usize);
//!
//! // Monte Carlo: 10% relative jitter on salary, 200 trials, fixed seed
//! let noise = NoiseSpec::new(vec![FieldNoise::normal(NoiseField::Salary, 0.10)]).unwrap();
//! let config = McConfig::builder().trials(200).seed(42).build().unwrap();
//! let result = MonteCarloEngine::new(config).simulate(&params, &noise).unwrap();
//! assert_eq!(result.outcomes.len(), 200);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod projection;
pub mod rng;

pub use mc::{MonteCarloEngine, MonteCarloResult};
pub use projection::{CashflowSeries, MonthRecord};
