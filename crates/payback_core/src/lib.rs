//! # payback_core: Foundation for Hire Payback Simulation
//!
//! ## Layer 1 (Foundation) Role
//!
//! payback_core is the bottom layer of the workspace, providing:
//! - The validated economic parameter model ([`ParameterSet`])
//! - Utilization ramp curves ([`ramp::RampModel`], [`ramp::RampProfile`])
//! - Flat monthly discounting ([`discount::DiscountCurve`])
//! - Error types ([`error::ValidationError`])
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other payback_* crates, with minimal
//! external dependencies:
//! - thiserror: structured error types
//! - serde: serialisation of parameter and result types
//!
//! ## Usage Examples
//!
//! ```rust
//! use payback_core::params::ParameterSet;
//! use payback_core::ramp::{RampModel, RampProfile};
//! use payback_core::discount::DiscountCurve;
//!
//! // Build a parameter set, overriding a few defaults
//! let params = ParameterSet::builder()
//!     .annual_salary(6_000_000.0)
//!     .ramp(RampModel::Linear { months: 6 })
//!     .max_utilization(1.0)
//!     .build()
//!     .unwrap();
//!
//! // Utilization ramp: zero before the start, bounded by U_max
//! let profile = RampProfile::new(params.ramp, params.max_utilization).unwrap();
//! assert_eq!(profile.utilization(0), 0.0);
//! assert!(profile.utilization(3) <= params.max_utilization);
//!
//! // Discounting: (1 + r)^(t/12) for an annual rate r
//! let curve = DiscountCurve::new(0.10).unwrap();
//! assert!(curve.factor(12) > 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod discount;
pub mod error;
pub mod params;
pub mod ramp;

pub use discount::DiscountCurve;
pub use error::ValidationError;
pub use params::{ParameterSet, ParameterSetBuilder, RecruitingCosts};
pub use ramp::{RampModel, RampProfile};
