//! The validated economic parameter model.
//!
//! [`ParameterSet`] is an immutable value object describing one simulation
//! run: recruiting and training investment, compensation, billing, ramp
//! behaviour, overheads and financial settings. It is constructed once via
//! [`ParameterSetBuilder`], validated at build time, and never mutated;
//! Monte Carlo perturbation derives a fresh set per trial.
//!
//! Default values follow the original calibration against Japanese labour
//! statistics (MHLW wage structure and skills development surveys, 2023;
//! 10-year JGB yield, June 2025).

use serde::{Deserialize, Serialize};

use crate::error::{check_non_negative, check_positive, ValidationError};
use crate::ramp::RampModel;

/// Per-hire recruiting sub-costs in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecruitingCosts {
    /// Candidate sourcing (job boards, agency fees).
    pub sourcing: f64,
    /// Resume screening effort.
    pub screening: f64,
    /// Interview loops (interviewer time).
    pub interviewing: f64,
    /// Offer management and signing incentives.
    pub offer: f64,
    /// Relocation support.
    pub relocation: f64,
}

impl RecruitingCosts {
    /// Sum of the five sub-costs.
    #[inline]
    pub fn total(&self) -> f64 {
        self.sourcing + self.screening + self.interviewing + self.offer + self.relocation
    }

    /// Validates that every sub-cost is finite and non-negative.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_non_negative("recruiting.sourcing", self.sourcing)?;
        check_non_negative("recruiting.screening", self.screening)?;
        check_non_negative("recruiting.interviewing", self.interviewing)?;
        check_non_negative("recruiting.offer", self.offer)?;
        check_non_negative("recruiting.relocation", self.relocation)?;
        Ok(())
    }
}

impl Default for RecruitingCosts {
    /// Splits the surveyed 568k average cost-per-hire across sub-costs.
    fn default() -> Self {
        Self {
            sourcing: 180_000.0,
            screening: 60_000.0,
            interviewing: 120_000.0,
            offer: 8_000.0,
            relocation: 200_000.0,
        }
    }
}

/// Validated economic inputs for one simulation run.
///
/// Construct via [`ParameterSet::builder`]; every field is public for
/// read access but the set should be treated as immutable once built.
///
/// # Examples
///
/// ```rust
/// use payback_core::params::ParameterSet;
///
/// let params = ParameterSet::builder()
///     .annual_salary(6_400_000.0)
///     .horizon_months(60)
///     .build()
///     .unwrap();
///
/// assert_eq!(params.horizon_months, 60);
/// assert!(params.initial_investment() > 0.0);
///
/// // Out-of-domain fields fail fast at build time
/// assert!(ParameterSet::builder().hours_per_month(0.0).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Recruiting investment breakdown.
    pub recruiting: RecruitingCosts,
    /// Direct training spend (materials, external courses).
    pub direct_training_cost: f64,
    /// Trainer/mentor cost over the training period.
    pub trainer_cost: f64,
    /// Non-productive training months M0 (may be 0).
    pub training_months: u32,
    /// Annual salary S.
    pub annual_salary: f64,
    /// Annual benefits B (absolute, not a rate).
    pub annual_benefits: f64,
    /// Hourly bill rate.
    pub bill_rate_hourly: f64,
    /// Standard billable hours per month H (> 0).
    pub hours_per_month: f64,
    /// Ramp model family and speed parameter.
    pub ramp: RampModel,
    /// Maximum utilization U_max in (0, 1].
    pub max_utilization: f64,
    /// Fixed monthly overhead allocation.
    pub fixed_overhead: f64,
    /// Variable monthly engagement cost.
    pub variable_overhead: f64,
    /// Annual discount rate r (>= 0).
    pub annual_discount_rate: f64,
    /// Simulation horizon T in months (>= 1).
    pub horizon_months: u32,
}

impl ParameterSet {
    /// Creates a builder pre-populated with the default calibration.
    #[inline]
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    /// Monthly compensation: `(S + B) / 12`.
    #[inline]
    pub fn monthly_compensation(&self) -> f64 {
        (self.annual_salary + self.annual_benefits) / 12.0
    }

    /// Monthly direct cost: compensation plus variable overhead. Accrues
    /// every month including training months.
    #[inline]
    pub fn monthly_direct_cost(&self) -> f64 {
        self.monthly_compensation() + self.variable_overhead
    }

    /// Up-front investment I0 booked at month 0: recruiting total plus
    /// training cost `C_dir + (S+B) * (M0/12) + C_trn`.
    pub fn initial_investment(&self) -> f64 {
        self.recruiting.total()
            + self.direct_training_cost
            + self.monthly_compensation() * self.training_months as f64
            + self.trainer_cost
    }

    /// Validates every field's domain invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.recruiting.validate()?;
        check_non_negative("direct_training_cost", self.direct_training_cost)?;
        check_non_negative("trainer_cost", self.trainer_cost)?;
        check_non_negative("annual_salary", self.annual_salary)?;
        check_non_negative("annual_benefits", self.annual_benefits)?;
        check_non_negative("bill_rate_hourly", self.bill_rate_hourly)?;
        check_positive("hours_per_month", self.hours_per_month)?;
        self.ramp.validate()?;
        if !self.max_utilization.is_finite()
            || self.max_utilization <= 0.0
            || self.max_utilization > 1.0
        {
            return Err(ValidationError::UtilizationOutOfRange(self.max_utilization));
        }
        check_non_negative("fixed_overhead", self.fixed_overhead)?;
        check_non_negative("variable_overhead", self.variable_overhead)?;
        check_non_negative("annual_discount_rate", self.annual_discount_rate)?;
        if self.horizon_months == 0 {
            return Err(ValidationError::HorizonTooShort(self.horizon_months));
        }
        Ok(())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            recruiting: RecruitingCosts::default(),
            direct_training_cost: 15_000.0,
            trainer_cost: 0.0,
            training_months: 3,
            annual_salary: 6_400_000.0,
            annual_benefits: 960_000.0,
            bill_rate_hourly: 6_875.0,
            hours_per_month: 160.0,
            ramp: RampModel::Exponential { alpha: 0.35 },
            max_utilization: 0.75,
            fixed_overhead: 50_000.0,
            variable_overhead: 70_000.0,
            annual_discount_rate: 0.0145,
            horizon_months: 60,
        }
    }
}

/// Fluent builder for [`ParameterSet`].
///
/// Starts from the default calibration; `build()` validates the final set.
#[derive(Debug, Clone, Default)]
pub struct ParameterSetBuilder {
    params: ParameterSet,
}

impl ParameterSetBuilder {
    /// Sets the recruiting cost breakdown.
    pub fn recruiting(mut self, recruiting: RecruitingCosts) -> Self {
        self.params.recruiting = recruiting;
        self
    }

    /// Sets the direct training spend.
    pub fn direct_training_cost(mut self, value: f64) -> Self {
        self.params.direct_training_cost = value;
        self
    }

    /// Sets the trainer/mentor cost.
    pub fn trainer_cost(mut self, value: f64) -> Self {
        self.params.trainer_cost = value;
        self
    }

    /// Sets the non-productive training months M0.
    pub fn training_months(mut self, value: u32) -> Self {
        self.params.training_months = value;
        self
    }

    /// Sets the annual salary.
    pub fn annual_salary(mut self, value: f64) -> Self {
        self.params.annual_salary = value;
        self
    }

    /// Sets the annual benefits (absolute currency amount).
    pub fn annual_benefits(mut self, value: f64) -> Self {
        self.params.annual_benefits = value;
        self
    }

    /// Sets the hourly bill rate.
    pub fn bill_rate_hourly(mut self, value: f64) -> Self {
        self.params.bill_rate_hourly = value;
        self
    }

    /// Sets the standard billable hours per month.
    pub fn hours_per_month(mut self, value: f64) -> Self {
        self.params.hours_per_month = value;
        self
    }

    /// Sets the ramp model.
    pub fn ramp(mut self, ramp: RampModel) -> Self {
        self.params.ramp = ramp;
        self
    }

    /// Sets the maximum utilization U_max.
    pub fn max_utilization(mut self, value: f64) -> Self {
        self.params.max_utilization = value;
        self
    }

    /// Sets the fixed monthly overhead.
    pub fn fixed_overhead(mut self, value: f64) -> Self {
        self.params.fixed_overhead = value;
        self
    }

    /// Sets the variable monthly engagement cost.
    pub fn variable_overhead(mut self, value: f64) -> Self {
        self.params.variable_overhead = value;
        self
    }

    /// Sets the annual discount rate.
    pub fn annual_discount_rate(mut self, value: f64) -> Self {
        self.params.annual_discount_rate = value;
        self
    }

    /// Sets the simulation horizon in months.
    pub fn horizon_months(mut self, value: u32) -> Self {
        self.params.horizon_months = value;
        self
    }

    /// Validates and returns the parameter set.
    ///
    /// # Errors
    ///
    /// Returns the first violated domain invariant.
    pub fn build(self) -> Result<ParameterSet, ValidationError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
