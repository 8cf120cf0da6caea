//! Deterministic monthly cashflow projection.
//!
//! [`project`] turns a validated [`ParameterSet`] into a [`CashflowSeries`]:
//! for each month `t = 1..=T` it computes utilization, revenue, direct
//! cost, nominal and discounted cashflow, and the cumulative discounted
//! net position seeded with the up-front investment `-I0`. The derived
//! payback month is the first `t` whose cumulative net is non-negative.
//!
//! The projection is a pure function of its input: no shared mutable
//! state, and two calls with equal parameter sets yield bit-identical
//! series.

use serde::{Deserialize, Serialize};
use tracing::debug;

use payback_core::discount::DiscountCurve;
use payback_core::params::ParameterSet;
use payback_core::ramp::RampProfile;
use payback_core::ValidationError;

/// One month of the projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    /// Month index, 1-based.
    pub month: u32,
    /// Utilization fraction U_t (0 during training months).
    pub utilization: f64,
    /// Billed revenue R_t.
    pub revenue: f64,
    /// Direct cost D_t (compensation plus variable overhead).
    pub direct_cost: f64,
    /// Nominal cashflow CF_t = R_t - D_t - C_oh.
    pub cash_flow: f64,
    /// Discounted cashflow DCF_t = CF_t / (1+r)^(t/12).
    pub discounted_cf: f64,
    /// Cumulative discounted net N_t = -I0 + sum of DCF_1..t.
    pub cumulative_net: f64,
}

/// Output of one projection run.
///
/// Owned by the caller and immutable once produced. One record per month
/// is the stable schema for any external serialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSeries {
    /// Per-month records, months strictly increasing 1..=T.
    pub months: Vec<MonthRecord>,
    /// Up-front investment I0 booked at month 0.
    pub initial_investment: f64,
    /// First month with non-negative cumulative net, or `None` when
    /// payback is not reached within the horizon (a valid outcome, not an
    /// error).
    pub payback_month: Option<u32>,
}

impl CashflowSeries {
    /// Cumulative discounted net position at the end of the horizon.
    pub fn final_net(&self) -> f64 {
        self.months.last().map_or(-self.initial_investment, |m| m.cumulative_net)
    }
}

/// Projects the monthly cashflow series for one parameter set.
///
/// Validates the parameter set before computing any month; an invalid set
/// fails fast with no partial series.
///
/// # Errors
///
/// Returns [`ValidationError`] for an out-of-domain parameter field.
///
/// # Examples
///
/// ```rust
/// use payback_core::params::ParameterSet;
/// use payback_engine::projection::project;
///
/// let params = ParameterSet::default();
/// let series = project(&params).unwrap();
///
/// assert_eq!(series.months.len(), 60);
/// assert_eq!(series.months[0].month, 1);
/// // Training months bill nothing
/// assert_eq!(series.months[0].revenue, 0.0);
/// ```
pub fn project(params: &ParameterSet) -> Result<CashflowSeries, ValidationError> {
    params.validate()?;

    let profile = RampProfile::new(params.ramp, params.max_utilization)?;
    let curve = DiscountCurve::new(params.annual_discount_rate)?;

    let initial_investment = params.initial_investment();
    let direct_cost = params.monthly_direct_cost();

    debug!(
        horizon = params.horizon_months,
        initial_investment, "projecting cashflow series"
    );

    let mut months = Vec::with_capacity(params.horizon_months as usize);
    let mut cumulative = -initial_investment;
    let mut payback_month = None;

    for t in 1..=params.horizon_months {
        // Training months are paid but not billable.
        let utilization = if t <= params.training_months {
            0.0
        } else {
            profile.utilization(t as i64)
        };
        let revenue = params.bill_rate_hourly * params.hours_per_month * utilization;
        let cash_flow = revenue - direct_cost - params.fixed_overhead;
        let discounted_cf = curve.present_value(cash_flow, t);
        cumulative += discounted_cf;

        if payback_month.is_none() && cumulative >= 0.0 {
            payback_month = Some(t);
        }

        months.push(MonthRecord {
            month: t,
            utilization,
            revenue,
            direct_cost,
            cash_flow,
            discounted_cf,
            cumulative_net: cumulative,
        });
    }

    Ok(CashflowSeries {
        months,
        initial_investment,
        payback_month,
    })
}
