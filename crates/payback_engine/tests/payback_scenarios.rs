//! End-to-end scenarios with hand-verified economics.
//!
//! The deterministic scenario mirrors a consultant hire with a linear
//! six-month ramp: the expected initial investment and payback month were
//! verified against a spreadsheet calculation.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use payback_core::params::{ParameterSet, RecruitingCosts};
use payback_core::ramp::RampModel;
use payback_engine::mc::{FieldNoise, McConfig, MonteCarloEngine, NoiseField, NoiseSpec};
use payback_engine::projection::project;

fn consultant_hire() -> ParameterSet {
    ParameterSet::builder()
        .recruiting(RecruitingCosts {
            sourcing: 120_000.0,
            screening: 30_000.0,
            interviewing: 90_000.0,
            offer: 10_000.0,
            relocation: 50_000.0,
        })
        .direct_training_cost(100_000.0)
        .trainer_cost(50_000.0)
        .training_months(3)
        .annual_salary(6_000_000.0)
        .annual_benefits(1_200_000.0)
        .bill_rate_hourly(7_000.0)
        .hours_per_month(160.0)
        .ramp(RampModel::Linear { months: 6 })
        .max_utilization(1.0)
        .fixed_overhead(50_000.0)
        .variable_overhead(10_000.0)
        .annual_discount_rate(0.10)
        .horizon_months(24)
        .build()
        .unwrap()
}

#[test]
fn consultant_hire_pays_back_in_month_15() {
    let params = consultant_hire();
    let series = project(&params).unwrap();

    // I0 = 300k recruiting + 100k direct + 7.2M * 3/12 + 50k trainer
    assert_relative_eq!(series.initial_investment, 2_250_000.0, max_relative = 1e-12);

    // Training months bill nothing but still cost a full month.
    for rec in &series.months[..3] {
        assert_eq!(rec.revenue, 0.0);
        assert_relative_eq!(rec.cash_flow, -660_000.0, max_relative = 1e-12);
    }

    // Month 4 picks up the ramp where training left off: U = 4/6.
    assert_relative_eq!(series.months[3].utilization, 4.0 / 6.0, max_relative = 1e-12);
    assert_relative_eq!(series.months[3].revenue, 746_666.666_666_666_7, max_relative = 1e-9);

    // Break-even straddles months 14/15 (hand-verified cumulative nets).
    assert_eq!(series.payback_month, Some(15));
    assert_abs_diff_eq!(series.months[13].cumulative_net, -27_485.96, epsilon = 1.0);
    assert_abs_diff_eq!(series.months[14].cumulative_net, 380_849.39, epsilon = 1.0);
}

#[test]
fn undiscounted_run_accumulates_nominal_cashflows() {
    let mut params = consultant_hire();
    params.annual_discount_rate = 0.0;
    let series = project(&params).unwrap();

    let nominal: f64 = series.months.iter().map(|m| m.cash_flow).sum();
    assert_relative_eq!(
        series.final_net(),
        nominal - series.initial_investment,
        max_relative = 1e-12
    );
    // 21 earning months at full ramp leave +4.87M after the investment.
    assert_abs_diff_eq!(series.final_net(), 4_870_000.0, epsilon = 1e-6);
}

#[test]
fn monte_carlo_distribution_straddles_the_deterministic_payback() {
    let params = consultant_hire();
    let noise = NoiseSpec::new(vec![
        FieldNoise::normal(NoiseField::Salary, 0.10),
        FieldNoise::normal(NoiseField::BillRate, 0.10),
    ])
    .unwrap();
    let config = McConfig::builder()
        .trials(10_000)
        .seed(20240625)
        .parallel(true)
        .build()
        .unwrap();

    let result = MonteCarloEngine::new(config).simulate(&params, &noise).unwrap();
    let summary = &result.summary;

    assert_eq!(summary.trials, 10_000);
    // The deterministic payback is month 15 with a comfortable margin to
    // the 24-month horizon; with 10% jitter the run must still break even
    // in the vast majority of trials and centre near month 15.
    assert!(summary.breakeven_probability > 0.9);
    let mean = summary.mean_months.unwrap();
    assert!((12.0..19.0).contains(&mean), "mean {mean} out of range");
    let p10 = summary.p10_months.unwrap();
    let p90 = summary.p90_months.unwrap();
    assert!(p10 <= summary.median_months.unwrap());
    assert!(summary.median_months.unwrap() <= p90);
    assert!(p90 <= 24.0);

    // Reproducible: the same seed gives the same distribution.
    let again = MonteCarloEngine::new(config).simulate(&params, &noise).unwrap();
    assert_eq!(again, result);

    // A different seed moves individual trials.
    let other_config = McConfig::builder()
        .trials(10_000)
        .seed(1)
        .parallel(true)
        .build()
        .unwrap();
    let other = MonteCarloEngine::new(other_config)
        .simulate(&params, &noise)
        .unwrap();
    assert_ne!(other.outcomes, result.outcomes);
    // ...but the summary stays within stochastic tolerance.
    assert_abs_diff_eq!(
        other.summary.breakeven_probability,
        summary.breakeven_probability,
        epsilon = 0.05
    );
    assert_abs_diff_eq!(other.summary.mean_months.unwrap(), mean, epsilon = 1.0);
}

#[test]
fn ramp_horizon_noise_keeps_the_run_valid() {
    let params = consultant_hire();
    let noise = NoiseSpec::new(vec![FieldNoise::log_normal(NoiseField::RampHorizon, 0.25)])
        .unwrap();
    let config = McConfig::builder().trials(500).seed(99).build().unwrap();

    let result = MonteCarloEngine::new(config).simulate(&params, &noise).unwrap();
    assert_eq!(result.outcomes.len(), 500);
    for outcome in &result.outcomes {
        if let Some(month) = outcome {
            assert!((1..=24).contains(month));
        }
    }
}
