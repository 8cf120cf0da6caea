//! Trial outcomes and distribution summary.

use serde::{Deserialize, Serialize};

/// Summary statistics over a run's payback-month distribution.
///
/// Month statistics (mean, median, std-dev, percentiles) are computed over
/// **reached** trials only and are `None` when no trial broke even within
/// the horizon; the share of unreached trials is reported separately
/// through [`breakeven_probability`](Self::breakeven_probability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaybackSummary {
    /// Total number of trials.
    pub trials: usize,
    /// Trials that reached payback within the horizon.
    pub reached: usize,
    /// `reached / trials`: probability of breaking even within the horizon.
    pub breakeven_probability: f64,
    /// Mean payback month over reached trials.
    pub mean_months: Option<f64>,
    /// Median payback month over reached trials.
    pub median_months: Option<f64>,
    /// Standard deviation of the payback month over reached trials.
    pub std_dev_months: Option<f64>,
    /// 10th percentile of the payback month.
    pub p10_months: Option<f64>,
    /// 90th percentile of the payback month.
    pub p90_months: Option<f64>,
}

impl PaybackSummary {
    /// Aggregates a run's outcomes (`None` = payback unreached).
    pub fn from_outcomes(outcomes: &[Option<u32>]) -> Self {
        let trials = outcomes.len();
        let mut reached_months: Vec<f64> =
            outcomes.iter().flatten().map(|&m| m as f64).collect();
        reached_months.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let reached = reached_months.len();

        let breakeven_probability = if trials == 0 {
            0.0
        } else {
            reached as f64 / trials as f64
        };

        if reached == 0 {
            return Self {
                trials,
                reached,
                breakeven_probability,
                mean_months: None,
                median_months: None,
                std_dev_months: None,
                p10_months: None,
                p90_months: None,
            };
        }

        let mean = reached_months.iter().sum::<f64>() / reached as f64;
        let variance = reached_months
            .iter()
            .map(|m| (m - mean) * (m - mean))
            .sum::<f64>()
            / reached as f64;

        Self {
            trials,
            reached,
            breakeven_probability,
            mean_months: Some(mean),
            median_months: Some(percentile(&reached_months, 0.50)),
            std_dev_months: Some(variance.sqrt()),
            p10_months: Some(percentile(&reached_months, 0.10)),
            p90_months: Some(percentile(&reached_months, 0.90)),
        }
    }
}

/// Result of one Monte Carlo run.
///
/// Immutable, produced once per run. `outcomes` is kept in trial-index
/// order so sequential and parallel execution compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Per-trial payback month (`None` = unreached within horizon).
    pub outcomes: Vec<Option<u32>>,
    /// Distribution summary.
    pub summary: PaybackSummary,
}

impl MonteCarloResult {
    /// Wraps ordered trial outcomes and computes their summary.
    pub fn from_outcomes(outcomes: Vec<Option<u32>>) -> Self {
        let summary = PaybackSummary::from_outcomes(&outcomes);
        Self { outcomes, summary }
    }
}

/// Nearest-rank percentile over an ascending-sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let idx = ((sorted.len() as f64 - 1.0) * q).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}
