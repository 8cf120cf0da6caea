//! Output rendering shared by the commands.

use std::fs;
use std::path::Path;

use payback_engine::mc::MonteCarloResult;
use payback_engine::projection::CashflowSeries;

use crate::{CliError, Result};

/// Recognised output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table on stdout.
    Table,
    /// One CSV row per month or trial.
    Csv,
    /// Pretty-printed JSON of the full result structure.
    Json,
}

impl OutputFormat {
    /// Parses a `--format` flag value.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "unknown format: {}. Supported: table, csv, json",
                other
            ))),
        }
    }
}

/// Writes `text` to `output`, or to stdout when no path was given.
pub fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            Ok(())
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Renders a cashflow series as an aligned table with its scalars.
pub fn series_table(series: &CashflowSeries) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Initial investment (I0): {:>15.0}\n",
        series.initial_investment
    ));
    match series.payback_month {
        Some(m) => out.push_str(&format!("Payback period         : {m} months\n")),
        None => out.push_str("Payback period         : not reached within horizon\n"),
    }
    out.push('\n');
    out.push_str(&format!(
        "{:>5} {:>6} {:>14} {:>14} {:>14} {:>14} {:>16}\n",
        "month", "util", "revenue", "direct_cost", "cash_flow", "dcf", "cumulative_net"
    ));
    for rec in &series.months {
        out.push_str(&format!(
            "{:>5} {:>6.3} {:>14.0} {:>14.0} {:>14.0} {:>14.0} {:>16.0}\n",
            rec.month,
            rec.utilization,
            rec.revenue,
            rec.direct_cost,
            rec.cash_flow,
            rec.discounted_cf,
            rec.cumulative_net
        ));
    }
    out
}

/// Renders a cashflow series as CSV, one row per month.
pub fn series_csv(series: &CashflowSeries) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for rec in &series.months {
        writer.serialize(rec)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Renders a Monte Carlo result summary as a table.
pub fn mc_table(result: &MonteCarloResult) -> String {
    let s = &result.summary;
    let mut out = String::new();
    out.push_str(&format!("Trials                 : {}\n", s.trials));
    out.push_str(&format!(
        "Reached payback        : {} ({:.1}%)\n",
        s.reached,
        s.breakeven_probability * 100.0
    ));
    let fmt = |v: Option<f64>| match v {
        Some(v) => format!("{v:.1} months"),
        None => "n/a".to_string(),
    };
    out.push_str(&format!("Mean payback           : {}\n", fmt(s.mean_months)));
    out.push_str(&format!("Median payback         : {}\n", fmt(s.median_months)));
    out.push_str(&format!("Std dev                : {}\n", fmt(s.std_dev_months)));
    out.push_str(&format!("p10 / p90              : {} / {}\n", fmt(s.p10_months), fmt(s.p90_months)));
    out
}

/// Renders Monte Carlo outcomes as CSV, one row per trial. The summary
/// block travels in the JSON format.
pub fn mc_csv(result: &MonteCarloResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["trial", "payback_month"])?;
    for (trial, outcome) in result.outcomes.iter().enumerate() {
        let month = outcome.map(|m| m.to_string()).unwrap_or_default();
        writer.write_record([trial.to_string(), month])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use payback_core::params::ParameterSet;
    use payback_engine::mc::MonteCarloResult;
    use payback_engine::projection::project;

    #[test]
    fn format_parsing() {
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn series_csv_has_one_row_per_month() {
        let series = project(&ParameterSet::default()).unwrap();
        let csv = series_csv(&series).unwrap();
        // Header plus one line per month
        assert_eq!(csv.trim_end().lines().count(), 61);
        assert!(csv.starts_with("month,"));
    }

    #[test]
    fn mc_csv_keeps_unreached_cells_empty() {
        let result = MonteCarloResult::from_outcomes(vec![Some(12), None]);
        let csv = mc_csv(&result).unwrap();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines, vec!["trial,payback_month", "0,12", "1,"]);
    }

    #[test]
    fn tables_mention_unreached_payback() {
        let mut params = ParameterSet::default();
        params.bill_rate_hourly = 0.0;
        params.horizon_months = 3;
        let series = project(&params).unwrap();
        assert!(series_table(&series).contains("not reached"));
    }
}
