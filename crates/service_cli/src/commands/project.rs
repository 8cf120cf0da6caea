//! Project command implementation
//!
//! Runs the deterministic cashflow projection and reports the series,
//! initial investment and break-even month.

use std::path::Path;

use tracing::info;

use payback_engine::projection::project;

use crate::render::{self, OutputFormat};
use crate::scenario::Scenario;
use crate::Result;

/// Run the project command.
pub fn run(
    scenario: Option<&str>,
    horizon: Option<u32>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let format = OutputFormat::parse(format)?;
    let scenario = Scenario::load(scenario.map(Path::new))?;

    let mut params = scenario.parameters;
    if let Some(horizon) = horizon {
        params.horizon_months = horizon;
    }

    info!(horizon = params.horizon_months, "projecting cashflow series");
    let series = project(&params)?;

    let text = match format {
        OutputFormat::Table => render::series_table(&series),
        OutputFormat::Csv => render::series_csv(&series)?,
        OutputFormat::Json => serde_json::to_string_pretty(&series)?,
    };
    render::emit(output.map(Path::new), &text)
}
