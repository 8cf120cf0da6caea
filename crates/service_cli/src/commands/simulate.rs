//! Simulate command implementation
//!
//! Runs the Monte Carlo payback-distribution simulation. Noise entries
//! given on the command line replace the scenario file's `[[noise]]`
//! tables entirely.

use std::path::Path;

use tracing::info;

use payback_engine::mc::{FieldNoise, McConfig, MonteCarloEngine, NoiseField, NoiseSpec};

use crate::render::{self, OutputFormat};
use crate::scenario::Scenario;
use crate::{CliError, Result};

/// Flag values for the simulate command.
pub struct Args {
    /// Scenario file path.
    pub scenario: Option<String>,
    /// Trial count override.
    pub trials: Option<usize>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Parallel fan-out.
    pub parallel: bool,
    /// `field=sigma` noise entries.
    pub noise: Vec<String>,
    /// Use log-normal jitter for the `--noise` entries.
    pub log_normal: bool,
    /// Output format.
    pub format: String,
    /// Output file path.
    pub output: Option<String>,
}

/// Run the simulate command.
pub fn run(args: Args) -> Result<()> {
    let format = OutputFormat::parse(&args.format)?;
    let scenario = Scenario::load(args.scenario.as_deref().map(Path::new))?;

    let noise = if args.noise.is_empty() {
        scenario.noise_spec()?
    } else {
        parse_noise_flags(&args.noise, args.log_normal)?
    };

    let config = McConfig::builder()
        .trials(args.trials.unwrap_or(scenario.monte_carlo.trials))
        .seed(args.seed.unwrap_or(scenario.monte_carlo.seed))
        .parallel(args.parallel || scenario.monte_carlo.parallel)
        .build()?;

    info!(
        trials = config.trials(),
        seed = config.seed(),
        "starting monte carlo simulation"
    );
    let result = MonteCarloEngine::new(config).simulate(&scenario.parameters, &noise)?;

    let text = match format {
        OutputFormat::Table => render::mc_table(&result),
        OutputFormat::Csv => render::mc_csv(&result)?,
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
    };
    render::emit(args.output.as_deref().map(Path::new), &text)
}

/// Parses repeated `field=sigma` flags into a validated spec.
fn parse_noise_flags(flags: &[String], log_normal: bool) -> Result<NoiseSpec> {
    let mut entries = Vec::with_capacity(flags.len());
    for flag in flags {
        let (field, sigma) = flag.split_once('=').ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "noise entry '{flag}' must have the form field=sigma, e.g. salary=0.10"
            ))
        })?;
        let field: NoiseField = field.parse()?;
        let sigma: f64 = sigma.parse().map_err(|_| {
            CliError::InvalidArgument(format!("invalid relative std dev '{sigma}' for '{field}'"))
        })?;
        entries.push(if log_normal {
            FieldNoise::log_normal(field, sigma)
        } else {
            FieldNoise::normal(field, sigma)
        });
    }
    Ok(NoiseSpec::new(entries)?)
}
