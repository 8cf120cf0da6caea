//! Payback CLI - Hire Payback Simulation from the Command Line
//!
//! Operational entry point for the payback workspace.
//!
//! # Commands
//!
//! - `payback project` - Project the monthly cashflow/DCF series for one
//!   parameter set and report the break-even month
//! - `payback simulate` - Run a Monte Carlo payback-distribution
//!   simulation over perturbed parameters
//!
//! Parameters come from an optional TOML scenario file; individual flags
//! override file values, and the built-in calibration fills whatever is
//! left unspecified.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod render;
mod scenario;

pub use error::{CliError, Result};

/// Hire payback simulation CLI
#[derive(Parser)]
#[command(name = "payback")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project the deterministic monthly cashflow series
    Project {
        /// Path to a TOML scenario file
        #[arg(short, long)]
        scenario: Option<String>,

        /// Override the simulation horizon in months
        #[arg(long)]
        horizon: Option<u32>,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run a Monte Carlo payback-distribution simulation
    Simulate {
        /// Path to a TOML scenario file
        #[arg(short, long)]
        scenario: Option<String>,

        /// Number of Monte Carlo trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Fan trials out across worker threads
        #[arg(short, long)]
        parallel: bool,

        /// Noise entry as field=rel_std_dev (repeatable), e.g. salary=0.10
        #[arg(short, long = "noise", value_name = "FIELD=SIGMA")]
        noise: Vec<String>,

        /// Use log-normal jitter instead of normal for --noise entries
        #[arg(long)]
        log_normal: bool,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Project {
            scenario,
            horizon,
            format,
            output,
        } => commands::project::run(scenario.as_deref(), horizon, &format, output.as_deref()),
        Commands::Simulate {
            scenario,
            trials,
            seed,
            parallel,
            noise,
            log_normal,
            format,
            output,
        } => commands::simulate::run(commands::simulate::Args {
            scenario,
            trials,
            seed,
            parallel,
            noise,
            log_normal,
            format,
            output,
        }),
    }
}
