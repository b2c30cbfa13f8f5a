//! saccr - Command Line Operations for SA-CCR Exposure at Default
//!
//! This is the operational entry point for the SA-CCR engine.
//!
//! # Commands
//!
//! - `saccr ead --input <file>` - EAD of the netting set in a trade file
//! - `saccr metrics --input <file>` - Per-trade supervisory metrics
//! - `saccr validate --input <file>` - Schema validation only
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! wires the loader (A), configuration (I) and engine (P) together.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_config::{build_config, CliArgs, SaccrConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// SA-CCR exposure at default calculator
#[derive(Parser)]
#[command(name = "saccr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Trade count at which per-trade metrics run in parallel
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate exposure at default for a trade file
    Ead {
        /// Path to FIRE JSON trade file
        #[arg(short, long)]
        input: PathBuf,

        /// Netting set identifier used in the report
        #[arg(short, long)]
        netting_set: Option<String>,
    },

    /// Print per-trade metrics (S, E, maturity, duration, delta, MF)
    Metrics {
        /// Path to FIRE JSON trade file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Validate a trade file without calculating
    Validate {
        /// Path to FIRE JSON trade file
        #[arg(short, long)]
        input: PathBuf,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            output_format: self.format.clone(),
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn init_tracing(config: &SaccrConfig) {
    // RUST_LOG, when set, wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args())?;
    init_tracing(&config);
    debug!(?config, "resolved configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Ead { input, netting_set } => {
            commands::ead::run(input, netting_set.as_deref(), &config, &mut out)
        }
        Commands::Metrics { input } => commands::metrics::run(input, &config, &mut out),
        Commands::Validate { input } => commands::validate::run(input, &config, &mut out),
    };
    out.flush()?;
    result
}
