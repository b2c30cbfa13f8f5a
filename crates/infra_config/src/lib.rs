//! # infra_config (I: Infra Layer)
//!
//! Configuration for the SA-CCR command-line tools, loaded from a TOML file,
//! `SACCR_*` environment variables and command-line overrides.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Config file
//! 4. Default values
//!
//! ```
//! use infra_config::{build_config_with, CliArgs, OutputFormat};
//!
//! let cli = CliArgs {
//!     output_format: Some("json".to_string()),
//!     ..Default::default()
//! };
//! let config = build_config_with(&cli, |_| None).unwrap();
//! assert_eq!(config.output_format, OutputFormat::Json);
//! ```

#![deny(missing_docs)]

mod config;

pub use config::{
    build_config, build_config_with, CliArgs, ConfigError, LogLevel, OutputFormat, SaccrConfig,
    ENV_LOG_LEVEL, ENV_MIN_CHUNK_LEN, ENV_OUTPUT_FORMAT, ENV_PARALLEL_THRESHOLD,
};
