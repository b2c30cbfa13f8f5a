//! CLI error types

use adapter_loader::LoaderError;
use infra_config::ConfigError;
use saccr_engine::SaccrError;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Trade file could not be loaded or validated
    #[error(transparent)]
    Loader(#[from] LoaderError),

    /// Calculation failed
    #[error(transparent)]
    Engine(#[from] SaccrError),

    /// Writing output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising output failed
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
