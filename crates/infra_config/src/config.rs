//! Configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use saccr_engine::parallel::{ParallelConfig, DEFAULT_MIN_CHUNK_LEN, DEFAULT_PARALLEL_THRESHOLD};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SACCR_LOG_LEVEL";
/// Environment variable overriding the output format.
pub const ENV_OUTPUT_FORMAT: &str = "SACCR_OUTPUT_FORMAT";
/// Environment variable overriding the rayon threshold.
pub const ENV_PARALLEL_THRESHOLD: &str = "SACCR_PARALLEL_THRESHOLD";
/// Environment variable overriding the rayon chunk length.
pub const ENV_MIN_CHUNK_LEN: &str = "SACCR_MIN_CHUNK_LEN";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format name.
    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    /// A numeric setting could not be parsed.
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber {
        /// Setting name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// Rayon chunk length must be at least one.
    #[error("Invalid min_chunk_len: {0}. Must be at least 1")]
    InvalidChunkLength(usize),

    /// Config file could not be read or parsed.
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Per-stage diagnostics
    Debug,
    /// Totals only
    #[default]
    Info,
    /// Matured trades and invalid records
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SaccrConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
    /// Trade count at which per-trade metrics run on rayon
    pub parallel_threshold: usize,
    /// Minimum trades per rayon task
    pub min_chunk_len: usize,
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for SaccrConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
        }
    }
}

fn parse_number(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: value.to_string(),
    })
}

impl SaccrConfig {
    /// Create a new SaccrConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: SaccrConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_chunk_len == 0 {
            return Err(ConfigError::InvalidChunkLength(self.min_chunk_len));
        }
        Ok(())
    }

    /// Overrides every setting whose variable `lookup` returns.
    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level.parse()?;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.output_format = format.parse()?;
        }
        if let Some(threshold) = lookup(ENV_PARALLEL_THRESHOLD) {
            self.parallel_threshold = parse_number("parallel_threshold", &threshold)?;
        }
        if let Some(chunk) = lookup(ENV_MIN_CHUNK_LEN) {
            self.min_chunk_len = parse_number("min_chunk_len", &chunk)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        if let Some(format) = &cli.output_format {
            self.output_format = format.parse()?;
        }
        if let Some(threshold) = cli.parallel_threshold {
            self.parallel_threshold = threshold;
        }
        Ok(())
    }

    /// Parallel execution settings for the engine.
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(self.min_chunk_len, self.parallel_threshold)
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output_format: Option<String>,
    /// Rayon threshold override
    pub parallel_threshold: Option<usize>,
}

/// Build configuration from all sources, reading the process environment.
pub fn build_config(cli: &CliArgs) -> Result<SaccrConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// Build configuration from all sources with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, env: F) -> Result<SaccrConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        SaccrConfig::from_file(config_path)?
    } else {
        SaccrConfig::default()
    };

    config.apply_env(env)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        parallel_threshold = config.parallel_threshold,
        "configuration resolved"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SaccrConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.parallel_threshold, 1024);
        assert_eq!(config.min_chunk_len, 64);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("warning").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("xml"),
            Err(ConfigError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for level in [LogLevel::Trace, LogLevel::Warn] {
            assert_eq!(LogLevel::from_str(&level.to_string()).unwrap(), level);
        }
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "DEBUG"
            output_format = "json"
            parallel_threshold = 10
            min_chunk_len = 2
        "#;

        let config: SaccrConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.parallel_config(), ParallelConfig::new(2, 10));
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: SaccrConfig = toml::from_str("output_format = \"json\"").unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_bad_log_level_in_toml() {
        assert!(toml::from_str::<SaccrConfig>("log_level = \"loud\"").is_err());
    }

    #[test]
    fn test_validate_chunk_length() {
        let config = SaccrConfig {
            min_chunk_len: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidChunkLength(0))));
    }

    #[test]
    fn test_env_overrides_defaults() {
        let config = build_config_with(
            &CliArgs::default(),
            env(&[(ENV_LOG_LEVEL, "warn"), (ENV_PARALLEL_THRESHOLD, "16")]),
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.parallel_threshold, 16);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[(ENV_LOG_LEVEL, "error"), (ENV_OUTPUT_FORMAT, "table")])).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_env_number() {
        let err = build_config_with(&CliArgs::default(), env(&[(ENV_PARALLEL_THRESHOLD, "many")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for parallel_threshold: many");
    }

    #[test]
    fn test_bad_cli_format_is_error() {
        let cli = CliArgs {
            output_format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(build_config_with(&cli, env(&[])).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/saccr.toml")),
            ..Default::default()
        };
        assert!(matches!(
            build_config_with(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidChunkLength(0);
        assert!(err.to_string().contains("at least 1"));
    }
}
