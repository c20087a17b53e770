//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIGITAL_READINESS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use digital_readiness::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing().expect("Failed to install subscriber");
//! ```

mod benchmarks;
mod error;
mod financial;
mod logging;

pub use benchmarks::BenchmarkConfig;
pub use error::{ConfigError, ValidationError};
pub use financial::FinancialConfig;
pub use logging::{LogFormat, LoggingConfig, LOG_FILTER_ENV};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for every setting.
const ENV_PREFIX: &str = "DIGITAL_READINESS";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration backed by the built-in benchmark table and budget catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Benchmark table configuration
    #[serde(default)]
    pub benchmarks: BenchmarkConfig,

    /// Investment categories for the financial projection
    #[serde(default)]
    pub financial: FinancialConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DIGITAL_READINESS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DIGITAL_READINESS__LOGGING__LEVEL=debug` -> `logging.level = debug`
    /// - `DIGITAL_READINESS__BENCHMARKS__TABLE_PATH=...` -> `benchmarks.table_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top.
    ///
    /// The format is inferred from the extension (`.toml`, `.yaml`, `.json`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.benchmarks.validate()?;
        self.financial.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
