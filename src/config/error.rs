//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing initialization failed: {0}")]
    Tracing(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Log level cannot be empty")]
    EmptyLogLevel,

    #[error("At least one investment category is required")]
    NoInvestmentCategories,

    #[error("Invalid investment category '{name}': {reason}")]
    InvalidInvestmentCategory { name: String, reason: String },

    #[error("Benchmark table not found: {}", .0.display())]
    BenchmarkTableNotFound(PathBuf),
}
