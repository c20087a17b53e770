use async_trait::async_trait;

use crate::domain::analysis::BenchmarkTable;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for loading industry benchmark reference points.
///
/// Tables are read-only reference data. They are never derived from an
/// organization's own scores.
#[async_trait]
pub trait BenchmarkSource: Send + Sync {
    /// Loads the reference table used for percentile positioning.
    async fn load_table(&self) -> Result<BenchmarkTable, BenchmarkSourceError>;
}

/// Errors that can occur while loading benchmarks
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BenchmarkSourceError {
    #[error("Benchmark source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid benchmark table: {0}")]
    Parse(String),
}

impl From<BenchmarkSourceError> for DomainError {
    fn from(err: BenchmarkSourceError) -> Self {
        DomainError::new(ErrorCode::BenchmarkUnavailable, err.to_string())
    }
}
