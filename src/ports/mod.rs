//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `BenchmarkSource` - Industry reference points for percentile positioning

mod benchmark_source;

pub use benchmark_source::{BenchmarkSource, BenchmarkSourceError};
