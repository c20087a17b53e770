//! Adapters - Implementations of port interfaces.
//!
//! - `benchmarks` - Benchmark table sources (built-in, YAML)

pub mod benchmarks;

pub use benchmarks::StaticBenchmarkSource;
