//! Benchmark adapters.
//!
//! Implementations of the `BenchmarkSource` port:
//!
//! - `StaticBenchmarkSource` - Built-in table or a YAML file read at startup

mod static_table;

pub use static_table::StaticBenchmarkSource;
