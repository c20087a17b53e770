//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It is the only place, along with adapters, that logs.

pub mod handlers;

pub use handlers::{
    BuildReadinessReportCommand, BuildReadinessReportHandler, BuildReadinessReportResult,
};
