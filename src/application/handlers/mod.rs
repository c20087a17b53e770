//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod report;

pub use report::{
    BuildReadinessReportCommand, BuildReadinessReportHandler, BuildReadinessReportResult,
};
