//! Report command handlers.

mod build_readiness_report;

pub use build_readiness_report::{
    BuildReadinessReportCommand, BuildReadinessReportHandler, BuildReadinessReportResult,
};
