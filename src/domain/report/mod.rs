//! Report Module - Composes the engine outputs into one readiness report.
//!
//! The report is a plain data structure. Rendering (tables, charts, exports)
//! happens outside this crate.

mod readiness_report;

pub use readiness_report::{AxisRow, HeatmapCell, ReadinessReport, ReportInputs};
