//! Domain layer containing the scoring rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (axes, business areas, IDs, errors)
//! - `assessment` - Axis and area scores, snapshots, initiatives and risks
//! - `analysis` - Pure engines (gap tiers, statistics, benchmarks, finance, grids)
//! - `report` - Composition of the engine outputs into a readiness report

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod report;
