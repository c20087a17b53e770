//! BuildReadinessReportHandler - Command handler composing a readiness report.
//!
//! Loads the benchmark table from its source, then runs every analysis
//! engine over one assessment snapshot and its portfolio.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::{InitiativeGrid, InvestmentCategory, RiskGrid};
use crate::domain::assessment::{AssessmentSnapshot, Initiative, Risk};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::report::{ReadinessReport, ReportInputs};
use crate::ports::BenchmarkSource;

/// Command to build a report for one snapshot.
#[derive(Debug, Clone)]
pub struct BuildReadinessReportCommand {
    /// The scores to report on.
    pub snapshot: AssessmentSnapshot,
    /// Initiatives plotted on the effort/impact grid.
    pub initiatives: Vec<Initiative>,
    /// Risks plotted on the impact/probability grid.
    pub risks: Vec<Risk>,
}

/// Result of a successful report build.
pub type BuildReadinessReportResult = ReadinessReport;

/// Handler for building readiness reports.
///
/// Both quadrant rule tables are checked once at construction, so a
/// misconfigured grid never reaches `handle`.
pub struct BuildReadinessReportHandler {
    benchmarks: Arc<dyn BenchmarkSource>,
    investment_categories: Vec<InvestmentCategory>,
    initiative_grid: InitiativeGrid,
    risk_grid: RiskGrid,
}

impl BuildReadinessReportHandler {
    /// Creates a handler over a benchmark source and budget catalog.
    ///
    /// # Errors
    /// - Empty or invalid investment categories
    /// - Incomplete or conflicting quadrant rules
    pub fn new(
        benchmarks: Arc<dyn BenchmarkSource>,
        investment_categories: Vec<InvestmentCategory>,
    ) -> Result<Self, ValidationError> {
        if investment_categories.is_empty() {
            return Err(ValidationError::empty_field("investment_categories"));
        }
        for category in &investment_categories {
            category.validate()?;
        }

        Ok(Self {
            benchmarks,
            investment_categories,
            initiative_grid: InitiativeGrid::standard()?,
            risk_grid: RiskGrid::standard()?,
        })
    }

    pub async fn handle(
        &self,
        command: BuildReadinessReportCommand,
    ) -> Result<BuildReadinessReportResult, DomainError> {
        let snapshot_id = command.snapshot.id;
        debug!(
            "Building readiness report for snapshot {} ({} axes, {} areas)",
            snapshot_id,
            command.snapshot.axes.len(),
            command.snapshot.areas.len()
        );

        let table = self.benchmarks.load_table().await.map_err(|e| {
            warn!("Benchmark table unavailable for snapshot {}: {}", snapshot_id, e);
            DomainError::from(e)
        })?;

        let inputs = ReportInputs {
            snapshot: &command.snapshot,
            benchmarks: &table,
            investment_categories: &self.investment_categories,
            initiatives: &command.initiatives,
            risks: &command.risks,
        };
        let report = ReadinessReport::compose(inputs, &self.initiative_grid, &self.risk_grid)
            .map_err(|e| {
                warn!("Rejected snapshot {}: {}", snapshot_id, e);
                DomainError::from(e)
            })?;

        if !report.benchmark.unbenchmarked_axes.is_empty() {
            debug!(
                "Snapshot {} has {} axes without benchmark reference",
                snapshot_id,
                report.benchmark.unbenchmarked_axes.len()
            );
        }
        debug!(
            "Readiness report built for snapshot {}: {} assessed axes, total gap {}",
            snapshot_id, report.axis_statistics.assessed_count, report.axis_statistics.total_gap
        );

        Ok(report)
    }
}
