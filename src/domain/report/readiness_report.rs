use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::analysis::{
    AggregateStatistics, AggregateStatisticsEngine, BenchmarkPercentileEngine, BenchmarkSummary,
    BenchmarkTable, FinancialProjection, FinancialProjectionEngine, GapPriorityClassifier,
    InitiativeGrid, InitiativeQuadrant, InvestmentCategory, PriorityTier, RiskGrid, RiskQuadrant,
};
use crate::domain::assessment::{AssessmentSnapshot, AxisScore, Initiative, Risk, Scored};
use crate::domain::foundation::{AxisId, BusinessArea, SnapshotId, ValidationError};

/// Everything the report sections render, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub snapshot_id: SnapshotId,

    /// Assessed axes, largest gap first
    pub axis_rows: Vec<AxisRow>,
    pub axis_statistics: AggregateStatistics,

    /// Assessed areas in axis then area order
    pub area_heatmap: Vec<HeatmapCell>,
    pub area_statistics: BTreeMap<AxisId, AggregateStatistics>,

    pub benchmark: BenchmarkSummary,
    pub financial: FinancialProjection,

    pub initiatives: BTreeMap<InitiativeQuadrant, Vec<Initiative>>,
    pub risks: BTreeMap<RiskQuadrant, Vec<Risk>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRow {
    pub axis_id: AxisId,
    pub actual: u8,
    pub target: u8,
    pub max_level: u8,
    pub gap: f64,
    pub tier: PriorityTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub axis_id: AxisId,
    pub area_id: BusinessArea,
    pub current_level: u8,
    pub target_level: u8,
    pub gap: f64,
    pub tier: PriorityTier,
}

/// Inputs gathered by the caller for one report.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub snapshot: &'a AssessmentSnapshot,
    pub benchmarks: &'a BenchmarkTable,
    pub investment_categories: &'a [InvestmentCategory],
    pub initiatives: &'a [Initiative],
    pub risks: &'a [Risk],
}

impl ReadinessReport {
    /// Runs every engine over the inputs.
    ///
    /// Axes and areas whose actual level is 0 get no row or heatmap cell. The
    /// financial projection uses the total positive gap of the assessed axes.
    pub fn compose(
        inputs: ReportInputs<'_>,
        initiative_grid: &InitiativeGrid,
        risk_grid: &RiskGrid,
    ) -> Result<Self, ValidationError> {
        let snapshot = inputs.snapshot;
        snapshot.validate()?;

        let assessed_axes: Vec<AxisScore> = snapshot
            .axes
            .iter()
            .filter(|score| score.is_assessed())
            .copied()
            .collect();
        let axis_rows = AggregateStatisticsEngine::sorted_by_gap(&assessed_axes)
            .into_iter()
            .map(|score| AxisRow {
                axis_id: score.axis_id,
                actual: score.actual,
                target: score.target,
                max_level: score.max_level,
                gap: score.gap(),
                tier: GapPriorityClassifier::classify(score.gap()),
            })
            .collect();
        let axis_statistics = AggregateStatisticsEngine::aggregate(&snapshot.axes);

        let mut area_heatmap: Vec<HeatmapCell> = snapshot
            .areas
            .iter()
            .filter(|area| area.is_assessed())
            .map(|area| HeatmapCell {
                axis_id: area.axis_id,
                area_id: area.area_id,
                current_level: area.current_level,
                target_level: area.target_level,
                gap: area.gap(),
                tier: GapPriorityClassifier::classify(area.gap()),
            })
            .collect();
        area_heatmap.sort_by_key(|cell| (cell.axis_id, cell.area_id));

        let area_statistics = AxisId::all()
            .iter()
            .filter_map(|axis| {
                let areas = snapshot.areas_for_axis(*axis);
                (!areas.is_empty())
                    .then(|| (*axis, AggregateStatisticsEngine::aggregate(&areas)))
            })
            .collect();

        let benchmark =
            BenchmarkPercentileEngine::average_across_axes(&snapshot.axes, inputs.benchmarks);
        let financial = FinancialProjectionEngine::project(
            inputs.investment_categories,
            axis_statistics.total_gap,
        )?;

        let initiatives = initiative_grid
            .group_by_quadrant(inputs.initiatives, Initiative::grid_cell)
            .into_iter()
            .map(|(quadrant, items)| (quadrant, items.into_iter().cloned().collect()))
            .collect();
        let risks = risk_grid
            .group_by_quadrant(inputs.risks, Risk::grid_cell)
            .into_iter()
            .map(|(quadrant, items)| (quadrant, items.into_iter().cloned().collect()))
            .collect();

        Ok(Self {
            snapshot_id: snapshot.id,
            axis_rows,
            axis_statistics,
            area_heatmap,
            area_statistics,
            benchmark,
            financial,
            initiatives,
            risks,
        })
    }

    /// Axis rows at or above a tier.
    pub fn rows_at_least(&self, tier: PriorityTier) -> Vec<&AxisRow> {
        self.axis_rows.iter().filter(|row| row.tier >= tier).collect()
    }
}

#[cfg(test)]
#[path = "readiness_report_test.rs"]
mod readiness_report_test;
