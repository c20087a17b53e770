//! Integration tests for building a readiness report end to end.
//!
//! These tests verify the full flow:
//! 1. Configuration supplies the budget catalog and benchmark source
//! 2. The handler loads the benchmark table through the port
//! 3. Every engine runs over one snapshot
//! 4. The report serializes with stable identifiers
//!
//! Uses the in-memory benchmark source, no external services.

use std::sync::Arc;

use digital_readiness::adapters::StaticBenchmarkSource;
use digital_readiness::application::{BuildReadinessReportCommand, BuildReadinessReportHandler};
use digital_readiness::config::AppConfig;
use digital_readiness::domain::analysis::{
    BenchmarkPercentileEngine, FinancialProjectionEngine, GapPriorityClassifier,
    InitiativeQuadrant, InvestmentCategory, PaybackPeriod, PercentileBand, PriorityTier,
    RiskGrid, RiskQuadrant, ThreeLevel, TwoLevel,
};
use digital_readiness::domain::assessment::{
    AreaScore, AssessmentSnapshot, AxisScore, Initiative, Risk, Scored,
};
use digital_readiness::domain::foundation::{AxisId, BusinessArea, ErrorCode};
use digital_readiness::domain::report::ReadinessReport;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn handler() -> BuildReadinessReportHandler {
    BuildReadinessReportHandler::new(
        Arc::new(StaticBenchmarkSource::default()),
        AppConfig::default().financial.investment_categories,
    )
    .unwrap()
}

fn processes_snapshot() -> AssessmentSnapshot {
    AssessmentSnapshot::capture(
        vec![AxisScore::try_new(AxisId::Processes, 3, 6, 7).unwrap()],
        vec![
            AreaScore::try_new(BusinessArea::Sales, AxisId::Processes, 3, 6).unwrap(),
            AreaScore::try_new(BusinessArea::Logistics, AxisId::Processes, 0, 5).unwrap(),
        ],
    )
}

async fn build(
    snapshot: AssessmentSnapshot,
    initiatives: Vec<Initiative>,
    risks: Vec<Risk>,
) -> ReadinessReport {
    handler()
        .handle(BuildReadinessReportCommand {
            snapshot,
            initiatives,
            risks,
        })
        .await
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn processes_gap_is_critical_and_below_average() {
    let report = build(processes_snapshot(), vec![], vec![]).await;

    let row = &report.axis_rows[0];
    assert_eq!(row.axis_id, AxisId::Processes);
    assert_eq!(row.gap, 3.0);
    assert_eq!(row.tier, PriorityTier::Critical);

    let benchmark = &report.benchmark.axes[0];
    assert_eq!(benchmark.industry_average, 3.5);
    assert_eq!(benchmark.top_performer, 5.5);
    assert_eq!(benchmark.percentile, 37.5);
    assert_eq!(
        PercentileBand::from_percentile(benchmark.percentile),
        PercentileBand::BelowAverage
    );
    assert_eq!(report.benchmark.above_average_count, 0);
}

#[tokio::test]
async fn unassessed_area_is_left_out_of_heatmap_and_statistics() {
    let report = build(processes_snapshot(), vec![], vec![]).await;

    assert_eq!(report.area_heatmap.len(), 1);
    assert_eq!(report.area_heatmap[0].area_id, BusinessArea::Sales);

    let stats = &report.area_statistics[&AxisId::Processes];
    assert_eq!(stats.assessed_count, 1);
    assert_eq!(stats.avg_actual, Some(3.0));
}

#[tokio::test]
async fn empty_portfolio_still_lists_every_quadrant() {
    let report = build(processes_snapshot(), vec![], vec![]).await;

    assert_eq!(report.initiatives.len(), 9);
    assert_eq!(report.risks.len(), 4);
    assert!(report.risks.values().all(Vec::is_empty));
}

#[tokio::test]
async fn portfolio_items_land_in_their_quadrants() {
    let initiatives = vec![
        Initiative::try_new("i-1", "Data catalog", ThreeLevel::Medium, ThreeLevel::Medium)
            .unwrap(),
        Initiative::try_new("i-2", "Legacy rewrite", ThreeLevel::High, ThreeLevel::Low).unwrap(),
    ];
    let risks = vec![
        Risk::try_new("r-1", "Key person leaves", TwoLevel::High, TwoLevel::Low).unwrap(),
        Risk::try_new("r-2", "Minor delay", TwoLevel::Low, TwoLevel::High).unwrap(),
    ];

    let report = build(processes_snapshot(), initiatives, risks).await;

    assert_eq!(report.initiatives[&InitiativeQuadrant::Standard][0].id, "i-1");
    assert_eq!(report.initiatives[&InitiativeQuadrant::Avoid][0].id, "i-2");
    assert_eq!(report.risks[&RiskQuadrant::Contingency][0].id, "r-1");
    assert_eq!(report.risks[&RiskQuadrant::Mitigate][0].id, "r-2");
}

#[tokio::test]
async fn report_uses_configured_catalog() {
    let report = build(processes_snapshot(), vec![], vec![]).await;

    // 230k..650k scaled by 1 + 3 / 20
    assert_eq!(report.financial.investment.baseline_min, 230_000.0);
    assert_eq!(report.financial.investment.adjusted_min, 264_500.0);
    assert_eq!(report.financial.investment.adjusted_max, 747_500.0);
    assert_eq!(report.financial.investment.adjusted_avg, 506_000.0);
    assert_eq!(report.financial.years.len(), 6);
}

#[tokio::test]
async fn out_of_range_level_is_rejected() {
    let mut snapshot = processes_snapshot();
    snapshot.axes[0].actual = 8;

    let err = handler()
        .handle(BuildReadinessReportCommand {
            snapshot,
            initiatives: vec![],
            risks: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::OutOfRange);
}

#[tokio::test]
async fn identical_inputs_give_identical_json() {
    let snapshot = processes_snapshot();
    let a = build(snapshot.clone(), vec![], vec![]).await;
    let b = build(snapshot, vec![], vec![]).await;

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

// =============================================================================
// Engine Regressions
// =============================================================================

#[test]
fn tier_boundaries() {
    assert_eq!(GapPriorityClassifier::classify(3.0), PriorityTier::Critical);
    assert_eq!(GapPriorityClassifier::classify(2.999), PriorityTier::High);
    assert_eq!(GapPriorityClassifier::classify(2.0), PriorityTier::High);
    assert_eq!(GapPriorityClassifier::classify(1.0), PriorityTier::Medium);
    assert_eq!(GapPriorityClassifier::classify(0.0), PriorityTier::Low);
    assert_eq!(GapPriorityClassifier::classify(-5.0), PriorityTier::Low);
}

#[test]
fn percentile_clamps_and_handles_no_spread() {
    assert_eq!(BenchmarkPercentileEngine::percentile(10.0, 3.0, 5.0), 100.0);
    assert_eq!(BenchmarkPercentileEngine::percentile(4.0, 4.0, 4.0), 50.0);
}

#[test]
fn projection_regression() {
    let projection =
        FinancialProjectionEngine::project(&[InvestmentCategory::new(200_000.0, 500_000.0)], 10.0)
            .unwrap();

    assert_eq!(projection.investment.adjusted_avg, 525_000.0);
    assert_eq!(projection.payback_period, PaybackPeriod::Year(5));
    assert_eq!(projection.roi_5_year, 33);
    assert_eq!(projection.monthly_breakdown, 21_875.0);
}

#[test]
fn grouping_empty_risks_keeps_all_keys() {
    let grid = RiskGrid::standard().unwrap();
    let groups = grid.group_by_quadrant(&[] as &[Risk], Risk::grid_cell);

    assert_eq!(groups.len(), 4);
    assert!(groups.values().all(Vec::is_empty));
}

#[test]
fn scored_gap_is_target_minus_actual() {
    let area = AreaScore::try_new(BusinessArea::Quality, AxisId::Culture, 5, 2).unwrap();
    assert_eq!(area.gap(), -3.0);
    assert_eq!(GapPriorityClassifier::classify(area.gap()), PriorityTier::Low);
}
