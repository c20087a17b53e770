//! Analysis Module - Pure scoring, benchmarking and projection engines.
//!
//! # Components
//!
//! - `GapPriorityClassifier` - Gap to priority tier, the only place thresholds live
//! - `AggregateStatisticsEngine` - Averages, totals and tier counts over assessed items
//! - `BenchmarkPercentileEngine` - Industry percentile positioning
//! - `FinancialProjectionEngine` - Investment range, cash flow, payback, ROI, NPV
//! - `GridClassifier` - Effort/impact and impact/probability quadrant lookup
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Identical input
//! yields bit-identical output. No ports or adapters are needed here and
//! nothing in this module logs.

mod aggregate_statistics;
mod benchmark;
mod financial_projection;
mod gap_classifier;
mod grid_classifier;

pub use aggregate_statistics::{
    round_to_one_decimal, AggregateStatistics, AggregateStatisticsEngine, TierCounts,
};
pub use benchmark::{
    AxisBenchmark, BenchmarkPercentileEngine, BenchmarkReference, BenchmarkSummary,
    BenchmarkTable, PercentileBand, AT_BENCHMARK_PERCENTILE,
};
pub use financial_projection::{
    FinancialProjection, FinancialProjectionEngine, InvestmentCategory, InvestmentRange,
    PaybackPeriod, ProjectionYear, ANNUAL_BENEFIT_RATE, BENEFIT_RAMP_PER_YEAR,
    GAP_MULTIPLIER_DIVISOR, INVESTMENT_SPLIT_YEARS, INVESTMENT_WINDOW_LAST_YEAR,
    MONTHLY_SPREAD_MONTHS, PROJECTION_HORIZON_YEARS, STATED_DISCOUNT_RATE,
};
pub use gap_classifier::{
    GapPriorityClassifier, PriorityTier, CRITICAL_GAP_THRESHOLD, HIGH_GAP_THRESHOLD,
    MEDIUM_GAP_THRESHOLD,
};
pub use grid_classifier::{
    GridClassifier, GridDimension, InitiativeGrid, InitiativeQuadrant, QuadrantId, QuadrantRule,
    RiskGrid, RiskQuadrant, ThreeLevel, TwoLevel, INITIATIVE_RULES, RISK_RULES,
};
