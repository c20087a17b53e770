//! Benchmark Percentile Engine - Positions a score between industry reference points.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{AxisScore, Scored};
use crate::domain::foundation::{AxisId, ValidationError};

/// Percentile returned when the industry average and top performer coincide.
pub const AT_BENCHMARK_PERCENTILE: f64 = 50.0;

/// Percentile of an organization scoring exactly the industry average.
const INDUSTRY_AVERAGE_PERCENTILE: f64 = 50.0;

/// Percentile distance between the industry average and the top performer.
const TOP_PERFORMER_SPREAD: f64 = 50.0;

/// External reference points for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkReference {
    pub industry_average: f64,
    pub top_performer: f64,
}

impl BenchmarkReference {
    /// Creates a reference, rejecting non-finite or negative values.
    pub fn try_new(industry_average: f64, top_performer: f64) -> Result<Self, ValidationError> {
        ValidationError::require_non_negative("industry_average", industry_average)?;
        ValidationError::require_non_negative("top_performer", top_performer)?;
        Ok(Self {
            industry_average,
            top_performer,
        })
    }

    /// True when there is no spread to position within.
    pub fn is_degenerate(&self) -> bool {
        self.top_performer == self.industry_average
    }
}

/// Reference points keyed by axis. Never derived from organization data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkTable(BTreeMap<AxisId, BenchmarkReference>);

static DEFAULT_TABLE: Lazy<BenchmarkTable> = Lazy::new(|| {
    BenchmarkTable::from_entries([
        (AxisId::Processes, 3.5, 5.5),
        (AxisId::DigitalProducts, 3.0, 5.0),
        (AxisId::BusinessModels, 2.8, 4.8),
        (AxisId::DataManagement, 3.2, 5.4),
        (AxisId::Culture, 3.0, 5.2),
        (AxisId::Cybersecurity, 3.8, 5.8),
        (AxisId::AiMaturity, 2.2, 4.5),
    ])
});

impl BenchmarkTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in cross-industry reference table.
    pub fn default_industry() -> &'static BenchmarkTable {
        &DEFAULT_TABLE
    }

    fn from_entries<const N: usize>(entries: [(AxisId, f64, f64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(axis, industry_average, top_performer)| {
                    (
                        axis,
                        BenchmarkReference {
                            industry_average,
                            top_performer,
                        },
                    )
                })
                .collect(),
        )
    }

    /// Adds or replaces the reference for an axis.
    pub fn with_reference(mut self, axis: AxisId, reference: BenchmarkReference) -> Self {
        self.0.insert(axis, reference);
        self
    }

    /// Returns the reference for an axis.
    pub fn get(&self, axis: AxisId) -> Option<&BenchmarkReference> {
        self.0.get(&axis)
    }

    /// Number of axes with a reference.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no axis has a reference.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Re-checks every reference, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for reference in self.0.values() {
            BenchmarkReference::try_new(reference.industry_average, reference.top_performer)?;
        }
        Ok(())
    }
}

/// Presentation band derived from a percentile. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PercentileBand {
    TopQuartile,
    TopHalf,
    BelowAverage,
}

impl PercentileBand {
    /// Derives the band for a percentile.
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= 75.0 {
            PercentileBand::TopQuartile
        } else if percentile >= 50.0 {
            PercentileBand::TopHalf
        } else {
            PercentileBand::BelowAverage
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::TopQuartile => "Top quartile",
            PercentileBand::TopHalf => "Top half",
            PercentileBand::BelowAverage => "Below average",
        }
    }
}

/// One axis positioned against its reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBenchmark {
    pub axis_id: AxisId,
    pub actual: f64,
    pub industry_average: f64,
    pub top_performer: f64,
    pub percentile: f64,
}

/// Cross-axis benchmark view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSummary {
    pub axes: Vec<AxisBenchmark>,
    pub avg_actual: Option<f64>,
    pub avg_industry: Option<f64>,
    pub avg_percentile: Option<f64>,
    /// Axes scoring strictly above the industry average.
    pub above_average_count: usize,
    /// Assessed axes that had no reference in the table.
    pub unbenchmarked_axes: Vec<AxisId>,
}

/// Industry benchmark positioning functions.
pub struct BenchmarkPercentileEngine;

impl BenchmarkPercentileEngine {
    /// Percentile of `actual` on a scale where the industry average sits at 50
    /// and the top performer at 100. Clamped to `[0, 100]`.
    ///
    /// # Edge Cases
    /// - `top_performer == industry_average`: returns [`AT_BENCHMARK_PERCENTILE`]
    pub fn percentile(actual: f64, industry_average: f64, top_performer: f64) -> f64 {
        let spread = top_performer - industry_average;
        if spread == 0.0 {
            return AT_BENCHMARK_PERCENTILE;
        }

        let raw = ((actual - industry_average) / spread) * TOP_PERFORMER_SPREAD
            + INDUSTRY_AVERAGE_PERCENTILE;
        raw.clamp(0.0, 100.0)
    }

    /// Percentile of `actual` against a reference.
    pub fn percentile_for(actual: f64, reference: &BenchmarkReference) -> f64 {
        Self::percentile(actual, reference.industry_average, reference.top_performer)
    }

    /// Positions every assessed axis and averages the results.
    ///
    /// Unassessed axes are skipped. Assessed axes missing from `benchmarks`
    /// are listed in `unbenchmarked_axes` and left out of the averages.
    pub fn average_across_axes(
        org_scores: &[AxisScore],
        benchmarks: &BenchmarkTable,
    ) -> BenchmarkSummary {
        let mut axes = Vec::new();
        let mut unbenchmarked_axes = Vec::new();

        for score in org_scores.iter().filter(|s| s.is_assessed()) {
            match benchmarks.get(score.axis_id) {
                Some(reference) => axes.push(AxisBenchmark {
                    axis_id: score.axis_id,
                    actual: score.actual(),
                    industry_average: reference.industry_average,
                    top_performer: reference.top_performer,
                    percentile: Self::percentile_for(score.actual(), reference),
                }),
                None => unbenchmarked_axes.push(score.axis_id),
            }
        }

        let count = axes.len();
        let mean = |sum: f64| (count > 0).then(|| sum / count as f64);

        BenchmarkSummary {
            avg_actual: mean(axes.iter().map(|a| a.actual).sum()),
            avg_industry: mean(axes.iter().map(|a| a.industry_average).sum()),
            avg_percentile: mean(axes.iter().map(|a| a.percentile).sum()),
            above_average_count: axes
                .iter()
                .filter(|a| a.actual > a.industry_average)
                .count(),
            axes,
            unbenchmarked_axes,
        }
    }
}
