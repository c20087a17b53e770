//! Aggregate Statistics Engine - Averages, totals and tier counts over scores.

use serde::{Deserialize, Serialize};

use super::{GapPriorityClassifier, PriorityTier};
use crate::domain::assessment::Scored;

/// Number of items in each priority tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl TierCounts {
    /// Returns the count for one tier.
    pub fn get(&self, tier: PriorityTier) -> usize {
        match tier {
            PriorityTier::Critical => self.critical,
            PriorityTier::High => self.high,
            PriorityTier::Medium => self.medium,
            PriorityTier::Low => self.low,
        }
    }

    /// Sum across all tiers.
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    fn record(&mut self, tier: PriorityTier) {
        match tier {
            PriorityTier::Critical => self.critical += 1,
            PriorityTier::High => self.high += 1,
            PriorityTier::Medium => self.medium += 1,
            PriorityTier::Low => self.low += 1,
        }
    }
}

/// Statistics over the assessed subset of a score collection.
///
/// Averages are `None` when nothing was assessed. Callers must branch on that
/// instead of reading a zero, which would look like "fully achieved".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatistics {
    pub avg_actual: Option<f64>,
    pub avg_target: Option<f64>,
    pub avg_gap: Option<f64>,
    /// Largest gap among assessed items, 0 when there are none.
    pub max_gap: f64,
    /// Sum of positive gaps among assessed items.
    pub total_gap: f64,
    pub assessed_count: usize,
    pub tier_counts: TierCounts,
}

impl AggregateStatistics {
    /// Returns true when no item was assessed.
    pub fn is_empty(&self) -> bool {
        self.assessed_count == 0
    }

    /// Average actual level rounded to one decimal.
    pub fn rounded_avg_actual(&self) -> Option<f64> {
        self.avg_actual.map(round_to_one_decimal)
    }

    /// Average target level rounded to one decimal.
    pub fn rounded_avg_target(&self) -> Option<f64> {
        self.avg_target.map(round_to_one_decimal)
    }

    /// Average gap rounded to one decimal.
    pub fn rounded_avg_gap(&self) -> Option<f64> {
        self.avg_gap.map(round_to_one_decimal)
    }
}

/// Rounds to one decimal place for display.
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregation functions over axis or area scores.
pub struct AggregateStatisticsEngine;

impl AggregateStatisticsEngine {
    /// Aggregates the assessed items of `scores`.
    ///
    /// Items whose actual level is 0 are dropped before any arithmetic.
    pub fn aggregate<T: Scored>(scores: &[T]) -> AggregateStatistics {
        let assessed: Vec<&T> = scores.iter().filter(|s| s.is_assessed()).collect();

        let mut tier_counts = TierCounts::default();
        let mut sum_actual = 0.0;
        let mut sum_target = 0.0;
        let mut sum_gap = 0.0;
        let mut total_gap = 0.0;
        let mut max_gap: Option<f64> = None;

        for item in &assessed {
            let gap = item.gap();
            sum_actual += item.actual();
            sum_target += item.target();
            sum_gap += gap;
            total_gap += gap.max(0.0);
            max_gap = Some(max_gap.map_or(gap, |m: f64| m.max(gap)));
            tier_counts.record(GapPriorityClassifier::classify(gap));
        }

        let count = assessed.len();
        let mean = |sum: f64| (count > 0).then(|| sum / count as f64);

        AggregateStatistics {
            avg_actual: mean(sum_actual),
            avg_target: mean(sum_target),
            avg_gap: mean(sum_gap),
            max_gap: max_gap.unwrap_or(0.0),
            total_gap,
            assessed_count: count,
            tier_counts,
        }
    }

    /// Returns the items ordered by gap, largest first.
    ///
    /// The sort is stable, so equal gaps keep their input order.
    pub fn sorted_by_gap<T: Scored>(scores: &[T]) -> Vec<&T> {
        let mut sorted: Vec<&T> = scores.iter().collect();
        sorted.sort_by(|a, b| b.gap().total_cmp(&a.gap()));
        sorted
    }
}
