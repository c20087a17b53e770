//! Gap Priority Classifier - Maps a level gap to a priority tier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gaps at or above this are Critical.
pub const CRITICAL_GAP_THRESHOLD: f64 = 3.0;

/// Gaps at or above this are High.
pub const HIGH_GAP_THRESHOLD: f64 = 2.0;

/// Gaps at or above this are Medium. Anything smaller is Low.
pub const MEDIUM_GAP_THRESHOLD: f64 = 1.0;

/// Priority bucket for a gap, ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityTier {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityTier {
    /// Returns all tiers from most to least urgent.
    pub fn all() -> &'static [PriorityTier] {
        &[
            PriorityTier::Critical,
            PriorityTier::High,
            PriorityTier::Medium,
            PriorityTier::Low,
        ]
    }

    /// Returns the display label for this tier.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Critical => "Critical",
            PriorityTier::High => "High",
            PriorityTier::Medium => "Medium",
            PriorityTier::Low => "Low",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Single source of truth for gap thresholds.
pub struct GapPriorityClassifier;

impl GapPriorityClassifier {
    /// Classifies a gap. Total over every `f64`; zero, negative and NaN gaps
    /// are all Low.
    pub fn classify(gap: f64) -> PriorityTier {
        if gap >= CRITICAL_GAP_THRESHOLD {
            PriorityTier::Critical
        } else if gap >= HIGH_GAP_THRESHOLD {
            PriorityTier::High
        } else if gap >= MEDIUM_GAP_THRESHOLD {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_threshold_boundaries() {
        assert_eq!(GapPriorityClassifier::classify(3.0), PriorityTier::Critical);
        assert_eq!(GapPriorityClassifier::classify(2.999), PriorityTier::High);
        assert_eq!(GapPriorityClassifier::classify(2.0), PriorityTier::High);
        assert_eq!(GapPriorityClassifier::classify(1.0), PriorityTier::Medium);
        assert_eq!(GapPriorityClassifier::classify(0.0), PriorityTier::Low);
        assert_eq!(GapPriorityClassifier::classify(-5.0), PriorityTier::Low);
    }

    #[test]
    fn classify_large_gap_is_critical() {
        assert_eq!(GapPriorityClassifier::classify(7.0), PriorityTier::Critical);
    }

    #[test]
    fn classify_just_below_medium_is_low() {
        assert_eq!(GapPriorityClassifier::classify(0.999), PriorityTier::Low);
    }

    #[test]
    fn classify_nan_is_low() {
        assert_eq!(GapPriorityClassifier::classify(f64::NAN), PriorityTier::Low);
    }

    #[test]
    fn tiers_are_totally_ordered() {
        assert!(PriorityTier::Low < PriorityTier::Medium);
        assert!(PriorityTier::Medium < PriorityTier::High);
        assert!(PriorityTier::High < PriorityTier::Critical);
    }

    #[test]
    fn tier_serializes_upper_case() {
        let json = serde_json::to_string(&PriorityTier::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");

        let tier: PriorityTier = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(tier, PriorityTier::Medium);
    }

    #[test]
    fn all_lists_most_urgent_first() {
        assert_eq!(PriorityTier::all()[0], PriorityTier::Critical);
        assert_eq!(PriorityTier::all()[3], PriorityTier::Low);
    }

    proptest! {
        #[test]
        fn classify_is_monotonic(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                GapPriorityClassifier::classify(low) <= GapPriorityClassifier::classify(high)
            );
        }
    }
}
