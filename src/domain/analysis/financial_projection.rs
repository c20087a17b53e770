//! Financial Projection Engine - Investment range, cash flow, payback, ROI and NPV.
//!
//! # Model
//!
//! 1. The baseline investment range is the sum of category ranges, scaled by
//!    `1 + total_gap / GAP_MULTIPLIER_DIVISOR`.
//! 2. Half of the average investment is spent in each year from 0 through
//!    `INVESTMENT_WINDOW_LAST_YEAR` inclusive.
//! 3. Benefits start in year 1, ramp by `BENEFIT_RAMP_PER_YEAR` (capped at 1)
//!    and are further scaled by the year index.
//! 4. NPV is the undiscounted cumulative net at the horizon year.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Divisor turning the total gap into an investment multiplier.
pub const GAP_MULTIPLIER_DIVISOR: f64 = 20.0;

/// Number of years the average investment is split across.
pub const INVESTMENT_SPLIT_YEARS: f64 = 2.0;

/// Last year index (inclusive) in which investment is booked.
pub const INVESTMENT_WINDOW_LAST_YEAR: u32 = 2;

/// Last year index of the projection. Years 0 through this are simulated.
pub const PROJECTION_HORIZON_YEARS: u32 = 5;

/// Share of the average investment returned as annual benefit at full ramp.
pub const ANNUAL_BENEFIT_RATE: f64 = 0.15;

/// Benefit ramp gained per year after the first.
pub const BENEFIT_RAMP_PER_YEAR: f64 = 0.4;

/// Months the investment is spread over for the monthly figure.
pub const MONTHLY_SPREAD_MONTHS: f64 = 24.0;

/// Discount rate quoted in user-facing copy.
///
/// Not applied: `npv` is the undiscounted cumulative net at the horizon.
pub const STATED_DISCOUNT_RATE: f64 = 0.10;

/// A budget line contributing to the baseline investment range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "min_amount")]
    pub min_amount: f64,
    #[serde(alias = "max_amount")]
    pub max_amount: f64,
}

impl InvestmentCategory {
    /// Creates an unnamed category.
    pub fn new(min_amount: f64, max_amount: f64) -> Self {
        Self {
            name: None,
            min_amount,
            max_amount,
        }
    }

    /// Creates a named category.
    pub fn named(name: impl Into<String>, min_amount: f64, max_amount: f64) -> Self {
        Self {
            name: Some(name.into()),
            min_amount,
            max_amount,
        }
    }

    /// Checks amounts are finite, non-negative and ordered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::require_non_negative("min_amount", self.min_amount)?;
        ValidationError::require_non_negative("max_amount", self.max_amount)?;
        if self.min_amount > self.max_amount {
            return Err(ValidationError::out_of_range(
                "min_amount",
                0.0,
                self.max_amount,
                self.min_amount,
            ));
        }
        Ok(())
    }

    /// Default consulting budget catalog.
    pub fn default_catalog() -> Vec<InvestmentCategory> {
        vec![
            InvestmentCategory::named("Technology & Infrastructure", 100_000.0, 300_000.0),
            InvestmentCategory::named("Software & Licenses", 50_000.0, 150_000.0),
            InvestmentCategory::named("Training & Change Management", 30_000.0, 80_000.0),
            InvestmentCategory::named("Consulting & Integration", 50_000.0, 120_000.0),
        ]
    }
}

/// Gap-adjusted investment range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentRange {
    pub baseline_min: f64,
    pub baseline_max: f64,
    pub gap_multiplier: f64,
    pub adjusted_min: f64,
    pub adjusted_max: f64,
    pub adjusted_avg: f64,
}

/// Cumulative cash position at the end of one projection year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionYear {
    pub year: u32,
    pub cumulative_investment: f64,
    pub cumulative_returns: f64,
    pub net: f64,
}

/// First year with a non-negative net, or beyond the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackPeriod {
    Year(u32),
    BeyondHorizon,
}

impl PaybackPeriod {
    /// Literal reported when the projection never breaks even.
    pub const BEYOND_HORIZON_LABEL: &'static str = "> 5 years";
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Year(year) => write!(f, "{}", year),
            PaybackPeriod::BeyondHorizon => write!(f, "{}", Self::BEYOND_HORIZON_LABEL),
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaybackPeriod::Year(year) => serializer.serialize_u32(*year),
            PaybackPeriod::BeyondHorizon => serializer.serialize_str(Self::BEYOND_HORIZON_LABEL),
        }
    }
}

/// Full projection for the financial-impact view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProjection {
    pub investment: InvestmentRange,
    pub years: Vec<ProjectionYear>,
    pub payback_period: PaybackPeriod,
    /// Percent, rounded to the nearest integer.
    pub roi_5_year: i64,
    /// Undiscounted cumulative net at the horizon year.
    pub npv: f64,
    pub monthly_breakdown: f64,
}

/// Financial projection functions.
pub struct FinancialProjectionEngine;

impl FinancialProjectionEngine {
    /// Derives the gap-adjusted investment range.
    ///
    /// # Errors
    /// - Empty `categories`
    /// - Any category with non-finite, negative or inverted amounts
    /// - Negative or non-finite `total_gap`
    pub fn investment_range(
        categories: &[InvestmentCategory],
        total_gap: f64,
    ) -> Result<InvestmentRange, ValidationError> {
        if categories.is_empty() {
            return Err(ValidationError::empty_field("investment_categories"));
        }
        ValidationError::require_non_negative("total_gap", total_gap)?;
        for category in categories {
            category.validate()?;
        }

        let baseline_min: f64 = categories.iter().map(|c| c.min_amount).sum();
        let baseline_max: f64 = categories.iter().map(|c| c.max_amount).sum();
        let gap_multiplier = 1.0 + total_gap / GAP_MULTIPLIER_DIVISOR;

        let adjusted_min = round_half_up(baseline_min * gap_multiplier);
        let adjusted_max = round_half_up(baseline_max * gap_multiplier);
        let adjusted_avg = round_half_up((adjusted_min + adjusted_max) / 2.0);

        Ok(InvestmentRange {
            baseline_min,
            baseline_max,
            gap_multiplier,
            adjusted_min,
            adjusted_max,
            adjusted_avg,
        })
    }

    /// Simulates cumulative investment and returns for years 0 through the horizon.
    pub fn cash_flow(adjusted_avg: f64) -> Vec<ProjectionYear> {
        let investment_per_year = adjusted_avg / INVESTMENT_SPLIT_YEARS;
        let mut cumulative_investment = 0.0;
        let mut cumulative_returns = 0.0;

        (0..=PROJECTION_HORIZON_YEARS)
            .map(|year| {
                if year <= INVESTMENT_WINDOW_LAST_YEAR {
                    cumulative_investment += investment_per_year;
                }
                if year >= 1 {
                    let benefit_multiplier =
                        (f64::from(year - 1) * BENEFIT_RAMP_PER_YEAR).min(1.0);
                    cumulative_returns +=
                        adjusted_avg * ANNUAL_BENEFIT_RATE * benefit_multiplier * f64::from(year);
                }
                ProjectionYear {
                    year,
                    cumulative_investment,
                    cumulative_returns,
                    net: cumulative_returns - cumulative_investment,
                }
            })
            .collect()
    }

    /// First year whose net is non-negative.
    pub fn payback_period(years: &[ProjectionYear]) -> PaybackPeriod {
        years
            .iter()
            .find(|y| y.net >= 0.0)
            .map_or(PaybackPeriod::BeyondHorizon, |y| PaybackPeriod::Year(y.year))
    }

    /// Runs the full projection.
    ///
    /// # Errors
    /// Everything [`Self::investment_range`] rejects, plus an adjusted average
    /// investment of zero (ROI would be undefined).
    pub fn project(
        categories: &[InvestmentCategory],
        total_gap: f64,
    ) -> Result<FinancialProjection, ValidationError> {
        let investment = Self::investment_range(categories, total_gap)?;
        let adjusted_avg = investment.adjusted_avg;
        if adjusted_avg <= 0.0 {
            return Err(ValidationError::out_of_range(
                "adjusted_avg",
                1.0,
                f64::MAX,
                adjusted_avg,
            ));
        }

        let years = Self::cash_flow(adjusted_avg);
        let final_net = years.last().map_or(0.0, |y| y.net);
        let roi = ((final_net + adjusted_avg) / adjusted_avg - 1.0) * 100.0;

        Ok(FinancialProjection {
            investment,
            payback_period: Self::payback_period(&years),
            roi_5_year: round_half_up(roi) as i64,
            npv: final_net,
            monthly_breakdown: round_half_up(adjusted_avg / MONTHLY_SPREAD_MONTHS),
            years,
        })
    }
}

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
