//! Grid Classifier - Two-dimensional quadrant lookup over discretized levels.
//!
//! A [`GridClassifier`] is built once from a rule table. Construction fails
//! unless every cell of the declared grid maps to exactly one quadrant, so
//! [`GridClassifier::classify`] never has to handle an unmapped cell.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use crate::domain::foundation::ValidationError;

/// An ordinal dimension with a closed domain.
pub trait GridDimension: Copy + Eq + fmt::Display + 'static {
    /// Every value of the dimension, lowest first.
    fn domain() -> &'static [Self];

    /// Position of this value within [`GridDimension::domain`].
    fn ordinal(self) -> usize;
}

/// Identifier of a named grid cell.
pub trait QuadrantId: Copy + Ord + 'static {
    /// Every quadrant the grid can produce.
    fn all() -> &'static [Self];
}

/// Low / medium / high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreeLevel {
    Low,
    Medium,
    High,
}

impl GridDimension for ThreeLevel {
    fn domain() -> &'static [Self] {
        &[ThreeLevel::Low, ThreeLevel::Medium, ThreeLevel::High]
    }

    fn ordinal(self) -> usize {
        match self {
            ThreeLevel::Low => 0,
            ThreeLevel::Medium => 1,
            ThreeLevel::High => 2,
        }
    }
}

impl fmt::Display for ThreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ThreeLevel::Low => "low",
            ThreeLevel::Medium => "medium",
            ThreeLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Low / high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoLevel {
    Low,
    High,
}

impl GridDimension for TwoLevel {
    fn domain() -> &'static [Self] {
        &[TwoLevel::Low, TwoLevel::High]
    }

    fn ordinal(self) -> usize {
        match self {
            TwoLevel::Low => 0,
            TwoLevel::High => 1,
        }
    }
}

impl fmt::Display for TwoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TwoLevel::Low => "low",
            TwoLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Maps one `(first, second)` cell to a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantRule<A, B, Q> {
    pub first: A,
    pub second: B,
    pub quadrant: Q,
}

impl<A, B, Q> QuadrantRule<A, B, Q> {
    pub const fn new(first: A, second: B, quadrant: Q) -> Self {
        Self {
            first,
            second,
            quadrant,
        }
    }
}

/// A verified, exhaustive rule table.
#[derive(Debug, Clone)]
pub struct GridClassifier<A, B, Q> {
    name: &'static str,
    width: usize,
    cells: Vec<Q>,
    _dimensions: PhantomData<(A, B)>,
}

impl<A: GridDimension, B: GridDimension, Q: QuadrantId> GridClassifier<A, B, Q> {
    /// Builds a classifier from a rule table.
    ///
    /// # Errors
    /// - `ConflictingRule` when a cell is mapped to two different quadrants
    /// - `IncompleteRuleTable` when any cell of `A x B` is unmapped
    pub fn new(
        name: &'static str,
        rules: &[QuadrantRule<A, B, Q>],
    ) -> Result<Self, ValidationError> {
        let width = B::domain().len();
        let mut cells: Vec<Option<Q>> = vec![None; A::domain().len() * width];

        for rule in rules {
            let index = rule.first.ordinal() * width + rule.second.ordinal();
            let current = cells[index];
            match current {
                Some(existing) if existing != rule.quadrant => {
                    return Err(ValidationError::ConflictingRule {
                        grid: name.to_string(),
                        first: rule.first.to_string(),
                        second: rule.second.to_string(),
                    });
                }
                _ => cells[index] = Some(rule.quadrant),
            }
        }

        let mut resolved = Vec::with_capacity(cells.len());
        for (index, cell) in cells.into_iter().enumerate() {
            match cell {
                Some(quadrant) => resolved.push(quadrant),
                None => {
                    return Err(ValidationError::IncompleteRuleTable {
                        grid: name.to_string(),
                        first: A::domain()[index / width].to_string(),
                        second: B::domain()[index % width].to_string(),
                    });
                }
            }
        }

        Ok(Self {
            name,
            width,
            cells: resolved,
            _dimensions: PhantomData,
        })
    }

    /// Name given at construction.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up the quadrant for a cell.
    pub fn classify(&self, first: A, second: B) -> Q {
        self.cells[first.ordinal() * self.width + second.ordinal()]
    }

    /// Groups items by quadrant. Every quadrant in [`QuadrantId::all`] is
    /// present, with an empty list when nothing falls into it.
    pub fn group_by_quadrant<'a, T>(
        &self,
        items: &'a [T],
        dimensions: impl Fn(&T) -> (A, B),
    ) -> BTreeMap<Q, Vec<&'a T>> {
        let mut groups: BTreeMap<Q, Vec<&'a T>> =
            Q::all().iter().map(|q| (*q, Vec::new())).collect();

        for item in items {
            let (first, second) = dimensions(item);
            groups
                .entry(self.classify(first, second))
                .or_default()
                .push(item);
        }

        groups
    }
}

/// Cells of the effort x impact initiative grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InitiativeQuadrant {
    QuickWins,
    MajorProjects,
    Strategic,
    FillIns,
    Standard,
    HardSlog,
    Optional,
    Questionable,
    Avoid,
}

impl InitiativeQuadrant {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            InitiativeQuadrant::QuickWins => "Quick Wins",
            InitiativeQuadrant::MajorProjects => "Major Projects",
            InitiativeQuadrant::Strategic => "Strategic",
            InitiativeQuadrant::FillIns => "Fill-ins",
            InitiativeQuadrant::Standard => "Standard",
            InitiativeQuadrant::HardSlog => "Hard Slog",
            InitiativeQuadrant::Optional => "Optional",
            InitiativeQuadrant::Questionable => "Questionable",
            InitiativeQuadrant::Avoid => "Avoid",
        }
    }
}

impl QuadrantId for InitiativeQuadrant {
    fn all() -> &'static [Self] {
        &[
            InitiativeQuadrant::QuickWins,
            InitiativeQuadrant::MajorProjects,
            InitiativeQuadrant::Strategic,
            InitiativeQuadrant::FillIns,
            InitiativeQuadrant::Standard,
            InitiativeQuadrant::HardSlog,
            InitiativeQuadrant::Optional,
            InitiativeQuadrant::Questionable,
            InitiativeQuadrant::Avoid,
        ]
    }
}

/// Cells of the impact x probability risk grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskQuadrant {
    Watch,
    Mitigate,
    Contingency,
    Avoid,
}

impl RiskQuadrant {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskQuadrant::Watch => "Watch",
            RiskQuadrant::Mitigate => "Mitigate",
            RiskQuadrant::Contingency => "Contingency",
            RiskQuadrant::Avoid => "Avoid",
        }
    }
}

impl QuadrantId for RiskQuadrant {
    fn all() -> &'static [Self] {
        &[
            RiskQuadrant::Watch,
            RiskQuadrant::Mitigate,
            RiskQuadrant::Contingency,
            RiskQuadrant::Avoid,
        ]
    }
}

/// Effort (first) x impact (second) classifier for initiatives.
pub type InitiativeGrid = GridClassifier<ThreeLevel, ThreeLevel, InitiativeQuadrant>;

/// Impact (first) x probability (second) classifier for risks.
pub type RiskGrid = GridClassifier<TwoLevel, TwoLevel, RiskQuadrant>;

/// Rule table for the initiative grid, keyed `(effort, impact)`.
pub const INITIATIVE_RULES: [QuadrantRule<ThreeLevel, ThreeLevel, InitiativeQuadrant>; 9] = {
    use InitiativeQuadrant::*;
    use ThreeLevel::{High, Low, Medium};
    [
        QuadrantRule::new(Low, High, QuickWins),
        QuadrantRule::new(Medium, High, Strategic),
        QuadrantRule::new(High, High, MajorProjects),
        QuadrantRule::new(Low, Medium, FillIns),
        QuadrantRule::new(Medium, Medium, Standard),
        QuadrantRule::new(High, Medium, HardSlog),
        QuadrantRule::new(Low, Low, Optional),
        QuadrantRule::new(Medium, Low, Questionable),
        QuadrantRule::new(High, Low, Avoid),
    ]
};

/// Rule table for the risk grid, keyed `(impact, probability)`.
pub const RISK_RULES: [QuadrantRule<TwoLevel, TwoLevel, RiskQuadrant>; 4] = [
    QuadrantRule::new(TwoLevel::Low, TwoLevel::Low, RiskQuadrant::Watch),
    QuadrantRule::new(TwoLevel::Low, TwoLevel::High, RiskQuadrant::Mitigate),
    QuadrantRule::new(TwoLevel::High, TwoLevel::Low, RiskQuadrant::Contingency),
    QuadrantRule::new(TwoLevel::High, TwoLevel::High, RiskQuadrant::Avoid),
];

impl InitiativeGrid {
    /// The standard 3x3 effort/impact grid.
    pub fn standard() -> Result<Self, ValidationError> {
        Self::new("initiative", &INITIATIVE_RULES)
    }
}

impl RiskGrid {
    /// The standard 2x2 impact/probability grid.
    pub fn standard() -> Result<Self, ValidationError> {
        Self::new("risk", &RISK_RULES)
    }
}
