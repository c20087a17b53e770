//! Initiatives and risks plotted on the quadrant views.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{ThreeLevel, TwoLevel};
use crate::domain::foundation::{AxisId, ValidationError};

/// A proposed transformation initiative.
///
/// The quadrant is never stored; it is recomputed from `effort` and `impact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Initiative {
    pub id: String,
    pub title: String,
    pub effort: ThreeLevel,
    pub impact: ThreeLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_id: Option<AxisId>,
}

impl Initiative {
    /// Creates an initiative, requiring a non-empty id.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        effort: ThreeLevel,
        impact: ThreeLevel,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("initiative.id"));
        }
        Ok(Self {
            id,
            title: title.into(),
            effort,
            impact,
            axis_id: None,
        })
    }

    /// Links the initiative to the axis it improves.
    pub fn for_axis(mut self, axis_id: AxisId) -> Self {
        self.axis_id = Some(axis_id);
        self
    }

    /// The `(effort, impact)` cell used by the initiative grid.
    pub fn grid_cell(&self) -> (ThreeLevel, ThreeLevel) {
        (self.effort, self.impact)
    }
}

/// A transformation risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Risk {
    pub id: String,
    pub title: String,
    pub impact: TwoLevel,
    pub probability: TwoLevel,
}

impl Risk {
    /// Creates a risk, requiring a non-empty id.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        impact: TwoLevel,
        probability: TwoLevel,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("risk.id"));
        }
        Ok(Self {
            id,
            title: title.into(),
            impact,
            probability,
        })
    }

    /// The `(impact, probability)` cell used by the risk grid.
    pub fn grid_cell(&self) -> (TwoLevel, TwoLevel) {
        (self.impact, self.probability)
    }
}
