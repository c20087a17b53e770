//! Immutable snapshot of a saved assessment.

use serde::{Deserialize, Serialize};

use super::{AreaScore, AxisScore};
use crate::domain::foundation::{AxisId, SnapshotId, Timestamp, ValidationError};

/// Axis and area scores captured when an assessment is saved.
///
/// Snapshots are never edited; saving again produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub id: SnapshotId,
    pub taken_at: Timestamp,
    pub axes: Vec<AxisScore>,
    pub areas: Vec<AreaScore>,
}

impl AssessmentSnapshot {
    /// Captures a new snapshot stamped with the current time.
    pub fn capture(axes: Vec<AxisScore>, areas: Vec<AreaScore>) -> Self {
        Self {
            id: SnapshotId::new(),
            taken_at: Timestamp::now(),
            axes,
            areas,
        }
    }

    /// Returns the score recorded for an axis, if any.
    pub fn axis(&self, axis_id: AxisId) -> Option<&AxisScore> {
        self.axes.iter().find(|a| a.axis_id == axis_id)
    }

    /// Returns the area scores belonging to one axis, in recorded order.
    pub fn areas_for_axis(&self, axis_id: AxisId) -> Vec<AreaScore> {
        self.areas
            .iter()
            .filter(|a| a.axis_id == axis_id)
            .copied()
            .collect()
    }

    /// Validates every record, stopping at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for axis in &self.axes {
            axis.validate()?;
        }
        for area in &self.areas {
            area.validate()?;
        }
        Ok(())
    }
}
