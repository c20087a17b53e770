//! Axis and area score records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AxisId, BusinessArea, ValidationError, MAX_SUPPORTED_LEVEL};

/// Level value meaning "not yet assessed".
pub const UNASSESSED_LEVEL: u8 = 0;

/// Common view over anything scored as an actual/target level pair.
///
/// Every engine works against this trait so axis and area records share one
/// definition of gap and of "assessed".
pub trait Scored {
    /// The current (actual) level.
    fn actual(&self) -> f64;

    /// The target level.
    fn target(&self) -> f64;

    /// Target minus actual. Negative when the target is already exceeded.
    fn gap(&self) -> f64 {
        self.target() - self.actual()
    }

    /// Returns false for records whose actual level is still 0.
    fn is_assessed(&self) -> bool {
        self.actual() != f64::from(UNASSESSED_LEVEL)
    }
}

/// Assessment of a single transformation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    pub axis_id: AxisId,
    pub actual: u8,
    pub target: u8,
    pub max_level: u8,
}

impl AxisScore {
    /// Creates an axis score, checking both levels against `max_level`.
    pub fn try_new(
        axis_id: AxisId,
        actual: u8,
        target: u8,
        max_level: u8,
    ) -> Result<Self, ValidationError> {
        if max_level == 0 || max_level > MAX_SUPPORTED_LEVEL {
            return Err(ValidationError::out_of_range(
                "max_level",
                1.0,
                f64::from(MAX_SUPPORTED_LEVEL),
                f64::from(max_level),
            ));
        }
        check_level("actual", actual, max_level)?;
        check_level("target", target, max_level)?;

        Ok(Self {
            axis_id,
            actual,
            target,
            max_level,
        })
    }

    /// Re-checks a record that arrived through deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::try_new(self.axis_id, self.actual, self.target, self.max_level).map(|_| ())
    }
}

impl Scored for AxisScore {
    fn actual(&self) -> f64 {
        f64::from(self.actual)
    }

    fn target(&self) -> f64 {
        f64::from(self.target)
    }
}

/// Assessment of one business area within an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaScore {
    pub area_id: BusinessArea,
    pub axis_id: AxisId,
    pub current_level: u8,
    pub target_level: u8,
}

impl AreaScore {
    /// Creates an area score with levels in `[0, 7]`.
    pub fn try_new(
        area_id: BusinessArea,
        axis_id: AxisId,
        current_level: u8,
        target_level: u8,
    ) -> Result<Self, ValidationError> {
        check_level("current_level", current_level, MAX_SUPPORTED_LEVEL)?;
        check_level("target_level", target_level, MAX_SUPPORTED_LEVEL)?;

        Ok(Self {
            area_id,
            axis_id,
            current_level,
            target_level,
        })
    }

    /// Re-checks a record that arrived through deserialization.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::try_new(
            self.area_id,
            self.axis_id,
            self.current_level,
            self.target_level,
        )
        .map(|_| ())
    }
}

impl Scored for AreaScore {
    fn actual(&self) -> f64 {
        f64::from(self.current_level)
    }

    fn target(&self) -> f64 {
        f64::from(self.target_level)
    }
}

fn check_level(field: &str, value: u8, max: u8) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError::out_of_range(
            field,
            0.0,
            f64::from(max),
            f64::from(value),
        ));
    }
    Ok(())
}
