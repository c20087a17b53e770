//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Digital Readiness domain.

mod axis;
mod errors;
mod ids;
mod timestamp;

pub use axis::{AxisId, BusinessArea, MAX_SUPPORTED_LEVEL};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SnapshotId;
pub use timestamp::Timestamp;
