//! Assessment records - the raw data fed to the engines.
//!
//! - `AxisScore` / `AreaScore` - actual/target level pairs
//! - `AssessmentSnapshot` - immutable set of scores saved together
//! - `Initiative` / `Risk` - items plotted on the quadrant views

mod portfolio;
mod scores;
mod snapshot;

pub use portfolio::{Initiative, Risk};
pub use scores::{AreaScore, AxisScore, Scored, UNASSESSED_LEVEL};
pub use snapshot::AssessmentSnapshot;
