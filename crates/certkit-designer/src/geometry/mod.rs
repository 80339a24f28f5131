//! Geometry engine: alignment, distribution, drag snapping and nudging.
//!
//! The functions here are pure. They take element geometry and return the new
//! geometry for each element that has to move; the session turns the result
//! into one committed template change.

mod align;
mod distribute;
mod nudge;
mod snapping;

pub use align::{align, Alignment, LockPolicy};
pub use distribute::{distribute, Axis};
pub use nudge::{center_on_canvas, nudge, CenterAxis, NudgeDirection};
pub use snapping::{
    snap_position, GuideOrientation, GuideSource, SnapGuide, SnapOptions, SnapResult,
};

use crate::model::{ElementId, Geometry};

/// New geometry for one element.
pub type Placement = (ElementId, Geometry);

/// Rounds a canvas coordinate computed in floating point back to whole pixels.
pub(crate) fn to_px(value: f64) -> i32 {
    value.round() as i32
}
