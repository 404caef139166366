//! Drag-to-adjust state machine for numeric parameter fields.
//!
//! A horizontal drag nudges the field the gesture started on: pointer
//! delta is remapped from `[-10, 10]` pixels into `[-0.1, 0.1]` value
//! units, unclamped, so fast drags keep accumulating past the nominal
//! range. The machine only computes values; writing them back into the
//! parameter set and triggering a repaint is the host's job.

use crate::remap::remap;
use crate::FieldId;

/// Pixel range a drag delta is measured against.
pub const DRAG_INPUT_RANGE: (f64, f64) = (-10.0, 10.0);
/// Value range a full drag step maps to.
pub const DRAG_OUTPUT_RANGE: (f64, f64) = (-0.1, 0.1);
/// Decimal digits kept on drag increments.
pub const DRAG_PRECISION: u32 = 3;

/// New value for a dragged field, produced on pointer motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// The field the gesture is bound to.
    pub target: FieldId,
    /// Value to write into that field.
    pub value: f64,
}

/// Gesture state: either idle or mid-drag with the press anchor recorded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer x at press time.
        start_x: f64,
        /// Field value at press time.
        start_value: f64,
        /// Field the gesture adjusts.
        target: FieldId,
    },
}

impl DragState {
    /// Begin a drag on `target`, anchoring at the current pointer x and
    /// field value. A press during an active drag rebinds the gesture.
    pub fn press(&mut self, target: FieldId, x: f64, start_value: f64) {
        *self = DragState::Dragging {
            start_x: x,
            start_value,
            target,
        };
    }

    /// Pointer moved to `x`. Returns the update to apply when a drag is
    /// active, `None` while idle.
    pub fn motion(&self, x: f64) -> Option<DragUpdate> {
        match *self {
            DragState::Idle => None,
            DragState::Dragging {
                start_x,
                start_value,
                target,
            } => {
                let step = match remap(
                    x - start_x,
                    DRAG_INPUT_RANGE.0,
                    DRAG_INPUT_RANGE.1,
                    DRAG_OUTPUT_RANGE.0,
                    DRAG_OUTPUT_RANGE.1,
                    false,
                    DRAG_PRECISION,
                ) {
                    Ok(step) => step,
                    Err(_) => {
                        // The input range is a fixed non-empty interval
                        debug_assert!(false, "drag input range is empty");
                        return None;
                    }
                };
                Some(DragUpdate {
                    target,
                    value: start_value + step,
                })
            }
        }
    }

    /// End the drag.
    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
