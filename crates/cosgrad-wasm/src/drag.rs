//! Drag gesture bindings.
//!
//! One controller per page wires the three pointer events to the core
//! state machine: `press` on mousedown over an input field, `motion` on
//! mousemove (which writes the new value into the parameter set and
//! returns it for the text field), `release` on mouseup. After a motion
//! returns a value the host re-samples and repaints.

use crate::palette::{field_from_u8, JsParamSet};
use cosgrad_core::drag::DragState;
use cosgrad_core::{parse_decimal, FieldId};
use wasm_bindgen::prelude::*;

/// JavaScript-accessible drag controller.
#[wasm_bindgen]
pub struct JsDragController {
    state: DragState,
}

#[wasm_bindgen]
impl JsDragController {
    /// Create an idle controller.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsDragController {
        JsDragController {
            state: DragState::Idle,
        }
    }

    /// Begin a drag on the field at (channel, field index), anchored at
    /// pointer x. `field_text` is the input element's current text; empty
    /// text anchors at 0.
    ///
    /// # Errors
    /// Returns an error for an unknown field index or text that does not
    /// parse as a finite number.
    pub fn press(
        &mut self,
        channel: usize,
        field: u8,
        x: f64,
        field_text: &str,
    ) -> Result<(), JsValue> {
        let field = field_from_u8(field)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field index: {}", field)))?;
        let start_value =
            parse_decimal(field_text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.state.press(FieldId::new(channel, field), x, start_value);
        Ok(())
    }

    /// Pointer moved to `x`. When a drag is active, writes the updated
    /// value into `set` and returns it for the text field display;
    /// returns `undefined` while idle.
    pub fn motion(&mut self, x: f64, set: &mut JsParamSet) -> Result<Option<f64>, JsValue> {
        match self.state.motion(x) {
            None => Ok(None),
            Some(update) => {
                set.inner_mut()
                    .set_value(update.target, update.value)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                Ok(Some(update.value))
            }
        }
    }

    /// End the drag.
    pub fn release(&mut self) {
        self.state.release();
    }

    /// Whether a drag is currently active.
    #[wasm_bindgen(getter)]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}

impl Default for JsDragController {
    fn default() -> Self {
        Self::new()
    }
}
