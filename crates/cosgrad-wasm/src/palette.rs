//! Parameter set bindings.
//!
//! `JsParamSet` is the process-lifetime state container the UI mutates:
//! drag gestures and direct field edits write into it, render queries
//! read a snapshot of it. Fields are addressed by (channel, field) index
//! pairs so the JavaScript side can wire one handler to all twelve
//! inputs.

use cosgrad_core::{hsl_string, rgb_string, CurveParams, FieldId, ParamField, ParamSet};
use wasm_bindgen::prelude::*;

/// JavaScript-accessible parameter set.
///
/// Holds the three per-channel curve parameter tuples. Created once at
/// startup (with the stock palette) or imported from a JS object, then
/// mutated in place as the user drags input fields.
#[wasm_bindgen]
pub struct JsParamSet {
    inner: ParamSet,
}

/// Helper struct for (de)serializing JS channel objects via serde.
#[derive(serde::Serialize, serde::Deserialize)]
struct ChannelJs {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

#[wasm_bindgen]
impl JsParamSet {
    /// Create a parameter set with the stock palette.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsParamSet {
        JsParamSet {
            inner: ParamSet::default(),
        }
    }

    /// Import a parameter set from an array of `{a, b, c, d}` objects.
    ///
    /// # Errors
    /// Returns an error if the array does not deserialize, does not hold
    /// exactly 3 channels, or contains non-finite values.
    pub fn from_js(value: JsValue) -> Result<JsParamSet, JsValue> {
        let channels: Vec<ChannelJs> = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameter set: {}", e)))?;

        let channels: Vec<CurveParams> = channels
            .into_iter()
            .map(|ch| CurveParams::new(ch.a, ch.b, ch.c, ch.d))
            .collect();

        let inner = ParamSet::from_slice(&channels)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(JsParamSet { inner })
    }

    /// Export the parameter set as an array of `{a, b, c, d}` objects.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        let channels: Vec<ChannelJs> = self
            .inner
            .channels
            .iter()
            .map(|p| ChannelJs {
                a: p.offset,
                b: p.amplitude,
                c: p.frequency,
                d: p.phase,
            })
            .collect();
        serde_wasm_bindgen::to_value(&channels)
            .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
    }

    /// Read one field. `field` is 0=offset, 1=amplitude, 2=frequency,
    /// 3=phase.
    pub fn get(&self, channel: usize, field: u8) -> Result<f64, JsValue> {
        let field = field_from_u8(field)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field index: {}", field)))?;
        self.inner
            .value(FieldId::new(channel, field))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Write one field. Same field indices as `get`; non-finite values
    /// are rejected.
    pub fn set(&mut self, channel: usize, field: u8, value: f64) -> Result<(), JsValue> {
        let field = field_from_u8(field)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field index: {}", field)))?;
        self.inner
            .set_value(FieldId::new(channel, field), value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Project the palette at `x` into an `rgb(R, G, B)` string.
    pub fn rgb_at(&self, x: f64) -> Result<String, JsValue> {
        rgb_string(x, &self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Project the palette at `x` into an `hsl(Hdeg, S%, L%)` string.
    pub fn hsl_at(&self, x: f64) -> Result<String, JsValue> {
        hsl_string(x, &self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl Default for JsParamSet {
    fn default() -> Self {
        Self::new()
    }
}

impl JsParamSet {
    /// Borrow the core parameter set. Render queries take this snapshot.
    pub(crate) fn inner(&self) -> &ParamSet {
        &self.inner
    }

    /// Mutable access for the drag controller.
    pub(crate) fn inner_mut(&mut self) -> &mut ParamSet {
        &mut self.inner
    }
}

/// Convert a u8 field index to the core ParamField selector.
///
/// Values:
/// - 0 = offset (A)
/// - 1 = amplitude (B)
/// - 2 = frequency (C)
/// - 3 = phase (D)
pub(crate) fn field_from_u8(value: u8) -> Option<ParamField> {
    match value {
        0 => Some(ParamField::Offset),
        1 => Some(ParamField::Amplitude),
        2 => Some(ParamField::Frequency),
        3 => Some(ParamField::Phase),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_stock_palette() {
        let set = JsParamSet::new();
        assert_eq!(set.get(0, 0).unwrap(), 0.77);
        assert_eq!(set.get(1, 1).unwrap(), 0.4);
        assert_eq!(set.get(2, 2).unwrap(), 0.93);
        assert_eq!(set.get(2, 3).unwrap(), 0.25);
    }

    #[test]
    fn test_set_then_get() {
        let mut set = JsParamSet::new();
        set.set(1, 3, 0.5).unwrap();
        assert_eq!(set.get(1, 3).unwrap(), 0.5);
        // Neighboring fields untouched
        assert_eq!(set.get(1, 2).unwrap(), 1.0);
    }

    #[test]
    fn test_rgb_at_matches_core() {
        let set = JsParamSet::new();
        let expected = rgb_string(0.5, set.inner()).unwrap();
        assert_eq!(set.rgb_at(0.5).unwrap(), expected);
    }

    #[test]
    fn test_hsl_at_has_units() {
        let set = JsParamSet::new();
        let color = set.hsl_at(0.0).unwrap();
        assert!(color.starts_with("hsl("));
        assert!(color.contains("deg"));
        assert!(color.ends_with("%)"));
    }

    #[test]
    fn test_field_from_u8() {
        assert_eq!(field_from_u8(0), Some(ParamField::Offset));
        assert_eq!(field_from_u8(1), Some(ParamField::Amplitude));
        assert_eq!(field_from_u8(2), Some(ParamField::Frequency));
        assert_eq!(field_from_u8(3), Some(ParamField::Phase));
        assert_eq!(field_from_u8(4), None);
        assert_eq!(field_from_u8(255), None);
    }
}
