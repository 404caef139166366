//! Per-column render queries.
//!
//! The host iterates pixel columns and draws; these bindings hand it the
//! per-column data in one call per canvas: gradient color stops for the
//! filled strip, normalized y values for a channel's line graph, and the
//! stroke color each column's line segment should use.

use crate::palette::JsParamSet;
use cosgrad_core::sample::{
    channel_polyline, gradient_stops as core_stops, hsl_graph_strokes, rgb_graph_strokes,
    stroke_colors,
};
use cosgrad_core::ColorSpace;
use wasm_bindgen::prelude::*;

/// Convert a u8 color space value to the core ColorSpace enum.
///
/// Values:
/// - 0 = RGB
/// - 1 = HSL
///
/// Any other value defaults to RGB.
pub(crate) fn space_from_u8(value: u8) -> ColorSpace {
    match value {
        1 => ColorSpace::Hsl,
        _ => ColorSpace::Rgb, // Default
    }
}

/// Build one gradient stop per pixel column.
///
/// Returns an array of `{position, color}` objects; `position` is in
/// `[0, 1)` and `color` is a CSS color string for `addColorStop`.
///
/// # Arguments
/// * `set` - Parameter set to sample
/// * `space` - 0 = RGB, 1 = HSL
/// * `width` - Canvas width in pixels (must be nonzero)
/// * `domain` - Upper bound of the sampled x range
#[wasm_bindgen]
pub fn gradient_stops(
    set: &JsParamSet,
    space: u8,
    width: u32,
    domain: f64,
) -> Result<JsValue, JsValue> {
    let stops = core_stops(set.inner(), space_from_u8(space), width, domain)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&stops)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Normalized y values for one channel's line graph, one per column.
///
/// Values are in canvas orientation (0 = top); multiply by canvas height
/// before drawing. Values may leave `[0, 1]` when the curve overshoots.
#[wasm_bindgen]
pub fn graph_polyline(
    set: &JsParamSet,
    channel: usize,
    width: u32,
    domain: f64,
) -> Result<Vec<f64>, JsValue> {
    channel_polyline(set.inner(), channel, width, domain)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Per-column stroke colors for one channel's line graph.
///
/// Uses the stock stroke policy for the given color space: fixed
/// red/green/blue lines for the RGB graph, value-swept strokes for the
/// HSL graph.
#[wasm_bindgen]
pub fn graph_strokes(
    set: &JsParamSet,
    channel: usize,
    space: u8,
    width: u32,
    domain: f64,
) -> Result<Vec<String>, JsValue> {
    let strokes = match space_from_u8(space) {
        ColorSpace::Rgb => rgb_graph_strokes(),
        ColorSpace::Hsl => hsl_graph_strokes(),
    };
    let stroke = strokes
        .get(channel)
        .copied()
        .ok_or_else(|| JsValue::from_str(&format!("channel index {} out of range", channel)))?;
    stroke_colors(set.inner(), channel, stroke, width, domain)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(serde::Deserialize)]
    struct StopJs {
        position: f64,
        color: String,
    }

    #[wasm_bindgen_test]
    fn test_gradient_stops_shape() {
        let set = JsParamSet::new();
        let js = gradient_stops(&set, 0, 32, 1.0).unwrap();
        let stops: Vec<StopJs> = serde_wasm_bindgen::from_value(js).unwrap();

        assert_eq!(stops.len(), 32);
        assert_eq!(stops[0].position, 0.0);
        assert!(stops.iter().all(|s| s.color.starts_with("rgb(")));
    }

    #[wasm_bindgen_test]
    fn test_gradient_stops_hsl() {
        let set = JsParamSet::new();
        let js = gradient_stops(&set, 1, 32, 1.0).unwrap();
        let stops: Vec<StopJs> = serde_wasm_bindgen::from_value(js).unwrap();
        assert!(stops.iter().all(|s| s.color.starts_with("hsl(")));
    }

    #[wasm_bindgen_test]
    fn test_gradient_stops_zero_width_errors() {
        let set = JsParamSet::new();
        assert!(gradient_stops(&set, 0, 0, 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_graph_strokes_bad_channel_errors() {
        let set = JsParamSet::new();
        assert!(graph_strokes(&set, 5, 0, 8, 1.0).is_err());
    }
}
