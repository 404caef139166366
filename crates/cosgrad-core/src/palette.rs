//! Cosine channel function and color-space projection.
//!
//! Each channel intensity is `A + B*cos(2*pi*(C*x + D))` for that
//! channel's parameters. Projection remaps the raw intensities from
//! `[0, 1]` into the component ranges of the target color space, clamped,
//! and formats a CSS color string the host can hand straight to a canvas
//! gradient stop or stroke style.

use crate::remap::{format_decimal, remap};
use crate::{CurveParams, PaletteError, ParamSet};
use std::f64::consts::TAU;

/// Decimal digits kept on projected color components.
pub const CHANNEL_PRECISION: u32 = 3;

/// Target color space for projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ColorSpace {
    #[default]
    Rgb,
    Hsl,
}

/// Evaluate the cosine channel function at `x`.
///
/// Pure and deterministic; NaN inputs propagate. Callers that need the
/// finiteness guarantee validate the parameter set first.
#[inline]
pub fn channel_value(x: f64, params: &CurveParams) -> f64 {
    params.offset + params.amplitude * (TAU * (params.frequency * x + params.phase)).cos()
}

/// Evaluate one channel of a validated parameter set.
///
/// # Errors
/// Returns [`PaletteError::ChannelIndex`] for an out-of-range channel and
/// [`PaletteError::NonFinite`] when the set fails validation.
pub fn evaluate(set: &ParamSet, channel: usize, x: f64) -> Result<f64, PaletteError> {
    set.validate()?;
    let params = set
        .channels
        .get(channel)
        .ok_or(PaletteError::ChannelIndex(channel))?;
    Ok(channel_value(x, params))
}

/// Project the parameter set at `x` into an `rgb(R, G, B)` string.
///
/// Channel 0/1/2 maps to red/green/blue; each raw intensity is remapped
/// from `[0, 1]` into `[0, 255]` with clamping.
pub fn rgb_string(x: f64, set: &ParamSet) -> Result<String, PaletteError> {
    set.validate()?;
    let red = project_component(x, &set.channels[0], 255.0)?;
    let green = project_component(x, &set.channels[1], 255.0)?;
    let blue = project_component(x, &set.channels[2], 255.0)?;
    Ok(format!("rgb({red}, {green}, {blue})"))
}

/// Project the parameter set at `x` into an `hsl(Hdeg, S%, L%)` string.
///
/// Channel 0 maps to hue in `[0, 360]`, channels 1 and 2 to saturation
/// and lightness in `[0, 100]`, all clamped.
pub fn hsl_string(x: f64, set: &ParamSet) -> Result<String, PaletteError> {
    set.validate()?;
    let hue = project_component(x, &set.channels[0], 360.0)?;
    let saturation = project_component(x, &set.channels[1], 100.0)?;
    let lightness = project_component(x, &set.channels[2], 100.0)?;
    Ok(format!("hsl({hue}deg, {saturation}%, {lightness}%)"))
}

/// Project at `x` into the given color space.
pub fn project(space: ColorSpace, x: f64, set: &ParamSet) -> Result<String, PaletteError> {
    match space {
        ColorSpace::Rgb => rgb_string(x, set),
        ColorSpace::Hsl => hsl_string(x, set),
    }
}

/// Remap one raw channel intensity into `[0, out_max]` and format it.
fn project_component(x: f64, params: &CurveParams, out_max: f64) -> Result<String, PaletteError> {
    let raw = channel_value(x, params);
    let component = remap(raw, 0.0, 1.0, 0.0, out_max, true, CHANNEL_PRECISION)?;
    Ok(format_decimal(component, CHANNEL_PRECISION))
}
