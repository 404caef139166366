//! Column sampling for gradient strips and channel graphs.
//!
//! The host iterates pixel columns and draws; this module produces the
//! per-column data it needs: gradient color stops, normalized polyline
//! y values for the channel graphs, and per-column stroke colors.

use crate::palette::{channel_value, project, ColorSpace, CHANNEL_PRECISION};
use crate::remap::{format_decimal, remap};
use crate::{PaletteError, ParamSet, CHANNEL_COUNT};

/// One color stop of a horizontal gradient.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Stop position in `[0, 1)` along the gradient axis.
    pub position: f64,
    /// CSS color string for the stop.
    pub color: String,
}

/// Convert a pixel column index into a domain sample.
///
/// # Errors
/// Returns [`PaletteError::EmptyRange`] when `width` is zero.
pub fn domain_sample(column: u32, width: u32, domain: f64) -> Result<f64, PaletteError> {
    remap(
        column as f64,
        0.0,
        width as f64,
        0.0,
        domain,
        false,
        CHANNEL_PRECISION,
    )
}

/// Build one gradient stop per pixel column.
///
/// Stop positions are `column / width`; colors come from projecting the
/// column's domain sample into `space`.
pub fn gradient_stops(
    set: &ParamSet,
    space: ColorSpace,
    width: u32,
    domain: f64,
) -> Result<Vec<GradientStop>, PaletteError> {
    set.validate()?;
    if width == 0 {
        return Err(PaletteError::EmptyRange { min: 0.0, max: 0.0 });
    }
    let mut stops = Vec::with_capacity(width as usize);
    for column in 0..width {
        let sample = domain_sample(column, width, domain)?;
        stops.push(GradientStop {
            position: column as f64 / width as f64,
            color: project(space, sample, set)?,
        });
    }
    Ok(stops)
}

/// Per-column normalized y values for one channel's line graph.
///
/// Values are in canvas orientation, `1 - channel_value(sample)`, so the
/// host multiplies by canvas height and draws. Intentionally unclamped:
/// a curve that leaves `[0, 1]` draws off-canvas, same as the gradient
/// clamps it to the channel boundary.
pub fn channel_polyline(
    set: &ParamSet,
    channel: usize,
    width: u32,
    domain: f64,
) -> Result<Vec<f64>, PaletteError> {
    set.validate()?;
    let params = set
        .channels
        .get(channel)
        .ok_or(PaletteError::ChannelIndex(channel))?;
    if width == 0 {
        return Err(PaletteError::EmptyRange { min: 0.0, max: 0.0 });
    }
    let mut points = Vec::with_capacity(width as usize);
    for column in 0..width {
        let sample = domain_sample(column, width, domain)?;
        points.push(1.0 - channel_value(sample, params));
    }
    Ok(points)
}

/// Display-color policy for one graph line.
///
/// Which color a channel's line is drawn in is presentation, not palette
/// math, so the host picks (or overrides) a stroke per channel. The
/// sweeping variants tie the stroke to the sampled value so the line
/// itself previews the component it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChannelStroke {
    /// Constant stroke color.
    Fixed(u8, u8, u8),
    /// Hue sweeps with the value at full saturation, 50% lightness.
    HueSweep,
    /// Saturation sweeps with the value at hue 0, 50% lightness.
    SaturationSweep,
    /// Lightness sweeps with the value at hue 180, full saturation.
    LightnessSweep,
}

impl ChannelStroke {
    /// Stroke color for one sampled channel value.
    pub fn color_at(&self, value: f64) -> String {
        match *self {
            ChannelStroke::Fixed(r, g, b) => format!("rgb({r}, {g}, {b})"),
            ChannelStroke::HueSweep => format!(
                "hsl({}deg, 100%, 50%)",
                format_decimal(360.0 * value, CHANNEL_PRECISION)
            ),
            ChannelStroke::SaturationSweep => format!(
                "hsl(0deg, {}%, 50%)",
                format_decimal(100.0 * value, CHANNEL_PRECISION)
            ),
            ChannelStroke::LightnessSweep => format!(
                "hsl(180deg, 100%, {}%)",
                format_decimal(100.0 * value, CHANNEL_PRECISION)
            ),
        }
    }
}

/// Default strokes for the RGB graph: pure red, green, blue lines.
pub fn rgb_graph_strokes() -> [ChannelStroke; CHANNEL_COUNT] {
    [
        ChannelStroke::Fixed(255, 20, 20),
        ChannelStroke::Fixed(20, 255, 20),
        ChannelStroke::Fixed(20, 20, 255),
    ]
}

/// Default strokes for the HSL graph: each line sweeps the component it
/// controls.
pub fn hsl_graph_strokes() -> [ChannelStroke; CHANNEL_COUNT] {
    [
        ChannelStroke::HueSweep,
        ChannelStroke::SaturationSweep,
        ChannelStroke::LightnessSweep,
    ]
}

/// Per-column stroke colors for one channel's line graph.
pub fn stroke_colors(
    set: &ParamSet,
    channel: usize,
    stroke: ChannelStroke,
    width: u32,
    domain: f64,
) -> Result<Vec<String>, PaletteError> {
    set.validate()?;
    let params = set
        .channels
        .get(channel)
        .ok_or(PaletteError::ChannelIndex(channel))?;
    if width == 0 {
        return Err(PaletteError::EmptyRange { min: 0.0, max: 0.0 });
    }
    let mut colors = Vec::with_capacity(width as usize);
    for column in 0..width {
        let sample = domain_sample(column, width, domain)?;
        colors.push(stroke.color_at(channel_value(sample, params)));
    }
    Ok(colors)
}
