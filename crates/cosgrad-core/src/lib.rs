//! Cosgrad Core - Cosine palette math
//!
//! This crate provides the computational core for the cosgrad gradient
//! visualizer: range interpolation, the cosine channel function, RGB/HSL
//! color projection, sampling helpers for graph/gradient rendering, and
//! the drag-to-adjust state machine.
//!
//! All operations are pure given their inputs. `ParamSet` is `Copy`, so
//! render entry points work on a value snapshot of the parameters and a
//! host that mutates parameters on another thread cannot tear a frame.

pub mod drag;
pub mod palette;
pub mod remap;
pub mod sample;

pub use drag::{DragState, DragUpdate};
pub use palette::{channel_value, evaluate, hsl_string, project, rgb_string, ColorSpace};
pub use remap::{format_decimal, parse_decimal, remap};

/// Number of color channels driven by the parameter set.
pub const CHANNEL_COUNT: usize = 3;

/// Error types for palette computation.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Interpolation over an empty input range (division by zero).
    #[error("empty interpolation range: {min} == {max}")]
    EmptyRange { min: f64, max: f64 },

    /// A parameter set with the wrong number of channels.
    #[error("parameter set must have exactly {CHANNEL_COUNT} channels, got {0}")]
    ChannelCount(usize),

    /// A parameter field that is NaN or infinite.
    #[error("non-finite {field} in channel {channel}")]
    NonFinite { channel: usize, field: &'static str },

    /// A channel index outside 0..3.
    #[error("channel index {0} out of range")]
    ChannelIndex(usize),

    /// Text that does not parse as a finite number.
    #[error("invalid numeric input: {0:?}")]
    InvalidNumber(String),
}

/// Parameters of the cosine channel function `A + B*cos(2*pi*(C*x + D))`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveParams {
    /// Vertical offset (A).
    pub offset: f64,
    /// Oscillation amplitude (B).
    pub amplitude: f64,
    /// Oscillation frequency (C).
    pub frequency: f64,
    /// Phase shift (D).
    pub phase: f64,
}

impl CurveParams {
    pub fn new(offset: f64, amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            offset,
            amplitude,
            frequency,
            phase,
        }
    }

    /// Read one field by selector.
    pub fn field(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Offset => self.offset,
            ParamField::Amplitude => self.amplitude,
            ParamField::Frequency => self.frequency,
            ParamField::Phase => self.phase,
        }
    }

    /// Write one field by selector.
    pub fn set_field(&mut self, field: ParamField, value: f64) {
        match field {
            ParamField::Offset => self.offset = value,
            ParamField::Amplitude => self.amplitude = value,
            ParamField::Frequency => self.frequency = value,
            ParamField::Phase => self.phase = value,
        }
    }

    /// Returns the name of the first non-finite field, if any.
    fn non_finite_field(&self) -> Option<&'static str> {
        if !self.offset.is_finite() {
            Some("offset")
        } else if !self.amplitude.is_finite() {
            Some("amplitude")
        } else if !self.frequency.is_finite() {
            Some("frequency")
        } else if !self.phase.is_finite() {
            Some("phase")
        } else {
            None
        }
    }
}

/// Selector for one of the four curve parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ParamField {
    Offset,
    Amplitude,
    Frequency,
    Phase,
}

impl ParamField {
    pub fn name(self) -> &'static str {
        match self {
            ParamField::Offset => "offset",
            ParamField::Amplitude => "amplitude",
            ParamField::Frequency => "frequency",
            ParamField::Phase => "phase",
        }
    }
}

/// Address of one numeric field within a parameter set.
///
/// Used by the drag-adjustment state machine to name the field a drag
/// gesture is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldId {
    /// Channel index (0..3).
    pub channel: usize,
    /// Which of the four fields in that channel.
    pub field: ParamField,
}

impl FieldId {
    pub fn new(channel: usize, field: ParamField) -> Self {
        Self { channel, field }
    }
}

/// Ordered triple of curve parameters, one per color channel.
///
/// Index 0/1/2 drives R/G/B in RGB projection and H/S/L in HSL projection.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParamSet {
    /// Per-channel curve parameters.
    pub channels: [CurveParams; CHANNEL_COUNT],
}

impl Default for ParamSet {
    fn default() -> Self {
        Self {
            channels: [
                CurveParams::new(0.77, 0.22, 2.0, 0.03),
                CurveParams::new(0.5, 0.4, 1.0, 0.24),
                CurveParams::new(0.4, 0.22, 0.93, 0.25),
            ],
        }
    }
}

impl ParamSet {
    pub fn new(channels: [CurveParams; CHANNEL_COUNT]) -> Self {
        Self { channels }
    }

    /// Build a parameter set from a slice, rejecting any length other
    /// than exactly [`CHANNEL_COUNT`].
    pub fn from_slice(channels: &[CurveParams]) -> Result<Self, PaletteError> {
        let channels: [CurveParams; CHANNEL_COUNT] = channels
            .try_into()
            .map_err(|_| PaletteError::ChannelCount(channels.len()))?;
        Ok(Self { channels })
    }

    /// Check that every field of every channel is finite.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (channel, params) in self.channels.iter().enumerate() {
            if let Some(field) = params.non_finite_field() {
                return Err(PaletteError::NonFinite { channel, field });
            }
        }
        Ok(())
    }

    /// Read the field addressed by `id`.
    pub fn value(&self, id: FieldId) -> Result<f64, PaletteError> {
        let params = self
            .channels
            .get(id.channel)
            .ok_or(PaletteError::ChannelIndex(id.channel))?;
        Ok(params.field(id.field))
    }

    /// Write the field addressed by `id`. Non-finite values are rejected
    /// so a bad write cannot poison later renders.
    pub fn set_value(&mut self, id: FieldId, value: f64) -> Result<(), PaletteError> {
        if !value.is_finite() {
            return Err(PaletteError::NonFinite {
                channel: id.channel,
                field: id.field.name(),
            });
        }
        let params = self
            .channels
            .get_mut(id.channel)
            .ok_or(PaletteError::ChannelIndex(id.channel))?;
        params.set_field(id.field, value);
        Ok(())
    }
}
