//! Linear range interpolation and the numeric text boundary.
//!
//! `remap` rescales a scalar from one range into another with optional
//! clamping and fixed decimal rounding. It backs every numeric conversion
//! in the render pipeline: pixel column to domain sample, channel value to
//! color component, drag delta to field increment.

use crate::PaletteError;

/// Linearly remap `value` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// With `clamp` the input is clipped into `[in_min, in_max]` first, so the
/// result stays inside the output range. Without it the mapping
/// extrapolates proportionally, which drag adjustment relies on for
/// unbounded deltas.
///
/// The result is rounded to `precision` decimal digits, half away from
/// zero.
///
/// # Errors
/// Returns [`PaletteError::EmptyRange`] when `in_min == in_max`.
pub fn remap(
    value: f64,
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
    clamp: bool,
    precision: u32,
) -> Result<f64, PaletteError> {
    if in_min == in_max {
        return Err(PaletteError::EmptyRange {
            min: in_min,
            max: in_max,
        });
    }

    let t = if clamp {
        value.min(in_max).max(in_min)
    } else {
        value
    };

    let result = (out_min * (in_max - t) + out_max * (t - in_min)) / (in_max - in_min);
    Ok(round_to(result, precision))
}

/// Round to `precision` decimal digits, half away from zero.
#[inline]
fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    (value * scale).round() / scale
}

/// Format a value with at most `precision` decimal digits.
///
/// Trailing zeros (and a dangling decimal point) are trimmed, so a fully
/// saturated channel renders as `255` rather than `255.000` while partial
/// values keep their 3-decimal smoothness.
pub fn format_decimal(value: f64, precision: u32) -> String {
    let text = format!("{:.*}", precision as usize, value);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        &text
    };
    // Negative values rounded away can leave a bare "-0"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a numeric text-field value.
///
/// Empty (or whitespace-only) text parses as `0`, matching the behavior
/// of an input field the user has cleared mid-edit.
///
/// # Errors
/// Returns [`PaletteError::InvalidNumber`] for text that does not parse
/// as a finite number.
pub fn parse_decimal(text: &str) -> Result<f64, PaletteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PaletteError::InvalidNumber(text.to_string()))?;
    if !value.is_finite() {
        return Err(PaletteError::InvalidNumber(text.to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoint() {
        // interpolate(5, 0, 10, 0, 100, false, 1) == 50.0
        let result = remap(5.0, 0.0, 10.0, 0.0, 100.0, false, 1).unwrap();
        assert_eq!(result, 50.0);
    }

    #[test]
    fn test_boundary_exactness() {
        assert_eq!(remap(0.0, 0.0, 10.0, -5.0, 5.0, false, 3).unwrap(), -5.0);
        assert_eq!(remap(10.0, 0.0, 10.0, -5.0, 5.0, false, 3).unwrap(), 5.0);
    }

    #[test]
    fn test_clamp_below_range() {
        let result = remap(-100.0, 0.0, 1.0, 0.0, 255.0, true, 3).unwrap();
        assert_eq!(result, 0.0);
    }

    #[test]
    fn test_clamp_above_range() {
        let result = remap(100.0, 0.0, 1.0, 0.0, 255.0, true, 3).unwrap();
        assert_eq!(result, 255.0);
    }

    #[test]
    fn test_unclamped_extrapolates() {
        let result = remap(20.0, 0.0, 10.0, 0.0, 100.0, false, 3).unwrap();
        assert_eq!(result, 200.0);

        let result = remap(-10.0, 0.0, 10.0, 0.0, 100.0, false, 3).unwrap();
        assert_eq!(result, -100.0);
    }

    #[test]
    fn test_inverted_output_range() {
        // Output ranges may descend; used for canvas-flipped y axes
        let result = remap(2.5, 0.0, 10.0, 100.0, 0.0, false, 3).unwrap();
        assert_eq!(result, 75.0);
    }

    #[test]
    fn test_empty_range_rejected() {
        let err = remap(1.0, 3.0, 3.0, 0.0, 100.0, false, 3).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::EmptyRange { min, max } if min == 3.0 && max == 3.0
        ));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.25 is exact in binary, so the scaled value is exactly 2.5
        assert_eq!(remap(0.25, 0.0, 1.0, 0.0, 1.0, false, 1).unwrap(), 0.3);
        assert_eq!(remap(-0.25, -1.0, 1.0, -1.0, 1.0, false, 1).unwrap(), -0.3);
    }

    #[test]
    fn test_zero_precision() {
        assert_eq!(remap(0.26, 0.0, 1.0, 0.0, 10.0, false, 0).unwrap(), 3.0);
        assert_eq!(remap(0.24, 0.0, 1.0, 0.0, 10.0, false, 0).unwrap(), 2.0);
    }

    #[test]
    fn test_format_decimal_trims_zeros() {
        assert_eq!(format_decimal(255.0, 3), "255");
        assert_eq!(format_decimal(127.5, 3), "127.5");
        assert_eq!(format_decimal(0.123, 3), "0.123");
        assert_eq!(format_decimal(50.0, 1), "50");
    }

    #[test]
    fn test_format_decimal_rounds() {
        assert_eq!(format_decimal(0.12345, 3), "0.123");
        assert_eq!(format_decimal(0.9999, 3), "1");
    }

    #[test]
    fn test_format_decimal_negative_zero() {
        assert_eq!(format_decimal(-0.0001, 3), "0");
    }

    #[test]
    fn test_parse_decimal_empty_is_zero() {
        assert_eq!(parse_decimal("").unwrap(), 0.0);
        assert_eq!(parse_decimal("   ").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_decimal_valid() {
        assert_eq!(parse_decimal("0.77").unwrap(), 0.77);
        assert_eq!(parse_decimal("-2.5").unwrap(), -2.5);
        assert_eq!(parse_decimal(" 1.0 ").unwrap(), 1.0);
    }

    #[test]
    fn test_parse_decimal_invalid() {
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("1.2.3").is_err());
        assert!(parse_decimal("inf").is_err());
        assert!(parse_decimal("NaN").is_err());
    }

    // ===== Property Tests =====

    /// Non-degenerate input range.
    fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
        (-1000.0f64..1000.0, 0.5f64..1000.0).prop_map(|(min, span)| (min, min + span))
    }

    proptest! {
        /// Property: range endpoints map exactly to output endpoints.
        #[test]
        fn prop_boundary_exactness(
            (in_min, in_max) in range_strategy(),
            out_min in -1000.0f64..1000.0,
            out_max in -1000.0f64..1000.0,
        ) {
            let at_min = remap(in_min, in_min, in_max, out_min, out_max, false, 3).unwrap();
            let at_max = remap(in_max, in_min, in_max, out_min, out_max, false, 3).unwrap();
            // Within one rounding step at 3 decimals
            prop_assert!((at_min - out_min).abs() <= 1e-3);
            prop_assert!((at_max - out_max).abs() <= 1e-3);
        }

        /// Property: the mapping is affine in `value`.
        #[test]
        fn prop_affine_in_value(
            (in_min, in_max) in range_strategy(),
            out_min in -1000.0f64..1000.0,
            out_max in -1000.0f64..1000.0,
            fa in 0.0f64..1.0,
            fb in 0.0f64..1.0,
        ) {
            let a = in_min + fa * (in_max - in_min);
            let b = in_min + fb * (in_max - in_min);
            // High precision so rounding noise stays below the tolerance
            let f = |v: f64| remap(v, in_min, in_max, out_min, out_max, false, 9).unwrap();
            let midpoint = f((a + b) / 2.0);
            let average = (f(a) + f(b)) / 2.0;
            prop_assert!((midpoint - average).abs() < 1e-4,
                "affine violated: f(mid)={} vs avg={}", midpoint, average);
        }

        /// Property: clamped results stay inside the output range.
        #[test]
        fn prop_clamped_output_in_range(
            value in -5000.0f64..5000.0,
            (in_min, in_max) in range_strategy(),
            out_min in -1000.0f64..0.0,
            span in 0.01f64..1000.0,
        ) {
            let out_max = out_min + span;
            let result = remap(value, in_min, in_max, out_min, out_max, true, 3).unwrap();
            prop_assert!(result >= out_min - 1e-3, "below range: {}", result);
            prop_assert!(result <= out_max + 1e-3, "above range: {}", result);
        }
    }
}
