//! Scalar helpers used by the conversion graph.
//!
//! `max`/`min` compare strictly, so on ties (and when `x` is NaN) the second
//! operand is returned. `byte_clamp` is the only place a channel is clamped.

/// Returns the larger of `x` and `y`, preferring `y` on ties.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if x > y {
        x
    } else {
        y
    }
}

/// Returns the smaller of `x` and `y`, preferring `y` on ties.
#[inline]
pub fn min(x: f64, y: f64) -> f64 {
    if x < y {
        x
    } else {
        y
    }
}

/// Floored remainder: the result has the sign of `y`.
///
/// `modulo(-0.25, 1.0)` is `0.75`, which keeps negative hues on the wheel.
#[inline]
pub fn modulo(x: f64, y: f64) -> f64 {
    x.rem_euclid(y)
}

#[inline]
pub fn abs(x: f64) -> f64 {
    if x < 0.0 {
        -x
    } else {
        x
    }
}

/// Quantizes a [0, 1] channel to a byte.
///
/// Saturating: below 0 maps to 0, above 1 maps to 255. In-range values are
/// scaled by 255 and truncated. NaN maps to 0.
#[inline]
pub fn byte_clamp(x: f64) -> u8 {
    if x < 0.0 {
        0
    } else if x > 1.0 {
        255
    } else {
        (x * 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_and_min_pick_expected_operand() {
        assert_eq!(max(0.2, 0.7), 0.7);
        assert_eq!(max(0.7, 0.2), 0.7);
        assert_eq!(min(0.2, 0.7), 0.2);
        assert_eq!(min(0.7, 0.2), 0.2);
    }

    #[test]
    fn max_prefers_second_operand_on_tie() {
        assert_eq!(max(0.0, -0.0).to_bits(), (-0.0_f64).to_bits());
        assert_eq!(min(-0.0, 0.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn modulo_wraps_negative_values_into_range() {
        assert!((modulo(-0.25, 1.0) - 0.75).abs() < 1e-12);
        assert!((modulo(1.25, 1.0) - 0.25).abs() < 1e-12);
        assert_eq!(modulo(1.0, 1.0), 0.0);
        assert_eq!(modulo(3.0, 2.0), 1.0);
    }

    #[test]
    fn abs_flips_negatives_only() {
        assert_eq!(abs(-1.5), 1.5);
        assert_eq!(abs(2.0), 2.0);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn byte_clamp_saturates_out_of_range() {
        assert_eq!(byte_clamp(-0.5), 0);
        assert_eq!(byte_clamp(-1e9), 0);
        assert_eq!(byte_clamp(1.5), 255);
        assert_eq!(byte_clamp(f64::INFINITY), 255);
        assert_eq!(byte_clamp(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn byte_clamp_truncates_in_range() {
        assert_eq!(byte_clamp(0.0), 0);
        assert_eq!(byte_clamp(1.0), 255);
        // 0.5 * 255 = 127.5, truncated
        assert_eq!(byte_clamp(0.5), 127);
        assert_eq!(byte_clamp(128.0 / 255.0), 128);
    }

    #[test]
    fn byte_clamp_maps_nan_to_zero() {
        assert_eq!(byte_clamp(f64::NAN), 0);
    }
}
