//! Display formatting for computed values

/// Zero-fraction values at or above this magnitude skip the integer render;
/// an `i64` round-trip would mangle them.
const INTEGER_LIMIT: f64 = 1e15;

/// Formats a computed value for the display
///
/// Whole values render without a decimal point (`3`, not `3.0`). Everything
/// else renders with eight fractional digits, trailing zeros stripped and a
/// bare trailing point removed.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < INTEGER_LIMIT {
        format!("{}", value as i64)
    } else {
        let rendered = format!("{value:.8}");
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_values_drop_the_point() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(-17.0), "-17");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_fractional_values_trim_trailing_zeros() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(-1.25), "-1.25");
        assert_eq!(format_value(0.125), "0.125");
    }

    #[test]
    fn test_repeating_fraction_keeps_eight_digits() {
        assert_eq!(format_value(1.0 / 3.0), "0.33333333");
        assert_eq!(format_value(2.0 / 3.0), "0.66666667");
    }

    #[test]
    fn test_float_noise_is_rounded_away() {
        // 0.1 + 0.2 is 0.30000000000000004 in f64
        assert_eq!(format_value(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_whole_part_survives_trimming() {
        assert_eq!(format_value(20.000000001), "20");
        assert_eq!(format_value(100.5), "100.5");
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_value(1e-9), "0");
        assert_eq!(format_value(-1e-9), "-0");
    }

    #[test]
    fn test_large_whole_values() {
        assert_eq!(format_value(1e14), "100000000000000");
        // Past the i64-safe window the fractional renderer takes over
        assert_eq!(format_value(1e16), "10000000000000000");
    }
}
