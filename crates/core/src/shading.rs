//! Luminance to glyph mapping.

use crate::types::{LUMINANCE_RAMP, LUMINANCE_SCALE};

/// Ramp index for a luminance value, clamped to the ramp.
#[inline(always)]
pub fn luminance_index(luminance: f64) -> usize {
    let scaled = (luminance * LUMINANCE_SCALE).floor();
    if scaled.is_nan() || scaled <= 0.0 {
        return 0;
    }
    (scaled as usize).min(LUMINANCE_RAMP.len() - 1)
}

#[inline(always)]
pub fn glyph_for_luminance(luminance: f64) -> char {
    LUMINANCE_RAMP[luminance_index(luminance)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_by_eighths() {
        assert_eq!(luminance_index(0.01), 0);
        assert_eq!(luminance_index(0.125), 1);
        assert_eq!(luminance_index(0.5), 4);
        assert_eq!(luminance_index(1.0), 8);
        assert_eq!(glyph_for_luminance(1.0), '*');
    }

    #[test]
    fn brightest_possible_sample_is_in_range() {
        // √2 * 8 ≈ 11.31
        assert_eq!(luminance_index(2f64.sqrt()), 11);
        assert_eq!(glyph_for_luminance(2f64.sqrt()), '@');
    }

    #[test]
    fn index_is_clamped_past_the_ramp() {
        assert_eq!(luminance_index(1.5), 11);
        assert_eq!(luminance_index(12.0 / 8.0), 11);
        assert_eq!(luminance_index(100.0), 11);
        assert_eq!(luminance_index(f64::INFINITY), 11);
        assert_eq!(glyph_for_luminance(1e9), '@');
    }

    #[test]
    fn non_positive_and_nan_map_to_faintest() {
        assert_eq!(luminance_index(-1.0), 0);
        assert_eq!(luminance_index(f64::NAN), 0);
    }
}
