//! Single-line text sizing by binary search
//!
//! Finds the largest text size whose rendered width fits a target width,
//! narrowing a closed size range until it is below a fixed precision.
//! The measure function is injected so the algorithm stays deterministic
//! and testable without a font system.

/// Search interval below which the lower bound is returned
pub const FIT_PRECISION: f32 = 0.5;

/// Approximate advance of one glyph as a fraction of the text size
///
/// The canvas API has no synchronous measure, so rendering uses this
/// mean-advance model for the default sans-serif face.
const MEAN_GLYPH_ADVANCE: f32 = 0.6;

/// Estimated width of `text` rendered at `size`
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * MEAN_GLYPH_ADVANCE
}

/// Largest size in `[low, high]` whose measured width fits `target_width`
///
/// Endpoint cases short-circuit: a target wider than the text at `high`
/// returns `high`, one narrower than at `low` returns `low`. Otherwise
/// the search converges to within `precision` of the crossover size.
pub fn fit_single_line_size(
    measure: impl Fn(f32) -> f32,
    target_width: f32,
    mut low: f32,
    mut high: f32,
    precision: f32,
) -> f32 {
    if measure(high) <= target_width {
        return high;
    }
    if measure(low) >= target_width {
        return low;
    }

    while (high - low) >= precision {
        let mid = (low + high) / 2.0;
        let width = measure(mid);
        if width > target_width {
            high = mid;
        } else if width < target_width {
            low = mid;
        } else {
            return mid;
        }
    }
    low
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_measure(size: f32) -> f32 {
        // Three glyphs of the model advance
        estimate_text_width("42%", size)
    }

    #[test]
    fn wide_target_returns_max_size() {
        // "42%" at size 40 is 72 wide; anything wider fits at max size
        let size = fit_single_line_size(linear_measure, 100.0, 0.0, 40.0, FIT_PRECISION);
        assert_eq!(size, 40.0);
    }

    #[test]
    fn narrow_target_returns_min_size() {
        let size = fit_single_line_size(linear_measure, -1.0, 8.0, 40.0, FIT_PRECISION);
        assert_eq!(size, 8.0);
    }

    #[test]
    fn converges_within_precision() {
        // Crossover: 3 * 0.6 * size = 36 at size 20
        let size = fit_single_line_size(linear_measure, 36.0, 0.0, 40.0, FIT_PRECISION);
        assert!(
            (size - 20.0).abs() <= FIT_PRECISION,
            "expected ~20, got {size}"
        );
        // The fitted size never overshoots the target width by more than
        // one precision step of advance
        assert!(linear_measure(size) <= 36.0 + FIT_PRECISION * 3.0 * 0.6);
    }

    #[test]
    fn fitted_width_never_exceeds_target() {
        for target in [10.0_f32, 25.0, 36.0, 55.0] {
            let size = fit_single_line_size(linear_measure, target, 0.0, 40.0, FIT_PRECISION);
            assert!(
                linear_measure(size) <= target + 1e-3,
                "width at fitted size must fit the target, target={target}"
            );
        }
    }

    #[test]
    fn width_model_is_linear_in_glyph_count() {
        assert_eq!(estimate_text_width("", 40.0), 0.0);
        assert_eq!(
            estimate_text_width("100%", 10.0),
            4.0 * 10.0 * 0.6,
        );
    }
}
