//! Spinner style configuration
//!
//! All visual knobs of the spinner, read once at construction and
//! immutable afterwards. Every field has a documented default matching
//! the stock look.

#![allow(dead_code)]

use iced::Color;

use crate::ui::theme;

/// Default advance of the indeterminate arc, in degrees per frame at zero progress
pub const DEFAULT_SWEEP_SPEED: f32 = 20.0;
/// Default stroke width of the indeterminate arc
pub const DEFAULT_ARC_WIDTH: f32 = 6.0;
/// Default stroke width of the outer ring
pub const DEFAULT_RING_WIDTH: f32 = 2.0;
/// Default start angle of the arc (270 degrees puts it at 12 o'clock)
pub const DEFAULT_ARC_START_ANGLE: f32 = 270.0;
/// Default sweep length of the arc in degrees
pub const DEFAULT_ARC_LENGTH: f32 = 90.0;
/// Default upper bound for the progress text size
pub const DEFAULT_MAX_TEXT_SIZE: f32 = 40.0;

/// Visual configuration for a [`DashSpinner`](super::DashSpinner)
///
/// Built with the same builder pattern as the rest of the canvas
/// primitives: start from `Default` and override what you need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerStyle {
    /// Color of the thin outer ring
    pub outer_ring_color: Color,
    /// Color of the indeterminate arc
    pub arc_color: Color,
    /// Inner circle color while downloading and for the success state
    pub success_color: Color,
    /// Inner circle color for the failure state
    pub failure_color: Color,
    /// Inner circle color for the unknown state
    pub unknown_color: Color,
    /// Progress text color at 0%
    pub text_color_from: Color,
    /// Progress text color at 100%, also the glyph color
    pub text_color_to: Color,
    /// Start angle of the indeterminate arc in degrees
    pub arc_start_angle: f32,
    /// Degrees the arc advances per frame at zero progress
    pub arc_sweep_speed: f32,
    /// Stroke width of the indeterminate arc
    pub arc_width: f32,
    /// Stroke width of the outer ring
    pub ring_width: f32,
    /// Largest text size the progress percentage may reach
    pub max_text_size: f32,
    /// Whether to render the percentage text while downloading
    pub show_progress_text: bool,
    /// Sweep length of the indeterminate arc in degrees
    pub arc_length: f32,
}

impl Default for SpinnerStyle {
    fn default() -> Self {
        Self {
            outer_ring_color: theme::RING_BLUE,
            arc_color: Color::WHITE,
            success_color: theme::SUCCESS_GREEN,
            failure_color: theme::FAILURE_RED,
            unknown_color: theme::UNKNOWN_ORANGE,
            text_color_from: Color::BLACK,
            text_color_to: Color::WHITE,
            arc_start_angle: DEFAULT_ARC_START_ANGLE,
            arc_sweep_speed: DEFAULT_SWEEP_SPEED,
            arc_width: DEFAULT_ARC_WIDTH,
            ring_width: DEFAULT_RING_WIDTH,
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
            show_progress_text: false,
            arc_length: DEFAULT_ARC_LENGTH,
        }
    }
}

impl SpinnerStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outer_ring_color(mut self, color: Color) -> Self {
        self.outer_ring_color = color;
        self
    }

    pub fn arc_color(mut self, color: Color) -> Self {
        self.arc_color = color;
        self
    }

    pub fn success_color(mut self, color: Color) -> Self {
        self.success_color = color;
        self
    }

    pub fn failure_color(mut self, color: Color) -> Self {
        self.failure_color = color;
        self
    }

    pub fn unknown_color(mut self, color: Color) -> Self {
        self.unknown_color = color;
        self
    }

    pub fn text_colors(mut self, from: Color, to: Color) -> Self {
        self.text_color_from = from;
        self.text_color_to = to;
        self
    }

    pub fn arc_start_angle(mut self, degrees: f32) -> Self {
        self.arc_start_angle = degrees;
        self
    }

    pub fn arc_sweep_speed(mut self, degrees_per_frame: f32) -> Self {
        self.arc_sweep_speed = degrees_per_frame;
        self
    }

    pub fn arc_width(mut self, width: f32) -> Self {
        self.arc_width = width;
        self
    }

    pub fn ring_width(mut self, width: f32) -> Self {
        self.ring_width = width;
        self
    }

    pub fn max_text_size(mut self, size: f32) -> Self {
        self.max_text_size = size;
        self
    }

    pub fn show_progress_text(mut self, show: bool) -> Self {
        self.show_progress_text = show;
        self
    }

    pub fn arc_length(mut self, degrees: f32) -> Self {
        self.arc_length = degrees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let style = SpinnerStyle::default();
        assert_eq!(style.arc_start_angle, 270.0);
        assert_eq!(style.arc_sweep_speed, 20.0);
        assert_eq!(style.arc_width, 6.0);
        assert_eq!(style.ring_width, 2.0);
        assert_eq!(style.max_text_size, 40.0);
        assert_eq!(style.arc_length, 90.0);
        assert!(!style.show_progress_text);
    }

    #[test]
    fn builder_overrides_single_field() {
        let style = SpinnerStyle::new().arc_width(9.0).show_progress_text(true);
        assert_eq!(style.arc_width, 9.0);
        assert!(style.show_progress_text);
        // Untouched fields keep their defaults
        assert_eq!(style.ring_width, 2.0);
    }
}
