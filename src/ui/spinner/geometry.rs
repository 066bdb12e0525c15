//! Per-frame geometry derived from the widget bounds
//!
//! Recomputed at the start of every render pass; never mutated. All
//! values follow from the current bounds and the configured stroke
//! widths alone.

use iced::{Point, Size};

use super::style::SpinnerStyle;

/// Fraction of the widget size available to the status glyphs
const SYMBOL_WIDTH_RATIO: f32 = 0.5;

/// Derived drawing geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    /// Side of the square drawing area (min of width and height)
    pub size: f32,
    /// Radius of the outer ring's center line
    pub ring_radius: f32,
    /// Radius the inner circle grows towards
    pub inner_radius: f32,
    /// Center of the drawing area
    pub center: Point,
    /// Full length of the status line the glyphs are built from
    pub line_width: f32,
}

impl FrameGeometry {
    /// Derive the frame geometry from the widget bounds
    ///
    /// Degenerate bounds (zero or negative after stroke insets) collapse
    /// to zero radii so the renderer draws nothing rather than erroring.
    pub fn new(bounds: Size, style: &SpinnerStyle) -> Self {
        let size = bounds.width.min(bounds.height).max(0.0);
        let ring_radius = ((size - style.ring_width) / 2.0).max(0.0);
        let inner_radius = ((size - style.ring_width * 2.0) / 2.0).max(0.0);
        Self {
            size,
            ring_radius,
            inner_radius,
            center: Point::new(size / 2.0, size / 2.0),
            line_width: SYMBOL_WIDTH_RATIO * size,
        }
    }

    /// Radius of the circle the indeterminate arc runs on, just inside the ring
    pub fn arc_radius(&self, style: &SpinnerStyle) -> f32 {
        (self.ring_radius - style.ring_width / 2.0 - style.arc_width / 2.0).max(0.0)
    }
}
