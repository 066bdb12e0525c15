//! Canvas renderer for the dash spinner
//!
//! One pass per frame, layered back to front: outer ring, inner circle,
//! center content (text, dot, line, or glyph), indeterminate arc. The
//! pass is a pure function of the spinner state, the style, and the
//! bounds; all mode-dependent blending lives in [`inner_circle`] so it
//! can be tested without a renderer.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, Path, Program, Stroke, Text};
use iced::{Color, Element, Pixels, Point, Radians, Rectangle, Renderer, Theme, mouse};

use super::geometry::FrameGeometry;
use super::glyph;
use super::mode::SpinnerMode;
use super::style::SpinnerStyle;
use super::text_fit::{FIT_PRECISION, estimate_text_width, fit_single_line_size};
use super::DashSpinner;
use crate::ui::theme;

/// Stroke width of the status line and glyphs
const STATE_LINE_STROKE: f32 = 4.0;
/// Horizontal padding subtracted from the width offered to the text
const TEXT_PADDING: f32 = 8.0;
/// Fraction of the collapse ramp during which a dot replaces the text
const TEXT_COLLAPSE_THRESHOLD: f32 = 0.1;
/// Upper bound of the 8-bit alpha channel
const MAX_ALPHA: f32 = 255.0;

/// Inner-circle alpha for a progress value, in 8-bit steps
///
/// Truncated, clamped to [0, 255], and monotonic in the progress.
pub fn inner_circle_alpha(progress: f32) -> u8 {
    ((MAX_ALPHA * progress) as i32).clamp(0, 255) as u8
}

/// Resolved inner-circle parameters for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
struct InnerCircle {
    radius: f32,
    color: Color,
    /// Fill opacity in [0, 1]
    alpha: f32,
}

/// Radius the circle has reached at a given download progress
fn progress_radius(progress: f32, geom: &FrameGeometry) -> f32 {
    (geom.inner_radius * progress).min(geom.inner_radius)
}

/// Inner-circle radius, color, and opacity for the current mode
///
/// While transitioning into failure/unknown the circle "catches up" from
/// wherever the download left it: the collapse ramp runs 1→0, so its
/// inverse blends the remaining radius and alpha in as stage A plays.
fn inner_circle(
    mode: SpinnerMode,
    next_mode: SpinnerMode,
    progress: f32,
    transition: f32,
    geom: &FrameGeometry,
    style: &SpinnerStyle,
) -> InnerCircle {
    let full = |color| InnerCircle {
        radius: geom.inner_radius,
        color,
        alpha: 1.0,
    };

    match mode {
        SpinnerMode::None => InnerCircle {
            radius: 0.0,
            color: style.success_color,
            alpha: 0.0,
        },
        SpinnerMode::Download => InnerCircle {
            radius: progress_radius(progress, geom),
            color: style.success_color,
            alpha: f32::from(inner_circle_alpha(progress)) / MAX_ALPHA,
        },
        SpinnerMode::TransitionTextAndCircle | SpinnerMode::TransitionLine => match next_mode {
            SpinnerMode::Failure | SpinnerMode::Unknown => {
                let color = if next_mode == SpinnerMode::Failure {
                    style.failure_color
                } else {
                    style.unknown_color
                };
                if mode == SpinnerMode::TransitionTextAndCircle {
                    let inverse = 1.0 - transition;
                    let base_radius = progress_radius(progress, geom);
                    let base_alpha = f32::from(inner_circle_alpha(progress));
                    InnerCircle {
                        radius: base_radius + (geom.inner_radius - base_radius) * inverse,
                        color,
                        alpha: (base_alpha + (MAX_ALPHA - base_alpha) * inverse) / MAX_ALPHA,
                    }
                } else {
                    full(color)
                }
            }
            _ => full(style.success_color),
        },
        SpinnerMode::Success => full(style.success_color),
        SpinnerMode::Failure => full(style.failure_color),
        SpinnerMode::Unknown => full(style.unknown_color),
    }
}

/// Round-capped stroke used by the status line and glyphs
fn glyph_stroke(color: Color) -> Stroke<'static> {
    Stroke {
        line_cap: LineCap::Round,
        ..Stroke::default()
            .with_width(STATE_LINE_STROKE)
            .with_color(color)
    }
}

/// Canvas program drawing a [`DashSpinner`]
///
/// Borrows the spinner, so the host keeps ownership and the program
/// rebuilds for free every frame.
#[derive(Debug, Clone, Copy)]
pub struct SpinnerCanvas<'a> {
    spinner: &'a DashSpinner,
}

impl<'a> SpinnerCanvas<'a> {
    pub fn new(spinner: &'a DashSpinner) -> Self {
        Self { spinner }
    }

    fn draw_outer_ring(&self, frame: &mut Frame, geom: &FrameGeometry, style: &SpinnerStyle) {
        let ring = Path::circle(geom.center, geom.ring_radius);
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(style.ring_width)
                .with_color(style.outer_ring_color),
        );
    }

    fn draw_inner_circle(&self, frame: &mut Frame, geom: &FrameGeometry, style: &SpinnerStyle) {
        let circle = inner_circle(
            self.spinner.mode(),
            self.spinner.next_mode(),
            self.spinner.progress(),
            self.spinner.transition_progress(),
            geom,
            style,
        );
        if circle.radius <= 0.0 || circle.alpha <= 0.0 {
            return;
        }
        let fill = Color {
            a: circle.alpha,
            ..circle.color
        };
        frame.fill(&Path::circle(geom.center, circle.radius), fill);
    }

    fn draw_center_content(&self, frame: &mut Frame, geom: &FrameGeometry, style: &SpinnerStyle) {
        let transition = self.spinner.transition_progress();
        match self.spinner.mode() {
            SpinnerMode::Download | SpinnerMode::TransitionTextAndCircle => {
                let collapsing = self.spinner.mode() == SpinnerMode::TransitionTextAndCircle;
                if collapsing && transition < TEXT_COLLAPSE_THRESHOLD {
                    // The text has shrunk away; hold a dot until the line
                    // stage takes over
                    let dot = Path::circle(geom.center, STATE_LINE_STROKE / 2.0);
                    frame.fill(&dot, style.text_color_to);
                } else if style.show_progress_text {
                    self.draw_progress_text(frame, geom, style, collapsing, transition);
                }
            }
            SpinnerMode::TransitionLine => {
                let length = geom.line_width * transition;
                let toward_success = self.spinner.next_mode() == SpinnerMode::Success;
                let (start_x, end_x) = glyph::line_span(geom.center.x, length, toward_success);
                let line = Path::line(
                    Point::new(start_x, geom.center.y),
                    Point::new(end_x, geom.center.y),
                );
                frame.stroke(&line, glyph_stroke(style.text_color_to));
            }
            SpinnerMode::Success => {
                for (from, to) in glyph::tick_segments(geom.center, geom.line_width, transition) {
                    frame.stroke(&Path::line(from, to), glyph_stroke(style.text_color_to));
                }
            }
            SpinnerMode::Failure => {
                for (from, to) in glyph::cross_segments(geom.center, geom.line_width, transition) {
                    frame.stroke(&Path::line(from, to), glyph_stroke(style.text_color_to));
                }
            }
            SpinnerMode::Unknown => {
                let (segments, dot) =
                    glyph::exclamation_parts(geom.center, geom.line_width, transition);
                for (from, to) in segments {
                    frame.stroke(&Path::line(from, to), glyph_stroke(style.text_color_to));
                }
                let dot = Path::circle(dot, STATE_LINE_STROKE / 2.0);
                frame.fill(&dot, style.text_color_to);
            }
            SpinnerMode::None => {}
        }
    }

    fn draw_progress_text(
        &self,
        frame: &mut Frame,
        geom: &FrameGeometry,
        style: &SpinnerStyle,
        collapsing: bool,
        transition: f32,
    ) {
        let progress = self.spinner.progress();
        let reached = progress_radius(progress, geom);
        // The text scales with the circle on the way up, and with the
        // collapse ramp on the way down
        let diameter = if collapsing {
            reached * transition * 2.0
        } else {
            reached * 2.0
        };
        let target_width = diameter - TEXT_PADDING;
        if target_width <= 0.0 {
            return;
        }

        let content = format!("{}%", (progress * 100.0) as u32);
        let size = fit_single_line_size(
            |size| estimate_text_width(&content, size),
            target_width,
            0.0,
            style.max_text_size,
            FIT_PRECISION,
        );
        if size <= 0.0 {
            return;
        }

        let color = if collapsing {
            style.text_color_to
        } else {
            theme::blend_colors(style.text_color_from, style.text_color_to, progress)
        };
        frame.fill_text(Text {
            content,
            position: geom.center,
            color,
            size: Pixels(size),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }

    fn draw_arc(&self, frame: &mut Frame, geom: &FrameGeometry, style: &SpinnerStyle) {
        if self.spinner.mode() != SpinnerMode::Download {
            return;
        }
        let radius = geom.arc_radius(style);
        if radius <= 0.0 {
            return;
        }

        let start = Radians(self.spinner.arc_angle().to_radians());
        let arc = Path::new(|builder| {
            builder.arc(canvas::path::Arc {
                center: geom.center,
                radius,
                start_angle: start,
                end_angle: Radians(start.0 + style.arc_length.to_radians()),
            });
        });
        frame.stroke(
            &arc,
            Stroke {
                line_cap: LineCap::Round,
                ..Stroke::default()
                    .with_width(style.arc_width)
                    .with_color(style.arc_color)
            },
        );
    }
}

impl<'a, Message> Program<Message> for SpinnerCanvas<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let style = self.spinner.style();
        let geom = FrameGeometry::new(bounds.size(), style);
        let mut frame = Frame::new(renderer, bounds.size());

        self.draw_outer_ring(&mut frame, &geom, style);
        self.draw_inner_circle(&mut frame, &geom, style);
        self.draw_center_content(&mut frame, &geom, style);
        self.draw_arc(&mut frame, &geom, style);

        vec![frame.into_geometry()]
    }
}

/// Create a square canvas element for the spinner
pub fn view_dash_spinner<'a, Message: 'a>(
    spinner: &'a DashSpinner,
    size: f32,
) -> Element<'a, Message> {
    Canvas::new(SpinnerCanvas::new(spinner))
        .width(size)
        .height(size)
        .into()
}
