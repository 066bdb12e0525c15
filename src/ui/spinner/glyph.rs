//! Endpoint math for the status glyphs
//!
//! Pure functions from (center, line width, transition progress) to line
//! segments. Every endpoint is `start + length * (cos θ, sin θ)` with the
//! angle scaled by the transition progress, so each glyph unfolds from
//! the horizontal line stage B leaves behind.

use iced::Point;

/// A drawn line segment
pub type Segment = (Point, Point);

/// Angle of each cross/tick arm at full transition progress, degrees
const ARM_ANGLE: f32 = 45.0;
/// Short arm of the tick as a fraction of the status line
pub const TICK_SHORT_ARM_RATIO: f32 = 0.25;
/// Long arm of the tick as a fraction of the status line
pub const TICK_LONG_ARM_RATIO: f32 = 0.75;
/// Final rotation of the exclamation segments, degrees
const UNKNOWN_ROTATION_ANGLE: f32 = 90.0;
/// Final distance of the exclamation dot beyond the lower arm
pub const UNKNOWN_DOT_DISTANCE: f32 = 10.0;

/// Point at `length` from `start` along `angle_deg`
fn polar(start: Point, length: f32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(start.x + length * rad.cos(), start.y + length * rad.sin())
}

/// Horizontal span (start x, end x) of the stage-B transition line
///
/// The line is centered, except when the cycle is heading for success:
/// then it is offset so the future tick joint sits at the view center,
/// with the short arm to the left and the long arm to the right.
pub fn line_span(center_x: f32, length: f32, toward_success: bool) -> (f32, f32) {
    if toward_success {
        (
            center_x - TICK_SHORT_ARM_RATIO * length,
            center_x + TICK_LONG_ARM_RATIO * length,
        )
    } else {
        (center_x - length / 2.0, center_x + length / 2.0)
    }
}

/// The two segments of the success tick at transition progress `t`
///
/// The short arm folds downward at `+45°·t` towards the joint; the long
/// arm continues from the joint at `-45°·t`. At `t = 0` both collapse
/// onto the offset horizontal line, at `t = 1` they form the tick.
pub fn tick_segments(center: Point, line_width: f32, t: f32) -> [Segment; 2] {
    let short = TICK_SHORT_ARM_RATIO * line_width;
    let long = TICK_LONG_ARM_RATIO * line_width;
    let short_angle = (ARM_ANGLE * t).to_radians();
    let long_angle = (-ARM_ANGLE * t).to_radians();

    // The short arm ends at the joint, so its start is solved backwards
    // from the joint position: start = end - length * cos θ.
    let start_short_x = center.x - short * short_angle.cos();
    let end_short_y = center.y + short * short_angle.sin();
    let end_long_x = start_short_x + long * long_angle.cos();
    let end_long_y = end_short_y + long * long_angle.sin();

    [
        (
            Point::new(start_short_x, center.y),
            Point::new(center.x, end_short_y),
        ),
        (
            Point::new(center.x, end_short_y),
            Point::new(end_long_x, end_long_y),
        ),
    ]
}

/// The four arms of the failure cross at transition progress `t`
///
/// One arm per quadrant, each from the center at `±45°·t` and the 180°
/// complements. At `t = 0` they overlap into the horizontal line.
pub fn cross_segments(center: Point, line_width: f32, t: f32) -> [Segment; 4] {
    let arm = line_width / 2.0;
    let quad_one = polar(center, arm, -ARM_ANGLE * t);
    let quad_two = polar(center, arm, 180.0 + ARM_ANGLE * t);
    let quad_three = polar(center, arm, 180.0 - ARM_ANGLE * t);
    let quad_four = polar(center, arm, ARM_ANGLE * t);

    [
        (center, quad_one),
        (center, quad_two),
        (center, quad_three),
        (center, quad_four),
    ]
}

/// The two segments and the dot center of the unknown exclamation at `t`
///
/// Both half-arms rotate from horizontal to vertical while the dot
/// recedes from the lower arm's end to its final distance.
pub fn exclamation_parts(center: Point, line_width: f32, t: f32) -> ([Segment; 2], Point) {
    let arm = line_width / 2.0;
    let upper = polar(center, arm, -UNKNOWN_ROTATION_ANGLE * t);
    let lower_angle = 180.0 - UNKNOWN_ROTATION_ANGLE * t;
    let lower = polar(center, arm, lower_angle);
    let dot = polar(center, arm + UNKNOWN_DOT_DISTANCE * t, lower_angle);

    ([(center, upper), (center, lower)], dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);
    const LINE: f32 = 80.0;
    const EPS: f32 = 1e-4;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    mod transition_line {
        use super::*;

        #[test]
        fn centered_for_failure_and_unknown() {
            let (start, end) = line_span(100.0, 40.0, false);
            assert_eq!(start, 80.0);
            assert_eq!(end, 120.0);
        }

        #[test]
        fn offset_for_success_splits_25_75() {
            let (start, end) = line_span(100.0, 40.0, true);
            assert_eq!(100.0 - start, 10.0, "short arm is 25% of the length");
            assert_eq!(end - 100.0, 30.0, "long arm is 75% of the length");
        }
    }

    mod tick {
        use super::*;

        #[test]
        fn collapses_onto_offset_line_at_zero() {
            let [short, long] = tick_segments(CENTER, LINE, 0.0);
            // Flat: everything on the center height
            assert!(close(short.0, Point::new(80.0, 100.0)));
            assert!(close(short.1, CENTER));
            assert!(close(long.1, Point::new(140.0, 100.0)));
        }

        #[test]
        fn long_arm_starts_at_the_joint() {
            for t in [0.0, 0.3, 0.7, 1.0] {
                let [short, long] = tick_segments(CENTER, LINE, t);
                assert!(close(short.1, long.0), "arms chain at the joint, t={t}");
            }
        }

        #[test]
        fn joint_sits_on_center_x_at_full_progress() {
            let [short, _] = tick_segments(CENTER, LINE, 1.0);
            assert_eq!(short.1.x, CENTER.x);
            assert!(short.1.y > CENTER.y, "joint dips below the center line");
        }
    }

    mod cross {
        use super::*;

        #[test]
        fn overlaps_the_line_at_zero() {
            let segments = cross_segments(CENTER, LINE, 0.0);
            assert!(close(segments[0].1, Point::new(140.0, 100.0)));
            assert!(close(segments[1].1, Point::new(60.0, 100.0)));
        }

        #[test]
        fn symmetric_about_the_center_at_full_progress() {
            let segments = cross_segments(CENTER, LINE, 1.0);
            // Quadrant one and quadrant three are point reflections
            let mirrored = Point::new(
                2.0 * CENTER.x - segments[0].1.x,
                2.0 * CENTER.y - segments[0].1.y,
            );
            assert!(close(segments[2].1, mirrored));
            // Same for quadrants two and four
            let mirrored = Point::new(
                2.0 * CENTER.x - segments[1].1.x,
                2.0 * CENTER.y - segments[1].1.y,
            );
            assert!(close(segments[3].1, mirrored));
        }

        #[test]
        fn arm_length_is_half_the_line_width() {
            let segments = cross_segments(CENTER, LINE, 1.0);
            for (start, end) in segments {
                let len = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
                assert!((len - LINE / 2.0).abs() < EPS);
            }
        }
    }

    mod exclamation {
        use super::*;

        #[test]
        fn horizontal_at_zero() {
            let ([upper, lower], dot) = exclamation_parts(CENTER, LINE, 0.0);
            assert!(close(upper.1, Point::new(140.0, 100.0)));
            assert!(close(lower.1, Point::new(60.0, 100.0)));
            assert!(close(dot, lower.1), "dot starts on the arm end");
        }

        #[test]
        fn vertical_with_receded_dot_at_one() {
            let ([upper, lower], dot) = exclamation_parts(CENTER, LINE, 1.0);
            assert!(close(upper.1, Point::new(100.0, 60.0)));
            assert!(close(lower.1, Point::new(100.0, 140.0)));
            assert!(close(dot, Point::new(100.0, 140.0 + UNKNOWN_DOT_DISTANCE)));
        }

        #[test]
        fn dot_distance_scales_with_progress() {
            let ([_, lower], dot) = exclamation_parts(CENTER, LINE, 0.5);
            let gap = ((dot.x - lower.1.x).powi(2) + (dot.y - lower.1.y).powi(2)).sqrt();
            assert!((gap - UNKNOWN_DOT_DISTANCE * 0.5).abs() < EPS);
        }
    }
}
