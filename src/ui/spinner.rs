//! Animated circular download indicator
//!
//! The spinner visualizes an externally-driven download and its outcome:
//!
//! 1. While progress is reported through [`DashSpinner::set_progress`],
//!    the inner circle grows and fades in with the percentage, an
//!    indeterminate arc orbits the ring (slowing as progress nears 100%),
//!    and the percentage text scales up if enabled.
//! 2. [`DashSpinner::show_success`], [`DashSpinner::show_failure`] or
//!    [`DashSpinner::show_unknown`] plays three chained animations:
//!    collapse the text to a dot while the inner circle completes (in the
//!    outcome's color for failure/unknown), stretch the dot into a
//!    horizontal line, then fold the line into a tick, cross, or
//!    exclamation mark.
//! 3. One stage duration after the glyph finishes, [`DashSpinner::tick`]
//!    reports the terminal mode exactly once so the host can react after
//!    the animation has settled.
//!
//! The widget never drives a download itself; it is a pure visualization
//! that the host advances from its animation-frame subscription.

mod canvas;
mod geometry;
mod glyph;
mod mode;
mod style;
mod text_fit;
mod transition;

pub use canvas::{SpinnerCanvas, view_dash_spinner};
pub use mode::SpinnerMode;
pub use style::SpinnerStyle;

use std::time::Instant;

use transition::{StageEvent, TransitionChain};

/// Degrees in a full turn, for wrapping the arc angle
const FULL_CIRCLE: f32 = 360.0;

/// State machine of the circular download indicator
///
/// All mutation happens on the host's update loop; the canvas program
/// only reads. Call [`tick`](Self::tick) once per animation frame while
/// [`needs_frames`](Self::needs_frames) is true.
#[derive(Debug)]
pub struct DashSpinner {
    /// Current visual mode
    mode: SpinnerMode,
    /// Pending terminal mode while a transition is playing
    next_mode: SpinnerMode,
    /// Clamped download progress in [0, 1]
    progress: f32,
    /// The three chained stage ramps plus the settle delay
    chain: TransitionChain,
    /// Start angle of the indeterminate arc, degrees
    arc_angle: f32,
    /// Read-once visual configuration
    style: SpinnerStyle,
}

impl Default for DashSpinner {
    fn default() -> Self {
        Self::new(SpinnerStyle::default())
    }
}

impl DashSpinner {
    pub fn new(style: SpinnerStyle) -> Self {
        Self {
            mode: SpinnerMode::None,
            next_mode: SpinnerMode::None,
            progress: 0.0,
            chain: TransitionChain::new(),
            arc_angle: style.arc_start_angle,
            style,
        }
    }

    /// Report download progress
    ///
    /// Clamps to [0, 1] (NaN collapses to 0) and enters `Download` mode.
    /// Silently ignored while a transition or terminal state is showing;
    /// only a [`reset`](Self::reset) makes the spinner accept progress
    /// again.
    pub fn set_progress(&mut self, progress: f32) {
        if !self.mode.accepts_progress() {
            return;
        }
        self.mode = SpinnerMode::Download;
        self.progress = progress.max(0.0).min(1.0);
    }

    /// Begin the transition into the success tick
    pub fn show_success(&mut self) {
        self.begin_transition(SpinnerMode::Success);
    }

    /// Begin the transition into the failure cross
    pub fn show_failure(&mut self) {
        self.begin_transition(SpinnerMode::Failure);
    }

    /// Begin the transition into the unknown exclamation mark
    pub fn show_unknown(&mut self) {
        self.begin_transition(SpinnerMode::Unknown);
    }

    /// Return to the idle state, cancelling any in-flight cycle
    ///
    /// A cancelled cycle never reports completion.
    pub fn reset(&mut self) {
        self.mode = SpinnerMode::None;
        self.next_mode = SpinnerMode::None;
        self.progress = 0.0;
        self.arc_angle = self.style.arc_start_angle;
        self.chain.reset();
    }

    /// Advance animations by one frame
    ///
    /// Moves the indeterminate arc while downloading, steps whichever
    /// stage ramp is active, and flips the mode at stage boundaries.
    /// Returns the terminal mode exactly once per completed cycle, one
    /// settle delay after the glyph animation ends.
    pub fn tick(&mut self, now: Instant) -> Option<SpinnerMode> {
        if self.mode == SpinnerMode::Download {
            // The arc slows in step with progress and stops at 100%
            let step = (1.0 - self.progress) * self.style.arc_sweep_speed;
            self.arc_angle = (self.arc_angle + step).rem_euclid(FULL_CIRCLE);
        }

        match self.chain.advance(now)? {
            StageEvent::LineStarted => {
                self.mode = SpinnerMode::TransitionLine;
                None
            }
            StageEvent::GlyphStarted => {
                self.mode = self.next_mode;
                self.next_mode = SpinnerMode::None;
                None
            }
            StageEvent::Settled => Some(self.mode),
        }
    }

    /// Whether the host should keep an animation-frame subscription alive
    pub fn needs_frames(&self) -> bool {
        self.mode == SpinnerMode::Download || self.chain.is_active()
    }

    pub fn mode(&self) -> SpinnerMode {
        self.mode
    }

    pub fn next_mode(&self) -> SpinnerMode {
        self.next_mode
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress of the currently active stage ramp, in [0, 1]
    pub fn transition_progress(&self) -> f32 {
        self.chain.value()
    }

    /// Current start angle of the indeterminate arc, degrees
    pub fn arc_angle(&self) -> f32 {
        self.arc_angle
    }

    pub fn style(&self) -> &SpinnerStyle {
        &self.style
    }

    /// Record the target and (re)start the chain from stage A
    ///
    /// Deliberately callable from any mode: a later call overrides the
    /// pending outcome and replays the transition from the start.
    fn begin_transition(&mut self, target: SpinnerMode) {
        debug_assert!(target.is_terminal());
        self.mode = SpinnerMode::TransitionTextAndCircle;
        self.next_mode = target;
        self.chain.start();
    }
}
