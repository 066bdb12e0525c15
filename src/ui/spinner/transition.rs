//! The chained stage animations of a spinner cycle
//!
//! One cycle plays three scalar ramps in strict sequence: collapse the
//! text and complete the circle (1→0), grow the status line (0→1), and
//! draw the terminal glyph (0→1). The chain then waits one extra stage
//! duration before reporting completion so the finished glyph is
//! visible for a beat.
//!
//! A single `advance` call per animation frame drives the whole chain;
//! restarting while a stage is running cancels and replays from stage A.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Duration of each of the three stage ramps, and of the settle delay
pub const STAGE_DURATION: Duration = Duration::from_millis(400);

/// Ramp endpoints: stage A runs start→end, stages B and C run end→start
const RAMP_START: f32 = 1.0;
const RAMP_END: f32 = 0.0;

/// Decelerating ease shared by all three stages
fn stage_easing() -> Easing {
    Easing::EASE_OUT.with_duration(STAGE_DURATION)
}

/// A ramp already parked at `value` with nothing scheduled
fn idle_ramp(value: f32) -> Animated<f32> {
    Animated::transition(value, stage_easing())
}

/// Where in the chain the cycle currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// No cycle running
    Idle,
    /// Stage A: text collapses, circle completes (ramp 1→0)
    CollapseTextAndCircle,
    /// Stage B: the status line grows (ramp 0→1)
    GrowLine,
    /// Stage C: the terminal glyph unfolds (ramp 0→1)
    DrawGlyph,
    /// All ramps done; waiting out the settle delay
    Settle,
}

/// Chain progress reported to the spinner, one event per boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    /// Stage A finished; the line stage begins
    LineStarted,
    /// Stage B finished; the glyph stage begins
    GlyphStarted,
    /// The settle delay elapsed; the cycle is complete
    Settled,
}

/// Sequencer for the three stage ramps plus the settle delay
#[derive(Debug)]
pub struct TransitionChain {
    stage: Stage,
    ramp: Animated<f32>,
    settle_deadline: Option<Instant>,
}

impl Default for TransitionChain {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionChain {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            ramp: idle_ramp(RAMP_END),
            settle_deadline: None,
        }
    }

    /// Begin (or replay) the chain from stage A
    ///
    /// Always recreates the stage-A ramp, so calling this mid-flight
    /// cancels whatever was running, including a pending settle delay.
    pub fn start(&mut self) {
        self.stage = Stage::CollapseTextAndCircle;
        self.settle_deadline = None;
        self.ramp = idle_ramp(RAMP_START);
        self.ramp.update(RAMP_END.into());
    }

    /// Stop everything and park the ramp at zero
    pub fn reset(&mut self) {
        self.stage = Stage::Idle;
        self.settle_deadline = None;
        self.ramp = idle_ramp(RAMP_END);
    }

    /// Current transition progress in [0, 1]
    pub fn value(&self) -> f32 {
        *self.ramp.value()
    }

    /// Whether any part of the chain (ramps or settle delay) is pending
    pub fn is_active(&self) -> bool {
        self.stage != Stage::Idle
    }

    /// Whether the chain is waiting out the post-animation delay
    pub fn is_settling(&self) -> bool {
        self.stage == Stage::Settle
    }

    /// Advance the chain to `now`, reporting at most one stage boundary
    pub fn advance(&mut self, now: Instant) -> Option<StageEvent> {
        match self.stage {
            Stage::Idle => None,
            Stage::Settle => {
                let deadline = self.settle_deadline?;
                if now < deadline {
                    return None;
                }
                self.settle_deadline = None;
                self.stage = Stage::Idle;
                Some(StageEvent::Settled)
            }
            Stage::CollapseTextAndCircle | Stage::GrowLine | Stage::DrawGlyph => {
                self.ramp.tick(now);
                if self.ramp.is_animating() {
                    return None;
                }
                match self.stage {
                    Stage::CollapseTextAndCircle => {
                        self.stage = Stage::GrowLine;
                        self.ramp = idle_ramp(RAMP_END);
                        self.ramp.update(RAMP_START.into());
                        Some(StageEvent::LineStarted)
                    }
                    Stage::GrowLine => {
                        self.stage = Stage::DrawGlyph;
                        self.ramp = idle_ramp(RAMP_END);
                        self.ramp.update(RAMP_START.into());
                        Some(StageEvent::GlyphStarted)
                    }
                    _ => {
                        // Stage C done; the glyph stays at full progress
                        // while the settle delay runs
                        self.stage = Stage::Settle;
                        self.settle_deadline = Some(now + STAGE_DURATION);
                        None
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generously past one stage duration; keeps the tests robust against
    /// the wall-clock start instants captured inside the ramps
    const STEP: Duration = Duration::from_secs(2);

    fn run_to_settle(chain: &mut TransitionChain, t0: Instant) -> Instant {
        assert_eq!(chain.advance(t0 + STEP), Some(StageEvent::LineStarted));
        assert_eq!(chain.advance(t0 + STEP * 2), Some(StageEvent::GlyphStarted));
        assert_eq!(chain.advance(t0 + STEP * 3), None, "stage C end enters settle");
        assert!(chain.is_settling());
        t0 + STEP * 3
    }

    #[test]
    fn stages_fire_in_order_exactly_once() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();
        assert!(chain.is_active());

        let settle_start = run_to_settle(&mut chain, t0);
        assert_eq!(chain.advance(settle_start + STEP), Some(StageEvent::Settled));
        assert!(!chain.is_active());
        assert_eq!(chain.advance(settle_start + STEP * 2), None, "settles once");
    }

    #[test]
    fn settle_delay_holds_for_one_duration() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();

        let settle_start = run_to_settle(&mut chain, t0);
        // Probe inside the delay window
        assert_eq!(
            chain.advance(settle_start + Duration::from_millis(100)),
            None,
            "no completion before the settle deadline"
        );
        assert_eq!(
            chain.advance(settle_start + STAGE_DURATION),
            Some(StageEvent::Settled)
        );
    }

    #[test]
    fn progress_is_one_after_the_glyph_stage() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();
        run_to_settle(&mut chain, t0);
        assert_eq!(chain.value(), 1.0);
    }

    #[test]
    fn restart_replays_from_stage_a() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();
        assert_eq!(chain.advance(t0 + STEP), Some(StageEvent::LineStarted));

        // Restart mid stage B: the next boundary is stage A's end again
        chain.start();
        assert_eq!(chain.advance(t0 + STEP * 2), Some(StageEvent::LineStarted));
    }

    #[test]
    fn restart_cancels_a_pending_settle() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();
        let settle_start = run_to_settle(&mut chain, t0);

        chain.start();
        assert!(!chain.is_settling());
        // Well past the old deadline, the replayed chain reports stage
        // boundaries, never the cancelled cycle's completion
        assert_eq!(
            chain.advance(settle_start + STEP),
            Some(StageEvent::LineStarted)
        );
    }

    #[test]
    fn reset_parks_the_chain() {
        let mut chain = TransitionChain::new();
        let t0 = Instant::now();
        chain.start();
        run_to_settle(&mut chain, t0);

        chain.reset();
        assert!(!chain.is_active());
        assert_eq!(chain.value(), 0.0);
        assert_eq!(chain.advance(t0 + STEP * 10), None);
    }
}
