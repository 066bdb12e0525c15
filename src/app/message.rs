//! Application messages

use crate::ui::spinner::SpinnerMode;

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // ============ Scenario buttons ============
    /// Run the fake download to 100% and show success
    RunSuccess,
    /// Run the fake download to 50% and show failure
    RunFailure,
    /// Trigger an unknown error immediately
    RunUnknown,

    // ============ Ticks ============
    /// Fake-download progress step (30 ms cadence)
    DemoTick,
    /// Animation frame
    AnimationTick,

    // ============ Completion ============
    /// The spinner finished intimating an outcome to the user
    IntimationDone(SpinnerMode),
    /// Hide the completion toast
    DismissToast,
}
