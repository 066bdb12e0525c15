//! Application state

use crate::features::Settings;
use crate::ui::spinner::DashSpinner;
use crate::ui::widgets::Toast;

/// Scripted fake download driven by the demo tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Run to 100%, then show success
    Success,
    /// Run to 50%, then show failure
    Failure,
}

impl Scenario {
    /// Progress beyond which the scenario resolves into its outcome
    pub fn threshold(self) -> f32 {
        match self {
            Scenario::Success => 1.0,
            Scenario::Failure => 0.5,
        }
    }
}

/// Application state
pub struct App {
    /// Loaded preferences, including the spinner configuration
    pub settings: Settings,
    /// The widget under demonstration
    pub spinner: DashSpinner,
    /// Currently running fake download, if any
    pub scenario: Option<Scenario>,
    /// Raw (unclamped) progress of the fake download
    pub progress: f32,
    /// Completion toast, shown after a cycle settles
    pub toast: Option<Toast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_match_the_scripted_runs() {
        assert_eq!(Scenario::Success.threshold(), 1.0);
        assert_eq!(Scenario::Failure.threshold(), 0.5);
    }
}
