//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, Scenario};

use crate::features::Settings;
use crate::ui::spinner::DashSpinner;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // Settings carry the whole spinner configuration surface; the
        // style is resolved once and stays fixed for the spinner's life
        let settings = Settings::load();
        if Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("failed to write default settings: {}", e);
            }
        }
        let spinner = DashSpinner::new(settings.spinner.to_style());
        tracing::info!("settings loaded, spinner configured");

        let app = Self {
            settings,
            spinner,
            scenario: None,
            progress: 0.0,
            toast: None,
        };

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Dash Spinner".to_string()
    }

    /// Subscriptions for the fake download and the animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        let (needs_frames, needs_demo_tick) = subscription_logic::decisions(
            self.spinner.needs_frames(),
            self.scenario.is_some(),
        );

        // Animation frames (vsync rate) while anything is moving
        let frames_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // The fake download advances 1% every 30 ms
        let demo_sub = if needs_demo_tick {
            iced::time::every(Duration::from_millis(30)).map(|_| Message::DemoTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([frames_sub, demo_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frame_subscription(spinner_needs_frames: bool) -> bool {
        spinner_needs_frames
    }

    pub fn needs_demo_subscription(scenario_active: bool) -> bool {
        scenario_active
    }

    pub fn decisions(spinner_needs_frames: bool, scenario_active: bool) -> (bool, bool) {
        (
            needs_frame_subscription(spinner_needs_frames),
            needs_demo_subscription(scenario_active),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_follow_the_spinner_not_the_scenario() {
        // A transition keeps animating after the fake download stops
        let (frames, demo) = decisions(true, false);
        assert!(frames, "spinner animation keeps the frame subscription");
        assert!(!demo, "no demo tick once the scenario resolved");
    }

    #[test]
    fn demo_tick_runs_alongside_frames_while_downloading() {
        let (frames, demo) = decisions(true, true);
        assert!(frames && demo, "both subscriptions coexist mid-download");
    }

    #[test]
    fn everything_idle_needs_no_subscriptions() {
        let (frames, demo) = decisions(false, false);
        assert!(!frames && !demo);
    }

    #[test]
    fn subscriptions_are_independent() {
        assert!(needs_frame_subscription(true));
        assert!(needs_frame_subscription(true) && needs_demo_subscription(true));
        assert!(!needs_demo_subscription(false));
    }
}
