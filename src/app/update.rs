//! Message update handlers

use std::time::Instant;

use iced::Task;
use iced::time::Duration;

use super::{App, Message, Scenario};
use crate::ui::spinner::SpinnerMode;
use crate::ui::widgets::Toast;

/// Progress step per demo tick (1% every 30 ms)
const DEMO_STEP: f32 = 0.01;
/// How long the completion toast stays visible
const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    /// Handle messages
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RunSuccess => self.start_scenario(Some(Scenario::Success)),
            Message::RunFailure => self.start_scenario(Some(Scenario::Failure)),
            Message::RunUnknown => {
                self.start_scenario(None);
                tracing::info!("triggering unknown outcome");
                self.spinner.show_unknown();
                Task::none()
            }

            Message::DemoTick => {
                self.progress += DEMO_STEP;
                self.spinner.set_progress(self.progress);
                if let Some(scenario) = self.scenario {
                    if self.progress > scenario.threshold() {
                        self.scenario = None;
                        match scenario {
                            Scenario::Success => {
                                tracing::info!("fake download finished, showing success");
                                self.spinner.show_success();
                            }
                            Scenario::Failure => {
                                tracing::info!("fake download failed, showing failure");
                                self.spinner.show_failure();
                            }
                        }
                    }
                }
                Task::none()
            }

            Message::AnimationTick => {
                if let Some(mode) = self.spinner.tick(Instant::now()) {
                    return Task::done(Message::IntimationDone(mode));
                }
                Task::none()
            }

            Message::IntimationDone(mode) => {
                tracing::info!(?mode, "download intimation done");
                self.toast = Some(match mode {
                    SpinnerMode::Success => Toast::success("Download Successful!"),
                    SpinnerMode::Failure => Toast::failure("Download Failed!"),
                    _ => Toast::unknown("Unknown Download Error!"),
                });
                Task::perform(tokio::time::sleep(TOAST_DURATION), |_| Message::DismissToast)
            }

            Message::DismissToast => {
                self.toast = None;
                Task::none()
            }
        }
    }

    /// Reset the widget and the fake download before a new run
    fn start_scenario(&mut self, scenario: Option<Scenario>) -> Task<Message> {
        self.spinner.reset();
        self.progress = 0.0;
        self.toast = None;
        self.scenario = scenario;
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::ToastStyle;

    fn app() -> App {
        // Built directly from defaults so tests never touch the
        // on-disk settings document
        let settings = crate::features::Settings::default();
        let spinner = crate::ui::spinner::DashSpinner::new(settings.spinner.to_style());
        App {
            settings,
            spinner,
            scenario: None,
            progress: 0.0,
            toast: None,
        }
    }

    #[test]
    fn failure_scenario_resolves_past_half() {
        let mut app = app();
        let _ = app.update(Message::RunFailure);
        assert_eq!(app.scenario, Some(Scenario::Failure));

        // 50 ticks reach exactly the threshold; the 51st crosses it
        for _ in 0..51 {
            let _ = app.update(Message::DemoTick);
        }
        assert_eq!(app.scenario, None, "scenario consumed at the threshold");
        assert_eq!(app.spinner.mode(), SpinnerMode::TransitionTextAndCircle);
        assert_eq!(app.spinner.next_mode(), SpinnerMode::Failure);
    }

    #[test]
    fn unknown_scenario_skips_the_download() {
        let mut app = app();
        let _ = app.update(Message::RunUnknown);
        assert_eq!(app.scenario, None);
        assert_eq!(app.spinner.next_mode(), SpinnerMode::Unknown);
    }

    #[tokio::test]
    async fn starting_a_run_clears_previous_state() {
        let mut app = app();
        let _ = app.update(Message::RunUnknown);
        let _ = app.update(Message::IntimationDone(SpinnerMode::Unknown));
        assert!(app.toast.is_some());

        let _ = app.update(Message::RunSuccess);
        assert!(app.toast.is_none(), "a new run dismisses the old toast");
        assert_eq!(app.progress, 0.0);
        assert_eq!(app.spinner.mode(), SpinnerMode::None);
    }

    #[tokio::test]
    async fn completion_raises_the_matching_toast() {
        let mut app = app();
        for (mode, style) in [
            (SpinnerMode::Success, ToastStyle::Success),
            (SpinnerMode::Failure, ToastStyle::Failure),
            (SpinnerMode::Unknown, ToastStyle::Unknown),
        ] {
            let _ = app.update(Message::IntimationDone(mode));
            assert_eq!(app.toast.as_ref().map(|t| t.style), Some(style));
        }
    }

    #[tokio::test]
    async fn dismiss_clears_the_toast() {
        let mut app = app();
        let _ = app.update(Message::IntimationDone(SpinnerMode::Success));
        let _ = app.update(Message::DismissToast);
        assert!(app.toast.is_none());
    }
}
