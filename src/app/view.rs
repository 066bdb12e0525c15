//! Application view

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::{App, Message};
use crate::ui::spinner::view_dash_spinner;
use crate::ui::theme;
use crate::ui::widgets::view_toast;

/// Canvas side length for the spinner
const SPINNER_SIZE: f32 = 240.0;

impl App {
    /// Build the demo layout: spinner, scenario buttons, toast area
    pub fn view(&self) -> Element<'_, Message> {
        let spinner = view_dash_spinner(&self.spinner, SPINNER_SIZE);

        let controls = row![
            scenario_button("Success", theme::SUCCESS_GREEN, Message::RunSuccess),
            scenario_button("Failure", theme::FAILURE_RED, Message::RunFailure),
            scenario_button("Unknown", theme::UNKNOWN_ORANGE, Message::RunUnknown),
        ]
        .spacing(16);

        // Reserve the toast row so the layout does not jump
        let toast_area: Element<'_, Message> = match &self.toast {
            Some(toast) => view_toast(toast),
            None => Space::new().height(48).into(),
        };

        let content = column![
            spinner,
            Space::new().height(32),
            controls,
            Space::new().height(24),
            toast_area,
        ]
        .align_x(Alignment::Center);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::main_content)
            .into()
    }
}

/// A rounded button tinted with the outcome it triggers
fn scenario_button(
    label: &str,
    accent: iced::Color,
    on_press: Message,
) -> Element<'_, Message> {
    button(text(label).size(14))
        .padding(iced::Padding::new(10.0).left(22.0).right(22.0))
        .style(theme::scenario_button(accent))
        .on_press(on_press)
        .into()
}
