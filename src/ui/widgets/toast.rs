//! Toast notification widget
//!
//! Minimalist floating toast: surface background, a thin accent bar and
//! an accent-colored icon, message text beside them.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification style, one per spinner outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Failure,
    Unknown,
}

impl ToastStyle {
    /// Accent color for this style (used for the bar and icon only)
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::SUCCESS_GREEN,
            ToastStyle::Failure => theme::FAILURE_RED,
            ToastStyle::Unknown => theme::UNKNOWN_ORANGE,
        }
    }

    /// Icon for this style
    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Failure => "✗",
            ToastStyle::Unknown => "!",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Failure)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Unknown)
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let accent_color = toast.style.accent_color();

    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(toast.style.icon()).size(14).color(accent_color);

    let message_widget = text(toast.message.clone()).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content).style(theme::toast_container).into()
}
