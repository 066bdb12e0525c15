//! Dash Spinner - an animated circular download indicator
//! Built with iced; the demo drives the widget through its three outcomes

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(480.0, 560.0))
        .run()
}
