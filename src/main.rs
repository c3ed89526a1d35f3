//! Circle Burst - a tap-to-expand circle with radial particles
//! Built with iced; tap anywhere to open or close

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = features::Settings::load();
    let window_size = iced::Size::new(settings.window.width, settings.window.height);
    tracing::info!("Starting with window size {:?}", window_size);

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(window_size)
    .antialiasing(true)
    .run()
    .context("event loop exited with an error")
}
