//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

pub use message::Message;
pub use state::App;

use crate::features::Settings;

impl App {
    /// Create the application in its closed state
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let app = Self::from_settings(settings);
        tracing::info!(
            "Mounted burst widget with {} particles",
            app.particles.particles().len()
        );
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        if self.surface.is_open() {
            "Circle Burst - open".to_string()
        } else {
            "Circle Burst".to_string()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Frame ticks only while something is moving
    pub fn subscription(&self) -> Subscription<Message> {
        if self.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}
