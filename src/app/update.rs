//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod toggle;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to the matching submodule handler
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_toggle(&message) {
            return task;
        }
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }

        Task::none()
    }
}
