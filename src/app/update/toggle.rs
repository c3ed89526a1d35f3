// src/app/update/toggle.rs
//! Tap handling - flips the surface and notifies every component

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::OpenObserver;

impl App {
    /// Handle presses on the toggle surface
    pub fn handle_toggle(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Toggle => {
                self.toggle_at(Instant::now());
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Flip the open state as of `now`
    ///
    /// `now` becomes the reference for the next frame delta, so time spent
    /// idle before the tap is never replayed into the new animations.
    pub fn toggle_at(&mut self, now: Instant) {
        let mut observers: [&mut dyn OpenObserver; 3] = [
            &mut self.center_circle,
            &mut self.outer_circle,
            &mut self.particles,
        ];
        let open = self.surface.toggle(now, &mut observers);

        if self.last_frame.is_none() {
            self.last_frame = Some(now);
        }

        tracing::info!(
            "Surface toggled: open={} center->{} outer->{} (generation {})",
            open,
            self.center_circle.target_diameter(),
            self.outer_circle.target_diameter(),
            self.particles.generation().value()
        );
    }
}
