// src/app/view.rs
//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use crate::ui::components::toggle_surface;
use crate::ui::primitives::{BurstCanvas, burst_canvas};

impl App {
    /// Full-window tap surface with the burst canvas on top
    pub fn view(&self) -> Element<'_, Message> {
        let canvas = burst_canvas::view(BurstCanvas {
            center_circle: &self.center_circle,
            outer_circle: &self.outer_circle,
            particles: &self.particles,
        });

        toggle_surface::view(canvas, Message::Toggle)
    }
}
