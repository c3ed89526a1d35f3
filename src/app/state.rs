// src/app/state.rs
//! Application state

use iced::time::Instant;

use crate::features::Settings;
use crate::ui::components::{ParticleField, PulseCircle, ToggleSurface};

/// Top-level state: the toggle and the three components observing it
pub struct App {
    pub surface: ToggleSurface,
    pub center_circle: PulseCircle,
    pub outer_circle: PulseCircle,
    pub particles: ParticleField,
    /// Instant the last frame was advanced to; `None` while idle
    pub last_frame: Option<Instant>,
}

impl App {
    /// Build the widget in its closed, resting state
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            surface: ToggleSurface::new(),
            center_circle: PulseCircle::center(&settings.center_circle),
            outer_circle: PulseCircle::outer(&settings.outer_circle),
            particles: ParticleField::new(settings.particles),
            last_frame: None,
        }
    }

    pub fn has_active_animations(&self) -> bool {
        self.center_circle.is_animating()
            || self.outer_circle.is_animating()
            || self.particles.is_animating()
    }

    /// Advance to the frame at `now`, `delta` seconds after the previous one.
    /// Returns true while any component animates.
    pub fn advance(&mut self, delta: f32, now: Instant) -> bool {
        // Advance all three; no short-circuit
        let center = self.center_circle.advance(delta);
        let outer = self.outer_circle.advance(delta);
        let particles = self.particles.advance(now);
        center || outer || particles
    }
}
