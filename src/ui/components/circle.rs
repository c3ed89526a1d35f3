//! Spring-animated circles at the center of the widget

use iced::time::Instant;

use super::toggle_surface::OpenObserver;
use crate::features::CircleSettings;
use crate::ui::animation::Spring;

/// How a circle is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleStyle {
    Filled,
    Outlined,
}

/// A circle whose diameter springs between a closed and an open size
#[derive(Debug, Clone)]
pub struct PulseCircle {
    spring: Spring,
    closed_diameter: f32,
    open_diameter: f32,
    style: CircleStyle,
}

impl PulseCircle {
    /// Circle resting at its closed diameter
    pub fn new(settings: &CircleSettings, style: CircleStyle) -> Self {
        Self {
            spring: Spring::new(settings.closed_diameter as f64, settings.spring_params()),
            closed_diameter: settings.closed_diameter,
            open_diameter: settings.open_diameter,
            style,
        }
    }

    /// The filled center circle
    pub fn center(settings: &CircleSettings) -> Self {
        Self::new(settings, CircleStyle::Filled)
    }

    /// The outlined ring around it
    pub fn outer(settings: &CircleSettings) -> Self {
        Self::new(settings, CircleStyle::Outlined)
    }

    pub fn diameter(&self) -> f32 {
        self.spring.position() as f32
    }

    pub fn target_diameter(&self) -> f32 {
        self.spring.target() as f32
    }

    pub fn style(&self) -> CircleStyle {
        self.style
    }

    pub fn is_animating(&self) -> bool {
        self.spring.is_animating()
    }

    /// Advance the spring by `delta` seconds. Returns true while moving.
    pub fn advance(&mut self, delta: f32) -> bool {
        self.spring.update(delta as f64)
    }
}

impl OpenObserver for PulseCircle {
    fn open_changed(&mut self, open: bool, _at: Instant) {
        let target = if open {
            self.open_diameter
        } else {
            self.closed_diameter
        };
        self.spring.set_target(target as f64);
    }
}
