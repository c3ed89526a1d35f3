//! Colors and styles for the burst widget

use iced::widget::container;
use iced::{Background, Color, Theme, color};

/// Window background
pub const BACKGROUND: Color = color!(0x1f222b);

/// Fill of the center circle and outline of the outer ring
pub const ACCENT_RED: Color = color!(0xdb4858);

/// Border colors a particle may be drawn with
pub const PARTICLE_COLORS: [Color; 3] = [
    color!(0xca8d95), // dusty pink
    color!(0xc54150),
    color!(0xbe404f),
];

/// Outline width of the outer ring
pub const OUTER_RING_WIDTH: f32 = 2.0;

/// Full-window backdrop behind the canvas
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        ..Default::default()
    }
}
