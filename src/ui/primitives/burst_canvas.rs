//! Canvas program painting the circles and particles
//!
//! Everything is drawn relative to the center of the canvas bounds, which is
//! the layout center of the widget.

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke};
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

use crate::ui::components::{CircleStyle, ParticleField, ParticleShape, ParticleState, PulseCircle};
use crate::ui::theme;

/// Borrowed view of the widget state for one frame
#[derive(Debug, Clone, Copy)]
pub struct BurstCanvas<'a> {
    pub center_circle: &'a PulseCircle,
    pub outer_circle: &'a PulseCircle,
    pub particles: &'a ParticleField,
}

impl<Message> Program<Message> for BurstCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();

        draw_circle(&mut frame, center, self.center_circle);
        draw_circle(&mut frame, center, self.outer_circle);

        for state in self.particles.states() {
            draw_particle(&mut frame, center, &state);
        }

        vec![frame.into_geometry()]
    }
}

fn draw_circle(frame: &mut Frame, center: Point, circle: &PulseCircle) {
    let radius = (circle.diameter() / 2.0).max(0.0);
    match circle.style() {
        CircleStyle::Filled => {
            frame.fill(&Path::circle(center, radius), theme::ACCENT_RED);
        }
        CircleStyle::Outlined => {
            // Keep the stroke inside the diameter
            let radius = (radius - theme::OUTER_RING_WIDTH / 2.0).max(0.0);
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(theme::OUTER_RING_WIDTH)
                    .with_color(theme::ACCENT_RED),
            );
        }
    }
}

/// Rotation pivots on the layout center, so a turning particle also orbits it
fn draw_particle(frame: &mut Frame, center: Point, state: &ParticleState<'_>) {
    if state.opacity <= 0.0 {
        return;
    }

    let particle = state.particle;
    let color = Color {
        a: state.opacity,
        ..particle.color
    };

    frame.with_save(|frame| {
        frame.translate(Vector::new(center.x, center.y));
        frame.rotate(state.rotation.to_radians());
        frame.translate(Vector::new(state.position.x, state.position.y));

        let path = shape_path(particle.shape, particle.size);
        frame.stroke(
            &path,
            Stroke::default()
                .with_width(particle.border_width)
                .with_color(color),
        );
    });
}

/// Outline of `shape` in a `size` square centered on the origin
fn shape_path(shape: ParticleShape, size: f32) -> Path {
    let half = size / 2.0;
    match shape {
        ParticleShape::Triangle => Path::new(|builder| {
            builder.move_to(Point::new(0.0, -half));
            builder.line_to(Point::new(half, half));
            builder.line_to(Point::new(-half, half));
            builder.close();
        }),
        ParticleShape::Circle => Path::circle(Point::ORIGIN, half),
        ParticleShape::RoundedRect => {
            Path::rectangle(Point::new(-half, -half), Size::new(size, size))
        }
    }
}

/// Full-size canvas element for the widget
pub fn view<'a, Message: 'a>(burst: BurstCanvas<'a>) -> Element<'a, Message> {
    Canvas::new(burst).width(Fill).height(Fill).into()
}
