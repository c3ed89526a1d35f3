//! Radial particles that fly out when the surface opens
//!
//! Particles are generated once per mount in center-relative coordinates:
//! every origin is (0, 0) and the canvas adds the measured layout center when
//! drawing, so the burst stays centered across resizes.
//!
//! Each toggle bumps the field's [`Generation`] and starts, per particle:
//! - x / y tweens toward the opening target or back to the origin
//! - a rotation tween that always restarts from 0 and ends at 360
//! - an opacity snap to 1 (open) or 0 (closed)

use std::ops::Range;

use iced::time::Instant;
use iced::{Color, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::toggle_surface::OpenObserver;
use crate::features::ParticleSettings;
use crate::ui::animation::{Animatable, Generation};
use crate::ui::theme::PARTICLE_COLORS;

pub const PARTICLE_COUNT: usize = 10;

/// Degrees between neighbouring emission angles
pub const ANGLE_STEP: f32 = 360.0 / PARTICLE_COUNT as f32;

pub const PARTICLE_SHAPES: [ParticleShape; 3] = [
    ParticleShape::Triangle,
    ParticleShape::Circle,
    ParticleShape::RoundedRect,
];

/// Edge length of a particle's bounding box
pub const PARTICLE_SIZES: [f32; 3] = [16.0, 20.0, 24.0];

pub const BORDER_WIDTH_RANGE: Range<f32> = 0.5..2.5;

/// Outline drawn for a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    /// Apex at top-center, base along the bottom edge
    Triangle,
    Circle,
    /// Square with zero corner radius
    RoundedRect,
}

/// Immutable description of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub origin: Point,
    /// Emission angle in degrees, 0 pointing right, clockwise on screen
    pub angle: f32,
    pub shape: ParticleShape,
    pub color: Color,
    pub border_width: f32,
    pub size: f32,
}

impl Particle {
    /// Where the particle ends up after travelling `distance` along its angle
    pub fn open_target(&self, distance: f32) -> Point {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        Point::new(
            self.origin.x + cos * distance,
            self.origin.y + sin * distance,
        )
    }
}

/// Generate the fixed ring of particles around `origin`
pub fn generate_particles<R: Rng + ?Sized>(origin: Point, rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|index| Particle {
            origin,
            angle: index as f32 * ANGLE_STEP,
            shape: PARTICLE_SHAPES[rng.random_range(0..PARTICLE_SHAPES.len())],
            color: PARTICLE_COLORS[rng.random_range(0..PARTICLE_COLORS.len())],
            border_width: rng.random_range(BORDER_WIDTH_RANGE),
            size: PARTICLE_SIZES[rng.random_range(0..PARTICLE_SIZES.len())],
        })
        .collect()
}

/// Animated values owned by a single particle
#[derive(Debug)]
struct ParticleMotion {
    x: Animatable,
    y: Animatable,
    rotation: Animatable,
    opacity: Animatable,
}

impl ParticleMotion {
    fn at_rest(particle: &Particle) -> Self {
        Self {
            x: Animatable::new(particle.origin.x),
            y: Animatable::new(particle.origin.y),
            rotation: Animatable::new(0.0),
            opacity: Animatable::new(0.0),
        }
    }

    fn is_running(&self) -> bool {
        self.x.is_running()
            || self.y.is_running()
            || self.rotation.is_running()
            || self.opacity.is_running()
    }
}

/// Snapshot of a particle for drawing
#[derive(Debug, Clone, Copy)]
pub struct ParticleState<'a> {
    pub particle: &'a Particle,
    /// Center-relative position
    pub position: Point,
    /// Degrees
    pub rotation: f32,
    pub opacity: f32,
}

/// The ring of particles and their animations
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    motions: Vec<ParticleMotion>,
    settings: ParticleSettings,
    generation: Generation,
}

impl ParticleField {
    /// Generate particles using the configured seed, or thread entropy
    pub fn new(settings: ParticleSettings) -> Self {
        match settings.seed {
            Some(seed) => Self::with_rng(settings, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(settings, &mut rand::rng()),
        }
    }

    pub fn with_rng<R: Rng + ?Sized>(settings: ParticleSettings, rng: &mut R) -> Self {
        let particles = generate_particles(Point::ORIGIN, rng);
        tracing::debug!(
            "Generated {} particles: {:?}",
            particles.len(),
            particles
                .iter()
                .map(|p| (p.angle, p.shape, p.size))
                .collect::<Vec<_>>()
        );
        let motions = particles.iter().map(ParticleMotion::at_rest).collect();
        Self {
            particles,
            motions,
            settings,
            generation: Generation::default(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Current animated state of every particle, in emission order
    pub fn states(&self) -> impl Iterator<Item = ParticleState<'_>> {
        self.particles
            .iter()
            .zip(&self.motions)
            .map(|(particle, motion)| ParticleState {
                particle,
                position: Point::new(motion.x.value(), motion.y.value()),
                rotation: motion.rotation.value(),
                opacity: motion.opacity.value(),
            })
    }

    pub fn is_animating(&self) -> bool {
        self.motions.iter().any(ParticleMotion::is_running)
    }

    /// Advance every live animation to `now`. Returns true while any runs.
    pub fn advance(&mut self, now: Instant) -> bool {
        let live = self.generation;
        let mut running = false;
        for motion in &mut self.motions {
            running |= motion.x.advance(now, live);
            running |= motion.y.advance(now, live);
            running |= motion.rotation.advance(now, live);
            running |= motion.opacity.advance(now, live);
        }
        running
    }
}

impl OpenObserver for ParticleField {
    fn open_changed(&mut self, open: bool, at: Instant) {
        let live = self.generation.bump();
        let position_spec = self.settings.position_spec();
        let rotation_spec = self.settings.rotation_spec();

        for (particle, motion) in self.particles.iter().zip(&mut self.motions) {
            let target = if open {
                particle.open_target(self.settings.travel_distance)
            } else {
                particle.origin
            };

            motion.x.animate_to(target.x, position_spec, live, at);
            motion.y.animate_to(target.y, position_spec, live, at);
            motion.opacity.snap_to(if open { 1.0 } else { 0.0 });
            motion.rotation.snap_to(0.0);
            motion.rotation.animate_to(360.0, rotation_spec, live, at);
        }

        tracing::debug!(
            "Particle field {} (generation {})",
            if open { "opening" } else { "closing" },
            live.value()
        );
    }
}
