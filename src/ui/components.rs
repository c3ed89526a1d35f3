//! Widget components - each owns its own animation state
//!
//! None of the components reads another's state. They all observe the
//! [`ToggleSurface`] through [`OpenObserver`].

pub mod circle;
pub mod particle_field;
pub mod toggle_surface;

pub use circle::{CircleStyle, PulseCircle};
pub use particle_field::{ParticleField, ParticleShape, ParticleState};
pub use toggle_surface::{OpenObserver, ToggleSurface};
