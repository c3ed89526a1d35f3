//! Feature modules - non-visual logic separated from UI rendering

pub mod settings;

pub use settings::{CircleSettings, ParticleSettings, Settings};
