//! UI module for the burst widget
//!
//! # Architecture
//!
//! - **Animation** (`animation`): springs, tweens and generation-tagged values
//! - **Components** (`components`): toggle surface, circles and particle field
//! - **Primitives** (`primitives`): the canvas program that paints them

pub mod animation;
pub mod components;
pub mod primitives;
pub mod theme;
