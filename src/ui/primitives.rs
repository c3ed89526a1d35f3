//! Primitive UI elements - canvas programs drawing component state
//!
//! Primitives read component state but never mutate it.

pub mod burst_canvas;

pub use burst_canvas::BurstCanvas;
