//! Animation primitives for the burst widget
//!
//! - [`Spring`]: closed-form damped spring, retargetable mid-flight
//! - [`TweenSpec`]: duration plus a [`Curve`], turned into an `iced_anim` easing
//! - [`Animatable`]: an `iced_anim` transition that snaps or tweens, cancelled by [`Generation`]

mod animatable;
mod spring;
mod tween;

pub use animatable::{Animatable, Generation};
pub use spring::{Spring, SpringParams};
pub use tween::{Curve, TweenSpec};
