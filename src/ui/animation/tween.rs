//! Tween timing: a duration paired with one of iced_anim's easing curves

use std::time::Duration;

use iced_anim::transition::Easing;
use serde::Deserialize;

/// Easing curve selectable from settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    fn easing(self) -> Easing {
        match self {
            Curve::Linear => Easing::LINEAR,
            Curve::Ease => Easing::EASE,
            Curve::EaseIn => Easing::EASE_IN,
            Curve::EaseOut => Easing::EASE_OUT,
            Curve::EaseInOut => Easing::EASE_IN_OUT,
        }
    }
}

/// Duration and curve shared by a group of tweens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub curve: Curve,
}

impl TweenSpec {
    pub fn new(duration: Duration, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// iced_anim easing carrying this spec's duration
    pub fn easing(&self) -> Easing {
        self.curve.easing().with_duration(self.duration)
    }
}
