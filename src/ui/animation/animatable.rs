//! Retargetable animated values tagged with a trigger generation
//!
//! Every trigger change bumps a [`Generation`]. Retargeting an [`Animatable`]
//! replaces its transition outright, which is how a toggle normally cancels
//! the previous one. The tag covers values that are *not* retargeted by the
//! new trigger: a transition started for an older generation is frozen the
//! next time it is advanced, before it can commit another value.

use iced::time::Instant;
use iced_anim::Animated;
use iced_anim::transition::Easing;

use super::tween::TweenSpec;

/// Monotonic marker for the trigger that started an animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Advance to the next generation and return it
    pub fn bump(&mut self) -> Generation {
        self.0 = self.0.wrapping_add(1);
        *self
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// A float that can snap or transition toward a target
#[derive(Debug)]
pub struct Animatable {
    animated: Animated<f32>,
    /// Generation of the running transition; `None` while at rest
    running: Option<Generation>,
}

fn at_rest(value: f32) -> Animated<f32> {
    Animated::transition(value, Easing::LINEAR)
}

impl Animatable {
    pub fn new(value: f32) -> Self {
        Self {
            animated: at_rest(value),
            running: None,
        }
    }

    pub fn value(&self) -> f32 {
        *self.animated.value()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Start a transition from the current value, replacing any in-flight one
    ///
    /// The transition's clock starts at `now`.
    pub fn animate_to(
        &mut self,
        target: f32,
        spec: TweenSpec,
        generation: Generation,
        now: Instant,
    ) {
        let current = self.value();
        self.animated = Animated::transition(current, spec.easing());
        self.animated.update(target.into());
        self.animated.tick(now);
        self.running = Some(generation);
    }

    /// Jump to `value`, cancelling any in-flight transition
    pub fn snap_to(&mut self, value: f32) {
        self.animated = at_rest(value);
        self.running = None;
    }

    /// Advance to `now` under the `live` generation.
    ///
    /// Returns true while a transition of the live generation is unfinished.
    pub fn advance(&mut self, now: Instant, live: Generation) -> bool {
        let Some(generation) = self.running else {
            return false;
        };

        if generation != live {
            self.snap_to(self.value());
            return false;
        }

        self.animated.tick(now);
        let unfinished = self.animated.is_animating();
        if !unfinished {
            self.running = None;
        }
        unfinished
    }
}
