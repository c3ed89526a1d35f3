//! Damped spring driving the circle diameters
//!
//! Positions are evaluated from a closed-form solution of the damped
//! oscillator, so a frame of any length lands exactly on the curve.
//!
//! ## Parameters
//!
//! | Preset | damping ratio | stiffness |
//! |--------|---------------|-----------|
//! | Center circle | 1.0 | 1500 (medium) |
//! | Outer circle | 1.0 | 200 (low) |
//!
//! ## Solutions
//!
//! With `delta = to - from` and `v0` the velocity at retarget time:
//!
//! ### Critically / over-damped (`ratio >= 1`)
//! ```text
//! w = -sqrt(stiffness / mass)
//! leftover = -w * delta - v0
//! position(t) = to - (delta + t * leftover) * e^(t * w)
//! ```
//!
//! ### Under-damped (`ratio < 1`)
//! ```text
//! wd = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * v0) / wd
//! position(t) = to - (cos(t * wd / 2m) * delta + sin(t * wd / 2m) * leftover) * e^(-t * damping / 2m)
//! ```

use std::f64::consts::E;
use std::sync::Arc;

pub type Num = f64;

/// Step for the central-difference velocity estimate
const H: Num = 0.001;

/// Distance and speed under which the spring counts as settled
const REST_THRESHOLD: Num = 0.01;

/// Physical spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    pub const STIFFNESS_MEDIUM: Num = 1500.0;
    pub const STIFFNESS_LOW: Num = 200.0;

    /// Build params from a damping ratio (1.0 = critical) and stiffness, unit mass
    pub fn from_ratio(damping_ratio: Num, stiffness: Num) -> Self {
        let mass = 1.0;
        Self {
            mass,
            damping: damping_ratio * 2.0 * (stiffness * mass).sqrt(),
            stiffness,
        }
    }

    pub fn damping_ratio(&self) -> Num {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping_ratio()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::from_ratio(1.0, Self::STIFFNESS_MEDIUM)
    }
}

type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let SpringParams {
        mass,
        damping,
        stiffness,
    } = *params;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| to - (delta + t * leftover) * E.powf(t * angular_frequency))
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        })
    }
}

fn derivative(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// Retargetable spring value
///
/// Changing the target mid-flight restarts the solver from the current
/// position and velocity, so motion stays continuous.
#[derive(Clone)]
pub struct Spring {
    position: Num,
    target: Num,
    /// Seconds since the solver was last reset
    time: Num,
    params: SpringParams,
    solver: SolverFn,
    velocity_fn: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("position", &self.position)
            .field("target", &self.target)
            .field("time", &self.time)
            .field("params", &self.params)
            .finish()
    }
}

impl Spring {
    /// Spring at rest at `position`
    pub fn new(position: Num, params: SpringParams) -> Self {
        Self {
            position,
            target: position,
            time: 0.0,
            params,
            solver: Arc::new(move |_| position),
            velocity_fn: Arc::new(|_| 0.0),
        }
    }

    pub fn position(&self) -> Num {
        self.position
    }

    pub fn target(&self) -> Num {
        self.target
    }

    pub fn velocity(&self) -> Num {
        (self.velocity_fn)(self.time)
    }

    /// Retarget from the current position and velocity
    pub fn set_target(&mut self, target: Num) {
        let velocity = self.velocity();
        self.target = target;
        self.time = 0.0;
        self.solver = solve_spring(self.position, velocity, target, &self.params);
        self.velocity_fn = derivative(Arc::clone(&self.solver));
    }

    /// Jump to `position` and stop
    pub fn snap_to(&mut self, position: Num) {
        self.position = position;
        self.target = position;
        self.time = 0.0;
        self.solver = Arc::new(move |_| position);
        self.velocity_fn = Arc::new(|_| 0.0);
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < REST_THRESHOLD
            && self.velocity().abs() < REST_THRESHOLD
    }

    /// True until the spring has settled and snapped onto its target
    pub fn is_animating(&self) -> bool {
        self.position != self.target || self.velocity() != 0.0
    }

    /// Advance by `delta` seconds. Returns true while still moving.
    pub fn update(&mut self, delta: Num) -> bool {
        if !self.is_animating() {
            return false;
        }

        self.time += delta;
        self.position = (self.solver)(self.time);

        if self.is_at_rest() {
            self.snap_to(self.target);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio_critical() {
        let params = SpringParams::from_ratio(1.0, 100.0);
        assert_eq!(params.mass, 1.0);
        assert!((params.damping - 20.0).abs() < 1e-9);
        assert!((params.damping_ratio() - 1.0).abs() < 1e-9);
        assert!(params.is_overdamped());
        assert!(!SpringParams::from_ratio(0.5, 100.0).is_overdamped());
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::new(50.0, SpringParams::default());
        spring.set_target(70.0);

        assert!(spring.update(0.01));
        let pos = spring.position();
        assert!(pos > 50.0, "spring should leave its start: {pos}");
        assert!(pos < 70.0, "critically damped spring should not reach target yet: {pos}");
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let params = SpringParams::from_ratio(1.0, SpringParams::STIFFNESS_LOW);
        let mut spring = Spring::new(70.0, params);
        spring.set_target(90.0);

        let mut frames = 0;
        while spring.update(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        assert_eq!(spring.position(), 90.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_large_step_lands_on_target() {
        let mut spring = Spring::new(50.0, SpringParams::default());
        spring.set_target(70.0);
        assert!(!spring.update(5.0));
        assert_eq!(spring.position(), 70.0);
    }

    #[test]
    fn test_overdamped_never_overshoots() {
        let mut spring = Spring::new(0.0, SpringParams::from_ratio(1.5, 300.0));
        spring.set_target(100.0);
        for _ in 0..600 {
            spring.update(1.0 / 60.0);
            assert!(spring.position() <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_underdamped_overshoots() {
        let mut spring = Spring::new(0.0, SpringParams::from_ratio(0.2, 200.0));
        spring.set_target(100.0);
        let mut max: Num = 0.0;
        for _ in 0..120 {
            spring.update(1.0 / 60.0);
            max = max.max(spring.position());
        }
        assert!(max > 100.0, "bouncy spring should overshoot, peaked at {max}");
    }

    #[test]
    fn test_retarget_keeps_position_and_velocity() {
        let mut spring = Spring::new(50.0, SpringParams::default());
        spring.set_target(70.0);
        spring.update(0.03);

        let pos = spring.position();
        let vel = spring.velocity();
        assert!(vel > 0.0);

        spring.set_target(50.0);
        assert_eq!(spring.position(), pos, "retarget must not snap");
        assert!(
            (spring.velocity() - vel).abs() < vel * 0.05,
            "velocity should carry over: {} vs {vel}",
            spring.velocity()
        );

        // Still heading up for a moment before turning around
        spring.update(0.001);
        assert!(spring.position() > pos);

        while spring.update(1.0 / 60.0) {}
        assert_eq!(spring.position(), 50.0);
    }

    #[test]
    fn test_idle_spring_reports_no_motion() {
        let mut spring = Spring::new(50.0, SpringParams::default());
        assert!(spring.is_at_rest());
        assert!(!spring.is_animating());
        assert!(!spring.update(1.0 / 60.0));
        assert_eq!(spring.position(), 50.0);
    }
}
