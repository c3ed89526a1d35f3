// src/app/update/animation.rs
//! Frame ticks - advances every component by the elapsed frame time

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation frame ticks
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick(now) => {
                self.tick(*now);
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Advance to the frame at `now`
    pub fn tick(&mut self, now: Instant) {
        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);

        let still_animating = self.advance(delta, now);
        self.last_frame = still_animating.then_some(now);

        if !still_animating {
            tracing::debug!("Animations settled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use crate::app::{App, Message};
    use crate::features::{CircleSettings, Settings};
    use crate::ui::components::{OpenObserver, PulseCircle};

    fn test_app() -> App {
        let mut settings = Settings::default();
        settings.particles.seed = Some(3);
        App::from_settings(settings)
    }

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tick_while_idle_is_a_no_op() {
        let mut app = test_app();
        let _ = app.update(Message::AnimationTick(Instant::now()));
        assert!(app.last_frame.is_none());
        assert_eq!(app.center_circle.diameter(), 50.0);
    }

    #[test]
    fn test_open_then_close_end_to_end() {
        let mut app = test_app();
        let start = Instant::now();

        // Tap, then let a full tween duration elapse in frames
        app.toggle_at(start);
        let mut now = start;
        for _ in 0..200 {
            now += Duration::from_millis(16);
            let _ = app.update(Message::AnimationTick(now));
        }
        assert!(!app.has_active_animations());
        assert!(app.last_frame.is_none());

        assert_eq!(app.center_circle.diameter(), 70.0);
        assert_eq!(app.outer_circle.diameter(), 90.0);
        for state in app.particles.states() {
            let target = state.particle.open_target(1500.0);
            assert_close(state.position.x, target.x, 1e-2);
            assert_close(state.position.y, target.y, 1e-2);
            assert_close(state.rotation, 360.0, 1e-3);
            assert_eq!(state.opacity, 1.0);
        }

        // Second tap reverses targets; rotation restarts from 0
        let closing = Instant::now();
        app.toggle_at(closing);
        assert!(app.particles.states().all(|s| s.rotation.abs() < 0.5));
        assert!(app.particles.states().all(|s| s.opacity == 0.0));

        let _ = app.update(Message::AnimationTick(closing + Duration::from_millis(1500)));
        for state in app.particles.states() {
            assert_close(state.rotation, 180.0, 0.5);
        }

        let _ = app.update(Message::AnimationTick(closing + Duration::from_millis(3100)));
        assert!(!app.has_active_animations());
        assert_eq!(app.center_circle.diameter(), 50.0);
        assert_eq!(app.outer_circle.diameter(), 70.0);
        for state in app.particles.states() {
            assert_close(state.position.x, 0.0, 1e-2);
            assert_close(state.position.y, 0.0, 1e-2);
            assert_close(state.rotation, 360.0, 1e-3);
        }
    }

    #[test]
    fn test_first_frame_measures_from_the_tap() {
        let mut app = test_app();
        let tap = Instant::now();

        app.toggle_at(tap);
        assert_eq!(app.last_frame, Some(tap));
        let _ = app.update(Message::AnimationTick(tap + Duration::from_millis(16)));

        // Exactly one 16 ms spring step, however long the app sat idle before
        let mut reference = PulseCircle::center(&CircleSettings::center_default());
        reference.open_changed(true, tap);
        reference.advance(0.016);
        assert_close(app.center_circle.diameter(), reference.diameter(), 1e-3);

        // 16 ms of a 3 s linear flight
        let first = app.particles.states().next().unwrap();
        assert_close(first.position.x, 8.0, 1.0);
        assert!(app.has_active_animations());
    }
}
