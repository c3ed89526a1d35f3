//! Full-window tap target that owns the open/closed state
//!
//! The surface is the only writer of `is_open`. Components that react to it
//! implement [`OpenObserver`] and are handed to [`ToggleSurface::set`] or
//! [`ToggleSurface::toggle`], which notify them only on an actual change.

use iced::time::Instant;
use iced::widget::{container, mouse_area};
use iced::{Element, Fill};

use crate::ui::theme;

/// Reacts to the surface flipping between open and closed
pub trait OpenObserver {
    /// `at` is the instant of the change; time-based animations start from it
    fn open_changed(&mut self, open: bool, at: Instant);
}

/// Open/closed state holder
#[derive(Debug, Default)]
pub struct ToggleSurface {
    is_open: bool,
}

impl ToggleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Invert the state and notify observers. Returns the new state.
    pub fn toggle(&mut self, at: Instant, observers: &mut [&mut dyn OpenObserver]) -> bool {
        let open = !self.is_open;
        self.set(open, at, observers);
        open
    }

    /// Set the state, notifying observers if it changed. Returns whether it changed.
    pub fn set(
        &mut self,
        open: bool,
        at: Instant,
        observers: &mut [&mut dyn OpenObserver],
    ) -> bool {
        if self.is_open == open {
            return false;
        }
        self.is_open = open;
        for observer in observers.iter_mut() {
            observer.open_changed(open, at);
        }
        true
    }
}

/// Wrap `content` in a full-window backdrop that emits `on_tap` when pressed
pub fn view<'a, Message: Clone + 'a>(
    content: impl Into<Element<'a, Message>>,
    on_tap: Message,
) -> Element<'a, Message> {
    mouse_area(
        container(content)
            .width(Fill)
            .height(Fill)
            .style(theme::surface),
    )
    .on_press(on_tap)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<bool>,
    }

    impl OpenObserver for Recorder {
        fn open_changed(&mut self, open: bool, _at: Instant) {
            self.seen.push(open);
        }
    }

    #[test]
    fn test_starts_closed() {
        assert!(!ToggleSurface::new().is_open());
    }

    #[test]
    fn test_toggle_flips_and_notifies_all() {
        let mut surface = ToggleSurface::new();
        let mut a = Recorder::default();
        let mut b = Recorder::default();
        let now = Instant::now();

        assert!(surface.toggle(now, &mut [&mut a, &mut b]));
        assert!(surface.is_open());
        assert!(!surface.toggle(now, &mut [&mut a, &mut b]));
        assert!(!surface.is_open());

        assert_eq!(a.seen, vec![true, false]);
        assert_eq!(b.seen, vec![true, false]);
    }

    #[test]
    fn test_setting_same_value_is_silent() {
        let mut surface = ToggleSurface::new();
        let mut recorder = Recorder::default();
        let now = Instant::now();

        assert!(!surface.set(false, now, &mut [&mut recorder]));
        assert!(surface.set(true, now, &mut [&mut recorder]));
        assert!(!surface.set(true, now, &mut [&mut recorder]));
        assert_eq!(recorder.seen, vec![true]);
    }
}
