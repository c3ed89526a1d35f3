//! Application messages

use iced::time::Instant;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// The surface was pressed anywhere
    Toggle,
    /// A frame is about to be drawn while animations run
    AnimationTick(Instant),
}
