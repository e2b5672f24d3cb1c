//! Classification of terminal events.

use crossterm::event::{Event, KeyEventKind};

/// What the animation cares about in a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Any key press stops the animation.
    Quit,
    Resize { width: u16, height: u16 },
    Ignore,
}

pub fn classify(event: &Event) -> InputSignal {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => InputSignal::Quit,
        Event::Resize(width, height) => InputSignal::Resize {
            width: *width,
            height: *height,
        },
        _ => InputSignal::Ignore,
    }
}
