//! Terminal input module.
//!
//! The animation only needs to know two things from the keyboard and the
//! terminal: that a key was pressed (stop) and that the window was resized.
//! [`map`] classifies crossterm events, [`listener`] runs the blocking event
//! loop as its own task and forwards those signals over tokio channels.

pub mod listener;
pub mod map;

pub use tui_torus_types as types;

pub use listener::{run_listener, spawn_listener, CrosstermEvents, EventSource, ListenerExit};
pub use map::{classify, InputSignal};
