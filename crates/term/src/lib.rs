//! Terminal display module.
//!
//! A small rendering layer for the torus animation. It renders into a
//! simple framebuffer that is flushed to a crossterm backend, without any
//! widget or layout library.
//!
//! - [`TorusView`] crops the renderer's square glyph grid onto the terminal
//! - [`FrameBuffer`] holds one frame of glyph cells
//! - [`TerminalRenderer`] owns raw mode / alternate screen and diff-flushes frames

pub mod error;
pub mod fb;
pub mod renderer;
pub mod torus_view;

pub use tui_torus_core as core;
pub use tui_torus_types as types;

pub use error::TermError;
pub use fb::{FrameBuffer, BLANK_CELL};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, FALLBACK_SIZE};
pub use torus_view::{TorusView, Viewport};
