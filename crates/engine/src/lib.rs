//! Animation engine.
//!
//! Owns the rotating orientation and drives [`tui_torus_core::FrameRenderer`]
//! at a fixed cadence, handing each frame to a [`Surface`]. The loop runs
//! until the input task raises its one-shot cancellation.

pub mod animation;
pub mod surface;

pub use tui_torus_core as core;
pub use tui_torus_term as term;
pub use tui_torus_types as types;

pub use animation::{Animation, LoopState};
pub use surface::Surface;
