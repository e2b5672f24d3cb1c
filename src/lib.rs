//! TUI Torus (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, integration
//! tests and benches can use `tui_torus::{core,engine,input,term,types}`.

pub use tui_torus_core as core;
pub use tui_torus_engine as engine;
pub use tui_torus_input as input;
pub use tui_torus_term as term;
pub use tui_torus_types as types;
