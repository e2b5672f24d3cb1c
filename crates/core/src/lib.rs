//! Core rendering module - pure, deterministic, and testable
//!
//! This crate turns a pair of rotation angles into a grid of glyphs. It has
//! **zero dependencies** on terminals, input or timing, which makes it:
//!
//! - **Deterministic**: the same orientation always yields a bit-identical frame
//! - **Testable**: every stage of the pipeline is reachable from unit tests
//! - **Fast**: `FrameRenderer::compute` does not allocate
//!
//! # Module Structure
//!
//! - [`buffers`]: flat glyph/depth arenas with bounds-checked indexing
//! - [`projection`]: perspective scale `K1` and screen-space projection
//! - [`sampler`]: (theta, phi) sweep over the torus surface
//! - [`shading`]: luminance to glyph mapping
//! - [`renderer`]: depth-tested compositing of samples into the buffers
//!
//! # Example
//!
//! ```
//! use tui_torus_core::{FrameBuffers, FrameRenderer};
//! use tui_torus_types::{Orientation, TorusConfig};
//!
//! let config = TorusConfig::default();
//! let renderer = FrameRenderer::new(&config);
//! let mut buffers = FrameBuffers::new(config.grid_size);
//!
//! renderer.compute(Orientation::new(0.0, 0.0), &mut buffers);
//! assert!(buffers.occupied_count() > 0);
//! ```

pub mod buffers;
pub mod projection;
pub mod renderer;
pub mod sampler;
pub mod shading;

pub use tui_torus_types as types;

pub use buffers::FrameBuffers;
pub use projection::Projection;
pub use renderer::FrameRenderer;
pub use sampler::{SampleIter, SurfaceSample};
pub use shading::{glyph_for_luminance, luminance_index};
