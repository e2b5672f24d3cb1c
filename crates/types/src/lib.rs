//! Core types module - shared constants and plain data
//!
//! This module defines the fixed geometry, timing and shading constants used
//! throughout the application, plus the small value types passed between the
//! renderer and the animation loop. Nothing here performs I/O.
//!
//! # Torus Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `R1` | 1.0 | Tube radius |
//! | `R2` | 2.0 | Distance from the torus centre to the tube centre |
//! | `K2` | 5.0 | Viewer distance from the torus |
//! | `VIEWER_OFFSET` | 5.0 | Extra separation added to every depth |
//!
//! # Sampling
//!
//! - `THETA_SPACING`: 0.07 rad around the tube cross-section
//! - `PHI_SPACING`: 0.02 rad around the main ring
//!
//! Both steps are tuned for a 200x200 grid. A larger grid needs denser
//! sampling or cells will be left empty.
//!
//! # Animation Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 60 | Tick rate of the animation loop |
//! | `A_STEP` | 0.07 | Per-frame increment of angle A |
//! | `B_STEP` | 0.03 | Per-frame increment of angle B |
//!
//! # Examples
//!
//! ```
//! use tui_torus_types::{Orientation, TorusConfig, GRID_SIZE, LUMINANCE_RAMP};
//!
//! let config = TorusConfig::default();
//! assert_eq!(config.grid_size, GRID_SIZE);
//!
//! let mut o = Orientation::new(0.07, 0.03);
//! o.advance(config.a_step, config.b_step);
//! assert_eq!(o, Orientation::new(0.14, 0.06));
//!
//! assert_eq!(LUMINANCE_RAMP[0], ' ');
//! assert_eq!(LUMINANCE_RAMP[11], '@');
//! ```

use std::time::Duration;

/// Tube radius.
pub const R1: f64 = 1.0;

/// Distance from the torus centre to the centre of the tube.
pub const R2: f64 = 2.0;

/// Distance from the viewer to the torus.
pub const K2: f64 = 5.0;

/// Additional constant separation added to every depth so the perspective
/// divide never approaches the camera plane.
pub const VIEWER_OFFSET: f64 = 5.0;

/// Step between samples around the tube cross-section (radians).
pub const THETA_SPACING: f64 = 0.07;

/// Step between samples around the main ring (radians).
pub const PHI_SPACING: f64 = 0.02;

/// Width and height of the square glyph/depth grids.
pub const GRID_SIZE: u16 = 200;

/// Rows of the grid skipped before the first terminal row.
pub const Y_OFFSET: u16 = 20;

/// Animation tick rate.
pub const FRAMES_PER_SECOND: u32 = 60;

/// How long the input listener blocks on the terminal before re-checking
/// whether the animation is still running.
pub const INPUT_POLL_MS: u64 = 50;

/// Per-frame increment of angle A (radians).
pub const A_STEP: f64 = 0.07;

/// Per-frame increment of angle B (radians).
pub const B_STEP: f64 = 0.03;

/// Angle A of the first frame (radians).
pub const INITIAL_A: f64 = 0.07;

/// Angle B of the first frame (radians).
pub const INITIAL_B: f64 = 0.03;

/// Multiplier turning luminance into a ramp index.
pub const LUMINANCE_SCALE: f64 = 8.0;

/// Illumination glyphs, faintest first.
pub const LUMINANCE_RAMP: [char; 12] = [' ', '.', ',', '-', '~', ':', ';', '!', '*', '#', '$', '@'];

/// Glyph of an empty grid cell.
pub const BLANK: char = ' ';

/// Rotation of the torus about its two fixed axes, in radians.
///
/// The angles only ever grow. Trig functions are periodic so no wrapping is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub a: f64,
    pub b: f64,
}

impl Orientation {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Add fixed per-frame deltas. No drift correction.
    pub fn advance(&mut self, da: f64, db: f64) {
        self.a += da;
        self.b += db;
    }
}

/// Runtime settings for the renderer, view and loop.
///
/// Defaults mirror the constants above. There are no CLI flags or
/// environment variables; callers adjust a config with the `with_*` helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusConfig {
    pub grid_size: u16,
    pub y_offset: u16,
    pub frame_interval: Duration,
    pub initial: Orientation,
    pub a_step: f64,
    pub b_step: f64,
    /// Draw the terminal size in the top-left corner.
    pub show_size_overlay: bool,
    /// Recompute the projection scale from the terminal width on resize.
    /// Off by default: the projection centre is fixed to the grid, so a
    /// narrow terminal would shrink the torus out of view.
    pub rescale_on_resize: bool,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            y_offset: Y_OFFSET,
            frame_interval: Duration::from_secs(1) / FRAMES_PER_SECOND,
            initial: Orientation::new(INITIAL_A, INITIAL_B),
            a_step: A_STEP,
            b_step: B_STEP,
            show_size_overlay: false,
            rescale_on_resize: false,
        }
    }
}

impl TorusConfig {
    pub fn with_size_overlay(mut self, show: bool) -> Self {
        self.show_size_overlay = show;
        self
    }

    pub fn with_rescale_on_resize(mut self, rescale: bool) -> Self {
        self.rescale_on_resize = rescale;
        self
    }

    pub fn with_y_offset(mut self, y_offset: u16) -> Self {
        self.y_offset = y_offset;
        self
    }

    pub fn with_initial(mut self, initial: Orientation) -> Self {
        self.initial = initial;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_is_faint_to_bright() {
        assert_eq!(LUMINANCE_RAMP.len(), 12);
        assert_eq!(LUMINANCE_RAMP.iter().collect::<String>(), " .,-~:;!*#$@");
    }

    #[test]
    fn default_config_matches_constants() {
        let c = TorusConfig::default();
        assert_eq!(c.grid_size, 200);
        assert_eq!(c.y_offset, 20);
        assert_eq!(c.initial, Orientation::new(0.07, 0.03));
        assert_eq!(c.frame_interval, Duration::from_nanos(16_666_666));
        assert!(!c.show_size_overlay);
        assert!(!c.rescale_on_resize);
    }

    #[test]
    fn builders_override_single_fields() {
        let c = TorusConfig::default()
            .with_y_offset(0)
            .with_initial(Orientation::new(0.0, 0.0));
        assert_eq!(c.y_offset, 0);
        assert_eq!(c.initial, Orientation::new(0.0, 0.0));
        assert_eq!(c.grid_size, GRID_SIZE);
    }

    #[test]
    fn orientation_advances_by_fixed_deltas() {
        let mut o = Orientation::new(INITIAL_A, INITIAL_B);
        o.advance(A_STEP, B_STEP);
        assert_eq!(o.a, 0.14);
        assert_eq!(o.b, 0.06);
    }
}
