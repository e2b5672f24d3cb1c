//! Perspective projection onto the square grid.

use crate::types::{K2, R1, R2};

/// Perspective scale and centre for a grid of a given width.
///
/// `k1` is chosen so the torus fills roughly three eighths of the grid
/// width at the viewer distance `K2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    k1: f64,
    center: f64,
    grid_width: f64,
}

impl Projection {
    pub fn for_width(grid_width: u16) -> Self {
        let w = grid_width as f64;
        Self {
            k1: k1_for(w),
            center: w / 2.0,
            grid_width: w,
        }
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    /// Recompute `k1` for a new display width.
    ///
    /// The width is capped at the grid width: the centre stays fixed, so a
    /// wider scale would project the torus past the grid edges.
    pub fn recompute_k1(&mut self, width: f64) {
        self.k1 = k1_for(width.clamp(0.0, self.grid_width));
    }

    /// Screen `(col, row)` of a rotated point. Rows grow downward.
    #[inline(always)]
    pub fn project(&self, x: f64, y: f64, ooz: f64) -> (i32, i32) {
        let col = (self.center + self.k1 * ooz * x).floor() as i32;
        let row = (self.center - self.k1 * ooz * y).floor() as i32;
        (col, row)
    }
}

fn k1_for(width: f64) -> f64 {
    width * K2 * 3.0 / (8.0 * (R1 + R2))
}
