//! FrameRenderer: composites torus samples into the glyph/depth buffers.
//!
//! Visibility uses a per-cell inverse-depth buffer: a sample replaces the
//! stored cell only when its `ooz` is strictly greater, so among equally near
//! samples the first one in sweep order wins. Back-facing samples (`L <= 0`)
//! are never drawn.

use crate::buffers::FrameBuffers;
use crate::projection::Projection;
use crate::sampler::{SampleIter, SurfaceSample};
use crate::shading::glyph_for_luminance;
use crate::types::{Orientation, TorusConfig};

#[derive(Debug, Clone)]
pub struct FrameRenderer {
    projection: Projection,
}

impl FrameRenderer {
    pub fn new(config: &TorusConfig) -> Self {
        Self::with_projection(Projection::for_width(config.grid_size))
    }

    pub fn with_projection(projection: Projection) -> Self {
        Self { projection }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Rescale the projection for a new display width.
    pub fn recompute_k1(&mut self, width: f64) {
        self.projection.recompute_k1(width);
    }

    /// Every sample of the frame at `orientation`, in compositing order.
    pub fn samples(&self, orientation: Orientation) -> SampleIter {
        SampleIter::new(orientation, self.projection)
    }

    /// Render one frame into `buffers`.
    ///
    /// The buffers are cleared first, so repeated calls with the same
    /// orientation produce identical output. Allocation-free.
    pub fn compute(&self, orientation: Orientation, buffers: &mut FrameBuffers) {
        buffers.clear();
        for s in self.samples(orientation) {
            plot(buffers, &s);
        }
    }
}

/// Composite one sample: cull, bounds check, then the strict depth test.
fn plot(buffers: &mut FrameBuffers, s: &SurfaceSample) {
    if s.luminance <= 0.0 {
        return;
    }

    let idx = buffers.index(s.col, s.row);
    debug_assert!(
        idx.is_some(),
        "projected sample outside the {}x{} grid: ({}, {})",
        buffers.size(),
        buffers.size(),
        s.col,
        s.row
    );
    let Some(idx) = idx else {
        return;
    };

    if s.ooz > buffers.depth_at(idx) {
        buffers.store(idx, glyph_for_luminance(s.luminance), s.ooz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLANK, LUMINANCE_RAMP};

    fn render(a: f64, b: f64) -> FrameBuffers {
        let config = TorusConfig::default();
        let r = FrameRenderer::new(&config);
        let mut buffers = FrameBuffers::new(config.grid_size);
        r.compute(Orientation::new(a, b), &mut buffers);
        buffers
    }

    #[test]
    fn compute_clears_previous_frame() {
        let config = TorusConfig::default();
        let r = FrameRenderer::new(&config);
        let mut buffers = FrameBuffers::new(config.grid_size);

        r.compute(Orientation::new(1.0, 2.0), &mut buffers);
        let fresh = buffers.clone();

        r.compute(Orientation::new(0.0, 0.0), &mut buffers);
        r.compute(Orientation::new(1.0, 2.0), &mut buffers);
        assert_eq!(buffers, fresh);
    }

    #[test]
    fn glyph_present_only_where_depth_written() {
        let b = render(0.7, 1.3);
        for (g, z) in b.glyphs().iter().zip(b.depths()) {
            if *z == 0.0 {
                assert_eq!(*g, BLANK);
            } else {
                assert!(*z > 0.0);
                assert!(LUMINANCE_RAMP.contains(g));
            }
        }
    }

    #[test]
    fn ring_is_seen_edge_on_at_rest() {
        // A = B = 0: the ring lies in the x/z plane, |y| <= R1 and z >= 7,
        // so rows stay within 125/7 of the centre and columns within 375/7.
        let b = render(0.0, 0.0);
        assert!(b.occupied_count() > 100);
        for row in 0..200u16 {
            for col in 0..200u16 {
                if b.is_occupied(col, row) {
                    assert!((82..=118).contains(&row), "row {row}");
                    assert!((46..=153).contains(&col), "col {col}");
                }
            }
        }
    }

    fn sample(col: i32, row: i32, ooz: f64, luminance: f64) -> SurfaceSample {
        SurfaceSample {
            theta: 0.0,
            phi: 0.0,
            col,
            row,
            ooz,
            luminance,
        }
    }

    #[test]
    fn equally_near_sample_keeps_the_earlier_glyph() {
        let mut b = FrameBuffers::new(8);
        plot(&mut b, &sample(3, 4, 0.1, 0.3));
        plot(&mut b, &sample(3, 4, 0.1, 1.4));
        assert_eq!(b.glyph(3, 4), Some(LUMINANCE_RAMP[2]));
        assert_eq!(b.depth(3, 4), Some(0.1));

        // Strictly nearer wins, farther never does.
        plot(&mut b, &sample(3, 4, 0.2, 1.4));
        assert_eq!(b.glyph(3, 4), Some(LUMINANCE_RAMP[11]));
        plot(&mut b, &sample(3, 4, 0.15, 0.3));
        assert_eq!(b.glyph(3, 4), Some(LUMINANCE_RAMP[11]));
        assert_eq!(b.depth(3, 4), Some(0.2));
    }

    #[test]
    fn back_facing_sample_leaves_cell_empty() {
        let mut b = FrameBuffers::new(8);
        plot(&mut b, &sample(1, 1, 0.5, 0.0));
        plot(&mut b, &sample(1, 1, 0.5, -0.7));
        assert!(!b.is_occupied(1, 1));
        assert_eq!(b.glyph(1, 1), Some(BLANK));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "projected sample outside"))]
    fn out_of_grid_samples_are_discarded() {
        // Scale for a 200 wide grid but render into a 40 wide one.
        let r = FrameRenderer::with_projection(Projection::for_width(200));
        let mut small = FrameBuffers::new(40);
        r.compute(Orientation::new(0.0, 0.0), &mut small);
        // Release builds: nothing lands, nothing panics.
        assert_eq!(small.occupied_count(), 0);
    }
}
