//! Surface sampler - sweeps (theta, phi) over the torus.
//!
//! theta walks the tube cross-section (outer loop), phi walks around the
//! main ring (inner loop). Both angles are accumulated by repeated addition,
//! so the exact sample set is fixed for a given spacing.

use std::f64::consts::TAU;

use crate::projection::Projection;
use crate::types::{Orientation, K2, PHI_SPACING, R1, R2, THETA_SPACING, VIEWER_OFFSET};

/// One projected point on the rotated torus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub theta: f64,
    pub phi: f64,
    /// Screen column; may fall outside the grid.
    pub col: i32,
    /// Screen row; may fall outside the grid.
    pub row: i32,
    /// One over z. Larger is nearer.
    pub ooz: f64,
    /// Dot product of the surface normal with the light, in [-√2, √2].
    pub luminance: f64,
}

/// Allocation-free iterator over every sample of one frame.
#[derive(Debug, Clone)]
pub struct SampleIter {
    projection: Projection,
    cos_a: f64,
    sin_a: f64,
    cos_b: f64,
    sin_b: f64,
    theta: f64,
    cos_theta: f64,
    sin_theta: f64,
    phi: f64,
}

impl SampleIter {
    pub fn new(orientation: Orientation, projection: Projection) -> Self {
        let (sin_a, cos_a) = orientation.a.sin_cos();
        let (sin_b, cos_b) = orientation.b.sin_cos();
        Self {
            projection,
            cos_a,
            sin_a,
            cos_b,
            sin_b,
            theta: 0.0,
            cos_theta: 1.0,
            sin_theta: 0.0,
            phi: 0.0,
        }
    }

    fn sample(&self, phi: f64) -> SurfaceSample {
        let (cos_a, sin_a, cos_b, sin_b) = (self.cos_a, self.sin_a, self.cos_b, self.sin_b);
        let (cos_theta, sin_theta) = (self.cos_theta, self.sin_theta);
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Point on the tube cross-section before revolving.
        let circle_x = R2 + R1 * cos_theta;
        let circle_y = R1 * sin_theta;

        let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
        let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
        let ooz = 1.0 / (K2 + cos_a * circle_x * sin_phi + circle_y * sin_a + VIEWER_OFFSET);

        let (col, row) = self.projection.project(x, y, ooz);

        let luminance = cos_phi * cos_theta * sin_b
            - cos_a * cos_theta * sin_phi
            - sin_a * sin_theta
            + cos_b * (cos_a * sin_theta - cos_theta * sin_a * sin_phi);

        SurfaceSample {
            theta: self.theta,
            phi,
            col,
            row,
            ooz,
            luminance,
        }
    }
}

impl Iterator for SampleIter {
    type Item = SurfaceSample;

    fn next(&mut self) -> Option<SurfaceSample> {
        if self.phi >= TAU {
            self.theta += THETA_SPACING;
            self.phi = 0.0;
            let (sin_theta, cos_theta) = self.theta.sin_cos();
            self.sin_theta = sin_theta;
            self.cos_theta = cos_theta;
        }
        if self.theta >= TAU {
            return None;
        }

        let s = self.sample(self.phi);
        self.phi += PHI_SPACING;
        Some(s)
    }
}
