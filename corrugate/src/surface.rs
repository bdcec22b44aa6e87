//! Parametric corrugated sphere
//!
//! A unit sphere whose horizontal cross-sections are pushed outward by a
//! rectified cosine ripple. The ripple amplitude fades from `2a` at the
//! south pole to zero at the north pole, so the bottom of the shape is a
//! flower-shaped cap while the top closes to a point.

use glam::DVec3;
use serde::Deserialize;

/// Shape constants of the corrugated sphere
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceShape {
    /// Base sphere radius (R)
    pub radius: f64,
    /// Corrugation amplitude (a)
    pub amplitude: f64,
    /// Number of ripples around the u direction (n)
    pub frequency: u32,
}

impl SurfaceShape {
    pub const RADIUS: f64 = 1.0;
    pub const AMPLITUDE: f64 = 0.24;
    pub const FREQUENCY: u32 = 6;

    /// Evaluate the surface at angles `u` in [0, 2π] and `v` in [-π/2, π/2]
    ///
    /// ```text
    /// radial = R·cos(v) + a·(1 − sin(v))·|cos(n·u)|
    /// x = radial·cos(u)
    /// y = radial·sin(u)
    /// z = R·sin(v)
    /// ```
    ///
    /// Angles are radians. Any finite input yields a finite point.
    pub fn point(&self, u: f64, v: f64) -> DVec3 {
        let (sin_v, cos_v) = v.sin_cos();
        let ripple = (f64::from(self.frequency) * u).cos().abs();
        let radial = self.radius * cos_v + self.amplitude * (1.0 - sin_v) * ripple;

        let (sin_u, cos_u) = u.sin_cos();
        DVec3::new(radial * cos_u, radial * sin_u, self.radius * sin_v)
    }
}

impl Default for SurfaceShape {
    fn default() -> Self {
        Self {
            radius: Self::RADIUS,
            amplitude: Self::AMPLITUDE,
            frequency: Self::FREQUENCY,
        }
    }
}

/// Evaluate the default corrugated sphere at `(u, v)` (radians)
pub fn surface_point(u: f64, v: f64) -> DVec3 {
    SurfaceShape::default().point(u, v)
}
