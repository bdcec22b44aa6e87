//! Parameter lattice sampling
//!
//! The lattice has `v_count + 1` rows (v from -90° to 90°) and
//! `u_count + 1` columns (u from 0° to 360°). Both endpoints are sampled,
//! so the first and last columns coincide in space but remain distinct
//! vertices. That seam column is what lets the texture wrap from 0 to 1.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

use crate::error::GeometryError;
use crate::surface::SurfaceShape;

/// Validated lattice dimensions (cells per axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    u_count: u32,
    v_count: u32,
}

impl Resolution {
    /// Create a resolution, rejecting zero on either axis
    pub fn new(u_count: u32, v_count: u32) -> Result<Self, GeometryError> {
        if u_count < 1 || v_count < 1 {
            return Err(GeometryError::InvalidResolution {
                u_resolution: u_count,
                v_resolution: v_count,
            });
        }
        Ok(Self { u_count, v_count })
    }

    /// Square lattice with `count` cells per axis, clamped to at least 1
    ///
    /// Only for fixed internal lattices; user input goes through [`Resolution::new`].
    pub(crate) fn square(count: u32) -> Self {
        let count = count.max(1);
        Self {
            u_count: count,
            v_count: count,
        }
    }

    /// Cells along u
    pub fn u_count(&self) -> u32 {
        self.u_count
    }

    /// Cells along v
    pub fn v_count(&self) -> u32 {
        self.v_count
    }

    /// Lattice points per row
    pub fn columns(&self) -> usize {
        self.u_count as usize + 1
    }

    /// Lattice rows
    pub fn rows(&self) -> usize {
        self.v_count as usize + 1
    }

    /// Total lattice points, `(u + 1)(v + 1)`
    pub fn lattice_len(&self) -> usize {
        self.rows().saturating_mul(self.columns())
    }

    /// Two triangles per cell
    pub fn triangle_count(&self) -> u64 {
        u64::from(self.u_count)
            .saturating_mul(u64::from(self.v_count))
            .saturating_mul(2)
    }

    /// Vertices after flat expansion, `6uv`
    pub fn flat_vertex_count(&self) -> u64 {
        self.triangle_count().saturating_mul(3)
    }

    /// Flattened lattice index of `(iv, iu)`
    #[inline]
    pub fn index(&self, iv: usize, iu: usize) -> usize {
        iv * self.columns() + iu
    }

    /// Inverse of [`Resolution::index`]: `(iv, iu)`
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.columns(), index % self.columns())
    }
}

/// Sampled lattice: positions plus the angles they were sampled at
///
/// Positions are stored flat, row-major, addressed by [`Resolution::index`].
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    resolution: Resolution,
    u_angles: Vec<f64>,
    v_angles: Vec<f64>,
    positions: Vec<DVec3>,
}

impl ParameterGrid {
    /// Sample `shape` over the full lattice
    pub fn sample(shape: &SurfaceShape, resolution: Resolution) -> Self {
        let u_angles = u_angles(resolution.u_count());
        let v_angles = v_angles(resolution.v_count());

        let mut positions = Vec::with_capacity(resolution.lattice_len());
        for &v in &v_angles {
            for &u in &u_angles {
                positions.push(shape.point(u, v));
            }
        }

        Self {
            resolution,
            u_angles,
            v_angles,
            positions,
        }
    }

    /// Lattice with hand-placed positions, for exercising later stages
    #[cfg(test)]
    pub(crate) fn from_positions(resolution: Resolution, positions: Vec<DVec3>) -> Self {
        assert_eq!(positions.len(), resolution.lattice_len());
        Self {
            resolution,
            u_angles: u_angles(resolution.u_count()),
            v_angles: v_angles(resolution.v_count()),
            positions,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// u angles in radians, one per column, `0..=2π`
    pub fn u_angles(&self) -> &[f64] {
        &self.u_angles
    }

    /// v angles in radians, one per row, `-π/2..=π/2`
    pub fn v_angles(&self) -> &[f64] {
        &self.v_angles
    }

    /// All lattice positions, row-major
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Position at a flattened lattice index
    #[inline]
    pub fn position(&self, index: usize) -> DVec3 {
        self.positions[index]
    }

    /// Position at `(iv, iu)`
    #[inline]
    pub fn point(&self, iv: usize, iu: usize) -> DVec3 {
        self.positions[self.resolution.index(iv, iu)]
    }

    /// `(u, v)` angles at a flattened lattice index
    pub fn angles(&self, index: usize) -> (f64, f64) {
        let (iv, iu) = self.resolution.coords(index);
        (self.u_angles[iu], self.v_angles[iv])
    }
}

/// Evenly spaced u angles over [0, 2π], both ends included
pub(crate) fn u_angles(u_count: u32) -> Vec<f64> {
    (0..=u_count)
        .map(|iu| f64::from(iu) / f64::from(u_count) * TAU)
        .collect()
}

/// Evenly spaced v angles over [-π/2, π/2], both ends included
pub(crate) fn v_angles(v_count: u32) -> Vec<f64> {
    (0..=v_count)
        .map(|iv| -FRAC_PI_2 + f64::from(iv) / f64::from(v_count) * PI)
        .collect()
}
