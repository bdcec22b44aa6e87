//! Wireframe variant: iso-parameter polylines over the lattice
//!
//! Shares the lattice points directly (no replication). Each lattice row
//! becomes a polyline along u and each column a polyline along v.

use crate::error::GeometryError;
use crate::grid::{ParameterGrid, Resolution};
use crate::surface::SurfaceShape;

/// Line-list buffers for the wireframe
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireframeBuffers {
    /// `[x, y, z]` per lattice point
    pub positions: Vec<f32>,
    /// Segment endpoint pairs
    pub indices: Vec<u32>,
}

impl WireframeBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Build the U and V polylines for `shape`
///
/// Produces `(v + 1)·u + (u + 1)·v` segments.
pub fn generate_wireframe(
    shape: &SurfaceShape,
    resolution: Resolution,
) -> Result<WireframeBuffers, GeometryError> {
    let lattice_len = resolution.lattice_len() as u64;
    if lattice_len > u64::from(u32::MAX) {
        return Err(GeometryError::IndexOverflow {
            vertex_count: lattice_len,
            max: u64::from(u32::MAX),
        });
    }

    let grid = ParameterGrid::sample(shape, resolution);
    let (rows, columns) = (resolution.rows(), resolution.columns());

    let mut buffers = WireframeBuffers {
        positions: Vec::with_capacity(grid.positions().len() * 3),
        indices: Vec::with_capacity(2 * (rows * (columns - 1) + columns * (rows - 1))),
    };

    for p in grid.positions() {
        buffers.positions.extend_from_slice(&p.as_vec3().to_array());
    }

    // U lines: constant v
    for iv in 0..rows {
        for iu in 0..columns - 1 {
            buffers.indices.push(resolution.index(iv, iu) as u32);
            buffers.indices.push(resolution.index(iv, iu + 1) as u32);
        }
    }

    // V lines: constant u
    for iu in 0..columns {
        for iv in 0..rows - 1 {
            buffers.indices.push(resolution.index(iv, iu) as u32);
            buffers.indices.push(resolution.index(iv + 1, iu) as u32);
        }
    }

    Ok(buffers)
}
