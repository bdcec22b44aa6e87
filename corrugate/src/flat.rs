//! Flat-shading expansion
//!
//! Every triangle gets three private vertices that share one face normal
//! and one face tangent. Nothing is shared across triangles, even where
//! corners coincide in the lattice, so the renderer cannot interpolate
//! shading between neighbouring faces.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};

use crate::grid::ParameterGrid;
use crate::normals::{FALLBACK_NORMAL, VertexNormals};
use crate::triangulate::Triangle;
use crate::uv::{face_tangent, lattice_uv};

/// Replicated render vertex (44 bytes, tightly packed)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FlatVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub uv: [f32; 2],
}

impl FlatVertex {
    /// Narrow double-precision attributes into a render vertex
    pub fn new(position: DVec3, normal: DVec3, tangent: DVec3, uv: DVec2) -> Self {
        Self {
            position: position.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
            tangent: tangent.as_vec3().to_array(),
            uv: uv.as_vec2().to_array(),
        }
    }
}

/// Face normal for flat shading: the renormalized sum of the corners'
/// smoothed normals, not the raw cross product
///
/// Falls back to [`FALLBACK_NORMAL`] when the three normals cancel.
pub fn face_normal(corners: [DVec3; 3]) -> DVec3 {
    (corners[0] + corners[1] + corners[2])
        .try_normalize()
        .unwrap_or(FALLBACK_NORMAL)
}

/// Expand triangles into `3 · triangles.len()` flat vertices
///
/// Output is grouped by triangle, preserving triangle order and the
/// in-triangle corner order.
pub fn expand(
    grid: &ParameterGrid,
    triangles: &[Triangle],
    normals: &VertexNormals,
) -> Vec<FlatVertex> {
    let mut vertices = Vec::with_capacity(triangles.len() * 3);

    for tri in triangles {
        let corners = tri.map(|i| i as usize);
        let positions = corners.map(|i| grid.position(i));
        let uvs = corners.map(|i| lattice_uv(grid, i));

        let normal = face_normal(corners.map(|i| normals.get(i)));
        let tangent = face_tangent(positions, uvs);

        for k in 0..3 {
            vertices.push(FlatVertex::new(positions[k], normal, tangent, uvs[k]));
        }
    }

    vertices
}
