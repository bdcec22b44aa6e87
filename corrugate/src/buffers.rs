//! Packed GPU-ready buffers

use bytemuck::cast_slice;

use crate::error::GeometryError;
use crate::flat::FlatVertex;

/// Largest vertex count a 16-bit index buffer can address
pub const MAX_U16_VERTICES: u64 = u16::MAX as u64 + 1;

/// Largest vertex count a 32-bit index buffer can address
pub const MAX_U32_VERTICES: u64 = u32::MAX as u64 + 1;

/// Dense per-attribute arrays for one generated surface
///
/// Attributes are stored planar (all positions, then all normals, ...),
/// not interleaved. Indices are the identity sequence because flat
/// expansion never shares vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceBuffers {
    /// `[x, y, z]` per vertex, length 3N
    pub positions: Vec<f32>,
    /// `[x, y, z]` per vertex, length 3N
    pub normals: Vec<f32>,
    /// `[x, y, z]` per vertex, length 3N
    pub tangents: Vec<f32>,
    /// `[u, v]` per vertex, length 2N
    pub texcoords: Vec<f32>,
    /// `0..N`
    pub indices: Vec<u32>,
}

impl SurfaceBuffers {
    /// Vertex count (N)
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Triangle count (N / 3)
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    pub fn tangent_bytes(&self) -> &[u8] {
        cast_slice(&self.tangents)
    }

    pub fn texcoord_bytes(&self) -> &[u8] {
        cast_slice(&self.texcoords)
    }

    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Narrow the index buffer to 16 bits for backends that require it
    ///
    /// Fails with [`GeometryError::IndexOverflow`] instead of wrapping when
    /// the surface has more than 65 536 vertices.
    pub fn indices_u16(&self) -> Result<Vec<u16>, GeometryError> {
        let vertex_count = self.vertex_count() as u64;
        if vertex_count > MAX_U16_VERTICES {
            return Err(GeometryError::IndexOverflow {
                vertex_count,
                max: MAX_U16_VERTICES,
            });
        }
        Ok(self.indices.iter().map(|&i| i as u16).collect())
    }
}

/// Flatten expanded vertices into planar attribute arrays
///
/// No value is transformed; only the layout changes. Fails when the
/// vertex count cannot be addressed by `u32` indices.
pub fn pack(vertices: &[FlatVertex]) -> Result<SurfaceBuffers, GeometryError> {
    let n = vertices.len();
    if n as u64 > MAX_U32_VERTICES {
        return Err(GeometryError::IndexOverflow {
            vertex_count: n as u64,
            max: MAX_U32_VERTICES,
        });
    }

    let mut buffers = SurfaceBuffers {
        positions: Vec::with_capacity(n * 3),
        normals: Vec::with_capacity(n * 3),
        tangents: Vec::with_capacity(n * 3),
        texcoords: Vec::with_capacity(n * 2),
        indices: Vec::with_capacity(n),
    };

    for v in vertices {
        buffers.positions.extend_from_slice(&v.position);
        buffers.normals.extend_from_slice(&v.normal);
        buffers.tangents.extend_from_slice(&v.tangent);
        buffers.texcoords.extend_from_slice(&v.uv);
    }
    buffers.indices.extend((0..n).map(|i| i as u32));

    Ok(buffers)
}

/// View expanded vertices as one interleaved byte buffer (44-byte stride)
pub fn interleaved_bytes(vertices: &[FlatVertex]) -> &[u8] {
    cast_slice(vertices)
}
