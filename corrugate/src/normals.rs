//! Area-weighted vertex normals

use glam::DVec3;
use tracing::warn;

use crate::grid::ParameterGrid;
use crate::triangulate::Triangle;

/// Faces with less area than this contribute nothing to vertex normals
pub const DEGENERATE_AREA: f64 = 1e-14;

/// Normal used for degenerate faces and unnormalizable vertices
pub const FALLBACK_NORMAL: DVec3 = DVec3::Z;

/// Unit normal and area of one triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub normal: DVec3,
    pub area: f64,
}

impl FaceGeometry {
    /// Compute from corner positions, in winding order
    pub fn from_corners(p0: DVec3, p1: DVec3, p2: DVec3) -> Self {
        let cross = (p1 - p0).cross(p2 - p0);
        let area = 0.5 * cross.length();

        if area < DEGENERATE_AREA {
            return Self {
                normal: FALLBACK_NORMAL,
                area: 0.0,
            };
        }

        Self {
            normal: cross / (2.0 * area),
            area,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.area == 0.0
    }

    /// Contribution to a vertex normal sum
    #[inline]
    pub fn weighted(&self) -> DVec3 {
        self.normal * self.area
    }
}

/// Per-lattice-vertex smoothed normals
#[derive(Debug, Clone)]
pub struct VertexNormals {
    normals: Vec<DVec3>,
    degenerate_faces: usize,
    fallback_vertices: usize,
}

impl VertexNormals {
    /// Normal at a flattened lattice index
    #[inline]
    pub fn get(&self, index: usize) -> DVec3 {
        self.normals[index]
    }

    pub fn as_slice(&self) -> &[DVec3] {
        &self.normals
    }

    /// Triangles skipped for having (near) zero area
    pub fn degenerate_faces(&self) -> usize {
        self.degenerate_faces
    }

    /// Vertices whose accumulated sum was zero and got [`FALLBACK_NORMAL`]
    pub fn fallback_vertices(&self) -> usize {
        self.fallback_vertices
    }
}

/// Sum area-weighted face normals at every lattice vertex, then normalize
///
/// Larger incident triangles pull the vertex normal harder than small ones.
/// A vertex touched only by degenerate triangles gets [`FALLBACK_NORMAL`].
pub fn accumulate_normals(grid: &ParameterGrid, triangles: &[Triangle]) -> VertexNormals {
    let mut sums = vec![DVec3::ZERO; grid.positions().len()];
    let mut degenerate_faces = 0;

    for tri in triangles {
        let [a, b, c] = tri.map(|i| i as usize);
        let face = FaceGeometry::from_corners(grid.position(a), grid.position(b), grid.position(c));
        if face.is_degenerate() {
            degenerate_faces += 1;
        }

        let weighted = face.weighted();
        sums[a] += weighted;
        sums[b] += weighted;
        sums[c] += weighted;
    }

    let mut fallback_vertices = 0;
    let normals = sums
        .into_iter()
        .map(|sum| {
            sum.try_normalize().unwrap_or_else(|| {
                fallback_vertices += 1;
                FALLBACK_NORMAL
            })
        })
        .collect();

    if degenerate_faces > 0 || fallback_vertices > 0 {
        warn!(
            "accumulate_normals: {} degenerate triangles, {} vertices fell back to +Z",
            degenerate_faces, fallback_vertices
        );
    }

    VertexNormals {
        normals,
        degenerate_faces,
        fallback_vertices,
    }
}
