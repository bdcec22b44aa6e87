//! Surface generation pipeline
//!
//! `sample → triangulate → accumulate normals → flat expand → pack`
//!
//! Each call is a full rebuild from the resolution alone. Nothing is
//! cached between calls and the returned buffers are owned by the caller.

use tracing::{debug, trace};

use crate::buffers::{MAX_U32_VERTICES, SurfaceBuffers, pack};
use crate::config::TessellationConfig;
use crate::error::GeometryError;
use crate::flat::{FlatVertex, expand};
use crate::grid::{ParameterGrid, Resolution};
use crate::normals::accumulate_normals;
use crate::surface::SurfaceShape;
use crate::triangulate::triangulate;

/// Generate the default corrugated sphere
pub fn generate_surface(config: &TessellationConfig) -> Result<SurfaceBuffers, GeometryError> {
    generate_surface_with(&SurfaceShape::default(), config)
}

/// Generate packed buffers for `shape` at the configured resolution
pub fn generate_surface_with(
    shape: &SurfaceShape,
    config: &TessellationConfig,
) -> Result<SurfaceBuffers, GeometryError> {
    let resolution = config.resolution()?;
    let vertices = generate_flat_vertices(shape, resolution)?;
    let buffers = pack(&vertices)?;

    debug!(
        "Generated surface {}x{}: {} triangles, {} vertices",
        resolution.u_count(),
        resolution.v_count(),
        buffers.triangle_count(),
        buffers.vertex_count()
    );

    Ok(buffers)
}

/// Run every stage up to flat expansion
///
/// Useful for renderers that upload one interleaved vertex buffer
/// (see [`interleaved_bytes`](crate::interleaved_bytes)).
pub fn generate_flat_vertices(
    shape: &SurfaceShape,
    resolution: Resolution,
) -> Result<Vec<FlatVertex>, GeometryError> {
    let vertex_count = resolution.flat_vertex_count();
    if vertex_count > MAX_U32_VERTICES {
        return Err(GeometryError::IndexOverflow {
            vertex_count,
            max: MAX_U32_VERTICES,
        });
    }

    let grid = ParameterGrid::sample(shape, resolution);
    trace!("Sampled {} lattice points", grid.positions().len());

    let triangles = triangulate(&resolution);
    let normals = accumulate_normals(&grid, &triangles);
    trace!(
        "Accumulated normals over {} triangles ({} degenerate)",
        triangles.len(),
        normals.degenerate_faces()
    );

    Ok(expand(&grid, &triangles, &normals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: &[f32]) -> f32 {
        v.iter().map(|c| c * c).sum::<f32>().sqrt()
    }

    #[test]
    fn test_vertex_count_invariant() {
        for (u, v) in [(1, 1), (3, 5), (4, 2), (48, 24)] {
            let buffers = generate_surface(&TessellationConfig::new(u, v)).unwrap();
            let n = 6 * u as usize * v as usize;
            assert_eq!(buffers.triangle_count(), 2 * u as usize * v as usize);
            assert_eq!(buffers.vertex_count(), n);
            assert_eq!(buffers.positions.len(), 3 * n);
            assert_eq!(buffers.normals.len(), 3 * n);
            assert_eq!(buffers.tangents.len(), 3 * n);
            assert_eq!(buffers.texcoords.len(), 2 * n);
        }
    }

    #[test]
    fn test_index_identity() {
        let buffers = generate_surface(&TessellationConfig::new(7, 3)).unwrap();
        let expected: Vec<u32> = (0..buffers.vertex_count() as u32).collect();
        assert_eq!(buffers.indices, expected);
    }

    #[test]
    fn test_normals_and_tangents_unit_length() {
        let buffers = generate_surface(&TessellationConfig::new(40, 20)).unwrap();
        for n in buffers.normals.chunks(3) {
            assert!((length(n) - 1.0).abs() < 1e-5);
        }
        for t in buffers.tangents.chunks(3) {
            assert!((length(t) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_texcoords_in_unit_square() {
        let buffers = generate_surface(&TessellationConfig::new(33, 17)).unwrap();
        assert!(buffers.texcoords.iter().all(|c| (0.0..=1.0).contains(c)));
        assert!(buffers.positions.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_seam_positions_equal_uvs_distinct() {
        let (u, v) = (6, 3);
        let buffers = generate_surface(&TessellationConfig::new(u, v)).unwrap();

        // Cell (0, 0) triangle 0 corner 0 is lattice (0, 0).
        // Cell (0, u-1) triangle 0 corner 2 is lattice (0, u).
        let first = 0;
        let seam = (u as usize - 1) * 6 + 2;

        let p_first = &buffers.positions[first * 3..first * 3 + 3];
        let p_seam = &buffers.positions[seam * 3..seam * 3 + 3];
        for k in 0..3 {
            assert!((p_first[k] - p_seam[k]).abs() < 1e-6);
        }

        assert_eq!(buffers.texcoords[first * 2], 0.0);
        assert_eq!(buffers.texcoords[seam * 2], 1.0);
        assert_eq!(buffers.texcoords[first * 2 + 1], buffers.texcoords[seam * 2 + 1]);
    }

    #[test]
    fn test_invalid_resolution_rejected() {
        for (u, v) in [(0, 4), (4, 0), (0, 0)] {
            assert_eq!(
                generate_surface(&TessellationConfig::new(u, v)),
                Err(GeometryError::InvalidResolution {
                    u_resolution: u,
                    v_resolution: v
                })
            );
        }
    }

    #[test]
    fn test_end_to_end_small() {
        let buffers = generate_surface(&TessellationConfig::new(4, 2)).unwrap();
        assert_eq!(buffers.triangle_count(), 16);
        assert_eq!(buffers.vertex_count(), 48);

        let p = &buffers.positions[0..3];
        assert!((p[0] - 0.48).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!((p[2] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_idempotent() {
        let config = TessellationConfig::new(21, 9);
        let a = generate_surface(&config).unwrap();
        let b = generate_surface(&config).unwrap();

        let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.positions), bits(&b.positions));
        assert_eq!(bits(&a.normals), bits(&b.normals));
        assert_eq!(bits(&a.tangents), bits(&b.tangents));
        assert_eq!(bits(&a.texcoords), bits(&b.texcoords));
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_index_overflow_rejected_before_allocation() {
        let resolution = Resolution::new(u32::MAX, u32::MAX).unwrap();
        let err = generate_flat_vertices(&SurfaceShape::default(), resolution).unwrap_err();
        assert!(matches!(err, GeometryError::IndexOverflow { .. }));
    }

    #[test]
    fn test_high_resolution_exceeds_u16() {
        // 6 * 120 * 100 = 72000 vertices
        let buffers = generate_surface(&TessellationConfig::new(120, 100)).unwrap();
        assert_eq!(buffers.vertex_count(), 72_000);
        assert!(matches!(
            buffers.indices_u16(),
            Err(GeometryError::IndexOverflow { vertex_count: 72_000, .. })
        ));
    }

    #[test]
    fn test_mid_latitude_normals_consistent() {
        // With the fixed cell winding, normals point toward the axis
        let (u, v) = (24, 12);
        let buffers = generate_surface(&TessellationConfig::new(u, v)).unwrap();
        let row = 6 * u as usize; // vertices per lattice row of cells
        for i in (5 * row)..(7 * row) {
            let p = &buffers.positions[i * 3..i * 3 + 3];
            let n = &buffers.normals[i * 3..i * 3 + 3];
            let radial_dot = p[0] * n[0] + p[1] * n[1];
            assert!(radial_dot < 0.0);
        }
    }
}
