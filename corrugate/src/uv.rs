//! Texture coordinates and face tangents

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, DVec3};

use crate::grid::ParameterGrid;

/// UV-space determinant below which the tangent falls back to +X
pub const DEGENERATE_UV_DETERMINANT: f64 = 1e-14;

/// Tangent used when a triangle has no usable UV gradient
pub const FALLBACK_TANGENT: DVec3 = DVec3::X;

/// Map lattice `(iv, iu)` to texture space, using the lattice's own angles
///
/// u wraps 0..2π onto 0..1 and v maps -π/2..π/2 onto 0..1. The seam
/// column therefore gets u = 1 while the first column gets u = 0.
pub fn param_to_uv(iv: usize, iu: usize, v_angles: &[f64], u_angles: &[f64]) -> DVec2 {
    DVec2::new(u_angles[iu] / TAU, (v_angles[iv] + FRAC_PI_2) / PI)
}

/// UV of a flattened lattice index
pub fn lattice_uv(grid: &ParameterGrid, index: usize) -> DVec2 {
    let (iv, iu) = grid.resolution().coords(index);
    param_to_uv(iv, iu, grid.v_angles(), grid.u_angles())
}

/// Approximate face tangent from UV-space edge deltas
///
/// ```text
/// f = Δuv1.x·Δuv2.y − Δuv1.y·Δuv2.x
/// t = normalize((e1·Δuv2.y − e2·Δuv1.y) / f)
/// ```
///
/// Only the v deltas weight the edges; this is not the full tangent
/// frame solve.
/// Falls back to [`FALLBACK_TANGENT`] when `|f| < 1e-14` or the result
/// cannot be normalized.
pub fn face_tangent(positions: [DVec3; 3], uvs: [DVec2; 3]) -> DVec3 {
    let e1 = positions[1] - positions[0];
    let e2 = positions[2] - positions[0];
    let duv1 = uvs[1] - uvs[0];
    let duv2 = uvs[2] - uvs[0];

    let f = duv1.x * duv2.y - duv1.y * duv2.x;
    if f.abs() < DEGENERATE_UV_DETERMINANT {
        return FALLBACK_TANGENT;
    }

    let inv_f = 1.0 / f;
    ((e1 * duv2.y - e2 * duv1.y) * inv_f)
        .try_normalize()
        .unwrap_or(FALLBACK_TANGENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Resolution;
    use crate::surface::SurfaceShape;

    #[test]
    fn test_uv_corners() {
        let res = Resolution::new(8, 4).unwrap();
        let grid = ParameterGrid::sample(&SurfaceShape::default(), res);

        assert_eq!(lattice_uv(&grid, res.index(0, 0)), DVec2::new(0.0, 0.0));
        assert_eq!(lattice_uv(&grid, res.index(0, 8)), DVec2::new(1.0, 0.0));
        assert_eq!(lattice_uv(&grid, res.index(4, 0)), DVec2::new(0.0, 1.0));
        assert_eq!(lattice_uv(&grid, res.index(4, 8)), DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_uv_midpoint() {
        let res = Resolution::new(8, 4).unwrap();
        let grid = ParameterGrid::sample(&SurfaceShape::default(), res);
        let uv = lattice_uv(&grid, res.index(2, 4));
        assert!((uv.x - 0.5).abs() < 1e-12);
        assert!((uv.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_uv_in_unit_square() {
        let res = Resolution::new(37, 19).unwrap();
        let grid = ParameterGrid::sample(&SurfaceShape::default(), res);
        for i in 0..res.lattice_len() {
            let uv = lattice_uv(&grid, i);
            assert!((0.0..=1.0).contains(&uv.x));
            assert!((0.0..=1.0).contains(&uv.y));
        }
    }

    #[test]
    fn test_tangent_planar_quad() {
        // Flat patch where u runs along +X and v along +Y
        let positions = [DVec3::ZERO, DVec3::Y, DVec3::X];
        let uvs = [DVec2::ZERO, DVec2::Y, DVec2::X];
        let t = face_tangent(positions, uvs);
        assert!((t - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_tangent_uses_v_deltas_only() {
        // Second triangle of a cell: e1 along v, e2 along u and v
        let positions = [DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)];
        let uvs = [DVec2::X, DVec2::Y, DVec2::ONE];
        // f = (-1)(1) - (1)(0) = -1; t = -(e1·1 - e2·1) = e2 - e1 = (1, 0, 0)
        let t = face_tangent(positions, uvs);
        assert!((t - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_tangent_degenerate_uv() {
        let positions = [DVec3::ZERO, DVec3::Y, DVec3::X];
        let uvs = [DVec2::ZERO, DVec2::X, DVec2::X * 2.0];
        assert_eq!(face_tangent(positions, uvs), FALLBACK_TANGENT);
    }

    #[test]
    fn test_tangent_zero_edges() {
        let p = DVec3::new(0.0, 0.0, 1.0);
        let uvs = [DVec2::ZERO, DVec2::Y, DVec2::X];
        assert_eq!(face_tangent([p, p, p], uvs), FALLBACK_TANGENT);
    }
}
