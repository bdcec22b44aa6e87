//! Lattice triangulation
//!
//! Every cell `(iv, iu)` is split into two triangles:
//!
//! ```text
//! i2 ---- i3      (iv + 1)
//!  | \     |
//!  |   \   |
//!  |     \ |
//! i0 ---- i1      (iv)
//! ```
//!
//! emitted as `(i0, i2, i1)` then `(i1, i2, i3)`. The winding is fixed;
//! normal orientation downstream depends on it. With this winding the
//! normals computed in [`crate::normals`] point toward the z axis, so
//! renderers must treat clockwise faces as front faces.

use crate::grid::Resolution;

/// Three flattened lattice indices
pub type Triangle = [u32; 3];

/// Split one cell into its two triangles
#[inline]
pub(crate) fn split_cell(resolution: &Resolution, iv: usize, iu: usize) -> [Triangle; 2] {
    let i0 = resolution.index(iv, iu) as u32;
    let i1 = resolution.index(iv, iu + 1) as u32;
    let i2 = resolution.index(iv + 1, iu) as u32;
    let i3 = resolution.index(iv + 1, iu + 1) as u32;

    [[i0, i2, i1], [i1, i2, i3]]
}

/// Triangulate the full lattice, row by row
///
/// Returns exactly `2 · u_count · v_count` triangles.
pub fn triangulate(resolution: &Resolution) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(resolution.triangle_count() as usize);

    for iv in 0..resolution.v_count() as usize {
        for iu in 0..resolution.u_count() as usize {
            triangles.extend(split_cell(resolution, iv, iu));
        }
    }

    triangles
}
