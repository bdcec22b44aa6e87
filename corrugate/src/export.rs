//! Wavefront OBJ export for inspecting generated geometry

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::buffers::SurfaceBuffers;
use crate::marker::MarkerMesh;
use crate::wireframe::WireframeBuffers;

/// Write surface buffers to an OBJ file
pub fn write_obj(buffers: &SurfaceBuffers, path: &Path, name: &str) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj_to(buffers, &mut writer, name)?;
    writer.flush()
}

/// Write surface buffers as OBJ with positions, texcoords and normals
///
/// Tangents have no OBJ representation and are skipped.
pub fn write_obj_to<W: Write>(buffers: &SurfaceBuffers, w: &mut W, name: &str) -> io::Result<()> {
    writeln!(w, "# corrugated sphere, {} triangles", buffers.triangle_count())?;
    writeln!(w, "o {}", name)?;

    for p in buffers.positions.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for uv in buffers.texcoords.chunks_exact(2) {
        writeln!(w, "vt {} {}", uv[0], uv[1])?;
    }
    for n in buffers.normals.chunks_exact(3) {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }

    for tri in buffers.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(w, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// Write wireframe segments as OBJ `l` records
pub fn write_wireframe_obj<W: Write>(
    wireframe: &WireframeBuffers,
    w: &mut W,
    name: &str,
) -> io::Result<()> {
    writeln!(w, "o {}", name)?;
    for p in wireframe.positions.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for seg in wireframe.indices.chunks_exact(2) {
        writeln!(w, "l {} {}", seg[0] + 1, seg[1] + 1)?;
    }
    Ok(())
}

/// Write the marker sphere with shared vertices and normals
pub fn write_marker_obj<W: Write>(mesh: &MarkerMesh, w: &mut W, name: &str) -> io::Result<()> {
    writeln!(w, "o {}", name)?;
    for p in mesh.positions.chunks_exact(3) {
        writeln!(w, "v {} {} {}", p[0], p[1], p[2])?;
    }
    for n in mesh.normals.chunks_exact(3) {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}
