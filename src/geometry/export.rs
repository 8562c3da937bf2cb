use std::io::Write;

use crate::foundation::error::{OrizuruError, OrizuruResult};
use crate::geometry::mesh::FoldedMesh;
use crate::geometry::topology::TRIANGLES;

/// Write `mesh` as Wavefront OBJ with one normal per face (flat shading).
pub fn write_obj<W: Write>(mesh: &FoldedMesh, name: &str, mut w: W) -> OrizuruResult<()> {
    let io = |e: std::io::Error| OrizuruError::Other(anyhow::Error::new(e).context("write obj"));

    writeln!(w, "o {name}").map_err(io)?;
    for p in &mesh.positions {
        writeln!(w, "v {} {} {}", p.x, p.y, p.z).map_err(io)?;
    }
    for n in &mesh.face_normals {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z).map_err(io)?;
    }
    for (fi, tri) in TRIANGLES.into_iter().enumerate() {
        // OBJ indices are 1-based.
        let [a, b, c] = tri.map(|i| usize::from(i) + 1);
        let n = fi + 1;
        writeln!(w, "f {a}//{n} {b}//{n} {c}//{n}").map_err(io)?;
    }
    w.flush().map_err(io)
}

/// [`write_obj`] into a `String`.
pub fn to_obj_string(mesh: &FoldedMesh, name: &str) -> OrizuruResult<String> {
    let mut buf = Vec::new();
    write_obj(mesh, name, &mut buf)?;
    String::from_utf8(buf).map_err(|e| OrizuruError::serde(format!("obj is not utf-8: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/export.rs"]
mod tests;
