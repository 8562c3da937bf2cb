use crate::foundation::core::Vec3;
use crate::geometry::poses::Vertices;
use crate::geometry::topology::{TRIANGLE_COUNT, TRIANGLES, VERTEX_COUNT};

/// A posed crane mesh ready to hand to a renderer.
///
/// Normals are recomputed from the positions on every construction. Faces that collapse to
/// zero area (common mid-fold, where internal slots meet at the centre) get a zero normal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FoldedMesh {
    /// Vertex positions, one per topology slot.
    pub positions: Vertices,
    /// One unit normal per triangle, for flat shading.
    pub face_normals: [Vec3; TRIANGLE_COUNT],
    /// Area-weighted per-vertex normals.
    pub vertex_normals: Vertices,
}

impl FoldedMesh {
    /// Build a mesh and its normals from raw positions.
    pub fn from_positions(positions: Vertices) -> Self {
        let mut face_normals = [Vec3::ZERO; TRIANGLE_COUNT];
        let mut accum = [Vec3::ZERO; VERTEX_COUNT];

        for (n, tri) in face_normals.iter_mut().zip(TRIANGLES) {
            let [a, b, c] = tri.map(usize::from);
            let area_weighted = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
            *n = area_weighted.normalize_or_zero();
            for i in [a, b, c] {
                accum[i] += area_weighted;
            }
        }

        Self {
            positions,
            face_normals,
            vertex_normals: accum.map(Vec3::normalize_or_zero),
        }
    }

    /// Interleaved `x, y, z` position buffer.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Interleaved `x, y, z` vertex-normal buffer.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.vertex_normals
            .iter()
            .flat_map(|v| v.to_array())
            .collect()
    }

    /// Whether every position and normal is finite.
    pub fn is_finite(&self) -> bool {
        self.positions.iter().all(|v| v.is_finite())
            && self.face_normals.iter().all(|v| v.is_finite())
            && self.vertex_normals.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mesh.rs"]
mod tests;
