use super::*;
use crate::geometry::poses::{PoseName, library};

#[test]
fn flat_sheet_faces_point_along_z() {
    let mesh = FoldedMesh::from_positions(*library().get(PoseName::Flat).vertices());
    for n in mesh.face_normals {
        assert!((n.z.abs() - 1.0).abs() < 1e-6, "{n:?}");
        assert_eq!(n.x, 0.0);
        assert_eq!(n.y, 0.0);
    }
}

#[test]
fn collapsed_faces_get_zero_normals_not_nan() {
    // The diamond collapses the tail/neck/beak slots onto the centre.
    let mesh = FoldedMesh::from_positions(*library().get(PoseName::Diamond).vertices());
    assert!(mesh.is_finite());
    assert!(mesh.face_normals.iter().any(|n| *n == Vec3::ZERO));
}

#[test]
fn buffers_are_interleaved() {
    let mesh = FoldedMesh::from_positions(*library().get(PoseName::Crane).vertices());
    let pos = mesh.position_buffer();
    assert_eq!(pos.len(), VERTEX_COUNT * 3);
    assert_eq!(&pos[3..6], &[1.8, 0.5, 0.0]);
    assert_eq!(mesh.normal_buffer().len(), VERTEX_COUNT * 3);
}

#[test]
fn vertex_normals_are_unit_or_zero() {
    let mesh = FoldedMesh::from_positions(*library().get(PoseName::Crane).vertices());
    for n in mesh.vertex_normals {
        let len = n.length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-5, "{n:?}");
    }
}
