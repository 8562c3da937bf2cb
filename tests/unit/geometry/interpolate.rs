use super::*;
use crate::geometry::topology::VERTEX_COUNT;

fn pose(name: PoseName) -> &'static Vertices {
    library().get(name).vertices()
}

#[test]
fn every_stage_and_progress_is_finite() {
    for stage in Stage::ALL {
        for step in 0..=20 {
            let p = f64::from(step) / 20.0;
            let mesh = interpolate(stage, p);
            assert_eq!(mesh.positions.len(), VERTEX_COUNT);
            assert!(mesh.is_finite(), "stage {stage} progress {p}");
        }
    }
}

#[test]
fn stage_zero_at_rest_is_flat() {
    assert_eq!(&interpolate(Stage::Crease, 0.0).positions, pose(PoseName::Flat));
}

#[test]
fn last_blend_at_full_progress_is_crane() {
    assert_eq!(&interpolate(Stage::Shaping, 1.0).positions, pose(PoseName::Crane));
}

#[test]
fn finished_holds_crane_for_any_progress() {
    for p in [0.0, 0.3, 1.0] {
        assert_eq!(&interpolate(Stage::Finished, p).positions, pose(PoseName::Crane));
    }
}

#[test]
fn interpolate_is_pure() {
    for stage in Stage::ALL {
        assert_eq!(interpolate(stage, 0.37), interpolate(stage, 0.37));
    }
}

#[test]
fn tail_tip_half_turn_reflects_in_plane() {
    let axis = Vec3::new(0.7071, 0.7071, 0.0);
    let v = Vec3::new(-1.0, 1.0, 0.0);
    let expected = rotate_about_axis(v, axis.normalize(), PI);

    let folded = interpolate(Stage::Crease, 1.0).positions[slot::TAIL_TIP];
    assert!((folded - expected).abs().max_element() < 1e-4, "{folded:?}");
    // (-1, 1) is perpendicular to the axis, so a half turn negates it.
    assert!((folded.x - 1.0).abs() < 1e-4);
    assert!((folded.y + 1.0).abs() < 1e-4);
    assert!(folded.z.abs() < 1e-4);
}

#[test]
fn crease_swings_through_the_air_not_the_pivot() {
    let mid = interpolate(Stage::Crease, 0.5).positions[slot::TAIL_TIP];
    // A quarter turn lifts the corner straight off the sheet at full radius.
    assert!((mid.length() - 2f32.sqrt()).abs() < 1e-4);
    assert!(mid.z.abs() > 1.0);
}

#[test]
fn crease_leaves_static_slots_untouched() {
    let flat = pose(PoseName::Flat);
    let folded = crease_fold(0.8);
    for i in 0..VERTEX_COUNT {
        if !CREASE_MOVING.contains(&i) {
            assert_eq!(folded[i], flat[i], "slot {i}");
        }
    }
}

#[test]
fn crease_preserves_distance_to_axis() {
    let flat = pose(PoseName::Flat);
    let folded = crease_fold(0.63);
    for i in CREASE_MOVING {
        let before = flat[i] - CREASE_AXIS * CREASE_AXIS.dot(flat[i]);
        let after = folded[i] - CREASE_AXIS * CREASE_AXIS.dot(folded[i]);
        assert!((before.length() - after.length()).abs() < 1e-5, "slot {i}");
    }
}

#[test]
fn blend_midpoint_is_average() {
    let mid = interpolate(Stage::SquareBase, 0.5).positions;
    let a = pose(PoseName::Triangle);
    let b = pose(PoseName::Diamond);
    for i in 0..VERTEX_COUNT {
        let avg = (a[i] + b[i]) * 0.5;
        assert!((mid[i] - avg).abs().max_element() < 1e-6, "slot {i}");
    }
}

#[test]
fn fold_table_is_keyed_by_stage() {
    assert_eq!(FoldStep::for_stage(Stage::Crease), FoldStep::Crease);
    assert_eq!(
        FoldStep::for_stage(Stage::Shaping),
        FoldStep::Blend {
            from: PoseName::Diamond,
            to: PoseName::Crane
        }
    );
    assert_eq!(
        FoldStep::for_stage(Stage::Finished),
        FoldStep::Hold(PoseName::Crane)
    );
}

#[test]
fn clamped_entry_point_sanitizes_inputs() {
    assert_eq!(interpolate_clamped(-3, f64::NAN), interpolate(Stage::Crease, 0.0));
    assert_eq!(interpolate_clamped(9, 0.2), interpolate(Stage::Finished, 1.0));
    assert_eq!(interpolate_clamped(2, 7.0), interpolate(Stage::Shaping, 1.0));
}
