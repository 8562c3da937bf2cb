use super::*;

#[test]
fn default_is_flat_and_manual() {
    let s = FoldState::default();
    assert_eq!(s.stage, Stage::Crease);
    assert_eq!(s.progress, 0.0);
    assert!(!s.complete);
    assert!(!s.auto_playing);
    assert_eq!(s.phase(), Phase::Manual);
    assert!(!s.is_terminal());
}

#[test]
fn finished_is_terminal() {
    let s = FoldState::finished();
    assert_eq!(s.phase(), Phase::Done);
    assert!(s.is_terminal());
    assert_eq!(
        s.snapshot(),
        FoldSnapshot {
            stage: Stage::Finished,
            progress: 1.0,
            complete: true,
        }
    );
}

#[test]
fn middle_stages_are_auto() {
    for stage in [Stage::SquareBase, Stage::Shaping] {
        let s = FoldState {
            stage,
            ..FoldState::default()
        };
        assert_eq!(s.phase(), Phase::Auto);
    }
}

#[test]
fn drag_progress_is_clamped() {
    let d = DragSession { anchor_x: 100.0 };
    assert_eq!(d.progress_at(100.0, 0.005), 0.0);
    assert!((d.progress_at(180.0, 0.005) - 0.4).abs() < 1e-12);
    assert_eq!(d.progress_at(50.0, 0.005), 0.0);
    assert_eq!(d.progress_at(10_000.0, 0.005), 1.0);
}
