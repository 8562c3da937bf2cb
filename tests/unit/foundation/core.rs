use super::*;

#[test]
fn stage_index_clamps_both_ends() {
    assert_eq!(Stage::from_index_clamped(-5), Stage::Crease);
    assert_eq!(Stage::from_index_clamped(0), Stage::Crease);
    assert_eq!(Stage::from_index_clamped(2), Stage::Shaping);
    assert_eq!(Stage::from_index_clamped(3), Stage::Finished);
    assert_eq!(Stage::from_index_clamped(99), Stage::Finished);
    assert_eq!(Stage::from(200u8), Stage::Finished);
}

#[test]
fn stage_next_saturates_at_finished() {
    assert_eq!(Stage::Crease.next(), Stage::SquareBase);
    assert_eq!(Stage::Shaping.next(), Stage::Finished);
    assert_eq!(Stage::Finished.next(), Stage::Finished);
    for (i, stage) in Stage::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(stage.index()), i);
    }
}

#[test]
fn stage_serializes_as_integer() {
    assert_eq!(serde_json::to_string(&Stage::Shaping).unwrap(), "2");
    let s: Stage = serde_json::from_str("7").unwrap();
    assert_eq!(s, Stage::Finished);
}
