use super::*;
use crate::fold::input::{InMemoryHost, InputChannel, PointerEvent};
use crate::fold::observer::RecordingObserver;
use crate::foundation::core::Stage;
use crate::geometry::poses::{PoseName, library};

const DT: f64 = 1.0 / 60.0;

fn drag_open(crane: &mut CraneInstance<RecordingObserver>) {
    let c = crane.controller_mut();
    c.dispatch(PointerEvent::new(InputChannel::MouseDown, 0.0, 0.0));
    c.dispatch(PointerEvent::new(InputChannel::MouseMove, 400.0, 0.0));
}

#[test]
fn first_frame_is_flat_sheet_at_rest() {
    let cfg = EngineConfig::default();
    let mut crane = CraneInstance::new(&cfg).unwrap();
    let frame = crane.frame(DT);

    assert_eq!(frame.snapshot.stage, Stage::Crease);
    assert_eq!(
        &frame.mesh.positions,
        library().get(PoseName::Flat).vertices()
    );
    assert_eq!(frame.transform, GroupTransform::rest(&cfg.flight));
    assert_eq!(frame.color, "#808080");
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = EngineConfig::default();
    cfg.fold.drag_threshold = 0.0;
    let err = CraneInstance::new(&cfg).unwrap_err();
    assert!(err.to_string().starts_with("config error:"));
}

#[test]
fn full_run_ends_on_crane_pose() {
    let mut host = InMemoryHost::new();
    let mut crane =
        CraneInstance::with_observer(&EngineConfig::default(), RecordingObserver::new()).unwrap();
    crane.attach(&mut host);
    drag_open(&mut crane);

    let mut frame = crane.frame(DT);
    for _ in 0..200 {
        frame = crane.frame(DT);
    }
    assert!(frame.snapshot.complete);
    assert_eq!(
        &frame.mesh.positions,
        library().get(PoseName::Crane).vertices()
    );
    assert_eq!(crane.controller().observer().completions(), 1);

    assert_eq!(crane.detach(&mut host), 6);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn release_moves_group_and_hands_off() {
    let mut crane = CraneInstance::new(&EngineConfig::default()).unwrap();
    crane.set_force_finish(true);
    assert!(!crane.handoff_due());

    crane.set_releasing(true);
    let mut frame = crane.frame(DT);
    for _ in 0..150 {
        frame = crane.frame(DT);
    }
    assert!(frame.transform.position.z < -9.9);
    assert!(frame.snapshot.complete);
    assert!(crane.handoff_due());
    let origin = frame.matrix.transform_point3(crate::foundation::core::Vec3::ZERO);
    assert!((origin - frame.transform.position).length() < 1e-5);
}

#[test]
fn color_passes_through_untouched() {
    let mut crane = CraneInstance::new(&EngineConfig::default()).unwrap();
    crane.set_color("rgb(10, 20, 30)");
    assert_eq!(crane.frame(DT).color, "rgb(10, 20, 30)");
    assert_eq!(crane.color(), "rgb(10, 20, 30)");
}

#[test]
fn frame_serializes_to_json() {
    let mut crane = CraneInstance::new(&EngineConfig::default()).unwrap();
    let frame = crane.frame(DT);
    let v = serde_json::to_value(&frame).unwrap();
    assert_eq!(v["snapshot"]["stage"], 0);
    assert_eq!(v["color"], "#808080");
    assert_eq!(v["mesh"]["positions"].as_array().map(|a| a.len()), Some(22));
}

#[test]
fn settle_lock_follows_handoff() {
    let mut crane = CraneInstance::new(&EngineConfig::default()).unwrap();
    crane.set_force_finish(true);
    crane.set_releasing(true);

    // 2.5 s release delay plus 1.8 s settle.
    for _ in 0..200 {
        crane.frame(DT);
    }
    assert!(crane.handoff_due());
    assert!(!crane.settle_due());

    for _ in 0..62 {
        crane.frame(DT);
    }
    assert!(crane.settle_due());
}

#[test]
fn settle_lock_needs_release() {
    let mut cfg = EngineConfig::default();
    cfg.timings.settle_ms = 0;
    cfg.timings.release_delay_ms = 0;
    let mut crane = CraneInstance::new(&cfg).unwrap();
    crane.frame(DT);
    assert!(!crane.handoff_due());
    assert!(!crane.settle_due());
}
