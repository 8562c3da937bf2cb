use super::*;

const DT: f64 = 1.0 / 60.0;

fn fly(flight: &mut ReleaseFlight, ticks: usize) {
    for _ in 0..ticks {
        flight.tick(DT);
    }
}

#[test]
fn rest_transform_matches_folding_stage() {
    let params = FlightParams::default();
    let t = GroupTransform::rest(&params);
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Vec3::new(0.0, std::f32::consts::FRAC_PI_4, 0.0));
    assert_eq!(t.scale, 0.85);
}

#[test]
fn inactive_flight_does_not_move() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    fly(&mut f, 120);
    assert_eq!(f.transform(), GroupTransform::rest(&FlightParams::default()));
    assert_eq!(f.elapsed(), Duration::ZERO);
}

#[test]
fn two_and_a_half_seconds_of_flight() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    fly(&mut f, 150);

    let t = f.transform();
    assert!((t.position.z - -10.0).abs() < 1e-3, "z = {}", t.position.z);
    assert!((t.position.y - 3.75).abs() < 1e-3, "y = {}", t.position.y);
    assert!(t.position.x.abs() < 1e-6);
    assert!((t.rotation.x - -1.25).abs() < 1e-3);
    assert!((t.rotation.z - 0.5).abs() < 1e-3);
    assert!(t.scale <= 1.25);
    assert!((t.scale - 1.25).abs() < 1e-6);
}

#[test]
fn scale_never_exceeds_cap() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    let mut last = f.transform().scale;
    for _ in 0..600 {
        f.tick(DT);
        let s = f.transform().scale;
        assert!(s >= last);
        assert!(s <= 1.25);
        last = s;
    }
}

#[test]
fn clearing_flag_freezes_group() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    fly(&mut f, 30);
    f.set_releasing(false);
    let frozen = f.transform();
    fly(&mut f, 30);
    assert_eq!(f.transform(), frozen);

    f.reset();
    assert!(!f.is_active());
    assert_eq!(f.transform(), GroupTransform::rest(&FlightParams::default()));
}

#[test]
fn bad_dt_is_ignored() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        f.tick(dt);
    }
    assert_eq!(f.transform(), GroupTransform::rest(&FlightParams::default()));
    assert!(f.transform().is_finite());
}

#[test]
fn handoff_follows_elapsed_time() {
    let delay = Duration::from_millis(2500);
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    fly(&mut f, 149);
    assert!(!f.handoff_due(delay));
    fly(&mut f, 2);
    assert!(f.handoff_due(delay));
}

#[test]
fn matrix_places_origin_at_position() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    fly(&mut f, 60);
    let t = f.transform();
    let m = t.to_matrix();
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - t.position).length() < 1e-5);

    let rest = GroupTransform::rest(&FlightParams::default()).to_matrix();
    let tip = rest.transform_point3(Vec3::X);
    assert!((tip.length() - 0.85).abs() < 1e-5);
    assert!(tip.y.abs() < 1e-6);
}

#[test]
fn huge_elapsed_time_saturates() {
    let mut f = ReleaseFlight::new(FlightParams::default());
    f.release();
    f.tick(1.0e20);
    assert!(f.handoff_due(Duration::from_millis(2500)));
    assert!(f.handoff_due(Duration::MAX));
    assert_eq!(f.elapsed(), Duration::MAX);
}
