use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.fold.drag_sensitivity, 0.005);
    assert_eq!(cfg.fold.auto_rate, AutoRate::PerTick(0.015));
    assert_eq!(cfg.flight.scale_cap, 1.25);
    assert_eq!(cfg.timings.release_delay(), Duration::from_millis(2500));
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let cfg = EngineConfig::from_json_str(
        r#"{ "fold": { "auto_rate": { "kind": "per_second", "value": 0.9 } } }"#,
    )
    .unwrap();
    assert_eq!(cfg.fold.auto_rate, AutoRate::PerSecond(0.9));
    assert_eq!(cfg.fold.drag_threshold, 0.99);
    assert_eq!(cfg.flight, FlightParams::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = EngineConfig::from_json_str(r#"{ "fold": { "drag_sensitivty": 1.0 } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("config error:"), "{err}");
}

#[test]
fn auto_rate_steps() {
    assert_eq!(AutoRate::PerTick(0.015).step(0.5), 0.015);
    assert!((AutoRate::PerSecond(0.9).step(1.0 / 60.0) - 0.015).abs() < 1e-12);
    assert_eq!(AutoRate::PerSecond(0.9).step(-1.0), 0.0);
}

#[test]
fn validate_rejects_bad_fold_params() {
    let mut cfg = EngineConfig::default();
    cfg.fold.drag_sensitivity = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.fold.drag_threshold = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.fold.auto_rate = AutoRate::PerTick(f64::NAN);
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_bad_flight_params() {
    let mut cfg = EngineConfig::default();
    cfg.flight.scale_cap = 0.5;
    assert!(cfg.validate().is_err());

    let mut cfg = EngineConfig::default();
    cfg.flight.velocity[2] = f32::INFINITY;
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = EngineConfig::from_path("target/does-not-exist/orizuru.json").unwrap_err();
    assert!(err.to_string().contains("open engine config"), "{err}");
}

#[test]
fn pretty_json_round_trips() {
    let cfg = EngineConfig::default();
    let json = cfg.to_json_pretty().unwrap();
    assert_eq!(EngineConfig::from_json_str(&json).unwrap(), cfg);
}
