use super::*;
use crate::path::taper::TaperKind;
use crate::path::waveform::Waveform;
use serde_json::json;

#[test]
fn empty_object_takes_defaults() {
    let s = PatternSettings::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(s, PatternSettings::default());
    s.validate().unwrap();
}

#[test]
fn nested_sections_override_defaults() {
    let v = json!({
        "canvas": {"width": 320, "height": 240},
        "clock": {"target_fps": 30, "quality": {"adaptive": false, "initial_tier": "Low"}},
        "wave": {"type": "triangle", "amplitude": 6, "loop": true},
        "taper": {"kind": "middle", "start_width_frac": 0.1},
        "colors": {"stops": ["#000", "#fff"], "cycle_duration_ms": 1000, "mode": "Sweep"},
        "fractal": {"depth": 2, "children": 3},
    });
    let s = PatternSettings::from_reader(v.to_string().as_bytes()).unwrap();
    assert_eq!(s.canvas.width, 320);
    assert_eq!(s.clock.target_fps, 30.0);
    assert!(!s.clock.quality.adaptive);
    assert_eq!(s.wave.kind, Waveform::Triangle);
    assert_eq!(s.taper.kind, TaperKind::Middle);
    assert_eq!(s.taper.end_width_frac, 0.2);
    assert_eq!(s.colors.stops.len(), 2);
    assert_eq!(s.fractal.children, 3);
    assert_eq!(s.shape, ShapeSettings::default());
    s.validate().unwrap();
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PatternSettings::from_reader("{ nope".as_bytes()).unwrap_err();
    assert!(matches!(err, PatternError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = PatternSettings::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open settings JSON"));
}

#[test]
fn validate_rejects_bad_configurations() {
    let mut s = PatternSettings::default();
    s.colors.stops.clear();
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.colors.cycle_duration_ms = 0.0;
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.colors.stops = vec!["#zzzzzz".to_owned()];
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.fractal.children = 0;
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.shape.sides = 2;
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.stroke.base_width = -1.0;
    assert!(s.validate().unwrap_err().is_invalid_config());

    let mut s = PatternSettings::default();
    s.colors.alpha = 1.5;
    assert!(s.validate().unwrap_err().is_invalid_config());
}
