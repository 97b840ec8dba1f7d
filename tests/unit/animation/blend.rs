use super::*;
use crate::foundation::core::Point;

#[test]
fn default_is_shape_dispatched_lerp() {
    let b = Blend::default();
    assert_eq!(b, Blend::Lerp);
    assert_eq!(
        b.apply(&Value::Scalar(0.0), &Value::Scalar(10.0), 0.25).unwrap(),
        Value::Scalar(2.5)
    );
}

#[test]
fn hold_variants_never_interpolate() {
    let (a, b) = (Value::Scalar(1.0), Value::Scalar(9.0));
    let start = Blend::Hold(HoldPolicy::HoldStart);
    let end = Blend::Hold(HoldPolicy::HoldEnd);
    assert_eq!(start.apply(&a, &b, 0.9).unwrap(), a);
    assert_eq!(end.apply(&a, &b, 0.1).unwrap(), b);
}

#[test]
fn circle_and_wave_produce_points() {
    let circle = Blend::Circle(CircularArc::new(Point::new(0.0, 0.0), 2.0));
    let p = circle
        .apply(&Value::Scalar(0.0), &Value::Scalar(1.0), 0.0)
        .unwrap();
    assert_eq!(p.as_point().unwrap(), Point::new(2.0, 0.0));

    let wave = Blend::Wave(WaveY::new(5.0, 100.0, 1.0));
    let p = wave
        .apply(&Value::point(0.0, 0.0), &Value::point(10.0, 0.0), 0.5)
        .unwrap()
        .as_point()
        .unwrap();
    assert!((p.x - 5.0).abs() < 1e-9);
    assert!((p.y - 100.0).abs() < 1e-9);
}

#[test]
fn mismatched_shapes_are_unsupported() {
    let err = Blend::Lerp
        .apply(&Value::Scalar(0.0), &Value::Color(crate::foundation::core::Rgba8::RED), 0.5)
        .unwrap_err();
    assert!(err.to_string().contains("scalar"));
}

#[test]
fn deserializes_from_script_shape() {
    let b: Blend = serde_json::from_str(r#"{"hold":"swap_at_midpoint"}"#).unwrap();
    assert_eq!(b, Blend::Hold(HoldPolicy::SwapAtMidpoint));
    let b: Blend = serde_json::from_str(r#""lerp""#).unwrap();
    assert_eq!(b, Blend::Lerp);
    let b: Blend =
        serde_json::from_str(r#"{"wave":{"amplitude":2,"baseline":3,"waves":1}}"#).unwrap();
    assert_eq!(b, Blend::Wave(WaveY::new(2.0, 3.0, 1.0)));
}
