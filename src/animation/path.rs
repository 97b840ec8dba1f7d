//! Path generators: blend functions that turn a fraction into a point on a curve.

use std::f64::consts::TAU;

use crate::{
    animation::lerp::{invlerp_f64, lerp_f64},
    animation::value::Value,
    foundation::core::Point,
    foundation::error::TweenResult,
};

/// Blends two angles (radians) and projects the result onto a circle.
///
/// Screen coordinates: y grows downward, so positive angles wind counter-clockwise
/// on screen. `0 -> TAU` is a full counter-clockwise turn, `PI -> -PI` a clockwise one.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CircularArc {
    pub center: Point,
    pub radius: f64,
}

impl CircularArc {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn sample(&self, start_angle: f64, end_angle: f64, t: f64) -> Point {
        let angle = lerp_f64(start_angle, end_angle, t);
        Point::new(
            self.center.x + angle.cos() * self.radius,
            self.center.y - angle.sin() * self.radius,
        )
    }

    pub fn blend(&self, a: &Value, b: &Value, t: f64) -> TweenResult<Value> {
        Ok(self.sample(a.as_scalar()?, b.as_scalar()?, t).into())
    }
}

/// Moves horizontally between two points while oscillating vertically around a baseline.
///
/// The wave phase is derived from horizontal progress rather than `t`, so any
/// reshaping of horizontal motion still yields whole waves between the endpoints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveY {
    pub amplitude: f64,
    pub baseline: f64,
    pub waves: f64,
}

impl WaveY {
    pub fn new(amplitude: f64, baseline: f64, waves: f64) -> Self {
        Self {
            amplitude,
            baseline,
            waves,
        }
    }

    pub fn sample(&self, from: Point, to: Point, t: f64) -> TweenResult<Point> {
        let x = lerp_f64(from.x, to.x, t);
        let progress = invlerp_f64(from.x, to.x, x)?;
        let y = self.baseline + (progress * TAU * self.waves).sin() * self.amplitude;
        Ok(Point::new(x, y))
    }

    pub fn blend(&self, a: &Value, b: &Value, t: f64) -> TweenResult<Value> {
        Ok(self.sample(a.as_point()?, b.as_point()?, t)?.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
