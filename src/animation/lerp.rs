use crate::{
    animation::value::Value,
    foundation::core::{Point, Rgba8, Vec2},
    foundation::error::{TweenError, TweenResult},
};

/// `a*(1-t) + b*t`. Exact at both ends; extrapolates outside `[0, 1]`.
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// The fraction `t` with `lerp_f64(a, b, t) == x`.
pub fn invlerp_f64(a: f64, b: f64, x: f64) -> TweenResult<f64> {
    let span = b - a;
    if span == 0.0 {
        return Err(TweenError::arithmetic(format!(
            "inverse lerp over zero-width interval [{a}, {b}]"
        )));
    }
    Ok((x - a) / span)
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a, *b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Truncate toward zero; `as u8` saturates out-of-range extrapolation.
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            lerp_f64(f64::from(a), f64::from(b), t).trunc() as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Blends two values of the same shape.
pub fn lerp(a: &Value, b: &Value, t: f64) -> TweenResult<Value> {
    match (a, b) {
        (Value::Scalar(a), Value::Scalar(b)) => Ok(Value::Scalar(lerp_f64(*a, *b, t))),
        (Value::Tuple(a), Value::Tuple(b)) => {
            check_arity(a, b)?;
            a.iter()
                .zip(b)
                .map(|(a, b)| lerp(a, b, t))
                .collect::<TweenResult<Vec<_>>>()
                .map(Value::Tuple)
        }
        (Value::Color(a), Value::Color(b)) => Ok(Value::Color(Rgba8::lerp(a, b, t))),
        (Value::Asset(_), Value::Asset(_)) => Ok(HoldPolicy::SwapAtMidpoint.apply(a, b, t)),
        (a, b) => Err(TweenError::unsupported(format!(
            "lerp between {} and {}",
            a.kind_name(),
            b.kind_name()
        ))),
    }
}

/// Maps `x` back to the fraction that `lerp(a, b, _)` would need to produce it.
pub fn invlerp(a: &Value, b: &Value, x: &Value) -> TweenResult<Value> {
    match (a, b, x) {
        (Value::Scalar(a), Value::Scalar(b), Value::Scalar(x)) => {
            invlerp_f64(*a, *b, *x).map(Value::Scalar)
        }
        (Value::Tuple(a), Value::Tuple(b), Value::Tuple(x)) => {
            check_arity(a, b)?;
            check_arity(a, x)?;
            a.iter()
                .zip(b)
                .zip(x)
                .map(|((a, b), x)| invlerp(a, b, x))
                .collect::<TweenResult<Vec<_>>>()
                .map(Value::Tuple)
        }
        (a, b, x) => Err(TweenError::unsupported(format!(
            "inverse lerp over {}, {} and {}",
            a.kind_name(),
            b.kind_name(),
            x.kind_name()
        ))),
    }
}

fn check_arity(a: &[Value], b: &[Value]) -> TweenResult<()> {
    if a.len() != b.len() {
        return Err(TweenError::Arity {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Discrete blending for values that cannot be interpolated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoldPolicy {
    HoldStart,
    HoldEnd,
    SwapAtMidpoint,
}

impl HoldPolicy {
    pub fn apply(self, a: &Value, b: &Value, t: f64) -> Value {
        match self {
            Self::HoldStart => a.clone(),
            Self::HoldEnd => b.clone(),
            Self::SwapAtMidpoint => {
                if t <= 0.5 {
                    a.clone()
                } else {
                    b.clone()
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
