use crate::{
    animation::lerp::{HoldPolicy, lerp},
    animation::path::{CircularArc, WaveY},
    animation::value::Value,
    foundation::error::TweenResult,
};

/// The blend function an animation applies to its current pair.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Blend {
    /// Shape-dispatched interpolation (scalar, tuple, color, asset swap).
    #[default]
    Lerp,
    Hold(HoldPolicy),
    Circle(CircularArc),
    Wave(WaveY),
}

impl Blend {
    pub fn apply(&self, a: &Value, b: &Value, t: f64) -> TweenResult<Value> {
        match self {
            Self::Lerp => lerp(a, b, t),
            Self::Hold(policy) => Ok(policy.apply(a, b, t)),
            Self::Circle(arc) => arc.blend(a, b, t),
            Self::Wave(wave) => wave.blend(a, b, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/blend.rs"]
mod tests;
