//! Fraction shaping applied between the segment clock and the blend.

use std::f64::consts::PI;

/// Which end of a segment a [`Ease::Power`] curve lingers at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    In,
    Out,
    Both,
}

impl Side {
    fn shape(self, t: f64, curve: impl Fn(f64) -> f64) -> f64 {
        match self {
            Self::In => curve(t),
            Self::Out => 1.0 - curve(1.0 - t),
            Self::Both if t < 0.5 => curve(2.0 * t) / 2.0,
            Self::Both => 1.0 - curve(2.0 - 2.0 * t) / 2.0,
        }
    }
}

/// Reshapes the `elapsed / duration` fraction of a segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Passes the fraction through, extrapolation included.
    #[default]
    Linear,
    /// `3t² - 2t³`: the actor comes to rest on every keyframe.
    Smoothstep,
    /// Half a cosine period.
    Sine,
    /// `t^power`, slow at `side`. A power of 0 acts as 1.
    Power { power: u8, side: Side },
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let u = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => u * u * (3.0 - 2.0 * u),
            Self::Sine => 0.5 - 0.5 * (PI * u).cos(),
            Self::Power { power, side } => {
                let power = i32::from(power.max(1));
                side.shape(u, |x| x.powi(power))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
