use crate::{
    animation::blend::Blend,
    animation::ease::Ease,
    animation::seq::{PairPolicy, Pull, Seq},
    animation::value::Value,
    foundation::error::{TweenError, TweenResult},
};

/// How `update(dt)` advances the segment clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clocking {
    /// One unit per update, `dt` ignored. Durations are frame counts.
    #[default]
    Frames,
    /// `dt` units per update. Durations are milliseconds.
    Millis,
}

impl Clocking {
    fn step(self, dt: f64) -> f64 {
        match self {
            Self::Frames => 1.0,
            Self::Millis => dt,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    NotStarted,
    Running,
    Finished,
}

/// What a call to `start`/`update` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Not running; nothing happened.
    Idle,
    /// Still inside the current segment.
    Within,
    /// A new pair was pulled; carries its 0-based segment index.
    Segment(usize),
    /// The pair sequence ran dry; the final value is held.
    Finished,
}

/// Minimal engine surface that role wrappers compose.
pub trait Tween {
    fn start(&mut self) -> TweenResult<Advance>;
    fn advance(&mut self, dt: f64) -> TweenResult<Advance>;
    fn current_value(&self) -> TweenResult<Value>;
    fn is_running(&self) -> bool;
}

/// Keyframe state machine walking overlapping value pairs `(v0,v1), (v1,v2), ...`.
#[derive(Clone, Debug)]
pub struct Animation {
    values: Vec<Value>,
    pair_policy: PairPolicy,
    durations: Seq<f64>,
    blend: Blend,
    ease: Ease,
    clocking: Clocking,

    pairs: Seq<(Value, Value)>,
    current: Option<(Value, Value)>,
    duration: f64,
    elapsed: f64,
    segment: usize,
    state: State,
}

impl Animation {
    pub fn new<V>(durations: Seq<f64>, values: impl IntoIterator<Item = V>, blend: Blend) -> Self
    where
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            pair_policy: PairPolicy::Once,
            durations,
            blend,
            ease: Ease::Linear,
            clocking: Clocking::Frames,
            pairs: Seq::once(Vec::new()),
            current: None,
            duration: 0.0,
            elapsed: 0.0,
            segment: 0,
            state: State::NotStarted,
        }
    }

    pub fn with_pairs(mut self, policy: PairPolicy) -> Self {
        self.pair_policy = policy;
        self
    }

    pub fn with_clocking(mut self, clocking: Clocking) -> Self {
        self.clocking = clocking;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Rewinds both sequences and pulls the first pair.
    pub fn start(&mut self) -> TweenResult<Advance> {
        if self.values.len() < 2 {
            return Err(TweenError::config(format!(
                "animation needs at least two values, got {}",
                self.values.len()
            )));
        }
        self.pairs = self.pair_policy.seq(&self.values);
        self.durations.reset();

        let Pull::Item(pair) = self.pairs.pull() else {
            return Err(TweenError::config("animation has no value pairs"));
        };
        let Pull::Item(duration) = self.durations.pull() else {
            return Err(TweenError::config("animation has no durations"));
        };

        self.duration = check_duration(duration)?;
        self.current = Some(pair);
        self.elapsed = 0.0;
        self.segment = 0;
        self.state = State::Running;
        tracing::debug!(duration = self.duration, "animation started");
        Ok(Advance::Segment(0))
    }

    pub fn update(&mut self, dt: f64) -> TweenResult<Advance> {
        if self.state != State::Running {
            return Ok(Advance::Idle);
        }
        if self.elapsed < self.duration {
            let elapsed = self.elapsed + self.clocking.step(dt);
            // Summed millisecond steps can stop a rounding error short of the boundary.
            self.elapsed = if self.duration - elapsed <= SNAP_EPSILON * self.duration {
                self.duration
            } else {
                elapsed.clamp(0.0, self.duration)
            };
        }
        if self.elapsed < self.duration {
            return Ok(Advance::Within);
        }

        let next = match (self.pairs.pull(), self.durations.pull()) {
            (Pull::Item(pair), Pull::Item(duration)) => Some((pair, duration)),
            _ => None,
        };
        if let Some((_, duration)) = &next
            && let Err(e) = check_duration(*duration)
        {
            // The pulled pair cannot be put back.
            self.state = State::Finished;
            return Err(e);
        }
        let Some((pair, duration)) = next else {
            self.state = State::Finished;
            tracing::debug!(segments = self.segment + 1, "animation finished");
            return Ok(Advance::Finished);
        };

        self.current = Some(pair);
        self.duration = duration;
        self.elapsed = 0.0;
        self.segment += 1;
        tracing::trace!(segment = self.segment, duration, "animation segment");
        Ok(Advance::Segment(self.segment))
    }

    pub fn value(&self) -> TweenResult<Value> {
        let Some((a, b)) = &self.current else {
            return Err(TweenError::config("animation value read before start"));
        };
        self.blend.apply(a, b, self.ease.apply(self.fraction()))
    }

    /// `elapsed / duration` of the current segment.
    pub fn fraction(&self) -> f64 {
        if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            0.0
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn segment_index(&self) -> usize {
        self.segment
    }

    pub fn pair(&self) -> Option<(&Value, &Value)> {
        self.current.as_ref().map(|(a, b)| (a, b))
    }

    pub fn clocking(&self) -> Clocking {
        self.clocking
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Tween for Animation {
    fn start(&mut self) -> TweenResult<Advance> {
        Animation::start(self)
    }

    fn advance(&mut self, dt: f64) -> TweenResult<Advance> {
        self.update(dt)
    }

    fn current_value(&self) -> TweenResult<Value> {
        self.value()
    }

    fn is_running(&self) -> bool {
        Animation::is_running(self)
    }
}

/// Relative distance from a segment's end that counts as reaching it.
const SNAP_EPSILON: f64 = 1e-9;

fn check_duration(d: f64) -> TweenResult<f64> {
    if !(d.is_finite() && d > 0.0) {
        return Err(TweenError::config(format!(
            "segment duration must be positive and finite, got {d}"
        )));
    }
    Ok(d)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
