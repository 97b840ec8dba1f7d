//! The built-in choreography and the JSON script format that can replace it.

use std::{
    f64::consts::{PI, TAU},
    fs::File,
    io::BufReader,
    path::Path,
};

use anyhow::Context as _;

use crate::{
    animation::anim::{Animation, Clocking},
    animation::blend::Blend,
    animation::ease::Ease,
    animation::lerp::HoldPolicy,
    animation::path::{CircularArc, WaveY},
    animation::seq::{PairPolicy, Seq},
    animation::value::{AssetId, Value},
    demo::roles::{ActorCycle, PositionTrack},
    foundation::core::{Anchor, Fps, Point, Rect, Rgba8},
    foundation::error::{TweenError, TweenResult},
};

pub const DEFAULT_RADIUS: f64 = 300.0;
/// Blink cycle: open, half shut, shut (frame counts).
pub const BLINK_FRAMES: [f64; 3] = [30.0, 15.0, 15.0];

/// Converts frame counts into the duration unit of the chosen clocking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    pub clocking: Clocking,
    pub fps: Fps,
}

impl Timing {
    pub fn frames(fps: Fps) -> Self {
        Self {
            clocking: Clocking::Frames,
            fps,
        }
    }

    pub fn units(&self, frames: f64) -> f64 {
        match self.clocking {
            Clocking::Frames => frames,
            Clocking::Millis => {
                frames * 1000.0 * f64::from(self.fps.den) / f64::from(self.fps.num)
            }
        }
    }

    fn animation<V: Into<Value>>(
        &self,
        frames: f64,
        values: impl IntoIterator<Item = V>,
        blend: Blend,
    ) -> Animation {
        Animation::new(Seq::repeat(self.units(frames)), values, blend).with_clocking(self.clocking)
    }
}

fn with_center_x(rect: Rect, x: f64) -> Rect {
    Rect::from_center_size(Point::new(x, rect.center().y), rect.size())
}

/// Slide from the start rect to `radius` right of the window center.
pub fn slide_center_to_right(
    rect: Rect,
    window: Rect,
    radius: f64,
    timing: &Timing,
) -> PositionTrack {
    let to = with_center_x(rect, window.center().x + radius);
    PositionTrack::new(
        "center-to-right",
        timing.animation(60.0, [rect.origin(), to.origin()], Blend::Lerp),
        Anchor::TopLeft,
    )
}

pub fn slide_right_to_left(
    rect: Rect,
    window: Rect,
    radius: f64,
    timing: &Timing,
) -> PositionTrack {
    let from = with_center_x(rect, window.center().x + radius);
    let to = with_center_x(rect, window.center().x - radius);
    PositionTrack::new(
        "right-to-left",
        timing.animation(60.0, [from.origin(), to.origin()], Blend::Lerp),
        Anchor::TopLeft,
    )
}

/// Three sine waves of half the radius while crossing from right to left.
pub fn wave_right_to_left(rect: Rect, window: Rect, radius: f64, timing: &Timing) -> PositionTrack {
    let from = with_center_x(rect, window.center().x + radius);
    let to = with_center_x(rect, window.center().x - radius);
    let wave = WaveY::new(radius / 2.0, window.center().y, 3.0);
    PositionTrack::new(
        "wave-right-to-left",
        timing.animation(120.0, [from.center(), to.center()], Blend::Wave(wave)),
        Anchor::Center,
    )
}

/// Full counter-clockwise turn starting on the right.
pub fn circle_ccw(window: Rect, radius: f64, timing: &Timing) -> PositionTrack {
    let arc = CircularArc::new(window.center(), radius);
    PositionTrack::new(
        "circle-ccw",
        timing.animation(120.0, [0.0, TAU], Blend::Circle(arc)),
        Anchor::Center,
    )
}

/// Full clockwise turn starting on the left.
pub fn circle_cw(window: Rect, radius: f64, timing: &Timing) -> PositionTrack {
    let arc = CircularArc::new(window.center(), radius);
    PositionTrack::new(
        "circle-cw",
        timing.animation(120.0, [PI, -PI], Blend::Circle(arc)),
        Anchor::Center,
    )
}

pub fn slide_left_to_center(
    rect: Rect,
    window: Rect,
    radius: f64,
    timing: &Timing,
) -> PositionTrack {
    let from = with_center_x(rect, window.center().x - radius);
    PositionTrack::new(
        "left-to-center",
        timing.animation(60.0, [from.origin(), rect.origin()], Blend::Lerp),
        Anchor::TopLeft,
    )
}

/// Right, wave back left, clockwise circle, home. Ends where it starts.
pub fn build_tracks(rect: Rect, window: Rect, radius: f64, timing: &Timing) -> Vec<PositionTrack> {
    vec![
        slide_center_to_right(rect, window, radius, timing),
        wave_right_to_left(rect, window, radius, timing),
        circle_cw(window, radius, timing),
        slide_left_to_center(rect, window, radius, timing),
    ]
}

/// Blink cycle over `frame_count` sprites, tinting red, green, blue on each new pair.
pub fn actor_cycle(frame_count: usize, timing: &Timing) -> TweenResult<ActorCycle> {
    if frame_count == 0 {
        return Err(TweenError::config("actor needs at least one frame"));
    }
    let last = u32::try_from(frame_count - 1)
        .map_err(|_| TweenError::config("too many actor frames"))?;
    let frames = (0..=last).chain([last]).map(|i| Value::Asset(AssetId(i)));
    let durations = Seq::cycle(BLINK_FRAMES.map(|f| timing.units(f)));
    let anim = Animation::new(durations, frames, Blend::Hold(HoldPolicy::HoldStart))
        .with_pairs(PairPolicy::Cycle)
        .with_clocking(timing.clocking);
    Ok(ActorCycle::new(
        anim,
        Seq::cycle([Rgba8::RED, Rgba8::GREEN, Rgba8::BLUE]),
    ))
}

/// A JSON-friendly value: numbers, nested lists, `#hex` colors or `{"asset": n}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Number(f64),
    List(Vec<ScriptValue>),
    Hex(String),
    Asset { asset: u32 },
}

impl ScriptValue {
    pub fn to_value(&self) -> TweenResult<Value> {
        Ok(match self {
            Self::Number(v) => Value::Scalar(*v),
            Self::List(items) => Value::Tuple(
                items
                    .iter()
                    .map(Self::to_value)
                    .collect::<TweenResult<Vec<_>>>()?,
            ),
            Self::Hex(s) => Value::Color(Rgba8::from_hex(s)?),
            Self::Asset { asset } => Value::Asset(AssetId(*asset)),
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationSpec {
    Repeat(f64),
    Once(Vec<f64>),
    Cycle(Vec<f64>),
}

impl DurationSpec {
    pub fn to_seq(&self) -> Seq<f64> {
        match self {
            Self::Repeat(d) => Seq::repeat(*d),
            Self::Once(ds) => Seq::once(ds.iter().copied()),
            Self::Cycle(ds) => Seq::cycle(ds.iter().copied()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackSpec {
    #[serde(default)]
    pub label: Option<String>,
    pub anchor: Anchor,
    pub durations: DurationSpec,
    pub values: Vec<ScriptValue>,
    #[serde(default)]
    pub blend: Blend,
    #[serde(default)]
    pub clocking: Clocking,
    #[serde(default)]
    pub ease: Ease,
    #[serde(default)]
    pub pairs: PairPolicy,
}

impl TrackSpec {
    pub fn to_track(&self, index: usize) -> TweenResult<PositionTrack> {
        if self.values.len() < 2 {
            return Err(TweenError::config(format!(
                "track {index} needs at least two values, got {}",
                self.values.len()
            )));
        }
        let values = self
            .values
            .iter()
            .map(ScriptValue::to_value)
            .collect::<TweenResult<Vec<_>>>()?;
        let anim = Animation::new(self.durations.to_seq(), values, self.blend.clone())
            .with_clocking(self.clocking)
            .with_ease(self.ease)
            .with_pairs(self.pairs);
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| format!("track-{index}"));
        Ok(PositionTrack::new(label, anim, self.anchor))
    }
}

/// A user-supplied choreography replacing [`build_tracks`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    pub tracks: Vec<TrackSpec>,
}

impl Script {
    pub fn from_json_str(s: &str) -> TweenResult<Self> {
        let script: Self = serde_json::from_str(s).context("parse script JSON")?;
        Ok(script)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> TweenResult<Self> {
        let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
        let script: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse script '{}'", path.display()))?;
        tracing::debug!(tracks = script.tracks.len(), "script loaded");
        Ok(script)
    }

    pub fn to_tracks(&self) -> TweenResult<Vec<PositionTrack>> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.to_track(i))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/script.rs"]
mod tests;
