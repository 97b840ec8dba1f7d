//! pathtween is a small keyframe tweening engine and the demo that exercises it.
//!
//! - Interpolate [`Value`]s with [`lerp`] / [`invlerp`], or along a [`CircularArc`] or
//!   [`WaveY`] path
//! - Step an [`Animation`] through overlapping value pairs on frame or millisecond clocks
//! - Drive a rectangle through position tracks with a [`Driver`] and draw it with [`Demo`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod demo;
pub mod foundation;
pub mod render;

pub use crate::animation::anim::{Advance, Animation, Clocking, State, Tween};
pub use crate::animation::blend::Blend;
pub use crate::animation::ease::Ease;
pub use crate::animation::lerp::{HoldPolicy, Lerp, invlerp, invlerp_f64, lerp, lerp_f64};
pub use crate::animation::path::{CircularArc, WaveY};
pub use crate::animation::seq::{PairPolicy, Pull, Seq};
pub use crate::animation::trail::Trail;
pub use crate::animation::value::{AssetId, Value};
pub use crate::demo::driver::{Driver, Tick};
pub use crate::demo::roles::{ActorCycle, PositionTrack};
pub use crate::demo::run::{Demo, RunStats};
pub use crate::demo::script::Script;
pub use crate::foundation::core::{Anchor, Canvas, Fps, FrameIndex, Point, Rect, Rgba8};
pub use crate::foundation::error::{TweenError, TweenResult};
pub use crate::render::frames::{FileSink, FramePattern, FrameSink, InMemorySink};
pub use crate::render::sprite::Sprite;
pub use crate::render::surface::{Background, CpuSurface, Frame, RenderSurface};
