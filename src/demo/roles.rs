//! Role wrappers that give a generic tween a job in the demo.

use crate::{
    animation::anim::{Advance, Animation, Tween},
    animation::seq::{Pull, Seq},
    animation::value::AssetId,
    foundation::core::{Anchor, Rect, Rgba8},
    foundation::error::TweenResult,
};

/// Drives one rectangle attribute (top-left or center) from a point-valued tween.
#[derive(Clone, Debug)]
pub struct PositionTrack<T = Animation> {
    label: String,
    tween: T,
    target: Anchor,
}

impl<T: Tween> PositionTrack<T> {
    pub fn new(label: impl Into<String>, tween: T, target: Anchor) -> Self {
        Self {
            label: label.into(),
            tween,
            target,
        }
    }

    pub fn start(&mut self) -> TweenResult<Advance> {
        self.tween.start()
    }

    pub fn advance(&mut self, dt: f64) -> TweenResult<Advance> {
        self.tween.advance(dt)
    }

    /// Returns `rect` moved so its target anchor sits on the current point.
    pub fn apply_to(&self, rect: Rect) -> TweenResult<Rect> {
        let p = self.tween.current_value()?.as_point()?;
        Ok(self.target.apply(rect, p))
    }

    pub fn is_running(&self) -> bool {
        self.tween.is_running()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> Anchor {
        self.target
    }

    pub fn tween(&self) -> &T {
        &self.tween
    }
}

/// Appearance cycler: an asset-valued tween plus a tint rotated on every new pair.
#[derive(Clone, Debug)]
pub struct ActorCycle<T = Animation> {
    tween: T,
    tints: Seq<Rgba8>,
    tint: Rgba8,
}

impl<T: Tween> ActorCycle<T> {
    pub fn new(tween: T, tints: Seq<Rgba8>) -> Self {
        Self {
            tween,
            tints,
            tint: Rgba8::WHITE,
        }
    }

    pub fn start(&mut self) -> TweenResult<()> {
        self.tints.reset();
        let adv = self.tween.start()?;
        self.on_advance(adv);
        Ok(())
    }

    pub fn advance(&mut self, dt: f64) -> TweenResult<Advance> {
        let adv = self.tween.advance(dt)?;
        self.on_advance(adv);
        Ok(adv)
    }

    fn on_advance(&mut self, adv: Advance) {
        if let Advance::Segment(_) = adv
            && let Pull::Item(tint) = self.tints.pull()
        {
            self.tint = tint;
        }
    }

    pub fn frame(&self) -> TweenResult<AssetId> {
        self.tween.current_value()?.as_asset()
    }

    pub fn tint(&self) -> Rgba8 {
        self.tint
    }

    pub fn tween(&self) -> &T {
        &self.tween
    }
}

impl ActorCycle<Animation> {
    /// `elapsed / duration` readout of the current blink segment.
    pub fn readout(&self) -> String {
        format!(
            "{:03} / {:03}",
            self.tween.elapsed() as u64,
            self.tween.duration() as u64
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/roles.rs"]
mod tests;
