use crate::{
    animation::anim::{Animation, Tween},
    animation::seq::{Pull, Seq},
    animation::trail::Trail,
    demo::roles::{ActorCycle, PositionTrack},
    foundation::core::{Point, Rect},
    foundation::error::TweenResult,
};

/// Outcome of one driver tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// Tracks and trail are both exhausted. Issued exactly once.
    Quit,
    /// Ticked again after `Quit`.
    Done,
}

/// Plays position tracks in order next to an always-running actor cycle.
///
/// Per tick the actor advances first, then the active track. Once the tracks run
/// out the trail drains one entry per tick before `Quit` is reported.
#[derive(Debug)]
pub struct Driver<T = Animation> {
    actor: ActorCycle<T>,
    tracks: Seq<PositionTrack<T>>,
    active: Option<PositionTrack<T>>,
    rect: Rect,
    trail: Trail<Point>,
    quit_sent: bool,
}

impl<T: Tween + Clone> Driver<T> {
    /// Starts the actor and the first track.
    pub fn new(
        mut actor: ActorCycle<T>,
        rect: Rect,
        tracks: Seq<PositionTrack<T>>,
    ) -> TweenResult<Self> {
        actor.start()?;
        let mut driver = Self {
            actor,
            tracks,
            active: None,
            rect,
            trail: Trail::default(),
            quit_sent: false,
        };
        driver.next_track()?;
        Ok(driver)
    }

    pub fn with_trail(mut self, trail: Trail<Point>) -> Self {
        self.trail = trail;
        self
    }

    fn next_track(&mut self) -> TweenResult<()> {
        self.active = match self.tracks.pull() {
            Pull::Item(mut track) => {
                track.start()?;
                tracing::debug!(track = track.label(), "track started");
                Some(track)
            }
            Pull::Exhausted => {
                tracing::debug!(trail = self.trail.len(), "tracks exhausted, draining trail");
                None
            }
        };
        Ok(())
    }

    pub fn tick(&mut self, dt: f64) -> TweenResult<Tick> {
        self.actor.advance(dt)?;

        if let Some(track) = self.active.as_mut() {
            track.advance(dt)?;
            self.rect = track.apply_to(self.rect)?;
            self.trail.push(self.rect.center());
            if !track.is_running() {
                self.next_track()?;
            }
            return Ok(Tick::Continue);
        }

        if self.trail.pop_oldest().is_some() {
            return Ok(Tick::Continue);
        }
        if self.quit_sent {
            return Ok(Tick::Done);
        }
        self.quit_sent = true;
        Ok(Tick::Quit)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn trail(&self) -> &Trail<Point> {
        &self.trail
    }

    pub fn actor(&self) -> &ActorCycle<T> {
        &self.actor
    }

    pub fn active(&self) -> Option<&PositionTrack<T>> {
        self.active.as_ref()
    }

    pub fn is_draining(&self) -> bool {
        self.active.is_none() && !self.quit_sent
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/driver.rs"]
mod tests;
