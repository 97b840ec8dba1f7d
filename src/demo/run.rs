use crate::{
    animation::lerp::Lerp,
    demo::driver::{Driver, Tick},
    demo::io::{Clock, Event, EventSource, NoEvents},
    foundation::core::{FrameIndex, Rgba8},
    foundation::error::{TweenError, TweenResult},
    render::frames::FrameSink,
    render::sprite::Sprite,
    render::surface::{Background, Frame, RenderSurface},
};

/// Trail gradient, oldest segment first.
pub const TRAIL_START: Rgba8 = Rgba8::rgb(0xC3, 0x37, 0x64);
pub const TRAIL_END: Rgba8 = Rgba8::rgb(0x1D, 0x26, 0x71);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames drawn.
    pub frames: u64,
    /// Frames handed to the sink.
    pub saved: u64,
}

/// The render loop: clock, events, driver tick, draw, sink.
pub struct Demo {
    driver: Driver,
    surface: Box<dyn RenderSurface>,
    background: Background,
    sprites: Vec<Sprite>,
    clock: Box<dyn Clock>,
    events: Box<dyn EventSource>,
    sink: Option<Box<dyn FrameSink>>,
    debug_actor: bool,
    stats: RunStats,
}

impl Demo {
    /// `sprites[i]` is drawn whenever the actor shows frame `AssetId(i)`.
    pub fn new(
        driver: Driver,
        surface: Box<dyn RenderSurface>,
        sprites: Vec<Sprite>,
        clock: Box<dyn Clock>,
    ) -> TweenResult<Self> {
        if sprites.is_empty() {
            return Err(TweenError::config("demo needs at least one actor sprite"));
        }
        Ok(Self {
            driver,
            surface,
            background: Background::default(),
            sprites,
            clock,
            events: Box::new(NoEvents),
            sink: None,
            debug_actor: false,
            stats: RunStats::default(),
        })
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_events(mut self, events: Box<dyn EventSource>) -> Self {
        self.events = events;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn FrameSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_debug_actor(mut self, on: bool) -> Self {
        self.debug_actor = on;
        self
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Runs until a quit event arrives or the driver reports `Quit`.
    ///
    /// The frame of the tick that reported `Quit` is still drawn and saved.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) -> TweenResult<RunStats> {
        loop {
            let dt = self.clock.tick();
            if self.events.poll().iter().any(Event::is_quit) {
                tracing::info!("quit requested");
                break;
            }

            let tick = self.driver.tick(dt)?;
            if tick == Tick::Done {
                break;
            }
            self.step()?;
            tracing::trace!(frame = self.stats.frames, dt, "tick");

            if tick == Tick::Quit {
                break;
            }
        }
        tracing::info!(
            frames = self.stats.frames,
            saved = self.stats.saved,
            "run finished"
        );
        Ok(self.stats)
    }

    fn step(&mut self) -> TweenResult<()> {
        let frame = self.draw()?;
        if let Some(sink) = self.sink.as_mut() {
            sink.push_frame(FrameIndex(self.stats.frames), &frame)?;
            self.stats.saved += 1;
        }
        self.stats.frames += 1;
        Ok(())
    }

    /// Background, actor, trail, then the optional debug outline.
    pub fn draw(&mut self) -> TweenResult<Frame> {
        self.surface.clear(&self.background);

        let actor = self.driver.actor();
        let id = actor.frame()?;
        let sprite = self.sprites.get(id.0 as usize).ok_or_else(|| {
            TweenError::render(format!(
                "actor frame {} has no sprite ({} loaded)",
                id.0,
                self.sprites.len()
            ))
        })?;
        let rect = self.driver.rect();
        self.surface.blit(sprite, rect.origin());

        let trail = self.driver.trail();
        if trail.len() > 1 {
            for (t, a, b) in trail.segments() {
                self.surface.line(*a, *b, Rgba8::lerp(&TRAIL_START, &TRAIL_END, t));
            }
        }

        if self.debug_actor {
            self.surface.outline(rect, actor.tint());
            tracing::debug!(actor = %actor.readout(), "actor segment");
        }

        self.surface.finish()
    }
}

impl std::fmt::Debug for Demo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Demo")
            .field("driver", &self.driver)
            .field("sprites", &self.sprites.len())
            .field("debug_actor", &self.debug_actor)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/run.rs"]
mod tests;
