//! Clocks and event sources the render loop talks to.

use std::{
    collections::VecDeque,
    thread,
    time::{Duration, Instant},
};

use crate::foundation::core::Fps;

/// Paces the loop. `tick` returns the milliseconds since the previous tick.
pub trait Clock {
    fn tick(&mut self) -> f64;
}

/// Deterministic clock for headless runs: every tick is exactly one frame long.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedClock {
    step_ms: f64,
}

impl FixedClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            step_ms: fps.frame_duration_ms(),
        }
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> f64 {
        self.step_ms
    }
}

/// Sleeps off the rest of each frame so ticks land at most `fps` times a second.
#[derive(Debug)]
pub struct WallClock {
    frame: Duration,
    last: Option<Instant>,
}

impl WallClock {
    pub fn new(fps: Fps) -> Self {
        Self {
            frame: Duration::from_secs_f64(fps.frame_duration_ms() / 1000.0),
            last: None,
        }
    }
}

impl Clock for WallClock {
    fn tick(&mut self) -> f64 {
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0.0;
        };
        let spent = last.elapsed();
        if spent < self.frame {
            thread::sleep(self.frame - spent);
        }
        let now = Instant::now();
        self.last = Some(now);
        now.duration_since(last).as_secs_f64() * 1000.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    Escape,
    Key(char),
}

impl Event {
    /// Window close, Escape, or `q`.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit | Self::Escape | Self::Key('q' | 'Q'))
    }
}

pub trait EventSource {
    fn poll(&mut self) -> Vec<Event>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvents;

impl EventSource for NoEvents {
    fn poll(&mut self) -> Vec<Event> {
        Vec::new()
    }
}

/// Replays events at fixed poll counts.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    polls: u64,
    queue: VecDeque<(u64, Event)>,
}

impl ScriptedEvents {
    /// Lets `n` polls through quietly, then delivers `Quit`.
    pub fn quit_after(n: u64) -> Self {
        Self::default().at(n.saturating_add(1), Event::Quit)
    }

    /// Queues `event` for the 1-based poll number `poll`. Calls must be in
    /// non-decreasing order.
    pub fn at(mut self, poll: u64, event: Event) -> Self {
        self.queue.push_back((poll, event));
        self
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Vec<Event> {
        self.polls += 1;
        let mut out = Vec::new();
        while let Some(&(at, event)) = self.queue.front() {
            if at > self.polls {
                break;
            }
            self.queue.pop_front();
            out.push(event);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/io.rs"]
mod tests;
