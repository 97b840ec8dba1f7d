use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use pathtween::{
    Background, Canvas, Clocking, CpuSurface, Demo, Driver, FileSink, Fps, FramePattern, Rect,
    Script, Seq, Sprite,
    demo::io::{Clock, FixedClock, ScriptedEvents, WallClock},
    demo::script::{DEFAULT_RADIUS, Timing, actor_cycle, build_tracks},
};

/// Side length of the synthesized actor when no `--actor` images are given.
const DEFAULT_ACTOR_SIZE: u32 = 64;

/// Moves an actor through slides, a wave and a circle, leaving a fading trail.
#[derive(Parser, Debug)]
#[command(name = "pathtween", version)]
struct Cli {
    /// Window size as `W,H` or `W H`. Ignored when `--background` is given.
    #[arg(long, default_value = "600,600", value_parser = parse_size)]
    size: Canvas,

    /// Format string to write frames to, e.g. `path/to/frames/%04d.png`.
    #[arg(long)]
    output: Option<String>,

    /// Endlessly repeat the choreography.
    #[arg(long)]
    repeat: bool,

    /// Run headless with a fixed frame step instead of pacing to the wall clock.
    #[arg(long)]
    no_gui: bool,

    /// Actor frame image. Give one per blink frame: open, half shut, shut.
    #[arg(long = "actor")]
    actor: Vec<PathBuf>,

    /// Background image; its size becomes the window size.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Outline the actor in its current tint and log the blink readout.
    #[arg(long)]
    debug_actor: bool,

    /// JSON choreography replacing the built-in tracks.
    #[arg(long)]
    script: Option<PathBuf>,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,

    /// Whether segment durations count frames or milliseconds.
    #[arg(long, value_enum, default_value_t = ClockingChoice::Frames)]
    clocking: ClockingChoice,

    /// Log segment and track transitions.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ClockingChoice {
    Frames,
    Millis,
}

impl From<ClockingChoice> for Clocking {
    fn from(c: ClockingChoice) -> Self {
        match c {
            ClockingChoice::Frames => Clocking::Frames,
            ClockingChoice::Millis => Clocking::Millis,
        }
    }
}

fn parse_size(s: &str) -> Result<Canvas, String> {
    Canvas::parse_size(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(false)
        .init();
    run(cli)
}

fn load_sprites(paths: &[PathBuf]) -> anyhow::Result<Vec<Sprite>> {
    if paths.is_empty() {
        return Ok(Sprite::default_actor_frames(DEFAULT_ACTOR_SIZE)?);
    }
    paths
        .iter()
        .map(|p| Sprite::load(p).with_context(|| format!("load actor '{}'", p.display())))
        .collect()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let fps = Fps::new(cli.fps, 1)?;
    let timing = Timing {
        clocking: cli.clocking.into(),
        fps,
    };

    let background = cli
        .background
        .as_deref()
        .map(|p| {
            Sprite::load(p).with_context(|| format!("load background '{}'", p.display()))
        })
        .transpose()?;
    let canvas = match &background {
        Some(bg) => Canvas::new(bg.width(), bg.height())?,
        None => cli.size,
    };
    let window = canvas.rect();

    let sprites = load_sprites(&cli.actor)?;
    let (w, h) = sprites
        .iter()
        .fold((0, 0), |(w, h), s| (w.max(s.width()), h.max(s.height())));
    let rect = Rect::from_center_size(window.center(), (f64::from(w), f64::from(h)));

    let tracks = match &cli.script {
        Some(p) => Script::from_path(p)?.to_tracks()?,
        None => build_tracks(rect, window, DEFAULT_RADIUS, &timing),
    };
    let tracks = if cli.repeat {
        Seq::cycle(tracks)
    } else {
        Seq::once(tracks)
    };
    let driver = Driver::new(actor_cycle(sprites.len(), &timing)?, rect, tracks)?;

    let clock: Box<dyn Clock> = if cli.no_gui {
        Box::new(FixedClock::new(fps))
    } else {
        tracing::info!(fps = cli.fps, "pacing to wall clock");
        Box::new(WallClock::new(fps))
    };

    let mut demo = Demo::new(driver, Box::new(CpuSurface::new(canvas)?), sprites, clock)?
        .with_debug_actor(cli.debug_actor);
    if let Some(bg) = background {
        demo = demo.with_background(Background::Image(bg));
    }
    if let Some(pattern) = &cli.output {
        demo = demo.with_sink(Box::new(FileSink::new(FramePattern::parse(pattern)?)));
    }
    if let Some(n) = cli.max_frames {
        demo = demo.with_events(Box::new(ScriptedEvents::quit_after(n)));
    }

    demo.run()?;
    Ok(())
}
