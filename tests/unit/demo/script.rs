use super::*;
use crate::animation::anim::Advance;
use crate::demo::io::{Clock, FixedClock};

fn window() -> Rect {
    Rect::new(0.0, 0.0, 600.0, 600.0)
}

fn start_rect() -> Rect {
    Rect::from_center_size(window().center(), (64.0, 64.0))
}

fn fps60() -> Fps {
    Fps::new(60, 1).unwrap()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

fn play(track: &mut PositionTrack, mut rect: Rect, dt: f64) -> (Rect, Rect, usize) {
    track.start().unwrap();
    let first = track.apply_to(rect).unwrap();
    let mut ticks = 0;
    while track.is_running() {
        track.advance(dt).unwrap();
        rect = track.apply_to(rect).unwrap();
        ticks += 1;
    }
    (first, rect, ticks)
}

#[test]
fn built_in_choreography_is_continuous_and_returns_home() {
    let timing = Timing::frames(fps60());
    let mut tracks = build_tracks(start_rect(), window(), DEFAULT_RADIUS, &timing);
    assert_eq!(tracks.len(), 4);

    let mut rect = start_rect();
    let mut total = 0;
    for track in &mut tracks {
        let (first, last, ticks) = play(track, rect, 16.0);
        assert!(
            close(first.center(), rect.center()),
            "{} starts away from the previous end",
            track.label()
        );
        rect = last;
        total += ticks;
    }
    assert_eq!(total, 60 + 120 + 120 + 60);
    assert!(close(rect.origin(), start_rect().origin()));
    assert!((rect.width() - 64.0).abs() < 1e-6);
}

#[test]
fn wave_track_stays_within_amplitude() {
    let timing = Timing::frames(fps60());
    let mut track = wave_right_to_left(start_rect(), window(), DEFAULT_RADIUS, &timing);
    track.start().unwrap();
    let mut rect = start_rect();
    while track.is_running() {
        track.advance(1.0).unwrap();
        rect = track.apply_to(rect).unwrap();
        assert!((rect.center().y - 300.0).abs() <= DEFAULT_RADIUS / 2.0 + 1e-9);
    }
    assert!(close(rect.center(), Point::new(0.0, 300.0)));
}

#[test]
fn circle_tracks_stay_on_radius() {
    let timing = Timing::frames(fps60());
    for mut track in [
        circle_cw(window(), 100.0, &timing),
        circle_ccw(window(), 100.0, &timing),
    ] {
        track.start().unwrap();
        while track.is_running() {
            track.advance(1.0).unwrap();
            let c = track.apply_to(start_rect()).unwrap().center();
            let r = (c - window().center()).hypot();
            assert!((r - 100.0).abs() < 1e-9);
        }
    }
}

#[test]
fn slide_right_to_left_crosses_the_window() {
    let timing = Timing::frames(fps60());
    let mut track = slide_right_to_left(start_rect(), window(), 200.0, &timing);
    let (first, last, ticks) = play(&mut track, start_rect(), 1.0);
    assert_eq!(ticks, 60);
    assert!(close(first.center(), Point::new(500.0, 300.0)));
    assert!(close(last.center(), Point::new(100.0, 300.0)));
}

#[test]
fn millis_timing_converts_frame_counts() {
    let timing = Timing {
        clocking: Clocking::Millis,
        fps: fps60(),
    };
    assert!((timing.units(60.0) - 1000.0).abs() < 1e-9);

    let mut track = slide_center_to_right(start_rect(), window(), DEFAULT_RADIUS, &timing);
    let (_, last, ticks) = play(&mut track, start_rect(), 500.0);
    assert_eq!(ticks, 2);
    assert!(close(last.center(), Point::new(600.0, 300.0)));
}

#[test]
fn millis_slide_takes_as_many_ticks_as_frame_slide() {
    let fps = fps60();
    let mut clock = FixedClock::new(fps);
    let millis = Timing {
        clocking: Clocking::Millis,
        fps,
    };
    assert_eq!(millis.units(60.0), 1000.0);

    let mut track = slide_center_to_right(start_rect(), window(), DEFAULT_RADIUS, &millis);
    let (_, last, ticks) = play(&mut track, start_rect(), clock.tick());
    assert_eq!(ticks, 60);
    assert!(close(last.center(), Point::new(600.0, 300.0)));

    let frames = Timing::frames(fps);
    let mut track = slide_center_to_right(start_rect(), window(), DEFAULT_RADIUS, &frames);
    assert_eq!(play(&mut track, start_rect(), 0.0).2, 60);
}

#[test]
fn actor_cycle_appends_last_frame_and_blinks() {
    let timing = Timing::frames(fps60());
    let mut actor = actor_cycle(3, &timing).unwrap();
    let values: Vec<u32> = actor
        .tween()
        .values()
        .iter()
        .map(|v| v.as_asset().unwrap().0)
        .collect();
    assert_eq!(values, vec![0, 1, 2, 2]);

    actor.start().unwrap();
    let mut frames = Vec::new();
    for _ in 0..120 {
        frames.push(actor.frame().unwrap().0);
        actor.advance(16.0).unwrap();
    }
    assert_eq!(frames.iter().filter(|f| **f == 0).count(), 60);
    assert_eq!(frames.iter().filter(|f| **f == 1).count(), 30);
    assert_eq!(frames.iter().filter(|f| **f == 2).count(), 30);

    assert!(actor_cycle(0, &timing).is_err());
}

#[test]
fn single_frame_actor_holds() {
    let timing = Timing::frames(fps60());
    let mut actor = actor_cycle(1, &timing).unwrap();
    actor.start().unwrap();
    for _ in 0..100 {
        assert_ne!(actor.advance(1.0).unwrap(), Advance::Finished);
        assert_eq!(actor.frame().unwrap(), AssetId(0));
    }
}

#[test]
fn script_json_builds_tracks() {
    let json = r##"
{
  "tracks": [
    {
      "label": "diag",
      "anchor": "top_left",
      "durations": { "repeat": 10 },
      "values": [[0, 0], [100, 100], [200, 0]]
    },
    {
      "anchor": "center",
      "durations": { "cycle": [30, 60] },
      "values": [0, 3.14159],
      "blend": { "circle": { "center": { "x": 300, "y": 300 }, "radius": 50 } },
      "clocking": "millis",
      "ease": "smoothstep"
    }
  ]
}
"##;
    let script = Script::from_json_str(json).unwrap();
    let mut tracks = script.to_tracks().unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].label(), "diag");
    assert_eq!(tracks[1].label(), "track-1");
    assert_eq!(tracks[1].target(), Anchor::Center);

    let (_, last, ticks) = play(&mut tracks[0], Rect::new(0.0, 0.0, 10.0, 10.0), 1.0);
    assert_eq!(ticks, 20);
    assert_eq!(last.origin(), Point::new(200.0, 0.0));

    let (first, _, _) = play(&mut tracks[1], Rect::new(0.0, 0.0, 10.0, 10.0), 16.0);
    assert!(close(first.center(), Point::new(350.0, 300.0)));
}

#[test]
fn script_values_convert() {
    let v = ScriptValue::List(vec![
        ScriptValue::Number(1.0),
        ScriptValue::Hex("#ff0000".into()),
        ScriptValue::Asset { asset: 7 },
    ]);
    assert_eq!(
        v.to_value().unwrap(),
        Value::Tuple(vec![
            Value::Scalar(1.0),
            Value::Color(Rgba8::RED),
            Value::Asset(AssetId(7)),
        ])
    );
    assert!(ScriptValue::Hex("red".into()).to_value().is_err());
}

#[test]
fn script_rejects_short_tracks_and_bad_json() {
    let script = Script::from_json_str(
        r#"{ "tracks": [
            { "anchor": "center", "durations": { "repeat": 1 }, "values": [[1, 2]] }
        ] }"#,
    )
    .unwrap();
    assert!(matches!(script.to_tracks(), Err(TweenError::Config(_))));

    assert!(Script::from_json_str("{ not json").is_err());
}

#[test]
fn script_from_missing_path_errors() {
    let err = Script::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("open script"));
}
