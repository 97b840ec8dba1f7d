use super::*;

#[test]
fn fixed_clock_steps_one_frame() {
    let mut clock = FixedClock::new(Fps::new(50, 1).unwrap());
    assert_eq!(clock.tick(), 20.0);
    assert_eq!(clock.tick(), 20.0);
}

#[test]
fn wall_clock_first_tick_is_zero_then_paces() {
    let mut clock = WallClock::new(Fps::new(100, 1).unwrap());
    assert_eq!(clock.tick(), 0.0);
    let dt = clock.tick();
    assert!(dt >= 9.0, "tick returned {dt}ms, expected at least one frame");
}

#[test]
fn quit_keys() {
    assert!(Event::Quit.is_quit());
    assert!(Event::Escape.is_quit());
    assert!(Event::Key('q').is_quit());
    assert!(Event::Key('Q').is_quit());
    assert!(!Event::Key('x').is_quit());
}

#[test]
fn no_events_is_silent() {
    let mut src = NoEvents;
    for _ in 0..10 {
        assert!(src.poll().is_empty());
    }
}

#[test]
fn scripted_quit_after_n_polls() {
    let mut src = ScriptedEvents::quit_after(3);
    assert!(src.poll().is_empty());
    assert!(src.poll().is_empty());
    assert!(src.poll().is_empty());
    assert_eq!(src.poll(), vec![Event::Quit]);
    assert!(src.poll().is_empty());
    assert_eq!(src.polls(), 5);
}

#[test]
fn scripted_events_batch_on_same_poll() {
    let mut src = ScriptedEvents::default()
        .at(1, Event::Key('a'))
        .at(2, Event::Key('b'))
        .at(2, Event::Escape);
    assert_eq!(src.poll(), vec![Event::Key('a')]);
    assert_eq!(src.poll(), vec![Event::Key('b'), Event::Escape]);
    assert!(src.poll().is_empty());
}
