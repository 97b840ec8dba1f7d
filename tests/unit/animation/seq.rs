use super::*;

#[test]
fn once_runs_dry() {
    let mut s = Seq::once([1, 2]);
    assert_eq!(s.pull(), Pull::Item(1));
    assert_eq!(s.pull(), Pull::Item(2));
    assert_eq!(s.pull(), Pull::Exhausted);
    assert_eq!(s.pull(), Pull::Exhausted);
}

#[test]
fn repeat_never_runs_dry() {
    let mut s = Seq::repeat(60.0);
    assert!(s.by_ref().take(1000).all(|v| v == 60.0));
    assert!(s.is_infinite());
}

#[test]
fn cycle_wraps_and_resets() {
    let mut s = Seq::cycle([30, 15, 15]);
    let got: Vec<_> = s.by_ref().take(7).collect();
    assert_eq!(got, vec![30, 15, 15, 30, 15, 15, 30]);

    s.reset();
    assert_eq!(s.pull(), Pull::Item(30));
}

#[test]
fn empty_cycle_is_exhausted() {
    let mut s: Seq<u8> = Seq::cycle([]);
    assert_eq!(s.pull(), Pull::Exhausted);
    assert!(!s.is_infinite());
}

#[test]
fn pairs_overlap() {
    assert_eq!(pairs_of(&[0, 10, 20]), vec![(0, 10), (10, 20)]);
    assert!(pairs_of(&[1]).is_empty());
    assert!(pairs_of::<i32>(&[]).is_empty());
}

#[test]
fn pair_policy_cycle_repeats_pair_list() {
    let mut s = PairPolicy::Cycle.seq(&['a', 'b', 'c']);
    let got: Vec<_> = s.by_ref().take(4).collect();
    assert_eq!(got, vec![('a', 'b'), ('b', 'c'), ('a', 'b'), ('b', 'c')]);

    let mut once = PairPolicy::Once.seq(&['a', 'b']);
    assert_eq!(once.pull(), Pull::Item(('a', 'b')));
    assert_eq!(once.pull(), Pull::Exhausted);
}
