//! End-to-end behavior of the typewriter loop against the fake host.

use std::time::Duration;

use pretty_assertions::assert_eq;
use typecast_core::harness::{FakeHost, FrameClock};
use typecast_core::{
    Direction, Mount, MotionPreference, TickOutcome, TypewriterConfig, TypewriterLoop,
};

const FRAME: Duration = Duration::from_millis(1);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn fast(phrases: &[&str]) -> TypewriterConfig {
    TypewriterConfig::new()
        .phrases(phrases.iter().copied())
        .typing_interval(ms(10))
        .erasing_interval(ms(5))
        .hold_after_type(ms(40))
        .hold_after_erase(ms(20))
}

fn start(config: &TypewriterConfig) -> TypewriterLoop<FakeHost> {
    TypewriterLoop::mount(Some(FakeHost::new()), config, MotionPreference::full())
        .into_running()
        .expect("animation should start")
}

/// Deliver 1ms frames until the phrase index changes.
fn run_until_rotation(lp: &mut TypewriterLoop<FakeHost>, clock: &mut FrameClock) {
    let start = lp.typewriter().phrase_index();
    for _ in 0..100_000 {
        clock.advance(FRAME);
        assert_eq!(clock.fire(lp), TickOutcome::Continue);
        if lp.typewriter().phrase_index() != start {
            return;
        }
    }
    panic!("phrase never rotated");
}

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

#[test]
fn missing_mount_point_schedules_nothing() {
    let mount = TypewriterLoop::<FakeHost>::mount(None, &fast(&["A"]), MotionPreference::full());
    assert!(matches!(mount, Mount::Absent));
    assert!(!mount.is_running());
}

#[test]
fn reduced_motion_renders_first_phrase_once() {
    let config = TypewriterConfig::default();
    let mount = TypewriterLoop::mount(Some(FakeHost::new()), &config, MotionPreference::reduced());
    let Mount::Static(host) = mount else {
        panic!("expected static mount");
    };
    assert_eq!(host.writes(), &["FullStack Developer".to_owned()]);
    assert_eq!(host.text(), "FullStack Developer");
    assert_eq!(host.frame_requests(), 0);
    assert!(!host.has_listeners());
}

#[test]
fn override_under_reduced_motion_matches_full_motion() {
    let config = fast(&["Hey", "You"]);
    let mut forced = TypewriterLoop::mount(
        Some(FakeHost::new()),
        &config,
        MotionPreference::reduced().force(true),
    )
    .into_running()
    .expect("override should animate");
    let mut plain = start(&config);

    let mut a = FrameClock::new();
    let mut b = FrameClock::new();
    assert_eq!(a.run(&mut forced, FRAME, 500), 500);
    assert_eq!(b.run(&mut plain, FRAME, 500), 500);
    assert_eq!(forced.host().writes(), plain.host().writes());
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

#[test]
fn partial_interval_stays_in_accumulator() {
    let mut lp = start(&TypewriterConfig::new().phrases(["Hi"]).typing_interval(ms(10)));
    let mut clock = FrameClock::new();
    for t in [0, 10, 20, 25] {
        clock.set(ms(t));
        clock.fire(&mut lp);
    }
    assert_eq!(lp.host().text(), "Hi");
    assert_eq!(lp.typewriter().accumulator(), ms(5));
}

#[test]
fn speed_is_independent_of_refresh_rate() {
    let config = fast(&["abcdefgh"]);
    let mut slow = start(&config);
    let mut quick = start(&config);
    // 60Hz-ish vs 240Hz-ish over the same wall time; each frame lands on an
    // interval boundary at 10ms / 2.5ms so both type 4 characters in 40ms.
    FrameClock::new().run(&mut slow, ms(10), 5);
    FrameClock::new().run(&mut quick, Duration::from_micros(2_500), 17);
    assert_eq!(slow.host().text(), "abcd");
    assert_eq!(quick.host().text(), "abcd");
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

#[test]
fn rotation_is_cyclic() {
    let mut lp = start(&fast(&["A", "B"]));
    let mut clock = FrameClock::new();
    clock.fire(&mut lp);

    run_until_rotation(&mut lp, &mut clock);
    assert_eq!(lp.typewriter().current_phrase().as_str(), "B");
    assert_eq!(lp.typewriter().direction(), Direction::Typing);

    run_until_rotation(&mut lp, &mut clock);
    assert_eq!(lp.typewriter().current_phrase().as_str(), "A");
}

#[test]
fn every_phrase_erases_back_to_empty() {
    let config = fast(&["FullStack Developer", "Design System"]);
    let mut lp = start(&config);
    let mut clock = FrameClock::new();
    clock.fire(&mut lp);

    for expected in ["FullStack Developer", "Design System"] {
        let mut longest = String::new();
        let index = lp.typewriter().phrase_index();
        while lp.typewriter().phrase_index() == index {
            clock.advance(FRAME);
            clock.fire(&mut lp);
            if lp.host().text().len() > longest.len() {
                longest = lp.host().text().to_owned();
            }
        }
        assert_eq!(longest, expected);
        assert_eq!(lp.host().text(), "");
    }
}

#[test]
fn holds_delay_the_next_phase() {
    let mut lp = start(&fast(&["A"]));
    let mut clock = FrameClock::new();
    for t in [0, 10, 20] {
        clock.set(ms(t));
        clock.fire(&mut lp);
    }
    assert_eq!(lp.typewriter().direction(), Direction::Erasing);
    // 40ms hold, then 5ms erase interval.
    clock.set(ms(55));
    clock.fire(&mut lp);
    clock.set(ms(60));
    clock.fire(&mut lp);
    assert_eq!(lp.host().text(), "A");
    clock.set(ms(65));
    clock.fire(&mut lp);
    assert_eq!(lp.host().text(), "");
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[test]
fn hidden_period_does_not_cause_a_burst() {
    let mut lp = start(&fast(&["abcdefghij"]));
    let mut clock = FrameClock::new();
    clock.run(&mut lp, FRAME, 25); // t=24ms: two characters typed
    assert_eq!(lp.typewriter().cursor(), 2);

    lp.host_mut().set_hidden(true);
    lp.on_visibility_change();
    clock.advance(FRAME);
    clock.run(&mut lp, ms(16), 3_750); // about a minute hidden
    assert_eq!(lp.typewriter().cursor(), 2);

    lp.host_mut().set_hidden(false);
    lp.on_visibility_change();
    clock.advance(ms(16));
    clock.fire(&mut lp);
    assert_eq!(lp.typewriter().cursor(), 2);
    assert_eq!(lp.typewriter().accumulator(), Duration::ZERO);

    clock.advance(ms(16));
    clock.fire(&mut lp);
    assert_eq!(lp.typewriter().cursor(), 3);
    assert_eq!(lp.host().text(), "abc");
}

#[test]
fn hidden_frames_without_visibility_event_still_avoid_burst() {
    let mut lp = start(&fast(&["abcdefghij"]));
    let mut clock = FrameClock::new();
    clock.run(&mut lp, FRAME, 11);
    assert_eq!(lp.typewriter().cursor(), 1);

    lp.host_mut().set_hidden(true);
    clock.advance(FRAME);
    clock.run(&mut lp, ms(100), 600);
    lp.host_mut().set_hidden(false);
    clock.advance(ms(10));
    clock.fire(&mut lp);
    assert_eq!(lp.typewriter().cursor(), 2);
}

#[test]
fn visibility_reset_keeps_progress_and_hold() {
    let mut lp = start(&fast(&["A"]));
    let mut clock = FrameClock::new();
    for t in [0, 10, 20] {
        clock.set(ms(t));
        clock.fire(&mut lp);
    }
    let hold = lp.typewriter().hold_remaining();
    lp.on_visibility_change();
    assert_eq!(lp.typewriter().hold_remaining(), hold);
    assert_eq!(lp.typewriter().cursor(), 1);
    assert_eq!(lp.typewriter().direction(), Direction::Erasing);
    assert_eq!(lp.typewriter().last_frame(), None);
}

// ---------------------------------------------------------------------------
// Teardown
// ---------------------------------------------------------------------------

#[test]
fn teardown_stops_the_harness() {
    let mut lp = start(&fast(&["Hi"]));
    let mut clock = FrameClock::new();
    assert_eq!(clock.run(&mut lp, FRAME, 5), 5);
    lp.teardown();
    lp.teardown();
    assert_eq!(clock.run(&mut lp, FRAME, 5), 0);
    assert!(!lp.host().has_listeners());
    assert_eq!(lp.host().detach_calls(), 1);
}
