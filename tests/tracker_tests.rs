//! Integration tests for ButtonTracker gesture classification

mod common;
use common::*;

use button_controller::{ActionType, ButtonTracker, PressState};

const DEBOUNCE: TestDuration = TestDuration(50);
const LONG_PRESS: TestDuration = TestDuration(1000);

/// Polls an active-high tracker created at t=0 from `from` to `until` (inclusive),
/// with the pin pressed during `[press_at, release_at)`.
fn run_press(
    tracker: &mut ButtonTracker<TestInstant>,
    press_at: u64,
    release_at: u64,
    from: u64,
    until: u64,
    step: u64,
) -> Vec<(u64, ActionType)> {
    let mut events = Vec::new();
    let mut t = from;
    while t <= until {
        let level = t >= press_at && t < release_at;
        if let Some(event) = tracker.sample(level, TestInstant(t), DEBOUNCE, LONG_PRESS) {
            events.push((t, event));
        }
        t += step;
    }
    events
}

fn count(events: &[(u64, ActionType)], action: ActionType) -> usize {
    events.iter().filter(|(_, a)| *a == action).count()
}

#[test]
fn held_past_threshold_fires_long_press_at_threshold_only() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));

    let events = run_press(&mut tracker, 1000, 2200, 0, 3000, POLL_MS);

    assert_eq!(events, vec![(2000, ActionType::LongPress)]);
    assert!(!tracker.is_pressed());
}

#[test]
fn short_press_fires_single_click_on_release() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));

    let events = run_press(&mut tracker, 1000, 1200, 0, 2000, POLL_MS);

    assert_eq!(events, vec![(1200, ActionType::SingleClick)]);
}

#[test]
fn pulse_shorter_than_debounce_after_registration_is_filtered() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));

    let mut t = 0;
    while t <= 500 {
        let level = t < 10;
        assert_eq!(tracker.sample(level, TestInstant(t), DEBOUNCE, LONG_PRESS), None);
        assert!(!tracker.is_pressed());
        t += POLL_MS;
    }
}

#[test]
fn pulse_shorter_than_debounce_after_transition_is_filtered() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));

    // Commit a release at t=1200 via a click, then pulse the pin for 20ms right after
    let events = run_press(&mut tracker, 1000, 1200, 0, 1200, POLL_MS);
    assert_eq!(count(&events, ActionType::SingleClick), 1);

    let events = run_press(&mut tracker, 1210, 1230, 1210, 3000, POLL_MS);
    assert!(events.is_empty());
    assert!(!tracker.is_pressed());
}

#[test]
fn committed_state_is_stable_inside_debounce_window() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));
    let mut seed: u32 = 0x2545_f491;

    for t in 0..=DEBOUNCE.0 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let level = seed & 0x1_0000 != 0;
        assert_eq!(tracker.sample(level, TestInstant(t), DEBOUNCE, LONG_PRESS), None);
        assert_eq!(tracker.state(), PressState::Released);
    }
}

#[test]
fn presses_between_debounce_and_threshold_are_single_clicks() {
    for hold in [60, 100, 500, 990] {
        let mut tracker = ButtonTracker::new(true, TestInstant(0));

        let events = run_press(&mut tracker, 1000, 1000 + hold, 0, 4000, POLL_MS);

        assert_eq!(count(&events, ActionType::SingleClick), 1, "hold {hold}ms");
        assert_eq!(count(&events, ActionType::LongPress), 0, "hold {hold}ms");
    }
}

#[test]
fn presses_beyond_threshold_are_long_presses() {
    for hold in [1010, 1500, 3000] {
        let mut tracker = ButtonTracker::new(true, TestInstant(0));

        let events = run_press(&mut tracker, 1000, 1000 + hold, 0, 6000, POLL_MS);

        assert_eq!(count(&events, ActionType::LongPress), 1, "hold {hold}ms");
        assert_eq!(count(&events, ActionType::SingleClick), 0, "hold {hold}ms");
    }
}

#[test]
fn bouncy_contacts_produce_one_click() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));
    let mut events = Vec::new();

    for t in (0..=1500).step_by(5) {
        let level = match t {
            // Press bounce
            1000..=1030 => (t / 5) % 2 == 0,
            1031..=1299 => true,
            // Release bounce
            1300..=1330 => (t / 5) % 2 == 1,
            _ => false,
        };
        if let Some(event) = tracker.sample(level, TestInstant(t), DEBOUNCE, LONG_PRESS) {
            events.push(event);
        }
    }

    assert_eq!(events, vec![ActionType::SingleClick]);
}

#[test]
fn consecutive_long_presses_each_fire() {
    let mut tracker = ButtonTracker::new(true, TestInstant(0));

    let first = run_press(&mut tracker, 1000, 2500, 0, 3000, POLL_MS);
    assert!(!tracker.is_long_pressed());
    let second = run_press(&mut tracker, 4000, 5500, 3010, 6000, POLL_MS);

    assert_eq!(first, vec![(2000, ActionType::LongPress)]);
    assert_eq!(second, vec![(5000, ActionType::LongPress)]);
}

#[test]
fn press_start_is_tracked_until_release() {
    let mut tracker = ButtonTracker::new(false, TestInstant(0));

    tracker.sample(false, TestInstant(100), DEBOUNCE, LONG_PRESS);
    assert_eq!(tracker.pressed_at(), Some(TestInstant(100)));

    tracker.sample(false, TestInstant(1100), DEBOUNCE, LONG_PRESS);
    assert_eq!(tracker.state(), PressState::PressedLong { since: TestInstant(100) });

    tracker.sample(true, TestInstant(1200), DEBOUNCE, LONG_PRESS);
    assert_eq!(tracker.pressed_at(), None);
    assert_eq!(tracker.last_transition_at(), TestInstant(1200));
}
