//! Per-button debounce and gesture state machine.
//!
//! Provides [`ButtonTracker`], which turns raw level samples into debounced
//! press state and reports completed gestures. The tracker owns no pin and no
//! clock: callers feed it a level, a timestamp and the durations to apply, so
//! it can be driven from any polling loop or from tests.

use crate::time::TimeInstant;
use crate::types::ActionType;

/// Debounced state of a single button.
///
/// `Released -> Pressed` on a debounced press edge, `Pressed -> PressedLong`
/// once held for the long-press duration, and either pressed state back to
/// `Released` on a debounced release edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressState<I> {
    /// Not pressed.
    Released,
    /// Pressed since the given instant, long press not reached yet.
    Pressed { since: I },
    /// Pressed since the given instant and the long press already fired.
    PressedLong { since: I },
}

/// Debounce and click/long-press classification for one button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonTracker<I: TimeInstant> {
    active_high: bool,
    state: PressState<I>,
    last_transition: I,
}

impl<I: TimeInstant> ButtonTracker<I> {
    /// Creates a released tracker.
    ///
    /// `now` counts as the last transition, so the first edge is only accepted
    /// once the debounce duration has passed since creation.
    pub fn new(active_high: bool, now: I) -> Self {
        Self {
            active_high,
            state: PressState::Released,
            last_transition: now,
        }
    }

    /// Feeds one raw level sample taken at `now`.
    ///
    /// Returns the gesture completed by this sample, if any. At most one
    /// gesture is reported per call:
    /// - `SingleClick` when a debounced release ends a press shorter than
    ///   `long_press`,
    /// - `LongPress` the first time a press has been held for `long_press`.
    ///
    /// A release that ends a long press reports nothing.
    pub fn sample(
        &mut self,
        raw_level: bool,
        now: I,
        debounce: I::Duration,
        long_press: I::Duration,
    ) -> Option<ActionType> {
        let pressed_now = raw_level == self.active_high;
        let mut event = None;

        if pressed_now != self.is_pressed() && now.duration_since(self.last_transition) > debounce {
            self.last_transition = now;

            if pressed_now {
                self.state = PressState::Pressed { since: now };
            } else {
                let previous = core::mem::replace(&mut self.state, PressState::Released);
                if let PressState::Pressed { since } = previous {
                    if now.duration_since(since) < long_press {
                        event = Some(ActionType::SingleClick);
                    }
                }
            }
        }

        // Not gated by debounce, checked on every sample.
        if let PressState::Pressed { since } = self.state {
            if now.duration_since(since) >= long_press {
                self.state = PressState::PressedLong { since };
                event = Some(ActionType::LongPress);
            }
        }

        event
    }

    /// Returns the debounced press state.
    pub fn state(&self) -> PressState<I> {
        self.state
    }

    /// Returns true while the debounced state is pressed.
    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, PressState::Released)
    }

    /// Returns true if the long press already fired for the current press.
    pub fn is_long_pressed(&self) -> bool {
        matches!(self.state, PressState::PressedLong { .. })
    }

    /// Returns when the current press started, if pressed.
    pub fn pressed_at(&self) -> Option<I> {
        match self.state {
            PressState::Released => None,
            PressState::Pressed { since } | PressState::PressedLong { since } => Some(since),
        }
    }

    /// Returns when the debounced state last changed.
    pub fn last_transition_at(&self) -> I {
        self.last_transition
    }

    /// Returns true if a pressed button reads as electrical high.
    pub fn active_high(&self) -> bool {
        self.active_high
    }
}
