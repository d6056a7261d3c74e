//! Time abstraction traits for platform-agnostic timing.
//!
//! Debounce and long-press detection only ever need "how long since". Implement
//! these traits for your platform's timer (embassy, a SysTick counter, `std`).

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
///
/// Ordering must follow the timer's own resolution, so thresholds are
/// compared exactly even when they are not whole milliseconds.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Wrapping timers should return the wrapped difference.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

