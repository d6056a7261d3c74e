//! Shared test infrastructure for button-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_controller::{
    ActionHandler, ButtonPin, ControllerConfig, PinMode, TimeDuration, TimeInstant, TimeSource,
};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Electrical line shared between a test and the pins it hands to a controller
pub struct MockLine {
    level: Cell<bool>,
    mode: Cell<Option<PinMode>>,
    reads: Cell<u32>,
}

impl MockLine {
    /// Line idling at the given level
    pub fn new(level: bool) -> Self {
        Self {
            level: Cell::new(level),
            mode: Cell::new(None),
            reads: Cell::new(0),
        }
    }

    pub fn set_level(&self, level: bool) {
        self.level.set(level);
    }

    pub fn mode(&self) -> Option<PinMode> {
        self.mode.get()
    }

    pub fn reads(&self) -> u32 {
        self.reads.get()
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { line: self }
    }
}

/// Pin reading from a [`MockLine`]
pub struct MockPin<'a> {
    line: &'a MockLine,
}

impl ButtonPin for MockPin<'_> {
    fn configure(&mut self, mode: PinMode) {
        self.line.mode.set(Some(mode));
    }

    fn read_level(&mut self) -> bool {
        self.line.reads.set(self.line.reads.get() + 1);
        self.line.level.get()
    }
}

// ============================================================================
// Mock Handler
// ============================================================================

/// Handler counting its invocations
#[derive(Clone, Copy)]
pub struct Counter<'a>(pub &'a Cell<u32>);

impl ActionHandler for Counter<'_> {
    fn on_action(&self) {
        self.0.set(self.0.get() + 1);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// 50ms debounce, 1000ms long press, pull-up pins
pub fn default_config() -> ControllerConfig<TestDuration> {
    ControllerConfig::default()
}

/// Milliseconds between polls in simulated main loops
pub const POLL_MS: u64 = 10;
