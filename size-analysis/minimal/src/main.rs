#![no_std]
#![no_main]

use button_controller::{
    ActionHandler, ActionQueue, ActionType, ButtonController, ButtonPin, ControllerConfig,
    PinMode, TimeDuration, TimeInstant, TimeSource,
};
use cortex_m_rt::entry;
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl Duration32 {
    const fn new(millis: u32) -> Self {
        Duration32(millis)
    }
}

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Minimal Pin Implementation
// ============================================================================

/// Zero-size pin implementation for measuring library overhead
pub struct MinimalPin;

impl ButtonPin for MinimalPin {
    fn configure(&mut self, mode: PinMode) {
        core::hint::black_box(mode);
    }

    fn read_level(&mut self) -> bool {
        core::hint::black_box(false)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// ============================================================================
// Minimal Handler
// ============================================================================

#[derive(Clone, Copy)]
pub enum AppAction {
    Toggle,
    PowerOff,
}

impl ActionHandler for AppAction {
    fn on_action(&self) {
        core::hint::black_box(*self as u8);
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_controllers() {
    let time_source = MinimalTimeSource;

    // Inline dispatch, 4 buttons
    let mut inline = ButtonController::<Instant32, _, MinimalPin, AppAction, _, 4>::new(
        &time_source,
        ControllerConfig::default(),
    );
    if let Ok(id) = inline.register(MinimalPin, ActionType::SingleClick, AppAction::Toggle) {
        let _ = inline.set_action(id, ActionType::LongPress, AppAction::PowerOff);
    }
    inline.update();
    core::hint::black_box(inline);

    // Queued dispatch, 8 buttons
    let config = ControllerConfig::default()
        .with_debounce(Duration32::new(20))
        .with_long_press(Duration32::new(2000))
        .with_pin_mode(PinMode::InputPullDown);
    let mut queue = ActionQueue::<AppAction, 8>::new();
    let (sender, mut receiver) = queue.split();
    let mut queued = ButtonController::<Instant32, _, MinimalPin, AppAction, _, 8>::with_executor(
        &time_source,
        config,
        sender,
    );
    for _ in 0..8 {
        let _ = queued.register(MinimalPin, ActionType::SingleClick, AppAction::Toggle);
    }
    queued.update();
    receiver.run_pending();
    core::hint::black_box(queued);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_controllers();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
