//! Core types shared by trackers and the controller.

use crate::time::TimeDuration;

/// Gesture kinds a handler can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActionType {
    /// Button pressed and released before the long-press duration elapsed.
    SingleClick,

    /// Button held down for at least the long-press duration.
    LongPress,
}

impl ActionType {
    /// Number of action types, used to size per-button handler slots.
    pub const COUNT: usize = 2;

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            ActionType::SingleClick => 0,
            ActionType::LongPress => 1,
        }
    }
}

/// An identifier for a button registered with a controller.
///
/// Ids are handed out in registration order and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub usize);

impl From<usize> for ButtonId {
    fn from(id: usize) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for usize {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// A completed gesture on a specific button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: ButtonId,
    pub action: ActionType,
}

impl ButtonEvent {
    /// Creates event.
    pub fn new(button: ButtonId, action: ActionType) -> Self {
        Self { button, action }
    }
}

/// Input mode applied to every pin registered with a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Internal pull-up. The button shorts the pin to ground, so pressed reads low.
    #[default]
    InputPullUp,

    /// Internal pull-down. The button connects the pin to VCC, so pressed reads high.
    InputPullDown,

    /// Floating input with external wiring. Pressed reads high.
    Input,
}

impl PinMode {
    /// Returns true if a pressed button reads as electrical high in this mode.
    #[inline]
    pub fn active_high(self) -> bool {
        !matches!(self, PinMode::InputPullUp)
    }
}

/// Controller configuration, fixed at construction.
///
/// Durations are shared by every button of a controller. A zero debounce still
/// requires a strictly positive delay between two committed transitions. A
/// long-press duration shorter than the debounce duration makes single clicks
/// practically unreachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig<D: TimeDuration> {
    /// Minimum time between two accepted state changes. Default: 50ms.
    pub debounce: D,

    /// Hold time after which a press counts as a long press. Default: 1s.
    pub long_press: D,

    /// Mode used when configuring registered pins. Default: pull-up.
    pub pin_mode: PinMode,
}

impl<D: TimeDuration> ControllerConfig<D> {
    pub const DEFAULT_DEBOUNCE_MS: u64 = 50;
    pub const DEFAULT_LONG_PRESS_MS: u64 = 1000;

    /// Sets the debounce duration.
    pub fn with_debounce(mut self, debounce: D) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the long-press duration.
    pub fn with_long_press(mut self, long_press: D) -> Self {
        self.long_press = long_press;
        self
    }

    /// Sets the pin mode used for newly registered buttons.
    pub fn with_pin_mode(mut self, pin_mode: PinMode) -> Self {
        self.pin_mode = pin_mode;
        self
    }
}

impl<D: TimeDuration> Default for ControllerConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(Self::DEFAULT_DEBOUNCE_MS),
            long_press: D::from_millis(Self::DEFAULT_LONG_PRESS_MS),
            pin_mode: PinMode::default(),
        }
    }
}
