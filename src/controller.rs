//! Button controller: registration, polling and gesture dispatch.

use crate::action::{ActionExecutor, ActionHandler, InlineExecutor};
use crate::pin::ButtonPin;
use crate::time::{TimeInstant, TimeSource};
use crate::tracker::{ButtonTracker, PressState};
use crate::types::{ActionType, ButtonEvent, ButtonId, ControllerConfig};
use heapless::Vec;

/// Errors that can occur during controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerError {
    /// The controller already holds its maximum number of buttons.
    CapacityExceeded,

    /// The specified button ID was never registered.
    InvalidButtonId(ButtonId),
}

impl core::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ControllerError::CapacityExceeded => {
                write!(f, "controller is full, cannot register more buttons")
            }
            ControllerError::InvalidButtonId(id) => {
                write!(f, "button ID {} is not registered", id.0)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ControllerError {}

struct Button<I: TimeInstant, P, H> {
    pin: P,
    tracker: ButtonTracker<I>,
    actions: [Option<H>; ActionType::COUNT],
}

/// Polls a set of buttons and dispatches their gestures.
///
/// Buttons are registered once during setup and never removed; each gets a
/// [`ButtonId`] equal to its registration index. Call [`update`](Self::update)
/// from the main loop, typically every 10ms. Each call samples every button in
/// id order and submits the handler registered for each completed gesture to
/// the executor.
///
/// One pin is one tracker: pins are moved into the controller, so attach
/// further action types to an existing button with
/// [`set_action`](Self::set_action) instead of registering the pin again.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `P` - Pin implementation type (must be same for all buttons)
/// * `H` - Action handler type
/// * `E` - Executor that receives fired gestures
/// * `MAX_BUTTONS` - Maximum number of buttons this controller can hold
pub struct ButtonController<'t, I, T, P, H, E, const MAX_BUTTONS: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: ButtonPin,
    E: ActionExecutor<H>,
{
    buttons: Vec<Button<I, P, H>, MAX_BUTTONS>,
    config: ControllerConfig<I::Duration>,
    executor: E,
    time_source: &'t T,
}

impl<'t, I, T, P, H, const MAX_BUTTONS: usize>
    ButtonController<'t, I, T, P, H, InlineExecutor, MAX_BUTTONS>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: ButtonPin,
    H: ActionHandler,
{
    /// Creates a controller that runs handlers inline during `update`.
    pub fn new(time_source: &'t T, config: ControllerConfig<I::Duration>) -> Self {
        Self::with_executor(time_source, config, InlineExecutor)
    }
}

impl<'t, I, T, P, H, E, const MAX_BUTTONS: usize> ButtonController<'t, I, T, P, H, E, MAX_BUTTONS>
where
    I: TimeInstant,
    T: TimeSource<I>,
    P: ButtonPin,
    E: ActionExecutor<H>,
{
    /// Creates a controller that hands fired gestures to `executor`.
    pub fn with_executor(
        time_source: &'t T,
        config: ControllerConfig<I::Duration>,
        executor: E,
    ) -> Self {
        Self {
            buttons: Vec::new(),
            config,
            executor,
            time_source,
        }
    }

    /// Configures `pin` as a button and registers `handler` for `action`.
    ///
    /// Every call adds a new button, even for an electrically identical pin.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The controller already holds `MAX_BUTTONS` buttons
    pub fn register(
        &mut self,
        pin: P,
        action: ActionType,
        handler: H,
    ) -> Result<ButtonId, ControllerError> {
        let id = self.add_button(pin)?;
        self.set_action(id, action, handler)?;
        Ok(id)
    }

    /// Configures `pin` as a button without any action attached.
    ///
    /// The pin is put into the controller's pin mode and the button starts
    /// released. Its debounce window starts now, so a press already held at
    /// registration is accepted one debounce duration later at the earliest.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The controller already holds `MAX_BUTTONS` buttons
    pub fn add_button(&mut self, mut pin: P) -> Result<ButtonId, ControllerError> {
        if self.buttons.is_full() {
            return Err(ControllerError::CapacityExceeded);
        }

        pin.configure(self.config.pin_mode);
        let id = ButtonId(self.buttons.len());
        let tracker =
            ButtonTracker::new(self.config.pin_mode.active_high(), self.time_source.now());

        self.buttons
            .push(Button {
                pin,
                tracker,
                actions: core::array::from_fn(|_| None),
            })
            .map_err(|_| ControllerError::CapacityExceeded)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("button {} registered ({})", id.0, self.config.pin_mode);

        Ok(id)
    }

    /// Sets the handler for `action` on an existing button.
    ///
    /// Replaces any handler previously set for the same action and button.
    ///
    /// # Errors
    /// * `InvalidButtonId` - No button with this ID was registered
    pub fn set_action(
        &mut self,
        id: ButtonId,
        action: ActionType,
        handler: H,
    ) -> Result<(), ControllerError> {
        let button = self.button_mut(id)?;
        button.actions[action.index()] = Some(handler);
        Ok(())
    }

    /// Removes the handler for `action` on an existing button.
    ///
    /// Returns the removed handler, if one was set.
    ///
    /// # Errors
    /// * `InvalidButtonId` - No button with this ID was registered
    pub fn clear_action(
        &mut self,
        id: ButtonId,
        action: ActionType,
    ) -> Result<Option<H>, ControllerError> {
        let button = self.button_mut(id)?;
        Ok(button.actions[action.index()].take())
    }

    /// Samples every button at the time source's current instant.
    ///
    /// Returns the number of handlers submitted to the executor.
    pub fn update(&mut self) -> usize {
        let now = self.time_source.now();
        self.update_at(now)
    }

    /// Samples every button at `now`.
    ///
    /// Gestures without a registered handler are ignored. Returns the number
    /// of handlers submitted to the executor.
    pub fn update_at(&mut self, now: I) -> usize {
        let debounce = self.config.debounce;
        let long_press = self.config.long_press;
        let mut submitted = 0;

        for (idx, button) in self.buttons.iter_mut().enumerate() {
            let level = button.pin.read_level();
            let Some(action) = button.tracker.sample(level, now, debounce, long_press) else {
                continue;
            };

            let event = ButtonEvent::new(ButtonId(idx), action);
            match &button.actions[action.index()] {
                Some(handler) => {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("button {}: {}", idx, action);

                    self.executor.submit(event, handler);
                    submitted += 1;
                }
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("button {}: {} has no handler", idx, action);
                }
            }
        }

        submitted
    }

    /// Returns true if the button's debounced state is pressed.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist.
    pub fn is_pressed(&self, id: ButtonId) -> Result<bool, ControllerError> {
        Ok(self.button(id)?.tracker.is_pressed())
    }

    /// Returns the button's debounced press state.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist.
    pub fn state(&self, id: ButtonId) -> Result<PressState<I>, ControllerError> {
        Ok(self.button(id)?.tracker.state())
    }

    /// Returns true if a handler is set for `action` on the button.
    pub fn has_action(&self, id: ButtonId, action: ActionType) -> bool {
        self.button(id)
            .map(|button| button.actions[action.index()].is_some())
            .unwrap_or(false)
    }

    /// Returns the number of registered buttons.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Returns true if no button is registered.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Returns the maximum number of buttons.
    pub fn capacity(&self) -> usize {
        MAX_BUTTONS
    }

    /// Returns true if a button with the given ID is registered.
    pub fn contains(&self, id: ButtonId) -> bool {
        id.0 < self.buttons.len()
    }

    /// Returns the configuration the controller was created with.
    pub fn config(&self) -> &ControllerConfig<I::Duration> {
        &self.config
    }

    /// Returns the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns the executor mutably.
    pub fn executor_mut(&mut self) -> &mut E {
        &mut self.executor
    }

    fn button(&self, id: ButtonId) -> Result<&Button<I, P, H>, ControllerError> {
        self.buttons.get(id.0).ok_or(ControllerError::InvalidButtonId(id))
    }

    fn button_mut(&mut self, id: ButtonId) -> Result<&mut Button<I, P, H>, ControllerError> {
        self.buttons
            .get_mut(id.0)
            .ok_or(ControllerError::InvalidButtonId(id))
    }
}
