//! Action handlers and how they are dispatched.
//!
//! The controller never calls handlers directly. It submits every fired
//! gesture to an [`ActionExecutor`], which decides where the handler runs:
//! inline inside `update` ([`InlineExecutor`]) or later from another task
//! ([`ActionQueue`]). Either way the controller's own state is only touched
//! from `update`, and handlers get no access to it.

use crate::types::ButtonEvent;
use heapless::spsc::{Consumer, Producer, Queue};

/// Capability invoked when a registered gesture fires.
///
/// Implement this on a unit struct, an enum of application actions, or use a
/// plain `fn()`.
pub trait ActionHandler {
    /// Runs the action.
    fn on_action(&self);
}

impl ActionHandler for fn() {
    fn on_action(&self) {
        self()
    }
}

/// Destination for fired gestures.
///
/// `submit` is called from inside `update` and must not block.
pub trait ActionExecutor<H> {
    /// Hands off the handler registered for `event`.
    fn submit(&mut self, event: ButtonEvent, handler: &H);
}

/// Runs handlers synchronously, in button order, during `update`.
///
/// A slow handler delays the rest of the poll cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineExecutor;

impl<H: ActionHandler> ActionExecutor<H> for InlineExecutor {
    fn submit(&mut self, _event: ButtonEvent, handler: &H) {
        handler.on_action();
    }
}

/// Bounded storage for fired gestures, shared between the poll loop and a
/// worker task.
///
/// [`split`](Self::split) hands out an [`ActionSender`] for the controller
/// and an [`ActionReceiver`] for the task that runs handlers. Only `N - 1`
/// gestures can be pending at once.
///
/// # Type Parameters
/// * `H` - Handler type, cloned into the queue on submit
/// * `N` - Queue slots, must be greater than 1
pub struct ActionQueue<H, const N: usize> {
    slots: Queue<(ButtonEvent, H), N>,
}

impl<H, const N: usize> ActionQueue<H, N> {
    /// Creates an empty queue. Usable in a `static`.
    pub const fn new() -> Self {
        Self { slots: Queue::new() }
    }

    /// Splits the queue into its submitting and draining halves.
    pub fn split(&mut self) -> (ActionSender<'_, H>, ActionReceiver<'_, H>) {
        let (producer, consumer) = self.slots.split();
        (
            ActionSender {
                producer,
                dropped: 0,
            },
            ActionReceiver { consumer },
        )
    }

    /// Returns the maximum number of pending gestures.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<H, const N: usize> Default for ActionQueue<H, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Submitting half of an [`ActionQueue`], held by the controller.
///
/// When the queue is full the newest gesture is dropped and counted, so a
/// stalled receiver never blocks polling.
pub struct ActionSender<'q, H> {
    producer: Producer<'q, (ButtonEvent, H)>,
    dropped: u32,
}

impl<H> ActionSender<'_, H> {
    /// Returns how many gestures were dropped because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Returns the number of gestures waiting for the receiver.
    pub fn len(&self) -> usize {
        self.producer.len()
    }

    /// Returns true if the receiver has drained everything.
    pub fn is_empty(&self) -> bool {
        self.producer.is_empty()
    }
}

impl<H: Clone> ActionExecutor<H> for ActionSender<'_, H> {
    fn submit(&mut self, event: ButtonEvent, handler: &H) {
        if self.producer.enqueue((event, handler.clone())).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("action queue full, dropping {}", event);
        }
    }
}

/// Draining half of an [`ActionQueue`], owned by the task that runs handlers.
pub struct ActionReceiver<'q, H> {
    consumer: Consumer<'q, (ButtonEvent, H)>,
}

impl<H> ActionReceiver<'_, H> {
    /// Removes the oldest pending gesture.
    pub fn pop(&mut self) -> Option<(ButtonEvent, H)> {
        self.consumer.dequeue()
    }

    /// Returns the number of pending gestures.
    pub fn len(&self) -> usize {
        self.consumer.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.consumer.is_empty()
    }
}

impl<H: ActionHandler> ActionReceiver<'_, H> {
    /// Runs every pending handler in submission order.
    ///
    /// Returns the number of handlers run.
    pub fn run_pending(&mut self) -> usize {
        let mut ran = 0;
        while let Some((_, handler)) = self.consumer.dequeue() {
            handler.on_action();
            ran += 1;
        }
        ran
    }
}
