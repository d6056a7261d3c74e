#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ButtonController`**: Owns the buttons, polls them on `update()` and dispatches gestures
//! - **`ButtonTracker`**: Debounce and click/long-press state machine for a single button
//! - **`PressState`**: Debounced state of a button (`Released`, `Pressed`, `PressedLong`)
//! - **`ActionType`**: Gesture kinds (`SingleClick`, `LongPress`)
//! - **`ActionHandler`**: Trait to implement for the actions your buttons trigger
//! - **`ActionExecutor`**: Where fired handlers run (`InlineExecutor` or an `ActionSender`)
//! - **`ButtonPin`**: Trait to implement for your GPIO hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ControllerConfig`**: Debounce duration, long-press duration and pin mode
//!
//! The crate is polling only and never allocates. Capacities are fixed with
//! const generics.

pub mod time;
pub mod types;
pub mod pin;
pub mod tracker;
pub mod action;
pub mod controller;

pub use types::{ActionType, ButtonEvent, ButtonId, ControllerConfig, PinMode};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use pin::ButtonPin;
#[cfg(feature = "embedded-hal")]
pub use pin::HalButtonPin;
pub use tracker::{ButtonTracker, PressState};
pub use action::{
    ActionExecutor, ActionHandler, ActionQueue, ActionReceiver, ActionSender, InlineExecutor,
};
pub use controller::{ButtonController, ControllerError};
