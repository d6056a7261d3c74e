//! Hardware abstraction for button pins.

use crate::types::PinMode;

/// Trait for abstracting a GPIO pin wired to a push button.
///
/// Implement this for your HAL's pin type. The controller calls `configure`
/// once at registration and `read_level` once per button on every update.
pub trait ButtonPin {
    /// Puts the pin into the given input mode.
    ///
    /// HALs that fix the pin mode at construction time can ignore this.
    fn configure(&mut self, mode: PinMode);

    /// Reads the current electrical level, `true` meaning high.
    ///
    /// This method cannot fail. Implementations talking to unreliable
    /// hardware decide themselves which level to report on a failed read.
    fn read_level(&mut self) -> bool;
}

#[cfg(feature = "embedded-hal")]
pub use hal::HalButtonPin;

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::ButtonPin;
    use crate::types::PinMode;
    use embedded_hal::digital::InputPin;

    /// Adapter for any `embedded-hal` 1.0 [`InputPin`].
    ///
    /// `embedded-hal` has no notion of reconfiguring a pin, so the pull must be
    /// set up when the HAL pin is created. The adapter only remembers the mode
    /// to pick a safe fallback: a failed read reports the idle level, so
    /// errors never turn into presses.
    pub struct HalButtonPin<P> {
        pin: P,
        idle_level: bool,
        read_failed: bool,
    }

    impl<P: InputPin> HalButtonPin<P> {
        /// Wraps an already configured input pin.
        pub fn new(pin: P) -> Self {
            Self {
                pin,
                idle_level: true,
                read_failed: false,
            }
        }

        /// Returns true if the most recent read failed.
        pub fn read_failed(&self) -> bool {
            self.read_failed
        }

        /// Releases the wrapped pin.
        pub fn into_inner(self) -> P {
            self.pin
        }
    }

    impl<P: InputPin> ButtonPin for HalButtonPin<P> {
        fn configure(&mut self, mode: PinMode) {
            self.idle_level = !mode.active_high();
        }

        fn read_level(&mut self) -> bool {
            let result = self.pin.is_high();
            let failed = result.is_err();

            // Logged on change only, reads happen every poll
            if failed != self.read_failed {
                #[cfg(feature = "defmt")]
                if failed {
                    defmt::warn!("button pin read failing, reporting idle level");
                } else {
                    defmt::info!("button pin reads recovered");
                }
                self.read_failed = failed;
            }

            result.unwrap_or(self.idle_level)
        }
    }

}
