//! Configured GPIO inputs
//!
//! Encoder lines and buttons are wired between the pin and ground, so the
//! pins are configured with the internal pull-up and read high at rest.
//! Configuration happens once here, at construction; after that the handle
//! is a plain synchronous level read.

use detent_core::traits::InputPin;
use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;

/// A GPIO pin configured as a pulled input
pub struct PulledInput {
    input: Input<'static>,
}

impl PulledInput {
    /// Configure the pin as an input with the internal pull-up enabled.
    pub fn pull_up(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Up),
        }
    }

    /// Configure the pin as an input with the internal pull-down enabled.
    pub fn pull_down(pin: Peri<'static, AnyPin>) -> Self {
        Self {
            input: Input::new(pin, Pull::Down),
        }
    }
}

impl InputPin for PulledInput {
    fn is_high(&self) -> bool {
        self.input.is_high()
    }
}
