//! RP2040 input pins for the detent decoders
//!
//! This crate provides the hardware half of the polling contract: it
//! configures RP2040 GPIO pins as pulled inputs and wraps them in handles
//! implementing `detent_core::traits::InputPin`, so the board-agnostic
//! decoders never touch pin configuration themselves.
//!
//! - [`gpio::PulledInput`] - a configured input wrapping an embassy-rp pin
//! - [`pins::PinBank`] - config-driven take-a-pin-by-number allocation

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::PulledInput;
pub use pins::{PinBank, PinError};
