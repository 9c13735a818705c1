//! Board-agnostic input decoding for polled rotary encoders and buttons
//!
//! This crate contains all decoding logic that does not depend on specific
//! hardware implementations:
//!
//! - Hardware abstraction trait for digital inputs
//! - Quadrature state machine (rotary encoder clicks)
//! - Edge detector (push-button press/release)
//!
//! Both decoders are pure polling state machines: the host calls `poll()`
//! at whatever cadence its control loop provides, and each call completes
//! in constant time with no allocation. Hardware configuration (pull-ups,
//! pin numbering) lives in the platform crates; decoders are constructed
//! from already-configured input handles so they can be driven by mock
//! pins in host tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod quadrature;
pub mod traits;

pub use button::{ButtonEvent, EdgeDetector};
pub use quadrature::{QuadratureDecoder, Rotation};
pub use traits::InputPin;
