//! Hardware abstraction traits
//!
//! These traits define the interface between the decoding logic and
//! hardware-specific implementations.

pub mod input;

pub use input::InputPin;
