//! Digital input abstraction
//!
//! Implementations handle the actual hardware register reading for the
//! specific chip. The read is synchronous and infallible: by the time a
//! decoder holds a handle, the pin has already been configured as an
//! input (pull direction included) by the platform crate, so a read is
//! just a level sample.

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
