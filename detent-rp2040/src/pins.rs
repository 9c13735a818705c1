//! Dynamic pin allocation for config-driven hardware setup
//!
//! Lets the host assign encoder and button pins by number (from its own
//! configuration) instead of hardcoding them. An undefined or
//! already-claimed pin number is a wiring/config bug and is reported at
//! construction time, never retried.

use crate::gpio::PulledInput;
use embassy_rp::gpio::AnyPin;
use embassy_rp::Peri;

/// Number of user GPIO pins on the RP2040.
pub const PIN_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
}

/// Pin bank that holds the GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; PIN_COUNT],
}

impl PinBank {
    /// Create a pin bank from the full set of GPIO pins.
    ///
    /// Use the [`pin_bank!`](crate::pin_bank) macro to build the array
    /// from the peripherals struct.
    pub fn new(pins: [Peri<'static, AnyPin>; PIN_COUNT]) -> Self {
        Self {
            pins: pins.map(Some),
        }
    }

    /// Take a raw pin by number.
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        let slot = self
            .pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin)?;
        slot.take().ok_or(PinError::AlreadyTaken)
    }

    /// Take a pin by number and configure it as a pull-up input.
    ///
    /// This is the usual path for encoder lines and buttons, which are
    /// wired to ground and idle high.
    pub fn take_pulled_up(&mut self, pin_num: u8) -> Result<PulledInput, PinError> {
        Ok(PulledInput::pull_up(self.take(pin_num)?))
    }
}

/// Build a [`PinBank`] from an `embassy_rp::Peripherals` struct.
///
/// Usage:
/// ```ignore
/// let p = embassy_rp::init(Default::default());
/// let mut bank = detent_rp2040::pin_bank!(p);
/// let pin_a = bank.take_pulled_up(10)?;
/// ```
#[macro_export]
macro_rules! pin_bank {
    ($p:expr) => {
        $crate::pins::PinBank::new([
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_0),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_1),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_2),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_3),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_4),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_5),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_6),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_7),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_8),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_9),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_10),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_11),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_12),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_13),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_14),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_15),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_16),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_17),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_18),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_19),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_20),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_21),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_22),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_23),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_24),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_25),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_26),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_27),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_28),
            ::embassy_rp::Peri::<::embassy_rp::gpio::AnyPin>::from($p.PIN_29),
        ])
    };
}
