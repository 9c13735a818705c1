//! Quadrature decoding state machine
//!
//! A detented rotary encoder walks its two output lines through a Gray-code
//! sequence once per click and rests with both lines high between clicks.
//! With the lines sampled as `(a << 1) | b`, a clockwise click reads
//! `3, 1, 0, 2, 3` and a counter-clockwise click reads `3, 2, 0, 1, 3`.
//!
//! The decoder is polled, not interrupt-driven, so it routinely misses one
//! of the intermediate samples of a click. Rather than requiring the full
//! sequence, it records the intermediate samples seen since leaving the
//! detent and, on return to the detent, matches them against the shapes a
//! real click can produce with at most one sample missed. Anything else is
//! ambiguous and discarded: a dropped click is recoverable by the user, a
//! click counted in the wrong direction is not.

use crate::traits::InputPin;

/// Both lines high: the resting position between clicks.
const DETENT: u8 = 0b11;

// Recognized sample histories, concatenated 2-bit samples oldest first.
// Per direction: the complete click, plus the two shapes with exactly one
// intermediate sample missed. Histories outside these six are ambiguous.
const CW_FULL: u8 = 0b01_00_10;
const CW_MISSED_MID: u8 = 0b01_10;
const CW_MISSED_LAST: u8 = 0b01_00;
const CCW_FULL: u8 = 0b10_00_01;
const CCW_MISSED_MID: u8 = 0b10_01;
const CCW_MISSED_LAST: u8 = 0b10_00;

/// One click of rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Signed step value: `+1` for clockwise, `-1` for counter-clockwise.
    pub fn delta(self) -> i8 {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }
}

/// Decoder phase between detents
///
/// `Seen1`/`Seen2`/`Seen3` carry the concatenated history of intermediate
/// samples recorded since leaving the detent; the two least-significant
/// bits are always the most recently committed sample. `Overrun` means more
/// transitions were observed than any recognized shape contains, so the
/// sequence is already unclassifiable; only the last sample is kept, for
/// the repeated-read check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    AtDetent,
    Seen1(u8),
    Seen2(u8),
    Seen3(u8),
    Overrun(u8),
}

impl Phase {
    /// The most recently committed 2-bit sample.
    fn last_sample(self) -> u8 {
        match self {
            Phase::AtDetent => DETENT,
            Phase::Seen1(h) | Phase::Seen2(h) | Phase::Seen3(h) => h & 0b11,
            Phase::Overrun(s) => s,
        }
    }

    /// Process one 2-bit sample and return the next phase plus any
    /// rotation completed by it.
    fn step(self, sample: u8) -> (Phase, Option<Rotation>) {
        // Repeated identical read: the line is stable, nothing to record.
        if sample == self.last_sample() {
            return (self, None);
        }

        // Back at the detent: one click's transition sequence has ended.
        // Classify the history and resynchronize whatever the outcome.
        if sample == DETENT {
            return (Phase::AtDetent, self.classify());
        }

        let next = match self {
            Phase::AtDetent => Phase::Seen1(sample),
            Phase::Seen1(h) => Phase::Seen2(h << 2 | sample),
            Phase::Seen2(h) => Phase::Seen3(h << 2 | sample),
            // A real click has at most three intermediate samples; past
            // that, only the detent can resynchronize us.
            Phase::Seen3(_) | Phase::Overrun(_) => Phase::Overrun(sample),
        };
        (next, None)
    }

    /// Match the recorded history against the recognized shapes.
    ///
    /// A two-sample history can only be a one-missed shape and a
    /// three-sample history can only be a complete click, so each is
    /// matched against its own set. One recorded sample is not enough to
    /// establish direction, and an overrun is unclassifiable by
    /// construction; both yield no event.
    fn classify(self) -> Option<Rotation> {
        match self {
            Phase::Seen2(h) => match h {
                CW_MISSED_MID | CW_MISSED_LAST => Some(Rotation::Clockwise),
                CCW_MISSED_MID | CCW_MISSED_LAST => Some(Rotation::CounterClockwise),
                _ => None,
            },
            Phase::Seen3(h) => match h {
                CW_FULL => Some(Rotation::Clockwise),
                CCW_FULL => Some(Rotation::CounterClockwise),
                _ => None,
            },
            Phase::AtDetent | Phase::Seen1(_) | Phase::Overrun(_) => None,
        }
    }
}

/// Polled quadrature decoder for one detented rotary encoder
///
/// Owns the two already-configured input handles for the encoder's output
/// lines. Create one instance per encoder at initialization and call
/// [`poll`](Self::poll) from the host control loop; each call is
/// non-blocking, constant-time, and allocation-free.
pub struct QuadratureDecoder<A, B> {
    pin_a: A,
    pin_b: B,
    phase: Phase,
}

impl<A: InputPin, B: InputPin> QuadratureDecoder<A, B> {
    /// Create a decoder from the two configured encoder inputs.
    ///
    /// The decoder starts at the detent, the resting position of a
    /// detented encoder.
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self {
            pin_a,
            pin_b,
            phase: Phase::AtDetent,
        }
    }

    /// Sample both lines and advance the state machine.
    ///
    /// Returns `Some(rotation)` only on the poll that observes the return
    /// to the detent after a recognizable click; every other poll returns
    /// `None`. Indeterminate sequences (too many samples missed, bounce
    /// past the recognized shapes) are silently discarded rather than
    /// guessed.
    pub fn poll(&mut self) -> Option<Rotation> {
        let sample = (self.pin_a.is_high() as u8) << 1 | self.pin_b.is_high() as u8;
        let (phase, rotation) = self.phase.step(sample);
        self.phase = phase;
        rotation
    }
}
