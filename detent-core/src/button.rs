//! Push-button edge detection
//!
//! Turns a polled level into discrete press/release events: an event is
//! emitted only on the poll that first observes a level change, no matter
//! how fast or slow the host polls. The wiring is active-low (pulled-up
//! line reads high at rest, low while held), matching the pull-up inputs
//! the platform crates configure.

use crate::traits::InputPin;

/// One button level transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Pressed,
    Released,
}

impl ButtonEvent {
    /// Signed step value: `+1` for a press, `-1` for a release.
    pub fn delta(self) -> i8 {
        match self {
            ButtonEvent::Pressed => 1,
            ButtonEvent::Released => -1,
        }
    }
}

/// Polled edge detector for one push button
///
/// Owns the already-configured input handle. `last_level` is `None` until
/// the first poll; the first poll treats the line as if it had been idle,
/// so a button already held at startup reports [`ButtonEvent::Pressed`]
/// exactly once and an idle line reports nothing.
pub struct EdgeDetector<P> {
    pin: P,
    last_level: Option<bool>,
}

impl<P: InputPin> EdgeDetector<P> {
    /// Create an edge detector from the configured button input.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            last_level: None,
        }
    }

    /// Sample the line and report a transition, if any.
    ///
    /// Non-blocking and constant-time. Returns `None` while the level is
    /// stable; exactly one event per logical transition otherwise.
    pub fn poll(&mut self) -> Option<ButtonEvent> {
        let level = self.pin.is_high();
        // Idle is high under active-low wiring; assumed for the first poll.
        let previous = self.last_level.unwrap_or(true);
        self.last_level = Some(level);

        if level == previous {
            return None;
        }
        if level {
            Some(ButtonEvent::Released)
        } else {
            Some(ButtonEvent::Pressed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // Mock button line the test can drive.
    #[derive(Clone)]
    struct MockLine(Rc<Cell<bool>>);

    impl MockLine {
        fn new(high: bool) -> Self {
            MockLine(Rc::new(Cell::new(high)))
        }

        fn set(&self, high: bool) {
            self.0.set(high);
        }
    }

    impl InputPin for MockLine {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_idle_line_reports_nothing() {
        let line = MockLine::new(true);
        let mut button = EdgeDetector::new(line);

        for _ in 0..5 {
            assert_eq!(button.poll(), None);
        }
    }

    #[test]
    fn test_press_and_release() {
        let line = MockLine::new(true);
        let mut button = EdgeDetector::new(line.clone());

        assert_eq!(button.poll(), None);

        line.set(false);
        assert_eq!(button.poll(), Some(ButtonEvent::Pressed));
        assert_eq!(button.poll(), None);

        line.set(true);
        assert_eq!(button.poll(), Some(ButtonEvent::Released));
        assert_eq!(button.poll(), None);
    }

    #[test]
    fn test_one_event_per_transition_regardless_of_poll_rate() {
        let line = MockLine::new(true);
        let mut button = EdgeDetector::new(line.clone());

        line.set(false);
        let events: Vec<_> = (0..10).filter_map(|_| button.poll()).collect();
        assert_eq!(events, vec![ButtonEvent::Pressed]);

        line.set(true);
        let events: Vec<_> = (0..10).filter_map(|_| button.poll()).collect();
        assert_eq!(events, vec![ButtonEvent::Released]);
    }

    #[test]
    fn test_already_pressed_at_startup_reports_once() {
        let line = MockLine::new(false);
        let mut button = EdgeDetector::new(line);

        assert_eq!(button.poll(), Some(ButtonEvent::Pressed));
        assert_eq!(button.poll(), None);
    }

    #[test]
    fn test_delta_sign_convention() {
        assert_eq!(ButtonEvent::Pressed.delta(), 1);
        assert_eq!(ButtonEvent::Released.delta(), -1);
    }
}
