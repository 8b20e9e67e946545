//! Pushbutton handling: reading a pin as "pressed" regardless of wiring, and turning the level readings into events.

use embedded_hal::digital::InputPin;

/// A pushbutton on an [`InputPin`], with the polarity of its wiring baked in.
pub struct PushButton<P> {
    pin: P,
    pressed_level: bool,
}

impl<P: InputPin> PushButton<P> {
    /// A button which pulls the pin high when pressed.
    pub fn active_high(pin: P) -> Self {
        Self {
            pin,
            pressed_level: true,
        }
    }

    /// A button which pulls the pin low when pressed, e.g. one wired to ground against a pull-up.
    pub fn active_low(pin: P) -> Self {
        Self {
            pin,
            pressed_level: false,
        }
    }

    /// Samples the pin. A pin which cannot be read counts as released.
    pub fn is_pressed(&mut self) -> bool {
        self.pin
            .is_high()
            .map(|high| high == self.pressed_level)
            .unwrap_or(false)
    }
}

/// A level change observed by an [`EdgeDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// The button went down since the last sample.
    Pressed,
    /// The button came up since the last sample.
    Released,
}

/// Level-to-edge conversion with one sample of memory. Holding a button yields a single [`Edge::Pressed`], not one per
/// sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    /// Compares `pressed` against the previous sample, then remembers it for the next call.
    pub fn update(&mut self, pressed: bool) -> Option<Edge> {
        let edge = match (self.last, pressed) {
            (false, true) => Some(Edge::Pressed),
            (true, false) => Some(Edge::Released),
            _ => None,
        };
        self.last = pressed;
        edge
    }
}

/// States of a [`HoldToggle`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldState {
    /// The button is up.
    #[default]
    Idle,
    /// The button went down and hasn't come back up yet.
    Held,
}

/// Fires once per complete press, on release.
///
/// Waiting for the release means a long press, or contact bounce while the button is down, can only ever count as
/// one press. State persists between calls so a press may span any number of samples (or ticks).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoldToggle {
    state: HoldState,
}

impl HoldToggle {
    /// Feeds one sample. Returns `true` when the sample completes a press.
    pub fn update(&mut self, pressed: bool) -> bool {
        match (self.state, pressed) {
            (HoldState::Idle, true) => {
                self.state = HoldState::Held;
                false
            }
            (HoldState::Held, false) => {
                self.state = HoldState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Getter.
    pub fn state(&self) -> HoldState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct Level(bool);

    impl ErrorType for Level {
        type Error = Infallible;
    }

    impl InputPin for Level {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl embedded_hal::digital::Error for Broken {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl ErrorType for Unreadable {
        type Error = Broken;
    }

    struct Unreadable;

    impl InputPin for Unreadable {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(Broken)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(Broken)
        }
    }

    #[test]
    fn polarity() {
        assert!(PushButton::active_high(Level(true)).is_pressed());
        assert!(!PushButton::active_high(Level(false)).is_pressed());
        assert!(PushButton::active_low(Level(false)).is_pressed());
        assert!(!PushButton::active_low(Level(true)).is_pressed());
    }

    #[test]
    fn unreadable_pin_is_released() {
        assert!(!PushButton::active_high(Unreadable).is_pressed());
        assert!(!PushButton::active_low(Unreadable).is_pressed());
    }

    #[test]
    fn edge_detector_reports_each_edge_once() {
        let mut detector = EdgeDetector::default();
        let edges = [false, true, true, true, false, false, true]
            .map(|pressed| detector.update(pressed));

        assert_eq!(
            [
                None,
                Some(Edge::Pressed),
                None,
                None,
                Some(Edge::Released),
                None,
                Some(Edge::Pressed)
            ],
            edges,
            "Expected left but got right"
        );
    }

    #[test]
    fn hold_toggle_fires_on_release() {
        let mut toggle = HoldToggle::default();
        assert!(!toggle.update(true));
        assert_eq!(HoldState::Held, toggle.state(), "Expected left but got right");
        assert!(!toggle.update(true));
        assert!(toggle.update(false));
        assert_eq!(HoldState::Idle, toggle.state(), "Expected left but got right");
    }

    #[test]
    fn hold_toggle_fires_once_per_press() {
        let mut toggle = HoldToggle::default();
        let fired = [false, true, true, true, true, false, false, false]
            .into_iter()
            .filter(|&pressed| toggle.update(pressed))
            .count();
        assert_eq!(1, fired, "Expected left but got right");
    }

    #[test]
    fn hold_toggle_ignores_idle_release() {
        let mut toggle = HoldToggle::default();
        assert!(!toggle.update(false));
        assert_eq!(HoldState::Idle, toggle.state(), "Expected left but got right");
    }
}
