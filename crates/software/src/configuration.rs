//! This module contains both user-configurable settings and traits to make them easier to work with in code.

mod mode;
pub use mode::*;

mod serial;
pub use serial::*;

use crate::sensor::Calibration;
use embassy_time::Duration;
use num_traits::{FromPrimitive, ToPrimitive};

/// A trait which allows infinite cycling of an enum's variants.
///
/// Useful for pushbutton user interfaces, allowing presses to advance from the current to the next variant,
/// cycling back to the beginning when all variants have been exhausted.
pub trait CycleConfig {
    /// Return the next variant, cycling back to the beginning as needed.
    fn cycle(self) -> Self
    where
        Self: FromPrimitive + ToPrimitive + Sized,
    {
        let index = self
            .to_u8()
            .expect("enum variants should be castable to u8");
        match <Self as FromPrimitive>::from_u8(index + 1) {
            Some(new_selection) => new_selection,
            None => FromPrimitive::from_u8(0).expect("enum should not be empty"),
        }
    }
}

/// Everything that would otherwise be an inline literal: what the controller sends, and how often it looks at its inputs.
///
/// The MIDI fields are deliberately plain `u8`s rather than [`wmidi`] types. They pass through the same validation as
/// any other request, so a misconfigured value is dropped at send time instead of wrapping into a different message.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Line settings for the MIDI output.
    pub serial: SerialConfig,
    /// Zero-based MIDI channel for every message (0 is "channel 1" in musician-speak).
    pub channel: u8,
    /// Note played by the note button.
    pub note: u8,
    /// Velocity of both the Note On and the Note Off.
    pub velocity: u8,
    /// Controller number carrying the hand height.
    pub controller: u8,
    /// Hand-height range mapped onto the controller's 0-127 range.
    pub calibration: Calibration,
    /// Nominal time between ticks of the control loop.
    pub tick_period: Duration,
    /// Delay between samples of the mode button while it is held.
    pub hold_poll_interval: Duration,
    /// Maximum number of mode button samples taken in one tick. A press lasting longer carries over into the next tick
    /// instead of stalling the note button and the sensor.
    pub hold_poll_budget: u16,
    /// How long the rangefinder's trigger pin is held high.
    pub trigger_pulse: Duration,
    /// How long to wait for either edge of the echo pulse before giving up on a reading.
    pub echo_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            channel: 0,
            // D#4/Eb4
            note: 63,
            velocity: 127,
            // CC 24 is undefined by the MIDI 1.0 spec, which leaves it free for the performer to map
            controller: 24,
            calibration: Calibration::default(),
            tick_period: Duration::from_millis(100),
            hold_poll_interval: Duration::from_millis(1),
            hold_poll_budget: 2000,
            // the HC-SR04 datasheet asks for at least 10us
            trigger_pulse: Duration::from_micros(10),
            // a little over the round trip of the sensor's 4m maximum range
            echo_timeout: Duration::from_millis(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_derive::{FromPrimitive, ToPrimitive};

    #[derive(Debug, Clone, Copy, ToPrimitive, FromPrimitive, PartialEq)]
    enum Alpha {
        A,
        B,
        C,
    }
    impl CycleConfig for Alpha {}

    #[test]
    fn cycle() {
        let config = Alpha::A.cycle();
        assert_eq!(
            Alpha::B,
            config,
            "Should advance to next variant; expected left but got right"
        );

        let config = config.cycle();
        assert_eq!(
            Alpha::C,
            config,
            "Should advance to next variant; expected left but got right"
        );

        let config = config.cycle();
        assert_eq!(
            Alpha::A,
            config,
            "Should wrap around to first variant; expected left but got right"
        );
    }

    #[test]
    fn default_controller() {
        let config = ControllerConfig::default();
        assert_eq!(
            (0, 63, 127, 24),
            (
                config.channel,
                config.note,
                config.velocity,
                config.controller
            ),
            "Expected left but got right"
        );
        assert_eq!(
            Duration::from_millis(100),
            config.tick_period,
            "Expected left but got right"
        );
    }
}
