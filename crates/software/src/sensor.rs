//! Turns ultrasonic echo pulses into hand heights, and hand heights into Control Change values.

use embassy_time::Duration;
use wmidi::U7;

/// Speed of sound in dry air at roughly 20°C, in centimeters per second.
const SPEED_OF_SOUND_CM_PER_S: u64 = 34_300;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Largest value a MIDI data byte can carry.
const MAX_VALUE: u64 = 127;

/// Reasons a distance reading can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No echo edge arrived within the configured timeout, e.g. because nothing was in range to reflect the pulse.
    Timeout,
}

/// An ultrasonic rangefinder in the style of the HC-SR04: pulse a trigger pin, then time how long the echo pin stays high.
#[allow(async_fn_in_trait)]
pub trait Rangefinder {
    /// Fires one ping and returns the width of the echo pulse, i.e. the round trip time of the sound.
    ///
    /// Implementations must bound the wait and return [`SensorError::Timeout`] instead of blocking forever.
    async fn echo(&mut self) -> Result<Duration, SensorError>;
}

/// Converts the width of an echo pulse to the one-way distance in whole centimeters, rounding down.
///
/// The pulse covers the trip to the reflecting surface and back, hence the division by two.
pub fn echo_to_centimeters(echo: Duration) -> u32 {
    let cm = echo.as_micros().saturating_mul(SPEED_OF_SOUND_CM_PER_S) / (2 * MICROS_PER_SECOND);
    u32::try_from(cm).unwrap_or(u32::MAX)
}

/// The range of hand heights, in centimeters, spread across the full 0-127 range of a Control Change.
///
/// The defaults suit one particular vocalist's reach; anything below the range reads as 0 and anything above it as 127.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    min_height: u32,
    max_height: u32,
}

impl Calibration {
    /// Constructs a [`Calibration`], or returns `None` unless `min_height` is strictly below `max_height`.
    pub const fn new(min_height: u32, max_height: u32) -> Option<Self> {
        if min_height < max_height {
            Some(Self {
                min_height,
                max_height,
            })
        } else {
            None
        }
    }

    /// Getter.
    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Getter.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Maps a height onto a Control Change value: 0 at or below the range, 127 at or above it, and a linear
    /// interpolation (rounded down) in between.
    pub fn to_midi_value(&self, centimeters: u32) -> U7 {
        let value = if centimeters <= self.min_height {
            0
        } else if centimeters >= self.max_height {
            MAX_VALUE
        } else {
            u64::from(centimeters - self.min_height) * MAX_VALUE
                / u64::from(self.max_height - self.min_height)
        };
        // strictly below MAX_VALUE in the interpolated branch
        U7::from_u8_lossy(value as u8)
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            min_height: 73,
            max_height: 127,
        }
    }
}
