//! The performer's only feedback from the device: which [`Mode`] it is in.

use crate::configuration::Mode;
use embedded_hal::digital::OutputPin;

/// A display with one glyph per [`Mode`].
pub trait Indicator {
    /// Shows the glyph for `mode`. Called every tick, so implementations should be idempotent.
    fn show(&mut self, mode: Mode);
}

/// Two LEDs, one per [`Mode`]; exactly one is lit at a time.
pub struct LedIndicator<P> {
    active: P,
    inactive: P,
}

impl<P: OutputPin> LedIndicator<P> {
    /// Constructs a [`LedIndicator`] from the LED shown while the sensor is in use and the one shown while it isn't.
    pub fn new(active: P, inactive: P) -> Self {
        Self { active, inactive }
    }
}

impl<P: OutputPin> Indicator for LedIndicator<P> {
    fn show(&mut self, mode: Mode) {
        let (lit, dark) = match mode {
            Mode::Active => (&mut self.active, &mut self.inactive),
            Mode::Inactive => (&mut self.inactive, &mut self.active),
        };
        if dark.set_low().is_err() {
            warn!("Failed to switch off an LED while showing {} mode", mode);
        }
        if lit.set_high().is_err() {
            warn!("Failed to light the LED for {} mode", mode);
        }
    }
}
