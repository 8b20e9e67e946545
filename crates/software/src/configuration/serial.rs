/// MIDI's fixed bit rate. The protocol is asynchronous, so sender and receiver must agree on it ahead of time.
pub const MIDI_BAUD_RATE: u32 = 31_250;

/// Data bits per byte. MIDI uses eight; nine is the only other width the UART supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    /// Eight data bits.
    Eight,
    /// Nine data bits.
    Nine,
}

/// Parity bit setting for the serial line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    /// No parity bit.
    None,
    /// Even parity.
    Even,
    /// Odd parity.
    Odd,
}

/// Number of stop bits framing each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    /// One stop bit.
    One,
    /// Two stop bits.
    Two,
}

/// Settings applied once, at startup, to the UART that carries MIDI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Bits per second.
    pub baud_rate: u32,
    /// Data bits per byte.
    pub data_bits: DataBits,
    /// Parity bit setting.
    pub parity: Parity,
    /// Stop bits per byte.
    pub stop_bits: StopBits,
}

/// The MIDI 1.0 electrical specification: 31250 baud, 8-N-1.
impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baud_rate: MIDI_BAUD_RATE,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_midi_framing() {
        assert_eq!(
            SerialConfig {
                baud_rate: 31_250,
                data_bits: DataBits::Eight,
                parity: Parity::None,
                stop_bits: StopBits::One,
            },
            SerialConfig::default(),
            "Expected left but got right"
        );
    }
}
