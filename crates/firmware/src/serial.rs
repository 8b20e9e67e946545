//! The MIDI OUT port: a transmit-only UART wired to a 5-pin DIN socket.

use embassy_stm32::{
    mode::Blocking,
    usart::{self, UartTx},
};
use midimove_lib::{
    configuration::{self, SerialConfig},
    midi::Transport,
};

/// Translates the device's [`SerialConfig`] into the HAL's UART configuration.
pub fn uart_config(serial: &SerialConfig) -> usart::Config {
    let mut config = usart::Config::default();
    config.baudrate = serial.baud_rate;
    config.data_bits = match serial.data_bits {
        configuration::DataBits::Eight => usart::DataBits::DataBits8,
        configuration::DataBits::Nine => usart::DataBits::DataBits9,
    };
    config.parity = match serial.parity {
        configuration::Parity::None => usart::Parity::ParityNone,
        configuration::Parity::Even => usart::Parity::ParityEven,
        configuration::Parity::Odd => usart::Parity::ParityOdd,
    };
    config.stop_bits = match serial.stop_bits {
        configuration::StopBits::One => usart::StopBits::STOP1,
        configuration::StopBits::Two => usart::StopBits::STOP2,
    };
    config
}

/// Blocking writes are fine here: at 31250 baud a three byte message takes about a millisecond.
pub struct MidiUart(pub UartTx<'static, Blocking>);

impl Transport for MidiUart {
    fn write(&mut self, bytes: &[u8]) {
        if self.0.blocking_write(bytes).is_err() {
            warn!("Failed to write {} bytes of MIDI", bytes.len());
        }
    }
}
