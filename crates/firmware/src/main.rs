//! MIDIMove is [Embassy](https://embassy.dev)-based firmware for a wearable MIDI controller. The firmware runs on the
//! [Nucleo-F767ZI development board](https://www.st.com/en/evaluation-tools/nucleo-f767zi.html), which is powered by
//! an F7-series STM32 microcontroller.
//!
//! Two pushbuttons and an HC-SR04 ultrasonic sensor are turned into MIDI sent over a 5-pin DIN cable at 31250 baud:
//! - the user button (B1) switches sensor mode on and off; the green LED is lit while it is on, the red one while off;
//! - a second button plays a note for as long as it is held;
//! - in sensor mode, the height of the performer's hand above the sensor is sent as a Control Change every tick.
//!
//! Pin assignments:
//!
//! | Function        | Pin  |
//! |-----------------|------|
//! | MIDI OUT (TX)   | PD5  |
//! | Mode button     | PC13 |
//! | Note button     | PD1  |
//! | HC-SR04 TRIG    | PE2  |
//! | HC-SR04 ECHO    | PE0  |
//! | Sensor on LED   | PB0  |
//! | Sensor off LED  | PB14 |

#![no_std]
#![no_main]

mod fmt;
mod rangefinder;
mod serial;

use crate::{
    rangefinder::Hcsr04,
    serial::{MidiUart, uart_config},
};
use embassy_executor::Spawner;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Input, Level, Output, Pull, Speed},
    usart::UartTx,
};
use midimove_lib::{
    configuration::ControllerConfig, control_loop::ControlLoop, indicator::LedIndicator,
    input::PushButton,
};

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Initializing MIDIMove");

    let config = ControllerConfig::default();
    let p = embassy_stm32::init(Default::default());

    // USART2 is free on the Nucleo; USART3 is taken by the ST-LINK virtual COM port
    let uart = unwrap!(UartTx::new_blocking(
        p.USART2,
        p.PD5,
        uart_config(&config.serial)
    ));
    info!("MIDI OUT ready at {} baud", config.serial.baud_rate);

    // B1 on the Nucleo has its own pull-down and reads high when pressed
    let mode_button = PushButton::active_high(Input::new(p.PC13, Pull::None));
    // an external button to ground
    let note_button = PushButton::active_low(Input::new(p.PD1, Pull::Up));

    let rangefinder = Hcsr04::new(
        Output::new(p.PE2, Level::Low, Speed::Low),
        ExtiInput::new(p.PE0, p.EXTI0, Pull::None),
        config.trigger_pulse,
        config.echo_timeout,
    );

    let green_led = Output::new(p.PB0, Level::Low, Speed::Low);
    let red_led = Output::new(p.PB14, Level::Low, Speed::Low);
    let indicator = LedIndicator::new(green_led, red_led);

    let mut control_loop = ControlLoop::new(
        config,
        mode_button,
        note_button,
        rangefinder,
        MidiUart(uart),
        indicator,
    );
    control_loop.run().await
}
