//! Driver for the HC-SR04 ultrasonic sensor the performer holds a hand over.

use embassy_stm32::{exti::ExtiInput, gpio::Output};
use embassy_time::{Duration, Instant, Timer, with_timeout};
use midimove_lib::sensor::{Rangefinder, SensorError};

/// An HC-SR04 with its TRIG pin on a push-pull output and its ECHO pin on an EXTI-capable input.
///
/// ECHO swings to 5V; make sure the pin is 5V tolerant (or use a divider).
pub struct Hcsr04 {
    trigger: Output<'static>,
    echo: ExtiInput<'static>,
    trigger_pulse: Duration,
    timeout: Duration,
}

impl Hcsr04 {
    /// Constructs a [`Hcsr04`]; `timeout` bounds the wait for each edge of the echo pulse.
    pub fn new(
        trigger: Output<'static>,
        echo: ExtiInput<'static>,
        trigger_pulse: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            trigger,
            echo,
            trigger_pulse,
            timeout,
        }
    }
}

impl Rangefinder for Hcsr04 {
    async fn echo(&mut self) -> Result<Duration, SensorError> {
        self.trigger.set_high();
        Timer::after(self.trigger_pulse).await;
        self.trigger.set_low();

        with_timeout(self.timeout, self.echo.wait_for_high())
            .await
            .map_err(|_| SensorError::Timeout)?;
        let start = Instant::now();
        with_timeout(self.timeout, self.echo.wait_for_low())
            .await
            .map_err(|_| SensorError::Timeout)?;

        Ok(Instant::now() - start)
    }
}
