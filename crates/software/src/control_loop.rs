use crate::{
    configuration::{ControllerConfig, CycleConfig, Mode},
    indicator::Indicator,
    input::{Edge, EdgeDetector, HoldToggle, PushButton},
    midi::{MidiOut, Transport},
    sensor::{Rangefinder, SensorError, echo_to_centimeters},
};
use bitmask_enum::bitmask;
use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;

/// Things a [`ControlLoop::tick`] did.
#[bitmask(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operation {
    /// The mode button completed a press and the [`Mode`] flipped.
    ModeToggle,
    /// The note button went down and a Note On was sent.
    NoteOn,
    /// The note button came up and a Note Off was sent.
    NoteOff,
    /// The sensor was read and its value sent as a Control Change.
    ControlChange,
    /// The sensor was due to be read but no echo came back in time.
    SensorTimeout,
}

/// The whole device: owns every input and output along with the only state that outlives a tick (the [`Mode`] and
/// the memory of each button).
///
/// Type parameters are, in order: the mode button's pin, the note button's pin, the [`Rangefinder`], the MIDI
/// [`Transport`] and the [`Indicator`].
pub struct ControlLoop<A, B, R, T, D> {
    config: ControllerConfig,
    mode: Mode,
    mode_button: PushButton<A>,
    mode_toggle: HoldToggle,
    note_button: PushButton<B>,
    note_edges: EdgeDetector,
    rangefinder: R,
    midi: MidiOut<T>,
    indicator: D,
}

impl<A, B, R, T, D> ControlLoop<A, B, R, T, D>
where
    A: InputPin,
    B: InputPin,
    R: Rangefinder,
    T: Transport,
    D: Indicator,
{
    /// Constructs a [`ControlLoop`] in [`Mode::Inactive`], with both buttons assumed to be up.
    pub fn new(
        config: ControllerConfig,
        mode_button: PushButton<A>,
        note_button: PushButton<B>,
        rangefinder: R,
        transport: T,
        indicator: D,
    ) -> Self {
        Self {
            config,
            mode: Mode::default(),
            mode_button,
            mode_toggle: HoldToggle::default(),
            note_button,
            note_edges: EdgeDetector::default(),
            rangefinder,
            midi: MidiOut::new(transport),
            indicator,
        }
    }

    /// Getter.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Ticks forever at the configured period. Actual latency is the period plus whatever the tick itself spent
    /// waiting on buttons and echoes.
    pub async fn run(&mut self) -> ! {
        info!("Control loop running in {} mode", self.mode);
        loop {
            self.tick().await;
            Timer::after(self.config.tick_period).await;
        }
    }

    /// Performs one pass over the inputs: mode button, then note button, then (in [`Mode::Active`]) the sensor.
    pub async fn tick(&mut self) -> Operation {
        let mut operation = Operation::none();

        if self.poll_mode_button().await {
            self.mode = self.mode.cycle();
            operation |= Operation::ModeToggle;
            info!("Sensor mode is now {}", self.mode);
        }

        let ControllerConfig {
            channel,
            note,
            velocity,
            controller,
            ..
        } = self.config;
        match self.note_edges.update(self.note_button.is_pressed()) {
            Some(Edge::Pressed) => {
                if self.midi.note_on(channel, note, velocity) {
                    operation |= Operation::NoteOn;
                }
            }
            Some(Edge::Released) => {
                if self.midi.note_off(channel, note, velocity) {
                    operation |= Operation::NoteOff;
                }
            }
            None => {}
        }

        self.indicator.show(self.mode);
        if self.mode.is_active() {
            match self.rangefinder.echo().await {
                Ok(echo) => {
                    let centimeters = echo_to_centimeters(echo);
                    let value = u8::from(self.config.calibration.to_midi_value(centimeters));
                    debug!("Hand at {} cm, sending {}", centimeters, value);
                    if self.midi.control_change(channel, controller, value) {
                        operation |= Operation::ControlChange;
                    }
                }
                Err(SensorError::Timeout) => {
                    warn!("No echo from the rangefinder, skipping this tick's Control Change");
                    operation |= Operation::SensorTimeout;
                }
            }
        }

        operation
    }

    /// Samples the mode button until it is released or the per-tick polling budget runs out. Returns `true` if a
    /// press was completed.
    ///
    /// A press that outlasts the budget is remembered by the [`HoldToggle`], so the toggle still happens (once) on
    /// whichever later tick sees the release.
    async fn poll_mode_button(&mut self) -> bool {
        for _ in 0..self.config.hold_poll_budget.max(1) {
            let pressed = self.mode_button.is_pressed();
            if self.mode_toggle.update(pressed) {
                return true;
            }
            if !pressed {
                return false;
            }
            // a zero interval busy-polls the pin
            if self.config.hold_poll_interval != Duration::from_ticks(0) {
                Timer::after(self.config.hold_poll_interval).await;
            }
        }
        debug!("Mode button still held, deferring to the next tick");
        false
    }
}
