//! Builds the three channel messages the controller sends and hands them, as raw bytes, to a [`Transport`].
//!
//! Requests with a channel above 15 or a data byte above 127 produce no message at all. On stage a dropped message
//! is preferable to a corrupted one: left unchecked, `0x90 | 16` would go out as a Polyphonic Key Pressure message.

use wmidi::{Channel, ControlFunction, MidiMessage, Note, U7};

/// Every message this device produces is a channel voice message of exactly three bytes.
pub const MESSAGE_LEN: usize = 3;

/// The write half of a serial port, configured for MIDI before it is handed over.
///
/// Writes are fire-and-forget; implementations deal with (or ignore) their own failures.
pub trait Transport {
    /// Sends `bytes` down the cable.
    fn write(&mut self, bytes: &[u8]);
}

/// Validates the raw parameters shared by every channel message, then lets `build` pick the message kind.
fn encode(
    channel: u8,
    data1: u8,
    data2: u8,
    build: fn(Channel, U7, U7) -> MidiMessage<'static>,
) -> Option<MidiMessage<'static>> {
    let channel = Channel::from_index(channel).ok()?;
    let data1 = U7::try_from(data1).ok()?;
    let data2 = U7::try_from(data2).ok()?;
    Some(build(channel, data1, data2))
}

/// Builds a Note On (`0x9n`), or returns `None` if any parameter is out of range.
pub fn note_on(channel: u8, note: u8, velocity: u8) -> Option<MidiMessage<'static>> {
    encode(channel, note, velocity, |channel, note, velocity| {
        MidiMessage::NoteOn(channel, Note::from(note), velocity)
    })
}

/// Builds a Note Off (`0x8n`), or returns `None` if any parameter is out of range.
pub fn note_off(channel: u8, note: u8, velocity: u8) -> Option<MidiMessage<'static>> {
    encode(channel, note, velocity, |channel, note, velocity| {
        MidiMessage::NoteOff(channel, Note::from(note), velocity)
    })
}

/// Builds a Control Change (`0xBn`), or returns `None` if any parameter is out of range.
pub fn control_change(channel: u8, controller: u8, value: u8) -> Option<MidiMessage<'static>> {
    encode(channel, controller, value, |channel, controller, value| {
        MidiMessage::ControlChange(channel, ControlFunction(controller), value)
    })
}

/// Serializes a channel message to its wire format: status byte, then both data bytes. No running status.
pub fn to_bytes(msg: &MidiMessage) -> Option<[u8; MESSAGE_LEN]> {
    let mut bytes = [0_u8; MESSAGE_LEN];
    match msg.copy_to_slice(&mut bytes) {
        Ok(MESSAGE_LEN) => Some(bytes),
        _ => None,
    }
}

/// Sends encoded messages over a [`Transport`] as soon as they are built. There is no batching, acknowledgement, or
/// retry.
///
/// Every method reports whether a message actually went out, which is the only feedback a caller gets about an
/// out-of-range request.
pub struct MidiOut<T> {
    transport: T,
}

impl<T: Transport> MidiOut<T> {
    /// Wraps a transport which has already been initialized.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends a Note On.
    pub fn note_on(&mut self, channel: u8, note: u8, velocity: u8) -> bool {
        self.send(note_on(channel, note, velocity))
    }

    /// Sends a Note Off.
    pub fn note_off(&mut self, channel: u8, note: u8, velocity: u8) -> bool {
        self.send(note_off(channel, note, velocity))
    }

    /// Sends a Control Change.
    pub fn control_change(&mut self, channel: u8, controller: u8, value: u8) -> bool {
        self.send(control_change(channel, controller, value))
    }

    fn send(&mut self, msg: Option<MidiMessage<'static>>) -> bool {
        match msg.as_ref().and_then(to_bytes) {
            Some(bytes) => {
                debug!("Sending MIDI: {}", bytes);
                self.transport.write(&bytes);
                true
            }
            None => {
                warn!("Dropping out-of-range MIDI request");
                false
            }
        }
    }

    /// Gives the transport back, e.g. to inspect what was written.
    pub fn into_inner(self) -> T {
        self.transport
    }
}
