//! This crate contains architecture-agnostic logic for MIDIMove, a handheld controller which turns two pushbuttons
//! and an ultrasonic distance sensor into a [MIDI](https://midi.org/midi-1-0) stream sent over a 5-pin DIN cable.
//!
//! One button plays a note. The other switches "sensor mode" on and off; while it is on, the height of the
//! performer's hand above the sensor is sent as a Control Change, ready to be mapped to whatever parameter the
//! receiving synthesizer or DAW exposes.
//!
//! Hardware is reached only through traits ([`midi::Transport`], [`sensor::Rangefinder`], [`indicator::Indicator`])
//! and [`embedded_hal`] pins, so everything here can be exercised on the host.

#![deny(missing_docs)]
#![no_std]

mod fmt;

pub mod configuration;

/// The polling loop tying inputs to MIDI output.
pub mod control_loop;

pub mod indicator;
pub mod input;
pub mod midi;
pub mod sensor;
