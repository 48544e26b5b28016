//! The board this firmware is built for
//!
//! Selected by exactly one cargo feature (`atmega328p`, `atmega328p-dip`,
//! `atmega2560`, `rp2040-pico`); the servo count comes from the
//! `FIRMATA_MAX_SERVOS` environment variable at build time.

include!(concat!(env!("OUT_DIR"), "/servos.rs"));

#[cfg(feature = "atmega328p")]
pub type ActiveBoard = super::Atmega328p<MAX_SERVOS>;

#[cfg(feature = "atmega328p-dip")]
pub type ActiveBoard = super::Atmega328pDip<MAX_SERVOS>;

#[cfg(feature = "atmega2560")]
pub type ActiveBoard = super::Mega<MAX_SERVOS>;

#[cfg(feature = "rp2040-pico")]
pub type ActiveBoard = super::Pico<MAX_SERVOS>;

/// Profile instance of the active board
pub const ACTIVE_BOARD: ActiveBoard = ActiveBoard::new();

/// Number of Firmata pins
pub const TOTAL_PINS: u8 = ActiveBoard::TOTAL_PINS;

/// Number of analog inputs
pub const TOTAL_ANALOG_PINS: u8 = ActiveBoard::TOTAL_ANALOG_PINS;

/// Number of 8-pin ports
pub const TOTAL_PORTS: u8 = ActiveBoard::TOTAL_PORTS;

/// Native index of the version LED
pub const VERSION_BLINK_PIN: u8 = ActiveBoard::VERSION_BLINK_PIN;
