//! RP2040 primitives for the Firmata board layer
//!
//! Implements the `firmata-hal` traits for the Raspberry Pi Pico:
//!
//! - GPIO ownership and digital I/O ([`PicoPins`])
//! - PWM on GP16..GP21, driven through the same pin bank
//! - ADC inputs on GP26..GP28 ([`PicoAdc`])
//!
//! [`board`] wires both into a ready [`PicoBoard`].

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod pins;

pub use adc::PicoAdc;
pub use pins::{AnalogPins, PicoPins, RemainingPeripherals};

use embassy_rp::Peripherals;
use firmata_boards::{Board, ViaDigital, MAX_SERVOS};

/// Pico profile with the servo count chosen at build time
pub type PicoProfile = firmata_boards::Pico<MAX_SERVOS>;

/// Pico board facade with digital, PWM and analog I/O attached
pub type PicoBoard = Board<PicoProfile, PicoPins, PicoAdc, ViaDigital>;

/// Take the peripherals and build the board facade
pub fn board(p: Peripherals) -> (PicoBoard, RemainingPeripherals) {
    let (pins, analog, remaining) = pins::split(p);

    #[cfg(feature = "defmt")]
    defmt::info!(
        "Pico: {} pins, {} analog, {} servo slots",
        PicoProfile::TOTAL_PINS,
        PicoProfile::TOTAL_ANALOG_PINS,
        MAX_SERVOS
    );

    let board = Board::new(PicoProfile::new(), pins)
        .with_analog(PicoAdc::new(analog))
        .with_pwm_via_digital();
    (board, remaining)
}
