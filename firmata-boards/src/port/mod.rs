//! Batched 8-pin port I/O
//!
//! Firmata reads and writes digital pins a port (8 pins) at a time. Bit `i`
//! of a port value or mask stands for Firmata pin `port * 8 + i`.
//!
//! A pin is only ever touched when its mask bit is set *and* the board says it
//! is digital. Everything else reads as 0 and is left alone on writes, which
//! also covers the missing high pins of a short last port and ports past the
//! end of the board.
//!
//! Two strategies implement [`PortStrategy`]:
//!
//! - [`PinByPin`] - eight single-pin calls through [`DigitalPins`], works on
//!   every board
//! - [`AvrRegisters`] - direct `PORTx`/`PINx` access for the ATmega x8

mod avr;

pub use avr::{AvrRegisters, PORTB, PORTC, PORTD};

use firmata_hal::DigitalPins;

use crate::board::PinMap;

/// Firmata pin behind bit `bit` of `port`, if it fits the protocol's pin space
pub(crate) fn port_pin(port: u8, bit: u8) -> Option<u8> {
    u8::try_from(u16::from(port) * 8 + u16::from(bit)).ok()
}

/// Bits of `port` whose pins are digital-capable
pub fn digital_mask<M: PinMap + ?Sized>(map: &M, port: u8) -> u8 {
    (0..8u8)
        .filter(|bit| port_pin(port, *bit).is_some_and(|pin| map.is_pin_digital(pin)))
        .fold(0, |mask, bit| mask | (1 << bit))
}

/// Read the pins of `port` selected by `mask`
///
/// Masked-out and non-digital pins read as 0.
pub fn read_port<M, D>(map: &M, pins: &mut D, port: u8, mask: u8) -> u8
where
    M: PinMap + ?Sized,
    D: DigitalPins + ?Sized,
{
    let mut out = 0;
    for bit in 0..8u8 {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let Some(pin) = port_pin(port, bit) else {
            break;
        };
        if map.is_pin_digital(pin) && pins.digital_read(map.to_native_digital(pin)) {
            out |= 1 << bit;
        }
    }
    out
}

/// Write the pins of `port` selected by `mask` from `value`
///
/// Pins whose mask bit is clear, or that are not digital, are not touched.
pub fn write_port<M, D>(map: &M, pins: &mut D, port: u8, value: u8, mask: u8)
where
    M: PinMap + ?Sized,
    D: DigitalPins + ?Sized,
{
    for bit in 0..8u8 {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let Some(pin) = port_pin(port, bit) else {
            break;
        };
        // dont touch non-digital pins
        if map.is_pin_digital(pin) {
            pins.digital_write(map.to_native_digital(pin), value & (1 << bit) != 0);
        }
    }
}

/// Way of performing port I/O on a board, chosen at build time
///
/// Every implementation must be observationally equivalent to [`PinByPin`]:
/// the same native pins touched and the same resulting levels.
pub trait PortStrategy<M: PinMap, D> {
    /// Read the pins of `port` selected by `mask`
    fn read_port(map: &M, pins: &mut D, port: u8, mask: u8) -> u8;

    /// Write the pins of `port` selected by `mask`
    fn write_port(map: &M, pins: &mut D, port: u8, value: u8, mask: u8);
}

/// Reference strategy: one native call per selected digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinByPin;

impl<M: PinMap, D: DigitalPins> PortStrategy<M, D> for PinByPin {
    fn read_port(map: &M, pins: &mut D, port: u8, mask: u8) -> u8 {
        read_port(map, pins, port, mask)
    }

    fn write_port(map: &M, pins: &mut D, port: u8, value: u8, mask: u8) {
        write_port(map, pins, port, value, mask)
    }
}
