//! ATmega x8 register fast path
//!
//! On the ATmega168/328P the Firmata ports line up with the chip's GPIO
//! registers like this:
//!
//! ```text
//! Firmata port 0   pins  0..7   PORTD bits 0..7
//! Firmata port 1   pins  8..13  PORTB bits 0..5
//!                  pins 14..15  PORTC bits 0..1
//! Firmata port 2   pins 16..19  PORTC bits 2..5
//!                  pins 20..21  ADC6/ADC7, no GPIO register
//! ```
//!
//! The caller's mask is always narrowed to the digital pins of the port
//! first, so the serial and BLE link pins stay untouched no matter what the
//! caller sends. PORTC is shared between ports 1 and 2 and interrupt handlers
//! may write the same registers, so every read-modify-write runs inside a
//! critical section.

use firmata_hal::PortRegisters;

use super::{digital_mask, PortStrategy};
use crate::board::AtmegaX8;

/// Register identifier for `PORTB`/`PINB`
pub const PORTB: u8 = 0;
/// Register identifier for `PORTC`/`PINC`
pub const PORTC: u8 = 1;
/// Register identifier for `PORTD`/`PIND`
pub const PORTD: u8 = 2;

/// Contiguous run of Firmata port bits living in one register
#[derive(Debug, Clone, Copy)]
struct Segment {
    register: u8,
    /// First Firmata port bit of the run
    port_shift: u8,
    /// Register bit that first port bit lands on
    register_shift: u8,
    width: u8,
}

impl Segment {
    const fn new(register: u8, port_shift: u8, register_shift: u8, width: u8) -> Self {
        Self {
            register,
            port_shift,
            register_shift,
            width,
        }
    }

    const fn width_mask(&self) -> u8 {
        ((1u16 << self.width) - 1) as u8
    }

    /// Move port bits onto register bits
    const fn to_register(&self, port_bits: u8) -> u8 {
        ((port_bits >> self.port_shift) & self.width_mask()) << self.register_shift
    }

    /// Move register bits back onto port bits
    const fn to_port(&self, register_bits: u8) -> u8 {
        ((register_bits >> self.register_shift) & self.width_mask()) << self.port_shift
    }
}

const PORT0: [Segment; 1] = [Segment::new(PORTD, 0, 0, 8)];
const PORT1: [Segment; 2] = [Segment::new(PORTB, 0, 0, 6), Segment::new(PORTC, 6, 0, 2)];
const PORT2: [Segment; 1] = [Segment::new(PORTC, 0, 2, 4)];

fn segments(port: u8) -> &'static [Segment] {
    match port {
        0 => &PORT0,
        1 => &PORT1,
        2 => &PORT2,
        _ => &[],
    }
}

/// Direct register strategy for [`AtmegaX8`] boards
///
/// Reads come from the `PINx` input registers and writes update the `PORTx`
/// output latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AvrRegisters;

impl<const ANALOG_INPUTS: u8, const MAX_SERVOS: u8, R> PortStrategy<AtmegaX8<ANALOG_INPUTS, MAX_SERVOS>, R>
    for AvrRegisters
where
    R: PortRegisters,
{
    fn read_port(map: &AtmegaX8<ANALOG_INPUTS, MAX_SERVOS>, regs: &mut R, port: u8, mask: u8) -> u8 {
        let mask = mask & digital_mask(map, port);
        if mask == 0 {
            return 0;
        }
        segments(port)
            .iter()
            .fold(0, |out, seg| out | seg.to_port(regs.input(seg.register)))
            & mask
    }

    fn write_port(
        map: &AtmegaX8<ANALOG_INPUTS, MAX_SERVOS>,
        regs: &mut R,
        port: u8,
        value: u8,
        mask: u8,
    ) {
        // do not touch Tx/Rx or the BLE link
        let mask = mask & digital_mask(map, port);
        if mask == 0 {
            return;
        }
        let value = value & mask;

        critical_section::with(|_| {
            for seg in segments(port) {
                let touched = seg.to_register(mask);
                if touched == 0 {
                    continue;
                }
                let latch = regs.output(seg.register);
                regs.set_output(seg.register, (latch & !touched) | seg.to_register(value));
            }
        });
    }
}
