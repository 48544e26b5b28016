//! Raw 8-bit GPIO port registers
//!
//! Some chips group their pins into byte-wide registers that line up with
//! Firmata ports closely enough to write several pins with one store. The
//! board layer only uses these through a strategy that masks out reserved
//! pins and wraps every read-modify-write in a critical section, so
//! implementations just perform the raw access.

/// Byte-wide output/input port registers
///
/// `port` is a chip-specific register identifier (for AVR: B, C, D ...).
pub trait PortRegisters {
    /// Read the output latch (AVR `PORTx`)
    fn output(&mut self, port: u8) -> u8;

    /// Store the output latch (AVR `PORTx`)
    fn set_output(&mut self, port: u8, value: u8);

    /// Read the pin input levels (AVR `PINx`)
    fn input(&mut self, port: u8) -> u8;
}

impl<T: PortRegisters + ?Sized> PortRegisters for &mut T {
    fn output(&mut self, port: u8) -> u8 {
        (**self).output(port)
    }

    fn set_output(&mut self, port: u8, value: u8) {
        (**self).set_output(port, value)
    }

    fn input(&mut self, port: u8) -> u8 {
        (**self).input(port)
    }
}
