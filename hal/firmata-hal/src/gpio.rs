//! Digital pin primitives
//!
//! [`DigitalPins`] is the native `digitalRead`/`digitalWrite` pair that the
//! port batcher drives. [`PinArray`] implements it for any array of
//! `embedded-hal` 1.0 pins so that chip HALs only have to hand over their
//! GPIO objects.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Digital I/O addressed by native pin index
///
/// Implementations handle the actual hardware access for the specific chip.
/// Neither operation can fail: a native index without a backing pin reads
/// low and ignores writes.
pub trait DigitalPins {
    /// Read the logical level of a native pin (`true` = high)
    fn digital_read(&mut self, native: u8) -> bool;

    /// Drive a native pin to the given logical level
    fn digital_write(&mut self, native: u8, high: bool);
}

impl<T: DigitalPins + ?Sized> DigitalPins for &mut T {
    fn digital_read(&mut self, native: u8) -> bool {
        (**self).digital_read(native)
    }

    fn digital_write(&mut self, native: u8, high: bool) {
        (**self).digital_write(native, high)
    }
}

/// Fixed array of `embedded-hal` pins indexed by native pin number
///
/// Slot `n` holds native pin `n`. Empty slots model pins the board does not
/// bring out (or that another peripheral owns).
pub struct PinArray<P, const N: usize> {
    pins: [Option<P>; N],
}

impl<P, const N: usize> PinArray<P, N> {
    /// Create a pin array from its slots
    pub fn new(pins: [Option<P>; N]) -> Self {
        Self { pins }
    }

    /// Number of native slots
    pub const fn len(&self) -> usize {
        N
    }

    /// True when the array has no slots at all
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Check whether a native index has a backing pin
    pub fn is_wired(&self, native: u8) -> bool {
        self.pins
            .get(usize::from(native))
            .is_some_and(|slot| slot.is_some())
    }

    /// Borrow the pin behind a native index
    pub fn get_mut(&mut self, native: u8) -> Option<&mut P> {
        self.pins.get_mut(usize::from(native))?.as_mut()
    }

    /// Remove a pin from the array, e.g. to hand it to another peripheral
    pub fn take(&mut self, native: u8) -> Option<P> {
        self.pins.get_mut(usize::from(native))?.take()
    }

    /// Put a pin back into its slot
    pub fn restore(&mut self, native: u8, pin: P) {
        if let Some(slot) = self.pins.get_mut(usize::from(native)) {
            *slot = Some(pin);
        }
    }
}

impl<P, const N: usize> DigitalPins for PinArray<P, N>
where
    P: InputPin + OutputPin,
{
    fn digital_read(&mut self, native: u8) -> bool {
        let Some(pin) = self.get_mut(native) else {
            return false;
        };
        match pin.is_high() {
            Ok(high) => high,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("digital read failed on native pin {}", native);
                false
            }
        }
    }

    fn digital_write(&mut self, native: u8, high: bool) {
        let Some(pin) = self.get_mut(native) else {
            return;
        };
        if pin.set_state(PinState::from(high)).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("digital write failed on native pin {}", native);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Mock pin that loops its output level back to its input
    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.high)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.high)
        }
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    /// Pin whose every operation fails
    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    fn mock_array() -> PinArray<MockPin, 4> {
        PinArray::new([
            Some(MockPin { high: false }),
            None,
            Some(MockPin { high: true }),
            Some(MockPin { high: false }),
        ])
    }

    #[test]
    fn test_write_then_read() {
        let mut pins = mock_array();

        pins.digital_write(0, true);
        assert!(pins.digital_read(0));

        pins.digital_write(2, false);
        assert!(!pins.digital_read(2));
    }

    #[test]
    fn test_unwired_and_out_of_range_pins() {
        let mut pins = mock_array();

        assert!(!pins.is_wired(1));
        assert!(!pins.is_wired(9));

        // Writes are dropped, reads are low
        pins.digital_write(1, true);
        assert!(!pins.digital_read(1));
        pins.digital_write(200, true);
        assert!(!pins.digital_read(200));
    }

    #[test]
    fn test_take_and_restore() {
        let mut pins = mock_array();

        let pin = pins.take(2).unwrap();
        assert!(pin.high);
        assert!(!pins.is_wired(2));
        assert!(!pins.digital_read(2));

        pins.restore(2, pin);
        assert!(pins.digital_read(2));
    }

    #[test]
    fn test_errors_are_swallowed() {
        let mut pins: PinArray<BrokenPin, 1> = PinArray::new([Some(BrokenPin)]);

        pins.digital_write(0, true);
        assert!(!pins.digital_read(0));
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn toggle<D: DigitalPins>(mut io: D) {
            let level = io.digital_read(3);
            io.digital_write(3, !level);
        }

        let mut pins = mock_array();
        toggle(&mut pins);
        assert!(pins.digital_read(3));
    }
}
