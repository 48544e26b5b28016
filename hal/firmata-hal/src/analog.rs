//! Analog input and PWM output primitives
//!
//! Analog inputs are addressed by zero-based ADC channel, which is what the
//! board layer's analog translator produces. PWM outputs are addressed by the
//! same native index as digital pins.

use embedded_hal::pwm::SetDutyCycle;

/// Analog input channels (`analogRead`)
pub trait AnalogInputs {
    /// Resolution of a conversion in bits
    const RESOLUTION_BITS: u8 = 10;

    /// Sample an analog channel
    ///
    /// `None` when no converter is wired to the channel or the conversion
    /// failed.
    fn analog_read(&mut self, channel: u8) -> Option<u16>;
}

impl<T: AnalogInputs + ?Sized> AnalogInputs for &mut T {
    const RESOLUTION_BITS: u8 = T::RESOLUTION_BITS;

    fn analog_read(&mut self, channel: u8) -> Option<u16> {
        (**self).analog_read(channel)
    }
}

/// PWM outputs (`analogWrite`)
pub trait PwmOutputs {
    /// Set the duty cycle of a native pin, 0 = always low, 255 = always high
    ///
    /// Returns `false` when no PWM output is wired to the pin or the write
    /// failed.
    fn pwm_write(&mut self, native: u8, duty: u8) -> bool;
}

impl<T: PwmOutputs + ?Sized> PwmOutputs for &mut T {
    fn pwm_write(&mut self, native: u8, duty: u8) -> bool {
        (**self).pwm_write(native, duty)
    }
}

/// No ADC: nothing is wired, every read is `None`
impl AnalogInputs for () {
    const RESOLUTION_BITS: u8 = 0;

    fn analog_read(&mut self, _channel: u8) -> Option<u16> {
        None
    }
}

/// No PWM hardware: every write is rejected
impl PwmOutputs for () {
    fn pwm_write(&mut self, _native: u8, _duty: u8) -> bool {
        false
    }
}

/// Fixed array of `embedded-hal` PWM channels indexed by native pin number
pub struct PwmArray<C, const N: usize> {
    channels: [Option<C>; N],
}

impl<C, const N: usize> PwmArray<C, N> {
    /// Create a PWM array from its slots
    pub fn new(channels: [Option<C>; N]) -> Self {
        Self { channels }
    }

    /// Check whether a native index has a PWM channel
    pub fn is_wired(&self, native: u8) -> bool {
        self.channels
            .get(usize::from(native))
            .is_some_and(|slot| slot.is_some())
    }

    /// Borrow the channel behind a native index
    pub fn get_mut(&mut self, native: u8) -> Option<&mut C> {
        self.channels.get_mut(usize::from(native))?.as_mut()
    }
}

impl<C: SetDutyCycle, const N: usize> PwmOutputs for PwmArray<C, N> {
    fn pwm_write(&mut self, native: u8, duty: u8) -> bool {
        let Some(channel) = self.get_mut(native) else {
            return false;
        };
        if channel
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .is_err()
        {
            #[cfg(feature = "defmt")]
            defmt::warn!("pwm write failed on native pin {}", native);
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct MockChannel {
        duty: u16,
    }

    impl ErrorType for MockChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockChannel {
        fn max_duty_cycle(&self) -> u16 {
            1000
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_pwm_array_scales_duty() {
        let mut pwm: PwmArray<MockChannel, 2> =
            PwmArray::new([None, Some(MockChannel { duty: 0 })]);

        assert!(pwm.pwm_write(1, 255));
        assert_eq!(pwm.get_mut(1).unwrap().duty, 1000);

        assert!(pwm.pwm_write(1, 0));
        assert_eq!(pwm.get_mut(1).unwrap().duty, 0);

        // Missing channels are reported
        assert!(!pwm.pwm_write(0, 128));
        assert!(!pwm.pwm_write(7, 128));
        assert!(pwm.is_wired(1));
        assert!(!pwm.is_wired(0));
    }

    #[test]
    fn test_unit_primitives_report_nothing_wired() {
        let mut none = ();
        assert_eq!(none.analog_read(3), None);
        assert!(!none.pwm_write(3, 10));
        assert_eq!(<() as AnalogInputs>::RESOLUTION_BITS, 0);
    }
}
