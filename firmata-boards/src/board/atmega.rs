//! ATmega168 / ATmega328P boards (Duemilanove, Diecimila, NG, Uno)
//!
//! Firmata pins 0..13 are the digital header, 14.. the analog header. The
//! Bluetooth LE module occupies digital 2 and 9..13, and 0/1 are the serial
//! lines, which leaves 3..8 and A0..A5 (14..19) for digital I/O. TQFP parts
//! add two analog-only inputs (A6/A7, pins 20 and 21).

use super::{total_ports, PinMap};

/// ATmega x8 family with `ANALOG_INPUTS` analog inputs (6 or 8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AtmegaX8<const ANALOG_INPUTS: u8 = 8, const MAX_SERVOS: u8 = 0>;

/// TQFP/QFN package: 8 analog inputs, 22 Firmata pins
pub type Atmega328p<const MAX_SERVOS: u8 = 0> = AtmegaX8<8, MAX_SERVOS>;

/// DIP package: 6 analog inputs, 20 Firmata pins
pub type Atmega328pDip<const MAX_SERVOS: u8 = 0> = AtmegaX8<6, MAX_SERVOS>;

impl<const ANALOG_INPUTS: u8, const MAX_SERVOS: u8> AtmegaX8<ANALOG_INPUTS, MAX_SERVOS> {
    pub const TOTAL_ANALOG_PINS: u8 = ANALOG_INPUTS;
    pub const TOTAL_PINS: u8 = 14 + ANALOG_INPUTS;
    pub const TOTAL_PORTS: u8 = total_ports(Self::TOTAL_PINS);
    /// No LED: digital 13 belongs to the BLE link
    pub const VERSION_BLINK_PIN: u8 = 99;
    pub const MAX_SERVOS: u8 = MAX_SERVOS;
    pub const FIRST_ANALOG_PIN: u8 = 14;
    pub const FIRST_SERVO_PIN: u8 = 2;
    pub const I2C_SDA: u8 = 18;
    pub const I2C_SCL: u8 = 19;

    pub const fn new() -> Self {
        Self
    }

    /// Pins driven by the 8-bit and 16-bit timers
    pub const fn timer_pwm(native: u8) -> bool {
        matches!(native, 3 | 5 | 6 | 9 | 10 | 11)
    }
}

impl<const ANALOG_INPUTS: u8, const MAX_SERVOS: u8> PinMap for AtmegaX8<ANALOG_INPUTS, MAX_SERVOS> {
    fn total_pins(&self) -> u8 {
        Self::TOTAL_PINS
    }

    fn total_analog_pins(&self) -> u8 {
        Self::TOTAL_ANALOG_PINS
    }

    fn version_blink_pin(&self) -> u8 {
        Self::VERSION_BLINK_PIN
    }

    fn max_servos(&self) -> u8 {
        MAX_SERVOS
    }

    fn first_analog_pin(&self) -> u8 {
        Self::FIRST_ANALOG_PIN
    }

    fn first_servo_pin(&self) -> u8 {
        Self::FIRST_SERVO_PIN
    }

    fn is_pin_digital(&self, pin: u8) -> bool {
        matches!(pin, 3..=8 | 14..=19) && pin < Self::TOTAL_PINS
    }

    fn is_pin_i2c(&self, pin: u8) -> bool {
        pin == Self::I2C_SDA || pin == Self::I2C_SCL
    }

    fn native_has_pwm(&self, native: u8) -> bool {
        Self::timer_pwm(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::check_profile;
    use crate::capability::Capability;

    const UNO: Atmega328p = AtmegaX8;
    const UNO_SERVOS: Atmega328p<12> = AtmegaX8;
    const DIP: Atmega328pDip = AtmegaX8;

    #[test]
    fn test_constants() {
        assert_eq!(Atmega328p::<0>::TOTAL_PINS, 22);
        assert_eq!(Atmega328p::<0>::TOTAL_PORTS, 3);
        assert_eq!(Atmega328pDip::<0>::TOTAL_PINS, 20);
        assert_eq!(Atmega328pDip::<0>::TOTAL_ANALOG_PINS, 6);
        assert_eq!(UNO.version_blink_pin(), 99);
        assert!(!UNO.has_version_blink_pin());
    }

    #[test]
    fn test_profiles_are_consistent() {
        check_profile(&UNO);
        check_profile(&UNO_SERVOS);
        check_profile(&DIP);
        check_profile(&Atmega328pDip::<12>::new());
    }

    #[test]
    fn test_reserved_pins_are_not_digital() {
        // Serial and BLE link pins
        for pin in [0, 1, 2, 9, 10, 11, 12, 13] {
            assert!(UNO.capabilities(pin).is_empty(), "pin {}", pin);
        }
        for pin in (3..=8).chain(14..=19) {
            assert!(UNO.is_pin_digital(pin), "pin {}", pin);
        }
    }

    #[test]
    fn test_analog_only_inputs() {
        assert!(UNO.is_pin_analog(20));
        assert!(UNO.is_pin_analog(21));
        assert!(!UNO.is_pin_digital(20));
        assert!(!UNO.is_pin_digital(21));
        assert_eq!(UNO.to_native_analog(21), 7);

        // DIP parts stop at A5
        assert!(!DIP.is_pin_analog(20));
        assert_eq!(DIP.analog_channel_to_pin(5), Some(19));
        assert_eq!(DIP.analog_channel_to_pin(6), None);
    }

    #[test]
    fn test_pwm_needs_timer_and_digital() {
        let pwm: heapless::Vec<u8, 8> = (0..UNO.total_pins())
            .filter(|pin| UNO.is_pin_pwm(*pin))
            .collect();
        // 9..11 have timers but belong to the BLE link
        assert_eq!(pwm.as_slice(), &[3, 5, 6]);
    }

    #[test]
    fn test_servo_slots() {
        assert!(!UNO.is_pin_servo(3));

        assert!(UNO_SERVOS.is_pin_servo(3));
        assert_eq!(UNO_SERVOS.to_native_servo(3), 1);
        assert!(UNO_SERVOS.is_pin_servo(8));
        assert!(!UNO_SERVOS.is_pin_servo(9));
        assert!(!UNO_SERVOS.is_pin_servo(14));

        let small: Atmega328p<2> = AtmegaX8;
        assert!(small.is_pin_servo(3));
        assert!(!small.is_pin_servo(4));
    }

    #[test]
    fn test_i2c_pair() {
        assert!(UNO.is_pin_i2c(18));
        assert!(UNO.is_pin_i2c(19));
        assert!(UNO.supports(18, Capability::Digital));
        assert!(!UNO.is_pin_i2c(17));
    }
}
