//! Raspberry Pi Pico (RP2040)
//!
//! GPIO numbers are used as Firmata pins. GP23 (SMPS mode) and GP24 (VBUS
//! sense) are not brought out, GP25 drives the on-board LED, and the three
//! ADC-capable header pins GP26..GP28 are exposed as analog inputs only so
//! the ADC can own them. GP16..GP21 are routed to PWM slices 0..2 (channels
//! A/B); the other GPIOs stay plain digital pins.

use super::{total_ports, PinMap};

/// Raspberry Pi Pico header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pico<const MAX_SERVOS: u8 = 0>;

impl<const MAX_SERVOS: u8> Pico<MAX_SERVOS> {
    pub const TOTAL_ANALOG_PINS: u8 = 3;
    pub const TOTAL_PINS: u8 = 29;
    pub const TOTAL_PORTS: u8 = total_ports(Self::TOTAL_PINS);
    pub const VERSION_BLINK_PIN: u8 = 25;
    pub const MAX_SERVOS: u8 = MAX_SERVOS;
    pub const FIRST_ANALOG_PIN: u8 = 26;
    pub const FIRST_SERVO_PIN: u8 = 0;
    /// I2C0 default pins
    pub const I2C_SDA: u8 = 4;
    pub const I2C_SCL: u8 = 5;
    /// GPIOs wired to PWM slices
    pub const PWM_PINS: core::ops::RangeInclusive<u8> = 16..=21;

    pub const fn new() -> Self {
        Self
    }
}

impl<const MAX_SERVOS: u8> PinMap for Pico<MAX_SERVOS> {
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
        matches!(pin, 0..=22 | 25)
    }

    fn is_pin_i2c(&self, pin: u8) -> bool {
        pin == Self::I2C_SDA || pin == Self::I2C_SCL
    }

    fn native_has_pwm(&self, native: u8) -> bool {
        Self::PWM_PINS.contains(&native)
    }

    // Servos on the LED pin make no sense
    fn is_pin_servo(&self, pin: u8) -> bool {
        pin != Self::VERSION_BLINK_PIN
            && self.is_pin_digital(pin)
            && pin - Self::FIRST_SERVO_PIN < MAX_SERVOS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::check_profile;
    use crate::capability::Capability;

    const PICO: Pico = Pico;

    #[test]
    fn test_profile() {
        check_profile(&PICO);
        check_profile(&Pico::<30>::new());

        assert_eq!(PICO.total_ports(), 4);
        assert!(PICO.has_version_blink_pin());
    }

    #[test]
    fn test_gaps() {
        assert!(PICO.capabilities(23).is_empty());
        assert!(PICO.capabilities(24).is_empty());
        assert!(PICO.is_pin_digital(25));
        assert!(!PICO.is_pin_digital(26));
        assert!(PICO.is_pin_analog(26));
        assert_eq!(PICO.to_native_analog(28), 2);
        assert!(PICO.capabilities(29).is_empty());
    }

    #[test]
    fn test_pwm_on_routed_slices_only() {
        for pin in 0..PICO.total_pins() {
            assert_eq!(PICO.is_pin_pwm(pin), (16..=21).contains(&pin), "pin {}", pin);
        }
        assert_eq!(PICO.native_pin(21, Capability::Pwm), Some(21));
        assert_eq!(PICO.native_pin(25, Capability::Pwm), None);
    }

    #[test]
    fn test_led_is_never_a_servo() {
        let pico: Pico<30> = Pico;
        assert!(pico.is_pin_servo(0));
        assert_eq!(pico.to_native_servo(22), 22);
        assert!(!pico.is_pin_servo(25));
        assert!(pico.supports(25, Capability::Digital));
    }
}
