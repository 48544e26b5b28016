//! Arduino Mega (ATmega1280 / ATmega2560)

use super::{total_ports, PinMap};

/// 54 digital pins followed by 16 analog inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mega<const MAX_SERVOS: u8 = 0>;

impl<const MAX_SERVOS: u8> Mega<MAX_SERVOS> {
    pub const TOTAL_ANALOG_PINS: u8 = 16;
    pub const TOTAL_PINS: u8 = 70;
    pub const TOTAL_PORTS: u8 = total_ports(Self::TOTAL_PINS);
    pub const VERSION_BLINK_PIN: u8 = 13;
    pub const MAX_SERVOS: u8 = MAX_SERVOS;
    pub const FIRST_ANALOG_PIN: u8 = 54;
    pub const FIRST_SERVO_PIN: u8 = 2;
    pub const I2C_SDA: u8 = 20;
    pub const I2C_SCL: u8 = 21;

    pub const fn new() -> Self {
        Self
    }

    /// Pins with an output-compare channel
    pub const fn timer_pwm(native: u8) -> bool {
        matches!(native, 2..=13 | 44..=46)
    }
}

impl<const MAX_SERVOS: u8> PinMap for Mega<MAX_SERVOS> {
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

    // 0 and 1 carry Serial0
    fn is_pin_digital(&self, pin: u8) -> bool {
        (2..Self::TOTAL_PINS).contains(&pin)
    }

    fn is_pin_i2c(&self, pin: u8) -> bool {
        pin == Self::I2C_SDA || pin == Self::I2C_SCL
    }

    fn native_has_pwm(&self, native: u8) -> bool {
        Self::timer_pwm(native)
    }
}
