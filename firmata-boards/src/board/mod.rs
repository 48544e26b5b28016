//! Board profiles
//!
//! A board profile answers two questions for every Firmata pin: *which
//! features does it support* (the `is_pin_*` predicates) and *what number do
//! the native I/O primitives use for it* (the `to_native_*` translators).
//!
//! Profiles are selected once per build (see [`active`]) and dispatched
//! statically. The compiled-in profiles are zero-sized types whose predicates
//! are plain range tests; [`TableBoard`] is the lookup-table alternative built
//! from a [`BoardConfig`](crate::config::BoardConfig).
//!
//! # Check-then-use
//!
//! Translators only handle pins for which the matching predicate is true.
//! They carry a `debug_assert!` but do not check in release builds; use
//! [`PinMap::native_pin`] when a checked translation is wanted.

mod atmega;
mod mega;
mod pico;
mod table;

#[cfg(any(
    feature = "atmega328p",
    feature = "atmega328p-dip",
    feature = "atmega2560",
    feature = "rp2040-pico"
))]
pub mod active;

pub use atmega::{Atmega328p, Atmega328pDip, AtmegaX8};
pub use mega::Mega;
pub use pico::Pico;
pub use table::{PinTable, TableBoard, MAX_PINS};

use crate::capability::{Capabilities, Capability};

/// Highest number of analog inputs the protocol can address
pub const MAX_ANALOG_PINS: u8 = 16;

/// Number of 8-pin ports needed to cover `total_pins` pins
pub const fn total_ports(total_pins: u8) -> u8 {
    total_pins.div_ceil(8)
}

/// Capability classifier and index translator for one board
///
/// Every predicate is total: any pin at or above [`total_pins`](Self::total_pins)
/// supports nothing.
pub trait PinMap {
    /// Number of Firmata pins (at most 128)
    fn total_pins(&self) -> u8;

    /// Number of analog inputs (at most 16)
    fn total_analog_pins(&self) -> u8;

    /// Native index of the LED used to blink the firmware version
    fn version_blink_pin(&self) -> u8;

    /// Servo slots compiled in
    fn max_servos(&self) -> u8;

    /// Firmata pin of analog channel 0
    fn first_analog_pin(&self) -> u8;

    /// Firmata pin of servo slot 0
    fn first_servo_pin(&self) -> u8;

    /// Pin supports `digitalRead`/`digitalWrite`
    ///
    /// Pins wired to fixed serial or inter-board links are excluded even
    /// when the hardware could drive them.
    fn is_pin_digital(&self, pin: u8) -> bool;

    /// Pin is one of the hardware I2C bus lines
    fn is_pin_i2c(&self, pin: u8) -> bool;

    /// Number of 8-pin ports
    fn total_ports(&self) -> u8 {
        total_ports(self.total_pins())
    }

    /// Pin is one of the analog inputs at the top of the pin range
    fn is_pin_analog(&self, pin: u8) -> bool {
        let first = self.first_analog_pin();
        pin < self.total_pins() && pin >= first && pin - first < self.total_analog_pins()
    }

    /// The native primitive can generate PWM on this native pin
    ///
    /// Boards without a PWM table treat every digital pin as PWM-capable.
    fn native_has_pwm(&self, _native: u8) -> bool {
        true
    }

    /// Pin supports `analogWrite`
    fn is_pin_pwm(&self, pin: u8) -> bool {
        self.is_pin_digital(pin) && self.native_has_pwm(self.to_native_pwm(pin))
    }

    /// Pin is digital and maps onto a compiled-in servo slot
    fn is_pin_servo(&self, pin: u8) -> bool {
        self.is_pin_digital(pin)
            && pin
                .checked_sub(self.first_servo_pin())
                .is_some_and(|slot| slot < self.max_servos())
    }

    /// Native index for digital I/O
    fn to_native_digital(&self, pin: u8) -> u8 {
        debug_assert!(self.is_pin_digital(pin), "pin {} is not digital", pin);
        pin
    }

    /// Zero-based analog channel
    fn to_native_analog(&self, pin: u8) -> u8 {
        debug_assert!(self.is_pin_analog(pin), "pin {} is not analog", pin);
        pin.wrapping_sub(self.first_analog_pin())
    }

    /// Native index for PWM output
    fn to_native_pwm(&self, pin: u8) -> u8 {
        self.to_native_digital(pin)
    }

    /// Zero-based servo slot
    fn to_native_servo(&self, pin: u8) -> u8 {
        debug_assert!(self.is_pin_servo(pin), "pin {} is not a servo pin", pin);
        pin.wrapping_sub(self.first_servo_pin())
    }

    /// Firmata pin behind an analog channel (inverse of [`to_native_analog`](Self::to_native_analog))
    fn analog_channel_to_pin(&self, channel: u8) -> Option<u8> {
        if channel >= self.total_analog_pins() {
            return None;
        }
        self.first_analog_pin()
            .checked_add(channel)
            .filter(|pin| *pin < self.total_pins())
    }

    /// Check a single capability
    fn supports(&self, pin: u8, cap: Capability) -> bool {
        match cap {
            Capability::Digital => self.is_pin_digital(pin),
            Capability::Analog => self.is_pin_analog(pin),
            Capability::Pwm => self.is_pin_pwm(pin),
            Capability::Servo => self.is_pin_servo(pin),
            Capability::I2c => self.is_pin_i2c(pin),
        }
    }

    /// All capabilities of a pin
    fn capabilities(&self, pin: u8) -> Capabilities {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.supports(pin, *cap))
            .collect()
    }

    /// Checked translation: `None` when the pin lacks the capability
    ///
    /// I2C lines translate to their digital native index.
    fn native_pin(&self, pin: u8, cap: Capability) -> Option<u8> {
        if !self.supports(pin, cap) {
            return None;
        }
        Some(match cap {
            Capability::Digital | Capability::I2c => self.to_native_digital(pin),
            Capability::Analog => self.to_native_analog(pin),
            Capability::Pwm => self.to_native_pwm(pin),
            Capability::Servo => self.to_native_servo(pin),
        })
    }

    /// The board has an LED the version can be blinked on
    ///
    /// Native and Firmata numbering coincide for the blink pin on every
    /// supported board, so the digital predicate decides.
    fn has_version_blink_pin(&self) -> bool {
        self.is_pin_digital(self.version_blink_pin())
    }
}
