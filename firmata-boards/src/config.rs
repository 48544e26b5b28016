//! Board descriptions as data
//!
//! A [`BoardConfig`] captures everything a compiled-in profile encodes in
//! code, so boards that only differ in their pin tables can be added without
//! writing a new profile. With the `toml` feature a description is read from
//! TOML:
//!
//! ```toml
//! name = "uno-ble"
//! total_pins = 22
//! total_analog_pins = 8
//! first_analog_pin = 14
//! version_blink_pin = 99
//! first_servo_pin = 2
//! digital = [{ start = 3, end = 8 }, { start = 14, end = 19 }]
//! pwm = [{ start = 3, end = 3 }, { start = 5, end = 6 }, { start = 9, end = 11 }]
//! i2c = [18, 19]
//! ```
//!
//! `no_servo` lists digital pins that never get a servo slot even when the
//! slot window covers them, such as an on-board LED.

use core::fmt;

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{MAX_ANALOG_PINS, MAX_PINS};

/// Maximum board name length
pub const MAX_NAME_LEN: usize = 24;

/// Maximum number of ranges per pin list
pub const MAX_RANGES: usize = 8;

/// Errors from board description validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Description is not valid TOML or has the wrong shape
    Parse,
    /// `total_pins` is 0 or above 128
    InvalidPinCount,
    /// More than 16 analog inputs
    TooManyAnalogPins,
    /// Analog inputs must be the last `total_analog_pins` pins
    AnalogNotAtTop,
    /// A range ends before it starts
    InvalidRange,
    /// A range reaches past `total_pins`
    PinOutOfRange,
    /// An I2C line is not a digital pin
    I2cNotDigital,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::Parse => "board description could not be parsed",
            ConfigError::InvalidPinCount => "total_pins must be between 1 and 128",
            ConfigError::TooManyAnalogPins => "at most 16 analog inputs are supported",
            ConfigError::AnalogNotAtTop => "analog inputs must end at the last pin",
            ConfigError::InvalidRange => "range end is before its start",
            ConfigError::PinOutOfRange => "range reaches past total_pins",
            ConfigError::I2cNotDigital => "i2c pins must be digital pins",
        };
        f.write_str(msg)
    }
}

/// Inclusive range of Firmata pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinRange {
    /// First pin
    pub start: u8,
    /// Last pin (inclusive)
    pub end: u8,
}

impl PinRange {
    /// Create a range covering `start..=end`
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Check whether a pin is inside the range
    pub const fn contains(&self, pin: u8) -> bool {
        pin >= self.start && pin <= self.end
    }

    fn check(&self, total_pins: u8) -> Result<(), ConfigError> {
        if self.end < self.start {
            return Err(ConfigError::InvalidRange);
        }
        if self.end >= total_pins {
            return Err(ConfigError::PinOutOfRange);
        }
        Ok(())
    }
}

/// Pin layout of one board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Board name
    pub name: String<MAX_NAME_LEN>,
    /// Number of Firmata pins
    pub total_pins: u8,
    /// Number of analog inputs
    pub total_analog_pins: u8,
    /// Firmata pin of analog channel 0
    pub first_analog_pin: u8,
    /// Native index of the version LED (anything non-digital = none)
    pub version_blink_pin: u8,
    /// Servo slots compiled in
    pub max_servos: u8,
    /// Firmata pin of servo slot 0
    pub first_servo_pin: u8,
    /// Digital-capable pins
    pub digital: Vec<PinRange, MAX_RANGES>,
    /// PWM-capable native pins; empty means every digital pin
    pub pwm: Vec<PinRange, MAX_RANGES>,
    /// Digital pins inside the servo slot window that must not drive a
    /// servo (e.g. the LED pin)
    pub no_servo: Vec<PinRange, MAX_RANGES>,
    /// Hardware I2C pair `[sda, scl]`
    pub i2c: Option<[u8; 2]>,
}

impl BoardConfig {
    /// Create an empty description; the name is truncated to fit
    pub fn new(name: &str, total_pins: u8) -> Self {
        let mut label = String::new();
        for c in name.chars() {
            if label.push(c).is_err() {
                break;
            }
        }
        Self {
            name: label,
            total_pins,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML description
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::warn!("board description is not valid TOML");
            ConfigError::Parse
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the description against the protocol's invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_pins == 0 || usize::from(self.total_pins) > MAX_PINS {
            return Err(ConfigError::InvalidPinCount);
        }
        if self.total_analog_pins > MAX_ANALOG_PINS {
            return Err(ConfigError::TooManyAnalogPins);
        }
        if self.total_analog_pins > 0
            && u16::from(self.first_analog_pin) + u16::from(self.total_analog_pins)
                != u16::from(self.total_pins)
        {
            return Err(ConfigError::AnalogNotAtTop);
        }
        for range in self.digital.iter().chain(&self.pwm).chain(&self.no_servo) {
            range.check(self.total_pins)?;
        }
        if let Some(pins) = self.i2c {
            if !pins.iter().all(|pin| self.is_digital(*pin)) {
                return Err(ConfigError::I2cNotDigital);
            }
        }
        Ok(())
    }

    /// Pin is listed as digital
    pub fn is_digital(&self, pin: u8) -> bool {
        pin < self.total_pins && self.digital.iter().any(|range| range.contains(pin))
    }

    /// Native pin is listed as PWM-capable
    pub fn has_pwm(&self, native: u8) -> bool {
        self.pwm.is_empty() || self.pwm.iter().any(|range| range.contains(native))
    }

    /// Digital pin that maps onto a servo slot and is not excluded
    pub fn is_servo(&self, pin: u8) -> bool {
        self.is_digital(pin)
            && !self.no_servo.iter().any(|range| range.contains(pin))
            && pin
                .checked_sub(self.first_servo_pin)
                .is_some_and(|slot| slot < self.max_servos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mega_config() -> BoardConfig {
        let mut config = BoardConfig::new("mega", 70);
        config.total_analog_pins = 16;
        config.first_analog_pin = 54;
        config.version_blink_pin = 13;
        config.first_servo_pin = 2;
        config.digital.push(PinRange::new(2, 69)).unwrap();
        config.i2c = Some([20, 21]);
        config
    }

    #[test]
    fn test_valid_config() {
        let config = mega_config();
        assert_eq!(config.validate(), Ok(()));
        assert!(config.is_digital(2));
        assert!(!config.is_digital(1));
        assert!(!config.is_digital(70));
        // Empty PWM list means every pin
        assert!(config.has_pwm(30));
    }

    #[test]
    fn test_name_is_truncated() {
        let config = BoardConfig::new("a-very-long-board-name-that-does-not-fit", 8);
        assert_eq!(config.name.len(), MAX_NAME_LEN);
        assert!(config.name.starts_with("a-very-long"));
    }

    #[test]
    fn test_pin_count_limits() {
        let mut config = mega_config();
        config.total_pins = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPinCount));

        config.total_pins = 129;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPinCount));

        let mut config = mega_config();
        config.total_analog_pins = 17;
        config.first_analog_pin = 53;
        assert_eq!(config.validate(), Err(ConfigError::TooManyAnalogPins));
    }

    #[test]
    fn test_analog_block_must_end_at_last_pin() {
        let mut config = mega_config();
        config.first_analog_pin = 50;
        assert_eq!(config.validate(), Err(ConfigError::AnalogNotAtTop));

        // No analog inputs at all is fine
        config.total_analog_pins = 0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_range_errors() {
        let mut config = mega_config();
        config.digital.push(PinRange::new(10, 5)).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::InvalidRange));

        let mut config = mega_config();
        config.pwm.push(PinRange::new(60, 70)).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::PinOutOfRange));

        let mut config = mega_config();
        config.no_servo.push(PinRange::new(80, 80)).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::PinOutOfRange));
    }

    #[test]
    fn test_servo_exclusions() {
        let mut config = mega_config();
        config.max_servos = 12;
        config.no_servo.push(PinRange::new(13, 13)).unwrap();

        assert!(config.is_servo(2));
        assert!(config.is_servo(12));
        assert!(!config.is_servo(13));
        // Slot 12 is past the compiled-in servos
        assert!(!config.is_servo(14));
        assert!(!config.is_servo(1));
    }

    #[test]
    fn test_i2c_must_be_digital() {
        let mut config = mega_config();
        config.i2c = Some([0, 1]);
        assert_eq!(config.validate(), Err(ConfigError::I2cNotDigital));
    }

    #[test]
    fn test_error_display() {
        use core::fmt::Write;

        let mut out: String<64> = String::new();
        write!(out, "{}", ConfigError::AnalogNotAtTop).unwrap();
        assert_eq!(out.as_str(), "analog inputs must end at the last pin");
    }

    #[cfg(feature = "toml")]
    mod toml_tests {
        use super::*;
        use crate::board::{Atmega328p, AtmegaX8, Mega, PinMap, PinTable, Pico, TableBoard};

        #[test]
        fn test_bundled_descriptions_match_profiles() {
            let uno = TableBoard::from_toml(include_str!("../boards/atmega328p.toml")).unwrap();
            let uno_profile: Atmega328p = AtmegaX8;
            assert_eq!(uno.table(), &PinTable::from_map(&uno_profile));

            let mega = TableBoard::from_toml(include_str!("../boards/atmega2560.toml")).unwrap();
            assert_eq!(mega.table(), &PinTable::from_map(&Mega::<0>::new()));

            let pico = TableBoard::from_toml(include_str!("../boards/pico.toml")).unwrap();
            assert_eq!(pico.table(), &PinTable::from_map(&Pico::<0>::new()));
            assert_eq!(pico.name(), "pico");
        }

        #[test]
        fn test_pico_led_is_never_a_servo() {
            let mut config = BoardConfig::from_toml(include_str!("../boards/pico.toml")).unwrap();
            config.max_servos = 30;
            let pico = TableBoard::from_config(&config).unwrap();

            assert!(!pico.is_pin_servo(25));
            assert!(pico.is_pin_servo(22));
            assert_eq!(pico.table(), &PinTable::from_map(&Pico::<30>::new()));
        }

        #[test]
        fn test_parse_minimal() {
            let config = BoardConfig::from_toml(
                r#"
                name = "tiny"
                total_pins = 8
                digital = [{ start = 0, end = 7 }]
                "#,
            )
            .unwrap();
            assert_eq!(config.name.as_str(), "tiny");
            assert_eq!(config.total_analog_pins, 0);
            assert_eq!(config.i2c, None);
        }

        #[test]
        fn test_parse_errors() {
            assert_eq!(
                BoardConfig::from_toml("total_pins = \"many\""),
                Err(ConfigError::Parse)
            );
            assert_eq!(
                BoardConfig::from_toml("name = \"x\"\ntotal_pins = 200"),
                Err(ConfigError::InvalidPinCount)
            );
        }
    }
}
