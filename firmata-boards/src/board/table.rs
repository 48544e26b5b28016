//! Lookup-table board profile
//!
//! [`PinTable`] stores the capability set of every Firmata pin. It is built
//! either by snapshotting a compiled-in profile or from a
//! [`BoardConfig`], which lets a board be described as data (TOML) instead
//! of code.

use heapless::String;

use super::PinMap;
use crate::capability::{Capabilities, Capability};
use crate::config::{BoardConfig, ConfigError, MAX_NAME_LEN};

/// Firmata addresses at most 128 pins
pub const MAX_PINS: usize = 128;

/// Capability set per Firmata pin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinTable {
    caps: [Capabilities; MAX_PINS],
    len: u8,
}

impl PinTable {
    /// Create a table with `len` pins that support nothing
    pub fn empty(len: u8) -> Self {
        Self {
            caps: [Capabilities::NONE; MAX_PINS],
            len: len.min(MAX_PINS as u8),
        }
    }

    /// Snapshot the capabilities of any profile
    pub fn from_map<M: PinMap + ?Sized>(map: &M) -> Self {
        let mut table = Self::empty(map.total_pins());
        for pin in 0..table.len {
            table.caps[usize::from(pin)] = map.capabilities(pin);
        }
        table
    }

    /// Capabilities of a pin; pins past the end support nothing
    pub fn get(&self, pin: u8) -> Capabilities {
        if pin >= self.len {
            return Capabilities::NONE;
        }
        self.caps[usize::from(pin)]
    }

    /// Replace the capabilities of a pin inside the table
    pub fn set(&mut self, pin: u8, caps: Capabilities) {
        if pin < self.len {
            self.caps[usize::from(pin)] = caps;
        }
    }

    /// Number of pins covered
    pub fn len(&self) -> u8 {
        self.len
    }

    /// True for a table without pins
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pins supporting a capability
    pub fn count(&self, cap: Capability) -> usize {
        self.iter().filter(|(_, caps)| caps.contains(cap)).count()
    }

    /// Iterate `(pin, capabilities)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (u8, Capabilities)> + '_ {
        (0..self.len).map(move |pin| (pin, self.caps[usize::from(pin)]))
    }
}

/// Board profile backed by a [`PinTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBoard {
    name: String<MAX_NAME_LEN>,
    table: PinTable,
    total_analog_pins: u8,
    version_blink_pin: u8,
    max_servos: u8,
    first_analog_pin: u8,
    first_servo_pin: u8,
}

impl TableBoard {
    /// Build a board from a validated description
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut table = PinTable::empty(config.total_pins);
        for pin in 0..config.total_pins {
            let mut caps = Capabilities::new();
            let digital = config.is_digital(pin);

            if digital {
                caps.insert(Capability::Digital);
                if config.has_pwm(pin) {
                    caps.insert(Capability::Pwm);
                }
                if config.is_servo(pin) {
                    caps.insert(Capability::Servo);
                }
            }
            if pin >= config.first_analog_pin
                && pin - config.first_analog_pin < config.total_analog_pins
            {
                caps.insert(Capability::Analog);
            }
            if config.i2c.is_some_and(|[sda, scl]| pin == sda || pin == scl) {
                caps.insert(Capability::I2c);
            }

            table.set(pin, caps);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "board '{}': {} pins, {} digital, {} analog",
            config.name.as_str(),
            table.len(),
            table.count(Capability::Digital),
            table.count(Capability::Analog)
        );

        Ok(Self {
            name: config.name.clone(),
            table,
            total_analog_pins: config.total_analog_pins,
            version_blink_pin: config.version_blink_pin,
            max_servos: config.max_servos,
            first_analog_pin: config.first_analog_pin,
            first_servo_pin: config.first_servo_pin,
        })
    }

    /// Parse a TOML board description and build the board
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        Self::from_config(&BoardConfig::from_toml(input)?)
    }

    /// Board name from the description
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The underlying capability table
    pub fn table(&self) -> &PinTable {
        &self.table
    }
}

impl PinMap for TableBoard {
    fn total_pins(&self) -> u8 {
        self.table.len()
    }

    fn total_analog_pins(&self) -> u8 {
        self.total_analog_pins
    }

    fn version_blink_pin(&self) -> u8 {
        self.version_blink_pin
    }

    fn max_servos(&self) -> u8 {
        self.max_servos
    }

    fn first_analog_pin(&self) -> u8 {
        self.first_analog_pin
    }

    fn first_servo_pin(&self) -> u8 {
        self.first_servo_pin
    }

    fn is_pin_digital(&self, pin: u8) -> bool {
        self.table.get(pin).contains(Capability::Digital)
    }

    fn is_pin_i2c(&self, pin: u8) -> bool {
        self.table.get(pin).contains(Capability::I2c)
    }

    fn is_pin_analog(&self, pin: u8) -> bool {
        self.table.get(pin).contains(Capability::Analog)
    }

    fn is_pin_pwm(&self, pin: u8) -> bool {
        self.table.get(pin).contains(Capability::Pwm)
    }

    fn is_pin_servo(&self, pin: u8) -> bool {
        self.table.get(pin).contains(Capability::Servo)
    }

    fn capabilities(&self, pin: u8) -> Capabilities {
        self.table.get(pin)
    }
}
