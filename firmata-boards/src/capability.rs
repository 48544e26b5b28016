//! Pin capabilities
//!
//! The five features Firmata can ask a pin for, and a compact set of them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A feature a Firmata pin may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Capability {
    /// `digitalRead`/`digitalWrite`
    Digital = 0,
    /// `analogRead` through an ADC channel
    Analog = 1,
    /// `analogWrite` (PWM)
    Pwm = 2,
    /// Servo output
    Servo = 3,
    /// Hardware I2C bus line
    I2c = 4,
}

impl Capability {
    /// All capabilities, in bit order
    pub const ALL: [Capability; 5] = [
        Capability::Digital,
        Capability::Analog,
        Capability::Pwm,
        Capability::Servo,
        Capability::I2c,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of [`Capability`] values packed into one byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capabilities(u8);

impl Capabilities {
    /// No capabilities (an unusable or reserved pin)
    pub const NONE: Self = Self(0);

    /// Create an empty set
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Raw bit representation
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Add a capability
    pub const fn with(self, cap: Capability) -> Self {
        Self(self.0 | cap.bit())
    }

    /// Add a capability in place
    pub fn insert(&mut self, cap: Capability) {
        self.0 |= cap.bit();
    }

    /// Remove a capability in place
    pub fn remove(&mut self, cap: Capability) {
        self.0 &= !cap.bit();
    }

    /// Check whether a capability is present
    pub const fn contains(self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// True when the pin supports nothing
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of capabilities in the set
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the capabilities in bit order
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |cap| self.contains(*cap))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut caps = Self::new();
        for cap in iter {
            caps.insert(cap);
        }
        caps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove() {
        let mut caps = Capabilities::new();
        assert!(caps.is_empty());

        caps.insert(Capability::Digital);
        caps.insert(Capability::I2c);
        assert!(caps.contains(Capability::Digital));
        assert!(caps.contains(Capability::I2c));
        assert!(!caps.contains(Capability::Analog));
        assert_eq!(caps.len(), 2);

        caps.remove(Capability::Digital);
        assert!(!caps.contains(Capability::Digital));
        assert_eq!(caps.bits(), 1 << 4);
    }

    #[test]
    fn test_iter_in_bit_order() {
        let caps: Capabilities = [Capability::Servo, Capability::Digital, Capability::Pwm]
            .into_iter()
            .collect();

        let mut iter = caps.iter();
        assert_eq!(iter.next(), Some(Capability::Digital));
        assert_eq!(iter.next(), Some(Capability::Pwm));
        assert_eq!(iter.next(), Some(Capability::Servo));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_const_builder() {
        const DIGITAL_PWM: Capabilities = Capabilities::NONE
            .with(Capability::Digital)
            .with(Capability::Pwm);
        assert_eq!(DIGITAL_PWM.len(), 2);
    }
}
