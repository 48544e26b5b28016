//! Board facade for the protocol layer
//!
//! [`Board`] bundles a profile with the native primitives of the chip and
//! performs every access through a capability check, so the protocol layer
//! can hand it raw Firmata pin numbers. Requests for a capability the pin
//! lacks are ignored rather than reported: validating and answering the
//! host is the protocol layer's job.
//!
//! Primitives that are not wired up show through: `analog_read` yields
//! `None` and `pwm_write` yields `false` when the native layer has nothing
//! behind the pin, even if the profile lists the capability.

use core::marker::PhantomData;

use embedded_hal_async::delay::DelayNs;
use firmata_hal::{AnalogInputs, DigitalPins, PwmOutputs};

use crate::blink;
use crate::board::PinMap;
use crate::capability::{Capabilities, Capability};
use crate::port::{PinByPin, PortStrategy};

/// Where [`Board::pwm_write`] sends a duty cycle
///
/// Any [`PwmOutputs`] receives it directly. [`ViaDigital`] hands it to the
/// digital primitive for chips where one object owns both functions of a
/// pin.
pub trait PwmRoute<D> {
    /// Returns whether a PWM output took the write
    fn route_pwm(&mut self, digital: &mut D, native: u8, duty: u8) -> bool;
}

impl<D, W: PwmOutputs> PwmRoute<D> for W {
    fn route_pwm(&mut self, _digital: &mut D, native: u8, duty: u8) -> bool {
        self.pwm_write(native, duty)
    }
}

/// PWM is driven by the digital primitive itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViaDigital;

impl<D: PwmOutputs> PwmRoute<D> for ViaDigital {
    fn route_pwm(&mut self, digital: &mut D, native: u8, duty: u8) -> bool {
        digital.pwm_write(native, duty)
    }
}

/// Profile plus native primitives
///
/// - `M`: board profile
/// - `D`: digital pins (and port registers for register strategies)
/// - `A`: analog inputs, `()` when the board has none wired up
/// - `W`: PWM outputs, `()` when unused, [`ViaDigital`] when `D` drives them
/// - `S`: port strategy, [`PinByPin`] unless a fast path is selected
pub struct Board<M, D, A = (), W = (), S = PinByPin> {
    map: M,
    digital: D,
    analog: A,
    pwm: W,
    _strategy: PhantomData<S>,
}

impl<M: PinMap, D: DigitalPins> Board<M, D> {
    /// Create a board with digital I/O only
    pub fn new(map: M, digital: D) -> Self {
        Self {
            map,
            digital,
            analog: (),
            pwm: (),
            _strategy: PhantomData,
        }
    }
}

impl<M, D, A, W, S> Board<M, D, A, W, S> {
    /// Attach analog inputs
    pub fn with_analog<A2>(self, analog: A2) -> Board<M, D, A2, W, S> {
        Board {
            map: self.map,
            digital: self.digital,
            analog,
            pwm: self.pwm,
            _strategy: PhantomData,
        }
    }

    /// Attach PWM outputs
    pub fn with_pwm<W2>(self, pwm: W2) -> Board<M, D, A, W2, S> {
        Board {
            map: self.map,
            digital: self.digital,
            analog: self.analog,
            pwm,
            _strategy: PhantomData,
        }
    }

    /// Send PWM writes to the digital primitive
    pub fn with_pwm_via_digital(self) -> Board<M, D, A, ViaDigital, S> {
        self.with_pwm(ViaDigital)
    }

    /// Select a different port strategy
    pub fn with_strategy<S2>(self) -> Board<M, D, A, W, S2> {
        #[cfg(feature = "defmt")]
        defmt::debug!("port strategy: {=str}", core::any::type_name::<S2>());

        Board {
            map: self.map,
            digital: self.digital,
            analog: self.analog,
            pwm: self.pwm,
            _strategy: PhantomData,
        }
    }

    /// The board profile
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Direct access to the digital primitives
    pub fn digital_mut(&mut self) -> &mut D {
        &mut self.digital
    }

    /// Direct access to the analog primitives
    pub fn analog_mut(&mut self) -> &mut A {
        &mut self.analog
    }

    /// Direct access to the PWM primitives
    pub fn pwm_mut(&mut self) -> &mut W {
        &mut self.pwm
    }

    /// Split back into parts
    pub fn release(self) -> (M, D, A, W) {
        (self.map, self.digital, self.analog, self.pwm)
    }
}

impl<M, D, A, W, S> Board<M, D, A, W, S>
where
    M: PinMap,
    D: DigitalPins,
    A: AnalogInputs,
    W: PwmRoute<D>,
    S: PortStrategy<M, D>,
{
    /// Capabilities of a Firmata pin
    pub fn capabilities(&self, pin: u8) -> Capabilities {
        self.map.capabilities(pin)
    }

    /// Read the pins of `port` selected by `mask`
    pub fn read_port(&mut self, port: u8, mask: u8) -> u8 {
        S::read_port(&self.map, &mut self.digital, port, mask)
    }

    /// Write the pins of `port` selected by `mask`
    pub fn write_port(&mut self, port: u8, value: u8, mask: u8) {
        S::write_port(&self.map, &mut self.digital, port, value, mask)
    }

    /// Read one digital pin, `None` if the pin is not digital
    pub fn digital_read(&mut self, pin: u8) -> Option<bool> {
        let native = self.map.native_pin(pin, Capability::Digital)?;
        Some(self.digital.digital_read(native))
    }

    /// Drive one digital pin; returns whether the pin was written
    pub fn digital_write(&mut self, pin: u8, high: bool) -> bool {
        match self.map.native_pin(pin, Capability::Digital) {
            Some(native) => {
                self.digital.digital_write(native, high);
                true
            }
            None => false,
        }
    }

    /// Sample an analog pin
    ///
    /// `None` if the pin is not analog or no converter is wired to it.
    pub fn analog_read(&mut self, pin: u8) -> Option<u16> {
        let channel = self.map.native_pin(pin, Capability::Analog)?;
        self.analog.analog_read(channel)
    }

    /// Bits per analog sample, 0 without analog hardware
    pub fn analog_resolution(&self) -> u8 {
        A::RESOLUTION_BITS
    }

    /// Sample by analog channel number as used in Firmata analog messages
    pub fn analog_read_channel(&mut self, channel: u8) -> Option<u16> {
        let pin = self.map.analog_channel_to_pin(channel)?;
        self.analog_read(pin)
    }

    /// Set a PWM duty cycle
    ///
    /// Returns `false` if the pin lacks PWM or no output is wired to it.
    pub fn pwm_write(&mut self, pin: u8, duty: u8) -> bool {
        match self.map.native_pin(pin, Capability::Pwm) {
            Some(native) => self.pwm.route_pwm(&mut self.digital, native, duty),
            None => false,
        }
    }

    /// Blink the firmware version on the board LED
    pub async fn blink_version<T: DelayNs>(&mut self, delay: &mut T, major: u8, minor: u8) -> bool {
        blink::blink_version(&self.map, &mut self.digital, delay, major, minor).await
    }
}
