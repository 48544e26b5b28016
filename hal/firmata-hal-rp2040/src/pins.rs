//! GPIO ownership for the Pico header
//!
//! Splits the embassy `Peripherals` into the GPIOs that Firmata drives
//! directly, the ADC inputs and whatever is left for the application
//! (USB, UARTs, PIO).
//!
//! GP16..GP21 are bound to PWM slices 0..2 for good. They still work as
//! digital outputs: high and low are fully-on and fully-off duty cycles.

use embassy_rp::gpio::{Flex, Level, Pull};
use embassy_rp::peripherals;
use embassy_rp::pwm::{Config, Pwm, PwmOutput};
use embassy_rp::{Peri, Peripherals};
use embedded_hal::pwm::SetDutyCycle;
use firmata_hal::{DigitalPins, PinArray, PwmArray, PwmOutputs};

/// Native slots 0..=25; GP23/GP24 stay empty
pub const NATIVE_PINS: usize = 26;

/// Macro to wrap a GPIO from peripherals as a bidirectional pin
///
/// Usage:
/// ```ignore
/// let led = flex_pin!(p, PIN_25); // Some(Flex) starting as input
/// ```
#[macro_export]
macro_rules! flex_pin {
    ($p:expr, $pin:ident) => {
        Some(embassy_rp::gpio::Flex::new($p.$pin))
    };
}

/// Digital and PWM pins of the Pico, indexed by GPIO number
///
/// Plain GPIOs start as floating inputs. A write switches the pin to output
/// first, so Firmata's `digitalWrite` works without a separate mode call.
pub struct PicoPins {
    gpio: PinArray<Flex<'static>, NATIVE_PINS>,
    pwm: PwmArray<PwmOutput<'static>, NATIVE_PINS>,
    /// Levels last driven on PWM-owned pins, bit per GPIO
    pwm_levels: u32,
}

impl PicoPins {
    /// Create from already wrapped slots
    ///
    /// A native index should have at most one of a GPIO or a PWM slot.
    pub fn new(
        gpio: [Option<Flex<'static>>; NATIVE_PINS],
        pwm: [Option<PwmOutput<'static>>; NATIVE_PINS],
    ) -> Self {
        Self {
            gpio: PinArray::new(gpio),
            pwm: PwmArray::new(pwm),
            pwm_levels: 0,
        }
    }

    /// Switch a plain GPIO back to input with the given pull
    pub fn set_input(&mut self, native: u8, pull: Pull) {
        if let Some(pin) = self.gpio.get_mut(native) {
            pin.set_as_input();
            pin.set_pull(pull);
        }
    }

    /// Take a plain GPIO out of the bank for application code
    ///
    /// The result stays a `Flex` GPIO; it cannot be rebound to a PWM slice
    /// or an I2C/UART block.
    pub fn take(&mut self, native: u8) -> Option<Flex<'static>> {
        self.gpio.take(native)
    }

    /// Return a pin taken with [`take`](Self::take)
    pub fn restore(&mut self, native: u8, pin: Flex<'static>) {
        self.gpio.restore(native, pin)
    }

    /// Check whether the bank still drives the pin
    pub fn is_available(&self, native: u8) -> bool {
        self.gpio.is_wired(native) || self.pwm.is_wired(native)
    }

    fn set_pwm_level(&mut self, native: u8, high: bool) {
        let bit = 1u32 << native;
        if high {
            self.pwm_levels |= bit;
        } else {
            self.pwm_levels &= !bit;
        }
    }
}

impl DigitalPins for PicoPins {
    fn digital_read(&mut self, native: u8) -> bool {
        if let Some(pin) = self.gpio.get_mut(native) {
            return pin.is_high();
        }
        self.pwm.is_wired(native) && self.pwm_levels & (1 << native) != 0
    }

    fn digital_write(&mut self, native: u8, high: bool) {
        if let Some(pin) = self.gpio.get_mut(native) {
            // Latch the level before enabling the driver to avoid a glitch
            pin.set_level(Level::from(high));
            pin.set_as_output();
            return;
        }
        let Some(out) = self.pwm.get_mut(native) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("write to unowned GPIO {}", native);
            return;
        };
        let written = if high {
            out.set_duty_cycle_fully_on()
        } else {
            out.set_duty_cycle_fully_off()
        };
        if written.is_ok() {
            self.set_pwm_level(native, high);
        }
    }
}

impl PwmOutputs for PicoPins {
    fn pwm_write(&mut self, native: u8, duty: u8) -> bool {
        if !self.pwm.pwm_write(native, duty) {
            return false;
        }
        self.set_pwm_level(native, duty != 0);
        true
    }
}

/// ADC-capable header pins
pub struct AnalogPins {
    pub adc: Peri<'static, peripherals::ADC>,
    pub gp26: Peri<'static, peripherals::PIN_26>,
    pub gp27: Peri<'static, peripherals::PIN_27>,
    pub gp28: Peri<'static, peripherals::PIN_28>,
}

/// Peripherals Firmata does not use
pub struct RemainingPeripherals {
    pub usb: Peri<'static, peripherals::USB>,
    pub uart0: Peri<'static, peripherals::UART0>,
    pub uart1: Peri<'static, peripherals::UART1>,
    pub pio0: Peri<'static, peripherals::PIO0>,
    pub pio1: Peri<'static, peripherals::PIO1>,
    pub flash: Peri<'static, peripherals::FLASH>,
    /// SMPS mode select
    pub gp23: Peri<'static, peripherals::PIN_23>,
    /// VBUS sense
    pub gp24: Peri<'static, peripherals::PIN_24>,
    /// VSYS/3 sense
    pub gp29: Peri<'static, peripherals::PIN_29>,
}

/// Split embassy peripherals into Firmata pins, analog inputs and the rest
pub fn split(p: Peripherals) -> (PicoPins, AnalogPins, RemainingPeripherals) {
    let gpio = [
        flex_pin!(p, PIN_0),
        flex_pin!(p, PIN_1),
        flex_pin!(p, PIN_2),
        flex_pin!(p, PIN_3),
        flex_pin!(p, PIN_4),
        flex_pin!(p, PIN_5),
        flex_pin!(p, PIN_6),
        flex_pin!(p, PIN_7),
        flex_pin!(p, PIN_8),
        flex_pin!(p, PIN_9),
        flex_pin!(p, PIN_10),
        flex_pin!(p, PIN_11),
        flex_pin!(p, PIN_12),
        flex_pin!(p, PIN_13),
        flex_pin!(p, PIN_14),
        flex_pin!(p, PIN_15),
        // GP16..GP21 belong to the PWM slices
        None,
        None,
        None,
        None,
        None,
        None,
        flex_pin!(p, PIN_22),
        None,
        None,
        flex_pin!(p, PIN_25),
    ];

    let (gp16, gp17) = Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_16, p.PIN_17, Config::default()).split();
    let (gp18, gp19) = Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_18, p.PIN_19, Config::default()).split();
    let (gp20, gp21) = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_20, p.PIN_21, Config::default()).split();

    let mut pwm: [Option<PwmOutput<'static>>; NATIVE_PINS] = core::array::from_fn(|_| None);
    pwm[16] = gp16;
    pwm[17] = gp17;
    pwm[18] = gp18;
    pwm[19] = gp19;
    pwm[20] = gp20;
    pwm[21] = gp21;

    let analog = AnalogPins {
        adc: p.ADC,
        gp26: p.PIN_26,
        gp27: p.PIN_27,
        gp28: p.PIN_28,
    };
    let remaining = RemainingPeripherals {
        usb: p.USB,
        uart0: p.UART0,
        uart1: p.UART1,
        pio0: p.PIO0,
        pio1: p.PIO1,
        flash: p.FLASH,
        gp23: p.PIN_23,
        gp24: p.PIN_24,
        gp29: p.PIN_29,
    };
    (PicoPins::new(gpio, pwm), analog, remaining)
}
