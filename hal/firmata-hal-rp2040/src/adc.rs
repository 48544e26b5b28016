//! ADC inputs on GP26..GP28
//!
//! Channel `n` is GP(26 + n), matching the Pico profile's analog numbering.

use embassy_rp::adc::{Adc, Blocking, Channel, Config};
use embassy_rp::gpio::Pull;
use firmata_hal::AnalogInputs;

use crate::pins::AnalogPins;

/// Number of header ADC channels
pub const ADC_CHANNELS: usize = 3;

/// Blocking ADC reader for the three header inputs
pub struct PicoAdc {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; ADC_CHANNELS],
}

impl PicoAdc {
    pub fn new(pins: AnalogPins) -> Self {
        Self {
            adc: Adc::new_blocking(pins.adc, Config::default()),
            channels: [
                Channel::new_pin(pins.gp26, Pull::None),
                Channel::new_pin(pins.gp27, Pull::None),
                Channel::new_pin(pins.gp28, Pull::None),
            ],
        }
    }
}

impl AnalogInputs for PicoAdc {
    const RESOLUTION_BITS: u8 = 12;

    fn analog_read(&mut self, channel: u8) -> Option<u16> {
        let ch = self.channels.get_mut(usize::from(channel))?;
        match self.adc.blocking_read(ch) {
            Ok(value) => Some(value),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC read failed on channel {}", channel);
                None
            }
        }
    }
}
