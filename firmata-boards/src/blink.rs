//! Firmware version blink
//!
//! At start-up Firmata blinks its major version, pauses, then blinks its
//! minor version on the board LED so the firmware can be identified without
//! a host.

use embedded_hal_async::delay::DelayNs;
use firmata_hal::DigitalPins;

use crate::board::PinMap;

/// LED on-time of one strobe
pub const STROBE_ON_MS: u32 = 40;
/// LED off-time before each strobe
pub const STROBE_OFF_MS: u32 = 210;
/// Pause between major and minor version
pub const VERSION_GAP_MS: u32 = 250;
/// Pause after the minor version
pub const TRAILING_GAP_MS: u32 = 125;

/// Blink `major` then `minor` on the version LED
///
/// Returns `false` without touching any pin when the board has no usable
/// LED.
pub async fn blink_version<M, D, T>(map: &M, pins: &mut D, delay: &mut T, major: u8, minor: u8) -> bool
where
    M: PinMap + ?Sized,
    D: DigitalPins + ?Sized,
    T: DelayNs,
{
    if !map.has_version_blink_pin() {
        return false;
    }
    let led = map.version_blink_pin();

    strobe(pins, delay, led, major).await;
    delay.delay_ms(VERSION_GAP_MS).await;
    strobe(pins, delay, led, minor).await;
    delay.delay_ms(TRAILING_GAP_MS).await;
    true
}

/// Flash a native pin `count` times
pub async fn strobe<D, T>(pins: &mut D, delay: &mut T, native: u8, count: u8)
where
    D: DigitalPins + ?Sized,
    T: DelayNs,
{
    for _ in 0..count {
        delay.delay_ms(STROBE_OFF_MS).await;
        pins.digital_write(native, true);
        delay.delay_ms(STROBE_ON_MS).await;
        pins.digital_write(native, false);
    }
}
