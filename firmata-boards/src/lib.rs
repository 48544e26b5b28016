//! Board hardware abstraction for Firmata firmware
//!
//! The Firmata protocol talks about pins by a single board-wide number. This
//! crate answers what the protocol layer needs to know about those numbers
//! on the board the firmware is built for:
//!
//! - which features a pin supports ([`PinMap`] predicates, [`Capabilities`])
//! - which index the chip's own I/O primitives use for it (`to_native_*`)
//! - how to read and write eight pins at once ([`port`])
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  Firmata protocol layer      │
//! └──────────────┬───────────────┘
//!                │ Firmata pin numbers
//! ┌──────────────▼───────────────┐
//! │  firmata-boards              │
//! │  PinMap · PortStrategy       │
//! │  Board · blink_version       │
//! └──────────────┬───────────────┘
//!                │ native indices
//! ┌──────────────▼───────────────┐
//! │  firmata-hal traits          │
//! │  (implemented per chip)      │
//! └──────────────────────────────┘
//! ```
//!
//! Exactly one board identity feature picks [`ActiveBoard`]; boards that are
//! only known at run time can be described as a [`BoardConfig`] and loaded
//! as a [`TableBoard`]. Parsing descriptions from TOML needs the `toml`
//! feature and an allocator, so it is off by default.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod blink;
pub mod board;
pub mod capability;
pub mod config;
pub mod io;
pub mod port;

pub use blink::blink_version;
pub use board::{
    Atmega328p, Atmega328pDip, AtmegaX8, Mega, Pico, PinMap, PinTable, TableBoard, MAX_ANALOG_PINS,
    MAX_PINS,
};
pub use capability::{Capabilities, Capability};
pub use config::{BoardConfig, ConfigError, PinRange};
pub use io::{Board, PwmRoute, ViaDigital};
pub use port::{digital_mask, AvrRegisters, PinByPin, PortStrategy};

#[cfg(any(
    feature = "atmega328p",
    feature = "atmega328p-dip",
    feature = "atmega2560",
    feature = "rp2040-pico"
))]
pub use board::active::{
    ActiveBoard, ACTIVE_BOARD, MAX_SERVOS, TOTAL_ANALOG_PINS, TOTAL_PINS, TOTAL_PORTS, VERSION_BLINK_PIN,
};
