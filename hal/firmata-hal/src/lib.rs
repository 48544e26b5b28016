//! Firmata native pin primitives
//!
//! This crate defines the single-pin services that every board must provide
//! before the Firmata board layer (`firmata-boards`) can map protocol pins
//! onto it. All traits are addressed by *native* index, i.e. the number the
//! board's own I/O functions use, never by Firmata protocol pin.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Firmata protocol layer (external)      │
//! └─────────────────────────────────────────┘
//!                     │ protocol pins / ports
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  firmata-boards (classifier, ports)     │
//! └─────────────────────────────────────────┘
//!                     │ native indices
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  firmata-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ firmata-hal-  │       │  embedded-hal │
//! │    rp2040     │       │  pins (any)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::DigitalPins`] - Digital read/write by native index
//! - [`analog::AnalogInputs`], [`analog::PwmOutputs`] - Analog input and PWM output
//! - [`registers::PortRegisters`] - Raw 8-bit port registers for fast paths

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod gpio;
pub mod registers;

// Re-export key traits at crate root for convenience
pub use analog::{AnalogInputs, PwmArray, PwmOutputs};
pub use gpio::{DigitalPins, PinArray};
pub use registers::PortRegisters;
