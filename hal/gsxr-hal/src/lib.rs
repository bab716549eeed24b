//! GSX-R Dash Hardware Abstraction Layer
//!
//! This crate defines the few hardware traits the dash emulator needs, so the
//! drivers and the control loop can be exercised on the host and ported to
//! other chips without touching protocol code.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  gsxr-firmware / gsxr-drivers           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  gsxr-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ gsxr-hal-     │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (display bit-bang lines)
//! - [`uart::UartTx`] - Serial transmit (ECU link, diagnostics console)
//! - [`adc::AnalogInput`] - Single analog channel (temperature sender)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::OutputPin;
pub use uart::{UartConfig, UartTx};
