//! RP2040-specific HAL for the dash temperature emulator
//!
//! This crate provides RP2040 implementations of the shared `gsxr-hal`
//! traits over the blocking `embassy-rp` drivers, plus pin checks:
//!
//! - GPIO output wrapper (display bus)
//! - UART transmit wrapper and pin-to-peripheral mapping
//! - ADC channel wrapper and pin-to-channel mapping

#![no_std]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export shared traits from gsxr-hal for convenience
pub use gsxr_hal::{AnalogInput, OutputPin, UartConfig, UartTx};
