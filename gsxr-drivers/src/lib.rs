//! Peripheral adapter implementations
//!
//! This crate provides concrete implementations of the adapter traits
//! defined in gsxr-core, built on the gsxr-hal hardware traits:
//!
//! - Analog temperature sender with ADC rescaling
//! - Paced ECU frame transmitter
//! - PT6961 four-digit LED display
//! - Serial diagnostics console

#![no_std]
#![deny(unsafe_code)]

pub mod diag;
pub mod display;
pub mod link;
pub mod sensor;
