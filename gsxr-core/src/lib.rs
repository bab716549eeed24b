//! Board-agnostic core logic for the dash temperature emulator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Adapter traits for the sensor, ECU link, display and diagnostics
//! - Link and sensor configuration types
//! - The control loop that ties them together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod traits;
