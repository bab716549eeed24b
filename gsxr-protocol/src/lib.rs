//! ECU Temperature Frame Protocol
//!
//! This crate defines the frame the dash expects from the ECU on its
//! one-wire serial line. Only the coolant temperature field is driven;
//! the remaining payload bytes stay zero.
//!
//! # Protocol Overview
//!
//! Every frame is exactly eight bytes, sent without a start marker:
//! ```text
//! ┌──────────┬──────────┬──────────────────┬──────────┐
//! │ TEMP_HI  │ TEMP_LO  │ RESERVED         │ CHECKSUM │
//! │ 1B       │ 1B       │ 5B (always zero) │ 1B       │
//! └──────────┴──────────┴──────────────────┴──────────┘
//! ```
//!
//! The temperature is a 10-bit value: the top eight bits in `TEMP_HI`, the
//! bottom two bits in the top of `TEMP_LO`. The checksum makes the sum of
//! all eight bytes zero modulo 256. Frames are separated by idle time on
//! the line, which is the only synchronisation a receiver gets.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod parser;

pub use frame::{
    checksum, decode_temperature, EcuFrame, FrameError, CHECKSUM_INDEX, FRAME_LEN,
    TEMPERATURE_MAX,
};
pub use parser::FrameParser;
