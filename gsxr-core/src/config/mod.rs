//! Configuration types
//!
//! Board-agnostic configuration structures. All values are fixed at build
//! time; the defaults are what the dash expects from a stock ECU.

pub mod link;
pub mod sensor;

pub use link::*;
pub use sensor::*;
