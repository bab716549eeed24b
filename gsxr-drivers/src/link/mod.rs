//! ECU link implementations

pub mod paced;

pub use paced::PacedTransmitter;
