//! Temperature sender implementations

pub mod analog;

pub use analog::AnalogSensor;
