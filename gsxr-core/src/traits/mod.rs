//! Adapter traits
//!
//! These traits define the interface between the control loop and the
//! peripherals it drives. They are infallible at this layer:
//! a concrete adapter absorbs hardware errors and keeps the loop running.

pub mod diagnostics;
pub mod display;
pub mod sensor;
pub mod transmitter;

pub use diagnostics::{DiagnosticSink, NoDiagnostics};
pub use display::DisplaySink;
pub use sensor::SensorReader;
pub use transmitter::FrameTransmitter;
