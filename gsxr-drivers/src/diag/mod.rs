//! Diagnostics sinks

pub mod console;

pub use console::SerialConsole;
