//! Control loop
//!
//! One task, one steady state: transmit the current frame, read the
//! sender, re-encode, update the display, report. Repeats forever.

pub mod report;
pub mod runner;

pub use report::CycleReport;
pub use runner::ControlLoop;
