//! The forever loop
//!
//! The frame on the wire always lags the sensor by one cycle: each cycle
//! transmits the frame encoded at the end of the previous one, and only
//! then samples and re-encodes. Dashes in the field were tuned against
//! this ordering, so it must not be "fixed".

use gsxr_protocol::EcuFrame;

use crate::config::LinkTiming;
use crate::control::CycleReport;
use crate::traits::{DiagnosticSink, DisplaySink, FrameTransmitter, SensorReader};

/// Owns the frame and every peripheral adapter
pub struct ControlLoop<S, T, D, R> {
    sensor: S,
    transmitter: T,
    display: D,
    diagnostics: R,
    timing: LinkTiming,
    frame: EcuFrame,
    /// Latest sensor reading
    current_temperature: u16,
    cycles: u32,
}

impl<S, T, D, R> ControlLoop<S, T, D, R>
where
    S: SensorReader,
    T: FrameTransmitter,
    D: DisplaySink,
    R: DiagnosticSink,
{
    /// Run the startup phase
    ///
    /// Zeroes the frame, computes its checksum and takes one reading. The
    /// startup reading is not encoded: the first frame on the wire is the
    /// zero frame.
    pub fn start(
        mut sensor: S,
        transmitter: T,
        display: D,
        diagnostics: R,
        timing: LinkTiming,
    ) -> Self {
        let mut frame = EcuFrame::new();
        frame.update_checksum();
        let current_temperature = sensor.read();

        Self {
            sensor,
            transmitter,
            display,
            diagnostics,
            timing,
            frame,
            current_temperature,
            cycles: 0,
        }
    }

    /// Run one steady-state cycle
    ///
    /// Transmit (including the inter-frame delay), read, encode, checksum,
    /// display, report.
    pub fn step(&mut self) -> CycleReport {
        self.transmitter.send(self.frame.as_bytes(), &self.timing);

        let raw = self.sensor.read();
        self.frame.encode(raw);
        self.frame.update_checksum();
        self.current_temperature = raw;

        self.display.show(self.frame.temperature());

        self.cycles = self.cycles.wrapping_add(1);
        let report = CycleReport::new(self.cycles, raw, &self.frame);
        self.diagnostics.report(&report);
        report
    }

    /// Cycle forever
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Frame that the next cycle will transmit
    pub fn frame(&self) -> &EcuFrame {
        &self.frame
    }

    /// Latest sensor reading
    pub fn current_temperature(&self) -> u16 {
        self.current_temperature
    }

    /// Completed cycles (wrapping)
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Frame pacing in use
    pub fn timing(&self) -> &LinkTiming {
        &self.timing
    }

    /// Sensor adapter
    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    /// ECU link adapter
    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    /// Display adapter
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Diagnostics sink
    pub fn diagnostics(&self) -> &R {
        &self.diagnostics
    }
}
