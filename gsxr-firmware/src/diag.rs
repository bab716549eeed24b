//! Console that also logs over RTT

use defmt::{info, warn};
use gsxr_core::control::CycleReport;
use gsxr_core::traits::DiagnosticSink;
use gsxr_drivers::diag::SerialConsole;
use gsxr_hal_rp2040::UartTx;

/// Mirrors every report to defmt before writing it to the UART console
pub struct LoggedConsole<TX> {
    console: SerialConsole<TX>,
}

impl<TX: UartTx> LoggedConsole<TX> {
    pub fn new(console: SerialConsole<TX>) -> Self {
        Self { console }
    }

    /// Print the boot banner on both outputs
    pub fn banner(&mut self) {
        info!("Starting");
        self.console.banner();
    }

    /// Lines the UART failed to send
    pub fn fault_count(&self) -> u32 {
        self.console.fault_count()
    }
}

impl<TX: UartTx> DiagnosticSink for LoggedConsole<TX> {
    fn report(&mut self, report: &CycleReport) {
        if report.truncated() {
            warn!(
                "Reading {} exceeds 10 bits, sending {}",
                report.raw, report.temperature
            );
        }
        info!(
            "#{} temp={} raw={} frame={:02x}",
            report.cycle, report.temperature, report.raw, report.frame
        );
        self.console.report(report);
    }
}
