//! Serial diagnostics console
//!
//! Writes one text line per control cycle to a spare UART so the encoded
//! frame can be watched on the bench with any terminal.

use core::fmt::Write;

use gsxr_core::control::CycleReport;
use gsxr_core::traits::DiagnosticSink;
use gsxr_hal::UartTx;
use heapless::String;

/// Longest line the console will emit
pub const MAX_LINE_LEN: usize = 72;

/// Line printed once at boot
pub const BANNER: &str = "Starting";

/// Diagnostics sink on a UART
pub struct SerialConsole<TX> {
    tx: TX,
    faults: u32,
}

impl<TX: UartTx> SerialConsole<TX> {
    /// Create a console on an already configured UART
    pub fn new(tx: TX) -> Self {
        Self { tx, faults: 0 }
    }

    /// Print the boot banner
    pub fn banner(&mut self) {
        self.write_line(BANNER);
    }

    /// Number of lines that failed to send
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    fn write_line(&mut self, line: &str) {
        let result = self
            .tx
            .write_blocking(line.as_bytes())
            .and_then(|_| self.tx.write_blocking(b"\n"));
        if result.is_err() {
            self.faults = self.faults.wrapping_add(1);
        }
    }
}

/// Render a report as a console line
///
/// Output that does not fit [`MAX_LINE_LEN`] is cut short.
pub fn format_report(report: &CycleReport) -> String<MAX_LINE_LEN> {
    let mut line = String::new();
    // Overflow only truncates; the line is for humans
    let _ = write!(line, "{}", report);
    line
}

impl<TX: UartTx> DiagnosticSink for SerialConsole<TX> {
    fn report(&mut self, report: &CycleReport) {
        let line = format_report(report);
        self.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsxr_protocol::EcuFrame;
    use heapless::Vec;

    #[derive(Default)]
    struct CaptureUart {
        out: Vec<u8, 256>,
        fail: bool,
    }

    impl UartTx for CaptureUart {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.out.extend_from_slice(data).map_err(|_| ())
        }

        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    fn report(cycle: u32, temperature: u16) -> CycleReport {
        let mut frame = EcuFrame::new();
        frame.encode(temperature);
        frame.update_checksum();
        CycleReport::new(cycle, temperature, &frame)
    }

    #[test]
    fn test_banner() {
        let mut console = SerialConsole::new(CaptureUart::default());
        console.banner();
        assert_eq!(console.tx.out.as_slice(), b"Starting\n");
    }

    #[test]
    fn test_report_line() {
        let mut console = SerialConsole::new(CaptureUart::default());
        console.report(&report(7, 512));
        assert_eq!(
            console.tx.out.as_slice(),
            b"#7 temp = 0512 raw = 0512 | 80 00 00 00 00 00 00 80\n"
        );
    }

    #[test]
    fn test_widest_report_fits() {
        let mut frame = EcuFrame::new();
        frame.encode(u16::MAX);
        frame.update_checksum();
        let line = format_report(&CycleReport::new(u32::MAX, u16::MAX, &frame));
        assert!(line.ends_with("ff c0 00 00 00 00 00 41"));
    }

    #[test]
    fn test_write_failure_is_counted() {
        let mut console = SerialConsole::new(CaptureUart {
            fail: true,
            ..Default::default()
        });
        console.report(&report(1, 0));
        console.banner();
        assert_eq!(console.fault_count(), 2);
    }
}
