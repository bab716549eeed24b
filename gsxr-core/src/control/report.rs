//! Per-cycle diagnostic report

use core::fmt;

use gsxr_protocol::{EcuFrame, FRAME_LEN};

/// What one control cycle did
///
/// Renders as a single console line:
/// ```text
/// #12 temp = 0512 raw = 0512 | 80 00 00 00 00 00 00 80
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Cycle number, starting at 1 and wrapping
    pub cycle: u32,
    /// Sensor reading taken this cycle
    pub raw: u16,
    /// Temperature as decoded back from the new frame
    pub temperature: u16,
    /// Frame bytes that will go out at the start of the next cycle
    pub frame: [u8; FRAME_LEN],
}

impl CycleReport {
    /// Build a report for a freshly encoded frame
    pub fn new(cycle: u32, raw: u16, frame: &EcuFrame) -> Self {
        Self {
            cycle,
            raw,
            temperature: frame.temperature(),
            frame: *frame.as_bytes(),
        }
    }

    /// True if the reading did not fit the 10-bit frame field
    pub fn truncated(&self) -> bool {
        self.raw != self.temperature
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} temp = {:04} raw = {:04} |",
            self.cycle, self.temperature, self.raw
        )?;
        for byte in &self.frame {
            write!(f, " {:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_for(temperature: u16) -> EcuFrame {
        let mut frame = EcuFrame::new();
        frame.encode(temperature);
        frame.update_checksum();
        frame
    }

    #[test]
    fn test_report_line() {
        let report = CycleReport::new(12, 512, &frame_for(512));
        assert_eq!(
            report.to_string(),
            "#12 temp = 0512 raw = 0512 | 80 00 00 00 00 00 00 80"
        );
    }

    #[test]
    fn test_report_line_lowercase_hex() {
        let report = CycleReport::new(1, 1023, &frame_for(1023));
        assert_eq!(
            report.to_string(),
            "#1 temp = 1023 raw = 1023 | ff c0 00 00 00 00 00 41"
        );
        assert!(!report.truncated());
    }

    #[test]
    fn test_truncated_reading_is_flagged() {
        let report = CycleReport::new(3, 1030, &frame_for(1030));
        assert_eq!(report.temperature, 6);
        assert!(report.truncated());
    }
}
