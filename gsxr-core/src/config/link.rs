//! ECU link and diagnostics console settings

/// Baud rate of the ECU data line
///
/// Not a standard rate. AVR soft-serial needs a custom divisor table entry
/// for it; the RP2040 fractional divider reaches it directly.
pub const ECU_BAUD: u32 = 7800;

/// Baud rate of the human-readable diagnostics console
pub const DIAG_BAUD: u32 = 115_200;

/// Delay after each of the first seven frame bytes (ms)
pub const BYTE_DELAY_MS: u32 = 10;

/// Idle time after a complete frame (ms)
pub const FRAME_DELAY_MS: u32 = 60;

/// Pacing of the ECU frame on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkTiming {
    /// Delay after each of bytes 0..=6 (ms)
    pub byte_delay_ms: u32,
    /// Delay after the checksum byte, before the next cycle (ms)
    pub frame_delay_ms: u32,
}

impl LinkTiming {
    /// Create link timing from explicit delays
    pub const fn new(byte_delay_ms: u32, frame_delay_ms: u32) -> Self {
        Self {
            byte_delay_ms,
            frame_delay_ms,
        }
    }

    /// Blocking time spent in delays for one frame (ms)
    ///
    /// Excludes time on the wire.
    pub const fn frame_period_ms(&self) -> u32 {
        7 * self.byte_delay_ms + self.frame_delay_ms
    }
}

impl Default for LinkTiming {
    fn default() -> Self {
        Self::new(BYTE_DELAY_MS, FRAME_DELAY_MS)
    }
}

/// Serial channel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// ECU data line baud rate
    pub ecu_baud: u32,
    /// Diagnostics console baud rate
    pub diag_baud: u32,
    /// Frame pacing
    pub timing: LinkTiming,
}

impl LinkConfig {
    /// Create a link configuration
    pub const fn new(ecu_baud: u32, diag_baud: u32, timing: LinkTiming) -> Self {
        Self {
            ecu_baud,
            diag_baud,
            timing,
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new(ECU_BAUD, DIAG_BAUD, LinkTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_ecu() {
        let config = LinkConfig::default();
        assert_eq!(config.ecu_baud, 7800);
        assert_eq!(config.diag_baud, 115_200);
        assert_eq!(config.timing.byte_delay_ms, 10);
        assert_eq!(config.timing.frame_delay_ms, 60);
    }

    #[test]
    fn test_frame_period() {
        assert_eq!(LinkTiming::default().frame_period_ms(), 130);
        assert_eq!(LinkTiming::new(0, 30).frame_period_ms(), 30);
    }
}
