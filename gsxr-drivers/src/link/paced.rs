//! Paced ECU frame transmitter
//!
//! The dash samples the line with generous timing; a frame pushed out
//! back-to-back at 7800 baud is read as garbage. Each byte is flushed and
//! followed by a fixed gap, the checksum byte by the longer frame gap.

use embedded_hal::delay::DelayNs;
use gsxr_core::config::LinkTiming;
use gsxr_core::traits::FrameTransmitter;
use gsxr_hal::UartTx;
use gsxr_protocol::{CHECKSUM_INDEX, FRAME_LEN};

/// Transmitter that paces frames with blocking delays
pub struct PacedTransmitter<TX, D> {
    tx: TX,
    delay: D,
    faults: u32,
}

impl<TX: UartTx, D: DelayNs> PacedTransmitter<TX, D> {
    /// Create a transmitter on an already configured UART
    pub fn new(tx: TX, delay: D) -> Self {
        Self {
            tx,
            delay,
            faults: 0,
        }
    }

    /// Number of bytes that failed to send
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    /// Write and drain one byte
    fn put(&mut self, byte: u8) {
        let result = self.tx.write_byte(byte).and_then(|_| self.tx.flush());
        if result.is_err() {
            self.faults = self.faults.wrapping_add(1);
        }
    }
}

impl<TX: UartTx, D: DelayNs> FrameTransmitter for PacedTransmitter<TX, D> {
    fn send(&mut self, frame: &[u8; FRAME_LEN], timing: &LinkTiming) {
        for &byte in &frame[..CHECKSUM_INDEX] {
            self.put(byte);
            self.delay.delay_ms(timing.byte_delay_ms);
        }
        self.put(frame[CHECKSUM_INDEX]);

        self.delay.delay_ms(timing.frame_delay_ms);
    }
}
