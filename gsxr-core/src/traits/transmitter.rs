//! ECU link transmitter trait

use gsxr_protocol::FRAME_LEN;

use crate::config::LinkTiming;

/// Sends frames on the ECU data line
pub trait FrameTransmitter {
    /// Send one frame with the given pacing
    ///
    /// Implementations send bytes 0..=6 each followed by
    /// `timing.byte_delay_ms`, then the checksum byte, then block for
    /// `timing.frame_delay_ms` before returning.
    fn send(&mut self, frame: &[u8; FRAME_LEN], timing: &LinkTiming);
}

impl<T: FrameTransmitter + ?Sized> FrameTransmitter for &mut T {
    fn send(&mut self, frame: &[u8; FRAME_LEN], timing: &LinkTiming) {
        (**self).send(frame, timing)
    }
}
