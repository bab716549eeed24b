//! Receive-side frame assembly
//!
//! ECU frames have no start byte, so a listener relies on the idle gap
//! between frames to find the boundary. Call [`FrameParser::gap`] whenever
//! the line has been quiet for longer than the inter-byte delay.

use heapless::Vec;

use crate::frame::{EcuFrame, FrameError, FRAME_LEN};

/// State machine for assembling incoming frames
#[derive(Debug, Clone, Default)]
pub struct FrameParser {
    buffer: Vec<u8, FRAME_LEN>,
}

impl FrameParser {
    /// Create a new frame parser
    pub const fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of bytes collected toward the current frame
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Signal an inter-frame idle gap
    ///
    /// Discards a partial frame. Returns [`FrameError::Incomplete`] if
    /// bytes were dropped, so the caller can count line errors.
    pub fn gap(&mut self) -> Result<(), FrameError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.reset();
        Err(FrameError::Incomplete)
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(frame))` when the eighth byte completes a valid
    /// frame, `Ok(None)` when more bytes are needed, or `Err` if the
    /// completed frame fails its checksum. The parser is ready for the next
    /// frame in every case except `Ok(None)`.
    pub fn feed(&mut self, byte: u8) -> Result<Option<EcuFrame>, FrameError> {
        // Cannot fail: the buffer is drained as soon as it fills
        let _ = self.buffer.push(byte);
        if !self.buffer.is_full() {
            return Ok(None);
        }

        let result = EcuFrame::from_slice(&self.buffer);
        self.reset();
        result.map(Some)
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<EcuFrame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
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
    fn test_parser_roundtrip() {
        let original = frame_for(640);

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(original.as_bytes()).unwrap().unwrap();

        assert_eq!(parsed, original);
        assert_eq!(parsed.temperature(), 640);
        assert_eq!(parser.pending(), 0);
    }

    #[test]
    fn test_parser_needs_eight_bytes() {
        let bytes = frame_for(100);
        let mut parser = FrameParser::new();

        for &byte in &bytes.as_bytes()[..7] {
            assert_eq!(parser.feed(byte), Ok(None));
        }
        assert_eq!(parser.pending(), 7);
        assert_eq!(parser.feed(bytes.as_bytes()[7]), Ok(Some(bytes)));
    }

    #[test]
    fn test_parser_invalid_checksum() {
        let mut encoded: [u8; FRAME_LEN] = frame_for(512).into();
        encoded[7] ^= 0xFF;

        let mut parser = FrameParser::new();
        let result = parser.feed_bytes(&encoded);
        assert_eq!(result, Err(FrameError::InvalidChecksum));
        assert_eq!(parser.pending(), 0);
    }

    #[test]
    fn test_gap_resyncs_after_partial_frame() {
        let frame = frame_for(1000);

        let mut parser = FrameParser::new();
        // Tail end of a frame we joined half way through
        assert_eq!(parser.feed_bytes(&[0x00, 0x00, 0x42]), Ok(None));
        assert_eq!(parser.gap(), Err(FrameError::Incomplete));

        let parsed = parser.feed_bytes(frame.as_bytes()).unwrap().unwrap();
        assert_eq!(parsed.temperature(), 1000);
    }

    #[test]
    fn test_gap_on_empty_parser_is_ok() {
        let mut parser = FrameParser::new();
        assert_eq!(parser.gap(), Ok(()));
    }

    #[test]
    fn test_feed_bytes_stops_after_first_frame() {
        let first = frame_for(1);
        let second = frame_for(2);

        let mut stream = Vec::<u8, 16>::new();
        stream.extend_from_slice(first.as_bytes()).unwrap();
        stream.extend_from_slice(second.as_bytes()).unwrap();

        let mut parser = FrameParser::new();
        let parsed = parser.feed_bytes(&stream).unwrap().unwrap();
        assert_eq!(parsed.temperature(), 1);
        assert_eq!(parser.pending(), 0);

        let parsed = parser.feed_bytes(&stream[FRAME_LEN..]).unwrap().unwrap();
        assert_eq!(parsed.temperature(), 2);
    }
}
