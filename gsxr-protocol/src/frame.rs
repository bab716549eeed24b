//! Frame encoding and decoding for the ECU temperature link.
//!
//! Frame format:
//! - TEMP_HI (1 byte): `temperature >> 2`
//! - TEMP_LO (1 byte): `(temperature << 6) & 0xFF`, low six bits always zero
//! - RESERVED (5 bytes): zero, carried over unchanged
//! - CHECKSUM (1 byte): `256 - (sum of the first seven bytes)`, modulo 256
//!
//! Encoding never fails. A temperature wider than ten bits loses its high
//! bits when packed; dashes in the field are calibrated against exactly
//! that truncation, so it is not clamped.

/// Number of bytes in every frame
pub const FRAME_LEN: usize = 8;

/// Index of the checksum byte
pub const CHECKSUM_INDEX: usize = FRAME_LEN - 1;

/// Largest temperature that survives encoding unchanged
pub const TEMPERATURE_MAX: u16 = 0x3FF;

/// Errors that can occur when accepting a received frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Checksum byte does not cancel the payload sum
    InvalidChecksum,
    /// Fewer than eight bytes available
    Incomplete,
    /// More than eight bytes supplied for a single frame
    InvalidFrame,
}

/// Compute the checksum for the payload bytes of a frame
///
/// Sums with 8-bit wraparound after every addition, then negates modulo 256.
/// Only the first seven bytes are considered; a full frame may be passed.
pub fn checksum(bytes: &[u8]) -> u8 {
    let sum = bytes
        .iter()
        .take(CHECKSUM_INDEX)
        .fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    0u8.wrapping_sub(sum)
}

/// Recover the 10-bit temperature from the two encoded bytes
pub fn decode_temperature(high: u8, low: u8) -> u16 {
    ((high as u16) << 2) | ((low as u16) >> 6)
}

/// One 8-byte ECU frame
///
/// The frame is allocated once and mutated in place each cycle. After
/// [`encode`](Self::encode) the caller must run
/// [`update_checksum`](Self::update_checksum) before the bytes go on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EcuFrame {
    bytes: [u8; FRAME_LEN],
}

impl Default for EcuFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl EcuFrame {
    /// A zeroed frame
    ///
    /// The checksum of seven zero bytes is zero, so this frame is valid as is.
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_LEN],
        }
    }

    /// Accept a received frame
    ///
    /// Fails with [`FrameError::InvalidChecksum`] if the eight bytes do not
    /// sum to zero modulo 256.
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Result<Self, FrameError> {
        let frame = Self { bytes };
        if !frame.is_valid() {
            return Err(FrameError::InvalidChecksum);
        }
        Ok(frame)
    }

    /// Accept a received frame from a slice of exactly eight bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.len() < FRAME_LEN {
            return Err(FrameError::Incomplete);
        }
        let bytes: [u8; FRAME_LEN] = bytes.try_into().map_err(|_| FrameError::InvalidFrame)?;
        Self::from_bytes(bytes)
    }

    /// Pack a temperature into bytes 0 and 1
    ///
    /// Only the low ten bits of `temperature` survive. Leaves the checksum
    /// stale.
    pub fn encode(&mut self, temperature: u16) {
        self.bytes[0] = (temperature >> 2) as u8;
        self.bytes[1] = (temperature << 6) as u8;
    }

    /// Recompute byte 7 from bytes 0..=6
    pub fn update_checksum(&mut self) {
        self.bytes[CHECKSUM_INDEX] = checksum(&self.bytes);
    }

    /// Decoded temperature carried by bytes 0 and 1
    pub fn temperature(&self) -> u16 {
        decode_temperature(self.bytes[0], self.bytes[1])
    }

    /// Reserved payload bytes 2..=6
    pub fn reserved(&self) -> &[u8] {
        &self.bytes[2..CHECKSUM_INDEX]
    }

    /// Current checksum byte
    pub fn checksum_byte(&self) -> u8 {
        self.bytes[CHECKSUM_INDEX]
    }

    /// Check that the checksum byte matches the payload
    pub fn is_valid(&self) -> bool {
        self.bytes
            .iter()
            .fold(0u8, |acc, &byte| acc.wrapping_add(byte))
            == 0
    }

    /// Raw bytes in wire order
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }
}

impl From<EcuFrame> for [u8; FRAME_LEN] {
    fn from(frame: EcuFrame) -> Self {
        frame.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(temperature: u16) -> EcuFrame {
        let mut frame = EcuFrame::new();
        frame.encode(temperature);
        frame.update_checksum();
        frame
    }

    #[test]
    fn test_new_frame_is_zero_and_valid() {
        let frame = EcuFrame::new();
        assert_eq!(frame.as_bytes(), &[0u8; FRAME_LEN]);
        assert!(frame.is_valid());
    }

    #[test]
    fn test_encode_zero() {
        let frame = encoded(0);
        assert_eq!(frame.as_bytes(), &[0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(frame.checksum_byte(), 0);
    }

    #[test]
    fn test_encode_512() {
        let frame = encoded(512);
        assert_eq!(
            frame.as_bytes(),
            &[0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80]
        );
    }

    #[test]
    fn test_encode_1023() {
        let frame = encoded(1023);
        assert_eq!(
            frame.as_bytes(),
            &[0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 65]
        );
        assert_eq!(frame.temperature(), 1023);
    }

    #[test]
    fn test_encode_truncates_above_ten_bits() {
        // 1024 = 0b100_0000_0000: bit 10 falls off the top of byte 0
        let frame = encoded(1024);
        assert_eq!(frame.as_bytes()[0], 0x00);
        assert_eq!(frame.as_bytes()[1], 0x00);
        assert_eq!(frame.temperature(), 0);

        // 1536 keeps 512
        let frame = encoded(1536);
        assert_eq!(frame.as_bytes()[0], 0x80);
        assert_eq!(frame.temperature(), 512);
    }

    #[test]
    fn test_encode_leaves_checksum_stale() {
        let mut frame = EcuFrame::new();
        frame.encode(512);
        assert_eq!(frame.checksum_byte(), 0);
        assert!(!frame.is_valid());

        frame.update_checksum();
        assert!(frame.is_valid());
    }

    #[test]
    fn test_checksum_wraps_per_addition() {
        // 0xFF * 7 = 1785 = 6 * 256 + 249, so the sum wraps to 249
        let bytes = [0xFF; 7];
        assert_eq!(checksum(&bytes), 7);
    }

    #[test]
    fn test_checksum_ignores_existing_checksum_byte() {
        let bytes = [0x80, 0, 0, 0, 0, 0, 0, 0x55];
        assert_eq!(checksum(&bytes), 0x80);
    }

    #[test]
    fn test_reserved_bytes_stay_zero() {
        let frame = encoded(777);
        assert_eq!(frame.reserved(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_from_bytes_rejects_bad_checksum() {
        let mut bytes: [u8; FRAME_LEN] = encoded(300).into();
        bytes[CHECKSUM_INDEX] ^= 0xFF;
        assert_eq!(EcuFrame::from_bytes(bytes), Err(FrameError::InvalidChecksum));
    }

    #[test]
    fn test_from_slice_length_checks() {
        assert_eq!(EcuFrame::from_slice(&[0; 7]), Err(FrameError::Incomplete));
        assert_eq!(EcuFrame::from_slice(&[0; 9]), Err(FrameError::InvalidFrame));
        assert_eq!(EcuFrame::from_slice(&[0; 8]), Ok(EcuFrame::new()));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(temperature in 0u16..=TEMPERATURE_MAX) {
            let frame = encoded(temperature);
            prop_assert_eq!(frame.temperature(), temperature);
        }

        #[test]
        fn prop_encode_matches_shift_mask(temperature in any::<u16>()) {
            let frame = encoded(temperature);
            prop_assert_eq!(frame.as_bytes()[0], ((temperature >> 2) & 0xFF) as u8);
            prop_assert_eq!(frame.as_bytes()[1], ((temperature as u32) << 6 & 0xFF) as u8);
            prop_assert_eq!(frame.as_bytes()[1] & 0x3F, 0);
            prop_assert_eq!(frame.temperature(), temperature % 1024);
        }

        #[test]
        fn prop_checksum_cancels_payload(payload in any::<[u8; 7]>()) {
            let mut bytes = [0u8; FRAME_LEN];
            bytes[..CHECKSUM_INDEX].copy_from_slice(&payload);
            bytes[CHECKSUM_INDEX] = checksum(&bytes);

            let sum: u32 = bytes.iter().map(|&b| b as u32).sum();
            prop_assert_eq!(sum % 256, 0);
            prop_assert!(EcuFrame::from_bytes(bytes).is_ok());
        }

        #[test]
        fn prop_checksum_is_idempotent(temperature in any::<u16>()) {
            let mut frame = encoded(temperature);
            let first = frame.checksum_byte();
            frame.update_checksum();
            prop_assert_eq!(frame.checksum_byte(), first);
        }
    }
}
