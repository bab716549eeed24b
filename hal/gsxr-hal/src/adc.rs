//! Analog input abstractions
//!
//! A single ADC channel, already bound to its pin.

/// Analog input channel
///
/// Implementations perform one blocking conversion per call.
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Converter resolution in bits (10 on AVR, 12 on RP2040)
    fn resolution_bits(&self) -> u8;

    /// Read one raw conversion
    ///
    /// The result is right-aligned: `0..(1 << resolution_bits())`.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;

    /// Full-scale reading for this converter
    fn full_scale(&self) -> u16 {
        ((1u32 << self.resolution_bits()) - 1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedAdc {
        bits: u8,
        value: u16,
    }

    impl AnalogInput for FixedAdc {
        type Error = ();

        fn resolution_bits(&self) -> u8 {
            self.bits
        }

        fn read_raw(&mut self) -> Result<u16, ()> {
            Ok(self.value)
        }
    }

    #[test]
    fn test_full_scale() {
        let adc = FixedAdc { bits: 10, value: 0 };
        assert_eq!(adc.full_scale(), 1023);

        let adc = FixedAdc { bits: 12, value: 0 };
        assert_eq!(adc.full_scale(), 4095);
    }

    #[test]
    fn test_read_raw() {
        let mut adc = FixedAdc { bits: 12, value: 2048 };
        assert_eq!(adc.read_raw(), Ok(2048));
    }
}
