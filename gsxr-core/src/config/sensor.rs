//! Temperature sender settings

/// Bit width of the temperature value carried in the ECU frame
pub const NATIVE_BITS: u8 = 10;

/// Analog sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Resolution of the ADC feeding the sensor (bits)
    pub adc_bits: u8,
}

impl SensorConfig {
    /// Create a sensor configuration for an ADC of the given resolution
    pub const fn new(adc_bits: u8) -> Self {
        Self { adc_bits }
    }

    /// Scale a raw conversion to the 10-bit native range
    ///
    /// Wider converters drop their low bits, narrower ones are shifted up.
    /// The input is not masked, so an out-of-range raw value scales to an
    /// out-of-range reading exactly as the hardware would deliver it.
    pub const fn to_native(&self, raw: u16) -> u16 {
        if self.adc_bits >= NATIVE_BITS {
            raw >> (self.adc_bits - NATIVE_BITS)
        } else {
            raw << (NATIVE_BITS - self.adc_bits)
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new(NATIVE_BITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_resolution_passes_through() {
        let config = SensorConfig::default();
        assert_eq!(config.to_native(0), 0);
        assert_eq!(config.to_native(1023), 1023);
    }

    #[test]
    fn test_twelve_bit_adc_scales_down() {
        let config = SensorConfig::new(12);
        assert_eq!(config.to_native(4095), 1023);
        assert_eq!(config.to_native(2048), 512);
        assert_eq!(config.to_native(3), 0);
    }

    #[test]
    fn test_eight_bit_adc_scales_up() {
        let config = SensorConfig::new(8);
        assert_eq!(config.to_native(255), 1020);
        assert_eq!(config.to_native(128), 512);
    }
}
