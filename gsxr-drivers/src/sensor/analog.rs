//! Analog temperature sender
//!
//! The stock sender is a thermistor on a divider; the dash does its own
//! ADC-to-degrees lookup, so all we forward is the raw reading rescaled to
//! the 10-bit field of the ECU frame.

use gsxr_core::config::SensorConfig;
use gsxr_core::traits::SensorReader;
use gsxr_hal::AnalogInput;

/// Temperature sender on one ADC channel
pub struct AnalogSensor<ADC> {
    adc: ADC,
    config: SensorConfig,
    /// Last good reading in native units
    last: u16,
    faults: u32,
}

impl<ADC: AnalogInput> AnalogSensor<ADC> {
    /// Create a sensor, taking the scaling from the converter's resolution
    pub fn new(adc: ADC) -> Self {
        let config = SensorConfig::new(adc.resolution_bits());
        Self::with_config(adc, config)
    }

    /// Create a sensor with explicit scaling
    pub fn with_config(adc: ADC, config: SensorConfig) -> Self {
        Self {
            adc,
            config,
            last: 0,
            faults: 0,
        }
    }

    /// Number of failed conversions so far
    pub fn fault_count(&self) -> u32 {
        self.faults
    }

    /// Scaling in use
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Underlying converter
    pub fn adc(&self) -> &ADC {
        &self.adc
    }
}

impl<ADC: AnalogInput> SensorReader for AnalogSensor<ADC> {
    /// Returns the previous reading if the conversion fails
    fn read(&mut self) -> u16 {
        match self.adc.read_raw() {
            Ok(raw) => {
                self.last = self.config.to_native(raw);
            }
            Err(_) => {
                self.faults = self.faults.wrapping_add(1);
            }
        }
        self.last
    }
}

/// ADC returning a scripted sequence for testing
#[cfg(test)]
pub(crate) struct ScriptedAdc {
    pub bits: u8,
    pub samples: heapless::Vec<Result<u16, ()>, 8>,
    pub reads: usize,
}

#[cfg(test)]
impl ScriptedAdc {
    pub fn new(bits: u8, samples: &[Result<u16, ()>]) -> Self {
        Self {
            bits,
            samples: heapless::Vec::from_slice(samples).unwrap(),
            reads: 0,
        }
    }
}

#[cfg(test)]
impl AnalogInput for ScriptedAdc {
    type Error = ();

    fn resolution_bits(&self) -> u8 {
        self.bits
    }

    fn read_raw(&mut self) -> Result<u16, ()> {
        let idx = self.reads.min(self.samples.len() - 1);
        self.reads += 1;
        self.samples[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_bit_adc_passes_through() {
        let mut sensor = AnalogSensor::new(ScriptedAdc::new(10, &[Ok(512), Ok(1023)]));
        assert_eq!(sensor.read(), 512);
        assert_eq!(sensor.read(), 1023);
        assert_eq!(sensor.fault_count(), 0);
    }

    #[test]
    fn test_twelve_bit_adc_is_rescaled() {
        let mut sensor = AnalogSensor::new(ScriptedAdc::new(12, &[Ok(4095), Ok(2050)]));
        assert_eq!(sensor.config().adc_bits, 12);
        assert_eq!(sensor.read(), 1023);
        assert_eq!(sensor.read(), 512);
    }

    #[test]
    fn test_failed_conversion_holds_last_reading() {
        let mut sensor = AnalogSensor::new(ScriptedAdc::new(10, &[Ok(700), Err(()), Ok(10)]));
        assert_eq!(sensor.read(), 700);
        assert_eq!(sensor.read(), 700);
        assert_eq!(sensor.fault_count(), 1);
        assert_eq!(sensor.read(), 10);
    }

    #[test]
    fn test_failure_before_first_reading_yields_zero() {
        let mut sensor = AnalogSensor::new(ScriptedAdc::new(10, &[Err(())]));
        assert_eq!(sensor.read(), 0);
        assert_eq!(sensor.fault_count(), 1);
    }

    #[test]
    fn test_explicit_config_overrides_resolution() {
        let adc = ScriptedAdc::new(12, &[Ok(1023)]);
        let mut sensor = AnalogSensor::with_config(adc, SensorConfig::new(10));
        assert_eq!(sensor.read(), 1023);
    }
}
