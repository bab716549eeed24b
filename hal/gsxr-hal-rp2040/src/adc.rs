//! ADC channel wrapper and pin mapping
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{self, Adc, Blocking, Channel};

/// ADC resolution on RP2040
pub const ADC_BITS: u8 = 12;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub const fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub const fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// Error from ADC conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion flagged as failed by the peripheral
    ConversionFailed,
}

impl From<adc::Error> for AdcError {
    fn from(_: adc::Error) -> Self {
        AdcError::ConversionFailed
    }
}

/// One ADC channel with its own converter handle
///
/// The dash emulator samples a single sender, so the channel owns the ADC.
pub struct RpAdcInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> RpAdcInput<'d> {
    /// Bind a blocking ADC to one of its channels
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl gsxr_hal::AnalogInput for RpAdcInput<'_> {
    type Error = AdcError;

    fn resolution_bits(&self) -> u8 {
        ADC_BITS
    }

    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(AdcError::from)
    }
}
