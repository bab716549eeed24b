//! UART transmit wrapper and pin mapping
//!
//! RP2040 has two UART peripherals (UART0 and UART1), each routable to a
//! fixed set of pins.

use embassy_rp::uart::{self, Blocking};

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// Determine which UART can drive TX on a given GPIO pin
pub const fn tx_pin_uart(gpio: u8) -> Option<UartId> {
    // UART0 TX: GPIO 0, 12, 16, 28
    // UART1 TX: GPIO 4, 8, 20, 24
    match gpio {
        0 | 12 | 16 | 28 => Some(UartId::Uart0),
        4 | 8 | 20 | 24 => Some(UartId::Uart1),
        _ => None,
    }
}

/// Build an 8N1 embassy UART config at the given baud rate
///
/// The fractional divider gets within 0.1% of 7800 baud from the default
/// 125 MHz peripheral clock, so no special divisor handling is needed.
pub fn config(baudrate: u32) -> uart::Config {
    let mut config = uart::Config::default();
    config.baudrate = baudrate;
    config.data_bits = uart::DataBits::DataBits8;
    config.stop_bits = uart::StopBits::STOP1;
    config.parity = uart::Parity::ParityNone;
    config
}

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Framing error
    Framing,
    /// Break condition
    Break,
    /// Overrun error
    Overrun,
    /// Parity error
    Parity,
    /// Other error
    Other,
}

impl From<uart::Error> for UartBusError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => UartBusError::Framing,
            uart::Error::Break => UartBusError::Break,
            uart::Error::Overrun => UartBusError::Overrun,
            uart::Error::Parity => UartBusError::Parity,
            #[allow(unreachable_patterns)]
            _ => UartBusError::Other,
        }
    }
}

/// Blocking UART transmitter implementing [`gsxr_hal::UartTx`]
pub struct RpUartTx<'d> {
    tx: uart::UartTx<'d, Blocking>,
}

impl<'d> RpUartTx<'d> {
    /// Wrap a blocking UART transmitter
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl gsxr_hal::UartTx for RpUartTx<'_> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data).map_err(UartBusError::from)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush().map_err(UartBusError::from)
    }
}
