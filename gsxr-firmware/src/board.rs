//! Pin assignments for a Raspberry Pi Pico
//!
//! Changing a pin here also means changing the `p.PIN_*` taken in main.

use gsxr_hal_rp2040::adc::AdcChannel;
use gsxr_hal_rp2040::uart::{tx_pin_uart, UartId};

/// Console TX (UART0)
pub const CONSOLE_TX: u8 = 0;

/// ECU data line TX (UART1)
pub const ECU_TX: u8 = 8;

/// Temperature sender (ADC0)
pub const SENSOR_ADC: u8 = 26;

/// PT6961 strobe
pub const DISPLAY_STB: u8 = 10;

/// PT6961 data in
pub const DISPLAY_DIN: u8 = 11;

/// PT6961 clock
pub const DISPLAY_CLK: u8 = 13;

const _: () = assert!(matches!(tx_pin_uart(CONSOLE_TX), Some(UartId::Uart0)));
const _: () = assert!(matches!(tx_pin_uart(ECU_TX), Some(UartId::Uart1)));
const _: () = assert!(matches!(AdcChannel::from_gpio(SENSOR_ADC), Some(AdcChannel::Adc0)));
