//! GSX-R Dash - ECU temperature frame emulator
//!
//! Firmware for an RP2040 board that reads an analog temperature sender
//! and feeds the reading to a GSX-R/SV650 dash as the ECU's 8-byte serial
//! frame. The value is mirrored on a PT6961 LED readout and a serial
//! console.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::uart::UartTx;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use gsxr_core::control::ControlLoop;
use gsxr_drivers::diag::SerialConsole;
use gsxr_drivers::display::Pt6961;
use gsxr_drivers::link::PacedTransmitter;
use gsxr_drivers::sensor::AnalogSensor;
use gsxr_hal_rp2040::adc::RpAdcInput;
use gsxr_hal_rp2040::gpio::RpOutput;
use gsxr_hal_rp2040::uart::{self, RpUartTx};
use gsxr_hal_rp2040::UartConfig;

use crate::config::{LINK, SENSOR};
use crate::diag::LoggedConsole;

mod board;
mod config;
mod diag;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("GSX-R dash firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Console on UART0
    let console_tx = UartTx::new_blocking(p.UART0, p.PIN_0, uart::config(LINK.diag_baud));
    let mut console = LoggedConsole::new(SerialConsole::new(RpUartTx::new(console_tx)));
    console.banner();
    info!("Console on GPIO{} at {} baud", board::CONSOLE_TX, LINK.diag_baud);

    // ECU data line on UART1
    let ecu_tx = UartTx::new_blocking(p.UART1, p.PIN_8, uart::config(LINK.ecu_baud));
    let link = PacedTransmitter::new(RpUartTx::new(ecu_tx), Delay);
    info!(
        "ECU link on GPIO{} at {} baud ({} us per byte)",
        board::ECU_TX,
        LINK.ecu_baud,
        UartConfig::with_baudrate(LINK.ecu_baud).char_time_us()
    );

    // Temperature sender on ADC0
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let sensor = AnalogSensor::with_config(RpAdcInput::new(adc, channel), SENSOR);
    info!("Sensor on GPIO{}, {}-bit ADC", board::SENSOR_ADC, SENSOR.adc_bits);

    // PT6961 readout
    let mut display = Pt6961::new(
        RpOutput::new(Output::new(p.PIN_11, Level::Low)),
        RpOutput::new(Output::new(p.PIN_13, Level::High)),
        RpOutput::new(Output::new(p.PIN_10, Level::High)),
        Delay,
    );
    display.init();
    info!(
        "Display on DIN=GPIO{} CLK=GPIO{} STB=GPIO{}",
        board::DISPLAY_DIN,
        board::DISPLAY_CLK,
        board::DISPLAY_STB
    );

    let control = ControlLoop::start(sensor, link, display, console, LINK.timing);
    info!("Startup reading: {}", control.current_temperature());

    spawner.spawn(tasks::control_task(control)).unwrap();
}
