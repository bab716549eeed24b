//! Control task
//!
//! Runs the blocking control loop forever. Adapter faults are absorbed by
//! the drivers; this task only logs when a fault counter moves.

use defmt::*;
use embassy_time::Delay;

use gsxr_core::control::ControlLoop;
use gsxr_drivers::display::Pt6961;
use gsxr_drivers::link::PacedTransmitter;
use gsxr_drivers::sensor::AnalogSensor;
use gsxr_hal_rp2040::adc::RpAdcInput;
use gsxr_hal_rp2040::gpio::RpOutput;
use gsxr_hal_rp2040::uart::RpUartTx;

use crate::diag::LoggedConsole;

pub type TempSensor = AnalogSensor<RpAdcInput<'static>>;
pub type EcuLink = PacedTransmitter<RpUartTx<'static>, Delay>;
pub type Display = Pt6961<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>, Delay>;
pub type Console = LoggedConsole<RpUartTx<'static>>;

/// The control loop with the board's adapters
pub type DashLoop = ControlLoop<TempSensor, EcuLink, Display, Console>;

/// Fault counters seen at the end of the last cycle
#[derive(Default, PartialEq, Eq, Clone, Copy)]
struct Faults {
    sensor: u32,
    link: u32,
    console: u32,
}

impl Faults {
    fn of(control: &DashLoop) -> Self {
        Self {
            sensor: control.sensor().fault_count(),
            link: control.transmitter().fault_count(),
            console: control.diagnostics().fault_count(),
        }
    }
}

#[embassy_executor::task]
pub async fn control_task(mut control: DashLoop) {
    info!(
        "Control loop running: {} ms between frames",
        control.timing().frame_period_ms()
    );

    let mut seen = Faults::of(&control);
    loop {
        control.step();

        let now = Faults::of(&control);
        if now != seen {
            warn!(
                "Faults: sensor={} link={} console={}",
                now.sensor, now.link, now.console
            );
            seen = now;
        }
    }
}
