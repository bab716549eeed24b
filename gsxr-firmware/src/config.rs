//! Build-time configuration
//!
//! Values come from dash.toml, checked and baked in by build.rs.

use gsxr_core::config::{LinkConfig, LinkTiming, SensorConfig};

mod generated {
    include!(concat!(env!("OUT_DIR"), "/dash_config.rs"));
}

/// ECU link and console settings
pub const LINK: LinkConfig = LinkConfig::new(
    generated::ECU_BAUD,
    generated::DIAG_BAUD,
    LinkTiming::new(generated::BYTE_DELAY_MS, generated::FRAME_DELAY_MS),
);

/// Temperature sender scaling
pub const SENSOR: SensorConfig = SensorConfig::new(generated::ADC_BITS);
