//! Build script for gsxr-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates dash.toml at compile time
//! - Generates the link and sensor constants from dash.toml

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let config = validate_config();
    generate_constants(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // cortex-m-rt and defmt linker scripts
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values taken from dash.toml
struct DashConfig {
    ecu_baud: u32,
    byte_delay_ms: u32,
    frame_delay_ms: u32,
    diag_baud: u32,
    adc_bits: u8,
}

/// Validate dash.toml configuration at compile time
fn validate_config() -> DashConfig {
    // Re-run if dash.toml changes
    println!("cargo:rerun-if-changed=dash.toml");

    let config_path = Path::new("dash.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: dash.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a dash.toml configuration file.           ║\n\
            ║  Please create one in the gsxr-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read dash.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in dash.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let ecu_baud = read_int(&config, "ecu", "baud", 1200, 1_000_000, &mut errors);
    let byte_delay_ms = read_int(&config, "ecu", "byte_delay_ms", 0, 1000, &mut errors);
    let frame_delay_ms = read_int(&config, "ecu", "frame_delay_ms", 1, 5000, &mut errors);
    let diag_baud = read_int(&config, "console", "baud", 1200, 1_000_000, &mut errors);
    let adc_bits = read_int(&config, "sensor", "adc_bits", 8, 16, &mut errors);

    // The frame gap is the receiver's only sync marker
    if errors.is_empty() && frame_delay_ms <= byte_delay_ms {
        errors.push("[ecu] frame_delay_ms must be longer than byte_delay_ms".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in dash.toml                       ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=dash.toml validated successfully");

    DashConfig {
        ecu_baud: ecu_baud as u32,
        byte_delay_ms: byte_delay_ms as u32,
        frame_delay_ms: frame_delay_ms as u32,
        diag_baud: diag_baud as u32,
        adc_bits: adc_bits as u8,
    }
}

/// Read a required integer from `[section] key`, checking its range
///
/// Records a message in `errors` and returns 0 if missing or out of range.
fn read_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return 0;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return 0;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(value)) if (min..=max).contains(value) => *value,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write dash_config.rs into OUT_DIR
fn generate_constants(config: &DashConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("dash_config.rs")).unwrap();

    writeln!(f, "// Generated by build.rs from dash.toml").unwrap();
    writeln!(f, "pub const ECU_BAUD: u32 = {};", config.ecu_baud).unwrap();
    writeln!(f, "pub const BYTE_DELAY_MS: u32 = {};", config.byte_delay_ms).unwrap();
    writeln!(f, "pub const FRAME_DELAY_MS: u32 = {};", config.frame_delay_ms).unwrap();
    writeln!(f, "pub const DIAG_BAUD: u32 = {};", config.diag_baud).unwrap();
    writeln!(f, "pub const ADC_BITS: u8 = {};", config.adc_bits).unwrap();
}
