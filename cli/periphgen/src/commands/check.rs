//! `periphgen --validate-only`: validate without generating.

use std::path::Path;

use anyhow::Result;
use log::info;

use super::load_validated;

pub const SUCCESS_MESSAGE: &str = "validation successful, no code generated";

pub fn run(config_path: &Path) -> Result<()> {
    let config = load_validated(config_path)?;
    info!(
        "{}: {} pins, {} uart, {} i2c, {} timers",
        config.board.name,
        config.gpio.pins.len(),
        config.communication.uart.len(),
        config.communication.i2c.len(),
        config.timers.len()
    );
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}
