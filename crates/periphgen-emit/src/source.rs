//! Whole-file rendering.

use std::fmt::Write;

use log::debug;
use periphgen_config::PeripheralConfig;

use crate::error::Result;
use crate::gpio::{comment_text, emit_gpio};
use crate::i2c::emit_i2c;
use crate::timer::emit_timer;
use crate::uart::emit_uart;

/// Header every generated file includes.
pub const HAL_HEADER: &str = "stm32f4xx_hal.h";

/// Render the complete initialization source for a validated description.
///
/// Peripheral routines appear in the fixed order GPIO, UART, I2C, timers,
/// each category in list order; disabled instances are skipped entirely.
pub fn generate_source(config: &PeripheralConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "/* auto-generated for {} */", comment_text(&config.board.name))?;
    writeln!(out, "#include \"{HAL_HEADER}\"")?;
    writeln!(out)?;

    emit_gpio(&mut out, &config.gpio.pins)?;
    for uart in config.enabled_uarts() {
        emit_uart(&mut out, uart)?;
    }
    for i2c in config.enabled_i2cs() {
        emit_i2c(&mut out, i2c)?;
    }
    for timer in config.enabled_timers() {
        emit_timer(&mut out, timer)?;
    }

    writeln!(out, "void initialize_peripherals(void) {{")?;
    writeln!(out, "    init_gpio();")?;
    let instances = config
        .enabled_uarts()
        .map(|u| &u.instance)
        .chain(config.enabled_i2cs().map(|i| &i.instance))
        .chain(config.enabled_timers().map(|t| &t.instance));
    for instance in instances {
        writeln!(out, "    init_{instance}();")?;
    }
    writeln!(out, "}}")?;

    debug!(
        "rendered {} bytes for {} pins, {} uart, {} i2c, {} timers",
        out.len(),
        config.gpio.pins.len(),
        config.enabled_uarts().count(),
        config.enabled_i2cs().count(),
        config.enabled_timers().count()
    );
    Ok(out)
}
