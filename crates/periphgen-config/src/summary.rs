//! Human-readable listing of a validated description.

use std::fmt;

use crate::model::PeripheralConfig;

/// Display adapter that renders the configuration summary.
pub struct Summary<'a>(pub &'a PeripheralConfig);

/// Render the summary as a string.
pub fn render_summary(config: &PeripheralConfig) -> String {
    Summary(config).to_string()
}

struct OrNa<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNa<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("n/a"),
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;
        let board = &config.board;
        writeln!(f, "--- config summary ---")?;
        writeln!(f, "board     : {}", board.name)?;
        writeln!(f, "mcu       : {}", board.mcu)?;
        writeln!(f, "sysclock  : {} hz", board.clock_freq)?;

        let pins = &config.gpio.pins;
        writeln!(f)?;
        writeln!(f, "gpio pins ({})", pins.len())?;
        for pin in pins {
            write!(
                f,
                "  {:<5} | dir: {:<18} | pull: {:<9} | speed: {}",
                pin.pin, pin.direction, pin.pull, pin.speed
            )?;
            if let Some(af) = &pin.alt_function {
                write!(f, ", alt_fn: {af}")?;
            }
            writeln!(f)?;
        }

        let uarts = &config.communication.uart;
        if !uarts.is_empty() {
            writeln!(f)?;
            writeln!(f, "uart ({})", uarts.len())?;
            for uart in uarts {
                writeln!(
                    f,
                    "  {}: {}, baud {}, tx {}, rx {}",
                    uart.instance,
                    on_off(uart.enabled),
                    OrNa(&uart.baudrate),
                    OrNa(&uart.tx_pin),
                    OrNa(&uart.rx_pin)
                )?;
            }
        }

        let i2cs = &config.communication.i2c;
        if !i2cs.is_empty() {
            writeln!(f)?;
            writeln!(f, "i2c ({})", i2cs.len())?;
            for i2c in i2cs {
                writeln!(
                    f,
                    "  {}: {}, speed {} hz, scl {}, sda {}",
                    i2c.instance,
                    on_off(i2c.enabled),
                    OrNa(&i2c.speed),
                    OrNa(&i2c.scl_pin),
                    OrNa(&i2c.sda_pin)
                )?;
            }
        }

        let timers = &config.timers;
        if !timers.is_empty() {
            writeln!(f)?;
            writeln!(f, "timers ({})", timers.len())?;
            for timer in timers {
                write!(
                    f,
                    "  {}: {}, mode {}, presc {}, period {}",
                    timer.instance,
                    on_off(timer.enabled),
                    timer.mode,
                    OrNa(&timer.prescaler),
                    OrNa(&timer.period)
                )?;
                if let Some((channel, duty)) = timer.pwm() {
                    write!(f, ", pwm ch {channel} duty {duty}%")?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "--- end summary ---")
    }
}
