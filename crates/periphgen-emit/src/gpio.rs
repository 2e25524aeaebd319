//! GPIO routine emission and the HAL symbol tables it uses.

use std::collections::HashSet;
use std::fmt::Write;

use periphgen_config::{Direction, GpioPinSpec, Pull, Speed};

use crate::error::Result;

/// Hardware pin mode selected for one pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    Input,
    OutputPushPull,
    OutputOpenDrain,
    /// Alternate function, push-pull. Selected whenever the pin names an
    /// alternate-function selector, regardless of its direction.
    AlternatePushPull,
}

impl GpioMode {
    pub fn for_pin(pin: &GpioPinSpec) -> Self {
        if pin.alt_function.is_some() {
            return Self::AlternatePushPull;
        }
        match pin.direction {
            Direction::Input => Self::Input,
            Direction::OutputOpenDrain => Self::OutputOpenDrain,
            Direction::Output => Self::OutputPushPull,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Input => "GPIO_MODE_INPUT",
            Self::OutputPushPull => "GPIO_MODE_OUTPUT_PP",
            Self::OutputOpenDrain => "GPIO_MODE_OUTPUT_OD",
            Self::AlternatePushPull => "GPIO_MODE_AF_PP",
        }
    }
}

pub fn pull_symbol(pull: Pull) -> &'static str {
    match pull {
        Pull::None => "GPIO_NOPULL",
        Pull::PullUp => "GPIO_PULLUP",
        Pull::PullDown => "GPIO_PULLDOWN",
    }
}

pub fn speed_symbol(speed: Speed) -> &'static str {
    match speed {
        Speed::Low => "GPIO_SPEED_FREQ_LOW",
        Speed::Medium => "GPIO_SPEED_FREQ_MEDIUM",
        Speed::High => "GPIO_SPEED_FREQ_HIGH",
        Speed::VeryHigh => "GPIO_SPEED_FREQ_VERY_HIGH",
    }
}

/// Keep free text from closing the surrounding C comment early.
pub fn comment_text(text: &str) -> String {
    text.replace("*/", "* /")
}

/// Emit `init_gpio`. Each port's clock is enabled the first time one of its
/// pins appears, in pin-list order. The routine is emitted even with no pins.
pub fn emit_gpio(out: &mut String, pins: &[GpioPinSpec]) -> Result<()> {
    writeln!(out, "static void init_gpio(void) {{")?;
    writeln!(out, "    GPIO_InitTypeDef GpioStruct = {{0}};")?;
    writeln!(out)?;

    let mut clocked = HashSet::new();
    for pin in pins {
        let port = pin.pin.port();
        if clocked.insert(port) {
            writeln!(out, "    __HAL_RCC_GPIO{port}_CLK_ENABLE();")?;
        }
        match &pin.comment {
            Some(comment) => writeln!(out, "    /* {}: {} */", pin.pin, comment_text(comment))?,
            None => writeln!(out, "    /* {} */", pin.pin)?,
        }
        writeln!(out, "    GpioStruct.Pin = GPIO_PIN_{};", pin.pin.number())?;

        let mode = GpioMode::for_pin(pin);
        writeln!(out, "    GpioStruct.Mode = {};", mode.symbol())?;
        if let Some(af) = &pin.alt_function {
            writeln!(out, "    GpioStruct.Alternate = {af};")?;
        }
        writeln!(out, "    GpioStruct.Pull = {};", pull_symbol(pin.pull))?;
        writeln!(out, "    GpioStruct.Speed = {};", speed_symbol(pin.speed))?;
        writeln!(out, "    HAL_GPIO_Init(GPIO{port}, &GpioStruct);")?;
        writeln!(out)?;
    }

    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}
