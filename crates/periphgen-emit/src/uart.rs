//! UART routine emission.

use std::fmt::Write;

use periphgen_config::{Parity, UartSpec};

use crate::error::{EmitError, Result};
use crate::handle::{handle_name, UART_HANDLES};

pub fn parity_symbol(parity: Parity) -> &'static str {
    match parity {
        Parity::None => "UART_PARITY_NONE",
        Parity::Even => "UART_PARITY_EVEN",
        Parity::Odd => "UART_PARITY_ODD",
    }
}

/// Emit the handle and `init_<instance>` routine for one enabled UART.
/// Word length, flow control, and oversampling are fixed.
pub fn emit_uart(out: &mut String, uart: &UartSpec) -> Result<()> {
    let baudrate = uart.baudrate.ok_or_else(|| EmitError::MissingField {
        instance: uart.instance.clone(),
        field: "baudrate",
    })?;
    let stop_bits = uart.stop_bits.as_deref().ok_or_else(|| EmitError::MissingField {
        instance: uart.instance.clone(),
        field: "stop_bits",
    })?;
    let inst = &uart.instance;
    let h = handle_name(&UART_HANDLES, inst);

    writeln!(out, "UART_HandleTypeDef {h};")?;
    writeln!(out, "void init_{inst}(void) {{")?;
    writeln!(out, "    {h}.Instance = {inst};")?;
    writeln!(out, "    {h}.Init.BaudRate = {baudrate};")?;
    writeln!(out, "    {h}.Init.WordLength = UART_WORDLENGTH_8B;")?;
    writeln!(out, "    {h}.Init.Parity = {};", parity_symbol(uart.parity))?;
    writeln!(out, "    {h}.Init.StopBits = UART_STOPBITS_{stop_bits};")?;
    writeln!(out, "    {h}.Init.Mode = UART_MODE_TX_RX;")?;
    writeln!(out, "    {h}.Init.HwFlowCtl = UART_HWCONTROL_NONE;")?;
    writeln!(out, "    {h}.Init.OverSampling = UART_OVERSAMPLING_16;")?;
    writeln!(out, "    if (HAL_UART_Init(&{h}) != HAL_OK) {{")?;
    writeln!(out, "        Error_Handler();")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}
