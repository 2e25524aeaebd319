//! I2C routine emission.

use std::fmt::Write;

use periphgen_config::I2cSpec;

use crate::error::{EmitError, Result};
use crate::handle::{handle_name, I2C_HANDLES};

/// Emit the handle and `init_<instance>` routine for one enabled I2C bus.
/// Only the clock speed comes from the description; the rest are standard
/// 7-bit master settings.
pub fn emit_i2c(out: &mut String, i2c: &I2cSpec) -> Result<()> {
    let speed = i2c.speed.ok_or_else(|| EmitError::MissingField {
        instance: i2c.instance.clone(),
        field: "speed",
    })?;
    let inst = &i2c.instance;
    let h = handle_name(&I2C_HANDLES, inst);

    writeln!(out, "I2C_HandleTypeDef {h};")?;
    writeln!(out, "void init_{inst}(void) {{")?;
    writeln!(out, "    {h}.Instance = {inst};")?;
    writeln!(out, "    {h}.Init.ClockSpeed = {speed};")?;
    writeln!(out, "    {h}.Init.DutyCycle = I2C_DUTYCYCLE_2;")?;
    writeln!(out, "    {h}.Init.OwnAddress1 = 0;")?;
    writeln!(out, "    {h}.Init.AddressingMode = I2C_ADDRESSINGMODE_7BIT;")?;
    writeln!(out, "    {h}.Init.DualAddressMode = I2C_DUALADDRESS_DISABLE;")?;
    writeln!(out, "    {h}.Init.OwnAddress2 = 0;")?;
    writeln!(out, "    {h}.Init.GeneralCallMode = I2C_GENERALCALL_DISABLE;")?;
    writeln!(out, "    {h}.Init.NoStretchMode = I2C_NOSTRETCH_DISABLE;")?;
    writeln!(out, "    if (HAL_I2C_Init(&{h}) != HAL_OK) {{")?;
    writeln!(out, "        Error_Handler();")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}
