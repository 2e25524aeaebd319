//! STM32F4 HAL initialization source emission.
//!
//! Rendering is a pure function of a validated [`PeripheralConfig`]: one
//! `init_gpio` routine, one routine per enabled UART, I2C, and timer
//! instance, and an `initialize_peripherals` entry point calling them in
//! configuration order. [`write_artifact`] puts the result on disk.
//!
//! [`PeripheralConfig`]: periphgen_config::PeripheralConfig

pub mod artifact;
pub mod error;
pub mod gpio;
pub mod handle;
pub mod i2c;
pub mod source;
pub mod timer;
pub mod uart;

pub use artifact::write_artifact;
pub use error::{EmitError, Result};
pub use gpio::GpioMode;
pub use handle::{handle_name, HandleScheme, I2C_HANDLES, TIMER_HANDLES, UART_HANDLES};
pub use source::{generate_source, HAL_HEADER};
