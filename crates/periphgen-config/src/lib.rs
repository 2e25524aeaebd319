//! Peripheral description loading, defaulting, and validation.
//!
//! A description is decoded into a generic value tree, filled in from the
//! per-category defaults table, checked by the structural and section
//! validators, and finally decoded into the typed [`PeripheralConfig`]:
//!
//! - [`document`] : TOML / JSON text into the value tree
//! - [`schema`] : closed field enums, pin identifiers, defaults table
//! - [`defaults`] : default application with a record of every filled field
//! - [`validate`] : structural, board, GPIO, communication, and timer rules
//! - [`model`] : typed records consumed by the summary and the emitter
//! - [`summary`] : human-readable listing of a validated model
//! - [`pipeline`] : the load → default → validate → decode sequence

pub mod defaults;
pub mod document;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod summary;
pub mod tree;
pub mod validate;

pub use defaults::{apply_defaults, AppliedDefault, Defaulted};
pub use document::{load_document, parse_document, DocumentFormat};
pub use error::{ConfigError, Result};
pub use model::{
    BoardSpec, CommunicationSection, GpioPinSpec, GpioSection, I2cSpec, PeripheralConfig,
    TimerSpec, UartSpec,
};
pub use pipeline::{check, load_and_check, Checked};
pub use schema::{Category, Direction, Parity, PinId, Pull, Speed, TimerMode};
pub use summary::{render_summary, Summary};
pub use validate::{validate, Section, ValidationError, ValidationReport};
