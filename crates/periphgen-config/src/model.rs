//! Typed peripheral records.
//!
//! Decoding happens only after validation accepted the defaulted tree, so
//! the records can use the closed schema enums directly. Fields the
//! validators only check while an entity is enabled decode leniently, since a
//! disabled entity may carry anything there.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::schema::{Category, Direction, Parity, PinId, Pull, Speed, TimerMode};
use crate::tree::{entities, positive_u32, scalar_text};

/// Board identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardSpec {
    #[serde(deserialize_with = "present_text")]
    pub name: String,
    #[serde(deserialize_with = "present_text")]
    pub mcu: String,
    /// System clock in hertz, as written. Not range checked.
    #[serde(deserialize_with = "present_text")]
    pub clock_freq: String,
}

/// One GPIO pin assignment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GpioPinSpec {
    pub pin: PinId,
    pub direction: Direction,
    pub pull: Pull,
    pub speed: Speed,
    /// Alternate-function selector; overrides `direction` when set.
    #[serde(default, deserialize_with = "optional_text")]
    pub alt_function: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpioSection {
    pub pins: Vec<GpioPinSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UartSpec {
    #[serde(deserialize_with = "required_text")]
    pub instance: String,
    pub enabled: bool,
    #[serde(default, deserialize_with = "positive_int")]
    pub baudrate: Option<u32>,
    pub parity: Parity,
    /// Interpolated into the HAL stop-bit symbol as written.
    #[serde(default, deserialize_with = "optional_text")]
    pub stop_bits: Option<String>,
    /// Carried for completeness; not used when generating code.
    #[serde(default, deserialize_with = "small_int")]
    pub data_bits: Option<u8>,
    #[serde(default, deserialize_with = "optional_text")]
    pub tx_pin: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub rx_pin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct I2cSpec {
    #[serde(deserialize_with = "required_text")]
    pub instance: String,
    pub enabled: bool,
    /// Bus clock in hertz.
    #[serde(default, deserialize_with = "positive_int")]
    pub speed: Option<u32>,
    #[serde(default, deserialize_with = "optional_text")]
    pub scl_pin: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub sda_pin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunicationSection {
    pub uart: Vec<UartSpec>,
    pub i2c: Vec<I2cSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimerSpec {
    #[serde(deserialize_with = "required_text")]
    pub instance: String,
    pub enabled: bool,
    pub mode: TimerMode,
    #[serde(default, deserialize_with = "positive_int")]
    pub prescaler: Option<u32>,
    #[serde(default, deserialize_with = "positive_int")]
    pub period: Option<u32>,
    #[serde(default, deserialize_with = "optional_text")]
    pub duty_cycle: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub channel: Option<String>,
}

impl TimerSpec {
    /// `(channel, duty_cycle)` for a PWM timer that carries both.
    pub fn pwm(&self) -> Option<(&str, &str)> {
        if self.mode != TimerMode::Pwm {
            return None;
        }
        Some((self.channel.as_deref()?, self.duty_cycle.as_deref()?))
    }
}

/// A validated, fully defaulted peripheral description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeripheralConfig {
    pub board: BoardSpec,
    pub gpio: GpioSection,
    pub communication: CommunicationSection,
    pub timers: Vec<TimerSpec>,
}

impl PeripheralConfig {
    /// Decode a defaulted tree. Callers are expected to have validated it;
    /// anything the validators let through that still fails to decode is a
    /// [`ConfigError::Decode`] naming the entity.
    pub fn from_tree(tree: &Value) -> Result<Self> {
        let board = decode(tree.get("board").unwrap_or(&Value::Null), "board")?;
        let pins = decode_list(tree, Category::Gpio, "gpio pin")?;
        let uart = decode_list(tree, Category::Uart, "uart")?;
        let i2c = decode_list(tree, Category::I2c, "i2c")?;
        let timers = decode_list(tree, Category::Timers, "timer")?;

        Ok(Self {
            board,
            gpio: GpioSection { pins },
            communication: CommunicationSection { uart, i2c },
            timers,
        })
    }

    pub fn enabled_uarts(&self) -> impl Iterator<Item = &UartSpec> {
        self.communication.uart.iter().filter(|u| u.enabled)
    }

    pub fn enabled_i2cs(&self) -> impl Iterator<Item = &I2cSpec> {
        self.communication.i2c.iter().filter(|i| i.enabled)
    }

    pub fn enabled_timers(&self) -> impl Iterator<Item = &TimerSpec> {
        self.timers.iter().filter(|t| t.enabled)
    }
}

fn decode<T: DeserializeOwned>(value: &Value, context: impl Into<String>) -> Result<T> {
    T::deserialize(value).map_err(|source| ConfigError::Decode {
        context: context.into(),
        source,
    })
}

fn decode_list<T: DeserializeOwned>(
    tree: &Value,
    category: Category,
    noun: &str,
) -> Result<Vec<T>> {
    entities(tree, category)
        .iter()
        .enumerate()
        .map(|(index, entity)| decode(entity, format!("{noun} {index}")))
        .collect()
}

/// Any non-null value as text. Mappings and sequences keep their JSON form.
fn present_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Err(D::Error::custom("expected a value"));
    }
    Ok(scalar_text(&value).unwrap_or_else(|| value.to_string()))
}

fn required_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value).ok_or_else(|| D::Error::custom("expected a scalar value"))
}

fn optional_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_text(&value))
}

fn positive_int<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(positive_u32(&value))
}

fn small_int<'de, D>(deserializer: D) -> std::result::Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().and_then(|n| u8::try_from(n).ok()))
}
