//! Schema of a peripheral description: closed field enums, pin identifiers,
//! and the per-category defaults table.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four peripheral categories that carry entity lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Gpio,
    Uart,
    I2c,
    Timers,
}

impl Category {
    /// All categories, in processing order.
    pub const ALL: [Category; 4] = [Self::Gpio, Self::Uart, Self::I2c, Self::Timers];

    /// Key path from the document root to the category's entity list.
    pub fn path(&self) -> &'static [&'static str] {
        match self {
            Self::Gpio => &["gpio", "pins"],
            Self::Uart => &["communication", "uart"],
            Self::I2c => &["communication", "i2c"],
            Self::Timers => &["timers"],
        }
    }

    /// The field that names an entity of this category.
    pub fn identity_field(&self) -> &'static str {
        match self {
            Self::Gpio => "pin",
            Self::Uart | Self::I2c | Self::Timers => "instance",
        }
    }

    /// Label used for an entity whose identity field is absent.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Gpio => "unknown",
            Self::Uart => "uart",
            Self::I2c => "i2c",
            Self::Timers => "timer",
        }
    }

    /// Optional fields and their defaults, in application order.
    pub fn defaults(&self) -> &'static [FieldDefault] {
        match self {
            Self::Gpio => GPIO_DEFAULTS,
            Self::Uart => UART_DEFAULTS,
            Self::I2c => I2C_DEFAULTS,
            Self::Timers => TIMER_DEFAULTS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio => write!(f, "gpio"),
            Self::Uart => write!(f, "uart"),
            Self::I2c => write!(f, "i2c"),
            Self::Timers => write!(f, "timers"),
        }
    }
}

/// A default value as written in the defaults table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Text(&'static str),
    Integer(u64),
    Flag(bool),
}

impl DefaultValue {
    /// The value as it appears in the document tree.
    pub fn to_value(self) -> Value {
        match self {
            Self::Text(s) => Value::from(s),
            Self::Integer(n) => Value::from(n),
            Self::Flag(b) => Value::from(b),
        }
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// One row of the defaults table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefault {
    pub field: &'static str,
    pub value: DefaultValue,
}

pub const GPIO_DEFAULTS: &[FieldDefault] = &[
    FieldDefault {
        field: "pull",
        value: DefaultValue::Text("none"),
    },
    FieldDefault {
        field: "speed",
        value: DefaultValue::Text("medium"),
    },
    FieldDefault {
        field: "direction",
        value: DefaultValue::Text("input"),
    },
];

pub const UART_DEFAULTS: &[FieldDefault] = &[
    FieldDefault {
        field: "parity",
        value: DefaultValue::Text("none"),
    },
    FieldDefault {
        field: "stop_bits",
        value: DefaultValue::Integer(1),
    },
    FieldDefault {
        field: "data_bits",
        value: DefaultValue::Integer(8),
    },
    FieldDefault {
        field: "enabled",
        value: DefaultValue::Flag(true),
    },
];

pub const I2C_DEFAULTS: &[FieldDefault] = &[
    FieldDefault {
        field: "speed",
        value: DefaultValue::Integer(100_000),
    },
    FieldDefault {
        field: "enabled",
        value: DefaultValue::Flag(true),
    },
];

pub const TIMER_DEFAULTS: &[FieldDefault] = &[
    FieldDefault {
        field: "enabled",
        value: DefaultValue::Flag(true),
    },
    FieldDefault {
        field: "mode",
        value: DefaultValue::Text("timer"),
    },
];

/// Pin direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
    OutputOpenDrain,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Self::Input, Self::Output, Self::OutputOpenDrain];

    /// Parse a direction from its schema name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::OutputOpenDrain => "output_open_drain",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Internal pull resistor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pull {
    None,
    PullUp,
    PullDown,
}

impl Pull {
    pub const ALL: [Pull; 3] = [Self::None, Self::PullUp, Self::PullDown];

    /// Parse a pull setting from its schema name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PullUp => "pull_up",
            Self::PullDown => "pull_down",
        }
    }
}

impl fmt::Display for Pull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Output slew-rate class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speed {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Self::Low, Self::Medium, Self::High, Self::VeryHigh];

    /// Parse a speed class from its schema name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sp| sp.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// UART parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    None,
    Even,
    Odd,
}

impl Parity {
    pub const ALL: [Parity; 3] = [Self::None, Self::Even, Self::Odd];

    /// Parse a parity setting from its schema name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Timer operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    /// Free-running time base.
    Timer,
    /// Time base driving a PWM output channel.
    Pwm,
}

impl TimerMode {
    pub const ALL: [TimerMode; 2] = [Self::Timer, Self::Pwm];

    /// Parse a timer mode from its schema name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::Pwm => "pwm",
        }
    }
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A GPIO pin identifier such as `PA5`: the letter `P`, a port letter, and a
/// pin number within the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PinId {
    port: char,
    number: u8,
}

impl PinId {
    /// Highest pin number within a port.
    pub const MAX_NUMBER: u8 = 15;

    /// Parse the canonical `P<port><number>` form. Leading zeros are rejected
    /// so that the identifier always displays back as written.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix('P')?;
        let mut chars = rest.chars();
        let port = chars.next().filter(char::is_ascii_uppercase)?;
        let digits = chars.as_str();
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return None;
        }
        let number: u8 = digits.parse().ok()?;
        (number <= Self::MAX_NUMBER).then_some(Self { port, number })
    }

    /// Port letter (`A` for `PA5`).
    pub fn port(&self) -> char {
        self.port
    }

    /// Pin number within the port (`5` for `PA5`).
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl TryFrom<String> for PinId {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("invalid pin identifier '{s}'"))
    }
}

impl From<PinId> for String {
    fn from(pin: PinId) -> Self {
        pin.to_string()
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("P{}{}", self.port, self.number))
    }
}
