//! HAL handle variable naming.
//!
//! A handle name is derived from the instance name by swapping a known
//! hardware-family prefix for the conventional handle prefix and keeping the
//! rest: `USART1` becomes `huart1`, `TIM3` becomes `htim3`.

/// Ordered `(instance prefix, handle prefix)` pairs plus a fallback prefix
/// for instances matching none of them.
#[derive(Debug, Clone, Copy)]
pub struct HandleScheme {
    /// Matched case-insensitively, first match wins. Longer prefixes that
    /// share a stem with a shorter one come first.
    pub prefixes: &'static [(&'static str, &'static str)],
    pub fallback: &'static str,
}

pub const UART_HANDLES: HandleScheme = HandleScheme {
    prefixes: &[("lpuart", "hlpuart"), ("usart", "huart"), ("uart", "huart")],
    fallback: "hu",
};

pub const I2C_HANDLES: HandleScheme = HandleScheme {
    prefixes: &[("fmpi2c", "hfmpi2c"), ("i2c", "hi2c")],
    fallback: "hi",
};

pub const TIMER_HANDLES: HandleScheme = HandleScheme {
    prefixes: &[("lptim", "hlptim"), ("tim", "htim")],
    fallback: "ht",
};

/// Handle variable name for `instance` under `scheme`.
pub fn handle_name(scheme: &HandleScheme, instance: &str) -> String {
    let lower = instance.to_lowercase();
    for (prefix, handle) in scheme.prefixes {
        if let Some(suffix) = lower.strip_prefix(prefix) {
            return format!("{handle}{suffix}");
        }
    }
    format!("{}{lower}", scheme.fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uart_names() {
        assert_eq!(handle_name(&UART_HANDLES, "USART1"), "huart1");
        assert_eq!(handle_name(&UART_HANDLES, "UART4"), "huart4");
        assert_eq!(handle_name(&UART_HANDLES, "LPUART1"), "hlpuart1");
        assert_eq!(handle_name(&UART_HANDLES, "usart6"), "huart6");
    }

    #[test]
    fn i2c_names() {
        assert_eq!(handle_name(&I2C_HANDLES, "I2C1"), "hi2c1");
        assert_eq!(handle_name(&I2C_HANDLES, "FMPI2C1"), "hfmpi2c1");
    }

    #[test]
    fn timer_names() {
        assert_eq!(handle_name(&TIMER_HANDLES, "TIM2"), "htim2");
        assert_eq!(handle_name(&TIMER_HANDLES, "LPTIM1"), "hlptim1");
    }

    #[test]
    fn unknown_prefix_falls_back() {
        assert_eq!(handle_name(&UART_HANDLES, "SERIAL0"), "huserial0");
        assert_eq!(handle_name(&I2C_HANDLES, "SMBUS2"), "hismbus2");
        assert_eq!(handle_name(&TIMER_HANDLES, "RTC"), "htrtc");
    }

    #[test]
    fn bare_prefix_keeps_empty_suffix() {
        assert_eq!(handle_name(&TIMER_HANDLES, "TIM"), "htim");
    }
}
