//! Timer routine emission.

use std::fmt::Write;

use periphgen_config::TimerSpec;

use crate::error::{EmitError, Result};
use crate::handle::{handle_name, TIMER_HANDLES};

fn required(timer: &TimerSpec, value: Option<u32>, field: &'static str) -> Result<u32> {
    value.ok_or_else(|| EmitError::MissingField {
        instance: timer.instance.clone(),
        field,
    })
}

/// Emit the handle and `init_<instance>` routine for one enabled timer.
///
/// The HAL registers count from zero, so prescaler and period are written
/// one below the configured values. PWM timers get an annotation naming the
/// channel and duty cycle; the channel itself is not configured.
pub fn emit_timer(out: &mut String, timer: &TimerSpec) -> Result<()> {
    let prescaler = required(timer, timer.prescaler, "prescaler")?;
    let period = required(timer, timer.period, "period")?;
    let inst = &timer.instance;
    let h = handle_name(&TIMER_HANDLES, inst);

    writeln!(out, "TIM_HandleTypeDef {h};")?;
    writeln!(out, "void init_{inst}(void) {{")?;
    writeln!(out, "    {h}.Instance = {inst};")?;
    writeln!(out, "    {h}.Init.Prescaler = {};", prescaler - 1)?;
    writeln!(out, "    {h}.Init.CounterMode = TIM_COUNTERMODE_UP;")?;
    writeln!(out, "    {h}.Init.Period = {};", period - 1)?;
    writeln!(out, "    {h}.Init.ClockDivision = TIM_CLOCKDIVISION_DIV1;")?;
    writeln!(out, "    if (HAL_TIM_Base_Init(&{h}) != HAL_OK) {{")?;
    writeln!(out, "        Error_Handler();")?;
    writeln!(out, "    }}")?;
    if let Some((channel, duty)) = timer.pwm() {
        writeln!(
            out,
            "    /* pwm output on channel {channel} at {duty}% duty; channel setup not generated */"
        )?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use periphgen_config::TimerMode;

    fn timer(instance: &str, prescaler: u32, period: u32) -> TimerSpec {
        TimerSpec {
            instance: instance.into(),
            enabled: true,
            mode: TimerMode::Timer,
            prescaler: Some(prescaler),
            period: Some(period),
            duty_cycle: None,
            channel: None,
        }
    }

    #[test]
    fn counters_are_zero_based() {
        let mut out = String::new();
        emit_timer(&mut out, &timer("TIM2", 84000, 1000)).unwrap();
        let expected = "\
TIM_HandleTypeDef htim2;
void init_TIM2(void) {
    htim2.Instance = TIM2;
    htim2.Init.Prescaler = 83999;
    htim2.Init.CounterMode = TIM_COUNTERMODE_UP;
    htim2.Init.Period = 999;
    htim2.Init.ClockDivision = TIM_CLOCKDIVISION_DIV1;
    if (HAL_TIM_Base_Init(&htim2) != HAL_OK) {
        Error_Handler();
    }
}

";
        assert_eq!(out, expected);
    }

    #[test]
    fn value_of_one_becomes_zero() {
        let mut out = String::new();
        emit_timer(&mut out, &timer("TIM6", 1, 1)).unwrap();
        assert!(out.contains("htim6.Init.Prescaler = 0;"));
        assert!(out.contains("htim6.Init.Period = 0;"));
    }

    #[test]
    fn pwm_timer_is_annotated_only() {
        let mut spec = timer("TIM3", 168, 1000);
        spec.mode = TimerMode::Pwm;
        spec.channel = Some("1".into());
        spec.duty_cycle = Some("50".into());

        let mut out = String::new();
        emit_timer(&mut out, &spec).unwrap();
        assert!(out.contains(
            "    }\n    /* pwm output on channel 1 at 50% duty; channel setup not generated */\n}\n"
        ));
        assert!(!out.contains("HAL_TIM_PWM"));
    }

    #[test]
    fn missing_period_is_an_error() {
        let mut spec = timer("TIM4", 84, 1000);
        spec.period = None;
        let err = emit_timer(&mut String::new(), &spec).unwrap_err();
        assert!(matches!(err, EmitError::MissingField { field: "period", .. }));
    }
}
