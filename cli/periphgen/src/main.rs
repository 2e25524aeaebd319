//! periphgen: generate STM32 HAL peripheral initialization code from a
//! board description.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

#[derive(Parser)]
#[command(
    name = "periphgen",
    version,
    about = "Generate STM32 HAL peripheral initialization code from a board description"
)]
struct Cli {
    /// Board description file (.toml or .json)
    config: PathBuf,
    /// Generated C file
    #[arg(short, long, default_value = "peripheral_init.c")]
    output: PathBuf,
    /// Print a summary of the validated description and exit
    #[arg(short, long)]
    summary: bool,
    /// Validate the description without generating code
    #[arg(short, long)]
    validate_only: bool,
    /// Log verbosity
    #[arg(long, env = "PERIPHGEN_LOG", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new()
        .with_level(cli.log_level.into())
        .without_timestamps()
        .init()
    {
        eprintln!("warning: logging disabled: {e}");
    }

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.summary {
        commands::summary::run(&cli.config)
    } else if cli.validate_only {
        commands::check::run(&cli.config)
    } else {
        commands::generate::run(&cli.config, &cli.output)
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const GPIO_ONLY: &str = r#"{
        "board": { "name": "X", "mcu": "Y", "clock_freq": 16000000 },
        "gpio": { "pins": [{ "pin": "PA5", "direction": "output" }] },
        "communication": { "uart": [], "i2c": [] },
        "timers": []
    }"#;

    fn write_config(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn cli(config: &Path, output: &Path) -> Cli {
        Cli {
            config: config.to_path_buf(),
            output: output.to_path_buf(),
            summary: false,
            validate_only: false,
            log_level: LogLevel::Off,
        }
    }

    fn demo_path(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../demos")
            .join(name)
    }

    /// Single output pin, empty peripheral lists.
    #[test]
    fn gpio_only_generates_port_clock_and_gpio_call() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "board.json", GPIO_ONLY);
        let output = dir.path().join("peripheral_init.c");

        run(cli(&config, &output)).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.matches("_CLK_ENABLE();").count(), 1);
        assert!(text.contains("    __HAL_RCC_GPIOA_CLK_ENABLE();\n"));
        assert!(text.ends_with("void initialize_peripherals(void) {\n    init_gpio();\n}\n"));
    }

    /// Two pins with the same identifier.
    #[test]
    fn duplicate_pin_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            "board.json",
            &GPIO_ONLY.replace(
                r#"[{ "pin": "PA5", "direction": "output" }]"#,
                r#"[{ "pin": "PA5", "direction": "output" }, { "pin": "PA5" }]"#,
            ),
        );
        let output = dir.path().join("peripheral_init.c");

        let err = run(cli(&config, &output)).unwrap_err();
        assert_eq!(err.to_string(), "configuration validation failed (1 errors)");
        assert!(!output.exists());

        let checked = periphgen_config::load_and_check(&config).unwrap();
        let messages: Vec<&str> = checked.report.messages().collect();
        assert_eq!(messages, ["duplicate pin PA5"]);
    }

    /// Enabled UART without a baud rate fails; disabled one passes.
    #[test]
    fn baudrate_required_only_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let enabled = write_config(
            dir.path(),
            "enabled.json",
            &GPIO_ONLY.replace(r#""uart": []"#, r#""uart": [{ "instance": "USART1" }]"#),
        );
        let disabled = write_config(
            dir.path(),
            "disabled.json",
            &GPIO_ONLY.replace(
                r#""uart": []"#,
                r#""uart": [{ "instance": "USART1", "enabled": false }]"#,
            ),
        );

        let checked = periphgen_config::load_and_check(&enabled).unwrap();
        let messages: Vec<&str> = checked.report.messages().collect();
        assert_eq!(messages, ["USART1 invalid baudrate"]);
        assert!(commands::check::run(&enabled).is_err());

        commands::check::run(&disabled).unwrap();
        let output = dir.path().join("out.c");
        run(cli(&disabled, &output)).unwrap();
        let text = fs::read_to_string(&output).unwrap();
        assert!(!text.contains("USART1"));
    }

    /// The demo board renders to the checked-in reference output.
    #[test]
    fn demo_board_matches_reference_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("peripheral_init.c");

        run(cli(&demo_path("stm32f4-discovery.toml"), &output)).unwrap();

        let expected = fs::read_to_string(demo_path("stm32f4-discovery.c")).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn summary_takes_precedence_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "board.json", GPIO_ONLY);
        let output = dir.path().join("peripheral_init.c");

        let mut args = cli(&config, &output);
        args.summary = true;
        args.validate_only = true;
        run(args).unwrap();
        assert!(!output.exists());

        let mut args = cli(&config, &output);
        args.validate_only = true;
        run(args).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn missing_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = run(cli(&missing, &dir.path().join("out.c"))).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to load"));
        assert!(chain.contains("config file not found"));
    }

    #[test]
    fn malformed_toml_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "board.toml", "[board\nname = ");
        let err = commands::check::run(&config).unwrap_err();
        assert!(format!("{err:#}").contains("TOML parse error"));
    }

    #[test]
    fn every_error_counted_in_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), "empty.json", "{}");
        let err = commands::check::run(&config).unwrap_err();
        assert_eq!(err.to_string(), "configuration validation failed (7 errors)");
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["periphgen", "board.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("board.toml"));
        assert_eq!(cli.output, PathBuf::from("peripheral_init.c"));
        assert!(!cli.summary);
        assert!(!cli.validate_only);
    }

    #[test]
    fn parse_short_flags() {
        let cli =
            Cli::try_parse_from(["periphgen", "board.toml", "-o", "init.c", "-s", "-v"]).unwrap();
        assert_eq!(cli.output, PathBuf::from("init.c"));
        assert!(cli.summary);
        assert!(cli.validate_only);
    }

    #[test]
    fn parse_log_level() {
        let cli =
            Cli::try_parse_from(["periphgen", "board.toml", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
        assert!(Cli::try_parse_from(["periphgen", "board.toml", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn config_path_is_required() {
        assert!(Cli::try_parse_from(["periphgen"]).is_err());
    }
}
