//! Command-line interface for `scicalc`

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{format_number, CalcError, ExpressionBuffer, MathEvaluator};
use crate::logging::LogFormat;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal or log file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `--eval` expression could not be evaluated
    #[error("Cannot evaluate '{expression}': {source}")]
    Evaluation {
        /// Expression as typed
        expression: String,
        /// Underlying error
        #[source]
        source: CalcError,
    },
}

impl CliError {
    /// Create an evaluation error
    #[must_use]
    pub fn evaluation(expression: impl Into<String>, source: CalcError) -> Self {
        Self::Evaluation {
            expression: expression.into(),
            source,
        }
    }
}

/// Scientific calculator with keypad, memory register and help panel
#[derive(Parser, Debug)]
#[command(name = "scicalc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE", env = "SCICALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Start in minimized size mode
    #[arg(short, long)]
    pub minimized: bool,

    /// Maximum fractional digits shown for results
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Text shown when an expression cannot be evaluated
    #[arg(long)]
    pub error_message: Option<String>,

    /// Ignore the keyboard except for quit keys; buttons still work
    #[arg(long)]
    pub no_keyboard: bool,

    /// Write logs to this file (the terminal UI never logs to the screen)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the calculator configuration: file first, flags on top
    pub fn build_config(&self) -> CliResult<CalculatorConfig> {
        let mut config = match &self.config {
            Some(path) => CalculatorConfig::load(path)?,
            None => CalculatorConfig::default(),
        };
        if self.minimized {
            config.start_minimized = true;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if let Some(message) = &self.error_message {
            config.error_message.clone_from(message);
        }
        if self.no_keyboard {
            config.keyboard_enabled = false;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Evaluates `expression` as if it had been typed, returning the formatted
/// result
pub fn evaluate_once(expression: &str, config: &CalculatorConfig) -> CliResult<String> {
    let mut buffer = ExpressionBuffer::new();
    buffer.append(expression);
    buffer
        .evaluate(&MathEvaluator::new())
        .map(|value| format_number(value, config.precision))
        .map_err(|source| CliError::evaluation(expression, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("scicalc").chain(args.iter().copied())).unwrap()
    }

    // ===== Parsing tests =====

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&[]);
        assert!(cli.eval.is_none());
        assert!(!cli.minimized);
        assert!(!cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn test_parse_eval() {
        let cli = parse(&["--eval", "2+2", "-v"]);
        assert_eq!(cli.eval.as_deref(), Some("2+2"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_log_options() {
        let cli = parse(&["--log-file", "calc.log", "--log-format", "json"]);
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["scicalc", "--colour"]).is_err());
    }

    // ===== Config tests =====

    #[test]
    fn test_build_config_flags() {
        let cli = parse(&[
            "--minimized",
            "--precision",
            "3",
            "--error-message",
            "Oops",
            "--no-keyboard",
        ]);
        let config = cli.build_config().unwrap();
        assert!(config.start_minimized);
        assert_eq!(config.precision, 3);
        assert_eq!(config.error_message, "Oops");
        assert!(!config.keyboard_enabled);
    }

    #[test]
    fn test_build_config_file_then_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision: 4").unwrap();
        writeln!(file, "error_message: From file").unwrap();
        let path = file.path().to_str().unwrap();

        let config = parse(&["--config", path, "--precision", "2"])
            .build_config()
            .unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.error_message, "From file");
    }

    #[test]
    fn test_build_config_invalid_precision() {
        let result = parse(&["--precision", "99"]).build_config();
        assert!(matches!(
            result,
            Err(CliError::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_build_config_missing_file() {
        let result = parse(&["--config", "/nonexistent/scicalc.yaml"]).build_config();
        assert!(matches!(result, Err(CliError::Config(ConfigError::Io { .. }))));
    }

    // ===== Evaluation tests =====

    #[test]
    fn test_evaluate_once() {
        let config = CalculatorConfig::default();
        assert_eq!(evaluate_once("2+2", &config).unwrap(), "4");
        assert_eq!(evaluate_once("50%", &config).unwrap(), "0.5");
        assert_eq!(evaluate_once("7mod4", &config).unwrap(), "3");
        assert_eq!(evaluate_once("4!", &config).unwrap(), "24");
        assert_eq!(evaluate_once("2π", &config).unwrap(), "6.2831853072");
    }

    #[test]
    fn test_evaluate_once_precision() {
        let config = CalculatorConfig::default().with_precision(2);
        assert_eq!(evaluate_once("1/3", &config).unwrap(), "0.33");
    }

    #[test]
    fn test_evaluate_once_error() {
        let err = evaluate_once("2+", &CalculatorConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Evaluation { .. }));
        assert!(err.to_string().contains("'2+'"));
    }

    #[test]
    fn test_cli_error_display() {
        let err = CliError::from(ConfigError::invalid("bad"));
        assert_eq!(err.to_string(), "Invalid configuration: bad");
        let err = CliError::from(std::io::Error::other("disk"));
        assert!(err.to_string().contains("I/O error"));
    }
}
