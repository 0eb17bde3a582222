//! Calculator configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Cannot read config file {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`CalculatorConfig`]
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value is out of range
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Error message
        message: String,
    },
}

impl ConfigError {
    /// Create an out-of-range error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator configuration
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```yaml
/// error_message: "Syntax error"
/// precision: 6
/// start_minimized: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Text written to the result slot when evaluation fails
    pub error_message: String,
    /// Maximum fractional digits shown for results
    pub precision: usize,
    /// Start in minimized size mode
    pub start_minimized: bool,
    /// Accept keyboard input (buttons always work)
    pub keyboard_enabled: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            error_message: Self::DEFAULT_ERROR_MESSAGE.to_string(),
            precision: Self::DEFAULT_PRECISION,
            start_minimized: false,
            keyboard_enabled: true,
        }
    }
}

impl CalculatorConfig {
    /// Result text for a failed evaluation
    pub const DEFAULT_ERROR_MESSAGE: &'static str = "Not a correct mathematical expression";

    /// Default fractional digits
    pub const DEFAULT_PRECISION: usize = 10;

    /// Largest precision an `f64` can meaningfully show
    pub const MAX_PRECISION: usize = 17;

    /// Create a default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the evaluation error text
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Set the result precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Start minimized
    #[must_use]
    pub const fn with_start_minimized(mut self, minimized: bool) -> Self {
        self.start_minimized = minimized;
        self
    }

    /// Enable or disable keyboard input
    #[must_use]
    pub const fn with_keyboard(mut self, enabled: bool) -> Self {
        self.keyboard_enabled = enabled;
        self
    }

    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > Self::MAX_PRECISION {
            return Err(ConfigError::invalid(format!(
                "precision {} exceeds maximum of {}",
                self.precision,
                Self::MAX_PRECISION
            )));
        }
        if self.error_message.is_empty() {
            return Err(ConfigError::invalid("error_message must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.error_message,
            "Not a correct mathematical expression"
        );
        assert_eq!(config.precision, 10);
        assert!(!config.start_minimized);
        assert!(config.keyboard_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = CalculatorConfig::new()
            .with_error_message("Syntax error")
            .with_precision(4)
            .with_start_minimized(true)
            .with_keyboard(false);
        assert_eq!(config.error_message, "Syntax error");
        assert_eq!(config.precision, 4);
        assert!(config.start_minimized);
        assert!(!config.keyboard_enabled);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = CalculatorConfig::from_yaml_str("precision: 3\n").unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(
            config.error_message,
            CalculatorConfig::DEFAULT_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = CalculatorConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = CalculatorConfig::from_yaml_str("colour: red\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_precision_out_of_range() {
        let result = CalculatorConfig::from_yaml_str("precision: 40\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_empty_error_message_rejected() {
        let result = CalculatorConfig::from_yaml_str("error_message: \"\"\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "error_message: Bad input").unwrap();
        writeln!(file, "start_minimized: true").unwrap();
        let config = CalculatorConfig::load(file.path()).unwrap();
        assert_eq!(config.error_message, "Bad input");
        assert!(config.start_minimized);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CalculatorConfig::load(&dir.path().join("missing.yaml"));
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.yaml"));
    }
}
