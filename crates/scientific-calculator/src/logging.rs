//! Logging setup for the `scicalc` binary
//!
//! The calculator logs through `tracing`. The binary installs a
//! `tracing-subscriber` formatter once at startup. `RUST_LOG` overrides the
//! level chosen here.
//!
//! The terminal UI owns the screen, so in that mode log lines only go to a
//! file. One-shot evaluation logs to stderr.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Where log lines are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    #[default]
    Stderr,
    /// Append to a file
    File(PathBuf),
    /// Logging disabled
    Off,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// Use `debug` as the default filter
    pub verbose: bool,
    /// Destination
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: "info".to_string(),
            verbose: false,
            target: LogTarget::Stderr,
        }
    }
}

impl LoggingConfig {
    /// Stderr logging at `info` (or `debug` when verbose)
    #[must_use]
    pub fn stderr(verbose: bool) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// File logging, or none when `path` is `None`
    #[must_use]
    pub fn file_or_off(path: Option<&Path>, verbose: bool) -> Self {
        let target = path.map_or(LogTarget::Off, |p| LogTarget::File(p.to_path_buf()));
        Self {
            verbose,
            target,
            ..Self::default()
        }
    }

    /// Sets the output format
    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Builds the level filter, honoring `RUST_LOG`
    #[must_use]
    pub fn filter(&self) -> EnvFilter {
        let fallback = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    }

    /// Installs the global subscriber.
    ///
    /// A second call is a no-op. Fails only when the log file cannot be
    /// opened.
    pub fn init(&self) -> std::io::Result<()> {
        let filter = self.filter();
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        // try_init errors only when a subscriber is already installed
        let _ = match (&self.target, self.format) {
            (LogTarget::Off, _) => return Ok(()),
            (LogTarget::Stderr, LogFormat::Text) => {
                builder.with_writer(std::io::stderr).try_init()
            }
            (LogTarget::Stderr, LogFormat::Json) => {
                builder.json().with_writer(std::io::stderr).try_init()
            }
            (LogTarget::File(path), format) => {
                let file = File::options().create(true).append(true).open(path)?;
                let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
                match format {
                    LogFormat::Text => builder.try_init(),
                    LogFormat::Json => builder.json().try_init(),
                }
            }
        };
        Ok(())
    }
}
