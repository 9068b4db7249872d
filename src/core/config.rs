//! Declarative logger configuration

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::log_options::LogOption;
use super::logger::Logger;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file sink in a [`LoggerConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSinkConfig {
    pub path: PathBuf,
    pub level: LogLevel,
}

/// Serializable description of a logger
///
/// Missing fields take their defaults: both consoles disabled, no files, no
/// options, `Seconds` timestamps.
///
/// # Example
///
/// ```
/// use variadic_logger::{LogLevel, Logger, LoggerConfig};
///
/// let config = LoggerConfig::from_json(
///     r#"{ "name": "api", "console_err": "Warning", "options": ["NoThreadIdTag"] }"#,
/// )
/// .unwrap();
///
/// let logger = Logger::from_config(&config).unwrap();
/// assert_eq!(logger.console_err_level(), LogLevel::Warning);
/// assert_eq!(logger.console_out_level(), LogLevel::NoLogging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub console_out: LogLevel,
    pub console_err: LogLevel,
    pub files: Vec<FileSinkConfig>,
    pub options: Vec<LogOption>,
    pub timestamp: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            console_out: LogLevel::NoLogging,
            console_err: LogLevel::NoLogging,
            files: Vec::new(),
            options: Vec::new(),
            timestamp: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LoggerError::config("LoggerConfig", "name must not be empty"));
        }
        if let Some(file) = self.files.iter().find(|f| f.level == LogLevel::NoLogging) {
            return Err(LoggerError::config(
                "LoggerConfig",
                format!("file '{}' has level NoLogging", file.path.display()),
            ));
        }
        Ok(())
    }
}

impl Logger {
    /// Build a logger from `config`, opening its files
    pub fn from_config(config: &LoggerConfig) -> Result<Logger> {
        config.validate()?;

        let mut builder = Logger::builder()
            .name(config.name.clone())
            .console_out(config.console_out)
            .console_err(config.console_err)
            .timestamp_format(config.timestamp.clone());

        for option in &config.options {
            builder = builder.option(*option);
        }
        for file in &config.files {
            builder = builder.file(file.path.clone(), file.level);
        }

        builder.build()
    }
}
