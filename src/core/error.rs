//! Error types for the logger system

use crate::format::FormatError;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Malformed template or argument mismatch in a templated log call
    #[error(transparent)]
    Format(#[from] FormatError),

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// File sink could not be opened
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Logger configuration could not be parsed
    #[error("Failed to parse logger configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A second log manager was created while one is live
    #[error("A LogManager is already running; only one may exist at a time")]
    ManagerAlreadyRunning,

    /// Registry used before any log manager was created
    #[error("No LogManager is running; create one before using the logger registry")]
    ManagerNotInitialized,

    /// Registry used while the live log manager is shutting down
    #[error("The LogManager is shutting down; the logger registry is no longer available")]
    ManagerShuttingDown,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Whether this error came from the template engine
    pub fn is_format(&self) -> bool {
        matches!(self, LoggerError::Format(_))
    }
}
