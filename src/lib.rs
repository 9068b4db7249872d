//! # Variadic Logger
//!
//! A multi-sink logging library with a positional template engine.
//!
//! ## Features
//!
//! - **Templates**: `{index[:spec]}` placeholders with fill, alignment, sign,
//!   width, precision and presentation types
//! - **Streaming**: `logger.info() << "value" << 42` with iostream-style
//!   manipulators
//! - **Multiple Sinks**: stdout, stderr, files and arbitrary writers, each
//!   class with its own threshold
//! - **Asynchronous Delivery**: a [`LogManager`] moves all sink I/O to one
//!   background thread and keeps a registry of named loggers
//!
//! ```
//! use variadic_logger::prelude::*;
//!
//! let logger = Logger::console("app", LogLevel::Info);
//! logger.info_fmt("{0:<8}|{1:>8.3f}", &[&"ratio", &0.5]).unwrap();
//! let _ = logger.warning() << "retrying in" << 5 << "s";
//! ```

pub mod appenders;
pub mod core;
pub mod format;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, StreamAppender};
    pub use crate::core::stream::{quote, yes_no};
    pub use crate::core::{
        Appender, Event, LogLevel, LogManager, LogOption, LogOptions, LogWorker, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, ManagerConfig, Result,
        TimestampFormat,
    };
    pub use crate::format::{display, render, FormatArg, Template};
}

pub use appenders::{ConsoleAppender, FileAppender, StreamAppender};
pub use core::{
    current_thread_id, current_timestamp, get_logger, set_logger, Appender, Event, LogLevel,
    LogManager, LogOption, LogOptions, LogWorker, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, ManagerConfig, Result, SharedAppender, TimestampFormat,
};
pub use format::{FormatError, Template};
