//! Core logger types and traits

pub mod appender;
pub mod config;
mod delivery;
pub mod error;
pub mod event;
mod line;
pub mod log_level;
pub mod log_options;
pub mod logger;
pub mod manager;
pub mod metrics;
pub mod stream;
pub mod timestamp;
pub mod worker;

pub use appender::{Appender, SharedAppender};
pub use config::{FileSinkConfig, LoggerConfig};
pub use error::{LoggerError, Result};
pub use event::Event;
pub use line::current_thread_id;
pub use log_level::LogLevel;
pub use log_options::{LogOption, LogOptions};
pub use logger::{Logger, LoggerBuilder};
pub use manager::{get_logger, set_logger, LogManager, ManagerConfig, DEFAULT_POLL_INTERVAL};
pub use metrics::LoggerMetrics;
pub use stream::{Manip, Streamable};
pub use timestamp::{current_timestamp, TimestampFormat};
pub use worker::LogWorker;
