//! Appender implementations

pub mod console;
pub mod file;
pub mod stream;

pub use console::{ConsoleAppender, ConsoleTarget};
pub use file::FileAppender;
pub use stream::StreamAppender;

pub use crate::core::appender::{shared, Appender, SharedAppender};
