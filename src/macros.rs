//! Logging macros for templated log calls.
//!
//! The macros take the logger, a template in the placeholder syntax of
//! [`format`](crate::format), and any number of arguments, and return the
//! [`Result`](crate::Result) of [`Logger::log`](crate::Logger::log).
//!
//! # Examples
//!
//! ```
//! use variadic_logger::prelude::*;
//! use variadic_logger::info;
//!
//! let logger = Logger::console("server", LogLevel::Info);
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // Positional arguments, reused and reordered
//! let port = 8080;
//! info!(logger, "listening on {0}, health check on {0}/{1}", port, "healthz")?;
//! # Ok::<(), variadic_logger::LoggerError>(())
//! ```

/// Log a templated message at the given level.
///
/// # Examples
///
/// ```
/// # use variadic_logger::prelude::*;
/// # let logger = Logger::console("app", LogLevel::Debug);
/// use variadic_logger::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {0:#x}", 500).unwrap();
/// assert!(log!(logger, LogLevel::Error, "{0:d}", "not a number").is_err());
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log(
            $level,
            $template,
            &[$(&$arg as &dyn $crate::format::FormatArg),*],
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use variadic_logger::prelude::*;
/// # let logger = Logger::console("app", LogLevel::Debug);
/// use variadic_logger::debug;
/// debug!(logger, "Counter value: {0}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use variadic_logger::prelude::*;
/// # let logger = Logger::console("app", LogLevel::Debug);
/// use variadic_logger::warning;
/// warning!(logger, "Retry attempt {0} of {1}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use variadic_logger::prelude::*;
/// # let logger = Logger::console_err("app", LogLevel::Error);
/// use variadic_logger::critical;
/// critical!(logger, "Unable to recover from error: {0}", "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
