//! Per-call accumulator for streamed log lines

use super::log_level::LogLevel;
use super::log_options::{LogOption, LogOptions};
use super::logger::Logger;
use super::stream::{Manip, StreamStyle, Streamable};
use super::line;
use crate::format::{render_value, Value};
use std::ops::Shl;

/// Builds one streamed line and dispatches it when dropped
///
/// The prelude is rendered when the worker is created. Every token is
/// appended to a private buffer followed by a space (unless
/// `NoInterTokenSpace` is set), and the finished line goes to the logger's
/// sinks exactly once, however often the worker is moved in between.
///
/// # Example
///
/// ```
/// use variadic_logger::{LogLevel, LogOption, Logger};
///
/// let logger = Logger::console("app", LogLevel::Debug);
/// logger.set(LogOption::NoTimestamp);
///
/// let mut line = logger.info();
/// for step in ["fetch", "build", "test"] {
///     line.put(step);
/// }
/// line.put("done");
/// // dispatched here
/// drop(line);
/// ```
#[must_use = "a worker dispatches its line when dropped"]
pub struct LogWorker {
    logger: Option<Logger>,
    level: LogLevel,
    line: String,
    options: LogOptions,
    /// false when no sink takes `level`; tokens are then ignored
    active: bool,
    quote_next: bool,
    style: StreamStyle,
}

impl LogWorker {
    pub(crate) fn new(logger: Logger, level: LogLevel) -> Self {
        let (line, options, active) = match logger.begin_line(level) {
            Some((line, options)) => (line, options, true),
            None => (String::new(), LogOptions::empty(), false),
        };

        Self {
            logger: Some(logger),
            level,
            line,
            options,
            active,
            quote_next: false,
            style: StreamStyle::default(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether the line will reach at least one sink
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The line accumulated so far, prelude included
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Append a value or apply a manipulator
    pub fn put<T: Streamable>(&mut self, token: T) -> &mut Self {
        token.stream_into(self);
        self
    }

    /// Dispatch the line now
    pub fn finish(self) {
        drop(self);
    }

    /// Drop the line without dispatching it
    pub fn discard(mut self) {
        self.logger = None;
    }

    pub(crate) fn push_value(&mut self, value: &Value<'_>) {
        let spec = self.style.next_spec(value.class());
        if !self.active {
            self.quote_next = false;
            return;
        }

        let text = render_value(value, &spec);
        if std::mem::take(&mut self.quote_next) {
            self.line.push('"');
            self.line.push_str(&text);
            self.line.push('"');
        } else {
            self.line.push_str(&text);
        }

        if !self.options.contains(LogOption::NoInterTokenSpace) {
            self.line.push(' ');
        }
    }

    pub(crate) fn apply(&mut self, manip: Manip) {
        match manip {
            Manip::Quote => self.quote_next = true,
            other => self.style.apply(other),
        }
    }
}

impl<T: Streamable> Shl<T> for LogWorker {
    type Output = LogWorker;

    fn shl(mut self, token: T) -> LogWorker {
        token.stream_into(&mut self);
        self
    }
}

impl Drop for LogWorker {
    fn drop(&mut self) {
        let Some(logger) = self.logger.take() else {
            return;
        };
        if !self.active {
            return;
        }

        let mut line = std::mem::take(&mut self.line);
        line::write_epilog(&mut line, self.options);
        logger.dispatch(self.level, line);
    }
}
