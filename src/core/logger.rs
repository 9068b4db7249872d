//! Main logger implementation

use super::{
    appender::{shared, Appender, SharedAppender},
    delivery::{Destinations, PendingDelivery},
    error::{LoggerError, Result},
    line,
    log_level::LogLevel,
    log_options::{LogOption, LogOptions},
    manager::ManagerShared,
    metrics::LoggerMetrics,
    timestamp::TimestampFormat,
    worker::LogWorker,
};
use crate::appenders::{FileAppender, StreamAppender};
use crate::format::{self, FormatArg};
use parking_lot::RwLock;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Weak};

/// A named, cloneable logging handle
///
/// A logger has three sink classes, each with its own threshold: console-out,
/// console-err, and any number of extra sinks (files, streams, custom
/// appenders) that share a single threshold. Clones alias the same state, so
/// changing a threshold or option through one clone is visible through all.
///
/// # Example
///
/// ```
/// use variadic_logger::{LogLevel, LogOption, Logger};
///
/// let logger = Logger::console("app", LogLevel::Info);
/// logger.set(LogOption::NoTimestamp | LogOption::NoThreadIdTag);
///
/// logger.info_fmt("{0} items in {1:.1f}s", &[&42, &1.25]).unwrap();
/// let _ = logger.warning() << "disk at" << 91 << "%";
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    name: String,
    state: RwLock<LoggerState>,
    metrics: Arc<LoggerMetrics>,
}

struct LoggerState {
    console_out: LogLevel,
    console_err: LogLevel,
    sinks_level: LogLevel,
    sinks: Vec<SharedAppender>,
    options: LogOptions,
    timestamp_format: TimestampFormat,
    /// Background writer this logger enqueues on, if any
    manager: Option<Weak<ManagerShared>>,
}

impl LoggerState {
    fn destinations(&self, level: LogLevel, metrics: &Arc<LoggerMetrics>) -> Destinations {
        let sinks = if self.sinks_level.admits(level) {
            self.sinks.clone()
        } else {
            Vec::new()
        };

        Destinations {
            console_out: self.console_out.admits(level),
            console_err: self.console_err.admits(level),
            sinks,
            flush: !self.options.contains(LogOption::NoFlushPerWrite),
            metrics: Arc::clone(metrics),
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        self.console_out.admits(level)
            || self.console_err.admits(level)
            || (!self.sinks.is_empty() && self.sinks_level.admits(level))
    }
}

impl Logger {
    /// A logger with every sink class disabled
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                name: name.into(),
                state: RwLock::new(LoggerState {
                    console_out: LogLevel::NoLogging,
                    console_err: LogLevel::NoLogging,
                    sinks_level: LogLevel::NoLogging,
                    sinks: Vec::new(),
                    options: LogOptions::empty(),
                    timestamp_format: TimestampFormat::default(),
                    manager: None,
                }),
                metrics: Arc::new(LoggerMetrics::new()),
            }),
        }
    }

    /// A logger writing to stdout at `level` and above
    #[must_use]
    pub fn console(name: impl Into<String>, level: LogLevel) -> Self {
        let logger = Self::new(name);
        logger.set_console_out(level);
        logger
    }

    /// A logger writing to stderr at `level` and above
    #[must_use]
    pub fn console_err(name: impl Into<String>, level: LogLevel) -> Self {
        let logger = Self::new(name);
        logger.set_console_err(level);
        logger
    }

    /// A logger appending to the file at `path`
    pub fn file(name: impl Into<String>, path: impl AsRef<Path>, level: LogLevel) -> Result<Self> {
        let logger = Self::new(name);
        logger.try_add_file(path, level)?;
        Ok(logger)
    }

    /// A logger writing to `writer`
    #[must_use]
    pub fn stream<W: Write + Send + 'static>(
        name: impl Into<String>,
        writer: W,
        level: LogLevel,
    ) -> Self {
        let logger = Self::new(name);
        logger.add_stream(writer, level);
        logger
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether both handles alias the same logger state
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn set_console_out(&self, level: LogLevel) {
        self.inner.state.write().console_out = level;
    }

    pub fn set_console_err(&self, level: LogLevel) {
        self.inner.state.write().console_err = level;
    }

    pub fn console_out_level(&self) -> LogLevel {
        self.inner.state.read().console_out
    }

    pub fn console_err_level(&self) -> LogLevel {
        self.inner.state.read().console_err
    }

    /// Threshold shared by every extra sink
    pub fn sinks_level(&self) -> LogLevel {
        self.inner.state.read().sinks_level
    }

    pub fn sink_count(&self) -> usize {
        self.inner.state.read().sinks.len()
    }

    /// Append to the file at `path`, reporting why it could not be opened
    ///
    /// All extra sinks share one threshold: `level` replaces the threshold
    /// of sinks added earlier.
    pub fn try_add_file(&self, path: impl AsRef<Path>, level: LogLevel) -> Result<()> {
        let path = path.as_ref();
        if level == LogLevel::NoLogging {
            return Err(LoggerError::config(
                "Logger",
                format!("file sink '{}' added at NoLogging", path.display()),
            ));
        }
        let appender = FileAppender::new(path)?;
        self.push_sink(shared(appender), level);
        Ok(())
    }

    /// Append to the file at `path`; false if it could not be opened
    pub fn add_file(&self, path: impl AsRef<Path>, level: LogLevel) -> bool {
        match self.try_add_file(path, level) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("[LOGGER WARNING] {}: {}", self.name(), e);
                false
            }
        }
    }

    /// Write to `writer`; false if `level` is `NoLogging`
    pub fn add_stream<W: Write + Send + 'static>(&self, writer: W, level: LogLevel) -> bool {
        self.add_appender(StreamAppender::new(writer), level)
    }

    pub fn add_appender<A: Appender + 'static>(&self, appender: A, level: LogLevel) -> bool {
        self.add_shared(shared(appender), level)
    }

    /// Add an appender that may also be owned elsewhere
    pub fn add_shared(&self, appender: SharedAppender, level: LogLevel) -> bool {
        if level == LogLevel::NoLogging {
            return false;
        }
        self.push_sink(appender, level);
        true
    }

    fn push_sink(&self, appender: SharedAppender, level: LogLevel) {
        let mut state = self.inner.state.write();
        state.sinks.push(appender);
        state.sinks_level = level;
    }

    /// Remove every extra sink; console sinks are untouched
    pub fn clear_sinks(&self) {
        let mut state = self.inner.state.write();
        state.sinks.clear();
        state.sinks_level = LogLevel::NoLogging;
    }

    pub fn set(&self, options: impl Into<LogOptions>) {
        self.inner.state.write().options.insert(options);
    }

    pub fn unset(&self, options: impl Into<LogOptions>) {
        self.inner.state.write().options.remove(options);
    }

    /// Clear every option; thresholds and sinks are kept
    pub fn reset(&self) {
        self.inner.state.write().options = LogOptions::empty();
    }

    pub fn options(&self) -> LogOptions {
        self.inner.state.read().options
    }

    pub fn is_set(&self, option: LogOption) -> bool {
        self.inner.state.read().options.contains(option)
    }

    pub fn set_timestamp_format(&self, format: TimestampFormat) {
        self.inner.state.write().timestamp_format = format;
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        self.inner.state.read().timestamp_format.clone()
    }

    /// Whether any sink class would take a message at `level`
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.inner.state.read().is_enabled(level)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    /// Whether lines are handed to a live background writer
    pub fn is_queued(&self) -> bool {
        self.inner
            .state
            .read()
            .manager
            .as_ref()
            .is_some_and(|manager| manager.strong_count() > 0)
    }

    pub fn flush(&self) -> Result<()> {
        let sinks = self.inner.state.read().sinks.clone();
        for sink in sinks {
            sink.lock().flush()?;
        }
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    /// Render `template` with `args` and log it at `level`
    ///
    /// The template is rendered even when no sink takes `level`, so a
    /// malformed template is reported regardless of thresholds.
    pub fn log(&self, level: LogLevel, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        let (enabled, options, timestamp_format) = {
            let state = self.inner.state.read();
            (
                state.is_enabled(level),
                state.options,
                state.timestamp_format.clone(),
            )
        };

        if !enabled {
            format::render(template, args)?;
            return Ok(());
        }

        let mut line = String::with_capacity(64 + template.len());
        line::write_prelude(&mut line, self.name(), level, options, &timestamp_format);
        format::render_into(&mut line, template, args)?;
        line::write_epilog(&mut line, options);
        self.dispatch(level, line);
        Ok(())
    }

    pub fn debug_fmt(&self, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        self.log(LogLevel::Debug, template, args)
    }

    pub fn info_fmt(&self, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        self.log(LogLevel::Info, template, args)
    }

    pub fn warning_fmt(&self, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        self.log(LogLevel::Warning, template, args)
    }

    pub fn error_fmt(&self, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        self.log(LogLevel::Error, template, args)
    }

    pub fn critical_fmt(&self, template: &str, args: &[&dyn FormatArg]) -> Result<()> {
        self.log(LogLevel::Critical, template, args)
    }

    /// Start a streamed line at `level`
    pub fn worker(&self, level: LogLevel) -> LogWorker {
        LogWorker::new(self.clone(), level)
    }

    pub fn debug(&self) -> LogWorker {
        self.worker(LogLevel::Debug)
    }

    pub fn info(&self) -> LogWorker {
        self.worker(LogLevel::Info)
    }

    pub fn warning(&self) -> LogWorker {
        self.worker(LogLevel::Warning)
    }

    pub fn error(&self) -> LogWorker {
        self.worker(LogLevel::Error)
    }

    pub fn critical(&self) -> LogWorker {
        self.worker(LogLevel::Critical)
    }

    /// Prelude of a streamed line, or `None` if no sink takes `level`
    pub(crate) fn begin_line(&self, level: LogLevel) -> Option<(String, LogOptions)> {
        let state = self.inner.state.read();
        if !state.is_enabled(level) {
            return None;
        }
        let mut line = String::with_capacity(64);
        line::write_prelude(
            &mut line,
            self.name(),
            level,
            state.options,
            &state.timestamp_format,
        );
        Some((line, state.options))
    }

    /// Hand a finished line to the sinks that take `level`
    pub(crate) fn dispatch(&self, level: LogLevel, line: String) {
        let (destinations, manager) = {
            let state = self.inner.state.read();
            (
                state.destinations(level, &self.inner.metrics),
                state.manager.as_ref().and_then(Weak::upgrade),
            )
        };

        if destinations.is_empty() {
            return;
        }
        self.inner.metrics.record_dispatched();

        let pending = PendingDelivery { line, destinations };
        match manager {
            Some(manager) => {
                // a manager that stopped accepting hands the line back
                if let Err(pending) = manager.enqueue(pending) {
                    pending.deliver();
                }
            }
            None => pending.deliver(),
        }
    }

    pub(crate) fn attach(&self, manager: Weak<ManagerShared>) {
        self.inner.state.write().manager = Some(manager);
    }

    pub(crate) fn detach(&self) {
        self.inner.state.write().manager = None;
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("console_out", &state.console_out)
            .field("console_err", &state.console_err)
            .field("sinks_level", &state.sinks_level)
            .field("sinks", &state.sinks.len())
            .field("options", &state.options)
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// # Example
///
/// ```
/// use variadic_logger::{LogLevel, LogOption, Logger};
///
/// let logger = Logger::builder()
///     .name("worker")
///     .console_err(LogLevel::Error)
///     .stream(Vec::new(), LogLevel::Debug)
///     .option(LogOption::NoTimestamp)
///     .build()
///     .unwrap();
///
/// assert_eq!(logger.sink_count(), 1);
/// ```
pub struct LoggerBuilder {
    name: String,
    console_out: LogLevel,
    console_err: LogLevel,
    files: Vec<(PathBuf, LogLevel)>,
    appenders: Vec<(SharedAppender, LogLevel)>,
    options: LogOptions,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            console_out: LogLevel::NoLogging,
            console_err: LogLevel::NoLogging,
            files: Vec::new(),
            appenders: Vec::new(),
            options: LogOptions::empty(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn console_out(mut self, level: LogLevel) -> Self {
        self.console_out = level;
        self
    }

    #[must_use]
    pub fn console_err(mut self, level: LogLevel) -> Self {
        self.console_err = level;
        self
    }

    /// Add a file sink; the file is opened by [`build`](Self::build)
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>, level: LogLevel) -> Self {
        self.files.push((path.into(), level));
        self
    }

    #[must_use]
    pub fn stream<W: Write + Send + 'static>(self, writer: W, level: LogLevel) -> Self {
        self.appender(StreamAppender::new(writer), level)
    }

    #[must_use]
    pub fn appender<A: Appender + 'static>(mut self, appender: A, level: LogLevel) -> Self {
        self.appenders.push((shared(appender), level));
        self
    }

    #[must_use]
    pub fn option(mut self, option: LogOption) -> Self {
        self.options.insert(option);
        self
    }

    #[must_use]
    pub fn options(mut self, options: impl Into<LogOptions>) -> Self {
        self.options.insert(options);
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn build(self) -> Result<Logger> {
        if self.name.is_empty() {
            return Err(LoggerError::config("LoggerBuilder", "name must not be empty"));
        }

        let logger = Logger::new(self.name);
        logger.set_console_out(self.console_out);
        logger.set_console_err(self.console_err);
        logger.set(self.options);
        logger.set_timestamp_format(self.timestamp_format);

        for (appender, level) in self.appenders {
            logger.add_shared(appender, level);
        }
        for (path, level) in self.files {
            logger.try_add_file(&path, level)?;
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn bare(name: &str, level: LogLevel) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::stream(name, capture.clone(), level);
        logger.set(LogOption::NoTimestamp | LogOption::NoThreadIdTag);
        (logger, capture)
    }

    #[test]
    fn test_templated_line() {
        let (logger, capture) = bare("app", LogLevel::Debug);
        logger.info_fmt("{0} + {1} = {2}", &[&1, &2, &3]).unwrap();
        assert_eq!(capture.text(), "[app] <Info> 1 + 2 = 3\n");
    }

    #[test]
    fn test_threshold_filters() {
        let (logger, capture) = bare("app", LogLevel::Warning);
        logger.info_fmt("hidden", &[]).unwrap();
        logger.error_fmt("shown", &[]).unwrap();
        assert_eq!(capture.text(), "[app] <Error> shown\n");
        assert_eq!(logger.metrics().dispatched(), 1);
    }

    #[test]
    fn test_format_error_when_filtered() {
        let (logger, capture) = bare("app", LogLevel::Critical);
        let err = logger.debug_fmt("{0:d}", &[&"text"]).unwrap_err();
        assert!(err.is_format());
        assert!(capture.text().is_empty());
    }

    #[test]
    fn test_no_logging_is_never_logged() {
        let (logger, capture) = bare("app", LogLevel::Debug);
        logger.log(LogLevel::NoLogging, "never", &[]).unwrap();
        assert!(capture.text().is_empty());
    }

    #[test]
    fn test_last_added_sink_level_wins() {
        let (logger, first) = bare("app", LogLevel::Debug);
        let second = Capture::default();
        assert!(logger.add_stream(second.clone(), LogLevel::Error));
        assert_eq!(logger.sinks_level(), LogLevel::Error);

        logger.info_fmt("info", &[]).unwrap();
        logger.error_fmt("error", &[]).unwrap();

        assert_eq!(first.text(), "[app] <Error> error\n");
        assert_eq!(second.text(), "[app] <Error> error\n");
    }

    #[test]
    fn test_add_stream_at_no_logging_is_rejected() {
        let logger = Logger::new("app");
        assert!(!logger.add_stream(Vec::new(), LogLevel::NoLogging));
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_add_file_failure() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new("app");
        assert!(!logger.add_file(dir.path().join("no/such/dir/app.log"), LogLevel::Debug));
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let (logger, capture) = bare("app", LogLevel::Debug);
        let clone = logger.clone();
        clone.set(LogOption::NoLevelTag | LogOption::NoLoggerNameTag);

        assert!(logger.is_set(LogOption::NoLevelTag));
        assert!(logger.ptr_eq(&clone));

        logger.info_fmt("shared", &[]).unwrap();
        assert_eq!(capture.text(), "shared\n");

        let other = Logger::new("app");
        assert!(!other.is_set(LogOption::NoLevelTag));
        assert!(!other.ptr_eq(&logger));
    }

    #[test]
    fn test_reset_keeps_sinks() {
        let (logger, capture) = bare("app", LogLevel::Debug);
        logger.reset();
        assert!(logger.options().is_empty());
        assert_eq!(logger.sink_count(), 1);

        logger.set(LogOption::NoTimestamp | LogOption::NoThreadIdTag);
        logger.unset(LogOption::NoThreadIdTag);
        logger.info_fmt("x", &[]).unwrap();
        assert!(capture.text().starts_with("[app] 0x"));
    }

    #[test]
    fn test_clear_sinks() {
        let (logger, capture) = bare("app", LogLevel::Debug);
        logger.clear_sinks();
        assert!(!logger.is_enabled(LogLevel::Critical));
        logger.critical_fmt("dropped", &[]).unwrap();
        assert!(capture.text().is_empty());
    }

    #[test]
    fn test_builder_requires_name() {
        let err = LoggerBuilder::new().build().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_builder() {
        let capture = Capture::default();
        let logger = Logger::builder()
            .name("built")
            .stream(capture.clone(), LogLevel::Info)
            .options(LogOption::NoTimestamp | LogOption::NoThreadIdTag | LogOption::NoTrailingNewline)
            .build()
            .unwrap();

        logger.warning_fmt("{0:>4}", &[&7]).unwrap();
        assert_eq!(capture.text(), "[built] <Warning>    7");
    }
}
