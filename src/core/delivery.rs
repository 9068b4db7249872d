//! Writing finished lines to their sinks

use super::appender::{Appender, SharedAppender};
use super::error::Result;
use super::metrics::LoggerMetrics;
use crate::appenders::ConsoleAppender;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Sinks a line goes to, resolved when the line is dispatched
#[derive(Clone)]
pub(crate) struct Destinations {
    pub console_out: bool,
    pub console_err: bool,
    pub sinks: Vec<SharedAppender>,
    pub flush: bool,
    pub metrics: Arc<LoggerMetrics>,
}

impl Destinations {
    pub fn is_empty(&self) -> bool {
        !self.console_out && !self.console_err && self.sinks.is_empty()
    }

    /// Write `line` to every destination
    ///
    /// Each sink is isolated: an error or panic in one is reported on stderr
    /// and counted, and the remaining sinks still receive the line.
    pub fn deliver(&self, line: &str) {
        if self.console_out {
            self.write_to(&mut ConsoleAppender::stdout(), line);
        }
        if self.console_err {
            self.write_to(&mut ConsoleAppender::stderr(), line);
        }
        for sink in &self.sinks {
            let mut appender = sink.lock();
            self.write_to(&mut **appender, line);
        }
    }

    fn write_to(&self, appender: &mut dyn Appender, line: &str) {
        let flush = self.flush;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> Result<()> {
            appender.write_line(line)?;
            if flush {
                appender.flush()?;
            }
            Ok(())
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}. \
                     Other appenders continue to function.",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
                self.metrics.record_write_failure();
            }
        }
    }
}

/// A rendered line waiting in the manager's queue
pub(crate) struct PendingDelivery {
    pub line: String,
    pub destinations: Destinations,
}

impl PendingDelivery {
    pub fn deliver(self) {
        self.destinations.deliver(&self.line);
    }
}

pub(crate) fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::StreamAppender;
    use crate::core::appender::shared;
    use crate::core::error::LoggerError;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            Err(LoggerError::writer("disk full"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn destinations(sinks: Vec<SharedAppender>) -> Destinations {
        Destinations {
            console_out: false,
            console_err: false,
            sinks,
            flush: true,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[test]
    fn test_failures_are_isolated() {
        let healthy = Arc::new(parking_lot::Mutex::new(Vec::<u8>::new()));
        let capture = SharedVec(healthy.clone());

        let dest = destinations(vec![
            shared(FailingAppender),
            shared(PanickingAppender),
            shared(StreamAppender::new(capture)),
        ]);
        dest.deliver("still delivered\n");

        assert_eq!(healthy.lock().as_slice(), b"still delivered\n");
        assert_eq!(dest.metrics.write_failures(), 2);
    }

    #[test]
    fn test_empty_destinations() {
        let dest = destinations(Vec::new());
        assert!(dest.is_empty());
    }

    #[test]
    fn test_panic_message() {
        let boxed: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(boxed.as_ref()), "static message");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(boxed.as_ref()), "owned");
        let boxed: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(boxed.as_ref()), "Unknown panic");
    }

    struct SharedVec(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl std::io::Write for SharedVec {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
