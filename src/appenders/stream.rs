//! Appender over any `Write` implementation

use crate::core::{Appender, Result};
use std::io::Write;

/// Writes lines to a caller-supplied byte stream
///
/// # Example
///
/// ```
/// use variadic_logger::appenders::{Appender, StreamAppender};
///
/// let mut appender = StreamAppender::new(Vec::new());
/// appender.write_line("ready\n").unwrap();
/// assert_eq!(appender.get_ref().as_slice(), b"ready\n");
/// ```
pub struct StreamAppender<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> StreamAppender<W> {
    pub fn new(writer: W) -> Self {
        Self::named("stream", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Appender for StreamAppender<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
