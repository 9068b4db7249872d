//! Integration tests for the logger system
//!
//! These tests verify:
//! - Line layout of templated and streamed messages
//! - Option handling shared between clones
//! - Threshold routing across sink classes
//! - File sinks and JSON configuration
//! - The manager registry and asynchronous delivery

use parking_lot::Mutex;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use variadic_logger::core::stream::{fixed, hex, quote, setprecision, showbase, yes_no};
use variadic_logger::prelude::*;
use variadic_logger::{critical, current_thread_id, get_logger, info, set_logger, warning};

static MANAGER_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// In-memory sink shared with the test
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
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

fn all_tags_off() -> LogOptions {
    LogOption::NoTimestamp
        | LogOption::NoLoggerNameTag
        | LogOption::NoThreadIdTag
        | LogOption::NoLevelTag
}

#[test]
fn test_streamed_hello_with_all_tags_off() {
    let capture = Capture::default();
    let logger = Logger::stream("hello", capture.clone(), LogLevel::Debug);
    logger.set(all_tags_off());

    let _ = logger.debug() << "Hello";

    assert_eq!(capture.text(), "Hello \n");
}

#[test]
fn test_full_prelude_layout() {
    let capture = Capture::default();
    let logger = Logger::stream("layout", capture.clone(), LogLevel::Debug);

    logger.warning_fmt("{0} {1}", &[&"disk", &91]).unwrap();

    let text = capture.text();
    let (timestamp, rest) = text.split_at(19);
    assert_eq!(&timestamp[4..5], "-");
    assert_eq!(&timestamp[13..14], ":");
    assert_eq!(
        rest,
        format!(" [layout] 0x{} <Warning> disk 91\n", current_thread_id())
    );
}

#[test]
fn test_templated_logging_inserts_no_spaces() {
    let capture = Capture::default();
    let logger = Logger::stream("t", capture.clone(), LogLevel::Debug);
    logger.set(all_tags_off());

    logger.info_fmt("{0}{1}{0}", &[&"ab", &1]).unwrap();
    info!(logger, "{0:*^7}", "mid").unwrap();

    assert_eq!(capture.lines(), vec!["ab1ab", "****mid"]);
}

#[test]
fn test_streamed_manipulators() {
    let capture = Capture::default();
    let logger = Logger::stream("s", capture.clone(), LogLevel::Debug);
    logger.set(all_tags_off());

    let _ = logger.info()
        << "addr"
        << hex()
        << showbase()
        << 4096
        << fixed()
        << setprecision(2)
        << 1.23456
        << quote()
        << "eth0"
        << yes_no(true);

    assert_eq!(capture.text(), "addr 0x1000 1.23 \"eth0\" yes \n");
}

#[test]
fn test_clones_share_options() {
    let capture = Capture::default();
    let logger = Logger::stream("shared", capture.clone(), LogLevel::Debug);
    let clone = logger.clone();
    let independent = Logger::stream("shared", Capture::default(), LogLevel::Debug);

    clone.set(all_tags_off());

    assert_eq!(logger.options(), all_tags_off());
    assert!(independent.options().is_empty());

    let _ = logger.debug() << "Hello";
    assert_eq!(capture.text(), "Hello \n");
}

#[test]
fn test_format_errors_reach_the_caller() {
    let capture = Capture::default();
    let logger = Logger::stream("errors", capture.clone(), LogLevel::Debug);

    let err = logger.info_fmt("{0:.2}", &[&5]).unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("{0:.2}"));

    assert!(warning!(logger, "{0:x}", 1.5).is_err());
    assert!(critical!(logger, "unclosed {0", 1).is_err());
    assert!(capture.text().is_empty());
}

#[test]
fn test_sink_classes_are_independent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let errors = temp_dir.path().join("errors.log");
    let everything = temp_dir.path().join("all.log");

    let logger = Logger::new("files");
    logger.set(LogOption::NoTimestamp | LogOption::NoThreadIdTag);
    assert!(logger.add_file(&everything, LogLevel::Debug));
    logger.set_console_err(LogLevel::NoLogging);

    logger.debug_fmt("debug", &[]).unwrap();
    logger.error_fmt("error", &[]).unwrap();

    // a second file resets the shared threshold
    assert!(logger.add_file(&errors, LogLevel::Error));
    logger.debug_fmt("dropped", &[]).unwrap();
    logger.critical_fmt("critical", &[]).unwrap();
    logger.flush().expect("Failed to flush");

    let all = fs::read_to_string(&everything).expect("Failed to read log file");
    assert_eq!(
        all,
        "[files] <Debug> debug\n[files] <Error> error\n[files] <Critical> critical\n"
    );
    let errs = fs::read_to_string(&errors).expect("Failed to read log file");
    assert_eq!(errs, "[files] <Critical> critical\n");
}

#[test]
fn test_add_file_reports_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::new("bad");
    let missing = temp_dir.path().join("missing").join("x.log");

    assert!(!logger.add_file(&missing, LogLevel::Debug));
    let err = logger.try_add_file(&missing, LogLevel::Debug).unwrap_err();
    assert!(matches!(err, LoggerError::FileAppenderError { .. }));
}

#[test]
fn test_logger_from_json_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");
    let json = format!(
        r#"{{
            "name": "configured",
            "files": [{{ "path": {:?}, "level": "Info" }}],
            "options": ["NoTimestamp", "NoThreadIdTag", "NoLevelTag"],
            "timestamp": "Millis"
        }}"#,
        log_file.to_string_lossy()
    );

    let config = LoggerConfig::from_json(&json).expect("valid config");
    let logger = Logger::from_config(&config).expect("logger from config");
    assert_eq!(logger.timestamp_format(), TimestampFormat::Millis);

    logger.debug_fmt("skipped", &[]).unwrap();
    logger.info_fmt("kept {0:,}", &[&1234567]).unwrap();
    drop(logger);

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[configured] kept 1,234,567\n");
}

#[test]
fn test_registry_round_trip() {
    let _guard = MANAGER_LOCK.lock();

    assert!(matches!(
        get_logger("early"),
        Err(LoggerError::ManagerNotInitialized)
    ));

    let manager = LogManager::new().expect("manager");
    assert!(matches!(LogManager::new(), Err(LoggerError::ManagerAlreadyRunning)));

    let capture = Capture::default();
    let custom = Logger::stream("svc", capture.clone(), LogLevel::Info);
    custom.set(all_tags_off());
    set_logger(&custom).expect("registry available");

    let resolved = get_logger("svc").expect("registry available");
    assert!(resolved.ptr_eq(&custom));
    info!(resolved, "via {0}", "queue").unwrap();
    let _ = resolved.info() << "streamed" << 2;

    assert!(manager.wait_idle(Duration::from_secs(5)));
    drop(manager);

    assert_eq!(capture.lines(), vec!["via queue", "streamed 2 "]);
    assert!(matches!(
        get_logger("svc"),
        Err(LoggerError::ManagerNotInitialized)
    ));
}

#[test]
fn test_event_signals_across_threads() {
    let event = Arc::new(Event::new());
    let signaler = Arc::clone(&event);

    let handle = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(10));
        signaler.signal();
    });

    event.wait();
    assert!(event.is_signaled());
    handle.join().unwrap();
}
