//! Line prelude and epilog

use super::log_level::LogLevel;
use super::log_options::{LogOption, LogOptions};
use super::timestamp::TimestampFormat;
use std::fmt::Write as _;
use std::thread;

thread_local! {
    static THREAD_ID: String = compute_thread_id();
}

fn compute_thread_id() -> String {
    // ThreadId's Debug output is "ThreadId(N)"
    let debug = format!("{:?}", thread::current().id());
    let digits: String = debug.chars().filter(char::is_ascii_digit).collect();
    match digits.parse::<u64>() {
        Ok(id) => format!("{:x}", id),
        Err(_) => digits,
    }
}

/// Hex id of the calling thread, without the `0x` prefix
pub fn current_thread_id() -> String {
    THREAD_ID.with(|id| id.clone())
}

/// Write `<timestamp> [<name>] 0x<tid> <Level> ` honoring `options`
pub(crate) fn write_prelude(
    out: &mut String,
    name: &str,
    level: LogLevel,
    options: LogOptions,
    timestamp: &TimestampFormat,
) {
    if !options.contains(LogOption::NoTimestamp) {
        out.push_str(&timestamp.now());
        out.push(' ');
    }
    if !options.contains(LogOption::NoLoggerNameTag) {
        let _ = write!(out, "[{}] ", name);
    }
    if !options.contains(LogOption::NoThreadIdTag) {
        THREAD_ID.with(|id| {
            let _ = write!(out, "0x{} ", id);
        });
    }
    if !options.contains(LogOption::NoLevelTag) {
        let _ = write!(out, "<{}> ", level);
    }
}

pub(crate) fn write_epilog(out: &mut String, options: LogOptions) {
    if !options.contains(LogOption::NoTrailingNewline) {
        out.push('\n');
    }
}
