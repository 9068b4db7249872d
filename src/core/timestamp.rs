//! Timestamp formatting for the line prelude
//!
//! Timestamps are rendered in local time with `chrono`.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

/// Timestamp format of the line prelude
///
/// # Examples
///
/// ```
/// use variadic_logger::core::TimestampFormat;
///
/// // Local time with a custom strftime pattern
/// let format = TimestampFormat::Custom("%H:%M".to_string());
/// assert_eq!(format.now().len(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08 10:30:45`
    #[default]
    Seconds,

    /// `2025-01-08 10:30:45.123`
    Millis,

    /// Any strftime-compatible pattern
    Custom(String),
}

impl TimestampFormat {
    /// The strftime pattern behind this format
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            TimestampFormat::Seconds => "%Y-%m-%d %H:%M:%S",
            TimestampFormat::Millis => "%Y-%m-%d %H:%M:%S%.3f",
            TimestampFormat::Custom(pattern) => pattern,
        }
    }

    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        datetime.format(self.pattern()).to_string()
    }

    /// Current local time in this format
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}

/// Current local time as `%Y-%m-%d %H:%M:%S`
pub fn current_timestamp() -> String {
    TimestampFormat::Seconds.now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123 UTC
        NaiveDate::from_ymd_opt(2025, 1, 8)
            .and_then(|date| date.and_hms_milli_opt(10, 30, 45, 123))
            .expect("valid datetime")
            .and_utc()
    }

    #[test]
    fn test_seconds_format() {
        assert_eq!(
            TimestampFormat::Seconds.format(&fixed_datetime()),
            "2025-01-08 10:30:45"
        );
    }

    #[test]
    fn test_millis_format() {
        assert_eq!(
            TimestampFormat::Millis.format(&fixed_datetime()),
            "2025-01-08 10:30:45.123"
        );
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
        assert_eq!(format.format(&fixed_datetime()), "08/Jan/2025:10:30:45");
    }

    #[test]
    fn test_current_timestamp_shape() {
        let ts = current_timestamp();
        assert_eq!(ts.len(), "2025-01-08 10:30:45".len());
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }

    #[test]
    fn test_default_is_seconds() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Seconds);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&TimestampFormat::Millis).expect("serialize");
        assert_eq!(json, "\"Millis\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
