//! Rendering options of a logger

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// One rendering switch; every option turns a default behavior off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogOption {
    NoTrailingNewline,
    NoLevelTag,
    NoTimestamp,
    NoFlushPerWrite,
    NoLoggerNameTag,
    NoThreadIdTag,
    NoInterTokenSpace,
}

impl LogOption {
    pub const ALL: [LogOption; 7] = [
        LogOption::NoTrailingNewline,
        LogOption::NoLevelTag,
        LogOption::NoTimestamp,
        LogOption::NoFlushPerWrite,
        LogOption::NoLoggerNameTag,
        LogOption::NoThreadIdTag,
        LogOption::NoInterTokenSpace,
    ];

    #[inline]
    pub const fn bit(self) -> u32 {
        match self {
            LogOption::NoTrailingNewline => 1 << 0,
            LogOption::NoLevelTag => 1 << 1,
            LogOption::NoTimestamp => 1 << 2,
            LogOption::NoFlushPerWrite => 1 << 3,
            LogOption::NoLoggerNameTag => 1 << 4,
            LogOption::NoThreadIdTag => 1 << 5,
            LogOption::NoInterTokenSpace => 1 << 6,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogOption::NoTrailingNewline => "NoTrailingNewline",
            LogOption::NoLevelTag => "NoLevelTag",
            LogOption::NoTimestamp => "NoTimestamp",
            LogOption::NoFlushPerWrite => "NoFlushPerWrite",
            LogOption::NoLoggerNameTag => "NoLoggerNameTag",
            LogOption::NoThreadIdTag => "NoThreadIdTag",
            LogOption::NoInterTokenSpace => "NoInterTokenSpace",
        }
    }
}

impl fmt::Display for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogOption::ALL
            .into_iter()
            .find(|opt| opt.to_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid log option: '{}'", s))
    }
}

/// Bitset of [`LogOption`]s; empty means every tag is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogOptions(u32);

impl LogOptions {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, opt: LogOption) -> bool {
        self.0 & opt.bit() == opt.bit()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, opts: impl Into<LogOptions>) {
        self.0 |= opts.into().0;
    }

    pub fn remove(&mut self, opts: impl Into<LogOptions>) {
        self.0 &= !opts.into().0;
    }

    pub fn iter(self) -> impl Iterator<Item = LogOption> {
        LogOption::ALL
            .into_iter()
            .filter(move |opt| self.contains(*opt))
    }
}

impl From<LogOption> for LogOptions {
    fn from(opt: LogOption) -> Self {
        Self(opt.bit())
    }
}

impl FromIterator<LogOption> for LogOptions {
    fn from_iter<I: IntoIterator<Item = LogOption>>(iter: I) -> Self {
        let mut opts = LogOptions::empty();
        for opt in iter {
            opts.insert(opt);
        }
        opts
    }
}

impl BitOr for LogOption {
    type Output = LogOptions;

    fn bitor(self, rhs: LogOption) -> LogOptions {
        LogOptions(self.bit() | rhs.bit())
    }
}

impl BitOr<LogOption> for LogOptions {
    type Output = LogOptions;

    fn bitor(self, rhs: LogOption) -> LogOptions {
        LogOptions(self.0 | rhs.bit())
    }
}

impl BitOr for LogOptions {
    type Output = LogOptions;

    fn bitor(self, rhs: LogOptions) -> LogOptions {
        LogOptions(self.0 | rhs.0)
    }
}
