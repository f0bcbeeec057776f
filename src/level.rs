use crate::error::*;
use std::fmt;

/// Severity of a log message. Lower values are more verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Trace = 1,
    Debug = 2,
    Info = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
}

impl Severity {
    /// Parses the integer form of the `level` property. Anything outside
    /// 1..=6 is rejected.
    pub fn from_value(value: i64) -> Result<Severity> {
        match value {
            1 => Ok(Severity::Trace),
            2 => Ok(Severity::Debug),
            3 => Ok(Severity::Info),
            4 => Ok(Severity::Warn),
            5 => Ok(Severity::Error),
            6 => Ok(Severity::Fatal),
            v => Err(ErrorKind::InvalidLevel(v).into()),
        }
    }

    pub fn value(self) -> i64 {
        self as i64
    }

    /// Tag written in front of every emitted message.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Most permissive facade filter that still lets qualifying records
    /// through. The facade has no FATAL, so FATAL shares the ERROR filter;
    /// the logger's own filter stays authoritative.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Severity::Trace => log::LevelFilter::Trace,
            Severity::Debug => log::LevelFilter::Debug,
            Severity::Info => log::LevelFilter::Info,
            Severity::Warn => log::LevelFilter::Warn,
            Severity::Error | Severity::Fatal => log::LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Severity {
        match level {
            log::Level::Trace => Severity::Trace,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}
