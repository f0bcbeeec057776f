//! The logger itself, its sink seam, and the facade glue.

use crate::level::Severity;
use crate::report::ErrorReport;
use crate::value::Value;
use log::{Metadata, Record, SetLoggerError};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Minimum level the installer persists when none is chosen.
pub const DEFAULT_LEVEL: Severity = Severity::Warn;

/// Write primitive for finished log text. One call per emitted message,
/// fire-and-forget.
pub trait Sink: Send + Sync {
    fn write(&self, text: &str);
}

impl<S: Sink> Sink for Arc<S> {
    fn write(&self, text: &str) {
        (**self).write(text)
    }
}

/// Best-effort write to the process error log.
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, text: &str) {
        eprintln!("{}", text);
    }
}

/// Message argument: plain text, or an error report that formats itself.
pub enum LogMessage<'a> {
    Text(&'a str),
    Report(&'a ErrorReport),
}

impl<'a> From<&'a str> for LogMessage<'a> {
    fn from(text: &'a str) -> LogMessage<'a> {
        LogMessage::Text(text)
    }
}

impl<'a> From<&'a ErrorReport> for LogMessage<'a> {
    fn from(report: &'a ErrorReport) -> LogMessage<'a> {
        LogMessage::Report(report)
    }
}

/// Where a logging call came from: file, line, and optionally who called
/// the code that logged.
#[derive(Clone, Debug)]
pub struct CallSite {
    file: String,
    line: u32,
    caller: Option<String>,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> CallSite {
        CallSite {
            file: file.into(),
            line,
            caller: None,
        }
    }

    /// Qualifier for the enclosing caller, e.g. `Worker->run`.
    pub fn caller(mut self, qualifier: impl Into<String>) -> CallSite {
        self.caller = Some(qualifier.into());
        self
    }

    fn from_location(location: &'static Location<'static>) -> CallSite {
        CallSite::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {}",
            self.file,
            self.line,
            self.caller.as_deref().unwrap_or("")
        )
    }
}

/// A logger that writes leveled messages to the process error log.
///
/// Messages strictly below the configured minimum level are dropped. The
/// third parameter of the severity methods is accepted for interface
/// compatibility and ignored by this logger.
pub struct ErrorLogLogger {
    level: Severity,
    sink: Box<dyn Sink>,
}

impl ErrorLogLogger {
    pub fn new(level: Severity) -> ErrorLogLogger {
        ErrorLogLogger::with_sink(level, StderrSink)
    }

    pub fn with_sink<S: Sink + 'static>(level: Severity, sink: S) -> ErrorLogLogger {
        ErrorLogLogger {
            level,
            sink: Box::new(sink),
        }
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    #[track_caller]
    pub fn trace<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Trace >= self.level {
            self.emit(
                Severity::Trace,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    #[track_caller]
    pub fn debug<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Debug >= self.level {
            self.emit(
                Severity::Debug,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    #[track_caller]
    pub fn info<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Info >= self.level {
            self.emit(
                Severity::Info,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    #[track_caller]
    pub fn warn<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Warn >= self.level {
            self.emit(
                Severity::Warn,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    #[track_caller]
    pub fn error<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Error >= self.level {
            self.emit(
                Severity::Error,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    #[track_caller]
    pub fn fatal<'a>(
        &self,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        _additional: &[(&str, Value)],
    ) {
        if Severity::Fatal >= self.level {
            self.emit(
                Severity::Fatal,
                message.into(),
                error,
                CallSite::from_location(Location::caller()),
            );
        }
    }

    /// Logs with an explicitly supplied call site instead of the captured
    /// one. This is the path for callers that know who invoked them.
    pub fn log_at<'a>(
        &self,
        level: Severity,
        message: impl Into<LogMessage<'a>>,
        error: Option<&ErrorReport>,
        site: CallSite,
    ) {
        if level >= self.level {
            self.emit(level, message.into(), error, site);
        }
    }

    fn emit(
        &self,
        level: Severity,
        message: LogMessage<'_>,
        error: Option<&ErrorReport>,
        site: CallSite,
    ) {
        let text = match (message, error) {
            (LogMessage::Report(report), None) => format!("{}: {}", level, report.render()),
            (LogMessage::Text(text), None) => format!("{}: {} -> {}", level, site, text),
            (LogMessage::Text(text), Some(report)) => {
                format!("{}: {} -> {}\n{}", level, site, text, report.render())
            }
            // A report in message position next to an explicit report: its
            // message text stands in for the string message.
            (LogMessage::Report(as_message), Some(report)) => format!(
                "{}: {} -> {}\n{}",
                level,
                site,
                as_message.message(),
                report.render()
            ),
        };
        self.sink.write(&text);
    }
}

impl Default for ErrorLogLogger {
    fn default() -> ErrorLogLogger {
        ErrorLogLogger::new(DEFAULT_LEVEL)
    }
}

impl log::Log for ErrorLogLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Severity::from(metadata.level()) >= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );
        if let Some(module) = record.module_path() {
            site = site.caller(module);
        }
        let message = record.args().to_string();
        self.emit(
            Severity::from(record.level()),
            LogMessage::Text(&message),
            None,
            site,
        );
    }

    fn flush(&self) {}
}

/// Registers a logger writing to the process error log as the global facade
/// logger. Fails if a logger is already installed.
pub fn init(level: Severity) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ErrorLogLogger::new(level)))
        .map(|()| log::set_max_level(level.to_level_filter()))
}
