//! Leveled logger that writes formatted messages to the process error log.

#[macro_use]
extern crate error_chain;

mod level;
mod logger;
mod report;
mod value;

mod error {
    error_chain! {
        errors {
            InvalidLevel(value: i64) {
                description("invalid minimum level")
                display("invalid minimum level {}, expected 1..=6", value)
            }
        }
    }
}

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::level::Severity;
pub use crate::logger::{
    init, CallSite, ErrorLogLogger, LogMessage, Sink, StderrSink, DEFAULT_LEVEL,
};
pub use crate::report::{render_backtrace, CallKind, ErrorReport, Frame};
pub use crate::value::Value;

#[cfg(test)]
mod tests {
    use crate::logger::test_sink::CaptureSink;
    use crate::{CallKind, CallSite, ErrorLogLogger, ErrorReport, Frame, Severity};
    use std::sync::Arc;

    fn sample_report() -> ErrorReport {
        ErrorReport::new("boom", "worker.rs", 12).frame(
            Frame::new("run")
                .at("worker.rs", 12)
                .scope("Worker", CallKind::Instance)
                .arg("job-7")
                .arg(3),
        )
    }

    fn logger_with_capture(level: Severity) -> (Arc<CaptureSink>, ErrorLogLogger) {
        let sink = Arc::new(CaptureSink::default());
        let logger = ErrorLogLogger::with_sink(level, Arc::clone(&sink));
        (sink, logger)
    }

    #[test]
    fn warn_with_resolvable_call_site() {
        let (sink, logger) = logger_with_capture(Severity::Warn);
        logger.log_at(
            Severity::Warn,
            "disk full",
            None,
            CallSite::new("job.x", 42).caller("Worker->run"),
        );
        assert_eq!(
            sink.lines(),
            vec!["WARN: job.x(42) Worker->run -> disk full".to_string()]
        );
    }

    #[test]
    fn info_below_warn_minimum_is_silent() {
        let (sink, logger) = logger_with_capture(Severity::Warn);
        logger.info("heartbeat", None, &[]);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn report_as_message_skips_call_site_resolution() {
        let (sink, logger) = logger_with_capture(Severity::Error);
        logger.error(&sample_report(), None, &[]);
        assert_eq!(
            sink.lines(),
            vec![
                "ERROR: Message: boom\nFile: worker.rs\nLine: 12\nStacktrace:\n\
                 In worker.rs at line 12: Worker->run(\"job-7\", 3)\n"
                    .to_string()
            ]
        );
    }

    #[test]
    fn fatal_with_explicit_error_appends_the_report_block() {
        let (sink, logger) = logger_with_capture(Severity::Trace);
        let report = sample_report();
        logger.log_at(
            Severity::Fatal,
            "x",
            Some(&report),
            CallSite::new("main.rs", 3).caller("App::boot"),
        );
        assert_eq!(
            sink.lines(),
            vec![
                "FATAL: main.rs(3) App::boot -> x\n\
                 Message: boom\nFile: worker.rs\nLine: 12\nStacktrace:\n\
                 In worker.rs at line 12: Worker->run(\"job-7\", 3)\n"
                    .to_string()
            ]
        );
    }

    #[test]
    fn report_as_message_with_explicit_error_keeps_both() {
        let (sink, logger) = logger_with_capture(Severity::Trace);
        let as_message = ErrorReport::new("first", "a.rs", 1);
        let explicit = ErrorReport::new("second", "b.rs", 2);
        logger.log_at(
            Severity::Error,
            &as_message,
            Some(&explicit),
            CallSite::new("main.rs", 9),
        );
        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("ERROR: main.rs(9)  -> first\n"));
        assert!(lines[0].contains("Message: second"));
    }

    #[test]
    fn level_property_drives_configuration() {
        let level = Severity::from_value(4).unwrap();
        let (sink, logger) = logger_with_capture(level);
        logger.warn("up", None, &[]);
        logger.debug("down", None, &[]);
        assert_eq!(sink.lines().len(), 1);
        assert!(Severity::from_value(0).is_err());
    }
}
