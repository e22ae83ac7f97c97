use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use crate::cli::CommandLineOption;

/// Logging façade handed to the report procedures.
///
/// Level predicates are a snapshot of the host's configuration; several
/// levels may be enabled at once.
pub trait ConsoleLogger {
    fn is_debug_enabled(&self) -> bool;
    fn is_info_enabled(&self) -> bool;
    fn is_warning_enabled(&self) -> bool;
    fn is_error_enabled(&self) -> bool;

    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// `ConsoleLogger` backed by the installed `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ConsoleLogger for TracingLogger {
    fn is_debug_enabled(&self) -> bool {
        tracing::enabled!(Level::DEBUG)
    }

    fn is_info_enabled(&self) -> bool {
        tracing::enabled!(Level::INFO)
    }

    fn is_warning_enabled(&self) -> bool {
        tracing::enabled!(Level::WARN)
    }

    fn is_error_enabled(&self) -> bool {
        tracing::enabled!(Level::ERROR)
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Relay verbose diagnostic text only when the host asked for it.
///
/// With `LOGGING_LEVEL_DEBUG` the text always goes to debug. With
/// `SHOW_ERRORS` alone it goes to debug if the logger has debug on, and to
/// info otherwise. Without either flag nothing is logged.
pub fn log_debug_or_cli_show_errors(
    text: &str,
    log: &dyn ConsoleLogger,
    cli: &[CommandLineOption],
) {
    if cli.contains(&CommandLineOption::LoggingLevelDebug) {
        log.debug(text);
    } else if cli.contains(&CommandLineOption::ShowErrors) {
        if log.is_debug_enabled() {
            log.debug(text);
        } else {
            log.info(text);
        }
    }
}

/// Filter directive for the binary's verbosity flags
pub fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "testgate=debug,warn"
    } else if quiet {
        "error"
    } else {
        "testgate=info,warn"
    }
}

pub struct CustomFormatter;

impl<S, N> FormatEvent<S, N> for CustomFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = event.metadata().level();
        let timestamp = Local::now().format("%H:%M:%S");

        let (emoji, level_str) = level_prefix(level);

        write!(writer, "{} {} [{}]: ", emoji, level_str, timestamp)?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_prefix(level: &Level) -> (&'static str, &'static str) {
    match *level {
        Level::TRACE => ("🔬", "TRACE"),
        Level::DEBUG => ("🐛", "DEBUG"),
        Level::INFO => ("ℹ️ ", "INFO"),
        Level::WARN => ("⚠️ ", "WARN"),
        Level::ERROR => ("❌", "ERROR"),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ConsoleLogger;
    use std::cell::RefCell;

    /// Records every message per sink; levels are toggled per test
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        pub debug_enabled: bool,
        pub info_enabled: bool,
        pub warning_enabled: bool,
        pub error_enabled: bool,
        pub lines: RefCell<Vec<(&'static str, String)>>,
    }

    impl RecordingLogger {
        pub fn with_levels(debug: bool, info: bool, warning: bool, error: bool) -> Self {
            Self {
                debug_enabled: debug,
                info_enabled: info,
                warning_enabled: warning,
                error_enabled: error,
                lines: RefCell::default(),
            }
        }

        pub fn lines(&self) -> Vec<(&'static str, String)> {
            self.lines.borrow().clone()
        }
    }

    impl ConsoleLogger for RecordingLogger {
        fn is_debug_enabled(&self) -> bool {
            self.debug_enabled
        }

        fn is_info_enabled(&self) -> bool {
            self.info_enabled
        }

        fn is_warning_enabled(&self) -> bool {
            self.warning_enabled
        }

        fn is_error_enabled(&self) -> bool {
            self.error_enabled
        }

        fn debug(&self, message: &str) {
            self.lines.borrow_mut().push(("debug", message.to_string()));
        }

        fn info(&self, message: &str) {
            self.lines.borrow_mut().push(("info", message.to_string()));
        }

        fn warning(&self, message: &str) {
            self.lines.borrow_mut().push(("warning", message.to_string()));
        }

        fn error(&self, message: &str) {
            self.lines.borrow_mut().push(("error", message.to_string()));
        }
    }
}
