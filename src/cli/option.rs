// Command-line options mirrored from the invoking build

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::host::{HostSession, Probe};
use crate::logging::ConsoleLogger;

const REACTOR_PREFIX: &str = "REACTOR_";

/// A flag describing the invoking build's verbosity or failure behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandLineOption {
    LoggingLevelError,
    LoggingLevelWarn,
    LoggingLevelInfo,
    LoggingLevelDebug,
    ShowErrors,
    ReactorFailFast,
    ReactorFailAtEnd,
    ReactorFailNever,
}

impl CommandLineOption {
    pub const ALL: [CommandLineOption; 8] = [
        Self::LoggingLevelError,
        Self::LoggingLevelWarn,
        Self::LoggingLevelInfo,
        Self::LoggingLevelDebug,
        Self::ShowErrors,
        Self::ReactorFailFast,
        Self::ReactorFailAtEnd,
        Self::ReactorFailNever,
    ];

    /// Symbolic name, as passed on to subprocesses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoggingLevelError => "LOGGING_LEVEL_ERROR",
            Self::LoggingLevelWarn => "LOGGING_LEVEL_WARN",
            Self::LoggingLevelInfo => "LOGGING_LEVEL_INFO",
            Self::LoggingLevelDebug => "LOGGING_LEVEL_DEBUG",
            Self::ShowErrors => "SHOW_ERRORS",
            Self::ReactorFailFast => "REACTOR_FAIL_FAST",
            Self::ReactorFailAtEnd => "REACTOR_FAIL_AT_END",
            Self::ReactorFailNever => "REACTOR_FAIL_NEVER",
        }
    }

    /// Map a raw host failure behaviour (`FAIL_FAST` or `REACTOR_FAIL_FAST`)
    pub fn from_failure_behavior(raw: &str) -> Option<Self> {
        if raw.starts_with(REACTOR_PREFIX) {
            raw.parse().ok()
        } else {
            format!("{}{}", REACTOR_PREFIX, raw).parse().ok()
        }
    }
}

impl fmt::Display for CommandLineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommandLineOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| format!("Unknown command line option: {}", s))
    }
}

/// Ordered, read-only list of collected options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandLineOptions(Vec<CommandLineOption>);

impl CommandLineOptions {
    pub fn contains(&self, option: CommandLineOption) -> bool {
        self.0.contains(&option)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommandLineOption> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[CommandLineOption] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for CommandLineOptions {
    type Target = [CommandLineOption];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CommandLineOptions {
    type Item = &'a CommandLineOption;
    type IntoIter = std::slice::Iter<'a, CommandLineOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Snapshot the invoking build's verbosity and failure behaviour.
///
/// Every enabled logging level contributes its own flag. The session is then
/// probed for its execution request; any accessor the host version lacks ends
/// probing quietly and the flags gathered so far are returned.
pub fn command_line_options(
    session: &dyn HostSession,
    log: &dyn ConsoleLogger,
) -> CommandLineOptions {
    let mut cli = Vec::new();

    if log.is_error_enabled() {
        cli.push(CommandLineOption::LoggingLevelError);
    }

    if log.is_warning_enabled() {
        cli.push(CommandLineOption::LoggingLevelWarn);
    }

    if log.is_info_enabled() {
        cli.push(CommandLineOption::LoggingLevelInfo);
    }

    if log.is_debug_enabled() {
        cli.push(CommandLineOption::LoggingLevelDebug);
    }

    probe_request(session, &mut cli);

    CommandLineOptions(cli)
}

fn probe_request(session: &dyn HostSession, cli: &mut Vec<CommandLineOption>) -> Option<()> {
    let request = session.request().supported()?;

    if request.is_show_errors() {
        cli.push(CommandLineOption::ShowErrors);
    }

    let option = request
        .failure_behavior()
        .or_else_probe(|| request.reactor_failure_behavior())
        .map(|behavior| {
            behavior
                .as_deref()
                .and_then(CommandLineOption::from_failure_behavior)
        })
        .supported()??;

    cli.push(option);
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ExecutionRequest, HostApi, StaticSession};
    use crate::logging::test_support::RecordingLogger;

    struct NoRequestSession;

    impl HostSession for NoRequestSession {}

    struct ShowErrorsOnly;

    impl ExecutionRequest for ShowErrorsOnly {
        fn is_show_errors(&self) -> bool {
            true
        }
    }

    struct ShowErrorsOnlySession(ShowErrorsOnly);

    impl HostSession for ShowErrorsOnlySession {
        fn request(&self) -> Probe<&dyn ExecutionRequest> {
            Probe::Supported(&self.0 as &dyn ExecutionRequest)
        }
    }

    #[test]
    fn test_only_debug_enabled() {
        let log = RecordingLogger::with_levels(true, false, false, false);
        let cli = command_line_options(&NoRequestSession, &log);
        assert_eq!(cli.as_slice(), &[CommandLineOption::LoggingLevelDebug]);
    }

    #[test]
    fn test_all_levels_enabled_in_ascending_order() {
        let log = RecordingLogger::with_levels(true, true, true, true);
        let cli = command_line_options(&NoRequestSession, &log);
        assert_eq!(
            cli.as_slice(),
            &[
                CommandLineOption::LoggingLevelError,
                CommandLineOption::LoggingLevelWarn,
                CommandLineOption::LoggingLevelInfo,
                CommandLineOption::LoggingLevelDebug,
            ]
        );
    }

    #[test]
    fn test_missing_request_keeps_levels() {
        let log = RecordingLogger::with_levels(false, true, true, true);
        let session = StaticSession::new(HostApi::Legacy, true, Some("FAIL_FAST".into()));
        let cli = command_line_options(&session, &log);
        assert_eq!(cli.len(), 3);
        assert!(!cli.contains(CommandLineOption::ShowErrors));
        assert!(!cli.contains(CommandLineOption::ReactorFailFast));
    }

    #[test]
    fn test_show_errors_survives_missing_failure_behavior_accessors() {
        let log = RecordingLogger::default();
        let cli = command_line_options(&ShowErrorsOnlySession(ShowErrorsOnly), &log);
        assert_eq!(cli.as_slice(), &[CommandLineOption::ShowErrors]);
    }

    #[test]
    fn test_current_host_failure_behavior() {
        let log = RecordingLogger::with_levels(false, false, false, true);
        let session = StaticSession::new(HostApi::Current, true, Some("FAIL_AT_END".into()));
        let cli = command_line_options(&session, &log);
        assert_eq!(
            cli.as_slice(),
            &[
                CommandLineOption::LoggingLevelError,
                CommandLineOption::ShowErrors,
                CommandLineOption::ReactorFailAtEnd,
            ]
        );
    }

    #[test]
    fn test_classic_host_falls_back_to_reactor_accessor() {
        let log = RecordingLogger::default();
        let session =
            StaticSession::new(HostApi::Classic, false, Some("REACTOR_FAIL_NEVER".into()));
        let cli = command_line_options(&session, &log);
        assert_eq!(cli.as_slice(), &[CommandLineOption::ReactorFailNever]);
    }

    #[test]
    fn test_unmapped_failure_behavior_is_absent() {
        let log = RecordingLogger::default();
        let session = StaticSession::new(HostApi::Current, true, Some("fail-fast".into()));
        let cli = command_line_options(&session, &log);
        assert_eq!(cli.as_slice(), &[CommandLineOption::ShowErrors]);
    }

    #[test]
    fn test_from_failure_behavior_prefix_rule() {
        assert_eq!(
            CommandLineOption::from_failure_behavior("FAIL_FAST"),
            Some(CommandLineOption::ReactorFailFast)
        );
        assert_eq!(
            CommandLineOption::from_failure_behavior("REACTOR_FAIL_FAST"),
            Some(CommandLineOption::ReactorFailFast)
        );
        assert_eq!(CommandLineOption::from_failure_behavior("SHOW_ERRORS"), None);
        assert_eq!(CommandLineOption::from_failure_behavior(""), None);
    }

    #[test]
    fn test_symbolic_names() {
        for option in CommandLineOption::ALL {
            assert_eq!(option.as_str().parse::<CommandLineOption>(), Ok(option));
            assert_eq!(option.to_string(), option.as_str());
        }
        assert!("logging_level_debug".parse::<CommandLineOption>().is_err());
    }

    #[test]
    fn test_serializes_as_symbolic_names() {
        let cli = CommandLineOptions(vec![
            CommandLineOption::LoggingLevelInfo,
            CommandLineOption::ReactorFailAtEnd,
        ]);
        assert_eq!(
            serde_json::to_string(&cli).expect("options serialize"),
            r#"["LOGGING_LEVEL_INFO","REACTOR_FAIL_AT_END"]"#
        );
    }
}
