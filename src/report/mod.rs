// Report module - decides what a run result means for the build

pub mod params;

pub use params::{ENV_TESTGATE_REPORTS_DIRECTORY, ReportParameters, default_reports_directory};

use crate::error::FailureSignal;
use crate::logging::ConsoleLogger;
use crate::state::RunResult;

pub const NO_TESTS_MESSAGE: &str =
    "No tests were executed!  (Set -DfailIfNoTests=false to ignore this error.)";

pub const FORK_FAILURE_MESSAGE: &str = "There was a timeout or other error in the fork";

/// Non-failing decisions about a run result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to report
    Success,
    /// A failure was downgraded and logged at error level
    Warned(String),
}

/// Classify a run result.
///
/// Zero executed tests only fail when `fail_if_no_tests` is set. Failing runs
/// and broken forks are downgraded to one error-level log line when
/// `test_failure_ignore` is set; otherwise a broken fork raises
/// [`FailureSignal::Execution`] and plain test failures raise
/// [`FailureSignal::TestFailure`].
pub fn report_execution(
    params: &ReportParameters,
    result: &RunResult,
    log: &dyn ConsoleLogger,
) -> Result<Outcome, FailureSignal> {
    let timeout_or_other_failure = result.is_failure_or_timeout();

    if !timeout_or_other_failure {
        if result.completed_count == 0 {
            if params.fail_if_no_tests() {
                return Err(FailureSignal::execution(NO_TESTS_MESSAGE));
            }
            return Ok(Outcome::Success);
        }

        if result.is_error_free() {
            return Ok(Outcome::Success);
        }
    }

    let message = if timeout_or_other_failure {
        FORK_FAILURE_MESSAGE.to_string()
    } else {
        test_failures_message(params)
    };

    if params.test_failure_ignore {
        log.error(&message);
        Ok(Outcome::Warned(message))
    } else if result.is_failure() {
        Err(FailureSignal::execution(message))
    } else {
        Err(FailureSignal::test_failure(message))
    }
}

fn test_failures_message(params: &ReportParameters) -> String {
    format!(
        "There are test failures.\n\nPlease refer to {} for the individual test results.",
        params.reports_directory.display()
    )
}
