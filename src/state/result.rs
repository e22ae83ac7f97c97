// Run result structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome record of one test-execution attempt (forked or in-process)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunResult {
    pub completed_count: u32,
    pub errors: u32,
    pub failures: u32,
    pub skipped: u32,
    pub flakes: u32,
    /// Set when the fork or the tooling around it broke
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    pub timeout: bool,
}

impl RunResult {
    /// Create a result from the counters of a finished run
    pub fn new(completed_count: u32, errors: u32, failures: u32, skipped: u32) -> Self {
        Self {
            completed_count,
            errors,
            failures,
            skipped,
            ..Self::default()
        }
    }

    /// Create a result for a run that executed nothing
    pub fn no_tests_run() -> Self {
        Self::default()
    }

    /// Mark a previous result as timed out, keeping its counters
    pub fn timeout(previous: &RunResult) -> Self {
        Self {
            timeout: true,
            ..previous.clone()
        }
    }

    /// Mark a previous result as failed in the fork, keeping its counters
    pub fn failure(previous: &RunResult, message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..previous.clone()
        }
    }

    /// Combine the results of two forks; counters saturate at `u32::MAX`
    pub fn aggregate(&self, other: &RunResult) -> Self {
        Self {
            completed_count: self.completed_count.saturating_add(other.completed_count),
            errors: self.errors.saturating_add(other.errors),
            failures: self.failures.saturating_add(other.failures),
            skipped: self.skipped.saturating_add(other.skipped),
            flakes: self.flakes.saturating_add(other.flakes),
            failure: self.failure.clone().or_else(|| other.failure.clone()),
            timeout: self.timeout || other.timeout,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    pub fn is_timeout(&self) -> bool {
        self.timeout
    }

    pub fn is_failure_or_timeout(&self) -> bool {
        self.is_failure() || self.is_timeout()
    }

    /// No failed or erroneous tests and a healthy fork
    pub fn is_error_free(&self) -> bool {
        self.errors == 0 && self.failures == 0 && !self.is_failure_or_timeout()
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tests run: {}, Failures: {}, Errors: {}, Skipped: {}",
            self.completed_count, self.failures, self.errors, self.skipped
        )?;
        if self.flakes > 0 {
            write!(f, ", Flakes: {}", self.flakes)?;
        }
        Ok(())
    }
}
