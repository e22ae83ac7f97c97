//! Failure signals raised when a run result halts the build.

/// A build-halting decision about a run result.
///
/// The two kinds map to different exit semantics upstream: `Execution` is a
/// tooling failure (the fork broke, or the run was misconfigured), while
/// `TestFailure` is a failed quality gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureSignal {
    /// The fork or the tooling around it failed.
    #[error("{message}")]
    Execution { message: String },

    /// Tests ran and some of them failed.
    #[error("{message}")]
    TestFailure { message: String },
}

impl FailureSignal {
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    pub fn test_failure(message: impl Into<String>) -> Self {
        Self::TestFailure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Execution { message } | Self::TestFailure { message } => message,
        }
    }

    /// Process exit code for this signal
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Execution { .. } => 2,
            Self::TestFailure { .. } => 1,
        }
    }
}
