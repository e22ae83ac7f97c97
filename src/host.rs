//! Host session access across host versions.
//!
//! Older hosts lack some accessors entirely. Every optional accessor answers
//! with a [`Probe`], so callers negotiate capabilities explicitly instead of
//! assuming a particular host version.

use serde::{Deserialize, Serialize};

/// Answer of an optional, host-version-dependent accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe<T> {
    Supported(T),
    Unsupported,
}

impl<T> Probe<T> {
    /// Try an alternative accessor only when this one is unsupported
    pub fn or_else_probe(self, alternative: impl FnOnce() -> Probe<T>) -> Probe<T> {
        match self {
            Probe::Supported(value) => Probe::Supported(value),
            Probe::Unsupported => alternative(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Probe::Supported(value) => Probe::Supported(f(value)),
            Probe::Unsupported => Probe::Unsupported,
        }
    }

    pub fn supported(self) -> Option<T> {
        match self {
            Probe::Supported(value) => Some(value),
            Probe::Unsupported => None,
        }
    }
}

/// Execution request of the invoking build
pub trait ExecutionRequest {
    /// Whether the build was asked to show full error traces
    fn is_show_errors(&self) -> bool;

    /// Reactor failure behaviour, as exposed by current hosts
    fn failure_behavior(&self) -> Probe<Option<String>> {
        Probe::Unsupported
    }

    /// Reactor failure behaviour under its older accessor name
    fn reactor_failure_behavior(&self) -> Probe<Option<String>> {
        Probe::Unsupported
    }
}

/// Session of the invoking build
pub trait HostSession {
    /// The execution request, on hosts that expose one
    fn request(&self) -> Probe<&dyn ExecutionRequest> {
        Probe::Unsupported
    }
}

/// Accessor surface a host version offers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostApi {
    /// No execution request at all
    Legacy,
    /// Execution request with the older failure behaviour accessor only
    Classic,
    /// Execution request with the current failure behaviour accessor
    #[default]
    Current,
}

impl std::str::FromStr for HostApi {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "classic" => Ok(Self::Classic),
            "current" => Ok(Self::Current),
            _ => Err(format!(
                "Unknown host API: {}. Supported: legacy, classic, current",
                s
            )),
        }
    }
}

/// Host session backed by plain values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    api: HostApi,
    request: StaticRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StaticRequest {
    api: HostApi,
    show_errors: bool,
    failure_behavior: Option<String>,
}

impl StaticSession {
    pub fn new(api: HostApi, show_errors: bool, failure_behavior: Option<String>) -> Self {
        Self {
            api,
            request: StaticRequest {
                api,
                show_errors,
                failure_behavior,
            },
        }
    }

    pub fn api(&self) -> HostApi {
        self.api
    }
}

impl HostSession for StaticSession {
    fn request(&self) -> Probe<&dyn ExecutionRequest> {
        match self.api {
            HostApi::Legacy => Probe::Unsupported,
            HostApi::Classic | HostApi::Current => {
                Probe::Supported(&self.request as &dyn ExecutionRequest)
            }
        }
    }
}

impl ExecutionRequest for StaticRequest {
    fn is_show_errors(&self) -> bool {
        self.show_errors
    }

    fn failure_behavior(&self) -> Probe<Option<String>> {
        match self.api {
            HostApi::Current => Probe::Supported(self.failure_behavior.clone()),
            _ => Probe::Unsupported,
        }
    }

    fn reactor_failure_behavior(&self) -> Probe<Option<String>> {
        match self.api {
            HostApi::Classic => Probe::Supported(self.failure_behavior.clone()),
            _ => Probe::Unsupported,
        }
    }
}
