// Configuration file handling

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{HostArgs, ReportArgs};
use crate::host::{HostApi, StaticSession};
use crate::report::{ENV_TESTGATE_REPORTS_DIRECTORY, ReportParameters};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub report: ReportParameters,

    #[serde(default)]
    pub host: HostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// The build shows full error traces
    #[serde(default)]
    pub show_errors: bool,

    /// Reactor failure behaviour (FAIL_FAST, FAIL_AT_END, FAIL_NEVER)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_behavior: Option<String>,

    /// Accessor surface of the host
    #[serde(default)]
    pub api: HostApi,
}

pub const CONFIG_FILE_NAME: &str = ".testgaterc.toml";

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .testgaterc.toml (current directory)
        // 2. ~/.testgaterc.toml (home directory)

        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        paths
            .iter()
            .find(|path| path.exists())
            .and_then(|path| Self::load_from_file(path))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate default configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// Report parameters with command-line flags applied on top
    pub fn report_parameters(&self, args: &ReportArgs) -> ReportParameters {
        let reports_directory = args
            .reports_directory
            .clone()
            .or_else(|| std::env::var_os(ENV_TESTGATE_REPORTS_DIRECTORY).map(PathBuf::from))
            .unwrap_or_else(|| self.report.reports_directory.clone());

        ReportParameters {
            fail_if_no_tests: args.fail_if_no_tests.or(self.report.fail_if_no_tests),
            test_failure_ignore: args
                .test_failure_ignore
                .unwrap_or(self.report.test_failure_ignore),
            reports_directory,
        }
    }

    /// Host session with command-line flags applied on top
    pub fn host_session(&self, args: &HostArgs) -> StaticSession {
        let failure_behavior = args
            .failure_behavior()
            .map(str::to_string)
            .or_else(|| self.host.failure_behavior.clone());

        StaticSession::new(
            args.host_api.unwrap_or(self.host.api),
            args.show_errors.unwrap_or(self.host.show_errors),
            failure_behavior,
        )
    }
}
