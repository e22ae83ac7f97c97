// Reporting preferences of the invoking build

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_TESTGATE_REPORTS_DIRECTORY: &str = "TESTGATE_REPORTS_DIRECTORY";

/// How the build wants run results surfaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParameters {
    /// Fail when no tests were executed (unset means tolerate)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_no_tests: Option<bool>,

    /// Log test failures instead of failing the build
    #[serde(default)]
    pub test_failure_ignore: bool,

    /// Where individual test reports are written
    #[serde(default = "default_reports_directory")]
    pub reports_directory: PathBuf,
}

impl Default for ReportParameters {
    fn default() -> Self {
        Self {
            fail_if_no_tests: None,
            test_failure_ignore: false,
            reports_directory: default_reports_directory(),
        }
    }
}

pub fn default_reports_directory() -> PathBuf {
    PathBuf::from("target/surefire-reports")
}

impl ReportParameters {
    pub fn fail_if_no_tests(&self) -> bool {
        self.fail_if_no_tests.unwrap_or(false)
    }
}
