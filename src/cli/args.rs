// CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::host::HostApi;

/// Output format for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Ok(Self::Text)
        }
    }
}

/// Decide how a test run's outcome is surfaced to the invoking build
#[derive(Parser, Debug)]
#[command(name = "testgate")]
#[command(author = "testgate contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Classify test run results and mirror the build's CLI options", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub host: HostArgs,

    /// Enable verbose debug output
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long, global = true, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (defaults to .testgaterc.toml in cwd or home)
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Create default configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    pub init_config: Option<PathBuf>,

    /// Print shell completion (bash, zsh, fish, elvish, powershell)
    #[arg(long, value_name = "SHELL_TYPE", value_parser = ["bash", "zsh", "fish", "elvish", "powershell"])]
    pub completion: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a run result and exit accordingly
    Report(ReportArgs),

    /// Print the command-line options collected from the host session
    Options(OptionsArgs),
}

/// How the invoking build was started; given before the subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct HostArgs {
    /// The build shows full error traces (`-e=false` overrides the config file)
    #[arg(
        short = 'e',
        long = "errors",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub show_errors: Option<bool>,

    /// Stop at the first module failure
    #[arg(long, group = "reactor")]
    pub fail_fast: bool,

    /// Continue and fail once all modules are built
    #[arg(long, group = "reactor")]
    pub fail_at_end: bool,

    /// Never fail the build
    #[arg(long, group = "reactor")]
    pub fail_never: bool,

    /// Accessor surface of the host (legacy, classic, current)
    #[arg(long, value_name = "API")]
    pub host_api: Option<HostApi>,
}

impl HostArgs {
    /// Raw failure behaviour selected on the command line
    pub fn failure_behavior(&self) -> Option<&'static str> {
        if self.fail_fast {
            Some("FAIL_FAST")
        } else if self.fail_at_end {
            Some("FAIL_AT_END")
        } else if self.fail_never {
            Some("FAIL_NEVER")
        } else {
            None
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Run result JSON files; several files are aggregated
    #[arg(required = true)]
    pub results: Vec<PathBuf>,

    /// Fail when no tests were executed
    #[arg(long, value_name = "BOOL")]
    pub fail_if_no_tests: Option<bool>,

    /// Log test failures instead of failing the build
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub test_failure_ignore: Option<bool>,

    /// Directory holding the individual test reports
    #[arg(long, value_name = "DIR")]
    pub reports_directory: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct OptionsArgs {
    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl OptionsArgs {
    pub fn output_format(&self) -> OutputFormat {
        self.format.parse().unwrap_or(OutputFormat::Text)
    }
}
