pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod report;
pub mod state;

pub use cli::{CommandLineOption, CommandLineOptions, command_line_options};
pub use error::FailureSignal;
pub use host::{ExecutionRequest, HostSession, Probe};
pub use logging::{ConsoleLogger, TracingLogger, log_debug_or_cli_show_errors};
pub use report::{Outcome, ReportParameters, report_execution};
pub use state::RunResult;
