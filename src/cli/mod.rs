// CLI module - argument parsing and the options mirrored to subprocesses

pub mod args;
pub mod option;

pub use args::{Cli, Commands, HostArgs, OptionsArgs, OutputFormat, ReportArgs};
pub use option::{CommandLineOption, CommandLineOptions, command_line_options};
