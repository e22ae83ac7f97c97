// Main entry point for testgate

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, error, info};

use testgate::cli::{Cli, Commands, OptionsArgs, OutputFormat, ReportArgs};
use testgate::config::Config;
use testgate::logging::{self, TracingLogger};
use testgate::report::{self, Outcome};
use testgate::{command_line_options, state};

/// Exit code when testgate's own inputs are unusable
const EXIT_USAGE: i32 = 3;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            EXIT_USAGE
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .event_format(logging::CustomFormatter)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(logging::default_filter(cli.verbose, cli.quiet))
        }))
        .init();

    debug!("Starting testgate v{}", env!("CARGO_PKG_VERSION"));

    // Handle init_config flag
    if let Some(config_file) = &cli.init_config {
        let toml_content = Config::default().to_toml();
        std::fs::write(config_file, toml_content)
            .with_context(|| format!("Failed to write {}", config_file.display()))?;
        println!("Configuration file created: {}", config_file.display());
        println!("\nConfiguration precedence:");
        println!("  1. Command-line arguments (highest)");
        println!("  2. Configuration file");
        println!("  3. Built-in defaults (lowest)");
        return Ok(0);
    }

    // Handle completion flag
    if let Some(shell_type) = &cli.completion {
        handle_completion(shell_type)?;
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Invalid configuration file: {}", path.display()))?,
        None => Config::load().unwrap_or_default(),
    };

    match &cli.command {
        Some(Commands::Report(args)) => handle_report(&cli, &config, args),
        Some(Commands::Options(args)) => handle_options(&cli, &config, args),
        None => {
            Cli::command().print_help()?;
            Ok(EXIT_USAGE)
        }
    }
}

fn handle_report(cli: &Cli, config: &Config, args: &ReportArgs) -> Result<i32> {
    let log = TracingLogger;
    let result = state::load_run_results(&args.results)?;
    let params = config.report_parameters(args);
    let options = command_line_options(&config.host_session(&cli.host), &log);

    logging::log_debug_or_cli_show_errors(&result.to_string(), &log, &options);

    match report::report_execution(&params, &result, &log) {
        Ok(Outcome::Success) => {
            info!("{}", result);
            Ok(0)
        }
        Ok(Outcome::Warned(_)) => Ok(0),
        Err(signal) => {
            error!("{}", signal);
            if let Some(failure) = &result.failure {
                logging::log_debug_or_cli_show_errors(failure, &log, &options);
            }
            Ok(signal.exit_code())
        }
    }
}

fn handle_options(cli: &Cli, config: &Config, args: &OptionsArgs) -> Result<i32> {
    let options = command_line_options(&config.host_session(&cli.host), &TracingLogger);

    match args.output_format() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
        OutputFormat::Text => {
            for option in &options {
                println!("{}", option);
            }
        }
    }

    Ok(0)
}

fn handle_completion(shell_type: &str) -> Result<()> {
    use clap_complete::{Shell, generate};

    let shell = match shell_type {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        _ => {
            anyhow::bail!(
                "Unsupported shell: {}. Supported: bash, zsh, fish, elvish, powershell",
                shell_type
            );
        }
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());

    Ok(())
}
