//! Datadesc CLI - Command-line interface for cross-file YAML/JSON references
//!
//! This is the main entry point for the Datadesc CLI application, providing
//! commands for resolving references, dereferencing documents and converting
//! between formats.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli), fields(command = ?cli.command))]
fn run(cli: Cli) -> Result<()> {
    let timer = Timer::new("cli_execution");

    // Completion scripts do not depend on any configuration
    let config = if matches!(cli.command, Commands::Completions(_)) {
        Config::default()
    } else {
        let _config_timer = Timer::new("config_loading");
        tracing::info!("Loading configuration");
        Config::load_with_file(cli.config.as_deref())?
    };

    let use_color = cli.use_color() && config.output.color;
    if !use_color {
        control::set_override(false);
    }

    let mut output = OutputWriter::new(cli.output, use_color, cli.quiet, config.output.indent);

    tracing::info!(
        command = ?cli.command,
        output = ?output.format(),
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    let result = match cli.command {
        Commands::Resolve(args) => handlers::handle_resolve(args, &config, &mut output),
        Commands::Deref(args) => handlers::handle_deref(args, &config, &mut output),
        Commands::Convert(args) => handlers::handle_convert(args, &config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    };

    tracing::info!(elapsed_ms = timer.elapsed().as_millis() as u64, "Command finished");
    result
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
