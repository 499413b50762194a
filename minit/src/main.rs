//! Minit CLI - A command-line front end for the Mini lexer.
//!
//! This is the main entry point for the minit CLI application.
//! It uses clap for argument parsing and dispatches to the appropriate
//! command handler.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::resolve_color;
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{MinitError, Result};

/// Minit - inspect how Mini source text is tokenized
#[derive(Parser, Debug)]
#[command(name = "minit")]
#[command(author = "Mini Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Mini source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MINIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MINIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MINIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the minit CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a source file
    ///
    /// Lists one token per line, or a JSON array with `--format json`.
    /// Lexical errors are reported on standard error.
    Tokens(TokensCommand),

    /// Check source files for lexical errors
    ///
    /// Reports every unrecognized character and prints a summary line
    /// per file.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file, or `-` to read standard input
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Show the line and column of each token
    #[arg(long)]
    spans: bool,

    /// Stop at the first lexical error
    #[arg(long)]
    fail_fast: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Main entry point for the minit CLI.
///
/// Exits with status 1 on any error, including lexical errors in the
/// input; those are reported before exiting.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    debug!(source = ?config.source, "configuration loaded");

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// Log output goes to standard error so that listings on standard output
/// stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MinitError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, letting flags override the config.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    let color = resolve_color(config.output.color, no_color);

    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            input: args.input,
            format: args.format.unwrap_or(config.output.format),
            spans: args.spans || config.output.spans,
            fail_fast: args.fail_fast || config.lexer.fail_fast,
            color,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
            color,
        }),
    }
}
