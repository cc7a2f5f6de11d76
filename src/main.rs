//! devshape - draw.io shape generator for device descriptions
//!
//! Run without a subcommand to pick a device interactively and copy its
//! shape to the clipboard, or use `generate` for scripted rendering.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devshape::cli::{
    CliError, CliResult, ConfigArgs, ExitCode, GenerateArgs, ListArgs, SocketsArgs,
};
use devshape::config::Config;
use devshape::constants::APP_BINARY_NAME;
use devshape::services::Workspace;

/// devshape - draw.io shape generator for device descriptions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Device catalog directory (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    devices: Option<PathBuf>,

    /// Socket registry override file (overrides config)
    #[arg(long, global = true, value_name = "FILE")]
    sockets: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a device into shape markup
    Generate(GenerateArgs),
    /// List devices in the catalog
    List(ListArgs),
    /// List known socket types
    Sockets(SocketsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    // Config commands must work even when the stored paths are stale
    if let Some(Command::Config(args)) = &cli.command {
        return args.execute();
    }

    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let workspace = Workspace::resolve(&config, cli.devices.as_deref(), cli.sockets.as_deref())
        .map_err(|e| CliError::from_anyhow(&e))?;

    match &cli.command {
        Some(Command::Generate(args)) => args.execute(&config, &workspace),
        Some(Command::List(args)) => args.execute(&workspace),
        Some(Command::Sockets(args)) => args.execute(&workspace),
        Some(Command::Config(args)) => args.execute(),
        None => run_interactive(&config, &workspace),
    }
}

#[cfg(feature = "ratatui")]
fn run_interactive(config: &Config, workspace: &Workspace) -> CliResult<()> {
    match devshape::app::run_interactive(config, workspace) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(CliError::cancelled("Selection cancelled.")),
        Err(e) => Err(CliError::from_anyhow(&e)),
    }
}

#[cfg(not(feature = "ratatui"))]
fn run_interactive(_config: &Config, _workspace: &Workspace) -> CliResult<()> {
    Err(CliError::validation(format!(
        "Interactive mode is not available in this build. Use `{APP_BINARY_NAME} generate`."
    )))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        if e.exit_code == ExitCode::Cancelled {
            println!("{e}");
        } else {
            eprintln!("Error: {e}");
            if e.exit_code == ExitCode::ValidationError && cli.command.is_none() {
                eprintln!();
                eprintln!("For more options, run:");
                eprintln!("  {APP_BINARY_NAME} --help");
            }
        }
        std::process::exit(e.exit_code.code());
    }
}
