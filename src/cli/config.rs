//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, SinkKind, ThemeMode};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
    /// Print the config file location
    Path,
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Device catalog directory
    #[arg(long, value_name = "DIR")]
    devices_dir: Option<PathBuf>,

    /// Socket registry override file (JSON)
    #[arg(long, value_name = "FILE")]
    sockets_file: Option<PathBuf>,

    /// Default sink (clipboard or stdout)
    #[arg(long, value_name = "KIND")]
    sink: Option<String>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    output: OutputOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    devices_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sockets_file: Option<String>,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    sink: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| {
                    CliError::io(format!("Failed to determine config path: {e}"))
                })?;
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Err(e) = config.validate() {
            warn!("Stale configuration: {e:#}");
        }

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // A file that does not parse is never overwritten
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        self.apply(&mut config)?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }

    fn apply(&self, config: &mut Config) -> CliResult<()> {
        // At least one argument must be provided
        if self.devices_dir.is_none()
            && self.sockets_file.is_none()
            && self.sink.is_none()
            && self.theme.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --devices-dir, --sockets-file, --sink, or --theme",
            ));
        }

        if let Some(dir) = &self.devices_dir {
            if !dir.is_dir() {
                return Err(CliError::validation(format!(
                    "Devices directory does not exist: {}",
                    dir.display()
                )));
            }
            config.paths.devices_dir = Some(dir.clone());
        }

        if let Some(file) = &self.sockets_file {
            // Reject a broken registry now rather than on the next render
            crate::sockets::SocketRegistry::from_file(file)
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
            config.paths.sockets_file = Some(file.clone());
        }

        if let Some(sink) = &self.sink {
            config.output.sink = sink
                .parse::<SinkKind>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            devices_dir: config.devices_dir().display().to_string(),
            sockets_file: config
                .paths
                .sockets_file
                .as_ref()
                .map(|p| p.display().to_string()),
        },
        output: OutputOutput {
            sink: config.output.sink.to_string(),
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Paths:");
    println!("  Devices Directory: {}", config.devices_dir().display());
    match &config.paths.sockets_file {
        Some(file) => println!("  Sockets File: {}", file.display()),
        None => println!("  Sockets File: (builtin registry)"),
    }
    println!();

    println!("Output:");
    println!("  Sink: {}", config.output.sink);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set_args() -> ConfigSetArgs {
        ConfigSetArgs {
            devices_dir: None,
            sockets_file: None,
            sink: None,
            theme: None,
        }
    }

    #[test]
    fn test_set_requires_an_option() {
        let err = set_args().apply(&mut Config::new()).unwrap_err();
        assert!(err.message.contains("At least one configuration option"));
    }

    #[test]
    fn test_set_applies_values() {
        let temp_dir = TempDir::new().unwrap();
        let args = ConfigSetArgs {
            devices_dir: Some(temp_dir.path().to_path_buf()),
            sink: Some("stdout".to_string()),
            theme: Some("Light".to_string()),
            ..set_args()
        };

        let mut config = Config::new();
        args.apply(&mut config).unwrap();
        assert_eq!(config.paths.devices_dir.as_deref(), Some(temp_dir.path()));
        assert_eq!(config.output.sink, SinkKind::Stdout);
        assert_eq!(config.ui.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let args = ConfigSetArgs {
            theme: Some("invalid_theme".to_string()),
            ..set_args()
        };
        assert!(args.apply(&mut Config::new()).is_err());

        let args = ConfigSetArgs {
            devices_dir: Some(PathBuf::from("/nonexistent/devices")),
            ..set_args()
        };
        let err = args.apply(&mut Config::new()).unwrap_err();
        assert!(err.message.contains("does not exist"));
    }
}
