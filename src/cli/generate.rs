//! Generate command for device shapes.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::services::{Sink, Workspace};
use crate::shape::ShapeResult;
use clap::Args;
use std::path::PathBuf;

/// Render a device into draw.io shape markup
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to a device JSON file
    #[arg(short, long, value_name = "FILE", conflicts_with_all = ["vendor", "model"])]
    pub device: Option<PathBuf>,

    /// Vendor to look up in the device catalog
    #[arg(long, value_name = "NAME", requires = "model")]
    pub vendor: Option<String>,

    /// Model to look up in the device catalog
    #[arg(long, value_name = "NAME", requires = "vendor")]
    pub model: Option<String>,

    /// Write the markup to a file instead of the configured sink
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the markup to stdout instead of the configured sink
    #[arg(long)]
    pub stdout: bool,

    /// Print `{ width, height, markup }` as JSON to stdout
    #[arg(long, conflicts_with_all = ["output", "stdout"])]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config, workspace: &Workspace) -> CliResult<()> {
        let device = match (&self.device, &self.vendor, &self.model) {
            (Some(path), _, _) => workspace
                .load_device(path)
                .map_err(|e| CliError::from_anyhow(&e))?,
            (None, Some(vendor), Some(model)) => {
                let catalog = workspace
                    .catalog()
                    .map_err(|e| CliError::io(format!("Failed to scan device catalog: {e:#}")))?;
                let entry = find_entry(&catalog, vendor, model)?;
                entry.load().map_err(|e| CliError::from_anyhow(&e))?
            }
            _ => {
                return Err(CliError::validation(
                    "Specify a device with --device FILE or --vendor NAME --model NAME",
                ))
            }
        };

        let shape = workspace
            .render(&device)
            .map_err(|e| CliError::from_anyhow(&e))?;

        if self.json {
            return output_json(&shape);
        }

        self.sink(config)
            .deliver(&shape)
            .map_err(|e| CliError::io(format!("{e:#}")))
    }

    fn sink(&self, config: &Config) -> Sink {
        match &self.output {
            Some(path) => Sink::File(path.clone()),
            None if self.stdout => Sink::Stdout,
            None => Sink::from(config.output.sink),
        }
    }
}

fn find_entry<'a>(
    catalog: &'a Catalog,
    vendor: &str,
    model: &str,
) -> CliResult<&'a crate::catalog::CatalogEntry> {
    catalog.find(vendor, model).ok_or_else(|| {
        CliError::validation(format!(
            "Device '{vendor} {model}' not found in {}",
            catalog.root().display()
        ))
    })
}

/// Output the shape in JSON format
fn output_json(shape: &ShapeResult) -> CliResult<()> {
    let json = serde_json::to_string_pretty(shape)
        .map_err(|e| CliError::io(format!("Failed to serialize shape to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SinkKind;

    fn args() -> GenerateArgs {
        GenerateArgs {
            device: None,
            vendor: None,
            model: None,
            output: None,
            stdout: false,
            json: false,
        }
    }

    #[test]
    fn test_sink_selection() {
        let mut config = Config::new();
        config.output.sink = SinkKind::Stdout;
        assert_eq!(args().sink(&config), Sink::Stdout);

        config.output.sink = SinkKind::Clipboard;
        assert_eq!(args().sink(&config), Sink::Clipboard);

        let stdout = GenerateArgs {
            stdout: true,
            ..args()
        };
        assert_eq!(stdout.sink(&config), Sink::Stdout);

        let file = GenerateArgs {
            output: Some(PathBuf::from("shape.xml")),
            ..args()
        };
        assert_eq!(file.sink(&config), Sink::File(PathBuf::from("shape.xml")));
    }

    #[test]
    fn test_missing_device_is_validation_error() {
        let workspace = Workspace::resolve(&Config::new(), None, None).unwrap();
        let err = args().execute(&Config::new(), &workspace).unwrap_err();
        assert_eq!(err.exit_code, crate::cli::ExitCode::ValidationError);
    }
}
