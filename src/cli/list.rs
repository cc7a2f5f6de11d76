//! List command for the device catalog.

use crate::catalog::Catalog;
use crate::cli::common::{CliError, CliResult};
use crate::services::Workspace;
use clap::Args;
use serde::Serialize;

/// List devices found in the catalog
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Only show devices from this vendor (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub vendor: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct EntryOutput<'a> {
    vendor: &'a str,
    model: &'a str,
    path: String,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, workspace: &Workspace) -> CliResult<()> {
        let catalog = workspace
            .catalog()
            .map_err(|e| CliError::io(format!("Failed to scan device catalog: {e:#}")))?;
        let entries = self.filtered(&catalog);

        if self.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| CliError::io(format!("Failed to serialize catalog to JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        if entries.is_empty() {
            println!("No devices found in {}", catalog.root().display());
            return Ok(());
        }

        for entry in &entries {
            println!("{} / {} ({})", entry.vendor, entry.model, entry.path);
        }
        Ok(())
    }

    fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<EntryOutput<'a>> {
        catalog
            .entries()
            .iter()
            .filter(|entry| {
                self.vendor
                    .as_ref()
                    .is_none_or(|v| entry.vendor.eq_ignore_ascii_case(v))
            })
            .map(|entry| EntryOutput {
                vendor: &entry.vendor,
                model: &entry.model,
                path: entry.path.display().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use std::path::PathBuf;

    fn catalog() -> Catalog {
        let entry = |vendor: &str, model: &str| CatalogEntry {
            path: PathBuf::from(format!("{model}.json")),
            vendor: vendor.to_string(),
            model: model.to_string(),
        };
        Catalog::from_entries(
            PathBuf::from("devices"),
            vec![entry("Sony", "FX6"), entry("AJA", "Ki Pro")],
        )
    }

    #[test]
    fn test_vendor_filter() {
        let catalog = catalog();
        let all = ListArgs {
            vendor: None,
            json: false,
        };
        assert_eq!(all.filtered(&catalog).len(), 2);

        let sony = ListArgs {
            vendor: Some("sony".to_string()),
            json: true,
        };
        let entries = sony.filtered(&catalog);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].model, "FX6");
        assert_eq!(entries[0].path, "FX6.json");
    }
}
