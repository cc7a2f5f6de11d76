//! Device catalog discovery and loading.
//!
//! The catalog is a directory tree of device JSON files, typically grouped
//! by vendor (`devices/blackmagic/atem-mini.json`). Any file or folder whose
//! name contains an underscore is treated as a draft or partial and skipped.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::Device;

/// One discovered device, identified by vendor and model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Full path to the device file
    pub path: PathBuf,
    /// Vendor from the device options
    pub vendor: String,
    /// Model from the device options
    pub model: String,
}

impl CatalogEntry {
    /// Loads and validates the full device description.
    pub fn load(&self) -> Result<Device> {
        load_device(&self.path)
    }
}

/// Just enough of a device file to list it.
#[derive(Debug, Deserialize)]
struct DeviceHeader {
    #[serde(default)]
    options: HeaderOptions,
}

#[derive(Debug, Default, Deserialize)]
struct HeaderOptions {
    vendor: Option<String>,
    model: Option<String>,
}

/// Sorted list of devices found under a catalog root.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    root: PathBuf,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Scans `root` recursively for device files.
    ///
    /// Files that cannot be read or lack a vendor/model are skipped with a
    /// warning. Entries are sorted by vendor, then model, ignoring case.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            anyhow::bail!("Devices directory not found: {}", root.display());
        }

        let mut paths = Vec::new();
        scan_recursive(root, &mut paths)?;

        let mut entries = Vec::new();
        for path in paths {
            match read_header(&path) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(path = %path.display(), "skipping device file: {e:#}"),
            }
        }
        entries.sort_by(compare_entries);

        debug!(root = %root.display(), count = entries.len(), "scanned device catalog");

        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// Builds a catalog from already known entries (sorted on construction).
    #[must_use]
    pub fn from_entries(root: PathBuf, mut entries: Vec<CatalogEntry>) -> Self {
        entries.sort_by(compare_entries);
        Self { root, entries }
    }

    /// Catalog root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries in sorted order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Returns true if no devices were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct vendors in sorted order.
    #[must_use]
    pub fn vendors(&self) -> Vec<&str> {
        let mut vendors: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !vendors.contains(&entry.vendor.as_str()) {
                vendors.push(&entry.vendor);
            }
        }
        vendors
    }

    /// Entries for one vendor (exact match) in model order.
    #[must_use]
    pub fn models(&self, vendor: &str) -> Vec<&CatalogEntry> {
        self.entries.iter().filter(|e| e.vendor == vendor).collect()
    }

    /// Finds a device by vendor and model. An exact match wins; otherwise
    /// the first case-insensitive match is returned.
    #[must_use]
    pub fn find(&self, vendor: &str, model: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| e.vendor == vendor && e.model == model)
            .or_else(|| {
                self.entries.iter().find(|e| {
                    e.vendor.to_lowercase() == vendor.to_lowercase()
                        && e.model.to_lowercase() == model.to_lowercase()
                })
            })
    }
}

/// Loads a device file and validates its options.
pub fn load_device(path: &Path) -> Result<Device> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read device file: {}", path.display()))?;
    Device::from_json_str(&content)
        .context(format!("Failed to load device file: {}", path.display()))
}

fn compare_entries(a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    a.vendor
        .to_lowercase()
        .cmp(&b.vendor.to_lowercase())
        .then_with(|| a.model.to_lowercase().cmp(&b.model.to_lowercase()))
}

fn read_header(path: &Path) -> Result<CatalogEntry> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read device file: {}", path.display()))?;
    let header: DeviceHeader = serde_json::from_str(&content)
        .context(format!("Failed to parse device file: {}", path.display()))?;

    let vendor = header
        .options
        .vendor
        .filter(|v| !v.trim().is_empty())
        .context("missing options.vendor")?;
    let model = header
        .options
        .model
        .filter(|m| !m.trim().is_empty())
        .context("missing options.model")?;

    Ok(CatalogEntry {
        path: path.to_path_buf(),
        vendor,
        model,
    })
}

/// Collects `.json` files, skipping hidden entries and names with underscores.
fn scan_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).context(format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        let name = entry.file_name();
        let name_str = name.to_string_lossy();

        if name_str.starts_with('.') || name_str.contains('_') {
            continue;
        }

        if path.is_dir() {
            scan_recursive(&path, files)?;
        } else if name_str.ends_with(".json") {
            files.push(path);
        }
    }

    Ok(())
}
