//! Shared test fixtures for layout and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use devshape::models::{Device, DeviceOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Standard-layout device with one BNC input and one HDMI output.
///
/// Renders to a 200 x 130 shape.
pub fn acme_x1() -> Device {
    Device::new(DeviceOptions::new("Acme", "X1"))
        .with_input("bnc", "SDI In")
        .with_output("hdmi", "HDMI Out")
}

/// Compact device with three inputs and two outputs; only the first of each
/// is drawn.
pub fn compact_converter() -> Device {
    let mut options = DeviceOptions::new("Blackmagic", "Micro Converter");
    options.compact = true;
    Device::new(options)
        .with_input("bnc", "SDI In")
        .with_input("hdmi", "HDMI In")
        .with_input("ref", "Ref In")
        .with_output("hdmi", "HDMI Out")
        .with_output("bnc", "SDI Out")
}

/// Serialises a device to pretty JSON in the on-disk format.
pub fn device_json(device: &Device) -> String {
    serde_json::to_string_pretty(device).expect("Failed to serialize device")
}

/// Writes a device file, creating parent directories.
pub fn write_device(path: &Path, device: &Device) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create device dir");
    }
    fs::write(path, device_json(device)).expect("Failed to write device file");
}

/// Creates a catalog tree:
///
/// ```text
/// acme/x1.json
/// blackmagic/micro-converter.json
/// blackmagic/_drafts/prototype.json   (skipped)
/// sony/fx6_old.json                   (skipped)
/// broken.json                         (skipped, not a device)
/// ```
pub fn temp_catalog() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    write_device(&root.join("acme").join("x1.json"), &acme_x1());
    write_device(
        &root.join("blackmagic").join("micro-converter.json"),
        &compact_converter(),
    );
    write_device(
        &root.join("blackmagic").join("_drafts").join("prototype.json"),
        &Device::new(DeviceOptions::new("Blackmagic", "Prototype")),
    );
    write_device(
        &root.join("sony").join("fx6_old.json"),
        &Device::new(DeviceOptions::new("Sony", "FX6")),
    );
    fs::write(root.join("broken.json"), "{ not json").expect("Failed to write broken file");

    temp_dir
}

/// Creates a device file in a temp directory and returns the path.
pub fn create_temp_device_file(device: &Device) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("device.json");
    write_device(&path, device);
    (path, temp_dir)
}

/// Writes raw JSON to a temp file and returns the path.
pub fn create_temp_json_file(name: &str, json: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, json).expect("Failed to write JSON file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_devices() {
        assert_eq!(acme_x1().max_pins(), 1);
        assert!(compact_converter().options.compact);
        assert_eq!(compact_converter().inputs.len(), 3);
    }
}
