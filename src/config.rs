//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};

/// Theme display mode preference for the device picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{s}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Where generated shapes go by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// System clipboard, ready to paste into the editor
    #[default]
    Clipboard,
    /// Standard output
    Stdout,
}

impl FromStr for SinkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "clipboard" => Ok(Self::Clipboard),
            "stdout" => Ok(Self::Stdout),
            _ => anyhow::bail!("Invalid sink '{s}'. Must be 'clipboard' or 'stdout'"),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clipboard => write!(f, "clipboard"),
            Self::Stdout => write!(f, "stdout"),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Root of the device catalog (defaults to `./devices`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices_dir: Option<PathBuf>,
    /// Socket registry file layered over the builtin socket types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets_file: Option<PathBuf>,
}

/// Output preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default destination for generated shapes
    #[serde(default)]
    pub sink: SinkKind,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/devshape/config.toml`
/// - macOS: `~/Library/Application Support/devshape/config.toml`
/// - Windows: `%APPDATA%\devshape\config.toml`
///
/// The `DEVSHAPE_CONFIG_DIR` environment variable overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path (temp file + rename).
    ///
    /// Stored paths are written as-is; a directory that has since been
    /// removed does not block saving unrelated settings.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `devices_dir` (if set) exists and is a directory
    /// - `sockets_file` (if set) exists and is a file
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.paths.devices_dir {
            if !dir.is_dir() {
                anyhow::bail!("Devices directory does not exist: {}", dir.display());
            }
        }

        if let Some(file) = &self.paths.sockets_file {
            if !file.is_file() {
                anyhow::bail!("Socket registry file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Devices directory to scan, falling back to `./devices`.
    #[must_use]
    pub fn devices_dir(&self) -> PathBuf {
        self.paths
            .devices_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("devices"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.paths.devices_dir, None);
        assert_eq!(config.paths.sockets_file, None);
        assert_eq!(config.output.sink, SinkKind::Clipboard);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.devices_dir(), PathBuf::from("devices"));
    }

    #[test]
    fn test_config_validate() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.paths.devices_dir = Some(temp_dir.path().join("missing"));
        assert!(config.validate().is_err());

        config.paths.devices_dir = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_ok());

        // a directory is not a registry file
        config.paths.sockets_file = Some(temp_dir.path().to_path_buf());
        assert!(config.validate().is_err());

        let sockets = temp_dir.path().join("sockets.json");
        fs::write(&sockets, "{}").unwrap();
        config.paths.sockets_file = Some(sockets);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.paths.devices_dir = Some(temp_dir.path().to_path_buf());
        config.output.sink = SinkKind::Stdout;
        config.ui.theme_mode = ThemeMode::Light;

        config.save_to(&config_file).unwrap();
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_keeps_stale_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.paths.devices_dir = Some(temp_dir.path().join("removed"));
        config.output.sink = SinkKind::Stdout;
        assert!(config.validate().is_err());

        config.save_to(&config_file).unwrap();
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[ui]\ntheme_mode = \"light\"\n[output\n").unwrap();

        let err = Config::load_from(&config_file).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[output]\nsink = \"stdout\"\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.output.sink, SinkKind::Stdout);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!("stdout".parse::<SinkKind>().unwrap(), SinkKind::Stdout);
        assert!("printer".parse::<SinkKind>().is_err());
    }
}
