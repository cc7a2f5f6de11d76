//! Resolves catalog root and socket registry from config and CLI overrides.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::catalog::{self, Catalog};
use crate::config::Config;
use crate::models::Device;
use crate::shape::{render_shape, ShapeResult};
use crate::sockets::SocketRegistry;

/// Everything needed to go from a device reference to a shape.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Catalog root directory
    pub devices_dir: PathBuf,
    /// Effective socket registry (builtin plus optional overrides)
    pub registry: SocketRegistry,
}

impl Workspace {
    /// Builds a workspace. Explicit paths win over the config file.
    pub fn resolve(
        config: &Config,
        devices_dir: Option<&Path>,
        sockets_file: Option<&Path>,
    ) -> Result<Self> {
        let devices_dir = devices_dir.map_or_else(|| config.devices_dir(), Path::to_path_buf);
        let sockets_file = sockets_file.or(config.paths.sockets_file.as_deref());

        let registry = SocketRegistry::load(sockets_file)?;
        debug!(
            devices_dir = %devices_dir.display(),
            sockets = registry.len(),
            "resolved workspace"
        );

        Ok(Self {
            devices_dir,
            registry,
        })
    }

    /// Scans the device catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::scan(&self.devices_dir)
    }

    /// Loads a device file directly, bypassing catalog discovery.
    pub fn load_device(&self, path: &Path) -> Result<Device> {
        catalog::load_device(path)
    }

    /// Renders a device with this workspace's registry.
    pub fn render(&self, device: &Device) -> Result<ShapeResult> {
        render_shape(device, &self.registry).context(format!(
            "Failed to render {} {}",
            device.options.vendor, device.options.model
        ))
    }
}
