//! Socket type registry.
//!
//! Maps socket type ids (as used in device files) to the colour and label
//! drawn on the shape. The builtin table is embedded in the binary; a user
//! registry file can add new connector types or recolour existing ones
//! without touching the layout code.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ShapeError;
use crate::models::{RgbColor, Socket, SocketRole};

/// Display attributes of one socket type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketType {
    /// Stem and label colour
    #[serde(alias = "color")]
    pub colour: RgbColor,
    /// Short label drawn next to the stem (e.g. "BNC")
    #[serde(rename = "name", alias = "label")]
    pub label: String,
}

impl SocketType {
    /// Creates a socket type.
    pub fn new(colour: RgbColor, label: impl Into<String>) -> Self {
        Self {
            colour,
            label: label.into(),
        }
    }
}

/// Wrapped on-disk layout used by the embedded table.
#[derive(Debug, Deserialize)]
struct WrappedRegistry {
    #[serde(default)]
    version: Option<String>,
    sockets: BTreeMap<String, SocketType>,
}

/// Parses either the wrapped `{ "version": .., "sockets": { .. } }` form or a
/// bare `{ "id": { .. } }` map.
///
/// The form is picked up front so entry errors (a bad colour, a missing
/// label) are reported as they are.
fn parse_entries(json: &str) -> Result<BTreeMap<String, SocketType>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let wrapped = match value.get("sockets") {
        // a bare entry that happens to be called "sockets" has a colour
        Some(serde_json::Value::Object(inner)) => {
            !(inner.contains_key("colour") || inner.contains_key("color"))
        }
        Some(_) => true,
        None => false,
    };

    if wrapped {
        let file: WrappedRegistry = serde_json::from_value(value)?;
        debug!(version = ?file.version, count = file.sockets.len(), "parsed wrapped registry");
        Ok(file.sockets)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}

/// Immutable lookup table from socket type id to [`SocketType`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SocketRegistry {
    entries: BTreeMap<String, SocketType>,
}

impl SocketRegistry {
    /// Loads the registry embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let json_data = include_str!("sockets.json");
        Self::from_json_str(json_data).context("Failed to parse embedded sockets.json")
    }

    /// Parses a registry from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries = parse_entries(json).context("Invalid socket registry JSON")?;
        Ok(Self { entries })
    }

    /// Loads a registry file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context(format!(
            "Failed to read socket registry: {}",
            path.display()
        ))?;
        let registry = Self::from_json_str(&content).context(format!(
            "Failed to parse socket registry: {}",
            path.display()
        ))?;
        debug!(
            path = %path.display(),
            count = registry.len(),
            "loaded socket registry file"
        );
        Ok(registry)
    }

    /// Loads the builtin registry and layers an optional override file on top.
    pub fn load(override_file: Option<&Path>) -> Result<Self> {
        let mut registry = Self::builtin()?;
        if let Some(path) = override_file {
            registry.merge(Self::from_file(path)?);
        }
        Ok(registry)
    }

    /// Adds every entry of `other`, replacing entries with the same id.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }

    /// Gets a socket type by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SocketType> {
        self.entries.get(id)
    }

    /// Resolves the type of a device socket.
    ///
    /// Fails with [`ShapeError::UnknownSocketType`] naming both the type id
    /// and the socket when the id is not registered.
    pub fn lookup(&self, socket: &Socket, role: SocketRole) -> Result<&SocketType, ShapeError> {
        self.get(&socket.socket_type)
            .ok_or_else(|| ShapeError::UnknownSocketType {
                socket_type: socket.socket_type.clone(),
                socket: socket.name.clone(),
                role,
            })
    }

    /// Iterates entries sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SocketType)> {
        self.entries.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Number of registered socket types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no socket types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
