//! Device descriptions loaded from the catalog.
//!
//! A device file looks like:
//!
//! ```json
//! {
//!   "options": { "vendor": "Blackmagic", "model": "Mini Converter", "compact": true },
//!   "inputs":  [{ "type": "bnc", "name": "SDI In" }],
//!   "outputs": [{ "type": "hdmi", "name": "HDMI Out" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShapeError;

/// Body width of a compact shape when the device does not set one.
pub const DEFAULT_COMPACT_WIDTH: i64 = 120;

/// Body width of a standard shape when the device does not set one.
pub const DEFAULT_STANDARD_WIDTH: i64 = 150;

/// Side of the shape a socket sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketRole {
    /// Left edge
    Input,
    /// Right edge
    Output,
}

impl fmt::Display for SocketRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// A single connector on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socket {
    /// Socket type id, resolved through the socket registry
    #[serde(rename = "type")]
    pub socket_type: String,
    /// Display name drawn next to the stem
    pub name: String,
}

impl Socket {
    /// Creates a socket of the given type.
    pub fn new(socket_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            socket_type: socket_type.into(),
            name: name.into(),
        }
    }
}

/// Rendering options carried by a device file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeviceOptions {
    /// Manufacturer name
    #[serde(default)]
    pub vendor: String,
    /// Model name
    #[serde(default)]
    pub model: String,
    /// Render the single-row compact shape instead of the standard one
    #[serde(default)]
    pub compact: bool,
    /// Body width override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    /// Emit `%vendor%`/`%model%` placeholders instead of literal strings
    #[serde(default)]
    pub placeholders: bool,
}

impl DeviceOptions {
    /// Creates options for a standard device with defaults for everything else.
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Checks that vendor and model are present and that any width is positive.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.vendor.trim().is_empty() {
            return Err(ShapeError::InvalidDeviceOptions(
                "'vendor' is required".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ShapeError::InvalidDeviceOptions(
                "'model' is required".to_string(),
            ));
        }
        if let Some(width) = self.width {
            if width <= 0 {
                return Err(ShapeError::InvalidDeviceOptions(format!(
                    "'width' must be a positive integer, got {width}"
                )));
            }
        }
        Ok(())
    }

    /// Body width for the selected layout, falling back to the layout default.
    #[must_use]
    pub fn body_width(&self) -> f64 {
        let default = if self.compact {
            DEFAULT_COMPACT_WIDTH
        } else {
            DEFAULT_STANDARD_WIDTH
        };
        self.width.filter(|w| *w > 0).unwrap_or(default) as f64
    }
}

/// A device description: options plus ordered input and output sockets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Rendering options
    #[serde(default)]
    pub options: DeviceOptions,
    /// Input sockets, top to bottom
    #[serde(default)]
    pub inputs: Vec<Socket>,
    /// Output sockets, top to bottom
    #[serde(default)]
    pub outputs: Vec<Socket>,
}

impl Device {
    /// Creates a device with no sockets.
    #[must_use]
    pub fn new(options: DeviceOptions) -> Self {
        Self {
            options,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Adds an input socket (builder style).
    pub fn with_input(mut self, socket_type: &str, name: &str) -> Self {
        self.inputs.push(Socket::new(socket_type, name));
        self
    }

    /// Adds an output socket (builder style).
    pub fn with_output(mut self, socket_type: &str, name: &str) -> Self {
        self.outputs.push(Socket::new(socket_type, name));
        self
    }

    /// Parses and validates a device from JSON text.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let device: Self = serde_json::from_str(json)?;
        device.options.validate()?;
        Ok(device)
    }

    /// All sockets with their role, inputs first, in list order.
    pub fn sockets(&self) -> impl Iterator<Item = (SocketRole, &Socket)> {
        self.inputs
            .iter()
            .map(|s| (SocketRole::Input, s))
            .chain(self.outputs.iter().map(|s| (SocketRole::Output, s)))
    }

    /// Larger of the input and output counts.
    #[must_use]
    pub fn max_pins(&self) -> usize {
        self.inputs.len().max(self.outputs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_device() {
        let json = r#"{
            "options": { "vendor": "Acme", "model": "X1", "compact": true, "width": 140, "placeholders": true },
            "inputs": [{ "type": "bnc", "name": "In1" }],
            "outputs": [{ "type": "hdmi", "name": "Out1" }, { "type": "rj45", "name": "LAN" }]
        }"#;
        let device = Device::from_json_str(json).unwrap();
        assert!(device.options.compact);
        assert!(device.options.placeholders);
        assert_eq!(device.options.width, Some(140));
        assert_eq!(device.inputs[0].socket_type, "bnc");
        assert_eq!(device.outputs.len(), 2);
        assert_eq!(device.max_pins(), 2);
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let json = r#"{ "options": { "vendor": "Acme", "model": "X1" } }"#;
        let device = Device::from_json_str(json).unwrap();
        assert!(!device.options.compact);
        assert!(!device.options.placeholders);
        assert!(device.inputs.is_empty());
        assert!(device.outputs.is_empty());
        assert_eq!(device.options.body_width(), 150.0);
    }

    #[test]
    fn test_compact_default_width() {
        let mut options = DeviceOptions::new("Acme", "X1");
        options.compact = true;
        assert_eq!(options.body_width(), 120.0);
        options.width = Some(90);
        assert_eq!(options.body_width(), 90.0);
    }

    #[test]
    fn test_missing_vendor_is_invalid() {
        let json = r#"{ "options": { "model": "X1" } }"#;
        let err = Device::from_json_str(json).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShapeError>(),
            Some(&ShapeError::InvalidDeviceOptions("'vendor' is required".to_string()))
        );
    }

    #[test]
    fn test_blank_model_is_invalid() {
        let options = DeviceOptions::new("Acme", "  ");
        assert!(matches!(
            options.validate(),
            Err(ShapeError::InvalidDeviceOptions(_))
        ));
    }

    #[test]
    fn test_non_positive_width_is_invalid() {
        let mut options = DeviceOptions::new("Acme", "X1");
        options.width = Some(0);
        assert!(options.validate().is_err());
        options.width = Some(-10);
        assert!(options.validate().is_err());
        options.width = Some(1);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_sockets_iterates_inputs_then_outputs() {
        let device = Device::new(DeviceOptions::new("Acme", "X1"))
            .with_input("bnc", "A")
            .with_output("hdmi", "B")
            .with_input("xlr", "C");
        let names: Vec<_> = device
            .sockets()
            .map(|(role, s)| format!("{role}:{}", s.name))
            .collect();
        assert_eq!(names, vec!["input:A", "input:C", "output:B"]);
    }
}
