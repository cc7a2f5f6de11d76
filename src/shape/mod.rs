//! Stencil shape generation.
//!
//! Turns a [`Device`] into draw.io stencil markup. Two layouts exist:
//!
//! - [`ShapeKind::Compact`]: one fixed-height box, first input and first output only
//! - [`ShapeKind::Standard`]: header, one row per socket, footer
//!
//! Rendering is a pure function of the device and the socket registry. It
//! either returns a complete [`ShapeResult`] or fails before producing any
//! markup.

pub mod compact;
pub mod geometry;
pub mod markup;
pub mod standard;

use serde::Serialize;
use tracing::debug;

use crate::error::ShapeError;
use crate::models::Device;
use crate::sockets::SocketRegistry;

/// Generated stencil markup with its overall dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeResult {
    /// Complete `<shape>` document
    pub markup: String,
    /// Overall width in stencil units
    pub width: f64,
    /// Overall height in stencil units
    pub height: f64,
}

/// Layout variant, selected by the device's `compact` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Single-row box
    Compact,
    /// Header / pins / footer
    Standard,
}

impl ShapeKind {
    /// Chooses the layout for a device.
    #[must_use]
    pub fn for_device(device: &Device) -> Self {
        if device.options.compact {
            Self::Compact
        } else {
            Self::Standard
        }
    }

    /// Renders a device with this layout.
    pub fn render(
        self,
        device: &Device,
        registry: &SocketRegistry,
    ) -> Result<ShapeResult, ShapeError> {
        match self {
            Self::Compact => compact::render(device, registry),
            Self::Standard => standard::render(device, registry),
        }
    }
}

/// Validates a device and renders it with the layout its options select.
///
/// Every socket type is resolved up front, including sockets the compact
/// layout does not draw, so an unknown type always fails the render.
pub fn render_shape(device: &Device, registry: &SocketRegistry) -> Result<ShapeResult, ShapeError> {
    device.options.validate()?;
    for (role, socket) in device.sockets() {
        registry.lookup(socket, role)?;
    }

    let kind = ShapeKind::for_device(device);
    let shape = kind.render(device, registry)?;
    debug!(
        vendor = %device.options.vendor,
        model = %device.options.model,
        ?kind,
        width = shape.width,
        height = shape.height,
        "rendered shape"
    );
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeviceOptions, SocketRole};

    #[test]
    fn test_kind_follows_compact_flag() {
        let mut device = Device::new(DeviceOptions::new("Acme", "X1"));
        assert_eq!(ShapeKind::for_device(&device), ShapeKind::Standard);
        device.options.compact = true;
        assert_eq!(ShapeKind::for_device(&device), ShapeKind::Compact);
    }

    #[test]
    fn test_unknown_type_beyond_first_fails_compact() {
        let registry = SocketRegistry::builtin().unwrap();
        let mut device = Device::new(DeviceOptions::new("Acme", "X1"))
            .with_input("bnc", "A")
            .with_input("xyz", "B");
        device.options.compact = true;

        let err = render_shape(&device, &registry).unwrap_err();
        assert_eq!(
            err,
            ShapeError::UnknownSocketType {
                socket_type: "xyz".to_string(),
                socket: "B".to_string(),
                role: SocketRole::Input,
            }
        );
    }

    #[test]
    fn test_invalid_options_fail_before_layout() {
        let registry = SocketRegistry::builtin().unwrap();
        let mut device = Device::new(DeviceOptions::new("Acme", "X1"));
        device.options.width = Some(0);
        assert!(matches!(
            render_shape(&device, &registry),
            Err(ShapeError::InvalidDeviceOptions(_))
        ));
    }
}
