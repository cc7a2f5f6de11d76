//! Data models for device descriptions and colours.
//!
//! Models are plain data and carry no I/O; the catalog loads them and the
//! shape engine consumes them.

pub mod device;
pub mod rgb;

pub use device::{Device, DeviceOptions, Socket, SocketRole};
pub use rgb::RgbColor;
