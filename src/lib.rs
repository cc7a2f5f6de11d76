//! devshape library
//!
//! Turns JSON descriptions of broadcast and AV devices into draw.io stencil
//! shapes: socket registry, compact and standard layouts, device catalog
//! discovery and output sinks.

// Module declarations
#[cfg(feature = "ratatui")]
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod shape;
pub mod sockets;
#[cfg(feature = "ratatui")]
pub mod tui;

pub use error::ShapeError;
pub use models::{Device, DeviceOptions, Socket, SocketRole};
pub use shape::{render_shape, ShapeResult};
pub use sockets::{SocketRegistry, SocketType};
