//! CLI command handlers for devshape.
//!
//! This module provides headless, scriptable access to shape generation,
//! the device catalog and configuration.

pub mod common;
pub mod config;
pub mod generate;
pub mod list;
pub mod sockets;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use list::ListArgs;
pub use sockets::SocketsArgs;
