//! Service layer for application glue.
//!
//! This module ties configuration, the device catalog, the shape engine and
//! the output sinks together for the CLI and the interactive picker.

pub mod sink;
pub mod workspace;

pub use sink::Sink;
pub use workspace::Workspace;
