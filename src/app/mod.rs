//! Application orchestration layer
//!
//! Coordinates the terminal picker, the catalog and the output sink for the
//! interactive flow without containing rendering logic itself.

/// Vendor then model selection over the device catalog
pub mod select;

pub use select::{run_device_picker_terminal, run_interactive};
