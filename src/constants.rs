//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "devshape";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "devshape";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "devshape";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "DEVSHAPE_CONFIG_DIR";
