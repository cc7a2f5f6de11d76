//! Errors raised while validating devices and rendering shapes.

use thiserror::Error;

use crate::models::SocketRole;

/// Errors that abort shape generation. No partial shape is produced for any of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// A socket references a type id that the registry does not know.
    #[error("unknown socket type '{socket_type}' on {role} socket '{socket}'")]
    UnknownSocketType {
        /// The offending socket type id
        socket_type: String,
        /// Display name of the socket carrying it
        socket: String,
        /// Whether the socket is an input or an output
        role: SocketRole,
    },

    /// Device options are missing a required field or carry an invalid value.
    #[error("invalid device options: {0}")]
    InvalidDeviceOptions(String),
}
