//! Error types for the control facade.

use thiserror::Error;

/// Facade error type.
///
/// Only hard failures are variants here. Device-not-found conditions in
/// mute/volume/default/move operations are soft: they surface as a false
/// result, not as an error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Audio server connection failed: {0}")]
    Connection(String),

    #[error("Audio server request failed: {0}")]
    Client(String),

    #[error("Failed to create device: {0}")]
    DeviceCreation(String),

    #[error("Failed to remove device: {0}")]
    DeviceRemoval(String),

    #[error("Ports not found for devices {from} {to}")]
    PortsNotFound { from: String, to: String },

    #[error("Invalid channel map entry: {0}")]
    InvalidChannelMap(String),

    #[error("No device with index {0}")]
    UnresolvedDeviceIndex(u32),

    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
