//! Patchctl audio-server integration.
//!
//! This crate is the control surface over the system audio server. It:
//! - Creates and destroys virtual null-audio devices through the external
//!   node tool
//! - Links and unlinks channel ports through the external link tool
//! - Drives volume, mute, default-device selection, and stream routing
//!   through the server's client interface
//! - Enumerates hardware devices and running application streams
//!
//! Everything is synchronous and blocking; callers that need timeouts or
//! cancellation must wrap these calls externally.

pub mod client;
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod link;
pub mod node;
pub mod pulse;

pub use client::SoundServer;
pub use command::{CommandOutput, CommandRunner, SystemRunner, is_pipewire};
pub use config::{Config, ToolsConfig, load_config};
pub use control::AudioControl;
pub use error::{Error, Result};
pub use node::NodeSpec;
pub use pulse::PulseClient;
