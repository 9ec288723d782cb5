//! Patchctl Core - Domain model for audio devices and application streams.
//!
//! This crate contains the server-object mirrors and pure classification
//! rules shared by the integration layer: device and stream kinds, the
//! property bag, hardware classification, and volume clamping. It performs
//! no I/O and has no dependency on the audio server.

pub mod device;
pub mod props;
pub mod stream;
pub mod volume;

pub use device::{DeviceInfo, DeviceKind, PortDirection};
pub use props::PropertyMap;
pub use stream::{StreamInfo, StreamKind};
pub use volume::{VOLUME_MAX, clamp_percent};
