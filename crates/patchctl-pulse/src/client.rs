//! Client seam for audio-server requests.

use patchctl_core::{DeviceInfo, DeviceKind, StreamInfo, StreamKind};

use crate::error::Result;

/// Typed requests this layer issues over the server's client interface.
///
/// Missing objects and rejected operations are results, not errors:
/// lookups return `Ok(None)` and moves return `Ok(false)`. `Err` is
/// reserved for transport failures, which propagate untranslated.
///
/// Every method takes `&mut self`: the underlying connection handles are
/// driven synchronously and are not safe to share between threads.
pub trait SoundServer {
    /// Resolve a device by its unique name.
    fn device_by_name(&mut self, kind: DeviceKind, name: &str) -> Result<Option<DeviceInfo>>;

    /// Resolve a device by its server index.
    fn device_by_index(&mut self, kind: DeviceKind, index: u32) -> Result<Option<DeviceInfo>>;

    /// All devices of a kind, in server order.
    fn list_devices(&mut self, kind: DeviceKind) -> Result<Vec<DeviceInfo>>;

    /// All application streams of a kind, in server order.
    fn list_streams(&mut self, kind: StreamKind) -> Result<Vec<StreamInfo>>;

    /// The server's current default device of a kind.
    fn default_device(&mut self, kind: DeviceKind) -> Result<DeviceInfo>;

    /// Make the named device the server default.
    fn set_default_device(&mut self, kind: DeviceKind, name: &str) -> Result<()>;

    /// Apply per-channel volume levels (percent) to the named device.
    fn set_volume(&mut self, kind: DeviceKind, name: &str, levels: &[f32]) -> Result<()>;

    /// Mute or unmute the named device.
    fn set_mute(&mut self, kind: DeviceKind, name: &str, mute: bool) -> Result<()>;

    /// Move a stream to the device with the given index. Returns false when
    /// the server rejects the move in the stream's current state.
    fn move_stream(&mut self, kind: StreamKind, stream_index: u32, device_index: u32)
    -> Result<bool>;
}
