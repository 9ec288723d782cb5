//! Audio device mirrors and classification.

use serde::{Deserialize, Serialize};

use crate::props::{PropertyMap, keys};

/// Name marker for effects-processing devices. Null-sink nodes carrying it
/// are listed as hardware even though they are software-backed.
pub const EFFECTS_DEVICE_MARKER: &str = "easyeffects_";

/// Factory behind virtual null-audio nodes.
pub const NULL_SINK_FACTORY: &str = "support.null-audio-sink";

/// Kind of audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// Output device (playback endpoint)
    Sink,
    /// Input device (capture endpoint)
    Source,
}

impl DeviceKind {
    /// Media class used when creating a virtual node of this kind.
    #[must_use]
    pub fn media_class(self) -> &'static str {
        match self {
            Self::Sink => "Audio/Sink",
            Self::Source => "Audio/Source/Virtual",
        }
    }
}

/// Port direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port (receives audio)
    Input,
    /// Output port (sends audio)
    Output,
}

impl PortDirection {
    /// Device kind whose ports face this direction: sinks expose output
    /// ports, sources expose input ports.
    #[must_use]
    pub fn device_kind(self) -> DeviceKind {
        match self {
            Self::Output => DeviceKind::Sink,
            Self::Input => DeviceKind::Source,
        }
    }
}

/// Information about a server sink or source.
///
/// Indices are assigned by the server and not stable across restarts; the
/// name is the stable key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Server object index
    pub index: u32,
    /// Unique device name
    pub name: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Per-channel volume levels in percent
    pub channel_volumes: Vec<f32>,
    /// Mute flag
    pub mute: bool,
    /// Server properties
    pub properties: PropertyMap,
}

impl DeviceInfo {
    /// Channel count, derived from the volume vector.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.channel_volumes.len()
    }

    /// Check if this is a monitor device.
    #[must_use]
    pub fn is_monitor(&self) -> bool {
        self.properties.get(keys::DEVICE_CLASS) == Some("monitor")
    }

    /// Check if this device is backed by a null-audio node.
    #[must_use]
    pub fn is_null_sink(&self) -> bool {
        self.properties.get(keys::FACTORY_NAME) == Some(NULL_SINK_FACTORY)
    }

    /// Check if this is an effects-processing device.
    #[must_use]
    pub fn is_effects_device(&self) -> bool {
        self.name.contains(EFFECTS_DEVICE_MARKER)
    }

    /// Check if this device should be listed as hardware.
    ///
    /// Monitors are never hardware; null-audio devices are not hardware
    /// unless they carry the effects marker.
    #[must_use]
    pub fn is_hardware(&self) -> bool {
        !self.is_monitor() && (!self.is_null_sink() || self.is_effects_device())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, props: &[(&str, &str)]) -> DeviceInfo {
        DeviceInfo {
            index: 0,
            name: name.to_string(),
            description: None,
            channel_volumes: vec![100.0, 100.0],
            mute: false,
            properties: props.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect(),
        }
    }

    #[test]
    fn test_plain_device_is_hardware() {
        let dev = device("alsa_output.pci-0000_00_1f.3.analog-stereo", &[]);
        assert!(dev.is_hardware());
    }

    #[test]
    fn test_monitor_is_not_hardware() {
        let dev = device("alsa_output.analog-stereo.monitor", &[("device.class", "monitor")]);
        assert!(dev.is_monitor());
        assert!(!dev.is_hardware());
    }

    #[test]
    fn test_null_sink_is_not_hardware() {
        let dev = device("virtual-music", &[("factory.name", NULL_SINK_FACTORY)]);
        assert!(dev.is_null_sink());
        assert!(!dev.is_hardware());
    }

    #[test]
    fn test_effects_null_sink_is_hardware() {
        let dev = device("easyeffects_sink", &[("factory.name", NULL_SINK_FACTORY)]);
        assert!(dev.is_null_sink());
        assert!(dev.is_effects_device());
        assert!(dev.is_hardware());
    }

    #[test]
    fn test_effects_monitor_still_excluded() {
        // The effects marker only rescues null sinks, not monitors
        let dev = device("easyeffects_sink.monitor", &[("device.class", "monitor")]);
        assert!(!dev.is_hardware());
    }

    #[test]
    fn test_channels_follow_volume_vector() {
        let mut dev = device("x", &[]);
        assert_eq!(dev.channels(), 2);
        dev.channel_volumes = vec![50.0; 6];
        assert_eq!(dev.channels(), 6);
    }

    #[test]
    fn test_device_class_empty_is_not_monitor() {
        let dev = device("x", &[("device.class", "")]);
        assert!(!dev.is_monitor());
    }
}
