//! Virtual node descriptions for the node-creation tool.

use patchctl_core::DeviceKind;

/// Properties for a virtual null-audio node.
#[derive(Debug, Clone)]
pub struct NodeSpec {
    /// Device kind the node presents as
    pub kind: DeviceKind,
    /// Node name, doubling as its description
    pub name: String,
    /// Number of audio channels
    pub channels: u32,
    /// Audio channel position labels (e.g. "FL", "FR")
    pub positions: Vec<String>,
}

impl NodeSpec {
    /// Create a node description.
    #[must_use]
    pub fn new(kind: DeviceKind, name: &str, channels: u32, positions: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            channels,
            positions: positions.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    /// Create a stereo node description.
    #[must_use]
    pub fn stereo(kind: DeviceKind, name: &str) -> Self {
        Self::new(kind, name, 2, &["FL", "FR"])
    }

    /// Create a mono node description.
    #[must_use]
    pub fn mono(kind: DeviceKind, name: &str) -> Self {
        Self::new(kind, name, 1, &["MONO"])
    }

    /// Render the braces-delimited config block passed to
    /// `pw-cli create-node adapter`.
    ///
    /// The node lingers after its creating client disconnects, and monitor
    /// channel volumes are enabled so per-channel levels stay visible.
    #[must_use]
    pub fn to_config_block(&self) -> String {
        format!(
            "{{\n    \
             factory.name=support.null-audio-sink\n    \
             node.name=\"{name}\"\n    \
             node.description=\"{name}\"\n    \
             media.class={class}\n    \
             audio.channels={channels}\n    \
             audio.position=\"{positions}\"\n    \
             monitor.channel-volumes=true\n    \
             object.linger=true\n\
             }}",
            name = self.name,
            class = self.kind.media_class(),
            channels = self.channels,
            positions = self.positions.join(" "),
        )
    }
}
