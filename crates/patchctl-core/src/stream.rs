//! Application stream mirrors and listing filters.

use serde::{Deserialize, Serialize};

use crate::device::DeviceKind;
use crate::props::{PropertyMap, keys};

/// Name marker for peak-measurement probe streams.
pub const PEAK_PROBE_MARKER: &str = "_peak";

/// Application id of the volume-control GUI, whose own streams are hidden
/// from listings.
pub const VOLUME_GUI_ID: &str = "org.PulseAudio.pavucontrol";

/// Kind of application stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Playback stream attached to a sink
    SinkInput,
    /// Capture stream attached to a source
    SourceOutput,
}

impl StreamKind {
    /// Kind of device this stream attaches to.
    #[must_use]
    pub fn device_kind(self) -> DeviceKind {
        match self {
            Self::SinkInput => DeviceKind::Sink,
            Self::SourceOutput => DeviceKind::Source,
        }
    }
}

/// Information about one application stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Server object index
    pub index: u32,
    /// Index of the owning device
    pub device_index: u32,
    /// Name of the owning device, resolved during listing
    pub device_name: Option<String>,
    /// Server properties
    pub properties: PropertyMap,
}

impl StreamInfo {
    /// Application name, when the stream carries one.
    #[must_use]
    pub fn application_name(&self) -> Option<&str> {
        self.properties.get(keys::APPLICATION_NAME)
    }

    /// Check if this is a peak-measurement probe stream.
    #[must_use]
    pub fn is_peak_probe(&self) -> bool {
        self.application_name().is_some_and(|name| name.contains(PEAK_PROBE_MARKER))
    }

    /// Check if this stream belongs to the volume-control GUI.
    #[must_use]
    pub fn is_volume_gui(&self) -> bool {
        self.properties.get(keys::APPLICATION_ID) == Some(VOLUME_GUI_ID)
    }

    /// Check if this stream should appear in application listings.
    #[must_use]
    pub fn is_listable(&self) -> bool {
        self.application_name().is_some() && !self.is_peak_probe() && !self.is_volume_gui()
    }
}
