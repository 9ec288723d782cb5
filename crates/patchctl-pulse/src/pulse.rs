//! pulsectl-backed server client.

use libpulse_binding::proplist::Proplist;
use libpulse_binding::volume::{ChannelVolumes, Volume};
use pulsectl::controllers::types::{ApplicationInfo, DeviceInfo as PaDeviceInfo};
use pulsectl::controllers::{AppControl, DeviceControl, SinkController, SourceController};
use tracing::debug;

use patchctl_core::{DeviceInfo, DeviceKind, PropertyMap, StreamInfo, StreamKind};

use crate::client::SoundServer;
use crate::error::{Error, Result};

// PulseAudio constant
const PA_VOLUME_NORM: u32 = 0x10000; // 65536

/// Long-lived connections to the audio server, one handle per device
/// class, created once and reused by every request.
pub struct PulseClient {
    sinks: SinkController,
    sources: SourceController,
}

impl PulseClient {
    /// Connect to the audio server. Fails when the server is not running.
    pub fn connect() -> Result<Self> {
        Ok(Self {
            sinks: SinkController::create()
                .map_err(|e| Error::Connection(e.to_string()))?,
            sources: SourceController::create()
                .map_err(|e| Error::Connection(e.to_string()))?,
        })
    }
}

impl SoundServer for PulseClient {
    fn device_by_name(&mut self, kind: DeviceKind, name: &str) -> Result<Option<DeviceInfo>> {
        let found = match kind {
            DeviceKind::Sink => self.sinks.get_device_by_name(name),
            DeviceKind::Source => self.sources.get_device_by_name(name),
        };
        match found {
            Ok(dev) => Ok(Some(device_from_pa(&dev))),
            // pulsectl reports a missing object the same way as a failed
            // introspection, so every lookup error maps to "not found"
            Err(e) => {
                debug!(device = %name, error = %e, "Device lookup failed");
                Ok(None)
            }
        }
    }

    fn device_by_index(&mut self, kind: DeviceKind, index: u32) -> Result<Option<DeviceInfo>> {
        let found = match kind {
            DeviceKind::Sink => self.sinks.get_device_by_index(index),
            DeviceKind::Source => self.sources.get_device_by_index(index),
        };
        match found {
            Ok(dev) => Ok(Some(device_from_pa(&dev))),
            Err(e) => {
                debug!(index, error = %e, "Device lookup failed");
                Ok(None)
            }
        }
    }

    fn list_devices(&mut self, kind: DeviceKind) -> Result<Vec<DeviceInfo>> {
        // Enumeration runs on its own short-lived connection, keeping the
        // long-lived handles out of list traffic
        let devices = match kind {
            DeviceKind::Sink => SinkController::create()
                .map_err(|e| Error::Connection(e.to_string()))?
                .list_devices(),
            DeviceKind::Source => SourceController::create()
                .map_err(|e| Error::Connection(e.to_string()))?
                .list_devices(),
        }
        .map_err(|e| Error::Client(e.to_string()))?;

        Ok(devices.iter().map(device_from_pa).collect())
    }

    fn list_streams(&mut self, kind: StreamKind) -> Result<Vec<StreamInfo>> {
        let apps = match kind {
            StreamKind::SinkInput => self.sinks.list_applications(),
            StreamKind::SourceOutput => self.sources.list_applications(),
        }
        .map_err(|e| Error::Client(e.to_string()))?;

        Ok(apps.iter().map(stream_from_pa).collect())
    }

    fn default_device(&mut self, kind: DeviceKind) -> Result<DeviceInfo> {
        let dev = match kind {
            DeviceKind::Sink => self.sinks.get_default_device(),
            DeviceKind::Source => self.sources.get_default_device(),
        }
        .map_err(|e| Error::Client(e.to_string()))?;

        Ok(device_from_pa(&dev))
    }

    fn set_default_device(&mut self, kind: DeviceKind, name: &str) -> Result<()> {
        match kind {
            DeviceKind::Sink => self.sinks.set_default_device(name),
            DeviceKind::Source => self.sources.set_default_device(name),
        }
        .map_err(|e| Error::Client(e.to_string()))?;
        Ok(())
    }

    fn set_volume(&mut self, kind: DeviceKind, name: &str, levels: &[f32]) -> Result<()> {
        match kind {
            DeviceKind::Sink => {
                let dev = self
                    .sinks
                    .get_device_by_name(name)
                    .map_err(|e| Error::Client(e.to_string()))?;
                let volumes = volumes_from_percent(&dev.volume, levels);
                self.sinks.set_device_volume_by_name(name, &volumes);
            }
            DeviceKind::Source => {
                let dev = self
                    .sources
                    .get_device_by_name(name)
                    .map_err(|e| Error::Client(e.to_string()))?;
                let volumes = volumes_from_percent(&dev.volume, levels);
                self.sources.set_device_volume_by_name(name, &volumes);
            }
        }
        Ok(())
    }

    fn set_mute(&mut self, kind: DeviceKind, name: &str, mute: bool) -> Result<()> {
        match kind {
            DeviceKind::Sink => self.sinks.set_device_mute_by_name(name, mute),
            DeviceKind::Source => self.sources.set_device_mute_by_name(name, mute),
        }
        Ok(())
    }

    fn move_stream(
        &mut self,
        kind: StreamKind,
        stream_index: u32,
        device_index: u32,
    ) -> Result<bool> {
        let moved = match kind {
            StreamKind::SinkInput => self.sinks.move_app_by_index(stream_index, device_index),
            StreamKind::SourceOutput => {
                self.sources.move_app_by_index(stream_index, device_index)
            }
        };
        match moved {
            Ok(ok) => Ok(ok),
            // the server refuses moves while a stream is mid-transition
            Err(e) => {
                debug!(stream = stream_index, error = %e, "Move rejected");
                Ok(false)
            }
        }
    }
}

fn device_from_pa(dev: &PaDeviceInfo) -> DeviceInfo {
    DeviceInfo {
        index: dev.index,
        name: dev.name.clone().unwrap_or_default(),
        description: dev.description.clone(),
        channel_volumes: dev.volume.get().iter().map(|v| raw_to_percent(v.0)).collect(),
        mute: dev.mute,
        properties: props_from_pa(&dev.proplist),
    }
}

fn stream_from_pa(app: &ApplicationInfo) -> StreamInfo {
    StreamInfo {
        index: app.index,
        device_index: app.connection_id,
        device_name: None,
        properties: props_from_pa(&app.proplist),
    }
}

fn props_from_pa(proplist: &Proplist) -> PropertyMap {
    proplist
        .iter()
        .filter_map(|key| proplist.get_str(&key).map(|value| (key, value)))
        .collect()
}

/// Rebuild a channel-volume set from percent levels, keeping the channel
/// count of the current set.
fn volumes_from_percent(current: &ChannelVolumes, levels: &[f32]) -> ChannelVolumes {
    let mut volumes = *current;
    for (value, level) in volumes.get_mut().iter_mut().zip(levels) {
        *value = Volume(percent_to_raw(*level));
    }
    volumes
}

fn raw_to_percent(raw: u32) -> f32 {
    (raw as f32 / PA_VOLUME_NORM as f32) * 100.0
}

fn percent_to_raw(percent: f32) -> u32 {
    ((percent / 100.0) * PA_VOLUME_NORM as f32) as u32
}
