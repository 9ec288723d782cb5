//! Device and stream control facade.

use tracing::{debug, error, warn};

use patchctl_core::{DeviceInfo, DeviceKind, PortDirection, StreamInfo, StreamKind, clamp_percent};

use crate::client::SoundServer;
use crate::command::{CommandRunner, SystemRunner};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::link::{parse_channel_map, port_name};
use crate::node::NodeSpec;
use crate::pulse::PulseClient;

/// Control facade over the audio server.
///
/// Two execution paths: node creation/destruction and port linking spawn
/// the external graph tools; everything else goes over the held client
/// connection. Every operation blocks until the child process exits or the
/// server round-trips the request.
pub struct AudioControl<C = PulseClient, R = SystemRunner> {
    client: C,
    runner: R,
    config: Config,
}

impl AudioControl {
    /// Connect to the audio server with the given configuration.
    pub fn connect(config: Config) -> Result<Self> {
        Ok(Self { client: PulseClient::connect()?, runner: SystemRunner, config })
    }
}

impl<C: SoundServer, R: CommandRunner> AudioControl<C, R> {
    /// Build a facade over explicit client and runner implementations.
    pub fn with_parts(client: C, runner: R, config: Config) -> Self {
        Self { client, runner, config }
    }

    /// Create a virtual null-audio device in the server graph.
    ///
    /// The name doubles as the node description; the node lingers after
    /// this process exits.
    pub fn create_device(
        &mut self,
        kind: DeviceKind,
        name: &str,
        channels: u32,
        positions: &[&str],
    ) -> Result<()> {
        let spec = NodeSpec::new(kind, name, channels, positions);
        let argv = vec![
            self.config.tools.node_tool.clone(),
            "create-node".to_string(),
            "adapter".to_string(),
            spec.to_config_block(),
        ];
        let out = self.runner.run(&argv)?;
        if !out.success() {
            return Err(Error::DeviceCreation(out.stderr));
        }
        debug!(device = %name, "Created virtual device");
        Ok(())
    }

    /// Destroy a named node in the server graph.
    pub fn remove_device(&mut self, name: &str) -> Result<()> {
        let argv = vec![
            self.config.tools.node_tool.clone(),
            "destroy".to_string(),
            name.to_string(),
        ];
        let out = self.runner.run(&argv)?;
        if !out.success() {
            return Err(Error::DeviceRemoval(out.stderr));
        }
        debug!(device = %name, "Removed virtual device");
        Ok(())
    }

    /// Check if a sink or source with this exact name currently resolves.
    pub fn device_exists(&mut self, name: &str) -> Result<bool> {
        let sink = self.client.device_by_name(DeviceKind::Sink, name)?;
        let source = self.client.device_by_name(DeviceKind::Source, name)?;
        Ok(sink.is_some() || source.is_some())
    }

    /// Resolve a device by name. `Ok(None)` when it does not exist.
    pub fn get_device_by_name(
        &mut self,
        kind: DeviceKind,
        name: &str,
    ) -> Result<Option<DeviceInfo>> {
        self.client.device_by_name(kind, name)
    }

    /// Resolve a device by server index. `Ok(None)` when it does not exist.
    pub fn get_device_by_index(
        &mut self,
        kind: DeviceKind,
        index: u32,
    ) -> Result<Option<DeviceInfo>> {
        self.client.device_by_index(kind, index)
    }

    /// Connect or disconnect two named ports.
    ///
    /// The tool's outcome is not reported: a failed link attempt still
    /// returns success. Callers that depend on the link being up must
    /// verify it separately.
    pub fn link_ports(&mut self, from: &str, to: &str, connect: bool) -> Result<()> {
        let mut argv =
            vec![self.config.tools.link_tool.clone(), from.to_string(), to.to_string()];
        if !connect {
            argv.push("-d".to_string());
        }
        self.runner.run(&argv)?;
        Ok(())
    }

    /// Channel-index port labels for a device, one per volume channel, in
    /// ascending order.
    ///
    /// An unresolvable device yields an empty list, not an error.
    pub fn get_ports(&mut self, direction: PortDirection, device: &str) -> Result<Vec<String>> {
        match self.client.device_by_name(direction.device_kind(), device)? {
            Some(dev) => Ok((0..dev.channels()).map(|i| i.to_string()).collect()),
            None => {
                warn!(device = %device, "Device not found");
                Ok(Vec::new())
            }
        }
    }

    /// Link (or unlink) channels of two devices pairwise.
    ///
    /// `channel_map` is a space-separated list of `from:to` channel-index
    /// pairs. Both devices' port lists are resolved before any link is
    /// attempted; an unresolvable device fails the whole call up front.
    pub fn link_channels(
        &mut self,
        from_device: &str,
        to_device: &str,
        channel_map: &str,
        connect: bool,
    ) -> Result<()> {
        let from_ports = self.get_ports(PortDirection::Output, from_device)?;
        let to_ports = self.get_ports(PortDirection::Input, to_device)?;
        if from_ports.is_empty() || to_ports.is_empty() {
            return Err(Error::PortsNotFound {
                from: from_device.to_string(),
                to: to_device.to_string(),
            });
        }

        for pair in parse_channel_map(channel_map)? {
            let out_of_range = || Error::InvalidChannelMap(format!("{}:{}", pair.from, pair.to));
            let from_port = from_ports.get(pair.from).ok_or_else(out_of_range)?;
            let to_port = to_ports.get(pair.to).ok_or_else(out_of_range)?;
            self.link_ports(
                &port_name(from_device, from_port),
                &port_name(to_device, to_port),
                connect,
            )?;
        }
        Ok(())
    }

    /// Set device volume in percent, clamped to the accepted range.
    ///
    /// With `selected_channels`, only channels whose mask entry is true
    /// take the new value; the rest keep their current level. Returns
    /// false when the device does not resolve.
    pub fn set_volume(
        &mut self,
        kind: DeviceKind,
        name: &str,
        value: i32,
        selected_channels: Option<&[bool]>,
    ) -> Result<bool> {
        let value = clamp_percent(value) as f32;
        let Some(device) = self.client.device_by_name(kind, name)? else {
            error!(device = %name, "Device not found");
            return Ok(false);
        };

        let levels: Vec<f32> = match selected_channels {
            None => vec![value; device.channels()],
            Some(mask) => device
                .channel_volumes
                .iter()
                .zip(mask)
                .map(|(current, selected)| if *selected { value } else { *current })
                .collect(),
        };
        self.client.set_volume(kind, name, &levels)?;
        Ok(true)
    }

    /// Mute or unmute a device. Returns false when it does not resolve.
    pub fn mute(&mut self, kind: DeviceKind, name: &str, state: bool) -> Result<bool> {
        if self.client.device_by_name(kind, name)?.is_none() {
            error!(device = %name, "Device not found");
            return Ok(false);
        }
        self.client.set_mute(kind, name, state)?;
        Ok(true)
    }

    /// Make a device the server default. Returns false when it does not
    /// resolve.
    pub fn set_primary(&mut self, kind: DeviceKind, name: &str) -> Result<bool> {
        if self.client.device_by_name(kind, name)?.is_none() {
            error!(device = %name, "Device not found");
            return Ok(false);
        }
        self.client.set_default_device(kind, name)?;
        Ok(true)
    }

    /// The server's current default device of a kind.
    pub fn get_primary(&mut self, kind: DeviceKind) -> Result<DeviceInfo> {
        self.client.default_device(kind)
    }

    /// All hardware devices of a kind, in server order.
    ///
    /// Monitors and plain null-audio devices are filtered out; null-audio
    /// devices carrying the effects marker stay in.
    pub fn list_devices(&mut self, kind: DeviceKind) -> Result<Vec<DeviceInfo>> {
        Ok(self.client.list_devices(kind)?.into_iter().filter(DeviceInfo::is_hardware).collect())
    }

    /// Application streams of a kind with their owning device's name
    /// attached.
    ///
    /// Nameless streams, peak-measurement probes, and the volume-control
    /// GUI's own streams are skipped. An owning device that fails to
    /// resolve fails the whole listing.
    pub fn list_apps(&mut self, kind: StreamKind) -> Result<Vec<StreamInfo>> {
        let device_kind = kind.device_kind();
        let mut apps = Vec::new();
        for mut stream in self.client.list_streams(kind)? {
            if !stream.is_listable() {
                continue;
            }
            let device = self
                .client
                .device_by_index(device_kind, stream.device_index)?
                .ok_or(Error::UnresolvedDeviceIndex(stream.device_index))?;
            stream.device_name = Some(device.name);
            apps.push(stream);
        }
        Ok(apps)
    }

    /// The device a stream is currently attached to. `Ok(None)` when its
    /// index does not resolve.
    pub fn get_app_device(
        &mut self,
        kind: StreamKind,
        stream: &StreamInfo,
    ) -> Result<Option<DeviceInfo>> {
        self.client.device_by_index(kind.device_kind(), stream.device_index)
    }

    /// Move an application stream to the named device.
    ///
    /// Returns false when the target does not resolve or the server
    /// rejects the move in the stream's current state.
    pub fn move_app_device(
        &mut self,
        kind: StreamKind,
        stream_index: u32,
        device_name: &str,
    ) -> Result<bool> {
        let Some(device) = self.client.device_by_name(kind.device_kind(), device_name)? else {
            warn!(device = %device_name, "Target device not found");
            return Ok(false);
        };
        if !self.client.move_stream(kind, stream_index, device.index)? {
            debug!(stream = stream_index, "Stream can't be moved");
            return Ok(false);
        }
        Ok(true)
    }
}
