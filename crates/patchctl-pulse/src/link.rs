//! Port naming and channel-map parsing for the link tool.

use crate::error::{Error, Result};

/// One `from:to` channel-index pair of a channel map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelPair {
    /// Channel index on the sending device
    pub from: usize,
    /// Channel index on the receiving device
    pub to: usize,
}

/// Parse a space-separated channel map such as `"0:0 1:1"`.
///
/// Pair order is preserved; a malformed pair fails the whole map.
pub fn parse_channel_map(map: &str) -> Result<Vec<ChannelPair>> {
    map.split_whitespace()
        .map(|pair| {
            let invalid = || Error::InvalidChannelMap(pair.to_string());
            let (from, to) = pair.split_once(':').ok_or_else(invalid)?;
            Ok(ChannelPair {
                from: from.parse().map_err(|_| invalid())?,
                to: to.parse().map_err(|_| invalid())?,
            })
        })
        .collect()
}

/// Fully qualified port name (`device:port`).
#[must_use]
pub fn port_name(device: &str, port: &str) -> String {
    format!("{device}:{port}")
}
