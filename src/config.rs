//! Device and peer change sets
//!
//! This module defines the types a caller hands to a control backend to
//! reconfigure a device. A change set is partial: every absent field means
//! "leave the current value as is", which is why these types are built
//! from `Option`s where the snapshot types in [`crate::device`] and
//! [`crate::peer`] hold plain values. Applying a change set (diffing,
//! netlink encoding, transaction handling) is the backend's concern and
//! lives outside this crate.

use crate::error::{Result, WgModelError};
use crate::key::Key;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

/// Longest keepalive interval a backend can apply (the kernel stores whole
/// u16 seconds)
const MAX_KEEPALIVE: Duration = Duration::from_secs(u16::MAX as u64);

/// A change set for one device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// New private key, or `None` to keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<Key>,

    /// New UDP listen port, or `None` to keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listen_port: Option<u16>,

    /// New firewall mark, or `None` to keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fwmark: Option<u32>,

    /// Replace the device's entire peer list with `peers` instead of
    /// amending it
    #[serde(default)]
    pub replace_peers: bool,

    /// Peer change sets, applied in order
    #[serde(default)]
    pub peers: Vec<PeerConfig>,
}

impl DeviceConfig {
    /// Validate the change set
    ///
    /// Rejects contradictions a backend could not apply; emits warnings for
    /// legal-but-suspicious entries.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for peer in &self.peers {
            if !seen.insert(peer.public_key) {
                return Err(WgModelError::Config(format!(
                    "Peer {} appears more than once in the change set",
                    peer.public_key
                )));
            }
            peer.validate()?;
        }
        Ok(())
    }
}

/// A change set for one peer within a [`DeviceConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerConfig {
    /// Public key identifying the peer; always required
    pub public_key: Key,

    /// Remove this peer from the device; other fields are ignored
    #[serde(default)]
    pub remove: bool,

    /// Only apply this entry if the peer already exists on the device
    #[serde(default)]
    pub update_only: bool,

    /// New pre-shared key, or `None` to keep the current one
    ///
    /// `Some` with an all-zero key passes through unchanged; whether that
    /// means "clear the pre-shared key" is the protocol layer's convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preshared_key: Option<Key>,

    /// New endpoint, or `None` to keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<SocketAddr>,

    /// New keepalive interval (zero disables keepalives), or `None` to
    /// keep the current one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_keepalive_interval: Option<Duration>,

    /// Replace the peer's entire allowed-IP list with `allowed_ips`
    /// instead of amending it
    #[serde(default)]
    pub replace_allowed_ips: bool,

    /// CIDR ranges to authorize for this peer
    #[serde(default)]
    pub allowed_ips: Vec<IpNet>,
}

impl PeerConfig {
    /// Create a change set for the given peer with no changes requested
    pub fn new(public_key: Key) -> Self {
        Self {
            public_key,
            ..Self::default()
        }
    }

    /// Validate the peer change set
    pub fn validate(&self) -> Result<()> {
        if let Some(interval) = self.persistent_keepalive_interval {
            if interval > MAX_KEEPALIVE {
                return Err(WgModelError::Config(format!(
                    "Keepalive interval {}s for peer {} exceeds the maximum of {}s",
                    interval.as_secs(),
                    self.public_key,
                    u16::MAX
                )));
            }
        }

        if self.remove {
            if self.preshared_key.is_some()
                || self.endpoint.is_some()
                || self.persistent_keepalive_interval.is_some()
                || !self.allowed_ips.is_empty()
            {
                warn!(
                    "Removal entry for peer {} carries configuration fields that will be ignored",
                    self.public_key
                );
            }
            return Ok(());
        }

        if self.endpoint.is_none() && self.allowed_ips.is_empty() {
            warn!(
                "Peer {} has no endpoint and no allowed IPs - this peer may not be reachable",
                self.public_key
            );
        }

        Ok(())
    }
}
