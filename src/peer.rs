//! WireGuard peer snapshot
//!
//! This module defines the `Peer` aggregate: one remote endpoint as it
//! appears in a device snapshot, with its keys, endpoint, keepalive
//! policy, traffic counters, and allowed address ranges.

use crate::key::Key;
use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::{Duration, SystemTime};

/// A WireGuard peer configured on a [`Device`](crate::Device)
///
/// A plain value holder: peers are decoded wholesale from a lower-level
/// snapshot and replaced wholesale on refresh. Cloning deep-copies the
/// allowed-IP list, so a copy never shares storage with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
    /// Peer's public key
    pub public_key: Key,

    /// Pre-shared key mixed into the handshake
    ///
    /// The wider system treats an all-zero value as "no pre-shared key";
    /// that convention belongs to the protocol layer and the raw bytes
    /// pass through here unchanged.
    #[serde(default)]
    pub preshared_key: Key,

    /// Remote endpoint, when one is configured or has been learned
    ///
    /// `None` means no endpoint at all, which is distinct from an endpoint
    /// at the zero address; consumers deciding whether to initiate a
    /// handshake rely on the difference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<SocketAddr>,

    /// Persistent keepalive interval; zero means keepalives are disabled
    #[serde(default)]
    pub persistent_keepalive_interval: Duration,

    /// Time of the most recent completed handshake; `None` means never
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_handshake_time: Option<SystemTime>,

    /// Cumulative bytes received from this peer
    #[serde(default)]
    pub receive_bytes: u64,

    /// Cumulative bytes transmitted to this peer
    #[serde(default)]
    pub transmit_bytes: u64,

    /// CIDR ranges this peer is authorized to send and receive traffic for
    #[serde(default)]
    pub allowed_ips: Vec<IpNet>,
}

impl Peer {
    /// Create a peer with the given public key and every other field unset
    pub fn new(public_key: Key) -> Self {
        Self {
            public_key,
            ..Self::default()
        }
    }
}
