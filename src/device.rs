//! WireGuard device snapshot
//!
//! This module defines the `Device` aggregate: one local WireGuard
//! interface with its identity, key pair, listening configuration, and
//! peer list, as reported by whatever backend produced the snapshot.

use crate::key::Key;
use crate::peer::Peer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A WireGuard device: one local interface and its configuration
///
/// Devices are snapshots. A producer (for example a netlink decoder in a
/// sibling crate) builds one wholesale and consumers treat it as immutable
/// data; refreshing means fetching a new snapshot, not mutating this one.
/// `index` and `name` identify the same interface, and `public_key` is the
/// Curve25519 derivation of `private_key`; both invariants are the
/// producer's to uphold, not checked here.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Kernel interface index
    #[serde(default)]
    pub index: u32,

    /// Interface name (e.g. "wg0")
    pub name: String,

    /// Device private key
    pub private_key: Key,

    /// Public key derived from the private key
    ///
    /// Producers can maintain the derivation invariant with
    /// [`Key::public_key`].
    pub public_key: Key,

    /// UDP port the device listens on; zero when unset
    #[serde(default)]
    pub listen_port: u16,

    /// Firewall mark applied to tunnel traffic, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fwmark: Option<u32>,

    /// Peers configured on this device, in backend order
    #[serde(default)]
    pub peers: Vec<Peer>,
}

// Ensure the private key is never accidentally logged; serialized forms
// still carry it.
impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("listen_port", &self.listen_port)
            .field("fwmark", &self.fwmark)
            .field("peers", &self.peers)
            .finish()
    }
}
