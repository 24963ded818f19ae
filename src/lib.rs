//! wgmodel: Shared WireGuard data model
//!
//! This crate provides the data types shared across a family of WireGuard
//! control tooling: key material, device and peer snapshots as reported by
//! a kernel backend, and the change sets used to reconfigure a device.
//!
//! # Architecture
//!
//! There is no protocol logic and no kernel transport here. Producers (a
//! netlink decoder, a userspace IPC client) and consumers (a CLI
//! formatter, a configuration serializer) depend on these shapes as a
//! stable contract; everything in this crate is a plain value, safe to
//! copy and to share immutably across threads.
//!
//! # Modules
//!
//! - `key`: 32-byte Curve25519 key value with validated construction
//! - `peer`: snapshot of one remote peer on a device
//! - `device`: snapshot of one local WireGuard interface
//! - `config`: device and peer change sets for reconfiguration
//! - `error`: error types and handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod device;
pub mod error;
pub mod key;
pub mod peer;

// Re-export commonly used types
pub use config::{DeviceConfig, PeerConfig};
pub use device::Device;
pub use error::{Result, WgModelError};
pub use key::{Key, KEY_LEN};
pub use peer::Peer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
