//! WireGuard key material
//!
//! This module defines the 32-byte `Key` value used for Curve25519 public,
//! private, and pre-shared keys, together with its canonical base64 text
//! form, random generation, and key-file handling.

use crate::error::{Result, WgModelError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::{rngs::OsRng, RngCore};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroizing;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Length of a WireGuard key in bytes
pub const KEY_LEN: usize = 32;

/// A WireGuard public, private, or pre-shared key (32 bytes, Curve25519)
///
/// `Key` is a plain value: cheap to copy, comparable byte-wise, and usable
/// as a map key. Whether a given value is a public, private, or pre-shared
/// key is context the surrounding types carry, not the key itself.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Create a key from a byte slice, which must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LEN {
            return Err(WgModelError::InvalidKeyLength(bytes.len()));
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Create a key from a byte slice, panicking if the length is wrong
    ///
    /// # Panics
    ///
    /// Panics when `bytes` is not exactly 32 bytes long. Only use this with
    /// inputs that are statically known to be valid, such as literals in
    /// tests or compiled-in constants; everything else goes through
    /// [`Key::from_slice`].
    pub fn must(bytes: &[u8]) -> Self {
        Self::from_slice(bytes).expect("byte slice is not a valid key")
    }

    /// Generate a new random private key
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        Self(secret.to_bytes())
    }

    /// Generate a new random pre-shared key
    pub fn generate_preshared() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Parse a key from its base64 text form
    ///
    /// Accepts exactly the encoding [`Key::to_base64`] produces: standard
    /// alphabet, with padding. Surrounding whitespace is trimmed so key
    /// files with a trailing newline parse cleanly.
    pub fn from_base64(s: &str) -> Result<Self> {
        let decoded = Zeroizing::new(BASE64.decode(s.trim())?);
        Self::from_slice(&decoded)
    }

    /// Derive the public key for this key, treating it as a private key
    ///
    /// Curve25519 scalar multiplication against the base point. Calling this
    /// on a value that is not a private key produces a well-defined but
    /// meaningless result.
    pub fn public_key(&self) -> Self {
        let secret = StaticSecret::from(self.0);
        Self(X25519PublicKey::from(&secret).to_bytes())
    }

    /// Encode the key in its canonical base64 text form
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    /// Load a key from a file containing its base64 text form
    ///
    /// Intended for private key files in the `wg genkey > file` style. On
    /// Unix the file must not be group- or world-accessible, since key
    /// files on disk are assumed to hold private material.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        #[cfg(unix)]
        {
            let mode = fs::metadata(path)?.permissions().mode();
            if mode & 0o077 != 0 {
                return Err(WgModelError::Permission(format!(
                    "Key file {:?} has insecure permissions: {:o} (should be 0600)",
                    path,
                    mode & 0o777
                )));
            }
        }

        let content = Zeroizing::new(fs::read_to_string(path)?);
        let key = Self::from_base64(&content)?;
        debug!("Loaded key from {:?}", path);
        Ok(key)
    }

    /// Save the key to a file in its base64 text form
    ///
    /// The file is created with owner-only permissions (0600) on Unix and a
    /// trailing newline is appended, matching what `wg genkey` writes.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let encoded = Zeroizing::new(self.to_base64());

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(path)?;
        file.write_all(encoded.as_bytes())?;
        file.write_all(b"\n")?;
        debug!("Saved key to {:?}", path);
        Ok(())
    }

    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = WgModelError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Key {
    type Err = WgModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base64(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.to_base64())
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Zeroizing::new(String::deserialize(deserializer)?);
        Self::from_base64(&text).map_err(de::Error::custom)
    }
}
