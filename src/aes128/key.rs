//! Defines the [`Key`] struct, which holds a valid 128-bit AES key.
//! Keys can be randomly generated or constructed from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aes128::error::{Error, Result};

/// Contains a valid AES-128 key. Can be instantiated with a random key, or built from a slice
/// of exactly 16 bytes.
/// A `Key` is required to expand a [schedule](crate::expand_key) or build a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::Key;
///
/// // Instantiate a random key:
/// let rk = Key::random()?;
/// assert_eq!(rk.as_bytes().len(), 16);
///
/// // Instantiate a key from a slice:
/// let key_bytes: [u8; 17] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE];
/// let my_key = Key::try_from_slice(&key_bytes[..16])?;
/// assert_eq!(my_key.as_bytes(), &key_bytes[..16]);
///
/// // Anything other than 16 bytes returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..15]).is_err());
/// assert!(Key::try_from_slice(&key_bytes).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Key {
    bytes: [u8; 16],
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn random() -> Result<Self> {
        let mut k = [0u8; 16];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.bytes
    }
}

impl From<[u8; 16]> for Key {
    fn from(bytes: [u8; 16]) -> Self {
        Self { bytes }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

// key material stays out of logs and panic messages
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}
