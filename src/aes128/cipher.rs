use tracing::{debug, trace};

use crate::aes128::core::{decrypt_block, encrypt_block};
use crate::aes128::direction::Direction;
use crate::aes128::error::{Error, Result};
use crate::aes128::key::Key;
use crate::aes128::schedule::{RoundKeys, expand_key};

/// Runs one 16-byte block through the full ten-round cipher in the given direction.
///
/// Round keys are consumed 0..=10 when encrypting and 10..=0 when decrypting.
/// The schedule is only borrowed, so it can be reused for any number of blocks.
#[inline]
pub fn cipher(block: &[u8; 16], round_keys: &RoundKeys, direction: Direction) -> [u8; 16] {
    match direction {
        Direction::Encrypt => encrypt_block(block, round_keys),
        Direction::Decrypt => decrypt_block(block, round_keys),
    }
}

/// Provides single-block encryption and decryption under one key.
/// Instantiated with an AES-128 [Key], which is expanded into round keys and stored in the instance.
///
/// Chaining, padding and nonces are left to the caller; every call handles exactly one block.
///
/// ## Examples
/// ```
/// # fn main() -> aes128::Result<()> {
/// use aes128::{Cipher, Key};
///
/// let key = Key::try_from_slice(&[0u8; 16])?;
/// let cipher = Cipher::new(&key);
///
/// let block = *b"sixteen byte msg";
/// let ct = cipher.encrypt_block(&block)?;
/// assert_eq!(cipher.decrypt_block(&ct)?, block);
///
/// // blocks must be exactly 16 bytes
/// assert!(cipher.encrypt_block(b"too short").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: RoundKeys,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        debug!("building cipher");
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Getter for internal round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block. Returns an InvalidBlockLength error unless `block` is 16 bytes.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        self.process_block(block, Direction::Encrypt)
    }

    /// Decrypts one block. Returns an InvalidBlockLength error unless `block` is 16 bytes.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<[u8; 16]> {
        self.process_block(block, Direction::Decrypt)
    }

    /// Encrypts or decrypts one block depending on `direction`.
    pub fn process_block(&self, block: &[u8], direction: Direction) -> Result<[u8; 16]> {
        let block: &[u8; 16] = block
            .try_into()
            .map_err(|_| Error::InvalidBlockLength { len: block.len() })?;
        trace!(%direction, "processing block");
        Ok(cipher(block, &self.round_keys, direction))
    }
}

impl From<&Key> for Cipher {
    fn from(key: &Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
        0x0e, 0x0f,
    ];
    const PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
        0xee, 0xff,
    ];
    const CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4,
        0xc5, 0x5a,
    ];

    #[test]
    fn driver_matches_fips197_c1() {
        let round_keys = expand_key(&Key::from(KEY));
        assert_eq!(cipher(&PLAIN, &round_keys, Direction::Encrypt), CIPHER);
        assert_eq!(cipher(&CIPHER, &round_keys, Direction::Decrypt), PLAIN);
    }

    #[test]
    fn cipher_struct_round_trip() -> Result<()> {
        let cipher = Cipher::new(&Key::from(KEY));
        let ct = cipher.encrypt_block(&PLAIN)?;
        assert_eq!(ct, CIPHER);
        assert_eq!(cipher.decrypt_block(&ct)?, PLAIN);
        assert_eq!(cipher.process_block(&PLAIN, Direction::Encrypt)?, CIPHER);
        Ok(())
    }

    #[test]
    fn rejects_wrong_block_lengths() {
        let cipher = Cipher::new(&Key::from(KEY));
        for len in [0usize, 15, 17, 32] {
            let block = vec![0u8; len];
            assert!(matches!(
                cipher.encrypt_block(&block),
                Err(Error::InvalidBlockLength { len: got }) if got == len
            ));
            assert!(matches!(
                cipher.decrypt_block(&block),
                Err(Error::InvalidBlockLength { len: got }) if got == len
            ));
        }
    }

    #[test]
    fn schedule_exposed_unchanged() {
        let key = Key::from(KEY);
        let cipher = Cipher::new(&key);
        assert_eq!(cipher.round_keys(), &expand_key(&key));
    }
}
