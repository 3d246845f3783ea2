use thiserror::Error;
use rand::rand_core;

/// AES-128 Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES-128 Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate a key from a slice that is not exactly 16 bytes.
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength { len: usize },

    /// Attempted to encrypt or decrypt a block that is not exactly 16 bytes.
    #[error("invalid block length: {len} bytes (expected 16)")]
    InvalidBlockLength { len: usize },

    /// Numeric direction flag was neither 0 (encrypt) nor 1 (decrypt).
    #[error("unknown direction flag: {value} (expected 0 for encrypt or 1 for decrypt)")]
    UnknownDirection { value: u8 },

    /// Direction name was neither "encrypt" nor "decrypt".
    #[error("unknown direction: {name:?} (expected \"encrypt\" or \"decrypt\")")]
    UnknownDirectionName { name: String },

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),

    /// A known-answer vector produced the wrong output.
    #[error("self-test failed for {case}: expected {expected}, got {actual}")]
    SelfTestFailed {
        case: &'static str,
        expected: String,
        actual: String,
    },
}
