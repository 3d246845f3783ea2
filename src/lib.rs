//! From-scratch AES-128: key schedule plus single-block encryption and decryption.
//!
//! Chaining, padding and nonce handling are the caller's job. Table lookups are not
//! constant time, so this crate makes no side-channel guarantees.

mod aes128;

pub use aes128::{
    Cipher, Direction, Error, FIPS197_B, FIPS197_C1, KNOWN_ANSWERS, Key, KnownAnswer, ROUNDS,
    Result, RoundKeys, check, cipher, expand_key, self_test, to_hex,
};

/// Individual round transforms, field arithmetic and lookup tables.
pub use aes128::core as transforms;
