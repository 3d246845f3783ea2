pub mod core;
mod cipher;
mod direction;
mod error;
mod key;
mod schedule;
mod selftest;

pub use cipher::{Cipher, cipher};
pub use direction::Direction;
pub use error::{Error, Result};
pub use key::Key;
pub use schedule::{ROUNDS, RoundKeys, expand_key};
pub use selftest::{FIPS197_B, FIPS197_C1, KNOWN_ANSWERS, KnownAnswer, check, self_test, to_hex};
