use std::fmt;
use std::str::FromStr;

use crate::aes128::error::{Error, Result};

/// Selects the forward (encrypt) or inverse (decrypt) form of every transform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

/// Numeric flag form: 0 = encrypt, 1 = decrypt.
impl TryFrom<u8> for Direction {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Direction::Encrypt),
            1 => Ok(Direction::Decrypt),
            _ => Err(Error::UnknownDirection { value }),
        }
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        match direction {
            Direction::Encrypt => 0,
            Direction::Decrypt => 1,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("encrypt") {
            Ok(Direction::Encrypt)
        } else if s.eq_ignore_ascii_case("decrypt") {
            Ok(Direction::Decrypt)
        } else {
            Err(Error::UnknownDirectionName { name: s.to_owned() })
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}
