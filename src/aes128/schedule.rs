//! AES-128 key schedule. Expands a [`Key`] into the eleven round keys consumed by the cipher.

use tracing::debug;

use crate::aes128::core::constants::RCON;
use crate::aes128::core::{state, sub_word};
use crate::aes128::direction::Direction;
use crate::aes128::key::Key;

/// Number of cipher rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// The eleven round keys for one cipher key, index 0 being the key itself.
/// Each round key uses the same column-major byte layout as the cipher state.
/// Immutable once built, so one schedule can be shared across threads.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct RoundKeys([[u8; 16]; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &[u8; 16] {
        &self.0[round]
    }

    /// Round keys in application order for encryption.
    pub fn iter(&self) -> std::slice::Iter<'_, [u8; 16]> {
        self.0.iter()
    }

    /// Getter for the round keys as a slice of 16-byte arrays.
    pub fn as_slice(&self) -> &[[u8; 16]] {
        &self.0
    }
}

impl std::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundKeys").finish_non_exhaustive()
    }
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `i` is derived from round key `i - 1` alone: its last column is rotated one
/// byte left, substituted through the SBOX and XORed with `RCON[i - 1]` in the top byte
/// to form `w`. The new columns are then chained as
/// `c0 = p0 ^ w`, `c1 = c0 ^ p1`, `c2 = c1 ^ p2`, `c3 = c2 ^ p3`.
pub fn expand_key(key: &Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = *key.as_bytes();

    for i in 1..=ROUNDS {
        let prev = state::to_columns(&round_keys[i - 1]);

        let w = sub_word(prev[3].rotate_left(8), Direction::Encrypt) ^ (u32::from(RCON[i - 1]) << 24);

        let mut next = [0u32; 4];
        next[0] = prev[0] ^ w;
        for col in 1..4 {
            next[col] = next[col - 1] ^ prev[col];
        }

        round_keys[i] = state::from_columns(next);
    }

    debug!(rounds = ROUNDS, "expanded key schedule");
    RoundKeys(round_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aes128::error::Result;

    // FIPS-197 appendix A.1
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
        0x4f, 0x3c,
    ];

    #[test]
    fn key_schedule_128() -> Result<()> {
        let key = Key::try_from_slice(&FIPS_KEY)?;
        let round_keys = expand_key(&key);

        // w[4..8]
        let first: [u8; 16] = [
            0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a, 0x6c,
            0x76, 0x05,
        ];
        // w[40..44]
        let last: [u8; 16] = [
            0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
            0x0c, 0xa6,
        ];

        assert_eq!(round_keys.get(1), &first);
        assert_eq!(round_keys.get(ROUNDS), &last);

        Ok(())
    }

    #[test]
    fn round_key_zero_is_key() {
        let key = Key::from(FIPS_KEY);
        assert_eq!(expand_key(&key).get(0), key.as_bytes());
    }

    #[test]
    fn expansion_is_deterministic() {
        let key = Key::from(FIPS_KEY);
        assert_eq!(expand_key(&key), expand_key(&key));
        assert_eq!(expand_key(&key).as_slice().len(), ROUNDS + 1);
    }

    #[test]
    fn matches_word_recurrence() {
        // classic W[i] = W[i-4] ^ temp form over 44 words
        let mut w = [0u32; 44];
        for (i, chunk) in FIPS_KEY.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        for i in 4..44 {
            let mut temp = w[i - 1];
            if i % 4 == 0 {
                temp = sub_word(temp.rotate_left(8), Direction::Encrypt)
                    ^ (u32::from(RCON[i / 4 - 1]) << 24);
            }
            w[i] = w[i - 4] ^ temp;
        }

        let round_keys = expand_key(&Key::from(FIPS_KEY));
        for (round, rk) in round_keys.iter().enumerate() {
            let expected = state::from_columns([
                w[4 * round],
                w[4 * round + 1],
                w[4 * round + 2],
                w[4 * round + 3],
            ]);
            assert_eq!(rk, &expected, "round key {round}");
        }
    }
}
