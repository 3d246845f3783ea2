use super::constants::{SBOX, SBOX_INV};
use crate::aes128::direction::Direction;

// used for both encryption and decryption
#[inline(always)]
pub fn add_round_key(state: &mut [u8; 16], round_key: &[u8; 16]) {
    for (byte, k) in state.iter_mut().zip(round_key) {
        *byte ^= k;
    }
}

/// Substitutes each byte of a word independently, keeping byte positions.
/// `Direction::Encrypt` uses the SBOX, `Direction::Decrypt` the inverse SBOX.
#[inline(always)]
pub fn sub_word(word: u32, direction: Direction) -> u32 {
    let table = match direction {
        Direction::Encrypt => &SBOX,
        Direction::Decrypt => &SBOX_INV,
    };
    u32::from_be_bytes(word.to_be_bytes().map(|b| table[b as usize]))
}
