use super::constants::SBOX_INV;
use super::gf::{times9, times11, times13, times14};
use super::state::{self, State};
use super::util::add_round_key;
use crate::aes128::schedule::{RoundKeys, ROUNDS};

/// Core AES-128 decryption function. Runs the encryption rounds backwards with each step inverted.
#[inline(always)]
pub fn decrypt_block(ciphertext: &[u8; 16], round_keys: &RoundKeys) -> [u8; 16] {
    let mut state = state::load_block(ciphertext);

    // undo the last round (no mixcolumns)
    add_round_key(&mut state, round_keys.get(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    // round keys 9 down to 1
    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.get(0));

    state::store_block(&state)
}

/// Inverse SubBytes. Each byte is substituted using the inverse SBOX.
#[inline(always)]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state {
        *byte = SBOX_INV[*byte as usize];
    }
}

/// Inverse ShiftRows. Row `r` is rotated right by `r` positions.
#[inline(always)]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let word = state::row(state, r).rotate_right(8 * r as u32);
        state::set_row(state, r, word);
    }
}

/// Inverse MixColumns.
/// [ b0 ]      [ 14 11 13  9 ]  [ d0 ]
/// | b1 |  =   |  9 14 11 13 |  | d1 |
/// | b2 |      | 13  9 14 11 |  | d2 |
/// [ b3 ]      [ 11 13  9 14 ]  [ d3 ]
#[inline(always)]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = times14(a) ^ times11(b) ^ times13(c) ^ times9(d);
        state[i + 1] = times9(a) ^ times14(b) ^ times11(c) ^ times13(d);
        state[i + 2] = times13(a) ^ times9(b) ^ times14(c) ^ times11(d);
        state[i + 3] = times11(a) ^ times13(b) ^ times9(c) ^ times14(d);
    }
}
