use super::constants::SBOX;
use super::gf::{times2, times3};
use super::state::{self, State};
use super::util::add_round_key;
use crate::aes128::schedule::{RoundKeys, ROUNDS};

/// Core AES-128 encryption function. Encrypts a 16 byte block using the provided round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &[u8; 16], round_keys: &RoundKeys) -> [u8; 16] {
    let mut state = state::load_block(plaintext);

    // add first round key to state
    add_round_key(&mut state, round_keys.get(0));

    // rounds 1 to 9
    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    // last round skips mixcolumns step
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state::store_block(&state)
}

/// SubBytes step. Each byte is substituted using the SBOX.
#[inline(always)]
pub fn sub_bytes(state: &mut State) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows step.
/// The 0th row does not change.
/// The first row shifts left by one position.
/// The second row shifts left by two positions.
/// The third row shifts left by three positions.
#[inline(always)]
pub fn shift_rows(state: &mut State) {
    // a row word holds column 0 in its top byte, so a left byte rotation is a left row shift
    for r in 1..4 {
        let word = state::row(state, r).rotate_left(8 * r as u32);
        state::set_row(state, r, word);
    }
}

/// MixColumns step. Each column is multiplied by a constant matrix using Galois field multiplication.
/// [ d0 ]      [ 2  3  1  1 ]  [ b0 ]
/// | d1 |  =   | 1  2  3  1 |  | b1 |
/// | d2 |      | 1  1  2  3 |  | b2 |
/// [ d3 ]      [ 3  1  1  2 ]  [ b3 ]
#[inline(always)]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = times2(a) ^ times3(b) ^ c ^ d;
        state[i + 1] = a ^ times2(b) ^ times3(c) ^ d;
        state[i + 2] = a ^ b ^ times2(c) ^ times3(d);
        state[i + 3] = times3(a) ^ b ^ c ^ times2(d);
    }
}
