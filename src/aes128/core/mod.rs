//! Core AES-128 implementation for encryption and decryption of a 16 byte block.
//! Exports the block functions along with the individual round transforms and field helpers.

pub mod constants;
pub mod gf;
pub mod state;
mod decryption;
mod encryption;
mod util;

pub use decryption::{decrypt_block, inv_mix_columns, inv_shift_rows, inv_sub_bytes};
pub use encryption::{encrypt_block, mix_columns, shift_rows, sub_bytes};
pub use gf::{times2, times3, times9, times11, times13, times14};
pub use state::State;
pub use util::{add_round_key, sub_word};
