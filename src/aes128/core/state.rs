//! The cipher state: a 4x4 byte matrix stored column-major in a flat `[u8; 16]`.
//!
//! The byte at row `r`, column `c` lives at offset `4 * c + r`. Input blocks are read
//! most-significant byte first into that layout, so block byte `i` lands on row `i % 4`
//! of column `i / 4`, and the output block is written back in the same order.
//! [`load_block`] and [`store_block`] are the only places this mapping is applied.
//!
//! The word views ([`column`], [`row`]) pack four bytes into a `u32` with the lowest
//! index in the most significant byte. They are numerically equivalent to the byte view
//! and exist so transforms can rotate whole rows with `rotate_left`.

/// Working value of one block operation.
pub type State = [u8; 16];

/// Builds the state from a 128-bit input block.
#[inline(always)]
pub fn load_block(block: &[u8; 16]) -> State {
    let mut state = [0u8; 16];
    for (i, byte) in block.iter().enumerate() {
        state[index(i % 4, i / 4)] = *byte;
    }
    state
}

/// Serialises the state back to a 128-bit output block.
#[inline(always)]
pub fn store_block(state: &State) -> [u8; 16] {
    let mut block = [0u8; 16];
    for (i, byte) in block.iter_mut().enumerate() {
        *byte = state[index(i % 4, i / 4)];
    }
    block
}

/// Offset of row `row`, column `col`.
#[inline(always)]
pub const fn index(row: usize, col: usize) -> usize {
    4 * col + row
}

/// Column `col` as a word, row 0 in the most significant byte.
#[inline(always)]
pub fn column(state: &State, col: usize) -> u32 {
    let i = index(0, col);
    u32::from_be_bytes([state[i], state[i + 1], state[i + 2], state[i + 3]])
}

/// Overwrites column `col` from a word, row 0 taken from the most significant byte.
#[inline(always)]
pub fn set_column(state: &mut State, col: usize, word: u32) {
    let i = index(0, col);
    state[i..i + 4].copy_from_slice(&word.to_be_bytes());
}

/// Row `row` as a word, column 0 in the most significant byte.
#[inline(always)]
pub fn row(state: &State, row: usize) -> u32 {
    u32::from_be_bytes([
        state[index(row, 0)],
        state[index(row, 1)],
        state[index(row, 2)],
        state[index(row, 3)],
    ])
}

/// Overwrites row `row` from a word, column 0 taken from the most significant byte.
#[inline(always)]
pub fn set_row(state: &mut State, row: usize, word: u32) {
    for (col, byte) in word.to_be_bytes().into_iter().enumerate() {
        state[index(row, col)] = byte;
    }
}

/// Builds a state from four column words.
pub fn from_columns(columns: [u32; 4]) -> State {
    let mut state = [0u8; 16];
    for (col, word) in columns.into_iter().enumerate() {
        set_column(&mut state, col, word);
    }
    state
}

/// Splits a state into its four column words.
pub fn to_columns(state: &State) -> [u32; 4] {
    [column(state, 0), column(state, 1), column(state, 2), column(state, 3)]
}
