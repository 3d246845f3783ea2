//! Multiplication by the fixed constants used in (Inv)MixColumns, over GF(2^8)
//! with reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).
//!
//! Every function takes and returns a `u8`, so each intermediate product is already
//! reduced to 8 bits and the compositions below can be reordered freely.

/// Multiply by `{02}`. Shifting left drops bit 8, so XORing with 0x1B is the
/// 8-bit equivalent of XORing the 9-bit result with 0x11B.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub fn times2(x: u8) -> u8 {
    (x << 1) ^ (0x1B & (0u8).wrapping_sub((x >> 7) & 1))
}

/// Multiply by `{03}`.
#[inline(always)]
pub fn times3(x: u8) -> u8 {
    times2(x) ^ x
}

/// Multiply by `{09}`.
#[inline(always)]
pub fn times9(x: u8) -> u8 {
    times2(times2(times2(x))) ^ x
}

/// Multiply by `{0B}`.
#[inline(always)]
pub fn times11(x: u8) -> u8 {
    times9(x) ^ times2(x)
}

/// Multiply by `{0D}`.
#[inline(always)]
pub fn times13(x: u8) -> u8 {
    times9(x) ^ times2(times2(x))
}

/// Multiply by `{0E}`.
#[inline(always)]
pub fn times14(x: u8) -> u8 {
    times13(x) ^ times3(x)
}
