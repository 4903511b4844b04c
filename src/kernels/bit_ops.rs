//! This module contains the pure, stateless kernels for addressing individual
//! bits inside bytes, and for shifting a whole byte array by an arbitrary number
//! of bits.
//!
//! Bit order is MSB-first throughout: index 0 is the most significant bit of a
//! byte (`0x80`) and index 7 the least significant (`0x01`). With this order a
//! stream of bits reads left to right exactly like the big-endian bytes that
//! hold it. All indexing goes through `bitvec`'s `Msb0` ordering.

use bitvec::prelude::*;

//==================================================================================
// 1. Single-Bit Primitives
//==================================================================================

/// Returns the bit at `index` (0 = most significant) of `byte`.
#[inline]
pub fn get_bit(byte: u8, index: usize) -> bool {
    debug_assert!(index < 8, "bit index {} out of range for a byte", index);
    byte.view_bits::<Msb0>()[index]
}

/// Returns `byte` with the bit at `index` (0 = most significant) set to `value`.
#[inline]
pub fn set_bit(byte: u8, index: usize, value: bool) -> u8 {
    debug_assert!(index < 8, "bit index {} out of range for a byte", index);
    let mut out = byte;
    out.view_bits_mut::<Msb0>().set(index, value);
    out
}

//==================================================================================
// 2. Array Shift
//==================================================================================

/// Shifts every bit of `bytes` towards later positions by `bit_count`.
///
/// The result is `ceil(bit_count / 8)` bytes longer than the input so that no
/// input bit falls off the end. The `bit_count` vacated leading bits and any
/// trailing pad bits are zero.
pub fn shift_right(bytes: &[u8], bit_count: usize) -> Vec<u8> {
    let total_bytes = bytes.len() + bit_count.div_ceil(8);

    let mut shifted: BitVec<u8, Msb0> = BitVec::with_capacity(total_bytes * 8);
    shifted.resize(bit_count, false);
    shifted.extend_from_bitslice(bytes.view_bits::<Msb0>());
    shifted.resize(total_bytes * 8, false);

    shifted.into_vec()
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
