//! The transfer engine: moves a run of bits between a `BitBuffer` (addressed by
//! a cursor that advances in place) and a byte-aligned scratch array (addressed
//! by a local bit offset that starts at 0).
//!
//! Transfers are pure bit shuffles. They know nothing of integers, endianness
//! or text; the typed accessors on `BitStream` decide what the bits mean. Every
//! check runs before the first bit moves, so a failed transfer leaves both the
//! cursor and the storage untouched.

use crate::error::{BitStreamError, Result};
use crate::kernels::bit_ops::{get_bit, set_bit};
use crate::stream::{BitBuffer, Cursor};

//==================================================================================
// 1. Buffer -> Scratch
//==================================================================================

/// Copies `count` bits starting at `cursor` into a fresh scratch array of
/// `max(1, ceil(count / 8))` bytes. Scratch bits past `count` stay zero.
///
/// Fails with `OutOfRange` if the run would pass `content_bits`, the logical
/// end of everything ever written, or the end of the storage itself.
pub(crate) fn read_bits(
    buffer: &BitBuffer,
    cursor: &mut Cursor,
    content_bits: usize,
    count: usize,
) -> Result<Vec<u8>> {
    let position = cursor.to_bit_pointer();
    let content_bits = content_bits.min(buffer.capacity() * 8);
    if position.saturating_add(count) > content_bits {
        return Err(BitStreamError::OutOfRange {
            position,
            requested: count,
            available: content_bits.saturating_sub(position),
        });
    }

    let mut scratch = vec![0u8; count.div_ceil(8).max(1)];
    let mut local = Cursor::default();

    for _ in 0..count {
        cursor.normalize();
        local.normalize();

        let bit = get_bit(buffer.byte(cursor.byte_index()), cursor.bit_offset());
        let slot = &mut scratch[local.byte_index()];
        *slot = set_bit(*slot, local.bit_offset(), bit);

        cursor.advance();
        local.advance();
    }

    Ok(scratch)
}

//==================================================================================
// 2. Scratch -> Buffer
//==================================================================================

/// Copies the first `count` bits of `source` into the buffer starting at
/// `cursor`, growing the buffer first if the run would pass its capacity.
pub(crate) fn write_bits(
    buffer: &mut BitBuffer,
    cursor: &mut Cursor,
    source: &[u8],
    count: usize,
) -> Result<()> {
    let available = source.len() * 8;
    if count > available {
        return Err(BitStreamError::ScratchTooShort { count, available });
    }

    buffer.ensure_capacity(cursor, count)?;

    let mut local = Cursor::default();

    for _ in 0..count {
        cursor.normalize();
        local.normalize();

        let bit = get_bit(source[local.byte_index()], local.bit_offset());
        let index = cursor.byte_index();
        buffer.set_byte(index, set_bit(buffer.byte(index), cursor.bit_offset(), bit));

        cursor.advance();
        local.advance();
    }

    Ok(())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
