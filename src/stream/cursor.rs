//! A bit-addressable position inside a `BitBuffer`.

use std::fmt;

/// A `(byte_index, bit_offset)` pair.
///
/// While a transfer runs, `bit_offset` may briefly reach 8 after the last bit of
/// a byte has been consumed; `normalize` folds it back into `byte_index` before
/// the next bit is touched. The bit pointer is correct in either state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    byte_index: usize,
    bit_offset: usize,
}

impl Cursor {
    pub fn new(byte_index: usize, bit_offset: usize) -> Self {
        let mut cursor = Self {
            byte_index,
            bit_offset,
        };
        cursor.normalize();
        cursor
    }

    /// Splits an absolute bit pointer into byte index and bit offset.
    pub fn from_bit_pointer(pointer: usize) -> Self {
        Self {
            byte_index: pointer / 8,
            bit_offset: pointer % 8,
        }
    }

    pub fn to_bit_pointer(&self) -> usize {
        self.byte_index * 8 + self.bit_offset
    }

    /// Carries any whole bytes out of `bit_offset` so that it lies in `0..8`.
    #[inline]
    pub fn normalize(&mut self) {
        while self.bit_offset > 7 {
            self.bit_offset -= 8;
            self.byte_index += 1;
        }
    }

    /// Moves one bit forward without normalizing.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.bit_offset += 1;
    }

    pub fn byte_index(&self) -> usize {
        self.byte_index
    }

    pub fn bit_offset(&self) -> usize {
        self.bit_offset
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.byte_index, self.bit_offset)
    }
}
