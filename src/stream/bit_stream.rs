// In: src/stream/bit_stream.rs

//! The `BitStream` aggregate: a `BitBuffer` plus independent read and write
//! cursors, and the typed codec built on the transfer engine.
//!
//! Wire formats are fixed:
//! * booleans are a single bit, 1 = true;
//! * bytes are 8 bits;
//! * integers are 32-bit two's-complement, most significant byte first;
//! * strings are their raw UTF-8 bytes with no length prefix or terminator.
//!
//! Fields are packed with no alignment padding, so a value may start at any bit.

use std::fmt;

use crate::config::{BitStreamConfig, DEFAULT_GROWTH_INCREMENT_BYTES};
use crate::error::{BitStreamError, Result};
use crate::kernels::bit_ops::get_bit;
use crate::stream::{transfer, BitBuffer, Cursor};

/// Scratch byte for a boolean. Only its leading bit is ever transferred.
const TRUE_BITS: u8 = 0xFF;
const FALSE_BITS: u8 = 0x00;

/// A growable byte store addressed by a bit-granular write cursor and a
/// bit-granular read cursor.
///
/// The two cursors never constrain each other. The only authoritative content
/// length is the write cursor's bit pointer; reads past it fail with
/// `BitStreamError::OutOfRange`.
#[derive(Debug, Clone)]
pub struct BitStream {
    buffer: BitBuffer,
    write_cursor: Cursor,
    read_cursor: Cursor,
}

impl Default for BitStream {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================
// 1. Construction
//==================================================================================

impl BitStream {
    /// An empty stream with the default initial capacity. Both cursors at 0.
    pub fn new() -> Self {
        let config = BitStreamConfig::default();
        Self::from_parts(BitBuffer::allocate(
            config.initial_capacity_bytes,
            config.growth_increment_bytes,
        ))
    }

    /// An empty stream using the storage policy in `config`.
    pub fn with_config(config: BitStreamConfig) -> Result<Self> {
        Ok(Self::from_parts(BitBuffer::with_config(&config)?))
    }

    /// Treats `bytes` as already-written content: the write cursor is placed
    /// after the last byte (append mode), the read cursor at 0.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::adopt(BitBuffer::adopt(bytes.into(), DEFAULT_GROWTH_INCREMENT_BYTES))
    }

    /// Like `from_bytes`, growing later writes by `config`'s increment.
    pub fn from_bytes_with_config(
        bytes: impl Into<Vec<u8>>,
        config: BitStreamConfig,
    ) -> Result<Self> {
        Ok(Self::adopt(BitBuffer::from_bytes(bytes.into(), &config)?))
    }

    fn from_parts(buffer: BitBuffer) -> Self {
        Self {
            buffer,
            write_cursor: Cursor::default(),
            read_cursor: Cursor::default(),
        }
    }

    fn adopt(buffer: BitBuffer) -> Self {
        let content_bytes = buffer.capacity();
        log::debug!(
            "bitstream adopted {} bytes, appending at bit {}",
            content_bytes,
            content_bytes * 8
        );
        Self {
            buffer,
            write_cursor: Cursor::new(content_bytes, 0),
            read_cursor: Cursor::default(),
        }
    }
}

impl From<Vec<u8>> for BitStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for BitStream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

//==================================================================================
// 2. Raw Transfers
//==================================================================================

impl BitStream {
    /// Writes the first `count` bits of `bits` (MSB-first) at the write cursor.
    pub fn write_bits(&mut self, bits: &[u8], count: usize) -> Result<()> {
        transfer::write_bits(&mut self.buffer, &mut self.write_cursor, bits, count)
    }

    /// Reads `count` bits at the read cursor into `max(1, ceil(count / 8))`
    /// bytes, MSB-first, with any unused trailing bits zero.
    pub fn read_bits(&mut self, count: usize) -> Result<Vec<u8>> {
        let content_bits = self.get_bits_used();
        transfer::read_bits(&self.buffer, &mut self.read_cursor, content_bits, count)
    }

    /// Fails with `OutOfRange` unless `bits` more bits can be read.
    fn ensure_readable(&self, bits: usize) -> Result<()> {
        let position = self.read_pointer();
        let available = self.get_bits_used().saturating_sub(position);
        if bits > available {
            return Err(BitStreamError::OutOfRange {
                position,
                requested: bits,
                available,
            });
        }
        Ok(())
    }
}

//==================================================================================
// 3. Typed Codec
//==================================================================================

impl BitStream {
    pub fn write_boolean(&mut self, value: bool) -> Result<()> {
        let bits = if value { TRUE_BITS } else { FALSE_BITS };
        self.write_bits(&[bits], 1)
    }

    pub fn read_boolean(&mut self) -> Result<bool> {
        let scratch = self.read_bits(1)?;
        Ok(get_bit(scratch[0], 0))
    }

    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_bits(&[value], 8)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        let scratch = self.read_bits(8)?;
        Ok(scratch[0])
    }

    /// Writes a 32-bit big-endian two's-complement integer.
    pub fn write_int(&mut self, value: i32) -> Result<()> {
        self.write_bits(&value.to_be_bytes(), 32)
    }

    pub fn read_int(&mut self) -> Result<i32> {
        let b = self.read_bits(32)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Writes `bytes` one byte transfer at a time. Storage for the whole run is
    /// reserved first, so a failed growth writes nothing.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.buffer.ensure_capacity(&self.write_cursor, bytes.len() * 8)?;
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Reads `length` bytes. Either all of them are available or nothing is
    /// consumed.
    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        self.ensure_readable(length.saturating_mul(8))?;
        (0..length).map(|_| self.read_byte()).collect()
    }

    /// Writes the UTF-8 bytes of `text`. No length is recorded; the reader must
    /// know it out of band.
    pub fn write_string(&mut self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Reads `length` bytes and decodes them as UTF-8. Invalid sequences are
    /// replaced with U+FFFD rather than rejected.
    pub fn read_string(&mut self, length: usize) -> Result<String> {
        let bytes = self.read_bytes(length)?;
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
    }
}

//==================================================================================
// 4. Realignment
//==================================================================================

impl BitStream {
    /// Shifts the whole storage `bit_count` bits towards later positions, growing
    /// it by `ceil(bit_count / 8)` bytes. The vacated leading bits are zero.
    ///
    /// Neither cursor is adjusted. To prepend a header, call this, then rewind
    /// the write cursor to 0, write the header, and restore the write cursor to
    /// its old position plus `bit_count`.
    pub fn move_bits(&mut self, bit_count: usize) {
        self.buffer.realign(bit_count);
    }
}

//==================================================================================
// 5. Cursors & Views
//==================================================================================

impl BitStream {
    /// Total number of bits logically written, partial bytes included.
    pub fn get_bits_used(&self) -> usize {
        self.write_cursor.to_bit_pointer()
    }

    pub fn read_pointer(&self) -> usize {
        self.read_cursor.to_bit_pointer()
    }

    pub fn write_pointer(&self) -> usize {
        self.write_cursor.to_bit_pointer()
    }

    /// Bits written but not yet read. Zero if the read cursor is past the end.
    pub fn remaining_bits(&self) -> usize {
        self.get_bits_used().saturating_sub(self.read_pointer())
    }

    pub fn set_read_pointer(&mut self, pointer: i64) -> Result<()> {
        self.read_cursor = Cursor::from_bit_pointer(checked_pointer(pointer)?);
        Ok(())
    }

    /// Repositions the write cursor, which also redefines the content length.
    /// Storage grows (zero-filled) if the new position lies past capacity.
    pub fn set_write_pointer(&mut self, pointer: i64) -> Result<()> {
        let pointer = checked_pointer(pointer)?;
        self.buffer.grow_to(pointer.div_ceil(8))?;
        self.write_cursor = Cursor::from_bit_pointer(pointer);
        Ok(())
    }

    /// The written content: `ceil(get_bits_used() / 8)` bytes. Bits of the last
    /// byte past the content length are whatever the storage holds there.
    pub fn get_buffer(&self) -> &[u8] {
        let storage = self.buffer.as_slice();
        let end = self.content_bytes().min(storage.len());
        &storage[..end]
    }

    /// The whole backing storage, unused trailing capacity included.
    pub fn raw_buffer(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Backing storage size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Consumes the stream, returning the written content.
    pub fn into_bytes(self) -> Vec<u8> {
        let end = self.content_bytes();
        let mut bytes = self.buffer.into_vec();
        bytes.truncate(end);
        bytes
    }

    fn content_bytes(&self) -> usize {
        self.get_bits_used().div_ceil(8)
    }
}

fn checked_pointer(pointer: i64) -> Result<usize> {
    usize::try_from(pointer).map_err(|_| BitStreamError::InvalidPointer(pointer))
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut write_cursor = self.write_cursor;
        let mut read_cursor = self.read_cursor;
        write_cursor.normalize();
        read_cursor.normalize();
        write!(
            f,
            "BitStream[write = {}, read = {}, capacity = {}]",
            write_cursor,
            read_cursor,
            self.buffer.capacity()
        )
    }
}
