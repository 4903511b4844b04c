//! The growable, zero-filled byte store behind a `BitStream`.
//!
//! The length of the inner `Vec` is the capacity: every byte up to it exists
//! and is initialized. Content length is tracked by the write cursor, never by
//! the storage itself.

use crate::config::BitStreamConfig;
use crate::error::Result;
use crate::kernels::bit_ops;
use crate::stream::Cursor;

#[derive(Debug, Clone)]
pub struct BitBuffer {
    storage: Vec<u8>,
    growth_increment: usize,
}

impl BitBuffer {
    /// Allocates `capacity` zeroed bytes.
    pub(crate) fn allocate(capacity: usize, growth_increment: usize) -> Self {
        Self {
            storage: vec![0u8; capacity],
            growth_increment,
        }
    }

    /// Adopts existing bytes as storage. The capacity is exactly their length.
    pub(crate) fn adopt(bytes: Vec<u8>, growth_increment: usize) -> Self {
        Self {
            storage: bytes,
            growth_increment,
        }
    }

    /// Validates `config` and allocates its initial capacity.
    pub fn with_config(config: &BitStreamConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::allocate(
            config.initial_capacity_bytes,
            config.growth_increment_bytes,
        ))
    }

    /// Validates `config` and adopts `bytes` as storage.
    pub fn from_bytes(bytes: Vec<u8>, config: &BitStreamConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::adopt(bytes, config.growth_increment_bytes))
    }

    /// Grows the storage, before any bit is written, so that `bits_needed`
    /// bits starting at `cursor` all land on existing bytes.
    ///
    /// Growth happens in whole increments, as many as the request needs, in a
    /// single reallocation. Existing bytes are preserved; new bytes are zero.
    pub fn ensure_capacity(&mut self, cursor: &Cursor, bits_needed: usize) -> Result<()> {
        if bits_needed == 0 {
            return Ok(());
        }
        let required_bytes = (cursor.to_bit_pointer() + bits_needed).div_ceil(8);
        self.grow_to(required_bytes)
    }

    /// Grows the storage to at least `required_bytes`. Never shrinks.
    pub(crate) fn grow_to(&mut self, required_bytes: usize) -> Result<()> {
        let capacity = self.storage.len();
        if required_bytes <= capacity {
            return Ok(());
        }

        let steps = (required_bytes - capacity).div_ceil(self.growth_increment);
        let new_capacity = capacity + steps * self.growth_increment;

        self.storage.try_reserve_exact(new_capacity - capacity)?;
        self.storage.resize(new_capacity, 0);

        log::trace!(
            "bitstream storage grown: {} -> {} bytes ({} step(s) of {})",
            capacity,
            new_capacity,
            steps,
            self.growth_increment
        );
        Ok(())
    }

    /// Replaces the storage with a copy shifted `bit_count` bits towards later
    /// positions. The storage grows by `ceil(bit_count / 8)` bytes.
    pub fn realign(&mut self, bit_count: usize) {
        let before = self.storage.len();
        self.storage = bit_ops::shift_right(&self.storage, bit_count);
        log::debug!(
            "bitstream storage realigned by {} bits: {} -> {} bytes",
            bit_count,
            before,
            self.storage.len()
        );
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.storage
    }

    #[inline]
    pub(crate) fn byte(&self, index: usize) -> u8 {
        self.storage[index]
    }

    #[inline]
    pub(crate) fn set_byte(&mut self, index: usize, value: u8) {
        self.storage[index] = value;
    }

    pub(crate) fn into_vec(self) -> Vec<u8> {
        self.storage
    }
}
