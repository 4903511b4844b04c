// In: src/error.rs

//! This module defines the single, unified error type for the entire bitstream library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use std::collections::TryReserveError;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BitStreamError>;

#[derive(Error, Debug)]
pub enum BitStreamError {
    // =========================================================================
    // === Cursor & Transfer Errors
    // =========================================================================
    /// A read would move the read cursor past the last bit ever written.
    #[error("Read of {requested} bits at bit {position} exceeds content length of {available} bits")]
    OutOfRange {
        position: usize,
        requested: usize,
        available: usize,
    },

    #[error("Invalid bit pointer: {0}")]
    InvalidPointer(i64),

    #[error("Source holds {available} bits but a transfer of {count} bits was requested")]
    ScratchTooShort { count: usize, available: usize },

    // =========================================================================
    // === Storage Errors
    // =========================================================================
    #[error("Storage growth failed: {0}")]
    AllocationFailure(String),

    // =========================================================================
    // === Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An error from the Serde JSON library, raised while loading or saving a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<TryReserveError> for BitStreamError {
    fn from(err: TryReserveError) -> Self {
        BitStreamError::AllocationFailure(err.to_string())
    }
}
