//! This module collects the pure, stateless bit-level kernels that the stateful
//! `stream` component is built on.
//!
//! Kernels never own storage and never track cursors; they take bytes in and
//! hand bytes back.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Single-bit access and whole-array bit shifting.
pub mod bit_ops;

pub use bit_ops::{get_bit, set_bit, shift_right};
