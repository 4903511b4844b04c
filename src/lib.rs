//! This file is the root of the `bitstream_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`stream`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types a caller actually needs, so that
//!     `use bitstream_core::BitStream;` is the only import most code requires.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod error;
pub mod kernels;
pub mod observability;
pub mod stream;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::BitStreamConfig;
pub use error::{BitStreamError, Result};
pub use stream::{BitStream, Cursor};
