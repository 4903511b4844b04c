// In: src/stream/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Stream Layer
// ====================================================================================
//
// `BitStream` is the only stateful component of the library. It owns one
// growable byte store and two independent cursors, and every typed accessor is
// a thin wrapper over a single bit-transfer primitive.
//
// Data Flow (Write):
//
//   1. [Typed Codec (write_int, write_boolean, ...)]  -> value to scratch bytes + bit count
//         |
//         `-> 2. [Transfer Engine (transfer::write_bits)]
//                   |
//                   `-> a. BitBuffer::ensure_capacity (grow before the first bit moves)
//                   `-> b. copy bit by bit, advancing the write cursor
//
// Data Flow (Read):
//
//   1. [Typed Codec (read_int, read_boolean, ...)]   -> bit count
//         |
//         `-> 2. [Transfer Engine (transfer::read_bits)]
//                   |
//                   `-> a. bounds check against the write cursor (content length)
//                   `-> b. copy bit by bit into scratch, advancing the read cursor
//         |
//         `-> 3. scratch bytes back to a value
//
// ====================================================================================
mod bit_stream;
pub mod buffer;
mod cursor;
pub(crate) mod transfer;

pub use bit_stream::BitStream;
pub use buffer::BitBuffer;
pub use cursor::Cursor;
