//! utfcell - a byte-serial transcoder between UTF-32, FSS-UTF (UTF-8,
//! lengths 1-6) and UTF-16.
//!
//! The crate is a software rendering of a hardware unit: one 32-bit
//! **character register**, six byte pointers, and a handful of derived
//! flags. Every operation moves exactly one byte, so the same cell serves
//! as a streaming coder or as a library transcoder.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      TranscoderCell                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  CharRegister (32 bits)     one flat value space for     │
//! │                             characters, partial input    │
//! │                             and error encodings          │
//! ├───────────────┬──────────────────┬───────────────────────┤
//! │ UTF-32 lanes  │ FSS-UTF shifter  │ UTF-16 pairing        │
//! │ rcip/rcop     │ rbip/rbop        │ ruip/ruop             │
//! └───────────────┴──────────────────┴───────────────────────┘
//!          Region::of(R)  →  Status / Props (combinational)
//! ```
//!
//! The register's value space is partitioned into contiguous regions —
//! valid code points at the bottom, extended code points above them, UTF-16
//! parking windows in the middle, FSS-UTF error and truncation windows at
//! the top — so a chain of unsigned comparisons ([`Region::of`]) classifies
//! every reachable state. Partial input round-trips losslessly: a truncated
//! sequence read back from the register replays its exact input bytes.
//!
//! # Example
//!
//! ```
//! use utfcell::{Config, TranscoderCell};
//!
//! let mut cell = TranscoderCell::new(Config { chk_range: true, big_endian: false });
//!
//! // Decode a surrogate pair, little-endian.
//! for b in [0x3D, 0xD8, 0x4D, 0xDE] {
//!     cell.write_utf16(b);
//! }
//! assert_eq!(cell.register(), 0x1F34D);
//!
//! // Re-encode the same character as FSS-UTF.
//! let mut utf8 = Vec::new();
//! while !cell.bout_eof() {
//!     utf8.push(cell.read_utf8());
//! }
//! assert_eq!(utf8, [0xF0, 0x9F, 0x8D, 0x8D]);
//! ```
//!
//! # Error Model
//!
//! Nothing is fatal and nothing allocates. Malformed input lands the
//! register in a dedicated error region (`invalid`, `overlong`, `nonuni`)
//! that still re-encodes to the offending bytes; rejected writes raise the
//! sticky `retry` latch and leave the register untouched. See
//! [`Status`] and [`Props`].

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// Core data types (register, region classifier, flag sets)
mod core;

// Combinational encode/decode helpers per encoding
pub mod codec;

// The stateful byte-serial unit and its dispatcher
mod unit;

pub use crate::core::constants;
pub use crate::core::{CharRegister, Props, Region, Status};
pub use crate::unit::{Config, Op, TranscoderCell};

/// Prelude module for convenient imports.
///
/// ```
/// use utfcell::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codec::{utf16, utf32, utf8};
    pub use crate::core::{CharRegister, Props, Region, Status};
    pub use crate::unit::{Config, Op, TranscoderCell};
}
