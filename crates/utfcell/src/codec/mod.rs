//! Combinational encode/decode helpers, one module per encoding.
//!
//! Everything here is a pure `const fn` over register values and bytes; the
//! stateful sequencing (pointers, retry, ready) lives in [`crate::unit`].

pub mod utf16;
pub mod utf32;
pub mod utf8;
