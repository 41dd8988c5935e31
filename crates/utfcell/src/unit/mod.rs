//! The byte-serial unit: one dispatched action per step.

pub mod cell;
pub mod op;

pub use cell::{Config, TranscoderCell};
pub use op::Op;
