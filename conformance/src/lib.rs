//! Conformance suite for the `utfcell` transcoder.
//!
//! Reconstructs the hardware qualification run as a library of
//! validators plus a CLI runner. Each validator sweeps one surface of the
//! unit — encode, decode, UTF-16, raw register I/O — against reference
//! models written independently from the implementation, and folds the
//! outcome into a [`ConformanceReport`].
//!
//! # Entry Point
//!
//! ```
//! use utfcell_conformance::{run_all, RunOptions};
//!
//! let report = run_all(&RunOptions { quick: true, only: Vec::new() });
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

pub mod oracle;
pub mod report;
pub mod validators;

pub use report::{CheckResult, ConformanceReport, Severity};

/// Sweep stride used by `--quick` runs; a prime so the thinned sweeps
/// still straddle every window boundary class.
pub const QUICK_STRIDE: u32 = 997;

/// Runner options.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Thin the exhaustive sweeps to roughly a thousandth.
    pub quick: bool,
    /// Run only the named validators (all when empty).
    pub only: Vec<String>,
}

impl RunOptions {
    fn wants(&self, name: &str) -> bool {
        self.only.is_empty() || self.only.iter().any(|n| n == name)
    }

    fn stride(&self) -> u32 {
        if self.quick {
            QUICK_STRIDE
        } else {
            1
        }
    }
}

/// Runs the selected validators and aggregates their reports.
#[must_use]
pub fn run_all(options: &RunOptions) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    if options.wants("register-io") {
        report.extend(validators::register_io::validate());
    }
    if options.wants("encode") {
        report.extend(validators::encode::validate(options.stride()));
    }
    if options.wants("decode") {
        report.extend(validators::decode::validate(options.stride()));
    }
    if options.wants("utf16") {
        report.extend(validators::utf16::validate(options.stride()));
    }
    report
}
