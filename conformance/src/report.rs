//! Conformance report types: check results, severity, and aggregation.

use serde::Serialize;

/// How many failing cases a single check family retains verbatim.
///
/// Sweeps cover millions of cases; past this cap only the failure count
/// grows.
pub const DETAIL_CAP: usize = 32;

/// Severity of a check family result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every case in the family passed.
    Pass,
    /// At least one case failed.
    Failure,
}

/// The outcome of one check family (one named sweep or scenario group).
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Validator that produced this result, e.g. `decode`.
    pub validator: String,
    /// The family name, e.g. `unicode-sweep`.
    pub family: String,
    /// Number of cases exercised.
    pub cases: u64,
    /// Number of cases that failed.
    pub failures: u64,
    /// Up to [`DETAIL_CAP`] failing cases, rendered for humans.
    pub details: Vec<String>,
    /// Aggregated severity.
    pub severity: Severity,
}

/// Accumulates the cases of one family, then folds into a [`CheckResult`].
#[derive(Debug)]
pub struct Family {
    validator: &'static str,
    name: &'static str,
    cases: u64,
    failures: u64,
    details: Vec<String>,
}

impl Family {
    /// Opens a named check family.
    #[must_use]
    pub fn new(validator: &'static str, name: &'static str) -> Self {
        Self {
            validator,
            name,
            cases: 0,
            failures: 0,
            details: Vec::new(),
        }
    }

    /// Records one case; `detail` is rendered only on failure.
    pub fn case(&mut self, ok: bool, detail: impl FnOnce() -> String) {
        self.cases += 1;
        if !ok {
            self.failures += 1;
            if self.details.len() < DETAIL_CAP {
                self.details.push(detail());
            }
        }
    }

    /// Compares two values, recording a rendered mismatch on failure.
    pub fn eq<T: PartialEq + core::fmt::Debug>(&mut self, subject: &str, actual: T, expected: T) {
        let ok = actual == expected;
        self.case(ok, || {
            format!("{subject}: expected {expected:?}, got {actual:?}")
        });
    }

    /// Folds the family into a result.
    #[must_use]
    pub fn finish(self) -> CheckResult {
        CheckResult {
            validator: self.validator.into(),
            family: self.name.into(),
            cases: self.cases,
            failures: self.failures,
            severity: if self.failures == 0 {
                Severity::Pass
            } else {
                Severity::Failure
            },
            details: self.details,
        }
    }
}

/// Aggregated report from all validators.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// One entry per check family.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a family result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Merges another report into this one.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Total cases exercised.
    #[must_use]
    pub fn case_count(&self) -> u64 {
        self.results.iter().map(|r| r.cases).sum()
    }

    /// Total failing cases.
    #[must_use]
    pub fn failure_count(&self) -> u64 {
        self.results.iter().map(|r| r.failures).sum()
    }

    /// True when no family failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
