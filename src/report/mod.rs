//! Reporting sweep observations.
//!
//! ## Reporter Trait
//!
//! The engine never decides what a mismatch means. It names each variant with
//! [`Reporter::set_test_name`] and hands every comparison to [`Reporter::assert_equal`], which records one
//! boolean observation tagged with the current test name and a label (`return` or `output`).
//!
//! All bundled reporters keep a [`Tally`], so callers can turn a finished sweep into a [`Summary`] and an exit
//! status instead of scraping printed lines.

mod collect;
mod console;
mod json;

use std::fmt;

use serde::Serialize;

pub use collect::CollectingReporter;
pub use console::ConsoleReporter;
pub use json::JsonReporter;

// ============================================================================
// Reporter Trait
// ============================================================================

/// Receives the observations of a sweep.
pub trait Reporter {
    /// Set the label for subsequent observations.
    fn set_test_name(&mut self, name: &str);

    /// Record one boolean observation.
    fn assert_true(&mut self, condition: bool, label: &str);

    /// Record whether `a == b`.
    ///
    /// The default forwards to [`assert_true`](Self::assert_true); reporters that show mismatch details override
    /// it.
    fn assert_equal<V>(&mut self, a: &V, b: &V, label: &str)
    where
        V: PartialEq + fmt::Debug + ?Sized,
    {
        self.assert_true(a == b, label);
    }
}

/// Render both sides of a failed comparison.
pub fn mismatch_detail<V: fmt::Debug + ?Sized>(a: &V, b: &V) -> String {
    format!("{a:?} != {b:?}")
}

// ============================================================================
// Observations and tallies
// ============================================================================

/// One recorded assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub test: String,
    pub label: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Pass/fail counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    passed: usize,
    failed: usize,
}

impl Tally {
    pub fn record(&mut self, test: &str, label: &str, passed: bool) {
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
            tracing::warn!(test, label, "implementations disagree");
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            total: self.passed + self.failed,
            passed: self.passed,
            failed: self.failed,
        }
    }
}

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this summary: `0` when every observation passed, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.passed, self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bools(Vec<bool>);

    impl Reporter for Bools {
        fn set_test_name(&mut self, _name: &str) {}

        fn assert_true(&mut self, condition: bool, _label: &str) {
            self.0.push(condition);
        }
    }

    #[test]
    fn test_default_assert_equal_forwards() {
        let mut r = Bools(Vec::new());
        r.assert_equal(&[1, 2][..], &[1, 2][..], "output");
        r.assert_equal(&3, &4, "return");
        assert_eq!(r.0, vec![true, false]);
    }

    #[test]
    fn test_tally_summary() {
        let mut tally = Tally::default();
        tally.record("a", "return", true);
        tally.record("a", "output", false);
        tally.record("b", "output", true);
        let summary = tally.summary();
        assert_eq!(summary, Summary { total: 3, passed: 2, failed: 1 });
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.to_string(), "2 passed, 1 failed");
    }

    #[test]
    fn test_empty_summary_passes() {
        assert_eq!(Summary::default().exit_code(), 0);
    }

    #[test]
    fn test_mismatch_detail() {
        assert_eq!(mismatch_detail(&[1, 2][..], &[1, 3][..]), "[1, 2] != [1, 3]");
    }
}
