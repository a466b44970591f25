//! Line-oriented console reporter.
//!
//! Every observation becomes `<test name> - <label>: <0 or 1>`. Mismatch details follow on an indented line when
//! enabled.

use std::fmt;
use std::io::{self, Write};

use super::{Reporter, Summary, Tally, mismatch_detail};

/// Writes one line per observation.
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    test_name: String,
    failures_only: bool,
    show_detail: bool,
    tally: Tally,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            test_name: String::new(),
            failures_only: false,
            show_detail: false,
            tally: Tally::default(),
        }
    }

    /// Only print failing observations.
    pub fn with_failures_only(mut self, failures_only: bool) -> Self {
        self.failures_only = failures_only;
        self
    }

    /// Print both sides of a failed comparison.
    pub fn with_detail(mut self, show_detail: bool) -> Self {
        self.show_detail = show_detail;
        self
    }

    pub fn summary(&self) -> Summary {
        self.tally.summary()
    }

    /// Print the summary line.
    pub fn write_summary(&mut self) -> io::Result<Summary> {
        let summary = self.summary();
        writeln!(self.out, "====== {summary} ======")?;
        self.out.flush()?;
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn observe(&mut self, passed: bool, label: &str, detail: Option<String>) {
        self.tally.record(&self.test_name, label, passed);
        if self.failures_only && passed {
            return;
        }
        // A closed stdout should not abort the sweep; observations still land in the tally.
        let _ = writeln!(self.out, "{} - {}: {}", self.test_name, label, u8::from(passed));
        if let Some(detail) = detail.filter(|_| self.show_detail) {
            let _ = writeln!(self.out, "    {detail}");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn set_test_name(&mut self, name: &str) {
        self.test_name = name.to_string();
    }

    fn assert_true(&mut self, condition: bool, label: &str) {
        self.observe(condition, label, None);
    }

    fn assert_equal<V>(&mut self, a: &V, b: &V, label: &str)
    where
        V: PartialEq + fmt::Debug + ?Sized,
    {
        let passed = a == b;
        let detail = (!passed && self.show_detail).then(|| mismatch_detail(a, b));
        self.observe(passed, label, detail);
    }
}
