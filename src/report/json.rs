//! JSON-lines reporter: one object per observation.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use super::{Observation, Reporter, Summary, Tally, mismatch_detail};

#[derive(Serialize)]
struct SummaryLine {
    summary: Summary,
}

/// Writes each observation as a JSON object on its own line.
pub struct JsonReporter<W: Write = io::Stdout> {
    out: W,
    test_name: String,
    tally: Tally,
    failures_only: bool,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            test_name: String::new(),
            tally: Tally::default(),
            failures_only: false,
        }
    }

    /// Skip passing observations; they still count toward the summary.
    pub fn with_failures_only(mut self, failures_only: bool) -> Self {
        self.failures_only = failures_only;
        self
    }

    pub fn summary(&self) -> Summary {
        self.tally.summary()
    }

    /// Emit `{"summary": {...}}` as the final line.
    pub fn write_summary(&mut self) -> io::Result<Summary> {
        let summary = self.summary();
        serde_json::to_writer(&mut self.out, &SummaryLine { summary })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(summary)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn observe(&mut self, passed: bool, label: &str, detail: Option<String>) {
        self.tally.record(&self.test_name, label, passed);
        if passed && self.failures_only {
            return;
        }
        let observation = Observation {
            test: self.test_name.clone(),
            label: label.to_string(),
            passed,
            detail,
        };
        if let Err(err) = serde_json::to_writer(&mut self.out, &observation) {
            tracing::error!(%err, "failed to write observation");
            return;
        }
        let _ = writeln!(self.out);
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
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
        self.observe(passed, label, (!passed).then(|| mismatch_detail(a, b)));
    }
}
