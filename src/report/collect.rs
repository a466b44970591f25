//! In-memory reporter for programmatic checks.

use std::fmt;

use super::{Observation, Reporter, Summary, Tally, mismatch_detail};

/// Keeps every observation.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    test_name: String,
    observations: Vec<Observation>,
    tally: Tally,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn failures(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter().filter(|o| !o.passed)
    }

    pub fn summary(&self) -> Summary {
        self.tally.summary()
    }

    fn push(&mut self, passed: bool, label: &str, detail: Option<String>) {
        self.tally.record(&self.test_name, label, passed);
        self.observations.push(Observation {
            test: self.test_name.clone(),
            label: label.to_string(),
            passed,
            detail,
        });
    }
}

impl Reporter for CollectingReporter {
    fn set_test_name(&mut self, name: &str) {
        self.test_name = name.to_string();
    }

    fn assert_true(&mut self, condition: bool, label: &str) {
        self.push(condition, label, None);
    }

    fn assert_equal<V>(&mut self, a: &V, b: &V, label: &str)
    where
        V: PartialEq + fmt::Debug + ?Sized,
    {
        let passed = a == b;
        let detail = (!passed).then(|| mismatch_detail(a, b));
        self.push(passed, label, detail);
    }
}
