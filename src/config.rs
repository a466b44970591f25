//! Run configuration for the worked-example sweeps.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// Buffer length used by the reference run: two full 8-lane blocks plus a 5-element tail.
pub const DEFAULT_LEN: usize = 21;

/// How observations are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `<name> - <label>: <0|1>` lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Which worked-example kernels to sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelSelection {
    /// Vector add only
    Add,
    /// Vector sum only
    Sum,
    /// Both
    #[default]
    All,
}

impl KernelSelection {
    pub fn includes_add(self) -> bool {
        matches!(self, KernelSelection::Add | KernelSelection::All)
    }

    pub fn includes_sum(self) -> bool {
        matches!(self, KernelSelection::Sum | KernelSelection::All)
    }
}

impl fmt::Display for KernelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KernelSelection::Add => "add",
            KernelSelection::Sum => "sum",
            KernelSelection::All => "all",
        };
        f.write_str(name)
    }
}

/// Harness run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    /// Element count of every buffer
    pub len: usize,
    /// Output format of the reporter
    pub format: ReportFormat,
    /// Print only failing observations
    pub failures_only: bool,
    /// Exit non-zero when any observation failed
    pub strict: bool,
    /// Kernels to sweep
    pub kernels: KernelSelection,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            format: ReportFormat::Text,
            failures_only: false,
            strict: false,
            kernels: KernelSelection::All,
        }
    }
}

impl HarnessConfig {
    /// Create a new config with the reference settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_failures_only(mut self, failures_only: bool) -> Self {
        self.failures_only = failures_only;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_kernels(mut self, kernels: KernelSelection) -> Self {
        self.kernels = kernels;
        self
    }

    /// Lengths of the length sweep: short, around one and two blocks, and the configured length.
    ///
    /// Sorted, deduplicated and never above `len`.
    pub fn sweep_lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = [0, 1, 7, 8, 9, 15, 16, 17, self.len]
            .into_iter()
            .filter(|&n| n <= self.len)
            .collect();
        lengths.sort_unstable();
        lengths.dedup();
        lengths
    }
}
