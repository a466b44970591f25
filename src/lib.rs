//! Stateless function equivalence testing.
//!
//! Two implementations of the same function are called with identical arguments for every combination of
//! named input patterns. Return values and output buffers are compared and each comparison is handed to a
//! [`Reporter`](report::Reporter). The deterministic pieces (descriptors, folding, variant enumeration) live in
//! [`slfet_core`]; this crate binds them to real function calls.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `harness` and `cli` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Unsafe code**: Confined to the SSE2 paths in [`kernels::simd`], each block carrying a `SAFETY` comment.

pub mod cli;
pub mod config;
pub mod harness;
pub mod kernels;
pub mod patterns;
pub mod report;
pub mod suite;

pub use config::{HarnessConfig, KernelSelection, ReportFormat};
pub use harness::{HarnessError, HarnessResult, Param, SweepStats, run};
pub use report::{CollectingReporter, ConsoleReporter, JsonReporter, Reporter, Summary};
pub use slfet_core::{Buffer, ConfigError, Descriptor, Element, PatternSet};
