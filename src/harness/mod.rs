//! Equivalence sweeps over a pair of implementations.
//!
//! ## Modules
//!
//! - `params` - role-tagged arguments (value, sweep, input, output, in/out) and their buffers
//! - `args` - per-call argument frames bound for one implementation slot
//! - `invoke` - function signature shapes the engine knows how to call
//! - `engine` - the sweep loop: initialize, call both, compare, report
//!
//! ## Errors
//!
//! Only broken test definitions are errors ([`HarnessError`]). A mismatch between the two implementations is an
//! observation handed to the [`Reporter`](crate::report::Reporter) and never stops the sweep.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod args;
pub mod engine;
pub mod invoke;
pub mod params;

use miette::Diagnostic;
use slfet_core::ConfigError;
use thiserror::Error;

pub use args::{Args, Bound};
pub use engine::{OUTPUT_LABEL, RETURN_LABEL, SweepStats, run};
pub use invoke::{Invoke, NoReturn, Returning, no_return, returning};
pub use params::{ErasedScalar, Param, Role, Slot};

/// A test definition the engine cannot execute.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("argument {position}: expected {expected}, found {found}")]
    #[diagnostic(
        code(slfet::bind::role_mismatch),
        help("the params must be declared in the same order as the function's arguments")
    )]
    RoleMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("argument {position}: expected {expected}, found {found}")]
    #[diagnostic(
        code(slfet::bind::type_mismatch),
        help("each param carries its own element or scalar type; the function must ask for that type")
    )]
    TypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("argument {position}: expected {expected}, but no params are left")]
    #[diagnostic(code(slfet::bind::missing_argument))]
    MissingArgument { position: usize, expected: &'static str },

    #[error("{count} param(s) were not consumed by the call")]
    #[diagnostic(code(slfet::bind::unused_arguments))]
    UnusedArguments { count: usize },
}

/// Result type for harness operations.
pub type HarnessResult<T> = Result<T, HarnessError>;
