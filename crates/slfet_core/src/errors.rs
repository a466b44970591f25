//! Configuration errors for pattern sets, descriptors and buffer pairs.
//!
//! Everything here describes a broken test definition, never a test outcome. Mismatches between the two
//! implementations under test are observations and travel through a reporter instead.

use miette::Diagnostic;
use thiserror::Error;

/// A test definition that cannot be swept.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    #[error("initializer '{name}' has an empty range [{min}, {max}]")]
    #[diagnostic(code(slfet::config::empty_range), help("descriptor ranges need `min <= max`"))]
    EmptyRange { name: String, min: i64, max: i64 },

    #[error("initializer '{name}' range [{min}, {max}] does not intersect the element range [{elem_min}, {elem_max}]")]
    #[diagnostic(
        code(slfet::config::disjoint_range),
        help("narrow the descriptor range so it overlaps the buffer's element type")
    )]
    DisjointRange {
        name: String,
        min: i64,
        max: i64,
        elem_min: i64,
        elem_max: i64,
    },

    #[error("pattern set is empty")]
    #[diagnostic(code(slfet::config::empty_pattern_set), help("every input or in/out argument needs at least one initializer"))]
    EmptyPatternSet,

    #[error("value sweep is empty")]
    #[diagnostic(code(slfet::config::empty_sweep))]
    EmptySweep,

    #[error("choice {choice} is out of range for an argument with {count} choice(s)")]
    #[diagnostic(code(slfet::config::choice_out_of_range))]
    ChoiceOutOfRange { choice: usize, count: usize },

    #[error("paired buffers differ in length: {left} vs {right}")]
    #[diagnostic(
        code(slfet::config::length_mismatch),
        help("output and in/out buffers are compared element-wise and must have the same length")
    )]
    LengthMismatch { left: usize, right: usize },

    #[error("variant count overflows: the product of all pattern set sizes exceeds usize::MAX")]
    #[diagnostic(code(slfet::config::variant_overflow))]
    VariantOverflow,
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
