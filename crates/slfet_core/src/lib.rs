//! Provide the pure building blocks of stateless function equivalence testing.
//!
//! This crate is intentionally small and dependency-light. It holds the deterministic pieces every sweep depends
//! on:
//! - [`init`]: named initializer descriptors, range folding and element-type limits,
//! - [`buffer`]: owned buffers whose element type is chosen per argument, and
//! - [`variant`]: the mixed-radix cursor that enumerates descriptor combinations and names them.
//!
//! ## Notes
//!
//! - No IO and no global state. Running functions and reporting results lives in the `slfet` crate.

pub mod buffer;
pub mod errors;
pub mod init;
pub mod variant;

pub use buffer::{Buffer, PairVisitor};
pub use errors::{ConfigError, ConfigResult};
pub use init::{Descriptor, Element, PatternSet, fold_into_range};
pub use variant::{DESCRIPTION_SEPARATOR, Variant, VariantCursor, describe};
