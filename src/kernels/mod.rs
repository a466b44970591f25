//! Worked-example functions under test: vector add and vector sum over `i16`.
//!
//! Each kernel has a scalar reference and an 8-lane accelerated variant whose bulk loop is followed by a scalar
//! tail. The signature types below are what the harness calls; cast a kernel to its type
//! (`add_vec_simd as AddVecFn`) before handing it to [`crate::harness::run`].
//!
//! ## Notes
//!
//! - Both variants wrap on overflow, matching 16-bit lane arithmetic.
//! - `n` may be smaller than the buffers; only the first `n` elements are touched.

pub mod scalar;
pub mod simd;

pub use scalar::{add_vec_scalar, vec_sum_scalar};
pub use simd::{LANES, add_vec_simd, vec_sum_simd};

/// `c[i] = a[i] + b[i]` for `i < n`.
pub type AddVecFn = fn(&[i16], &[i16], &mut [i16], usize);

/// Sum of the first `n` elements, widened to `i32`.
pub type VecSumFn = fn(&[i16], usize) -> i32;
