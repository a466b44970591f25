//! The sweep loop.
//!
//! For every variant, in mixed-radix order with the first pattern-bearing param as the fastest digit:
//!
//! 1. restore every output buffer to its initial contents,
//! 2. apply the variant's choice to every sweep, input and in/out param,
//! 3. name the test case after the chosen descriptors,
//! 4. call implementation A with slot-A bindings, then implementation B with slot-B bindings,
//! 5. compare return values (when the signature has one) under [`RETURN_LABEL`],
//! 6. compare every output and in/out buffer pair under [`OUTPUT_LABEL`].
//!
//! Execution is single-threaded. Buffers are allocated once and reused, but no variant sees what an earlier one
//! wrote: outputs are reset in step 1 and inputs and in/out buffers are refilled in step 2.

use slfet_core::{Buffer, Element, PairVisitor, VariantCursor, describe};

use super::HarnessResult;
use super::args::Args;
use super::invoke::Invoke;
use super::params::{Param, Slot};
use crate::report::Reporter;

/// Label of the return-value assertion.
pub const RETURN_LABEL: &str = "return";
/// Label of buffer-pair assertions.
pub const OUTPUT_LABEL: &str = "output";

/// What a finished sweep did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStats {
    /// Variants executed.
    pub variants: usize,
    /// Assertions handed to the reporter.
    pub assertions: usize,
}

impl std::ops::AddAssign for SweepStats {
    fn add_assign(&mut self, other: Self) {
        self.variants += other.variants;
        self.assertions += other.assertions;
    }
}

/// Sweep `impl_a` and `impl_b` over every initializer combination of `params`.
///
/// ## Parameters
/// - `reporter`: receives the test name of each variant and one observation per comparison.
/// - `impl_a`, `impl_b`: the two implementations; they share argument list and return type.
/// - `params`: one entry per function argument, in argument order.
///
/// ## Returns
/// - (`SweepStats`): how many variants ran and how many assertions were reported.
///
/// ## Errors
/// - [`HarnessError`](super::HarnessError) for configuration problems (empty sets, disjoint ranges, params that
///   do not match the signature). The first one aborts the sweep; mismatches between implementations never do.
#[tracing::instrument(skip_all, fields(params = params.len(), total = tracing::field::Empty))]
pub fn run<A, B, R>(reporter: &mut R, mut impl_a: A, mut impl_b: B, params: &mut [Param]) -> HarnessResult<SweepStats>
where
    A: Invoke,
    B: Invoke<Output = A::Output>,
    R: Reporter,
{
    let radices: Vec<usize> = params
        .iter()
        .filter(|p| p.role().is_pattern_bearing())
        .map(Param::choice_count)
        .collect();
    let cursor = VariantCursor::new(radices)?;
    tracing::Span::current().record("total", cursor.total());
    tracing::debug!("starting sweep");

    let mut stats = SweepStats::default();
    for variant in cursor {
        params.iter_mut().for_each(Param::reset);

        let mut names = Vec::with_capacity(variant.digits().len());
        let varying = params.iter_mut().filter(|p| p.role().is_pattern_bearing());
        for (param, &choice) in varying.zip(variant.digits()) {
            names.push(param.initialize(choice)?);
        }
        let description = describe(names.iter().map(String::as_str));
        tracing::debug!(variant = variant.index(), %description, "running variant");
        reporter.set_test_name(&description);

        let ret_a = impl_a.invoke(Args::bind(params, Slot::A))?;
        let ret_b = impl_b.invoke(Args::bind(params, Slot::B))?;

        if A::RETURNS_VALUE {
            reporter.assert_equal(&ret_a, &ret_b, RETURN_LABEL);
            stats.assertions += 1;
        }
        for (a, b) in params.iter().filter_map(Param::compared) {
            let pair = ReportPair { reporter: &mut *reporter };
            if Buffer::visit_pair(a, b, pair).is_none() {
                reporter.assert_true(false, OUTPUT_LABEL);
            }
            stats.assertions += 1;
        }
        stats.variants += 1;
    }

    tracing::info!(variants = stats.variants, assertions = stats.assertions, "sweep complete");
    Ok(stats)
}

/// Reports one buffer pair under [`OUTPUT_LABEL`].
struct ReportPair<'r, R> {
    reporter: &'r mut R,
}

impl<R: Reporter> PairVisitor for ReportPair<'_, R> {
    type Output = ();

    fn visit<T: Element>(self, a: &[T], b: &[T]) {
        self.reporter.assert_equal(a, b, OUTPUT_LABEL);
    }
}
