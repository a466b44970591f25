//! The worked-example sweeps: scalar vs 8-lane vector add and vector sum.
//!
//! Each kernel pair runs twice: once with every buffer argument drawn from the standard pattern set at the
//! configured length, and once more with the element count itself swept over lengths around the 8-lane block
//! boundary. The second pass is what catches a missing or off-by-one remainder loop at any length.

use slfet_core::ConfigResult;

use crate::config::HarnessConfig;
use crate::harness::{HarnessResult, Param, SweepStats, run};
use crate::kernels::{AddVecFn, VecSumFn, add_vec_scalar, add_vec_simd, vec_sum_scalar, vec_sum_simd};
use crate::patterns;
use crate::report::Reporter;

/// Vector add over `input × input` at a fixed element count `len`.
pub fn add_sweep<R: Reporter>(
    reporter: &mut R,
    reference: AddVecFn,
    candidate: AddVecFn,
    len: usize,
) -> HarnessResult<SweepStats> {
    let set = patterns::standard()?;
    let mut params = vec![
        Param::input::<i16>(len, set.clone())?,
        Param::input::<i16>(len, set)?,
        Param::output::<i16>(len),
        Param::value(len),
    ];
    run(reporter, reference, candidate, &mut params)
}

/// Vector sum over one input at a fixed element count `len`.
pub fn sum_sweep<R: Reporter>(
    reporter: &mut R,
    reference: VecSumFn,
    candidate: VecSumFn,
    len: usize,
) -> HarnessResult<SweepStats> {
    let mut params = vec![Param::input::<i16>(len, patterns::standard()?)?, Param::value(len)];
    run(reporter, reference, candidate, &mut params)
}

/// Vector add with the element count swept over `lengths`; buffers hold `len` elements.
pub fn add_length_sweep<R: Reporter>(
    reporter: &mut R,
    reference: AddVecFn,
    candidate: AddVecFn,
    lengths: &[usize],
    len: usize,
) -> HarnessResult<SweepStats> {
    let set = patterns::standard()?;
    let mut params = vec![
        Param::input::<i16>(len, set.clone())?,
        Param::input::<i16>(len, set)?,
        Param::output::<i16>(len),
        Param::sweep(lengths)?,
    ];
    run(reporter, reference, candidate, &mut params)
}

/// Vector sum with the element count swept over `lengths`; the buffer holds `len` elements.
pub fn sum_length_sweep<R: Reporter>(
    reporter: &mut R,
    reference: VecSumFn,
    candidate: VecSumFn,
    lengths: &[usize],
    len: usize,
) -> HarnessResult<SweepStats> {
    let mut params = vec![Param::input::<i16>(len, patterns::standard()?)?, Param::sweep(lengths)?];
    run(reporter, reference, candidate, &mut params)
}

/// Run every sweep `config` selects against the bundled kernels.
#[tracing::instrument(skip_all, fields(len = config.len, kernels = %config.kernels))]
pub fn run_worked_example<R: Reporter>(reporter: &mut R, config: &HarnessConfig) -> HarnessResult<SweepStats> {
    let lengths = config.sweep_lengths();
    let mut stats = SweepStats::default();

    if config.kernels.includes_add() {
        let (reference, candidate) = (add_vec_scalar as AddVecFn, add_vec_simd as AddVecFn);
        stats += add_sweep(reporter, reference, candidate, config.len)?;
        stats += add_length_sweep(reporter, reference, candidate, &lengths, config.len)?;
    }
    if config.kernels.includes_sum() {
        let (reference, candidate) = (vec_sum_scalar as VecSumFn, vec_sum_simd as VecSumFn);
        stats += sum_sweep(reporter, reference, candidate, config.len)?;
        stats += sum_length_sweep(reporter, reference, candidate, &lengths, config.len)?;
    }
    Ok(stats)
}

/// Names of the standard patterns, for `--list-patterns`.
pub fn pattern_names() -> ConfigResult<Vec<String>> {
    Ok(patterns::standard()?.iter().map(|d| d.name().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KernelSelection;
    use crate::report::CollectingReporter;

    #[test]
    fn test_add_sweep_covers_every_pair() {
        let mut reporter = CollectingReporter::new();
        let stats = add_sweep(&mut reporter, add_vec_scalar, add_vec_simd, 21).unwrap();
        assert_eq!(stats, SweepStats { variants: 49, assertions: 49 });
        assert_eq!(reporter.observations()[0].test, "min vs min");
        assert_eq!(reporter.observations()[1].test, "max vs min");
        assert_eq!(reporter.observations()[48].test, "rand2 vs rand2");
        assert_eq!(reporter.summary().failed, 0);
    }

    #[test]
    fn test_sum_length_sweep_names_lengths() {
        let mut reporter = CollectingReporter::new();
        let stats = sum_length_sweep(&mut reporter, vec_sum_scalar, vec_sum_simd, &[0, 9], 9).unwrap();
        assert_eq!(stats.variants, 14);
        assert_eq!(reporter.observations()[0].test, "min vs 0");
        assert_eq!(reporter.observations()[7].test, "min vs 9");
    }

    #[test]
    fn test_worked_example_selection() {
        let mut reporter = CollectingReporter::new();
        let config = HarnessConfig::new().with_kernels(KernelSelection::Sum);
        let stats = run_worked_example(&mut reporter, &config).unwrap();
        // 7 fixed-length variants + 7 patterns x 9 lengths
        assert_eq!(stats.variants, 7 + 7 * 9);
        assert!(reporter.observations().iter().all(|o| o.label == "return"));
        assert!(reporter.summary().all_passed());
    }

    #[test]
    fn test_pattern_names() {
        assert_eq!(pattern_names().unwrap(), crate::patterns::STANDARD_NAMES);
    }
}
