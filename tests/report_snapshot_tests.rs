//! Snapshot tests for reporter output
//!
//! A two-variant sweep where the second variant exposes a dropped last element.
//!
//! Run with: `cargo test --test report_snapshot_tests`
//! Review changes: `cargo insta review`

use slfet::harness::{Param, run};
use slfet::report::{ConsoleReporter, JsonReporter, Reporter};
use slfet::{Descriptor, PatternSet};

type CopyFn = fn(&[i16], &mut [i16], usize);

fn copy(a: &[i16], out: &mut [i16], n: usize) {
    out[..n].copy_from_slice(&a[..n]);
}

fn copy_skipping_last(a: &[i16], out: &mut [i16], n: usize) {
    let n = n.saturating_sub(1);
    out[..n].copy_from_slice(&a[..n]);
}

fn sweep<R: Reporter>(reporter: &mut R) {
    let set = PatternSet::new(vec![Descriptor::new("zero", 0), Descriptor::new("inc", 1).with_step(1)]).unwrap();
    let mut params = vec![Param::input::<i16>(3, set).unwrap(), Param::output::<i16>(3), Param::value(3)];
    run(reporter, copy as CopyFn, copy_skipping_last as CopyFn, &mut params).unwrap();
}

#[test]
fn test_console_report() {
    let mut reporter = ConsoleReporter::new(Vec::new()).with_detail(true);
    sweep(&mut reporter);
    reporter.write_summary().unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r"
    zero - output: 1
    inc - output: 0
        [1, 2, 3] != [1, 2, 0]
    ====== 1 passed, 1 failed ======
    ");
}

#[test]
fn test_console_report_failures_only() {
    let mut reporter = ConsoleReporter::new(Vec::new()).with_failures_only(true);
    sweep(&mut reporter);
    reporter.write_summary().unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r"
    inc - output: 0
    ====== 1 passed, 1 failed ======
    ");
}

#[test]
fn test_json_report() {
    let mut reporter = JsonReporter::new(Vec::new());
    sweep(&mut reporter);
    reporter.write_summary().unwrap();
    let text = String::from_utf8(reporter.into_inner()).unwrap();

    insta::assert_snapshot!(text.trim_end(), @r#"
    {"test":"zero","label":"output","passed":true}
    {"test":"inc","label":"output","passed":false,"detail":"[1, 2, 3] != [1, 2, 0]"}
    {"summary":{"total":2,"passed":1,"failed":1}}
    "#);
}
