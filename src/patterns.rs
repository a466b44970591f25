//! The standard named pattern set used by the worked example.
//!
//! | name    | start    | step_add | step_mul   |
//! |---------|----------|----------|------------|
//! | `min`   | 0        | 0        | 1          |
//! | `max`   | 255      | 0        | 1          |
//! | `mid`   | 128      | 0        | 1          |
//! | `inc`   | 100      | 1        | 1          |
//! | `dec`   | 100      | -2       | 1          |
//! | `rand1` | 12345    | 1664525  | 1013904223 |
//! | `rand2` | -1234567 | 1664525  | 1013904223 |
//!
//! Every descriptor covers the full `i64` range, so values are folded only by the element type's own limits.

use slfet_core::{ConfigResult, Descriptor, PatternSet};

const LCG_ADD: i64 = 1_664_525;
const LCG_MUL: i64 = 1_013_904_223;

/// Names of the standard set, in sweep order.
pub const STANDARD_NAMES: [&str; 7] = ["min", "max", "mid", "inc", "dec", "rand1", "rand2"];

pub fn standard() -> ConfigResult<PatternSet> {
    PatternSet::new(vec![
        Descriptor::new("min", 0),
        Descriptor::new("max", 255),
        Descriptor::new("mid", 128),
        Descriptor::new("inc", 100).with_step(1),
        Descriptor::new("dec", 100).with_step(-2),
        Descriptor::new("rand1", 12_345).with_steps(LCG_ADD, LCG_MUL),
        Descriptor::new("rand2", -1_234_567).with_steps(LCG_ADD, LCG_MUL),
    ])
}
