//! Mixed-radix enumeration of initializer combinations.
//!
//! Every pattern-bearing argument contributes one digit whose radix is the size of its choice set. A single counter
//! is decoded digit-by-digit: the first-declared argument takes `counter % radix` and the counter is divided before
//! the next argument reads its digit. A counter is valid while nothing is left over after the last digit, which
//! holds exactly for `0..product(radices)`.
//!
//! ## Notes
//! - The cursor has no hidden state beyond its counter, so it can be reset or decoded at any index.
//! - With no pattern-bearing arguments the product is 1: a single variant with an empty description.

use crate::errors::{ConfigError, ConfigResult};

/// Separator between descriptor names in a variant description.
pub const DESCRIPTION_SEPARATOR: &str = " vs ";

/// One decoded combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    index: usize,
    digits: Vec<usize>,
}

impl Variant {
    /// The counter value this variant was decoded from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One choice index per pattern-bearing argument, in declaration order.
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }
}

/// Decode `index` against `radices`.
///
/// ## Returns
/// - `(digits, remainder)`: the per-argument choices and whatever quotient is left after the last digit. A non-zero
///   remainder means the counter ran past the end of the sweep.
pub fn decode_digits(radices: &[usize], index: usize) -> (Vec<usize>, usize) {
    let mut rest = index;
    let digits = radices
        .iter()
        .map(|&radix| {
            let digit = rest % radix;
            rest /= radix;
            digit
        })
        .collect();
    (digits, rest)
}

/// Join descriptor names into a variant description.
///
/// Empty names contribute nothing.
///
/// ## Examples
/// ```rust
/// use slfet_core::variant::describe;
/// assert_eq!(describe(["min", "", "inc"]), "min vs inc");
/// assert_eq!(describe(Vec::<&str>::new()), "");
/// ```
pub fn describe<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for name in names.into_iter().filter(|n| !n.is_empty()) {
        if !out.is_empty() {
            out.push_str(DESCRIPTION_SEPARATOR);
        }
        out.push_str(name);
    }
    out
}

/// Stateful cursor over every combination of a list of choice-set sizes.
#[derive(Debug, Clone)]
pub struct VariantCursor {
    radices: Vec<usize>,
    total: usize,
    counter: usize,
}

impl VariantCursor {
    /// ## Errors
    /// - [`ConfigError::EmptyPatternSet`] if any radix is zero.
    /// - [`ConfigError::VariantOverflow`] if the product of radices does not fit in `usize`.
    pub fn new(radices: Vec<usize>) -> ConfigResult<Self> {
        if radices.contains(&0) {
            return Err(ConfigError::EmptyPatternSet);
        }
        let total = radices
            .iter()
            .try_fold(1usize, |acc, &r| acc.checked_mul(r))
            .ok_or(ConfigError::VariantOverflow)?;
        Ok(Self {
            radices,
            total,
            counter: 0,
        })
    }

    /// Number of variants in the full sweep.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The counter value the next [`advance`](Self::advance) will decode.
    pub fn position(&self) -> usize {
        self.counter
    }

    pub fn has_next(&self) -> bool {
        self.decode(self.counter).is_some()
    }

    /// Decode the current counter and step past it.
    pub fn advance(&mut self) -> Option<Variant> {
        let variant = self.decode(self.counter)?;
        self.counter += 1;
        Some(variant)
    }

    /// Restart from counter zero.
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Decode an arbitrary counter value; `None` past the end of the sweep.
    pub fn decode(&self, index: usize) -> Option<Variant> {
        let (digits, rest) = decode_digits(&self.radices, index);
        (rest == 0).then_some(Variant { index, digits })
    }
}

impl Iterator for VariantCursor {
    type Item = Variant;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total.saturating_sub(self.counter);
        (left, Some(left))
    }
}

impl ExactSizeIterator for VariantCursor {}
