//! Deterministic buffer initializers.
//!
//! A [`Descriptor`] is a named generator: a running value starts at `start` and advances by
//! `val * step_mul + step_add` after every element. Each generated value is folded into the intersection of the
//! descriptor's `[min, max]` window and the element type's representable range before it is stored.
//!
//! ## Notes
//!
//! - Generator arithmetic is 64-bit wrapping so long multiplicative runs stay deterministic.
//! - Folding wraps instead of saturating, so values keep cycling through the whole window even after the
//!   generator drifts far outside it.

use std::fmt;
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::errors::{ConfigError, ConfigResult};

// ============================================================================
// Element types
// ============================================================================

mod sealed {
    pub trait Sealed {}
}

/// Integer element types a buffer may hold.
///
/// `LOWEST` and `HIGHEST` are the type's representable range expressed in `i64` (clamped for `u64`).
pub trait Element: sealed::Sealed + Copy + PartialEq + Default + fmt::Debug + Send + Sync + 'static {
    const LOWEST: i64;
    const HIGHEST: i64;
    /// Type name used in diagnostics, e.g. `"i16"`.
    const NAME: &'static str;

    /// Narrow a value already folded into `[LOWEST, HIGHEST]`.
    fn from_folded(value: i64) -> Self;

    fn into_buffer(values: Vec<Self>) -> Buffer;

    /// The buffer's elements, if it holds this type.
    fn view(buffer: &Buffer) -> Option<&[Self]>;

    fn view_mut(buffer: &mut Buffer) -> Option<&mut [Self]>;
}

macro_rules! impl_element {
    ($($ty:ident => $hi:expr, $variant:ident;)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const LOWEST: i64 = <$ty>::MIN as i64;
                const HIGHEST: i64 = $hi;
                const NAME: &'static str = stringify!($ty);

                #[inline]
                fn from_folded(value: i64) -> Self {
                    debug_assert!((Self::LOWEST..=Self::HIGHEST).contains(&value));
                    value as $ty
                }

                fn into_buffer(values: Vec<Self>) -> Buffer {
                    Buffer::$variant(values)
                }

                fn view(buffer: &Buffer) -> Option<&[Self]> {
                    match buffer {
                        Buffer::$variant(values) => Some(values.as_slice()),
                        _ => None,
                    }
                }

                fn view_mut(buffer: &mut Buffer) -> Option<&mut [Self]> {
                    match buffer {
                        Buffer::$variant(values) => Some(values.as_mut_slice()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_element! {
    i8 => i8::MAX as i64, I8;
    i16 => i16::MAX as i64, I16;
    i32 => i32::MAX as i64, I32;
    i64 => i64::MAX, I64;
    u8 => u8::MAX as i64, U8;
    u16 => u16::MAX as i64, U16;
    u32 => u32::MAX as i64, U32;
    u64 => i64::MAX, U64;
}

// ============================================================================
// Range folding
// ============================================================================

/// Map any integer onto `[min, max]` by wraparound.
///
/// ## Parameters
/// - `value`: the raw generator value.
/// - `min`, `max`: the inclusive target window (`min <= max`).
///
/// ## Returns
/// - (`i64`): `max - (min - value) % width` below the window, `min + (value - min) % width` otherwise,
///   where `width = max + 1 - min`.
///
/// ## Notes
/// - Computed in 128-bit, so the full `i64` window is accepted.
/// - In-range values are fixed points; `max + 1` folds to `min`.
///
/// ## Examples
/// ```rust
/// use slfet_core::init::fold_into_range;
/// assert_eq!(fold_into_range(256, 0, 255), 0);
/// assert_eq!(fold_into_range(300, 0, 255), 44);
/// assert_eq!(fold_into_range(-256, 0, 255), 255);
/// ```
pub fn fold_into_range(value: i64, min: i64, max: i64) -> i64 {
    debug_assert!(min <= max, "fold_into_range called with an empty window");
    let (v, lo, hi) = (i128::from(value), i128::from(min), i128::from(max));
    let width = hi + 1 - lo;
    let folded = if v < lo { hi - (lo - v) % width } else { lo + (v - lo) % width };
    // The result lies in [min, max], which fits in i64.
    folded as i64
}

/// Intersect a descriptor window with an element type's range.
///
/// ## Returns
/// - `Some((min, max))` when the windows overlap, `None` otherwise.
pub fn effective_range<T: Element>(min: i64, max: i64) -> Option<(i64, i64)> {
    let lo = min.max(T::LOWEST);
    let hi = max.min(T::HIGHEST);
    (lo <= hi).then_some((lo, hi))
}

// ============================================================================
// Descriptor
// ============================================================================

/// One named way to fill a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: String,
    start: i64,
    step_add: i64,
    step_mul: i64,
    min: i64,
    max: i64,
}

impl Descriptor {
    /// Create a constant descriptor over the full `i64` window.
    pub fn new(name: impl Into<String>, start: i64) -> Self {
        Self {
            name: name.into(),
            start,
            step_add: 0,
            step_mul: 1,
            min: i64::MIN,
            max: i64::MAX,
        }
    }

    /// Create a fully specified descriptor.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptyRange`] when `min > max`.
    pub fn try_new(
        name: impl Into<String>,
        start: i64,
        step_add: i64,
        step_mul: i64,
        min: i64,
        max: i64,
    ) -> ConfigResult<Self> {
        Self::new(name, start).with_steps(step_add, step_mul).with_range(min, max)
    }

    /// Set the additive step.
    pub fn with_step(mut self, step_add: i64) -> Self {
        self.step_add = step_add;
        self
    }

    /// Set both the additive and the multiplicative step.
    pub fn with_steps(mut self, step_add: i64, step_mul: i64) -> Self {
        self.step_add = step_add;
        self.step_mul = step_mul;
        self
    }

    /// Restrict the output window.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptyRange`] when `min > max`.
    pub fn with_range(mut self, min: i64, max: i64) -> ConfigResult<Self> {
        if min > max {
            return Err(ConfigError::EmptyRange {
                name: self.name,
                min,
                max,
            });
        }
        self.min = min;
        self.max = max;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn step_add(&self) -> i64 {
        self.step_add
    }

    pub fn step_mul(&self) -> i64 {
        self.step_mul
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// The raw (unfolded) generator sequence.
    pub fn raw_values(&self) -> impl Iterator<Item = i64> + '_ {
        std::iter::successors(Some(self.start), move |val| {
            Some(val.wrapping_mul(self.step_mul).wrapping_add(self.step_add))
        })
    }

    /// The window this descriptor produces for element type `T`.
    ///
    /// ## Errors
    /// - [`ConfigError::DisjointRange`] when the descriptor window lies outside `T`'s range.
    pub fn range_for<T: Element>(&self) -> ConfigResult<(i64, i64)> {
        effective_range::<T>(self.min, self.max).ok_or_else(|| ConfigError::DisjointRange {
            name: self.name.clone(),
            min: self.min,
            max: self.max,
            elem_min: T::LOWEST,
            elem_max: T::HIGHEST,
        })
    }

    /// Fill `buffer` deterministically.
    ///
    /// ## Errors
    /// - [`ConfigError::DisjointRange`] when the descriptor window lies outside `T`'s range.
    pub fn fill<T: Element>(&self, buffer: &mut [T]) -> ConfigResult<()> {
        let (lo, hi) = self.range_for::<T>()?;
        for (slot, raw) in buffer.iter_mut().zip(self.raw_values()) {
            *slot = T::from_folded(fold_into_range(raw, lo, hi));
        }
        Ok(())
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Pattern sets
// ============================================================================

/// An ordered, non-empty, shareable list of descriptors.
///
/// Cloning is cheap; the same set is typically attached to several arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    descriptors: Arc<[Descriptor]>,
}

impl PatternSet {
    /// ## Errors
    /// - [`ConfigError::EmptyPatternSet`] when `descriptors` is empty.
    pub fn new(descriptors: Vec<Descriptor>) -> ConfigResult<Self> {
        if descriptors.is_empty() {
            return Err(ConfigError::EmptyPatternSet);
        }
        Ok(Self {
            descriptors: descriptors.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Descriptor> {
        self.descriptors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.iter()
    }

    /// Check every descriptor against element type `T`.
    pub fn check_for<T: Element>(&self) -> ConfigResult<()> {
        self.descriptors.iter().try_for_each(|d| d.range_for::<T>().map(|_| ()))
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
