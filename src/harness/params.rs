//! Call arguments tagged with their role in a sweep.
//!
//! A [`Param`] is one argument position of the function pair under test:
//!
//! | Role     | Buffers | Initialized           | Compared | Bound as                      |
//! |----------|---------|-----------------------|----------|-------------------------------|
//! | `Value`  | none    | never                 | never    | the value, for both slots     |
//! | `Sweep`  | none    | selected value        | never    | the selected value            |
//! | `Input`  | one     | from a pattern        | never    | the shared buffer, both slots |
//! | `Output` | two     | restored from a seed  | yes      | the slot's own buffer         |
//! | `InOut`  | two     | both from one pattern | yes      | the slot's own buffer         |
//!
//! Every param picks its own element type (buffers) or scalar type (values), so one call can mix `&[i16]`
//! inputs with a `&mut [i32]` output and a `u32` shift. Only the two buffers of one pair share a type.
//!
//! Buffers are owned by the param for the whole run. Every buffer is rewritten before each variant, so nothing a
//! previous variant wrote can leak into the next comparison.

use std::any::Any;
use std::fmt;

use slfet_core::{Buffer, ConfigError, ConfigResult, Element, PatternSet};

use super::args::Bound;

/// Which implementation of the pair a binding is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    pub const BOTH: [Slot; 2] = [Slot::A, Slot::B];

    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// Role classification of a [`Param`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Value,
    Sweep,
    Input,
    Output,
    InOut,
}

impl Role {
    /// Whether the role contributes a digit to the variant counter.
    pub fn is_pattern_bearing(self) -> bool {
        matches!(self, Role::Sweep | Role::Input | Role::InOut)
    }
}

// ============================================================================
// Scalar values
// ============================================================================

/// A plain argument value of any `Copy + Display` type, with its concrete type erased.
pub trait ErasedScalar: fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str;

    /// Text this value contributes to a variant description.
    fn label(&self) -> String;
}

impl<V> ErasedScalar for V
where
    V: Copy + fmt::Debug + fmt::Display + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// Role payloads
// ============================================================================

/// A list of literal values swept as one digit of the variant counter.
#[derive(Debug)]
pub struct ValueSweep {
    values: Vec<Box<dyn ErasedScalar>>,
    current: usize,
}

/// A read-only buffer shared by both implementations.
#[derive(Debug, Clone)]
pub struct Input {
    buffer: Buffer,
    patterns: PatternSet,
}

/// A pair of write-only buffers, one per implementation.
#[derive(Debug, Clone)]
pub struct Output {
    seed: Buffer,
    buffers: [Buffer; 2],
}

/// A pair of read-write buffers, both initialized from the same descriptor.
#[derive(Debug, Clone)]
pub struct InOut {
    buffers: [Buffer; 2],
    patterns: PatternSet,
}

/// One argument of the function pair under test.
#[derive(Debug)]
pub enum Param {
    /// Passed unchanged to both implementations (an element count, a shift, a scale).
    Value(Box<dyn ErasedScalar>),
    Sweep(ValueSweep),
    Input(Input),
    Output(Output),
    InOut(InOut),
}

impl Param {
    /// An element count or other `usize` argument.
    pub fn value(value: usize) -> Self {
        Self::scalar(value)
    }

    /// A plain argument of any scalar type; the implementation reads it back with the same type.
    pub fn scalar<V>(value: V) -> Self
    where
        V: Copy + fmt::Debug + fmt::Display + 'static,
    {
        Param::Value(Box::new(value))
    }

    /// Sweep a `usize` argument (typically the element count) over `values`.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptySweep`] when `values` is empty.
    pub fn sweep(values: impl Into<Vec<usize>>) -> ConfigResult<Self> {
        Self::scalar_sweep(values.into())
    }

    /// Sweep a scalar argument of any type over `values`.
    ///
    /// ## Errors
    /// - [`ConfigError::EmptySweep`] when `values` is empty.
    pub fn scalar_sweep<V>(values: impl IntoIterator<Item = V>) -> ConfigResult<Self>
    where
        V: Copy + fmt::Debug + fmt::Display + 'static,
    {
        let values: Vec<Box<dyn ErasedScalar>> = values
            .into_iter()
            .map(|v| Box::new(v) as Box<dyn ErasedScalar>)
            .collect();
        if values.is_empty() {
            return Err(ConfigError::EmptySweep);
        }
        Ok(Param::Sweep(ValueSweep { values, current: 0 }))
    }

    /// A zero-filled input buffer of `len` elements of type `T`.
    ///
    /// ## Errors
    /// - [`ConfigError::DisjointRange`] when a descriptor cannot produce values of type `T`.
    pub fn input<T: Element>(len: usize, patterns: PatternSet) -> ConfigResult<Self> {
        Self::input_from(vec![T::default(); len], patterns)
    }

    /// ## Errors
    /// - [`ConfigError::DisjointRange`] when a descriptor cannot produce values of type `T`.
    pub fn input_from<T: Element>(buffer: Vec<T>, patterns: PatternSet) -> ConfigResult<Self> {
        patterns.check_for::<T>()?;
        Ok(Param::Input(Input {
            buffer: Buffer::from_vec(buffer),
            patterns,
        }))
    }

    /// An output pair of `len` elements each, zeroed before every variant.
    pub fn output<T: Element>(len: usize) -> Self {
        Self::output_filled(len, T::default())
    }

    /// An output pair of `len` elements each, set to `fill` before every variant.
    ///
    /// A fill value the implementations never produce makes skipped writes visible.
    pub fn output_filled<T: Element>(len: usize, fill: T) -> Self {
        let seed = Buffer::from_vec(vec![fill; len]);
        Param::Output(Output {
            buffers: [seed.clone(), seed.clone()],
            seed,
        })
    }

    /// A zero-filled in/out pair of `len` elements each.
    ///
    /// ## Errors
    /// - [`ConfigError::DisjointRange`] when a descriptor cannot produce values of type `T`.
    pub fn inout<T: Element>(len: usize, patterns: PatternSet) -> ConfigResult<Self> {
        Self::inout_from(vec![T::default(); len], vec![T::default(); len], patterns)
    }

    /// ## Errors
    /// - [`ConfigError::LengthMismatch`] when `a` and `b` differ in length.
    /// - [`ConfigError::DisjointRange`] when a descriptor cannot produce values of type `T`.
    pub fn inout_from<T: Element>(a: Vec<T>, b: Vec<T>, patterns: PatternSet) -> ConfigResult<Self> {
        if a.len() != b.len() {
            return Err(ConfigError::LengthMismatch {
                left: a.len(),
                right: b.len(),
            });
        }
        patterns.check_for::<T>()?;
        Ok(Param::InOut(InOut {
            buffers: [Buffer::from_vec(a), Buffer::from_vec(b)],
            patterns,
        }))
    }

    pub fn role(&self) -> Role {
        match self {
            Param::Value(_) => Role::Value,
            Param::Sweep(_) => Role::Sweep,
            Param::Input(_) => Role::Input,
            Param::Output(_) => Role::Output,
            Param::InOut(_) => Role::InOut,
        }
    }

    /// Radix of this param's digit: the number of choices, `1` for roles that do not vary.
    pub fn choice_count(&self) -> usize {
        match self {
            Param::Sweep(sweep) => sweep.values.len(),
            Param::Input(input) => input.patterns.len(),
            Param::InOut(inout) => inout.patterns.len(),
            Param::Value(_) | Param::Output(_) => 1,
        }
    }

    /// Restore output pairs to their seed. Other roles are untouched.
    pub fn reset(&mut self) {
        if let Param::Output(Output { seed, buffers }) = self {
            for buffer in buffers {
                buffer.clone_from(seed);
            }
        }
    }

    /// Apply choice `choice` and return the name it contributes to the variant description.
    ///
    /// In/out pairs receive the identical descriptor, so any divergence after the calls comes from the
    /// implementations alone. Roles without choices return an empty name.
    ///
    /// ## Errors
    /// - [`ConfigError::ChoiceOutOfRange`] when `choice >= self.choice_count()`.
    /// - [`ConfigError::DisjointRange`] from the descriptor fill.
    pub fn initialize(&mut self, choice: usize) -> ConfigResult<String> {
        let count = self.choice_count();
        let out_of_range = ConfigError::ChoiceOutOfRange { choice, count };
        match self {
            Param::Sweep(sweep) => {
                let value = sweep.values.get(choice).ok_or(out_of_range)?;
                sweep.current = choice;
                Ok(value.label())
            }
            Param::Input(input) => {
                let desc = input.patterns.get(choice).ok_or(out_of_range)?;
                input.buffer.fill(desc)?;
                Ok(desc.name().to_string())
            }
            Param::InOut(inout) => {
                let desc = inout.patterns.get(choice).ok_or(out_of_range)?;
                for buffer in &mut inout.buffers {
                    buffer.fill(desc)?;
                }
                Ok(desc.name().to_string())
            }
            Param::Value(_) | Param::Output(_) if choice == 0 => Ok(String::new()),
            Param::Value(_) | Param::Output(_) => Err(out_of_range),
        }
    }

    /// Resolve the argument handed to the implementation in `slot`.
    pub fn bind(&mut self, slot: Slot) -> Bound<'_> {
        match self {
            Param::Value(value) => Bound::Value(&**value),
            Param::Sweep(sweep) => Bound::Value(&*sweep.values[sweep.current]),
            Param::Input(input) => Bound::Shared(&input.buffer),
            Param::Output(Output { buffers, .. }) | Param::InOut(InOut { buffers, .. }) => {
                Bound::Exclusive(&mut buffers[slot.index()])
            }
        }
    }

    /// The two buffers to compare after both calls, for output and in/out roles.
    pub fn compared(&self) -> Option<(&Buffer, &Buffer)> {
        match self {
            Param::Output(Output { buffers, .. }) | Param::InOut(InOut { buffers, .. }) => {
                Some((&buffers[0], &buffers[1]))
            }
            _ => None,
        }
    }

    /// The `T` buffer `slot` sees, as left by the last call.
    pub fn buffer<T: Element>(&self, slot: Slot) -> Option<&[T]> {
        match self {
            Param::Input(input) => input.buffer.as_slice(),
            Param::Output(Output { buffers, .. }) | Param::InOut(InOut { buffers, .. }) => {
                buffers[slot.index()].as_slice()
            }
            Param::Value(_) | Param::Sweep(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slfet_core::Descriptor;

    fn patterns() -> PatternSet {
        PatternSet::new(vec![Descriptor::new("zero", 0), Descriptor::new("inc", 1).with_step(1)]).unwrap()
    }

    fn write(param: &mut Param, slot: Slot, index: usize, value: i16) {
        match param.bind(slot) {
            Bound::Exclusive(buf) => buf.as_mut_slice::<i16>().unwrap()[index] = value,
            other => panic!("expected exclusive buffer, got {}", other.kind()),
        }
    }

    #[test]
    fn test_roles() {
        assert_eq!(Param::value(3).role(), Role::Value);
        assert_eq!(Param::output::<i16>(4).role(), Role::Output);
        assert!(Role::InOut.is_pattern_bearing());
        assert!(Role::Sweep.is_pattern_bearing());
        assert!(!Role::Output.is_pattern_bearing());
        assert!(!Role::Value.is_pattern_bearing());
    }

    #[test]
    fn test_choice_counts() {
        assert_eq!(Param::input::<i16>(4, patterns()).unwrap().choice_count(), 2);
        assert_eq!(Param::sweep([1, 2, 3]).unwrap().choice_count(), 3);
        assert_eq!(Param::output::<i16>(4).choice_count(), 1);
        assert_eq!(Param::value(4).choice_count(), 1);
    }

    #[test]
    fn test_inout_pair_length_mismatch() {
        let err = Param::inout_from::<u8>(vec![0; 2], vec![0; 1], patterns()).unwrap_err();
        assert_eq!(err, ConfigError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn test_empty_sweep_rejected() {
        assert!(matches!(Param::sweep(Vec::new()), Err(ConfigError::EmptySweep)));
        assert!(matches!(Param::scalar_sweep(Vec::<i32>::new()), Err(ConfigError::EmptySweep)));
    }

    #[test]
    fn test_out_of_range_choice() {
        let mut input = Param::input::<i16>(2, patterns()).unwrap();
        assert!(matches!(
            input.initialize(2),
            Err(ConfigError::ChoiceOutOfRange { choice: 2, count: 2 })
        ));
        let mut sweep = Param::sweep([4]).unwrap();
        assert!(matches!(
            sweep.initialize(1),
            Err(ConfigError::ChoiceOutOfRange { choice: 1, count: 1 })
        ));
    }

    #[test]
    fn test_input_rejects_disjoint_descriptor() {
        let set = PatternSet::new(vec![Descriptor::new("neg", -5).with_range(-10, -1).unwrap()]).unwrap();
        assert!(matches!(Param::input::<u8>(4, set), Err(ConfigError::DisjointRange { .. })));
    }

    #[test]
    fn test_inout_initializes_both_buffers_identically() {
        let mut param = Param::inout::<i32>(3, patterns()).unwrap();
        assert_eq!(param.initialize(1).unwrap(), "inc");
        assert_eq!(param.buffer::<i32>(Slot::A), Some(&[1, 2, 3][..]));
        assert_eq!(param.buffer::<i32>(Slot::B), Some(&[1, 2, 3][..]));
        assert_eq!(param.buffer::<i16>(Slot::A), None);
    }

    #[test]
    fn test_sweep_binds_selected_value() {
        let mut param = Param::scalar_sweep([5u32, 9]).unwrap();
        assert_eq!(param.initialize(1).unwrap(), "9");
        for slot in Slot::BOTH {
            match param.bind(slot) {
                Bound::Value(value) => assert_eq!(value.as_any().downcast_ref::<u32>(), Some(&9)),
                other => panic!("expected value, got {}", other.kind()),
            }
        }
    }

    #[test]
    fn test_output_binds_distinct_buffers() {
        let mut param = Param::output::<i16>(2);
        write(&mut param, Slot::A, 0, 7);
        write(&mut param, Slot::B, 0, 8);
        assert_eq!(param.buffer::<i16>(Slot::A), Some(&[7, 0][..]));
        assert_eq!(param.buffer::<i16>(Slot::B), Some(&[8, 0][..]));
    }

    #[test]
    fn test_reset_restores_seed_in_both_buffers() {
        let mut param = Param::output_filled::<i16>(3, -1);
        write(&mut param, Slot::A, 1, 5);
        write(&mut param, Slot::B, 2, 6);
        param.reset();
        let (a, b) = param.compared().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice::<i16>(), Some(&[-1, -1, -1][..]));
    }

    #[test]
    fn test_input_binds_same_buffer_for_both_slots() {
        let mut param = Param::input::<i16>(2, patterns()).unwrap();
        param.initialize(1).unwrap();
        for slot in Slot::BOTH {
            match param.bind(slot) {
                Bound::Shared(buf) => assert_eq!(buf.as_slice::<i16>(), Some(&[1, 2][..])),
                other => panic!("expected shared buffer, got {}", other.kind()),
            }
        }
    }

    #[test]
    fn test_value_binds_itself() {
        let mut param = Param::value(21);
        assert_eq!(param.initialize(0).unwrap(), "");
        match param.bind(Slot::B) {
            Bound::Value(value) => {
                assert_eq!(value.type_name(), "usize");
                assert_eq!(value.label(), "21");
            }
            other => panic!("expected value, got {}", other.kind()),
        }
    }
}
