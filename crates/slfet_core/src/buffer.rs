//! Owned element buffers whose element type is picked per argument.
//!
//! A [`Buffer`] holds a `Vec` of one [`Element`] type. Typed access goes through [`Buffer::as_slice`] and
//! [`Buffer::as_mut_slice`], which return `None` when the caller asks for the wrong type. Code that must act on
//! two buffers of the same type without naming it uses a [`PairVisitor`].

use crate::errors::ConfigResult;
use crate::init::{Descriptor, Element, PatternSet};

/// A buffer of `i8` through `u64` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Buffer {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
    U64(Vec<u64>),
}

/// Bind `$values` to the inner `Vec` of whichever variant `$buffer` is and evaluate `$body`.
macro_rules! with_values {
    ($buffer:expr, $values:ident => $body:expr) => {
        match $buffer {
            Buffer::I8($values) => $body,
            Buffer::I16($values) => $body,
            Buffer::I32($values) => $body,
            Buffer::I64($values) => $body,
            Buffer::U8($values) => $body,
            Buffer::U16($values) => $body,
            Buffer::U32($values) => $body,
            Buffer::U64($values) => $body,
        }
    };
}

/// Something done to two same-typed slices.
pub trait PairVisitor {
    type Output;

    fn visit<T: Element>(self, a: &[T], b: &[T]) -> Self::Output;
}

fn element_name<T: Element>(_: &[T]) -> &'static str {
    T::NAME
}

fn check_patterns<T: Element>(_: &[T], patterns: &PatternSet) -> ConfigResult<()> {
    patterns.check_for::<T>()
}

impl Buffer {
    /// `len` default-valued elements of type `T`.
    pub fn zeroed<T: Element>(len: usize) -> Self {
        T::into_buffer(vec![T::default(); len])
    }

    pub fn from_vec<T: Element>(values: Vec<T>) -> Self {
        T::into_buffer(values)
    }

    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type name, e.g. `"i16"`.
    pub fn element_name(&self) -> &'static str {
        with_values!(self, values => element_name(values))
    }

    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::view(self)
    }

    pub fn as_mut_slice<T: Element>(&mut self) -> Option<&mut [T]> {
        T::view_mut(self)
    }

    /// Overwrite every element from `descriptor`.
    ///
    /// ## Errors
    /// - [`ConfigError::DisjointRange`](crate::ConfigError::DisjointRange) when the descriptor cannot produce
    ///   this buffer's element type.
    pub fn fill(&mut self, descriptor: &Descriptor) -> ConfigResult<()> {
        with_values!(self, values => descriptor.fill(values.as_mut_slice()))
    }

    /// Check that every descriptor of `patterns` can fill this buffer.
    pub fn check_patterns(&self, patterns: &PatternSet) -> ConfigResult<()> {
        with_values!(self, values => check_patterns(values, patterns))
    }

    /// Visit `a` and `b` as typed slices.
    ///
    /// ## Returns
    /// - `None` when the two buffers hold different element types.
    pub fn visit_pair<V: PairVisitor>(a: &Buffer, b: &Buffer, visitor: V) -> Option<V::Output> {
        let output = match (a, b) {
            (Buffer::I8(a), Buffer::I8(b)) => visitor.visit(a, b),
            (Buffer::I16(a), Buffer::I16(b)) => visitor.visit(a, b),
            (Buffer::I32(a), Buffer::I32(b)) => visitor.visit(a, b),
            (Buffer::I64(a), Buffer::I64(b)) => visitor.visit(a, b),
            (Buffer::U8(a), Buffer::U8(b)) => visitor.visit(a, b),
            (Buffer::U16(a), Buffer::U16(b)) => visitor.visit(a, b),
            (Buffer::U32(a), Buffer::U32(b)) => visitor.visit(a, b),
            (Buffer::U64(a), Buffer::U64(b)) => visitor.visit(a, b),
            _ => return None,
        };
        Some(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfigError;

    struct FirstDiff;

    impl PairVisitor for FirstDiff {
        type Output = Option<usize>;

        fn visit<T: Element>(self, a: &[T], b: &[T]) -> Option<usize> {
            a.iter().zip(b).position(|(x, y)| x != y)
        }
    }

    #[test]
    fn test_typed_views() {
        let mut buf = Buffer::zeroed::<i16>(3);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.element_name(), "i16");
        assert!(buf.as_slice::<i32>().is_none());
        buf.as_mut_slice::<i16>().unwrap()[1] = 7;
        assert_eq!(buf.as_slice::<i16>(), Some(&[0, 7, 0][..]));
    }

    #[test]
    fn test_fill_uses_element_range() {
        let mut buf = Buffer::zeroed::<u8>(3);
        buf.fill(&Descriptor::new("inc", 254).with_step(1)).unwrap();
        assert_eq!(buf, Buffer::U8(vec![254, 255, 0]));
    }

    #[test]
    fn test_check_patterns_per_element_type() {
        let negative = PatternSet::new(vec![Descriptor::new("neg", -5).with_range(-5, -1).unwrap()]).unwrap();
        assert!(Buffer::zeroed::<i8>(1).check_patterns(&negative).is_ok());
        assert!(matches!(
            Buffer::zeroed::<u32>(1).check_patterns(&negative),
            Err(ConfigError::DisjointRange { .. })
        ));
    }

    #[test]
    fn test_visit_pair_requires_same_type() {
        let a = Buffer::from_vec(vec![1i32, 2, 3]);
        let b = Buffer::from_vec(vec![1i32, 5, 3]);
        assert_eq!(Buffer::visit_pair(&a, &b, FirstDiff), Some(Some(1)));
        assert_eq!(Buffer::visit_pair(&a, &Buffer::zeroed::<i64>(3), FirstDiff), None);
    }
}
