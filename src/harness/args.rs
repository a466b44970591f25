//! Bound argument frames handed to one implementation call.

use slfet_core::{Buffer, Element};

use super::params::{ErasedScalar, Param, Slot};
use super::{HarnessError, HarnessResult};

/// One argument resolved for a specific slot.
#[derive(Debug)]
pub enum Bound<'a> {
    Value(&'a dyn ErasedScalar),
    /// The same buffer for both slots.
    Shared(&'a Buffer),
    /// The slot's own buffer.
    Exclusive(&'a mut Buffer),
}

impl Bound<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Bound::Value(_) => "value",
            Bound::Shared(_) => "shared buffer",
            Bound::Exclusive(_) => "exclusive buffer",
        }
    }
}

/// The arguments of one call, consumed front to back in declaration order.
///
/// Each accessor hands out a reference for the whole frame lifetime, so an implementation can hold its inputs and
/// outputs at the same time. The caller names the element or scalar type it expects; asking for the wrong one is a
/// [`HarnessError::TypeMismatch`].
#[derive(Debug)]
pub struct Args<'a> {
    bound: std::vec::IntoIter<Bound<'a>>,
    position: usize,
}

impl<'a> Args<'a> {
    /// Bind every param for `slot`.
    pub fn bind(params: &'a mut [Param], slot: Slot) -> Self {
        let bound: Vec<Bound<'a>> = params.iter_mut().map(|p| p.bind(slot)).collect();
        Self {
            bound: bound.into_iter(),
            position: 0,
        }
    }

    fn next_bound(&mut self, expected: &'static str) -> HarnessResult<(usize, Bound<'a>)> {
        let position = self.position;
        let bound = self
            .bound
            .next()
            .ok_or(HarnessError::MissingArgument { position, expected })?;
        self.position += 1;
        Ok((position, bound))
    }

    /// Take the next argument as a read-only `T` buffer.
    ///
    /// Exclusive buffers are accepted too and handed out read-only.
    pub fn input<T: Element>(&mut self) -> HarnessResult<&'a [T]> {
        let (position, buffer) = match self.next_bound("buffer")? {
            (position, Bound::Shared(buffer)) => (position, buffer),
            (position, Bound::Exclusive(buffer)) => (position, &*buffer),
            (position, other) => {
                return Err(HarnessError::RoleMismatch {
                    position,
                    expected: "buffer",
                    found: other.kind(),
                });
            }
        };
        buffer.as_slice().ok_or(HarnessError::TypeMismatch {
            position,
            expected: T::NAME,
            found: buffer.element_name(),
        })
    }

    /// Take the next argument as a writable `T` buffer.
    pub fn output<T: Element>(&mut self) -> HarnessResult<&'a mut [T]> {
        match self.next_bound("exclusive buffer")? {
            (position, Bound::Exclusive(buffer)) => {
                let found = buffer.element_name();
                T::view_mut(buffer).ok_or(HarnessError::TypeMismatch {
                    position,
                    expected: T::NAME,
                    found,
                })
            }
            (position, other) => Err(HarnessError::RoleMismatch {
                position,
                expected: "exclusive buffer",
                found: other.kind(),
            }),
        }
    }

    /// Take the next argument as a plain value of type `V`.
    pub fn value<V: Copy + 'static>(&mut self) -> HarnessResult<V> {
        match self.next_bound("value")? {
            (position, Bound::Value(value)) => {
                value
                    .as_any()
                    .downcast_ref::<V>()
                    .copied()
                    .ok_or(HarnessError::TypeMismatch {
                        position,
                        expected: std::any::type_name::<V>(),
                        found: value.type_name(),
                    })
            }
            (position, other) => Err(HarnessError::RoleMismatch {
                position,
                expected: "value",
                found: other.kind(),
            }),
        }
    }

    /// Number of arguments not yet taken.
    pub fn remaining(&self) -> usize {
        self.bound.len()
    }

    /// Check that every argument was taken.
    pub fn finish(self) -> HarnessResult<()> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(HarnessError::UnusedArguments { count }),
        }
    }
}
