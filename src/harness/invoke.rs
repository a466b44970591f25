//! Function signature shapes the engine can call.
//!
//! Plain function pointers with the common kernel shapes implement [`Invoke`] directly; cast a function item to its
//! signature type (`add_vec_scalar as AddVecFn`) to use it. Each buffer argument may have its own element type, so
//! a widening `fn(&[i16], &[i16], &mut [i32], usize)` is as callable as a same-typed one. Anything else goes through
//! [`returning`] or [`no_return`], which hand the closure the argument frame to unpack itself.

use std::fmt;

use slfet_core::Element;

use super::HarnessResult;
use super::args::Args;

/// Something the engine can call with one bound argument frame.
pub trait Invoke {
    type Output: PartialEq + fmt::Debug;

    /// `false` when the signature declares no return value; the engine then skips the return assertion.
    const RETURNS_VALUE: bool;

    fn invoke(&mut self, args: Args<'_>) -> HarnessResult<Self::Output>;
}

// --- Reductions: fn(&[A], usize) -> R ----------------------------------------------------------

impl<A: Element, R: PartialEq + fmt::Debug> Invoke for fn(&[A], usize) -> R {
    type Output = R;
    const RETURNS_VALUE: bool = true;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<R> {
        let a: &[A] = args.input()?;
        let n: usize = args.value()?;
        args.finish()?;
        Ok((*self)(a, n))
    }
}

impl<A: Element, B: Element, R: PartialEq + fmt::Debug> Invoke for fn(&[A], &[B], usize) -> R {
    type Output = R;
    const RETURNS_VALUE: bool = true;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<R> {
        let a: &[A] = args.input()?;
        let b: &[B] = args.input()?;
        let n: usize = args.value()?;
        args.finish()?;
        Ok((*self)(a, b, n))
    }
}

// --- Element-wise maps with no return value ----------------------------------------------------

impl<A: Element, C: Element> Invoke for fn(&[A], &mut [C], usize) {
    type Output = ();
    const RETURNS_VALUE: bool = false;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<()> {
        let a: &[A] = args.input()?;
        let out: &mut [C] = args.output()?;
        let n: usize = args.value()?;
        args.finish()?;
        (*self)(a, out, n);
        Ok(())
    }
}

impl<A: Element, B: Element, C: Element> Invoke for fn(&[A], &[B], &mut [C], usize) {
    type Output = ();
    const RETURNS_VALUE: bool = false;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<()> {
        let a: &[A] = args.input()?;
        let b: &[B] = args.input()?;
        let out: &mut [C] = args.output()?;
        let n: usize = args.value()?;
        args.finish()?;
        (*self)(a, b, out, n);
        Ok(())
    }
}

impl<A: Element> Invoke for fn(&mut [A], usize) {
    type Output = ();
    const RETURNS_VALUE: bool = false;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<()> {
        let inout: &mut [A] = args.output()?;
        let n: usize = args.value()?;
        args.finish()?;
        (*self)(inout, n);
        Ok(())
    }
}

// --- Closures ----------------------------------------------------------------------------------

/// A closure whose result is compared under the `return` label.
pub struct Returning<F>(F);

/// A closure with no return value.
pub struct NoReturn<F>(F);

/// Wrap a closure that unpacks its own arguments and returns a value.
///
/// ## Examples
/// ```rust
/// use slfet::harness::{Args, returning};
///
/// let sum = returning(|args: &mut Args<'_>| {
///     let a = args.input::<i16>()?;
///     let n = args.value::<usize>()?;
///     Ok(a[..n].iter().map(|&x| i32::from(x)).sum::<i32>())
/// });
/// # let _ = sum;
/// ```
pub fn returning<R, F>(f: F) -> Returning<F>
where
    F: FnMut(&mut Args<'_>) -> HarnessResult<R>,
{
    Returning(f)
}

/// Wrap a closure that unpacks its own arguments and returns nothing.
pub fn no_return<F>(f: F) -> NoReturn<F>
where
    F: FnMut(&mut Args<'_>) -> HarnessResult<()>,
{
    NoReturn(f)
}

impl<R, F> Invoke for Returning<F>
where
    R: PartialEq + fmt::Debug,
    F: FnMut(&mut Args<'_>) -> HarnessResult<R>,
{
    type Output = R;
    const RETURNS_VALUE: bool = true;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<R> {
        let out = (self.0)(&mut args)?;
        args.finish()?;
        Ok(out)
    }
}

impl<F> Invoke for NoReturn<F>
where
    F: FnMut(&mut Args<'_>) -> HarnessResult<()>,
{
    type Output = ();
    const RETURNS_VALUE: bool = false;

    fn invoke(&mut self, mut args: Args<'_>) -> HarnessResult<()> {
        (self.0)(&mut args)?;
        args.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{HarnessError, Param, Slot};
    use slfet_core::{Descriptor, PatternSet};

    fn sum(a: &[i16], n: usize) -> i64 {
        a[..n].iter().map(|&x| i64::from(x)).sum()
    }

    fn negate(buf: &mut [i16], n: usize) {
        for x in &mut buf[..n] {
            *x = x.wrapping_neg();
        }
    }

    fn widen(a: &[u8], out: &mut [u32], n: usize) {
        for (o, &x) in out[..n].iter_mut().zip(a) {
            *o = u32::from(x) << 8;
        }
    }

    fn inc_set() -> PatternSet {
        PatternSet::new(vec![Descriptor::new("inc", 1).with_step(1)]).unwrap()
    }

    #[test]
    fn test_reduction_pointer() {
        let mut params = vec![Param::input::<i16>(4, inc_set()).unwrap(), Param::value(4)];
        params[0].initialize(0).unwrap();
        let mut f = sum as fn(&[i16], usize) -> i64;
        assert_eq!(f.invoke(Args::bind(&mut params, Slot::A)).unwrap(), 10);
        assert!(<fn(&[i16], usize) -> i64 as Invoke>::RETURNS_VALUE);
    }

    #[test]
    fn test_in_place_pointer() {
        let mut params = vec![Param::inout::<i16>(3, inc_set()).unwrap(), Param::value(3)];
        params[0].initialize(0).unwrap();
        let mut f = negate as fn(&mut [i16], usize);
        f.invoke(Args::bind(&mut params, Slot::B)).unwrap();
        assert_eq!(params[0].buffer::<i16>(Slot::B), Some(&[-1, -2, -3][..]));
        assert_eq!(params[0].buffer::<i16>(Slot::A), Some(&[1, 2, 3][..]));
        assert!(!<fn(&mut [i16], usize) as Invoke>::RETURNS_VALUE);
    }

    #[test]
    fn test_mixed_element_pointer() {
        let mut params = vec![
            Param::input::<u8>(3, inc_set()).unwrap(),
            Param::output::<u32>(3),
            Param::value(3),
        ];
        params[0].initialize(0).unwrap();
        let mut f = widen as fn(&[u8], &mut [u32], usize);
        f.invoke(Args::bind(&mut params, Slot::A)).unwrap();
        assert_eq!(params[1].buffer::<u32>(Slot::A), Some(&[256, 512, 768][..]));
    }

    #[test]
    fn test_pointer_with_wrong_element_type_is_rejected() {
        let mut params = vec![Param::input::<i32>(4, inc_set()).unwrap(), Param::value(4)];
        let mut f = sum as fn(&[i16], usize) -> i64;
        let err = f.invoke(Args::bind(&mut params, Slot::A)).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::TypeMismatch {
                position: 0,
                expected: "i16",
                found: "i32"
            }
        ));
    }

    #[test]
    fn test_pointer_with_wrong_arity_is_rejected() {
        let mut params = vec![
            Param::input::<i16>(4, inc_set()).unwrap(),
            Param::value(4),
            Param::value(1),
        ];
        let mut f = sum as fn(&[i16], usize) -> i64;
        let err = f.invoke(Args::bind(&mut params, Slot::A)).unwrap_err();
        assert!(matches!(err, HarnessError::UnusedArguments { count: 1 }));
    }

    #[test]
    fn test_returning_closure() {
        let mut params = vec![Param::input::<i16>(2, inc_set()).unwrap(), Param::value(2)];
        params[0].initialize(0).unwrap();
        let mut f = returning(|args: &mut Args<'_>| {
            let a = args.input::<i16>()?;
            let n = args.value::<usize>()?;
            Ok(a[..n].to_vec())
        });
        assert_eq!(f.invoke(Args::bind(&mut params, Slot::A)).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_no_return_closure_must_consume_all() {
        let mut params = vec![Param::value(2), Param::value(3)];
        let mut f = no_return(|args: &mut Args<'_>| {
            args.value::<usize>()?;
            Ok(())
        });
        let err = f.invoke(Args::bind(&mut params, Slot::A)).unwrap_err();
        assert!(matches!(err, HarnessError::UnusedArguments { count: 1 }));
    }
}
