//! Recovery adapters: a declared error is replaced by a fallback outcome.

use std::fmt;

use crate::callable::{PlainFn, ThrowingFn};
use crate::error::{Fault, UncheckedError};
use crate::observability;

/// Adapter returned by `ThrowingFnExt::recover_with`.
#[derive(Clone)]
pub struct RecoverWith<W, R> {
    inner: W,
    fallback: R,
}

impl<W, R> RecoverWith<W, R> {
    pub(crate) const fn new(inner: W, fallback: R) -> Self {
        Self { inner, fallback }
    }
}

impl<Args, W, R> ThrowingFn<Args> for RecoverWith<W, R>
where
    Args: Clone,
    W: ThrowingFn<Args>,
    R: ThrowingFn<Args, Output = W::Output>,
{
    type Output = W::Output;
    type Error = R::Error;

    fn invoke(&self, args: Args) -> Result<W::Output, Fault<R::Error>> {
        match self.inner.invoke(args.clone()) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(_)) => {
                observability::intercepted("recover_with");
                self.fallback.invoke(args)
            }
            Err(Fault::Unchecked(err)) => Err(Fault::Unchecked(observability::passed_through(
                "recover_with",
                err,
            ))),
        }
    }
}

/// Adapter returned by `ThrowingFnExt::on_error_return`.
#[derive(Clone)]
pub struct OnErrorReturn<W, T> {
    inner: W,
    value: T,
}

impl<W, T> OnErrorReturn<W, T> {
    pub(crate) const fn new(inner: W, value: T) -> Self {
        Self { inner, value }
    }
}

impl<Args, W, T> PlainFn<Args> for OnErrorReturn<W, T>
where
    W: ThrowingFn<Args, Output = T>,
    T: Clone,
{
    type Output = T;

    fn run(&self, args: Args) -> Result<T, UncheckedError> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(_)) => {
                observability::intercepted("on_error_return");
                Ok(self.value.clone())
            }
            Err(Fault::Unchecked(err)) => {
                Err(observability::passed_through("on_error_return", err))
            }
        }
    }
}

/// Adapter returned by `ThrowingFnExt::on_error_discard`.
#[derive(Clone)]
pub struct OnErrorDiscard<W> {
    inner: W,
}

impl<W> OnErrorDiscard<W> {
    pub(crate) const fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<Args, W> PlainFn<Args> for OnErrorDiscard<W>
where
    W: ThrowingFn<Args, Output = ()>,
{
    type Output = ();

    fn run(&self, args: Args) -> Result<(), UncheckedError> {
        match self.inner.invoke(args) {
            Ok(()) => Ok(()),
            Err(Fault::Checked(_)) => {
                observability::intercepted("on_error_discard");
                Ok(())
            }
            Err(Fault::Unchecked(err)) => {
                Err(observability::passed_through("on_error_discard", err))
            }
        }
    }
}

/// Adapter returned by `ThrowingFnExt::lift`.
#[derive(Clone)]
pub struct Lift<W> {
    inner: W,
}

impl<W> Lift<W> {
    pub(crate) const fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<Args, W> PlainFn<Args> for Lift<W>
where
    W: ThrowingFn<Args>,
{
    type Output = Option<W::Output>;

    fn run(&self, args: Args) -> Result<Option<W::Output>, UncheckedError> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(Some(value)),
            Err(Fault::Checked(_)) => {
                observability::intercepted("lift");
                Ok(None)
            }
            Err(Fault::Unchecked(err)) => Err(observability::passed_through("lift", err)),
        }
    }
}

impl<W: fmt::Debug, R: fmt::Debug> fmt::Debug for RecoverWith<W, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecoverWith")
            .field("inner", &self.inner)
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl<W: fmt::Debug, T: fmt::Debug> fmt::Debug for OnErrorReturn<W, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnErrorReturn")
            .field("inner", &self.inner)
            .field("value", &self.value)
            .finish()
    }
}

impl<W: fmt::Debug> fmt::Debug for OnErrorDiscard<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnErrorDiscard")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<W: fmt::Debug> fmt::Debug for Lift<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lift").field("inner", &self.inner).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ThrowingFnExt;
    use std::cell::Cell;
    use std::io;
    use std::num::ParseIntError;

    fn parse(s: &str) -> Result<i32, Fault<ParseIntError>> {
        Ok(s.parse::<i32>()?)
    }

    #[test]
    fn test_recover_with_reuses_arguments() {
        let fallback = |s: &str| -> Result<i32, Fault<io::Error>> { Ok(s.len() as i32) };
        let recovered = parse.recover_with(fallback);

        assert_eq!(recovered.invoke(("12",)).unwrap(), 12);
        assert_eq!(recovered.invoke(("abc",)).unwrap(), 3);
    }

    #[test]
    fn test_recover_with_propagates_fallback_failure() {
        let fallback = |_: &str| -> Result<i32, Fault<io::Error>> {
            Err(io::Error::other("fallback down").into())
        };
        let err = parse.recover_with(fallback).invoke(("x",)).unwrap_err();
        assert_eq!(err.into_checked().unwrap().to_string(), "fallback down");
    }

    #[test]
    fn test_recover_with_skips_fallback_on_success() {
        let calls = Cell::new(0);
        let fallback = |_: &str| -> Result<i32, Fault<ParseIntError>> {
            calls.set(calls.get() + 1);
            Ok(0)
        };
        assert_eq!(parse.recover_with(fallback).invoke(("5",)).unwrap(), 5);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_on_error_return_and_lift() {
        assert_eq!(parse.on_error_return(-1).run(("x",)).unwrap(), -1);
        assert_eq!(parse.on_error_return(-1).run(("8",)).unwrap(), 8);
        assert_eq!(parse.lift().run(("x",)).unwrap(), None);
        assert_eq!(parse.lift().run(("8",)).unwrap(), Some(8));
    }

    #[test]
    fn test_on_error_discard_swallows_checked_only() {
        let writes = Cell::new(0);
        let write = |n: i32| -> Result<(), Fault<io::Error>> {
            writes.set(writes.get() + 1);
            if n < 0 {
                Err(io::Error::other("negative").into())
            } else {
                Ok(())
            }
        };
        let quiet = write.on_error_discard();
        quiet.run((1,)).unwrap();
        quiet.run((-1,)).unwrap();
        assert_eq!(writes.get(), 2);

        let bug = |_: i32| -> Result<(), Fault<io::Error>> {
            Err(Fault::unchecked(UncheckedError::msg("bug")))
        };
        assert_eq!(bug.on_error_discard().run((1,)).unwrap_err().to_string(), "bug");
    }
}
