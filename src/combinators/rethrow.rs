//! Rethrowing adapters: replace a declared error with another one.

use std::error::Error;
use std::fmt;

use crate::callable::{PlainFn, ThrowingFn};
use crate::error::{Fault, UncheckedError};
use crate::observability;

/// Adapter returned by `ThrowingFnExt::rethrow_as_checked`.
#[derive(Clone)]
pub struct RethrowAsChecked<W, M> {
    inner: W,
    mapper: M,
}

impl<W, M> RethrowAsChecked<W, M> {
    pub(crate) const fn new(inner: W, mapper: M) -> Self {
        Self { inner, mapper }
    }
}

impl<Args, W, M, E2> ThrowingFn<Args> for RethrowAsChecked<W, M>
where
    W: ThrowingFn<Args>,
    M: Fn(W::Error) -> E2,
{
    type Output = W::Output;
    type Error = E2;

    fn invoke(&self, args: Args) -> Result<W::Output, Fault<E2>> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(err)) => {
                observability::intercepted("rethrow_as_checked");
                Err(Fault::Checked((self.mapper)(err)))
            }
            Err(Fault::Unchecked(err)) => Err(Fault::Unchecked(observability::passed_through(
                "rethrow_as_checked",
                err,
            ))),
        }
    }
}

/// Adapter returned by `ThrowingFnExt::rethrow_as_unchecked`.
#[derive(Clone)]
pub struct RethrowAsUnchecked<W, M> {
    inner: W,
    mapper: M,
}

impl<W, M> RethrowAsUnchecked<W, M> {
    pub(crate) const fn new(inner: W, mapper: M) -> Self {
        Self { inner, mapper }
    }
}

impl<Args, W, M, R> PlainFn<Args> for RethrowAsUnchecked<W, M>
where
    W: ThrowingFn<Args>,
    M: Fn(W::Error) -> R,
    R: Error + Send + Sync + 'static,
{
    type Output = W::Output;

    fn run(&self, args: Args) -> Result<W::Output, UncheckedError> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(err)) => {
                observability::intercepted("rethrow_as_unchecked");
                Err(UncheckedError::new((self.mapper)(err)))
            }
            Err(Fault::Unchecked(err)) => {
                Err(observability::passed_through("rethrow_as_unchecked", err))
            }
        }
    }
}

/// Adapter returned by `ThrowingFnExt::to_unchecked` and `adapt::unchecked`.
///
/// Declared errors leave in a `WrappedError` carrier and can be recovered
/// with `adapt::checked_as` or `UncheckedError::unwrap_as`.
#[derive(Clone)]
pub struct ToUnchecked<W> {
    inner: W,
}

impl<W> ToUnchecked<W> {
    pub(crate) const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<Args, W> PlainFn<Args> for ToUnchecked<W>
where
    W: ThrowingFn<Args>,
    W::Error: Error + Send + Sync + 'static,
{
    type Output = W::Output;

    fn run(&self, args: Args) -> Result<W::Output, UncheckedError> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(err)) => {
                observability::intercepted("to_unchecked");
                Err(UncheckedError::wrap(err))
            }
            Err(Fault::Unchecked(err)) => Err(observability::passed_through("to_unchecked", err)),
        }
    }
}

impl<W: fmt::Debug, M> fmt::Debug for RethrowAsChecked<W, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RethrowAsChecked")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<W: fmt::Debug, M> fmt::Debug for RethrowAsUnchecked<W, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RethrowAsUnchecked")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<W: fmt::Debug> fmt::Debug for ToUnchecked<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToUnchecked")
            .field("inner", &self.inner)
            .finish()
    }
}
