//! Combinators over throwing callables
//!
//! Every combinator consumes the callable and returns a new adapter; the
//! wrapped callable is never mutated. Clone a callable first to keep using
//! it (adapters are `Clone` whenever their parts are).
//!
//! All adapters follow one routing rule: only `Fault::Checked` reaches the
//! mapper, handler or fallback. A `Fault::Unchecked` coming out of the
//! wrapped callable is returned unmodified and nothing else runs.
//!
//! - rethrow.rs: `rethrow_as_checked`, `rethrow_as_unchecked`, `to_unchecked`
//! - handle.rs: `handle_checked`, `handle_unchecked`
//! - recover.rs: `recover_with`, `on_error_return`, `on_error_discard`, `lift`

mod handle;
mod recover;
mod rethrow;

pub use handle::{HandleChecked, HandleUnchecked};
pub use recover::{Lift, OnErrorDiscard, OnErrorReturn, RecoverWith};
pub use rethrow::{RethrowAsChecked, RethrowAsUnchecked, ToUnchecked};

use std::error::Error;

use crate::callable::ThrowingFn;
use crate::error::{Fault, UncheckedError};

/// Combinators available on every `ThrowingFn`.
pub trait ThrowingFnExt<Args>: ThrowingFn<Args> + Sized {
    /// Replace a declared error with `mapper(err)`, still declared.
    fn rethrow_as_checked<M, E2>(self, mapper: M) -> RethrowAsChecked<Self, M>
    where
        M: Fn(Self::Error) -> E2,
    {
        RethrowAsChecked::new(self, mapper)
    }

    /// Replace a declared error with `mapper(err)` as an unchecked error.
    ///
    /// The result no longer declares an error: it is a `PlainFn`.
    fn rethrow_as_unchecked<M, R>(self, mapper: M) -> RethrowAsUnchecked<Self, M>
    where
        M: Fn(Self::Error) -> R,
        R: Error + Send + Sync + 'static,
    {
        RethrowAsUnchecked::new(self, mapper)
    }

    /// Route a declared error to `handler`, whose outcome replaces it.
    ///
    /// The handler may fail in turn, declared (`E2`) or not.
    fn handle_checked<H, E2>(self, handler: H) -> HandleChecked<Self, H>
    where
        H: Fn(Self::Error) -> Result<Self::Output, Fault<E2>>,
    {
        HandleChecked::new(self, handler)
    }

    /// Route a declared error to `handler`, which cannot declare one itself.
    fn handle_unchecked<H>(self, handler: H) -> HandleUnchecked<Self, H>
    where
        H: Fn(Self::Error) -> Result<Self::Output, UncheckedError>,
    {
        HandleUnchecked::new(self, handler)
    }

    /// On a declared error, ignore it and invoke `fallback` with the same
    /// arguments.
    ///
    /// Arguments are cloned before the first attempt.
    fn recover_with<R>(self, fallback: R) -> RecoverWith<Self, R>
    where
        R: ThrowingFn<Args, Output = Self::Output>,
        Args: Clone,
    {
        RecoverWith::new(self, fallback)
    }

    /// On a declared error, return a clone of `value`.
    fn on_error_return(self, value: Self::Output) -> OnErrorReturn<Self, Self::Output>
    where
        Self::Output: Clone,
    {
        OnErrorReturn::new(self, value)
    }

    /// On a declared error, return normally. Actions only.
    fn on_error_discard(self) -> OnErrorDiscard<Self>
    where
        Self: ThrowingFn<Args, Output = ()>,
    {
        OnErrorDiscard::new(self)
    }

    /// Convert a declared error into the canonical `WrappedError` carrier.
    fn to_unchecked(self) -> ToUnchecked<Self>
    where
        Self::Error: Error + Send + Sync + 'static,
    {
        ToUnchecked::new(self)
    }

    /// Turn a declared error into `None`.
    fn lift(self) -> Lift<Self> {
        Lift::new(self)
    }
}

impl<Args, W> ThrowingFnExt<Args> for W where W: ThrowingFn<Args> {}
