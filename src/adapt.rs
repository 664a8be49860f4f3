//! Factory functions
//!
//! Adaptation between throwing and plain callables:
//! - `of` / `from_fallible`: obtain a `ThrowingFn`
//! - `unchecked`: throwing to plain, declared errors leave in a carrier
//! - `checked` / `checked_as`: plain to throwing, without or with unwrapping
//! - `invoke_and_unwrap`: call a plain callable now and unwrap its carrier
//!
//! # Example
//!
//! ```rust,ignore
//! use throwing_fn::prelude::*;
//!
//! let read = || -> Result<String, Fault<std::io::Error>> {
//!     Ok(std::fs::read_to_string("config.toml")?)
//! };
//!
//! // Hand the callable to code that only knows unchecked failures...
//! let plain = unchecked(read);
//! // ...and get the io::Error back on the other side.
//! let content = invoke_and_unwrap(&plain, (), &ErrorClass::<std::io::Error>::exact());
//! ```

use std::error::Error;
use std::fmt;
use std::marker::PhantomData;

use crate::callable::{PlainFn, ThrowingFn};
use crate::combinators::{ThrowingFnExt, ToUnchecked};
use crate::error::{ErrorClass, Fault, UncheckedError};

/// Identity adaptation of an already throwing callable.
///
/// Useful to pin a closure's argument tuple where inference needs help.
pub fn of<Args, W>(callable: W) -> W
where
    W: ThrowingFn<Args>,
{
    callable
}

/// Adapt a callable returning `Result<T, E>` into a `ThrowingFn` whose
/// every failure is declared.
pub fn from_fallible<F>(callable: F) -> FromFallible<F> {
    FromFallible { inner: callable }
}

/// Throwing to plain: declared errors are put in a `WrappedError` carrier.
///
/// Same as `of(callable).to_unchecked()`.
pub fn unchecked<Args, W>(callable: W) -> ToUnchecked<W>
where
    W: ThrowingFn<Args>,
    W::Error: Error + Send + Sync + 'static,
{
    of(callable).to_unchecked()
}

/// Plain to throwing, declaring `E` without ever producing it.
///
/// Every failure, carriers included, stays `Fault::Unchecked`; nothing is
/// unwrapped. Use `checked_as` to get declared errors back out of carriers.
pub fn checked<E, Args, P>(plain: P) -> Checked<P, E>
where
    P: PlainFn<Args>,
{
    Checked {
        inner: plain,
        _declared: PhantomData,
    }
}

/// Plain to throwing, unwrapping carriers whose cause belongs to `class`.
///
/// - carrier with a matching cause: the cause becomes `Fault::Checked`
/// - carrier with any other cause: the carrier is kept, unmodified
/// - any other unchecked error: kept, unmodified
pub fn checked_as<C, Args, P>(plain: P, class: ErrorClass<C>) -> CheckedAs<P, C>
where
    P: PlainFn<Args>,
{
    CheckedAs {
        inner: plain,
        class,
    }
}

/// Run `plain` right away with the `checked_as` unwrapping rule.
pub fn invoke_and_unwrap<C, Args, P>(
    plain: &P,
    args: Args,
    class: &ErrorClass<C>,
) -> Result<P::Output, Fault<C>>
where
    P: PlainFn<Args>,
{
    plain.run(args).map_err(|err| unwrap_fault(err, class))
}

fn unwrap_fault<C>(err: UncheckedError, class: &ErrorClass<C>) -> Fault<C> {
    match err.unwrap_as(class) {
        Ok(cause) => Fault::Checked(cause),
        Err(err) => Fault::Unchecked(err),
    }
}

/// Adapter returned by `from_fallible`.
#[derive(Clone)]
pub struct FromFallible<F> {
    inner: F,
}

macro_rules! impl_from_fallible {
    ($($ty:ident $arg:ident),*) => {
        impl<F, $($ty,)* T, E> ThrowingFn<($($ty,)*)> for FromFallible<F>
        where
            F: Fn($($ty),*) -> Result<T, E>,
        {
            type Output = T;
            type Error = E;

            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Result<T, Fault<E>> {
                (self.inner)($($arg),*).map_err(Fault::Checked)
            }
        }
    };
}

impl_from_fallible!();
impl_from_fallible!(A a);
impl_from_fallible!(A a, B b);
impl_from_fallible!(A a, B b, C c);

/// Adapter returned by `checked`.
pub struct Checked<P, E> {
    inner: P,
    _declared: PhantomData<fn() -> E>,
}

impl<Args, P, E> ThrowingFn<Args> for Checked<P, E>
where
    P: PlainFn<Args>,
{
    type Output = P::Output;
    type Error = E;

    fn invoke(&self, args: Args) -> Result<P::Output, Fault<E>> {
        self.inner.run(args).map_err(Fault::Unchecked)
    }
}

/// Adapter returned by `checked_as`.
pub struct CheckedAs<P, C> {
    inner: P,
    class: ErrorClass<C>,
}

impl<Args, P, C> ThrowingFn<Args> for CheckedAs<P, C>
where
    P: PlainFn<Args>,
{
    type Output = P::Output;
    type Error = C;

    fn invoke(&self, args: Args) -> Result<P::Output, Fault<C>> {
        invoke_and_unwrap(&self.inner, args, &self.class)
    }
}

impl<P: Clone, E> Clone for Checked<P, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _declared: PhantomData,
        }
    }
}

impl<P: Clone, C> Clone for CheckedAs<P, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            class: self.class,
        }
    }
}

impl<F> fmt::Debug for FromFallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFallible").finish_non_exhaustive()
    }
}

impl<P: fmt::Debug, E> fmt::Debug for Checked<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checked")
            .field("inner", &self.inner)
            .field("declared", &std::any::type_name::<E>())
            .finish()
    }
}

impl<P: fmt::Debug, C> fmt::Debug for CheckedAs<P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckedAs")
            .field("inner", &self.inner)
            .field("class", &self.class)
            .finish()
    }
}
