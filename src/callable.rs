//! Callable traits
//!
//! Two traits cover every shape of callable (supplier, consumer, predicate,
//! function, ...) by parametrizing over an argument tuple:
//! - `ThrowingFn<Args>`: may fail with a declared error (`Fault::Checked`) or
//!   an undeclared one (`Fault::Unchecked`)
//! - `PlainFn<Args>`: may only fail with an `UncheckedError`
//!
//! Both are implemented for closures and fns taking up to three arguments.

use crate::error::{Fault, UncheckedError};

/// A callable that may fail with a declared error of type `Self::Error`.
///
/// `Args` is the argument tuple: `()`, `(A,)`, `(A, B)` or `(A, B, C)`.
pub trait ThrowingFn<Args> {
    type Output;
    type Error;

    fn invoke(&self, args: Args) -> Result<Self::Output, Fault<Self::Error>>;
}

/// A callable whose only failure is an `UncheckedError`.
pub trait PlainFn<Args> {
    type Output;

    fn run(&self, args: Args) -> Result<Self::Output, UncheckedError>;
}

macro_rules! impl_callables {
    ($($ty:ident $arg:ident),*) => {
        impl<F, $($ty,)* T, E> ThrowingFn<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> Result<T, Fault<E>>,
        {
            type Output = T;
            type Error = E;

            #[inline]
            fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Result<T, Fault<E>> {
                (self)($($arg),*)
            }
        }

        impl<F, $($ty,)* T> PlainFn<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> Result<T, UncheckedError>,
        {
            type Output = T;

            #[inline]
            fn run(&self, ($($arg,)*): ($($ty,)*)) -> Result<T, UncheckedError> {
                (self)($($arg),*)
            }
        }
    };
}

impl_callables!();
impl_callables!(A a);
impl_callables!(A a, B b);
impl_callables!(A a, B b, C c);
