//! Named shapes of throwing callables
//!
//! Each trait is a thin, blanket-implemented view over `ThrowingFn` with a
//! conventional call method, so a bound like `ThrowingPredicate<String, E>`
//! reads better than the equivalent `ThrowingFn<(String,), Output = bool>`.

use crate::callable::ThrowingFn;
use crate::error::Fault;

/// Action with no arguments and no result.
pub trait ThrowingRunnable<E>: ThrowingFn<(), Output = (), Error = E> {
    fn execute(&self) -> Result<(), Fault<E>> {
        self.invoke(())
    }
}

impl<W, E> ThrowingRunnable<E> for W where W: ThrowingFn<(), Output = (), Error = E> {}

/// Producer of a value.
pub trait ThrowingSupplier<T, E>: ThrowingFn<(), Output = T, Error = E> {
    fn get(&self) -> Result<T, Fault<E>> {
        self.invoke(())
    }
}

impl<W, T, E> ThrowingSupplier<T, E> for W where W: ThrowingFn<(), Output = T, Error = E> {}

/// Sink for one value.
pub trait ThrowingConsumer<A, E>: ThrowingFn<(A,), Output = (), Error = E> {
    fn accept(&self, a: A) -> Result<(), Fault<E>> {
        self.invoke((a,))
    }
}

impl<W, A, E> ThrowingConsumer<A, E> for W where W: ThrowingFn<(A,), Output = (), Error = E> {}

/// Sink for two values.
pub trait ThrowingBiConsumer<A, B, E>: ThrowingFn<(A, B), Output = (), Error = E> {
    fn accept_both(&self, a: A, b: B) -> Result<(), Fault<E>> {
        self.invoke((a, b))
    }
}

impl<W, A, B, E> ThrowingBiConsumer<A, B, E> for W where
    W: ThrowingFn<(A, B), Output = (), Error = E>
{
}

/// One-argument function.
pub trait ThrowingFunction<A, R, E>: ThrowingFn<(A,), Output = R, Error = E> {
    fn apply(&self, a: A) -> Result<R, Fault<E>> {
        self.invoke((a,))
    }
}

impl<W, A, R, E> ThrowingFunction<A, R, E> for W where W: ThrowingFn<(A,), Output = R, Error = E> {}

/// Two-argument function.
pub trait ThrowingBiFunction<A, B, R, E>: ThrowingFn<(A, B), Output = R, Error = E> {
    fn apply_both(&self, a: A, b: B) -> Result<R, Fault<E>> {
        self.invoke((a, b))
    }
}

impl<W, A, B, R, E> ThrowingBiFunction<A, B, R, E> for W where
    W: ThrowingFn<(A, B), Output = R, Error = E>
{
}

/// One-argument test.
pub trait ThrowingPredicate<A, E>: ThrowingFn<(A,), Output = bool, Error = E> {
    fn test(&self, a: A) -> Result<bool, Fault<E>> {
        self.invoke((a,))
    }
}

impl<W, A, E> ThrowingPredicate<A, E> for W where W: ThrowingFn<(A,), Output = bool, Error = E> {}

/// Two-argument test.
pub trait ThrowingBiPredicate<A, B, E>: ThrowingFn<(A, B), Output = bool, Error = E> {
    fn test_both(&self, a: A, b: B) -> Result<bool, Fault<E>> {
        self.invoke((a, b))
    }
}

impl<W, A, B, E> ThrowingBiPredicate<A, B, E> for W where
    W: ThrowingFn<(A, B), Output = bool, Error = E>
{
}
