//! Handling adapters: a handler takes over from a declared error.

use std::fmt;

use crate::callable::{PlainFn, ThrowingFn};
use crate::error::{Fault, UncheckedError};
use crate::observability;

/// Adapter returned by `ThrowingFnExt::handle_checked`.
#[derive(Clone)]
pub struct HandleChecked<W, H> {
    inner: W,
    handler: H,
}

impl<W, H> HandleChecked<W, H> {
    pub(crate) const fn new(inner: W, handler: H) -> Self {
        Self { inner, handler }
    }
}

impl<Args, W, H, E2> ThrowingFn<Args> for HandleChecked<W, H>
where
    W: ThrowingFn<Args>,
    H: Fn(W::Error) -> Result<W::Output, Fault<E2>>,
{
    type Output = W::Output;
    type Error = E2;

    fn invoke(&self, args: Args) -> Result<W::Output, Fault<E2>> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(err)) => {
                observability::intercepted("handle_checked");
                // whatever the handler yields, failures included, replaces the original
                (self.handler)(err)
            }
            Err(Fault::Unchecked(err)) => Err(Fault::Unchecked(observability::passed_through(
                "handle_checked",
                err,
            ))),
        }
    }
}

/// Adapter returned by `ThrowingFnExt::handle_unchecked`.
#[derive(Clone)]
pub struct HandleUnchecked<W, H> {
    inner: W,
    handler: H,
}

impl<W, H> HandleUnchecked<W, H> {
    pub(crate) const fn new(inner: W, handler: H) -> Self {
        Self { inner, handler }
    }
}

impl<Args, W, H> PlainFn<Args> for HandleUnchecked<W, H>
where
    W: ThrowingFn<Args>,
    H: Fn(W::Error) -> Result<W::Output, UncheckedError>,
{
    type Output = W::Output;

    fn run(&self, args: Args) -> Result<W::Output, UncheckedError> {
        match self.inner.invoke(args) {
            Ok(value) => Ok(value),
            Err(Fault::Checked(err)) => {
                observability::intercepted("handle_unchecked");
                (self.handler)(err)
            }
            Err(Fault::Unchecked(err)) => {
                Err(observability::passed_through("handle_unchecked", err))
            }
        }
    }
}

impl<W: fmt::Debug, H> fmt::Debug for HandleChecked<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleChecked")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<W: fmt::Debug, H> fmt::Debug for HandleUnchecked<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleUnchecked")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::ThrowingFnExt;
    use std::cell::RefCell;
    use std::io;

    fn always_fails(s: String) -> Result<usize, Fault<io::Error>> {
        Err(io::Error::other(format!("cannot read {s}")).into())
    }

    #[test]
    fn test_handler_sees_error_and_supplies_value() {
        let seen = RefCell::new(Vec::new());
        let handled = always_fails.handle_checked(|e: io::Error| -> Result<usize, Fault<io::Error>> {
            seen.borrow_mut().push(e.to_string());
            Ok(0)
        });

        assert_eq!(handled.invoke(("a.txt".to_string(),)).unwrap(), 0);
        assert_eq!(seen.borrow().as_slice(), ["cannot read a.txt".to_string()]);
    }

    #[test]
    fn test_handler_checked_failure_replaces_original() {
        let handled = always_fails.handle_checked(|_: io::Error| -> Result<usize, Fault<String>> {
            Err(Fault::checked("handler failed".to_string()))
        });
        let err = handled.invoke(("a".to_string(),)).unwrap_err();
        assert_eq!(err.into_checked().unwrap(), "handler failed");
    }

    #[test]
    fn test_handler_unchecked_failure_replaces_original() {
        let handled = always_fails.handle_checked(|_: io::Error| -> Result<usize, Fault<io::Error>> {
            Err(Fault::unchecked(UncheckedError::msg("handler bug")))
        });
        let err = handled.invoke(("a".to_string(),)).unwrap_err();
        assert_eq!(err.as_unchecked().unwrap().to_string(), "handler bug");
    }

    #[test]
    fn test_handle_unchecked_is_plain() {
        let handled = always_fails.handle_unchecked(|e: io::Error| Ok(e.to_string().len()));
        assert_eq!(handled.run(("ab".to_string(),)).unwrap(), "cannot read ab".len());

        let failing = always_fails.handle_unchecked(|_: io::Error| Err(UncheckedError::msg("no")));
        assert_eq!(failing.run(("ab".to_string(),)).unwrap_err().to_string(), "no");
    }
}
