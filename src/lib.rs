//! throwing-fn
//!
//! Adapters for callables that may fail with a declared error, and the
//! conversions between declared ("checked") and undeclared ("unchecked")
//! failures.
//!
//! A throwing callable returns `Result<T, Fault<E>>`: `Fault::Checked(E)` is
//! the failure its signature commits to, `Fault::Unchecked` is anything
//! unexpected. Combinators from `ThrowingFnExt` change what happens to the
//! declared error and leave unexpected ones alone.
//!
//! ```rust,ignore
//! use throwing_fn::prelude::*;
//! use std::io;
//!
//! let exists = |path: &str| -> Result<bool, Fault<io::Error>> {
//!     Err(io::Error::other(format!("cannot stat {path}")).into())
//! };
//!
//! assert_eq!(exists.on_error_return(false).run(("a",)).unwrap(), false);
//! ```
#![deny(unsafe_code)]

pub mod adapt;
pub mod callable;
pub mod combinators;
pub mod error;
mod observability;
pub mod shapes;

pub use adapt::{checked, checked_as, from_fallible, invoke_and_unwrap, of, unchecked};
pub use callable::{PlainFn, ThrowingFn};
pub use combinators::ThrowingFnExt;
pub use error::{BoxError, ErrorClass, Fault, UncheckedError, WrappedError};

/// Commonly used traits, types and factories.
pub mod prelude {
    pub use crate::adapt::{checked, checked_as, from_fallible, invoke_and_unwrap, of, unchecked};
    pub use crate::callable::{PlainFn, ThrowingFn};
    pub use crate::combinators::ThrowingFnExt;
    pub use crate::error::{BoxError, ErrorClass, Fault, UncheckedError, WrappedError};
    pub use crate::shapes::*;
}
