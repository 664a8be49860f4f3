//! Error classes used to unwrap carriers.

use std::error::Error;
use std::fmt;

use super::types::BoxError;

/// Narrowing function: the cause as `C`, or the untouched cause.
pub type Narrow<C> = fn(BoxError) -> Result<C, BoxError>;

/// Matcher deciding whether a carrier's cause belongs to a declared error
/// type `C`.
///
/// `exact()` matches the concrete type `C` only. `family()` stands in for
/// "the class or any of its subtypes": `C` is typically an enum grouping
/// several concrete errors, and the narrowing function tries each of them.
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error)]
/// enum StoreError {
///     #[error(transparent)]
///     Io(#[from] std::io::Error),
///     #[error(transparent)]
///     Parse(#[from] std::num::ParseIntError),
/// }
///
/// let class = ErrorClass::<StoreError>::family(|cause| {
///     let cause = match cause.downcast::<std::io::Error>() {
///         Ok(io) => return Ok(StoreError::Io(*io)),
///         Err(cause) => cause,
///     };
///     cause.downcast::<std::num::ParseIntError>().map(|p| StoreError::Parse(*p))
/// });
/// ```
pub struct ErrorClass<C> {
    narrow: Narrow<C>,
    name: &'static str,
}

impl<C> ErrorClass<C> {
    /// Class with a custom narrowing function.
    pub fn family(narrow: Narrow<C>) -> Self {
        Self {
            narrow,
            name: std::any::type_name::<C>(),
        }
    }

    /// Narrow `cause`, handing it back unchanged on mismatch.
    pub fn narrow(&self, cause: BoxError) -> Result<C, BoxError> {
        (self.narrow)(cause)
    }

    /// Type name of `C`, used in log events.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<C> ErrorClass<C>
where
    C: Error + Send + Sync + 'static,
{
    /// Class matching exactly the concrete type `C`.
    pub fn exact() -> Self {
        Self::family(downcast_exact::<C>)
    }
}

fn downcast_exact<C>(cause: BoxError) -> Result<C, BoxError>
where
    C: Error + Send + Sync + 'static,
{
    cause.downcast::<C>().map(|err| *err)
}

impl<C> Clone for ErrorClass<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ErrorClass<C> {}

impl<C> fmt::Debug for ErrorClass<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorClass").field(&self.name).finish()
    }
}

impl<C> Default for ErrorClass<C>
where
    C: Error + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::exact()
    }
}
