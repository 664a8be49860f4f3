//! Core error types.

use std::error::Error;

use thiserror::Error;

use super::class::ErrorClass;
use crate::observability;

/// Boxed, thread-safe error used as the cause of a carrier and for arbitrary
/// unexpected failures.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failure of a throwing callable.
///
/// `Checked` is the declared category and the only one combinators act on.
/// `Unchecked` is everything else; combinators hand it back untouched.
#[derive(Debug, Error)]
pub enum Fault<E> {
    /// Declared failure
    #[error(transparent)]
    Checked(E),
    /// Undeclared failure
    #[error(transparent)]
    Unchecked(UncheckedError),
}

impl<E> Fault<E> {
    /// Create a declared failure.
    pub const fn checked(err: E) -> Self {
        Self::Checked(err)
    }

    /// Create an undeclared failure.
    pub const fn unchecked(err: UncheckedError) -> Self {
        Self::Unchecked(err)
    }

    pub const fn is_checked(&self) -> bool {
        matches!(self, Self::Checked(_))
    }

    pub const fn is_unchecked(&self) -> bool {
        matches!(self, Self::Unchecked(_))
    }

    /// Borrow the declared error, if this is one.
    pub const fn as_checked(&self) -> Option<&E> {
        match self {
            Self::Checked(err) => Some(err),
            Self::Unchecked(_) => None,
        }
    }

    /// Borrow the undeclared error, if this is one.
    pub const fn as_unchecked(&self) -> Option<&UncheckedError> {
        match self {
            Self::Checked(_) => None,
            Self::Unchecked(err) => Some(err),
        }
    }

    /// Take the declared error, giving the fault back otherwise.
    pub fn into_checked(self) -> Result<E, Self> {
        match self {
            Self::Checked(err) => Ok(err),
            other => Err(other),
        }
    }

    /// Map the declared error, leaving an undeclared one as it is.
    pub fn map_checked<E2, F>(self, f: F) -> Fault<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Checked(err) => Fault::Checked(f(err)),
            Self::Unchecked(err) => Fault::Unchecked(err),
        }
    }
}

impl<E> Fault<E>
where
    E: Error + Send + Sync + 'static,
{
    /// Collapse into the unchecked category.
    ///
    /// A declared error is put in a `WrappedError` carrier; an undeclared one
    /// is returned unmodified.
    pub fn into_unchecked(self) -> UncheckedError {
        match self {
            Self::Checked(err) => UncheckedError::wrap(err),
            Self::Unchecked(err) => err,
        }
    }
}

/// Undeclared failure.
#[derive(Debug, Error)]
pub enum UncheckedError {
    /// Carrier ferrying a declared error across a boundary that cannot
    /// declare it
    #[error(transparent)]
    Wrapped(#[from] WrappedError),

    /// Any other unexpected failure
    #[error(transparent)]
    Other(BoxError),
}

impl From<BoxError> for UncheckedError {
    fn from(err: BoxError) -> Self {
        Self::classify(err)
    }
}

impl UncheckedError {
    /// Turn any error into an unchecked one.
    ///
    /// An `UncheckedError` is returned as-is and a `WrappedError` becomes the
    /// `Wrapped` variant, so carriers stay recognizable whatever path they
    /// took.
    pub fn new<R>(err: R) -> Self
    where
        R: Error + Send + Sync + 'static,
    {
        Self::classify(Box::new(err))
    }

    fn classify(boxed: BoxError) -> Self {
        match boxed.downcast::<UncheckedError>() {
            Ok(err) => *err,
            Err(boxed) => match boxed.downcast::<WrappedError>() {
                Ok(carrier) => Self::Wrapped(*carrier),
                Err(other) => Self::Other(other),
            },
        }
    }

    /// Unexpected failure described by a message only.
    pub fn msg<S: Into<String>>(message: S) -> Self {
        let message: String = message.into();
        Self::Other(message.into())
    }

    /// Put a declared error in the canonical carrier.
    pub fn wrap<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Wrapped(WrappedError::new(err))
    }

    pub const fn is_wrapped(&self) -> bool {
        matches!(self, Self::Wrapped(_))
    }

    /// Borrow the carrier, if this is one.
    pub const fn as_wrapped(&self) -> Option<&WrappedError> {
        match self {
            Self::Wrapped(carrier) => Some(carrier),
            Self::Other(_) => None,
        }
    }

    /// Downcast a non-carrier error to a concrete type.
    pub fn downcast_ref<T: Error + 'static>(&self) -> Option<&T> {
        match self {
            Self::Wrapped(_) => None,
            Self::Other(err) => err.downcast_ref::<T>(),
        }
    }

    /// Unwrap a carrier whose cause belongs to `class`.
    ///
    /// Anything else comes back unmodified in `Err`: a carrier with an
    /// unrelated cause keeps its message and cause, a non-carrier error is
    /// never touched.
    pub fn unwrap_as<C>(self, class: &ErrorClass<C>) -> Result<C, UncheckedError> {
        match self {
            Self::Wrapped(carrier) => carrier.unwrap_as(class).map_err(Self::Wrapped),
            other => Err(other),
        }
    }
}

/// Canonical carrier for a declared error.
///
/// The wrapped error is kept as the `source()` so it can be inspected or
/// unwrapped later.
#[derive(Debug, Error)]
#[error("{}", describe(.message, .cause))]
pub struct WrappedError {
    message: Option<String>,
    #[source]
    cause: BoxError,
}

fn describe(message: &Option<String>, cause: &BoxError) -> String {
    match message {
        Some(message) => message.clone(),
        None => cause.to_string(),
    }
}

impl WrappedError {
    /// Wrap `cause` without a message of its own.
    pub fn new<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(cause))
    }

    /// Wrap `cause` with a message shown instead of the cause's.
    pub fn with_message<S, E>(message: S, cause: E) -> Self
    where
        S: Into<String>,
        E: Error + Send + Sync + 'static,
    {
        Self {
            message: Some(message.into()),
            cause: Box::new(cause),
        }
    }

    /// Wrap an already boxed cause.
    pub fn from_boxed(cause: BoxError) -> Self {
        Self {
            message: None,
            cause,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The wrapped declared error.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn cause_is<T: Error + 'static>(&self) -> bool {
        self.cause.is::<T>()
    }

    pub fn downcast_cause_ref<T: Error + 'static>(&self) -> Option<&T> {
        self.cause.downcast_ref::<T>()
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// Narrow the cause to `class`, or give the carrier back unchanged.
    pub fn unwrap_as<C>(self, class: &ErrorClass<C>) -> Result<C, WrappedError> {
        let Self { message, cause } = self;
        match class.narrow(cause) {
            Ok(err) => {
                observability::unwrapped(class.name());
                Ok(err)
            }
            Err(cause) => {
                observability::carrier_kept(class.name());
                Err(Self { message, cause })
            }
        }
    }
}
