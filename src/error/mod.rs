//! Error Handling Module
//!
//! This module provides the error model shared by every adapter:
//! - `Fault<E>`: declared (checked) vs unexpected (unchecked) failures
//! - `UncheckedError` and its canonical carrier `WrappedError`
//! - `ErrorClass<C>`: the matcher used to unwrap a carrier back into `C`
//!
//! # Example
//!
//! ```rust,ignore
//! use throwing_fn::error::{ErrorClass, UncheckedError};
//!
//! let err = UncheckedError::wrap(std::io::Error::other("foo"));
//! let io = err.unwrap_as(&ErrorClass::<std::io::Error>::exact()).unwrap();
//! assert_eq!(io.to_string(), "foo");
//! ```

// Module declarations
mod class;
mod conversions;
pub mod types;

// Re-exports for public API
pub use class::ErrorClass;
pub use types::*;
