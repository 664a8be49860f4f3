//! Type Conversions for Fault and UncheckedError
//!
//! `From<E> for Fault<E>` lets `?` lift a declared error inside a throwing
//! closure. `From<Fault<E>> for UncheckedError` lets `?` cross into a plain
//! closure, wrapping the declared side in the carrier.

use std::error::Error;

use super::types::{Fault, UncheckedError};

impl<E> From<E> for Fault<E> {
    fn from(err: E) -> Self {
        Self::Checked(err)
    }
}

impl<E> From<Fault<E>> for UncheckedError
where
    E: Error + Send + Sync + 'static,
{
    fn from(fault: Fault<E>) -> Self {
        fault.into_unchecked()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn read(fail: bool) -> Result<u8, io::Error> {
        if fail {
            Err(io::Error::other("foo"))
        } else {
            Ok(7)
        }
    }

    fn throwing(fail: bool) -> Result<u8, Fault<io::Error>> {
        Ok(read(fail)?)
    }

    fn plain(fail: bool) -> Result<u8, UncheckedError> {
        Ok(throwing(fail)?)
    }

    #[test]
    fn test_question_mark_lifts_declared_error() {
        assert_eq!(throwing(false).unwrap(), 7);
        let fault = throwing(true).unwrap_err();
        assert_eq!(fault.as_checked().unwrap().to_string(), "foo");
    }

    #[test]
    fn test_question_mark_wraps_into_carrier() {
        let err = plain(true).unwrap_err();
        let carrier = err.as_wrapped().unwrap();
        assert!(carrier.cause_is::<io::Error>());
        assert_eq!(carrier.to_string(), "foo");
    }
}
