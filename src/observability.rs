//! Log events emitted while routing faults.
//!
//! Events go to the `throwing_fn::fault` target. Without the `tracing`
//! feature every function here is a no-op.

use crate::error::UncheckedError;

#[cfg(feature = "tracing")]
const TARGET: &str = "throwing_fn::fault";

/// A combinator caught a declared error and is about to act on it.
#[inline]
pub(crate) fn intercepted(combinator: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: TARGET, combinator, "checked error intercepted");
    #[cfg(not(feature = "tracing"))]
    let _ = combinator;
}

/// A combinator let an undeclared error through. Returns it unmodified.
#[inline]
pub(crate) fn passed_through(combinator: &'static str, err: UncheckedError) -> UncheckedError {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: TARGET, combinator, err = %err, "unchecked error passed through");
    #[cfg(not(feature = "tracing"))]
    let _ = combinator;
    err
}

/// A carrier's cause matched the requested class and was unwrapped.
#[inline]
pub(crate) fn unwrapped(class: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: TARGET, class, "carrier unwrapped");
    #[cfg(not(feature = "tracing"))]
    let _ = class;
}

/// A carrier's cause did not match the requested class; the carrier is kept.
#[inline]
pub(crate) fn carrier_kept(class: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: TARGET, class, "carrier cause does not match, keeping carrier");
    #[cfg(not(feature = "tracing"))]
    let _ = class;
}

#[cfg(all(test, feature = "tracing"))]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_events_carry_fields() {
        intercepted("rethrow_as_checked");
        let err = passed_through("on_error_return", UncheckedError::msg("bug"));
        assert_eq!(err.to_string(), "bug");
        carrier_kept("std::io::error::Error");

        assert!(logs_contain("checked error intercepted"));
        assert!(logs_contain("rethrow_as_checked"));
        assert!(logs_contain("unchecked error passed through"));
        assert!(logs_contain("keeping carrier"));
    }
}
