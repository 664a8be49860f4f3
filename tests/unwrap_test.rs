use std::io;
use std::num::ParseIntError;

use proptest::prelude::*;
use throwing_fn::prelude::*;

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseIntError),
}

fn load_error_family() -> ErrorClass<LoadError> {
    ErrorClass::family(|cause| {
        let cause = match cause.downcast::<io::Error>() {
            Ok(io) => return Ok(LoadError::Io(*io)),
            Err(cause) => cause,
        };
        cause
            .downcast::<ParseIntError>()
            .map(|parse| LoadError::Parse(*parse))
    })
}

#[derive(Debug, thiserror::Error)]
#[error("unrelated")]
struct Unrelated;

fn throwing_carrier<E>(make: fn() -> E) -> impl Fn() -> Result<(), UncheckedError>
where
    E: std::error::Error + Send + Sync + 'static,
{
    move || Err(UncheckedError::wrap(make()))
}

#[test]
fn test_checked_as_unwraps_exact_class() {
    let plain = throwing_carrier(|| io::Error::other("x"));
    let err = checked_as(plain, ErrorClass::<io::Error>::exact())
        .invoke(())
        .unwrap_err()
        .into_checked()
        .unwrap();
    assert_eq!(err.to_string(), "x");
}

#[test]
fn test_checked_as_keeps_carrier_of_unrelated_cause() {
    let plain = throwing_carrier(|| Unrelated);
    let fault = checked_as(plain, ErrorClass::<io::Error>::exact())
        .invoke(())
        .unwrap_err();

    let carrier = fault
        .as_unchecked()
        .and_then(UncheckedError::as_wrapped)
        .expect("carrier kept");
    assert!(carrier.cause_is::<Unrelated>());
    assert_eq!(
        std::error::Error::source(carrier).unwrap().to_string(),
        "unrelated"
    );
}

#[test]
fn test_family_class_unwraps_members() {
    let io_plain = throwing_carrier(|| io::Error::other("disk"));
    let parse_plain = || -> Result<(), UncheckedError> {
        "NaN"
            .parse::<i32>()
            .map(|_| ())
            .map_err(UncheckedError::wrap)
    };

    let err = invoke_and_unwrap(&io_plain, (), &load_error_family()).unwrap_err();
    assert!(matches!(err, Fault::Checked(LoadError::Io(_))));

    let err = invoke_and_unwrap(&parse_plain, (), &load_error_family()).unwrap_err();
    assert!(matches!(err, Fault::Checked(LoadError::Parse(_))));

    let other = throwing_carrier(|| Unrelated);
    let err = invoke_and_unwrap(&other, (), &load_error_family()).unwrap_err();
    assert!(err.as_unchecked().is_some_and(UncheckedError::is_wrapped));
}

#[test]
fn test_invoke_and_unwrap_passes_non_carrier_through() {
    let plain = || -> Result<u8, UncheckedError> { Err(UncheckedError::msg("programming error")) };
    let err = invoke_and_unwrap(&plain, (), &ErrorClass::<io::Error>::exact()).unwrap_err();
    assert_eq!(err.as_unchecked().unwrap().to_string(), "programming error");
}

#[test]
fn test_checked_without_class_never_unwraps() {
    let plain = throwing_carrier(|| io::Error::other("x"));
    let fault = checked::<io::Error, _, _>(plain).invoke(()).unwrap_err();
    assert!(fault.is_unchecked());
}

proptest! {
    #[test]
    fn prop_unchecked_then_unwrap_round_trips(msg in ".{0,32}", kind_idx in 0usize..3) {
        let kinds = [io::ErrorKind::NotFound, io::ErrorKind::PermissionDenied, io::ErrorKind::Other];
        let kind = kinds[kind_idx];
        let source = msg.clone();
        let read = move || -> Result<String, Fault<io::Error>> {
            Err(io::Error::new(kind, source.clone()).into())
        };

        let round_trip = checked_as(unchecked(read), ErrorClass::<io::Error>::exact());
        let err = round_trip.invoke(()).unwrap_err().into_checked().unwrap();
        prop_assert_eq!(err.kind(), kind);
        prop_assert_eq!(err.to_string(), msg);
    }

    #[test]
    fn prop_success_survives_round_trip(n in any::<i64>()) {
        let ok = move || -> Result<i64, Fault<io::Error>> { Ok(n) };
        let round_trip = checked_as(unchecked(ok), ErrorClass::<io::Error>::exact());
        prop_assert_eq!(round_trip.invoke(()).unwrap(), n);
    }
}
