use std::fmt;
use std::num::ParseIntError;

use monad_rail::Failure;

#[derive(Debug, PartialEq)]
enum StorageError {
    NotFound(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(key) => write!(f, "key {key} not found"),
        }
    }
}

impl std::error::Error for StorageError {}

#[test]
fn typed_error_keeps_kind_message_and_identity() {
    let failure = Failure::new(StorageError::NotFound("user:1".into()));

    assert!(failure.kind().ends_with("StorageError"));
    assert_eq!(failure.message(), "key user:1 not found");
    assert!(failure.is::<StorageError>());
    assert!(!failure.is::<ParseIntError>());
    assert_eq!(
        failure.downcast_ref::<StorageError>(),
        Some(&StorageError::NotFound("user:1".into()))
    );
    assert!(!failure.is_panic());
}

#[test]
fn downcast_to_wrong_type_returns_failure_unchanged() {
    let failure = Failure::new(StorageError::NotFound("k".into()));

    let failure = failure.downcast::<ParseIntError>().unwrap_err();
    assert_eq!(failure.message(), "key k not found");
    assert_eq!(failure.downcast::<StorageError>().ok(), Some(StorageError::NotFound("k".into())));
}

#[test]
fn message_failure_has_no_source() {
    let failure = Failure::msg("quota exceeded");

    assert_eq!(failure.kind(), "message");
    assert_eq!(failure.message(), "quota exceeded");
    assert!(failure.as_error().is_none());
    assert!(failure.downcast::<StorageError>().is_err());
}

#[test]
fn from_conversion_wraps_typed_errors() {
    let parse_err = "x".parse::<u8>().unwrap_err();
    let failure: Failure = parse_err.clone().into();

    assert_eq!(failure.as_error().map(|e| e.to_string()), Some(parse_err.to_string()));
    assert!(failure.into_error().is_ok());
}

#[test]
fn clones_share_the_original_error() {
    use std::collections::HashSet;

    let failure = Failure::new(StorageError::NotFound("k".into()));
    let copy = failure.clone();

    assert_eq!(copy, failure);
    assert_eq!(copy.downcast_ref::<StorageError>(), Some(&StorageError::NotFound("k".into())));

    let failure = failure.downcast::<StorageError>().unwrap_err();
    let failure = failure.into_error().unwrap_err();
    drop(copy);
    assert_eq!(failure.downcast::<StorageError>().ok(), Some(StorageError::NotFound("k".into())));

    let set: HashSet<Failure> = [Failure::msg("a"), Failure::msg("a"), Failure::msg("b")].into();
    assert_eq!(set.len(), 2);
}

#[test]
fn display_is_message_and_alternate_adds_kind() {
    let failure = Failure::msg("boom");

    assert_eq!(format!("{failure}"), "boom");
    assert_eq!(format!("{failure:#}"), "message: boom");
}

#[test]
fn equality_uses_kind_and_message() {
    assert_eq!(Failure::msg("a"), Failure::msg("a"));
    assert_ne!(Failure::msg("a"), Failure::msg("b"));
    assert_ne!(Failure::msg("key k not found"), Failure::new(StorageError::NotFound("k".into())));
}

#[cfg(feature = "std")]
#[test]
fn panic_payloads_become_panic_failures() {
    let payload = std::panic::catch_unwind(|| panic!("exploded {}", 1)).unwrap_err();
    let failure = Failure::from_panic(payload);
    assert!(failure.is_panic());
    assert_eq!(failure.kind(), "panic");
    assert_eq!(failure.message(), "exploded 1");

    let payload = std::panic::catch_unwind(|| panic!("static")).unwrap_err();
    assert_eq!(Failure::from_panic(payload).message(), "static");

    let payload = std::panic::catch_unwind(|| std::panic::panic_any(7_u8)).unwrap_err();
    assert_eq!(Failure::from_panic(payload).message(), "Box<dyn Any>");
}
