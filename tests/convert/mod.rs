use monad_rail::convert::*;
use monad_rail::{Encapsulate, Maybe, Monad};

#[test]
fn encapsulate_and_result_round_trip() {
    let x = result_to_encapsulate(Err::<i32, &str>("bad"));
    assert!(x.is_failed());
    assert_eq!(encapsulate_to_result(x), Err("bad"));
}

#[test]
fn encapsulate_to_maybe_drops_the_failure() {
    assert!(encapsulate_to_maybe(Encapsulate::<i32, &str>::failed("x")).is_none());
    assert_eq!(encapsulate_to_maybe(Encapsulate::<i32, &str>::ok(1)).unwrap(), Some(1));
}

#[test]
fn maybe_to_encapsulate_only_builds_error_when_empty() {
    let mut built = 0;
    let present = maybe_to_encapsulate(Maybe::some(1), || {
        built += 1;
        "missing"
    });
    assert_eq!(present.value(), Some(&1));
    assert_eq!(built, 0);

    let absent = maybe_to_encapsulate(Maybe::<i32>::none(), || "missing");
    assert_eq!(absent.failure(), Some(&"missing"));
}

#[test]
fn monad_lifts_into_other_containers() {
    let x = monad_to_encapsulate::<_, &str>(Monad::new(5));
    assert_eq!(x.unwrap(), Ok(5));

    assert_eq!(monad_to_maybe(Monad::new(5)).unwrap(), Some(5));
}
