//! Conversions between the containers and the standard `Result` / `Option` types.
//!
//! # Examples
//!
//! ```
//! use monad_rail::convert::*;
//! use monad_rail::{Maybe, Monad};
//!
//! let lifted = monad_to_encapsulate::<_, &str>(Monad::new(3));
//! assert_eq!(encapsulate_to_result(lifted), Ok(3));
//!
//! let missing = maybe_to_encapsulate(Maybe::<i32>::none(), || "missing");
//! assert_eq!(missing.failure(), Some(&"missing"));
//! ```
use crate::types::{Encapsulate, Maybe, Monad};

#[inline]
pub fn encapsulate_to_result<T, E>(encapsulate: Encapsulate<T, E>) -> Result<T, E> {
    Result::from(encapsulate)
}

#[inline]
pub fn result_to_encapsulate<T, E>(result: Result<T, E>) -> Encapsulate<T, E> {
    Encapsulate::from(result)
}

/// Drops the captured failure, keeping only whether a value survived.
#[inline]
pub fn encapsulate_to_maybe<T, E>(encapsulate: Encapsulate<T, E>) -> Maybe<T> {
    Maybe::from(encapsulate.into_value())
}

/// Turns an empty `Maybe` into a failure produced by `error`.
#[inline]
pub fn maybe_to_encapsulate<T, E, F>(maybe: Maybe<T>, error: F) -> Encapsulate<T, E>
where
    F: FnOnce() -> E,
{
    match maybe.unwrap() {
        Some(value) => Encapsulate::ok(value),
        None => Encapsulate::failed(error()),
    }
}

#[inline]
pub fn monad_to_encapsulate<T, E>(monad: Monad<T>) -> Encapsulate<T, E> {
    Encapsulate::ok(monad.into_inner())
}

#[inline]
pub fn monad_to_maybe<T>(monad: Monad<T>) -> Maybe<T> {
    Maybe::some(monad.into_inner())
}
