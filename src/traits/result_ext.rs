//! Extension traits for lifting `Result` and `Option` into chainable containers.
//!
//! # Examples
//!
//! ```
//! use monad_rail::traits::{EncapsulateExt, MaybeExt};
//!
//! let port = "8080".parse::<u16>().capture().map(|port| port + 1);
//! assert_eq!(port.unwrap_or(0), 8081);
//!
//! let first = [3, 4].first().copied().maybe().map(|x| x * 10);
//! assert_eq!(first.unwrap(), Some(30));
//! ```

use core::error::Error;

use crate::types::{Encapsulate, Failure, Maybe};

/// Extension trait for starting an [`Encapsulate`] chain from a `Result`.
pub trait EncapsulateExt<T, E> {
    /// Wraps the result as-is, keeping `E` as the failure type.
    ///
    /// ```
    /// use monad_rail::traits::EncapsulateExt;
    ///
    /// let x = Err::<i32, &str>("early").encapsulate().bind(|x| Ok(x + 1));
    /// assert_eq!(x.failure(), Some(&"early"));
    /// ```
    fn encapsulate(self) -> Encapsulate<T, E>;

    /// Wraps the result, erasing the error into a [`Failure`].
    fn capture(self) -> Encapsulate<T, Failure>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> EncapsulateExt<T, E> for Result<T, E> {
    #[inline]
    fn encapsulate(self) -> Encapsulate<T, E> {
        Encapsulate::from(self)
    }

    #[inline]
    fn capture(self) -> Encapsulate<T, Failure>
    where
        E: Error + Send + Sync + 'static,
    {
        Encapsulate::from(self.map_err(Failure::new))
    }
}

/// Extension trait for starting a [`Maybe`] chain from an `Option`.
pub trait MaybeExt<T> {
    fn maybe(self) -> Maybe<T>;
}

impl<T> MaybeExt<T> for Option<T> {
    #[inline]
    fn maybe(self) -> Maybe<T> {
        Maybe::from(self)
    }
}
