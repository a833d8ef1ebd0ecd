//! Ergonomic macros for building failures inside chained steps.
//!
//! - [`macro@crate::failure`] - formats an ad-hoc [`Failure`](crate::types::Failure)
//!
//! # Examples
//!
//! ```
//! use monad_rail::{failure, Encapsulate};
//!
//! let limit = 10;
//! let x = Encapsulate::new(12).bind(|x| {
//!     if x > limit {
//!         Err(failure!("{} exceeds limit {}", x, limit))
//!     } else {
//!         Ok(x)
//!     }
//! });
//!
//! assert_eq!(x.failure().unwrap().message(), "12 exceeds limit 10");
//! ```

/// Creates a [`Failure`](crate::types::Failure) from a format string.
///
/// Accepts the same arguments as the standard `format!` macro. Does not
/// require `std`.
///
/// # Examples
///
/// ```
/// use monad_rail::failure;
///
/// let id = 7;
/// let f = failure!("user {} not found", id);
/// assert_eq!(f.kind(), "message");
/// assert_eq!(f.message(), "user 7 not found");
/// ```
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::types::Failure::msg(::core::format_args!($($arg)*))
    };
}
