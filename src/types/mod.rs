//! Chainable containers and the failure type they capture.
//!
//! - [`Monad`] - plain chaining, failures propagate
//! - [`Encapsulate`] - chaining that captures the first failure and skips the rest
//! - [`Maybe`] - chaining over an optional value
//! - [`List`] - chaining over every element of a sequence
//! - [`Nomad`] - failure capture plus a recorded call graph of the steps
//! - [`Failure`] - type-erased error used as the default failure of `Encapsulate`
//!
//! # Examples
//!
//! ```
//! use monad_rail::{Encapsulate, Failure, Monad};
//!
//! assert_eq!(Monad::new(4) >> (|x: i32| x + 6) >> (|x: i32| x - 2), Monad::new(8));
//!
//! let failed = Encapsulate::new(4) >> (|_: i32| Err::<i32, _>(Failure::msg("nope")));
//! assert_eq!(failed.unwrap_or(42), 42);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod encapsulate;
pub mod failure;
pub mod list;
pub mod maybe;
pub mod monad;
pub mod nomad;

pub use encapsulate::*;
pub use failure::*;
pub use list::*;
pub use maybe::*;
pub use monad::*;
pub use nomad::*;

/// SmallVec-backed storage used by [`List`].
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// for the short sequences most chains operate on.
pub type ListVec<T> = SmallVec<[T; 4]>;

/// Result alias using [`Failure`] as the error type.
pub type FailureResult<T> = Result<T, Failure>;
