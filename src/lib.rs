//! Chainable value containers with optional failure capture.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `monad_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Plain chaining
//!
//! ```
//! use monad_rail::Monad;
//!
//! let x = Monad::new(4) >> (|x: i32| x + 6) >> (|x: i32| x - 2);
//! assert_eq!(x, Monad::new(8));
//! ```
//!
//! ## Capturing failures
//!
//! ```
//! use monad_rail::{Encapsulate, Failure};
//!
//! #[derive(Debug)]
//! struct DivisionByZero;
//!
//! impl std::fmt::Display for DivisionByZero {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("division by zero")
//!     }
//! }
//!
//! impl std::error::Error for DivisionByZero {}
//!
//! fn div(divisor: i32) -> impl Fn(i32) -> Result<i32, Failure> {
//!     move |x: i32| -> Result<i32, Failure> { Ok(x.checked_div(divisor).ok_or(DivisionByZero)?) }
//! }
//!
//! let x = Encapsulate::new(4)
//!     >> (|x: i32| Ok(x + 6))
//!     >> div(0)
//!     >> (|x: i32| Ok(x - 2));
//!
//! assert!(x.failure().unwrap().is::<DivisionByZero>());
//! assert_eq!(x.value(), None);
//! assert_eq!(x.unwrap_or(42), 42);
//! ```
//!
//! ## Optional values and sequences
//!
//! ```
//! use monad_rail::{List, Maybe};
//!
//! let words = List::new(["hats", "cats", "bats"])
//!     >> (|w: &str| format!("{}!!!", w.to_uppercase()));
//! assert_eq!(words.unwrap(), vec!["HATS!!!", "CATS!!!", "BATS!!!"]);
//!
//! let nothing = Maybe::<i32>::none() >> (|x: i32| Some(x + 4));
//! assert!(nothing.is_none());
//! ```
//!
//! # Feature Flags
//!
//! - `std` - panic capture via `Encapsulate::bind_catching` and `try_bind_catching`
//! - `serde` - `Serialize`/`Deserialize` for the containers
//! - `tracing` - emits events when failures are captured or steps are skipped
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between containers, `Result` and `Option`
pub mod convert;
/// Macros for building failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits shared by the containers
pub mod traits;
/// Containers and the failure type
pub mod types;

pub use convert::*;
pub use traits::*;
pub use types::{Encapsulate, Failure, FailureResult, List, ListVec, Maybe, Monad, Nomad};
