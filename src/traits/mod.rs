//! Traits shared by the containers.
//!
//! - [`Chain`]: infallible mapping implemented by every container
//! - [`EncapsulateExt`]: start an [`Encapsulate`](crate::Encapsulate) chain from a `Result`
//! - [`MaybeExt`]: start a [`Maybe`](crate::Maybe) chain from an `Option`
//!
//! # Examples
//!
//! ```
//! use monad_rail::traits::{Chain, EncapsulateExt};
//!
//! let x = Ok::<_, &str>(20).encapsulate().chain(|x| x + 1);
//! assert_eq!(x.unwrap(), Ok(21));
//! ```

pub mod chain;
pub mod result_ext;

pub use chain::Chain;
pub use result_ext::{EncapsulateExt, MaybeExt};
