//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use monad_rail::prelude::*;
//!
//! let x = Encapsulate::new(2).map(|x| x * 3);
//! assert_eq!(x.unwrap_or(0), 6);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`failure!`]
//! - **Types**: [`Monad`], [`Encapsulate`], [`Maybe`], [`List`], [`Nomad`], [`Failure`]
//! - **Traits**: [`Chain`], [`EncapsulateExt`], [`MaybeExt`]

// Macros
pub use crate::failure;

// Core types
pub use crate::types::{Encapsulate, Failure, FailureResult, List, Maybe, Monad, Nomad};

// Traits
pub use crate::traits::{Chain, EncapsulateExt, MaybeExt};
