//! Type-erased failure captured by [`Encapsulate`](crate::types::Encapsulate).
//!
//! [`Failure`] is the default failure slot of an `Encapsulate`. It keeps three things
//! about whatever went wrong inside a chained step:
//!
//! - the *kind*: the Rust type name of the original error, `"message"` for ad-hoc
//!   failures, or `"panic"` for captured panics
//! - the rendered *message*
//! - the original error itself (when there was one), so callers can downcast back
//!   to the concrete type
//!
//! The original error is reference counted, so cloning a `Failure` (and with it an
//! `Encapsulate`) shares the error instead of copying it.
//!
//! # Examples
//!
//! ```
//! use monad_rail::Failure;
//! use std::num::ParseIntError;
//!
//! let parse_err = "abc".parse::<i32>().unwrap_err();
//! let failure = Failure::new(parse_err);
//!
//! assert!(failure.is::<ParseIntError>());
//! assert!(failure.kind().ends_with("ParseIntError"));
//! assert_eq!(failure.message(), "invalid digit found in string");
//! ```

use core::error::Error;
use core::fmt::{self, Display, Write};
use core::hash::{Hash, Hasher};

use crate::types::alloc_type::{Arc, Box, String};

/// Boxed error object stored inside a [`Failure`].
pub type DynError = dyn Error + Send + Sync + 'static;

type SharedError = Arc<Box<DynError>>;

/// Kind reported by failures built with [`Failure::msg`].
pub const MESSAGE_KIND: &str = "message";

/// Kind reported by failures built from a captured panic.
pub const PANIC_KIND: &str = "panic";

/// Opaque failure produced by a chained step.
///
/// Any `E: Error + Send + Sync + 'static` converts into a `Failure`, so `?` works
/// inside steps that return `Result<_, Failure>`:
///
/// ```
/// use monad_rail::{Encapsulate, Failure};
///
/// let parsed = Encapsulate::new("12").bind(|s| {
///     let n: i32 = s.parse()?;
///     Ok::<_, Failure>(n * 2)
/// });
/// assert_eq!(parsed.unwrap_or(0), 24);
/// ```
///
/// `Failure` intentionally does not implement [`Error`] itself; the blanket
/// `From` conversion above would otherwise overlap with `From<T> for T`. Use
/// [`Failure::as_error`] to reach the original error object.
#[must_use]
#[derive(Clone)]
pub struct Failure {
    kind: &'static str,
    message: String,
    source: Option<SharedError>,
}

impl Failure {
    /// Captures a typed error, keeping it for later downcasting.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: core::any::type_name::<E>(),
            message: render(&error),
            source: Some(Arc::new(Box::new(error))),
        }
    }

    /// Creates an ad-hoc failure from a displayable message.
    ///
    /// ```
    /// use monad_rail::Failure;
    ///
    /// let failure = Failure::msg("quota exceeded");
    /// assert_eq!(failure.kind(), "message");
    /// assert!(failure.as_error().is_none());
    /// ```
    pub fn msg<M>(message: M) -> Self
    where
        M: Display,
    {
        Self { kind: MESSAGE_KIND, message: render(&message), source: None }
    }

    /// Converts a panic payload (as returned by `std::panic::catch_unwind`) into a failure.
    ///
    /// String payloads become the message; anything else is reported as an opaque panic.
    #[cfg(feature = "std")]
    pub fn from_panic(payload: Box<dyn core::any::Any + Send + 'static>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => String::from(*message),
                None => String::from("Box<dyn Any>"),
            },
        };
        Self { kind: PANIC_KIND, message, source: None }
    }

    /// Type name of the original error, or `"message"` / `"panic"`.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rendered message of the original failure.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this failure came from a captured panic.
    #[must_use]
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == PANIC_KIND
    }

    /// Returns `true` if the original error is of type `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.as_error().is_some_and(|source| source.is::<E>())
    }

    /// Borrows the original error as `E`, if that is what was captured.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.as_error().and_then(|source| source.downcast_ref::<E>())
    }

    /// Recovers the original error by value.
    ///
    /// Returns the failure unchanged when it does not hold an `E`, or when a clone
    /// of this failure still shares the error.
    ///
    /// ```
    /// use monad_rail::Failure;
    /// use std::fmt;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Timeout;
    /// impl fmt::Display for Timeout {
    ///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    ///         f.write_str("timed out")
    ///     }
    /// }
    /// impl std::error::Error for Timeout {}
    ///
    /// let failure = Failure::new(Timeout);
    /// assert_eq!(failure.downcast::<Timeout>().ok(), Some(Timeout));
    /// ```
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        if !self.is::<E>() {
            return Err(self);
        }
        let Self { kind, message, source } = self;
        match source.map(Arc::try_unwrap) {
            Some(Ok(boxed)) => match boxed.downcast::<E>() {
                Ok(error) => Ok(*error),
                Err(boxed) => Err(Self { kind, message, source: Some(Arc::new(boxed)) }),
            },
            Some(Err(shared)) => Err(Self { kind, message, source: Some(shared) }),
            None => Err(Self { kind, message, source: None }),
        }
    }

    /// Borrows the original error object, if the failure was built from one.
    #[must_use]
    #[inline]
    pub fn as_error(&self) -> Option<&DynError> {
        self.source.as_deref().map(|boxed| &**boxed)
    }

    /// Consumes the failure, returning the original error object.
    ///
    /// Gives the failure back when it was not built from an error, or when a clone
    /// still shares the error.
    pub fn into_error(self) -> Result<Box<DynError>, Self> {
        let Self { kind, message, source } = self;
        match source.map(Arc::try_unwrap) {
            Some(Ok(boxed)) => Ok(boxed),
            Some(Err(shared)) => Err(Self { kind, message, source: Some(shared) }),
            None => Err(Self { kind, message, source: None }),
        }
    }
}

fn render<D: Display + ?Sized>(value: &D) -> String {
    let mut rendered = String::new();
    let _ = write!(rendered, "{}", value);
    rendered
}

impl<E> From<E> for Failure
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Failure {}

impl Hash for Failure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}
