use core::fmt::{self, Display};
use core::ops::{Shl, Shr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Container for a value that may be absent.
///
/// Steps are written as if they always receive a value. Once the value is
/// absent, every later step is skipped and the chain stays empty.
///
/// # Examples
///
/// ```
/// use monad_rail::Maybe;
///
/// let parsed =
///     Maybe::some("42") >> (|s: &str| s.parse::<i32>().ok()) >> (|n: i32| n.checked_mul(2));
/// assert_eq!(parsed.unwrap(), Some(84));
///
/// let skipped = Maybe::<i32>::none().map(|x| x + 4);
/// assert!(skipped.is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    /// Wraps a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty container.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Applies a step that may itself produce no value.
    ///
    /// `f` is only called when a value is present. The `>>` and `<<` operators
    /// are aliases for this method.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Maybe { value: self.value.and_then(f) }
    }

    /// Applies a step that always produces a value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe { value: self.value.map(f) }
    }

    /// Returns the held value, if any.
    #[must_use]
    #[inline]
    pub fn unwrap(self) -> Option<T> {
        self.value
    }

    /// Returns the held value, or `default` if the chain is empty.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Borrows the held value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    #[inline]
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    #[must_use]
    #[inline]
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T, U, F> Shr<F> for Maybe<T>
where
    F: FnOnce(T) -> Option<U>,
{
    type Output = Maybe<U>;

    #[inline]
    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, U, F> Shl<F> for Maybe<T>
where
    F: FnOnce(T) -> Option<U>,
{
    type Output = Maybe<U>;

    #[inline]
    fn shl(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Maybe({})", value),
            None => f.write_str("Maybe(None)"),
        }
    }
}
