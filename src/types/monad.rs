use core::fmt::{self, Display};
use core::ops::{Shl, Shr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The plain chaining container.
///
/// `Monad<T>` holds exactly one value. [`bind`](Self::bind) feeds that value to a
/// function and wraps the result in a new `Monad`; nothing is mutated in place.
/// There is no failure handling: a step that panics unwinds straight through the
/// chain to the caller. See [`Encapsulate`](crate::Encapsulate) for the variant
/// that captures failures.
///
/// Two monads are equal when their held values are equal.
///
/// # Examples
///
/// ```
/// use monad_rail::Monad;
///
/// let x = Monad::new(4) >> (|x: i32| x + 6) >> (|x: i32| x - 2);
/// assert_eq!(x, Monad::new(8));
///
/// let loud = Monad::new("hello world!").bind(str::to_uppercase);
/// assert_eq!(loud.to_string(), "Monad(HELLO WORLD!)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash, Default)]
pub struct Monad<T> {
    value: T,
}

impl<T> Monad<T> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies `f` to the held value and wraps the result.
    ///
    /// The `>>` and `<<` operators are aliases for this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_rail::Monad;
    ///
    /// assert_eq!(Monad::new(2).bind(|x| x + 1), Monad::new(3));
    /// assert_eq!(Monad::new(2) << (|x: i32| x + 1), Monad::new(3));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Monad<U>
    where
        F: FnOnce(T) -> U,
    {
        Monad::new(f(self.value))
    }

    /// Borrows the held value.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the held value without the wrapper.
    #[must_use]
    #[inline]
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Alias for [`unwrap`](Self::unwrap).
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, U, F> Shr<F> for Monad<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Monad<U>;

    #[inline]
    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, U, F> Shl<F> for Monad<T>
where
    F: FnOnce(T) -> U,
{
    type Output = Monad<U>;

    #[inline]
    fn shl(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T> From<T> for Monad<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Display> Display for Monad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monad({})", self.value)
    }
}
