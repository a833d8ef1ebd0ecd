use core::fmt::{self, Display};
use core::ops::{Shl, Shr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::failure::Failure;

/// Chainable container that captures the first failure instead of propagating it.
///
/// `Encapsulate<T, E>` is in one of two states:
///
/// * **ok** - holds a value of type `T`
/// * **failed** - holds the failure `E` produced by an earlier step
///
/// Each call to [`bind`](Self::bind) consumes the container and returns a new one.
/// A step returning `Err` moves the chain into the failed state, and from then on
/// every later step is skipped without being invoked. Chaining never leaves the
/// failed state; only the explicit [`recover`](Self::recover) does.
///
/// `E` defaults to [`Failure`], which accepts any `Error + Send + Sync + 'static`
/// through `?` and keeps the original error for downcasting.
///
/// # Examples
///
/// ```
/// use monad_rail::{Encapsulate, Failure};
///
/// fn checked_div(divisor: i32) -> impl FnOnce(i32) -> Result<i32, Failure> {
///     move |x| x.checked_div(divisor).ok_or_else(|| Failure::msg("division by zero"))
/// }
///
/// let x = Encapsulate::new(4)
///     >> (|x: i32| Ok(x + 6))
///     >> checked_div(0)
///     >> (|x: i32| Ok(x - 2));
///
/// assert!(x.is_failed());
/// assert_eq!(x.value(), None);
/// assert_eq!(x.failure().map(Failure::message), Some("division by zero"));
/// assert_eq!(x.unwrap_or(42), 42);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Encapsulate<T, E = Failure> {
    result: Result<T, E>,
}

impl<T> Encapsulate<T> {
    /// Wraps an initial value, using [`Failure`] as the failure type.
    ///
    /// Use [`Encapsulate::ok`] to pick a different failure type.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { result: Ok(value) }
    }
}

impl<T, E> Encapsulate<T, E> {
    /// Wraps an initial value with an arbitrary failure type.
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// let x = Encapsulate::<i32, &str>::ok(1).bind(|x| Ok(x + 1));
    /// assert_eq!(x.unwrap(), Ok(2));
    /// ```
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { result: Ok(value) }
    }

    /// Creates a container that has already failed.
    #[inline]
    pub fn failed(error: E) -> Self {
        Self { result: Err(error) }
    }

    /// Applies a fallible step to the held value.
    ///
    /// If the container already failed, `f` is not called and the failure is
    /// carried forward. Otherwise `Ok(next)` continues the chain and `Err(error)`
    /// captures `error` as the new failure.
    ///
    /// The `>>` and `<<` operators are aliases for this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// let halved = Encapsulate::<u32, &str>::ok(10)
    ///     .bind(|x| if x % 2 == 0 { Ok(x / 2) } else { Err("odd") });
    /// assert_eq!(halved.value(), Some(&5));
    ///
    /// let odd = halved.bind(|x| if x % 2 == 0 { Ok(x / 2) } else { Err("odd") });
    /// assert_eq!(odd.failure(), Some(&"odd"));
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Encapsulate<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.result {
            Ok(value) => {
                let result = f(value);
                if result.is_err() {
                    trace_captured::<F>();
                }
                Encapsulate { result }
            }
            Err(error) => {
                trace_skipped::<F>();
                Encapsulate::failed(error)
            }
        }
    }

    /// Applies an infallible step to the held value.
    ///
    /// Short-circuits exactly like [`bind`](Self::bind).
    #[inline]
    pub fn map<U, F>(self, f: F) -> Encapsulate<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self.result {
            Ok(value) => Encapsulate::ok(f(value)),
            Err(error) => {
                trace_skipped::<F>();
                Encapsulate::failed(error)
            }
        }
    }

    /// Applies a step that may panic, capturing the panic as a failure.
    ///
    /// This is the bridge for code that signals failure by unwinding, such as
    /// integer division by zero. The panic payload becomes a [`Failure`] of kind
    /// `"panic"`, converted into `E`.
    ///
    /// The process-wide panic hook still runs before the panic is captured.
    ///
    /// # Examples
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    /// use std::hint::black_box;
    ///
    /// let x = Encapsulate::new(4)
    ///     .map(|x| x + 6)
    ///     .bind_catching(|x| x / black_box(0))
    ///     .map(|x| x - 2);
    ///
    /// let failure = x.failure().unwrap();
    /// assert!(failure.is_panic());
    /// assert!(failure.message().contains("divide by zero"));
    /// ```
    #[cfg(feature = "std")]
    pub fn bind_catching<U, F>(self, f: F) -> Encapsulate<U, E>
    where
        F: FnOnce(T) -> U,
        E: From<Failure>,
    {
        match self.result {
            Ok(value) => Encapsulate { result: catch_step::<F, _, _, _>(move || Ok(f(value))) },
            Err(error) => {
                trace_skipped::<F>();
                Encapsulate::failed(error)
            }
        }
    }

    /// Applies a fallible step that may also panic.
    ///
    /// A returned `Err` is captured as in [`bind`](Self::bind); a panic is captured
    /// as in [`bind_catching`](Self::bind_catching).
    ///
    /// ```
    /// use monad_rail::{Encapsulate, Failure};
    ///
    /// fn parse_then_index(s: &str) -> Result<u8, Failure> {
    ///     let index: usize = s.parse()?;
    ///     Ok([1, 2, 3][index])
    /// }
    ///
    /// let parsed = Encapsulate::new("x").try_bind_catching(parse_then_index);
    /// assert!(!parsed.failure().unwrap().is_panic());
    ///
    /// let out_of_bounds = Encapsulate::new("7").try_bind_catching(parse_then_index);
    /// assert!(out_of_bounds.failure().unwrap().is_panic());
    /// ```
    #[cfg(feature = "std")]
    pub fn try_bind_catching<U, F>(self, f: F) -> Encapsulate<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
        E: From<Failure>,
    {
        match self.result {
            Ok(value) => Encapsulate { result: catch_step::<F, _, _, _>(move || f(value)) },
            Err(error) => {
                trace_skipped::<F>();
                Encapsulate::failed(error)
            }
        }
    }

    /// Applies `f`, retrying with `alternative` on the same input if `f` fails.
    ///
    /// The failure of `f` is dropped. If `alternative` fails as well, its failure
    /// is the one captured. Neither step runs once the container has failed.
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// let x = Encapsulate::<i32, &str>::ok(10)
    ///     .bind_or(|x| x.checked_div(0).ok_or("division by zero"), |_| Ok(0));
    /// assert_eq!(x.unwrap(), Ok(0));
    /// ```
    pub fn bind_or<U, F, A>(self, f: F, alternative: A) -> Encapsulate<U, E>
    where
        T: Clone,
        F: FnOnce(T) -> Result<U, E>,
        A: FnOnce(T) -> Result<U, E>,
    {
        match self.result {
            Ok(value) => match f(value.clone()) {
                Ok(next) => Encapsulate::ok(next),
                Err(_) => {
                    trace_retrying::<F>();
                    Encapsulate::ok(value).bind(alternative)
                }
            },
            Err(error) => {
                trace_skipped::<F>();
                Encapsulate::failed(error)
            }
        }
    }

    /// Hands the captured failure to `handler` by reference, then returns the
    /// container unchanged. `handler` is not called while the chain is ok.
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// let mut seen = Vec::new();
    /// let x = Encapsulate::<i32, &str>::failed("offline").inspect_failure(|e| seen.push(*e));
    /// assert!(x.is_failed());
    /// assert_eq!(seen, ["offline"]);
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, handler: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self.result {
            handler(error);
        }
        self
    }

    /// Leaves the failed state by handing the failure to `f`.
    ///
    /// An ok container is returned unchanged without calling `f`.
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// let x = Encapsulate::<i32, &str>::failed("missing").recover(|_| Ok(0));
    /// assert_eq!(x.unwrap(), Ok(0));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Result<T, E>,
    {
        match self.result {
            Ok(value) => Self::ok(value),
            Err(error) => Self { result: f(error) },
        }
    }

    /// Transforms the captured failure, leaving a held value untouched.
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Encapsulate<T, G>
    where
        F: FnOnce(E) -> G,
    {
        Encapsulate { result: self.result.map_err(f) }
    }

    /// Returns the held value, or re-signals the captured failure as `Err`.
    ///
    /// The failure is returned as-is, so its type and message are exactly those
    /// produced by the failing step.
    ///
    /// ```
    /// use monad_rail::Encapsulate;
    ///
    /// assert_eq!(Encapsulate::<i32, &str>::ok(8).unwrap(), Ok(8));
    /// assert_eq!(Encapsulate::<i32, &str>::failed("boom").unwrap(), Err("boom"));
    /// ```
    #[inline]
    pub fn unwrap(self) -> Result<T, E> {
        self.result
    }

    /// Returns the held value, or `default` if the chain failed.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.result.unwrap_or(default)
    }

    /// Returns the held value, or computes one from the failure.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.result.unwrap_or_else(f)
    }

    /// Returns the held value, or `T::default()` if the chain failed.
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.result.unwrap_or_default()
    }

    /// Borrows the held value; `None` once the chain has failed.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Borrows the captured failure, if any.
    #[must_use]
    #[inline]
    pub fn failure(&self) -> Option<&E> {
        self.result.as_ref().err()
    }

    /// Alias for [`failure`](Self::failure).
    #[must_use]
    #[inline]
    pub fn exception(&self) -> Option<&E> {
        self.failure()
    }

    /// Consumes the container, returning the value if there is one.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.result.ok()
    }

    /// Consumes the container, returning the failure if there is one.
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        self.result.err()
    }

    /// Returns `true` while no step has failed.
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` once a step has failed.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        self.result.is_err()
    }

    /// Borrows the underlying tagged result.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &E> {
        self.result.as_ref()
    }
}

#[cfg(feature = "std")]
fn catch_step<F, S, U, E>(step: S) -> Result<U, E>
where
    S: FnOnce() -> Result<U, E>,
    E: From<Failure>,
{
    use std::panic::{catch_unwind, AssertUnwindSafe};

    match catch_unwind(AssertUnwindSafe(step)) {
        Ok(result) => {
            if result.is_err() {
                trace_captured::<F>();
            }
            result
        }
        Err(payload) => {
            let failure = Failure::from_panic(payload);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                step = core::any::type_name::<F>(),
                panic = failure.message(),
                "step panicked, failure captured"
            );
            Err(E::from(failure))
        }
    }
}

#[inline]
fn trace_captured<F>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(step = core::any::type_name::<F>(), "step failed, failure captured");
}

#[inline]
fn trace_retrying<F>() {
    #[cfg(feature = "tracing")]
    tracing::debug!(step = core::any::type_name::<F>(), "step failed, trying alternative");
}

#[inline]
fn trace_skipped<F>() {
    #[cfg(feature = "tracing")]
    tracing::trace!(step = core::any::type_name::<F>(), "step skipped after earlier failure");
}

impl<T, U, E, F> Shr<F> for Encapsulate<T, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Encapsulate<U, E>;

    #[inline]
    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, U, E, F> Shl<F> for Encapsulate<T, E>
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = Encapsulate<U, E>;

    #[inline]
    fn shl(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, E> From<Result<T, E>> for Encapsulate<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self { result }
    }
}

impl<T, E> From<Encapsulate<T, E>> for Result<T, E> {
    #[inline]
    fn from(encapsulate: Encapsulate<T, E>) -> Self {
        encapsulate.result
    }
}

impl<T: Display, E: Display> Display for Encapsulate<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(value) => write!(f, "Encapsulate({})", value),
            Err(error) => write!(f, "Encapsulate({})", error),
        }
    }
}
