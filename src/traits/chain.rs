use crate::types::{Encapsulate, List, Maybe, Monad, Nomad};

/// Uniform infallible mapping over every container in this crate.
///
/// Each container already exposes its own `bind` with a step shape that suits it
/// (`Option` for [`Maybe`], `Result` for [`Encapsulate`]). `Chain` is the common
/// denominator: a plain `Item -> U` step, applied the way the container applies
/// steps (once, per element, or skipped after an absence or failure).
///
/// # Associated Types
///
/// * `Item` - The value a step receives
/// * `Output<U>` - The same container holding `U` instead
///
/// # Examples
///
/// ```
/// use monad_rail::traits::Chain;
/// use monad_rail::{List, Maybe, Monad};
///
/// fn double<C: Chain<Item = i32>>(container: C) -> C::Output<i32> {
///     container.chain(|x| x * 2)
/// }
///
/// assert_eq!(double(Monad::new(21)), Monad::new(42));
/// assert_eq!(double(Maybe::<i32>::none()), Maybe::none());
/// assert_eq!(double(List::new([1, 2])).unwrap(), vec![2, 4]);
/// ```
pub trait Chain: Sized {
    type Item;

    type Output<U>;

    /// Applies `f` to the contained value(s), producing a new container.
    fn chain<U, F>(self, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Item) -> U;
}

impl<T> Chain for Monad<T> {
    type Item = T;
    type Output<U> = Monad<U>;

    #[inline]
    fn chain<U, F>(self, f: F) -> Monad<U>
    where
        F: FnMut(T) -> U,
    {
        self.bind(f)
    }
}

impl<T, E> Chain for Encapsulate<T, E> {
    type Item = T;
    type Output<U> = Encapsulate<U, E>;

    #[inline]
    fn chain<U, F>(self, f: F) -> Encapsulate<U, E>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Chain for Maybe<T> {
    type Item = T;
    type Output<U> = Maybe<U>;

    #[inline]
    fn chain<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}

impl<T> Chain for List<T> {
    type Item = T;
    type Output<U> = List<U>;

    #[inline]
    fn chain<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        self.bind(f)
    }
}

impl<T, E> Chain for Nomad<T, E> {
    type Item = T;
    type Output<U> = Nomad<U, E>;

    #[inline]
    fn chain<U, F>(self, f: F) -> Nomad<U, E>
    where
        F: FnMut(T) -> U,
    {
        self.map(f)
    }
}
