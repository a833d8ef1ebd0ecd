use core::ops::{Shl, Shr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Vec;
use crate::types::ListVec;

/// Container that applies each step to every element of a sequence.
///
/// Steps are written as if they act on a single value; [`bind`](Self::bind)
/// maps them over all elements and collects the results into a new `List`.
///
/// # Examples
///
/// ```
/// use monad_rail::List;
///
/// let x = List::from(vec![1, 3, 7]) >> (|x: i32| x + 1) >> (|x: i32| x / 2);
/// assert_eq!(x.unwrap(), vec![1, 2, 4]);
///
/// let evens = List::new([1, 2, 3, 4]).filter(|x| x % 2 == 0);
/// assert_eq!(evens.unwrap(), vec![2, 4]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct List<T> {
    items: ListVec<T>,
}

impl<T> List<T> {
    /// Collects the given elements into a list.
    #[inline]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self { items: items.into_iter().collect() }
    }

    /// Creates an empty list.
    #[inline]
    pub fn empty() -> Self {
        Self { items: ListVec::new() }
    }

    /// Applies `f` to every element. The `>>` and `<<` operators are aliases.
    #[inline]
    pub fn bind<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        List { items: self.items.into_iter().map(f).collect() }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    #[inline]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self { items: self.items.into_iter().filter(|item| predicate(item)).collect() }
    }

    /// Applies `f` to every element and concatenates the produced sequences.
    ///
    /// ```
    /// use monad_rail::List;
    ///
    /// let pairs = List::new([1, 2]).flat_map(|x| [x, x * 10]);
    /// assert_eq!(pairs.unwrap(), vec![1, 10, 2, 20]);
    /// ```
    #[inline]
    pub fn flat_map<U, I, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> I,
        I: IntoIterator<Item = U>,
    {
        List { items: self.items.into_iter().flat_map(f).collect() }
    }

    /// Returns the elements without the wrapper.
    #[must_use]
    #[inline]
    pub fn unwrap(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// Borrows the elements as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, U, F> Shr<F> for List<T>
where
    F: FnMut(T) -> U,
{
    type Output = List<U>;

    #[inline]
    fn shr(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T, U, F> Shl<F> for List<T>
where
    F: FnMut(T) -> U,
{
    type Output = List<U>;

    #[inline]
    fn shl(self, f: F) -> Self::Output {
        self.bind(f)
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> From<Vec<T>> for List<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self { items: ListVec::from_vec(items) }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
