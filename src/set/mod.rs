//! Insertion-ordered set with higher-order operations and set algebra.
//!
//! This module provides [`EnhancedSet`], a mutable set of unique elements
//! that iterates in insertion order and adds the operations a plain set
//! lacks:
//!
//! - Higher-order operations: [`map`](EnhancedSet::map),
//!   [`filter`](EnhancedSet::filter), [`reduce`](EnhancedSet::reduce),
//!   [`fold`](EnhancedSet::fold), [`every`](EnhancedSet::every),
//!   [`some`](EnhancedSet::some), [`find`](EnhancedSet::find)
//! - Set algebra: [`union`](EnhancedSet::union),
//!   [`intersect`](EnhancedSet::intersect),
//!   [`subtract`](EnhancedSet::subtract), [`xor`](EnhancedSet::xor),
//!   [`is_subset_of`](EnhancedSet::is_subset_of),
//!   [`equals`](EnhancedSet::equals)
//! - Chainable bulk mutation: [`update`](EnhancedSet::update),
//!   [`discard`](EnhancedSet::discard)
//!
//! # Callbacks
//!
//! Every callback receives the element twice (as value and as key, for
//! symmetry with map-like collections) followed by the set being processed.
//! Each callback-taking operation also has a `*_with_context` variant that
//! passes an explicit context reference as the first argument.
//!
//! # Examples
//!
//! ```rust
//! use enhanced_set::EnhancedSet;
//!
//! let mut set = EnhancedSet::from([1, 2, 3]);
//! set.update([3, 4]).discard([1]);
//!
//! assert_eq!(set.join_default(), "2,3,4");
//! assert_eq!(set.first(), Some(&2));
//! assert!(set.every(|element, _, _| *element > 1));
//! ```

mod algebra;
mod higher_order;
mod membership;
mod mutation;
mod storage;

pub use membership::Membership;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use crate::hash::DefaultBuildHasher;
use storage::InsertionOrderedStorage;

/// The separator used by [`EnhancedSet::join_default`].
pub const DEFAULT_SEPARATOR: &str = ",";

/// A mutable set of unique elements that iterates in insertion order.
///
/// Uniqueness and membership use the element's natural equality, its
/// `Eq + Hash` implementation. Operations that produce a new set clone the
/// elements they keep and reuse a clone of this set's hasher.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq` and `Hash`.
/// * `S` - The hasher builder, [`DefaultBuildHasher`] unless given.
///
/// # Examples
///
/// ```rust
/// use enhanced_set::EnhancedSet;
///
/// let mut set = EnhancedSet::new();
/// assert!(set.add(3));
/// assert!(set.add(1));
/// assert!(!set.add(3));
///
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
/// ```
#[derive(Clone)]
pub struct EnhancedSet<T, S = DefaultBuildHasher> {
    storage: InsertionOrderedStorage<T, S>,
}

static_assertions::assert_impl_all!(EnhancedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(EnhancedSet<String>: Send, Sync, Clone, Default);

impl<T> EnhancedSet<T, DefaultBuildHasher> {
    /// Creates an empty set using the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set: EnhancedSet<i32> = EnhancedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultBuildHasher::default())
    }
}

impl<T, S> EnhancedSet<T, S> {
    /// Creates an empty set that hashes with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = EnhancedSet::with_hasher(RandomState::new());
    /// set.add("alpha");
    /// assert!(set.has("alpha"));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            storage: InsertionOrderedStorage::with_hasher(hash_builder),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the first element in iteration order, or `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([314, 1]);
    /// assert_eq!(set.first(), Some(&314));
    ///
    /// let empty: EnhancedSet<i32> = EnhancedSet::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.storage.as_slice().first()
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.storage.as_slice().iter(),
        }
    }

    /// Returns the hasher builder of this set.
    #[inline]
    #[must_use]
    pub const fn hasher(&self) -> &S {
        self.storage.hasher()
    }

    /// Removes every element. The hasher is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Concatenates the elements' `Display` forms, separated by `separator`.
    ///
    /// An empty set yields an empty string and a single element is written
    /// without any separator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// assert_eq!(EnhancedSet::from([1, 2, 3]).join("-"), "1-2-3");
    /// assert_eq!(EnhancedSet::from([1]).join("//sep//"), "1");
    /// assert_eq!(EnhancedSet::<i32>::new().join("-"), "");
    /// ```
    #[must_use]
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut joined = String::new();
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&element.to_string());
        }
        joined
    }

    /// Same as [`join`](Self::join) with [`DEFAULT_SEPARATOR`] (`","`).
    #[must_use]
    pub fn join_default(&self) -> String
    where
        T: fmt::Display,
    {
        self.join(DEFAULT_SEPARATOR)
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> EnhancedSet<T, S> {
    /// Builds a set from `elements` with an explicit hasher. Later
    /// duplicates of an element are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let set = EnhancedSet::from_iter_with_hasher([2, 1, 2], RandomState::new());
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn from_iter_with_hasher<I>(elements: I, hash_builder: S) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_hasher(hash_builder);
        for element in elements {
            set.add(element);
        }
        set
    }

    /// Adds `element` at the end of the iteration order.
    ///
    /// Returns `false`, leaving the set unchanged, if an equal element is
    /// already present.
    #[inline]
    pub fn add(&mut self, element: T) -> bool {
        self.storage.insert(element)
    }

    /// Removes the element equal to `element`.
    ///
    /// Returns `true` if an element was removed. The remaining elements keep
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let mut set = EnhancedSet::from(["a".to_string(), "b".to_string()]);
    /// assert!(set.delete("a"));
    /// assert!(!set.delete("a"));
    /// ```
    #[inline]
    pub fn delete<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.remove(element)
    }

    /// Returns `true` if the set contains an element equal to `element`.
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.storage.contains(element)
    }

    /// Builds a new set from `elements`, sharing this set's hasher.
    pub(crate) fn derive<U, I>(&self, elements: I) -> EnhancedSet<U, S>
    where
        U: Clone + Eq + Hash,
        I: IntoIterator<Item = U>,
    {
        EnhancedSet::from_iter_with_hasher(elements, self.hasher().clone())
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// An iterator over the elements of an [`EnhancedSet`] in insertion order.
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.inner.as_slice()).finish()
    }
}

/// An owning iterator over the elements of an [`EnhancedSet`] in insertion
/// order.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Traits
// =============================================================================

impl<T, S: Default> Default for EnhancedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone + Default> FromIterator<T>
    for EnhancedSet<T, S>
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_iter_with_hasher(elements, S::default())
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> Extend<T> for EnhancedSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.update(elements);
    }
}

impl<'a, T: Clone + Eq + Hash + 'a, S: BuildHasher + Clone> Extend<&'a T> for EnhancedSet<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, elements: I) {
        self.update(elements.into_iter().cloned());
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for EnhancedSet<T, DefaultBuildHasher> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for EnhancedSet<T, DefaultBuildHasher> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T, S> IntoIterator for EnhancedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.storage.into_vec().into_iter(),
        }
    }
}

impl<'a, T, S> IntoIterator for &'a EnhancedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Set equality: same elements, regardless of insertion order.
impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> PartialEq for EnhancedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> Eq for EnhancedSet<T, S> {}

impl<T: fmt::Debug, S> fmt::Debug for EnhancedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for EnhancedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}
