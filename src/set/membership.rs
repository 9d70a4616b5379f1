//! Membership abstraction used by the set-algebra operations.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::EnhancedSet;

/// A collection that can answer membership queries and report its size.
///
/// Set-algebra operations on [`EnhancedSet`] accept any `Membership`
/// implementor as their other operand, so an `EnhancedSet` can be compared
/// with or intersected by a standard `HashSet` or `BTreeSet` directly.
///
/// # Examples
///
/// ```rust
/// use enhanced_set::EnhancedSet;
/// use std::collections::HashSet;
///
/// let set = EnhancedSet::from([1, 2, 3]);
/// let native: HashSet<i32> = [3, 2, 1].into_iter().collect();
///
/// assert!(set.equals(&native));
/// assert_eq!(set.intersect(&native).size(), 3);
/// ```
pub trait Membership<T: ?Sized> {
    /// Returns `true` if `element` is a member of the collection.
    fn has_member(&self, element: &T) -> bool;

    /// Returns the number of members.
    fn cardinality(&self) -> usize;
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> Membership<T> for EnhancedSet<T, S> {
    #[inline]
    fn has_member(&self, element: &T) -> bool {
        self.has(element)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.size()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    #[inline]
    fn has_member(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    #[inline]
    fn has_member(&self, element: &T) -> bool {
        self.contains(element)
    }

    #[inline]
    fn cardinality(&self) -> usize {
        self.len()
    }
}
