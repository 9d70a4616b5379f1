//! Set-algebra operations.
//!
//! Operations that only test membership of the other operand accept any
//! [`Membership`] implementor. Operations that also iterate the other
//! operand (`union`, `union_all`, `symmetric_diff`, `xor`,
//! `is_superset_of`) additionally need `&O: IntoIterator<Item = &T>`.

use std::hash::{BuildHasher, Hash};

use super::{EnhancedSet, Membership};
use crate::sequence::{Difference, SymmetricDifference, Union};

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> EnhancedSet<T, S> {
    /// Returns `self ∪ other`: this set's elements in their order, followed
    /// by the elements of `other` not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let left = EnhancedSet::from([1, 2, 3]);
    /// let right = EnhancedSet::from([2, 3, 4, 5]);
    /// assert_eq!(left.union(&right).join(","), "1,2,3,4,5");
    /// ```
    #[must_use]
    pub fn union<'a, O>(&'a self, other: &'a O) -> Self
    where
        O: ?Sized,
        &'a O: IntoIterator<Item = &'a T>,
    {
        self.derive(Union::new(self.iter(), other.into_iter()).cloned())
    }

    /// Returns the union of this set with every collection in `others`, in
    /// argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// let others = [EnhancedSet::from([2, 3, 4, 5]), EnhancedSet::from([6, 7])];
    /// assert_eq!(set.union_all(&others).join(","), "1,2,3,4,5,6,7");
    /// ```
    #[must_use]
    pub fn union_all<'a, I, O>(&'a self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a O>,
        O: ?Sized + 'a,
        &'a O: IntoIterator<Item = &'a T>,
    {
        self.derive(Union::new(self.iter(), others.into_iter().flatten()).cloned())
    }

    /// Returns the elements of this set that are members of `other`, in this
    /// set's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let left = EnhancedSet::from([1, 2, 3]);
    /// let right = EnhancedSet::from([5, 3, 2, 4]);
    /// assert_eq!(left.intersect(&right).join(","), "2,3");
    /// ```
    #[must_use]
    pub fn intersect<M>(&self, other: &M) -> Self
    where
        M: Membership<T> + ?Sized,
    {
        self.filter(|element, _, _| other.has_member(element))
    }

    /// Returns `self − other`: the elements of this set that are not members
    /// of `other`, in this set's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let left = EnhancedSet::from([1, 2, 3]);
    /// let right = EnhancedSet::from([2, 3, 4, 5]);
    /// assert_eq!(left.subtract(&right).join(","), "1");
    /// ```
    #[must_use]
    pub fn subtract<M>(&self, other: &M) -> Self
    where
        M: Membership<T> + ?Sized,
    {
        self.derive(Difference::new(self.iter(), other).cloned())
    }

    /// Returns the elements that belong to exactly one of the two operands:
    /// `self − other` in this set's order, then `other − self` in the
    /// other's order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let left = EnhancedSet::from([1, 2, 3]);
    /// let right = EnhancedSet::from([2, 3, 4, 5]);
    /// assert_eq!(left.symmetric_diff(&right).join(","), "1,4,5");
    /// ```
    #[must_use]
    pub fn symmetric_diff<'a, O>(&'a self, other: &'a O) -> Self
    where
        O: Membership<T> + ?Sized,
        &'a O: IntoIterator<Item = &'a T>,
    {
        self.derive(SymmetricDifference::new(self, other).cloned())
    }

    /// Alias of [`symmetric_diff`](Self::symmetric_diff).
    #[inline]
    #[must_use]
    pub fn xor<'a, O>(&'a self, other: &'a O) -> Self
    where
        O: Membership<T> + ?Sized,
        &'a O: IntoIterator<Item = &'a T>,
    {
        self.symmetric_diff(other)
    }

    /// Returns `true` if every element of this set is a member of `other`.
    ///
    /// The empty set is a subset of every set, itself included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert!(set.is_subset_of(&set));
    /// assert!(!set.is_subset_of(&EnhancedSet::from([2, 3, 4, 5])));
    /// assert!(EnhancedSet::<i32>::new().is_subset_of(&set));
    /// ```
    pub fn is_subset_of<M>(&self, other: &M) -> bool
    where
        M: Membership<T> + ?Sized,
    {
        self.every(|element, _, _| other.has_member(element))
    }

    /// Returns `true` if every member of `other` is an element of this set.
    pub fn is_superset_of<'a, O>(&self, other: &'a O) -> bool
    where
        T: 'a,
        O: ?Sized,
        &'a O: IntoIterator<Item = &'a T>,
    {
        other.into_iter().all(|element| self.has(element))
    }

    /// Returns `true` if no element of this set is a member of `other`.
    pub fn is_disjoint_from<M>(&self, other: &M) -> bool
    where
        M: Membership<T> + ?Sized,
    {
        !self.some(|element, _, _| other.has_member(element))
    }

    /// Returns `true` if this set and `other` contain the same elements,
    /// regardless of order.
    ///
    /// Sizes are compared first; the element-wise subset test only runs when
    /// they match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert!(set.equals(&EnhancedSet::from([3, 1, 2])));
    /// assert!(!set.equals(&EnhancedSet::from([2, 4, 6])));
    /// assert!(!set.equals(&EnhancedSet::from([2, 3, 4, 5])));
    /// ```
    pub fn equals<M>(&self, other: &M) -> bool
    where
        M: Membership<T> + ?Sized,
    {
        self.size() == other.cardinality() && self.is_subset_of(other)
    }
}
