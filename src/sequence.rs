//! Lazy sequences behind the transforming set operations.
//!
//! Each adapter here produces its elements one at a time while it is being
//! iterated; nothing is buffered. The transforming operations of
//! [`EnhancedSet`] build one of these sequences and drain it straight into
//! the new set, whose insertion logic removes any duplicates the sequence
//! produced.
//!
//! | Sequence                | Yields                                              |
//! |-------------------------|-----------------------------------------------------|
//! | [`Transform`]           | `function(e, e, source)` for each `e` of `source`   |
//! | [`Filter`]              | each `e` of `source` where `predicate(e, e, source)`|
//! | [`Union`]               | everything from the first sequence, then the second |
//! | [`Difference`]          | each item of a sequence not in an excluded set      |
//! | [`SymmetricDifference`] | `A - B` followed by `B - A`                         |
//!
//! All sequences borrow their sources, so a source cannot be mutated while
//! a sequence derived from it is alive.
//!
//! # Examples
//!
//! ```rust
//! use enhanced_set::EnhancedSet;
//! use enhanced_set::sequence::{Difference, Union};
//!
//! let left = EnhancedSet::from([1, 2, 3]);
//! let right = EnhancedSet::from([2, 3, 4]);
//!
//! let union: Vec<&i32> = Union::new(left.iter(), right.iter()).collect();
//! assert_eq!(union, vec![&1, &2, &3, &2, &3, &4]);
//!
//! let difference: Vec<&i32> = Difference::new(right.iter(), &left).collect();
//! assert_eq!(difference, vec![&4]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::set::{EnhancedSet, Iter, Membership};

// =============================================================================
// Transform
// =============================================================================

/// Applies a function to every element of a set, in iteration order.
///
/// Created by [`EnhancedSet::map`].
pub struct Transform<'a, T, S, F> {
    source: &'a EnhancedSet<T, S>,
    elements: Iter<'a, T>,
    function: F,
}

impl<'a, T, S, F> Transform<'a, T, S, F> {
    /// Creates a sequence of `function(e, e, source)` over `source`.
    pub fn new(source: &'a EnhancedSet<T, S>, function: F) -> Self {
        Self {
            source,
            elements: source.iter(),
            function,
        }
    }
}

impl<'a, T, S, U, F> Iterator for Transform<'a, T, S, F>
where
    F: FnMut(&'a T, &'a T, &'a EnhancedSet<T, S>) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let element = self.elements.next()?;
        Some((self.function)(element, element, self.source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<'a, T, S, U, F> ExactSizeIterator for Transform<'a, T, S, F> where
    F: FnMut(&'a T, &'a T, &'a EnhancedSet<T, S>) -> U
{
}

impl<'a, T, S, U, F> FusedIterator for Transform<'a, T, S, F> where
    F: FnMut(&'a T, &'a T, &'a EnhancedSet<T, S>) -> U
{
}

impl<T: fmt::Debug, S, F> fmt::Debug for Transform<'_, T, S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Transform")
            .field("remaining", &self.elements)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Yields the elements of a set that satisfy a predicate, in iteration order.
///
/// Created by [`EnhancedSet::filter`] and [`EnhancedSet::intersect`].
pub struct Filter<'a, T, S, P> {
    source: &'a EnhancedSet<T, S>,
    elements: Iter<'a, T>,
    predicate: P,
}

impl<'a, T, S, P> Filter<'a, T, S, P> {
    /// Creates a sequence of the elements `e` of `source` for which
    /// `predicate(e, e, source)` holds.
    pub fn new(source: &'a EnhancedSet<T, S>, predicate: P) -> Self {
        Self {
            source,
            elements: source.iter(),
            predicate,
        }
    }
}

impl<'a, T, S, P> Iterator for Filter<'a, T, S, P>
where
    P: FnMut(&'a T, &'a T, &'a EnhancedSet<T, S>) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let source = self.source;
        let predicate = &mut self.predicate;
        self.elements
            .find(|&element| predicate(element, element, source))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

impl<'a, T, S, P> FusedIterator for Filter<'a, T, S, P> where
    P: FnMut(&'a T, &'a T, &'a EnhancedSet<T, S>) -> bool
{
}

impl<T: fmt::Debug, S, P> fmt::Debug for Filter<'_, T, S, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("remaining", &self.elements)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Union
// =============================================================================

/// Yields every item of the first sequence, then every item of the second.
///
/// Items present in both are yielded twice; deduplication is left to the
/// set that consumes the sequence.
///
/// Created by [`EnhancedSet::union`], [`EnhancedSet::union_all`] and, as
/// part of [`SymmetricDifference`], by [`EnhancedSet::xor`].
#[derive(Debug, Clone)]
pub struct Union<A, B> {
    first: Option<A>,
    second: B,
}

impl<A, B> Union<A, B> {
    /// Creates a sequence of `first` followed by `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }
}

impl<A, B> Iterator for Union<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.as_mut() {
            let item = first.next();
            if item.is_some() {
                return item;
            }
            self.first = None;
        }
        self.second.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (second_lower, second_upper) = self.second.size_hint();
        match &self.first {
            None => (second_lower, second_upper),
            Some(first) => {
                let (first_lower, first_upper) = first.size_hint();
                let upper = match (first_upper, second_upper) {
                    (Some(first_upper), Some(second_upper)) => first_upper.checked_add(second_upper),
                    _ => None,
                };
                (first_lower.saturating_add(second_lower), upper)
            }
        }
    }
}

impl<A, B> FusedIterator for Union<A, B>
where
    A: Iterator,
    B: FusedIterator<Item = A::Item>,
{
}

// =============================================================================
// Difference
// =============================================================================

/// Yields the items of a sequence that are not members of an excluded
/// collection, in the sequence's order.
///
/// Created by [`EnhancedSet::subtract`] and, as part of
/// [`SymmetricDifference`], by [`EnhancedSet::xor`].
pub struct Difference<'a, I, M: ?Sized> {
    elements: I,
    excluded: &'a M,
}

impl<'a, I, M: ?Sized> Difference<'a, I, M> {
    /// Creates a sequence of the items of `elements` not in `excluded`.
    pub const fn new(elements: I, excluded: &'a M) -> Self {
        Self { elements, excluded }
    }
}

impl<'a, T, I, M> Iterator for Difference<'a, I, M>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    M: Membership<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let excluded = self.excluded;
        self.elements
            .find(|&element| !excluded.has_member(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.elements.size_hint().1)
    }
}

impl<'a, T, I, M> FusedIterator for Difference<'a, I, M>
where
    T: 'a,
    I: FusedIterator<Item = &'a T>,
    M: Membership<T> + ?Sized,
{
}

impl<I: fmt::Debug, M: ?Sized> fmt::Debug for Difference<'_, I, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Difference")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// SymmetricDifference
// =============================================================================

/// Yields the elements of a set missing from another collection, followed by
/// the elements of that collection missing from the set.
///
/// Composed as `Union(Difference(A, B), Difference(B, A))`.
///
/// Created by [`EnhancedSet::symmetric_diff`] and [`EnhancedSet::xor`].
pub struct SymmetricDifference<'a, T, S, O>
where
    O: ?Sized,
    &'a O: IntoIterator,
{
    inner: SymmetricDifferenceInner<'a, T, S, O>,
}

/// `source - other` chained with `other - source`.
type SymmetricDifferenceInner<'a, T, S, O> = Union<
    Difference<'a, Iter<'a, T>, O>,
    Difference<'a, <&'a O as IntoIterator>::IntoIter, EnhancedSet<T, S>>,
>;

impl<'a, T, S, O> SymmetricDifference<'a, T, S, O>
where
    O: ?Sized,
    &'a O: IntoIterator<Item = &'a T>,
{
    /// Creates the sequence `source - other` followed by `other - source`.
    pub fn new(source: &'a EnhancedSet<T, S>, other: &'a O) -> Self {
        Self {
            inner: Union::new(
                Difference::new(source.iter(), other),
                Difference::new(other.into_iter(), source),
            ),
        }
    }
}

impl<'a, T, S, O> Iterator for SymmetricDifference<'a, T, S, O>
where
    T: 'a,
    O: Membership<T> + ?Sized,
    &'a O: IntoIterator<Item = &'a T>,
    EnhancedSet<T, S>: Membership<T>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T, S, O> FusedIterator for SymmetricDifference<'a, T, S, O>
where
    T: 'a,
    O: Membership<T> + ?Sized,
    &'a O: IntoIterator<Item = &'a T>,
    <&'a O as IntoIterator>::IntoIter: FusedIterator,
    EnhancedSet<T, S>: Membership<T>,
{
}

impl<'a, T, S, O> fmt::Debug for SymmetricDifference<'a, T, S, O>
where
    T: fmt::Debug,
    O: ?Sized,
    &'a O: IntoIterator,
    <&'a O as IntoIterator>::IntoIter: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SymmetricDifference")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_transform_passes_element_twice_and_source() {
        let set = EnhancedSet::from([1, 2, 3]);
        let yielded: Vec<(i32, i32, usize)> =
            Transform::new(&set, |value: &i32, key: &i32, source: &EnhancedSet<i32>| {
                (*value, *key, source.size())
            })
            .collect();
        assert_eq!(yielded, vec![(1, 1, 3), (2, 2, 3), (3, 3, 3)]);
    }

    #[rstest]
    fn test_transform_is_lazy() {
        let set = EnhancedSet::from([1, 2, 3]);
        let calls = Cell::new(0);
        let mut sequence = Transform::new(&set, |value: &i32, _: &i32, _: &EnhancedSet<i32>| {
            calls.set(calls.get() + 1);
            value * 10
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some(10));
        assert_eq!(calls.get(), 1);
        assert_eq!(sequence.len(), 2);
    }

    #[rstest]
    fn test_filter_yields_matching_elements_in_order() {
        let set = EnhancedSet::from([5, 2, 8, 1]);
        let yielded: Vec<&i32> =
            Filter::new(&set, |value: &i32, _: &i32, _: &EnhancedSet<i32>| *value > 1).collect();
        assert_eq!(yielded, vec![&5, &2, &8]);
    }

    #[rstest]
    fn test_union_does_not_deduplicate() {
        let first = [1, 2];
        let second = [2, 3];
        let yielded: Vec<&i32> = Union::new(first.iter(), second.iter()).collect();
        assert_eq!(yielded, vec![&1, &2, &2, &3]);
    }

    #[rstest]
    fn test_union_size_hint() {
        let first = [1, 2];
        let second = [2, 3, 4];
        let mut union = Union::new(first.iter(), second.iter());
        assert_eq!(union.size_hint(), (5, Some(5)));
        union.next();
        union.next();
        union.next();
        assert_eq!(union.size_hint(), (2, Some(2)));
    }

    #[rstest]
    fn test_difference_uses_membership_of_excluded() {
        let source = EnhancedSet::from([1, 2, 3, 4]);
        let excluded = EnhancedSet::from([2, 4, 6]);
        let yielded: Vec<&i32> = Difference::new(source.iter(), &excluded).collect();
        assert_eq!(yielded, vec![&1, &3]);
    }

    #[rstest]
    fn test_symmetric_difference_orders_left_then_right() {
        let left = EnhancedSet::from([1, 2, 3]);
        let right = EnhancedSet::from([2, 3, 4, 5]);
        let yielded: Vec<&i32> = SymmetricDifference::new(&left, &right).collect();
        assert_eq!(yielded, vec![&1, &4, &5]);
    }

    #[rstest]
    fn test_symmetric_difference_is_fused_and_debuggable() {
        fn assert_fused<I: FusedIterator>(_: &I) {}

        let left = EnhancedSet::from([1, 2]);
        let right = EnhancedSet::from([2, 3]);
        let mut sequence = SymmetricDifference::new(&left, &right);
        assert_fused(&sequence);
        assert!(format!("{sequence:?}").starts_with("SymmetricDifference"));

        assert_eq!(sequence.next(), Some(&1));
        assert_eq!(sequence.next(), Some(&3));
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[rstest]
    fn test_sequences_over_empty_sets_are_empty() {
        let empty: EnhancedSet<i32> = EnhancedSet::new();
        let other = EnhancedSet::from([1]);
        assert_eq!(Difference::new(empty.iter(), &other).count(), 0);
        assert_eq!(SymmetricDifference::new(&empty, &empty).count(), 0);
        assert_eq!(
            SymmetricDifference::new(&empty, &other).collect::<Vec<_>>(),
            vec![&1]
        );
    }
}
