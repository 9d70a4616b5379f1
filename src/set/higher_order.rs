//! Higher-order operations: transform, filter, fold and element tests.

use std::hash::{BuildHasher, Hash};

use super::EnhancedSet;
use crate::error::{EmptyAccumulatorError, Result};
use crate::sequence::{Filter, Transform};

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> EnhancedSet<T, S> {
    /// Returns a new set holding `function(e, e, self)` for every element
    /// `e`, in iteration order.
    ///
    /// Results that compare equal collapse into one element; the first
    /// occurrence keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// let squares = set.map(|element, _, _| element * element);
    /// assert_eq!(squares.iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
    ///
    /// let parities = set.map(|element, _, _| element % 2);
    /// assert_eq!(parities.iter().copied().collect::<Vec<_>>(), vec![1, 0]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> EnhancedSet<U, S>
    where
        U: Clone + Eq + Hash,
        F: FnMut(&T, &T, &Self) -> U,
    {
        self.derive(Transform::new(self, function))
    }

    /// [`map`](Self::map) with an explicit context passed to `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// struct Scale {
    ///     factor: i32,
    /// }
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// let scaled = set.map_with_context(&Scale { factor: 2 }, |scale, element, _, _| {
    ///     element * scale.factor
    /// });
    /// assert_eq!(scaled.join(","), "2,4,6");
    /// ```
    #[must_use]
    pub fn map_with_context<C, U, F>(&self, context: &C, mut function: F) -> EnhancedSet<U, S>
    where
        C: ?Sized,
        U: Clone + Eq + Hash,
        F: FnMut(&C, &T, &T, &Self) -> U,
    {
        self.map(|value, key, set| function(context, value, key, set))
    }

    /// Returns a new set of the elements `e` for which `predicate(e, e, self)`
    /// holds, in iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3, 4]);
    /// let even = set.filter(|element, _, _| element % 2 == 0);
    /// assert_eq!(even.join(","), "2,4");
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T, &T, &Self) -> bool,
    {
        self.derive(Filter::new(self, predicate).cloned())
    }

    /// [`filter`](Self::filter) with an explicit context passed to
    /// `predicate`.
    #[must_use]
    pub fn filter_with_context<C, P>(&self, context: &C, mut predicate: P) -> Self
    where
        C: ?Sized,
        P: FnMut(&C, &T, &T, &Self) -> bool,
    {
        self.filter(|value, key, set| predicate(context, value, key, set))
    }

    /// Folds the elements in iteration order, seeding the accumulator with
    /// the first element.
    ///
    /// `function` receives `(accumulator, e, e, self)` for every element
    /// after the first.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptyAccumulator`](crate::SetError::EmptyAccumulator)
    /// if the set is empty, since there is no value to seed the accumulator
    /// with. Use [`fold`](Self::fold) to supply an initial value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::{EnhancedSet, SetError};
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert_eq!(set.reduce(|accumulator, element, _, _| accumulator + element), Ok(6));
    ///
    /// let empty: EnhancedSet<i32> = EnhancedSet::new();
    /// assert!(matches!(
    ///     empty.reduce(|accumulator, element, _, _| accumulator + element),
    ///     Err(SetError::EmptyAccumulator(_))
    /// ));
    /// ```
    pub fn reduce<F>(&self, mut function: F) -> Result<T>
    where
        F: FnMut(T, &T, &T, &Self) -> T,
    {
        let mut elements = self.iter();
        let Some(seed) = elements.next() else {
            tracing::debug!(operation = "reduce", "rejected reduce over an empty set");
            return Err(EmptyAccumulatorError { operation: "reduce" }.into());
        };
        Ok(elements.fold(seed.clone(), |accumulator, element| {
            function(accumulator, element, element, self)
        }))
    }

    /// [`reduce`](Self::reduce) with an explicit context passed to
    /// `function`.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::EmptyAccumulator`](crate::SetError::EmptyAccumulator)
    /// if the set is empty.
    pub fn reduce_with_context<C, F>(&self, context: &C, mut function: F) -> Result<T>
    where
        C: ?Sized,
        F: FnMut(&C, T, &T, &T, &Self) -> T,
    {
        if self.is_empty() {
            tracing::debug!(
                operation = "reduce_with_context",
                "rejected reduce over an empty set"
            );
            return Err(EmptyAccumulatorError {
                operation: "reduce_with_context",
            }
            .into());
        }
        self.reduce(|accumulator, value, key, set| function(context, accumulator, value, key, set))
    }

    /// Folds every element in iteration order, starting from `initial`.
    ///
    /// An empty set returns `initial` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert_eq!(set.fold(10, |accumulator, element, _, _| accumulator + element), 16);
    ///
    /// let lengths = EnhancedSet::from(["a", "bb"]);
    /// assert_eq!(lengths.fold(0_usize, |total, word, _, _| total + word.len()), 3);
    /// ```
    pub fn fold<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &T, &T, &Self) -> B,
    {
        self.iter().fold(initial, |accumulator, element| {
            function(accumulator, element, element, self)
        })
    }

    /// Returns `true` if `predicate(e, e, self)` holds for every element.
    ///
    /// Stops at the first element that fails. An empty set returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert!(set.every(|element, _, _| *element >= 1));
    /// assert!(!set.every(|element, _, _| *element > 1));
    /// assert!(EnhancedSet::<i32>::new().every(|_, _, _| false));
    /// ```
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, &T, &Self) -> bool,
    {
        self.iter().all(|element| predicate(element, element, self))
    }

    /// [`every`](Self::every) with an explicit context passed to `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let pivot = 2;
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert!(!set.every_with_context(&pivot, |pivot, element, _, _| element < pivot));
    /// ```
    pub fn every_with_context<C, P>(&self, context: &C, mut predicate: P) -> bool
    where
        C: ?Sized,
        P: FnMut(&C, &T, &T, &Self) -> bool,
    {
        self.every(|value, key, set| predicate(context, value, key, set))
    }

    /// Returns `true` if `predicate(e, e, self)` holds for at least one
    /// element.
    ///
    /// Stops at the first element that passes. An empty set returns `false`.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, &T, &Self) -> bool,
    {
        self.iter().any(|element| predicate(element, element, self))
    }

    /// [`some`](Self::some) with an explicit context passed to `predicate`.
    pub fn some_with_context<C, P>(&self, context: &C, mut predicate: P) -> bool
    where
        C: ?Sized,
        P: FnMut(&C, &T, &T, &Self) -> bool,
    {
        self.some(|value, key, set| predicate(context, value, key, set))
    }

    /// Returns the first element, in iteration order, for which
    /// `predicate(e, e, self)` holds, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let set = EnhancedSet::from([1, 2, 3]);
    /// assert_eq!(set.find(|element, _, _| *element > 1), Some(&2));
    /// assert_eq!(set.find(|element, _, _| *element > 3), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T, &T, &Self) -> bool,
    {
        self.iter().find(|&element| predicate(element, element, self))
    }

    /// [`find`](Self::find) with an explicit context passed to `predicate`.
    pub fn find_with_context<C, P>(&self, context: &C, mut predicate: P) -> Option<&T>
    where
        C: ?Sized,
        P: FnMut(&C, &T, &T, &Self) -> bool,
    {
        self.find(|value, key, set| predicate(context, value, key, set))
    }
}
