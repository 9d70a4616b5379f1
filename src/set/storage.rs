//! Insertion-ordered unique storage with automatic state transitions.
//!
//! [`InsertionOrderedStorage`] backs every [`EnhancedSet`](super::EnhancedSet).
//! It switches between three representations depending on its size:
//!
//! - `Empty`: no elements
//! - `Small`: up to 8 elements inline in a `SmallVec`, found by linear scan
//! - `Large`: a `Vec` holding the insertion order plus a hash index from
//!   element to position
//!
//! # Time Complexity
//!
//! | Operation    | Small (n <= 8) | Large (n > 8) |
//! |--------------|----------------|---------------|
//! | `contains`   | O(n)           | O(1)          |
//! | `insert`     | O(n)           | O(1)*         |
//! | `remove`     | O(n)           | O(n)          |
//! | `remove_all` | O(n * m)       | O(n + m)      |
//! | `len`        | O(1)           | O(1)          |
//! | iteration    | O(n)           | O(n)          |
//!
//! Removal from the `Large` state shifts the survivors so that insertion
//! order is preserved, which costs O(n). `remove_all` drops `m` elements
//! with a single `retain` and one re-index of the survivors.
//!
//! # State Transitions
//!
//! ```text
//!                    insert (n < 8)
//!     Empty ─────────────────────────────► Small
//!       ▲                                    │
//!       │ remove (n == 0)                    │ insert (n == 8)
//!       │                                    ▼
//!       └─────────────── Small ◄──────── Large
//!                     remove (n == 8)
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// The threshold for transitioning between Small and Large states.
/// Storages with more than this many elements keep a hash index.
pub const SMALL_THRESHOLD: usize = 8;

/// Elements in insertion order together with an index of their positions.
#[derive(Clone)]
struct IndexedVec<T, S> {
    entries: Vec<T>,
    positions: HashMap<T, usize, S>,
}

impl<T: Clone + Eq + Hash, S: BuildHasher> IndexedVec<T, S> {
    /// Builds the index over `entries`, which must already be distinct.
    fn from_entries(entries: Vec<T>, hash_builder: S) -> Self {
        let mut positions = HashMap::with_capacity_and_hasher(entries.len(), hash_builder);
        for (position, element) in entries.iter().enumerate() {
            positions.insert(element.clone(), position);
        }
        debug_assert_eq!(
            positions.len(),
            entries.len(),
            "IndexedVec entries must be distinct"
        );
        Self { entries, positions }
    }

    fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    fn insert(&mut self, element: T) -> bool {
        if self.positions.contains_key(&element) {
            return false;
        }
        self.positions.insert(element.clone(), self.entries.len());
        self.entries.push(element);
        true
    }

    fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.positions.remove(element);
        if let Some(position) = removed {
            self.entries.remove(position);
            self.reindex_from(position);
        }
        removed.is_some()
    }

    /// Removes every element of `elements` with one pass over the entries.
    ///
    /// Returns the number of elements removed.
    fn remove_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let before = self.entries.len();
        let mut first_removed = before;
        for element in elements {
            let element: &T = element.borrow();
            if let Some(position) = self.positions.remove::<T>(element) {
                first_removed = first_removed.min(position);
            }
        }
        if first_removed == before {
            return 0;
        }
        let positions = &self.positions;
        self.entries
            .retain(|element| positions.contains_key::<T>(element));
        self.reindex_from(first_removed);
        before - self.entries.len()
    }

    /// Rewrites the index of every entry at or after `start`.
    fn reindex_from(&mut self, start: usize) {
        for (position, element) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.positions.get_mut::<T>(element) {
                *slot = position;
            }
        }
    }
}

/// Internal representation of the storage state.
#[derive(Clone)]
enum StorageInner<T, S> {
    Empty,
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(IndexedVec<T, S>),
}

/// Mutable unique-element storage that remembers insertion order.
#[derive(Clone)]
pub struct InsertionOrderedStorage<T, S> {
    inner: StorageInner<T, S>,
    hash_builder: S,
}

impl<T, S> InsertionOrderedStorage<T, S> {
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            inner: StorageInner::Empty,
            hash_builder,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.inner {
            StorageInner::Empty => 0,
            StorageInner::Small(vec) => vec.len(),
            StorageInner::Large(indexed) => indexed.entries.len(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, StorageInner::Empty)
    }

    /// Elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.inner {
            StorageInner::Empty => &[],
            StorageInner::Small(vec) => vec.as_slice(),
            StorageInner::Large(indexed) => indexed.entries.as_slice(),
        }
    }

    #[inline]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner = StorageInner::Empty;
    }

    pub fn into_vec(self) -> Vec<T> {
        match self.inner {
            StorageInner::Empty => Vec::new(),
            StorageInner::Small(vec) => vec.into_vec(),
            StorageInner::Large(indexed) => indexed.entries,
        }
    }

    #[cfg(test)]
    const fn is_small_state(&self) -> bool {
        matches!(self.inner, StorageInner::Small(_))
    }

    #[cfg(test)]
    const fn is_large_state(&self) -> bool {
        matches!(self.inner, StorageInner::Large(_))
    }
}

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> InsertionOrderedStorage<T, S> {
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.inner {
            StorageInner::Empty => false,
            StorageInner::Small(vec) => vec.iter().any(|item| item.borrow() == element),
            StorageInner::Large(indexed) => indexed.contains(element),
        }
    }

    /// Appends `element` unless an equal element is already stored.
    ///
    /// Returns `true` if the element was added.
    pub fn insert(&mut self, element: T) -> bool {
        match &mut self.inner {
            StorageInner::Empty => {
                let mut vec = SmallVec::new();
                vec.push(element);
                self.inner = StorageInner::Small(vec);
                true
            }
            StorageInner::Small(vec) => {
                if vec.iter().any(|item| item == &element) {
                    return false;
                }
                if vec.len() < SMALL_THRESHOLD {
                    vec.push(element);
                    return true;
                }
                // Transition to Large state: index the existing order
                let mut entries = std::mem::take(vec).into_vec();
                entries.push(element);
                let size = entries.len();
                self.inner = StorageInner::Large(IndexedVec::from_entries(
                    entries,
                    self.hash_builder.clone(),
                ));
                tracing::trace!(from = "small", to = "large", size, "storage promoted");
                true
            }
            StorageInner::Large(indexed) => indexed.insert(element),
        }
    }

    /// Removes the element equal to `element`, keeping the order of the rest.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &mut self.inner {
            StorageInner::Empty => false,
            StorageInner::Small(vec) => {
                let found = vec.iter().position(|item| item.borrow() == element);
                if let Some(position) = found {
                    vec.remove(position);
                    if vec.is_empty() {
                        self.inner = StorageInner::Empty;
                    }
                }
                found.is_some()
            }
            StorageInner::Large(indexed) => {
                if !indexed.remove(element) {
                    return false;
                }
                self.demote_if_small();
                true
            }
        }
    }

    /// Removes every element of `elements` that is present.
    ///
    /// Returns the number of elements removed.
    pub fn remove_all<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        if let StorageInner::Large(indexed) = &mut self.inner {
            let removed = indexed.remove_all(elements);
            self.demote_if_small();
            return removed;
        }
        let mut removed = 0;
        for element in elements {
            let element: &T = element.borrow();
            if self.remove(element) {
                removed += 1;
            }
        }
        removed
    }

    /// Moves a `Large` storage that shrank to the threshold back to `Small`,
    /// or to `Empty` when nothing is left.
    fn demote_if_small(&mut self) {
        let StorageInner::Large(indexed) = &mut self.inner else {
            return;
        };
        let size = indexed.entries.len();
        if size == 0 {
            self.inner = StorageInner::Empty;
        } else if size <= SMALL_THRESHOLD {
            let entries = std::mem::take(&mut indexed.entries);
            self.inner = StorageInner::Small(SmallVec::from_vec(entries));
            tracing::trace!(from = "large", to = "small", size, "storage demoted");
        }
    }
}
