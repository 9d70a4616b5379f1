//! Chainable bulk mutation.

use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

use super::EnhancedSet;

impl<T: Clone + Eq + Hash, S: BuildHasher + Clone> EnhancedSet<T, S> {
    /// Adds every element of `elements` that is not already present, in
    /// order, and returns `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let mut set = EnhancedSet::from([1, 2, 3]);
    /// set.update([1, 2, 3]).update(vec![4]);
    /// assert_eq!(set.join(","), "1,2,3,4");
    /// ```
    pub fn update<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = 0_usize;
        for element in elements {
            if self.add(element) {
                added += 1;
            }
        }
        tracing::trace!(added, size = self.size(), "update applied");
        self
    }

    /// Removes every element of `elements` that is present and returns
    /// `self` for chaining. Absent elements are ignored.
    ///
    /// Accepts owned elements as well as references to them. A large set
    /// drops all of them in one pass over its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enhanced_set::EnhancedSet;
    ///
    /// let mut set = EnhancedSet::from([1, 2, 3, 4]);
    /// let unwanted = vec![2, 9];
    /// set.discard(&unwanted).discard([4]);
    /// assert_eq!(set.join(","), "1,3");
    /// ```
    pub fn discard<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let removed = self.storage.remove_all(elements);
        tracing::trace!(removed, size = self.size(), "discard applied");
        self
    }
}
