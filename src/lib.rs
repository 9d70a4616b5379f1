//! # enhanced-set
//!
//! An insertion-ordered set that adds higher-order combinators and set
//! algebra on top of a plain unique-element collection.
//!
//! ## Overview
//!
//! - **Base operations**: `add`, `delete`, `has`, `clear`, `size`, iteration
//!   in insertion order
//! - **Higher-order operations**: `map`, `filter`, `reduce`, `fold`, `every`,
//!   `some`, `find`, each with a `*_with_context` variant
//! - **Set algebra**: `union`, `union_all`, `intersect`, `subtract`,
//!   `symmetric_diff` / `xor`, `is_subset_of`, `equals`
//! - **Mutating helpers**: `update`, `discard`, both chainable
//! - **Lazy sequences**: the iterator adapters in [`sequence`] that feed
//!   every transforming operation without intermediate collections
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher (takes
//!   precedence over `fxhash`)
//!
//! ## Example
//!
//! ```rust
//! use enhanced_set::prelude::*;
//!
//! let left = EnhancedSet::from([1, 2, 3]);
//! let right = EnhancedSet::from([2, 3, 4, 5]);
//!
//! let squares = left.map(|element, _, _| element * element);
//! assert_eq!(squares.iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
//!
//! assert_eq!(left.xor(&right).join("-"), "1-4-5");
//! assert_eq!(left.reduce(|accumulator, element, _, _| accumulator + element), Ok(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use enhanced_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{EmptyAccumulatorError, SetError};
    pub use crate::hash::DefaultBuildHasher;
    pub use crate::set::{EnhancedSet, Membership};
}

pub mod error;
pub mod hash;
pub mod sequence;
pub mod set;

pub use error::{EmptyAccumulatorError, Result, SetError};
pub use hash::DefaultBuildHasher;
pub use set::{EnhancedSet, IntoIter, Iter, Membership};
