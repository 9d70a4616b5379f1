//! Default hasher selection.
//!
//! The hasher used by [`EnhancedSet::new`](crate::EnhancedSet::new) is chosen
//! at compile time through feature flags:
//!
//! | Features         | `DefaultBuildHasher`                            |
//! |------------------|-------------------------------------------------|
//! | (none)           | `std::collections::hash_map::RandomState`       |
//! | `fxhash`         | `rustc_hash::FxBuildHasher`                     |
//! | `ahash`          | `ahash::RandomState`                            |
//! | `fxhash + ahash` | `ahash::RandomState`                            |
//!
//! Any other `BuildHasher + Clone` can be supplied explicitly with
//! [`EnhancedSet::with_hasher`](crate::EnhancedSet::with_hasher).

/// The hasher builder used when none is given explicitly.
#[cfg(feature = "ahash")]
pub type DefaultBuildHasher = ahash::RandomState;

/// The hasher builder used when none is given explicitly.
#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub type DefaultBuildHasher = rustc_hash::FxBuildHasher;

/// The hasher builder used when none is given explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultBuildHasher = std::collections::hash_map::RandomState;

static_assertions::assert_impl_all!(
    DefaultBuildHasher: std::hash::BuildHasher,
    Clone,
    Default,
    Send,
    Sync
);
