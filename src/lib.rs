//! # setkit
//!
//! Generic hash sets with full set algebra, in two variants.
//!
//! ## Overview
//!
//! - [`Set`]: an unsynchronized hash set. Mutation takes `&mut self`, so it is
//!   meant for single-threaded use or for callers that already hold a lock.
//! - [`ConcurrentSet`]: the same operations behind one exclusive lock per
//!   instance, callable through `&self` from many threads. Two-set operations
//!   lock both operands in a global order and cannot deadlock against a
//!   reversed call.
//!
//! Both variants support union, intersection, difference, symmetric
//! difference, the subset/superset/disjoint/equality predicates and the
//! functional helpers `filter`, `map`, `fold`, `reduce`, `any`, `all` and
//! `for_each`. Binary operations always return a new set.
//!
//! ## Feature Flags
//!
//! - `concurrent` (default): [`ConcurrentSet`], backed by `parking_lot`
//! - `serde`: `Serialize`/`Deserialize` for both set types
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as [`DefaultHashBuilder`]
//! - `ahash`: use `ahash::RandomState` as [`DefaultHashBuilder`]
//! - `loom`: model-checkable locking for `loom` tests
//! - `full`: `concurrent` and `serde`
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let set_a: Set<i32> = (10..20).collect();
//! let set_b: Set<i32> = (10..30).collect();
//!
//! assert_eq!(set_a.intersection(&set_b), set_a);
//! assert_eq!(set_a.union(&set_b), set_b);
//! assert!(set_a.difference(&set_b).is_empty());
//! assert_eq!(set_b.difference(&set_a), (20..30).collect::<Set<i32>>());
//! assert!(set_a.is_subset(&set_b));
//! assert!(!set_b.is_subset(&set_a));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "concurrent")]
    pub use crate::concurrent::ConcurrentSet;
    pub use crate::hashing::DefaultHashBuilder;
    pub use crate::set::Set;
}

pub mod hashing;
pub mod set;

#[cfg(feature = "concurrent")]
pub mod concurrent;

#[cfg(feature = "concurrent")]
mod sync;

#[cfg(feature = "concurrent")]
pub use concurrent::ConcurrentSet;
pub use hashing::DefaultHashBuilder;
pub use set::{Set, SetIntoIterator, SetIterator};
