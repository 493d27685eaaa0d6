//! Hash builder selection.
//!
//! The hasher used by every set in this crate is fixed at compile time by
//! Cargo features:
//!
//! - default: [`std::collections::hash_map::RandomState`] (SipHash, `DoS` resistant)
//! - `fxhash`: `rustc_hash::FxBuildHasher` (fast, deterministic)
//! - `ahash`: `ahash::RandomState` (fast, randomly seeded)
//!
//! When both `fxhash` and `ahash` are enabled, `fxhash` wins.

/// The [`BuildHasher`](std::hash::BuildHasher) backing [`Set`](crate::Set).
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The [`BuildHasher`](std::hash::BuildHasher) backing [`Set`](crate::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The [`BuildHasher`](std::hash::BuildHasher) backing [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

#[cfg(test)]
mod tests {
    use super::DefaultHashBuilder;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_equal_values_equally() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }

    #[cfg(feature = "fxhash")]
    #[rstest]
    fn test_fxhash_is_deterministic_across_builders() {
        let first = DefaultHashBuilder::default();
        let second = DefaultHashBuilder::default();
        assert_eq!(first.hash_one(7_i32), second.hash_one(7_i32));
    }
}
