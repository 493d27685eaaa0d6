//! Thread-safe hash set guarded by a single lock.
//!
//! This module provides [`ConcurrentSet`], which offers the same operations
//! as [`Set`] through `&self`, so one instance can be shared between threads
//! (typically behind an [`Arc`](std::sync::Arc)).
//!
//! # Locking
//!
//! Each instance owns one mutex around its [`Set`]:
//!
//! - Single-set operations hold the lock for their whole duration.
//! - Two-set operations (`union`, `intersection`, `difference`,
//!   `symmetric_difference`, `is_subset`, `is_superset`, `is_disjoint`,
//!   `is_equal`) hold both locks until the result is complete. The locks are
//!   taken in a global order given by instance address, never
//!   receiver-then-argument, so `a.union(&b)` racing `b.union(&a)` cannot
//!   deadlock.
//! - Combining an instance with itself locks it once.
//! - The set returned by a binary operation is built unlocked and is not
//!   shared with anyone until it is returned.
//!
//! The lock is not re-entrant. Closures passed to `filter`, `map`,
//! `for_each`, `fold`, `reduce`, `any`, `all`, `retain` and `with_lock` run
//! while the lock is held and must not call back into the same instance.
//!
//! # Examples
//!
//! Under the `loom` feature the lock only works inside `loom::model`, so
//! the examples below are skipped there; run the loom suite with
//! `cargo test --features loom --test concurrent_set_loom_tests`.
//!
//! ```rust
//! # #[cfg(not(feature = "loom"))]
//! # {
//! use setkit::ConcurrentSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(ConcurrentSet::new());
//!
//! let handles: Vec<_> = (0..8)
//!     .map(|index| {
//!         let set = Arc::clone(&set);
//!         thread::spawn(move || set.add(index))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert!(handle.join().unwrap());
//! }
//! assert_eq!(set.len(), 8);
//! # }
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ptr;

use tracing::trace;

use crate::set::Set;
use crate::sync::{Mutex, MutexGuard};

// =============================================================================
// ConcurrentSet Definition
// =============================================================================

/// A hash set that serializes every operation behind one exclusive lock.
///
/// Operations on a single instance are linearizable. See the
/// [module documentation](self) for the locking protocol.
///
/// # Examples
///
/// ```rust
/// # #[cfg(not(feature = "loom"))]
/// # {
/// use setkit::ConcurrentSet;
///
/// let set_a: ConcurrentSet<i32> = (10..20).collect();
/// let set_b: ConcurrentSet<i32> = (10..30).collect();
///
/// assert!(set_a.is_subset(&set_b));
/// assert_eq!(set_a.intersection(&set_b).len(), 10);
/// assert_eq!(set_b.difference(&set_a).len(), 10);
/// # }
/// ```
pub struct ConcurrentSet<T> {
    inner: Mutex<Set<T>>,
}

static_assertions::assert_impl_all!(ConcurrentSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(ConcurrentSet<String>: Send, Sync);
static_assertions::assert_not_impl_any!(ConcurrentSet<std::rc::Rc<i32>>: Send, Sync);

/// Guards for the operands of a two-set operation.
enum LockedPair<'a, T> {
    /// Both operands are the same instance.
    Aliased(MutexGuard<'a, Set<T>>),
    Distinct {
        this: MutexGuard<'a, Set<T>>,
        other: MutexGuard<'a, Set<T>>,
    },
}

impl<T> LockedPair<'_, T> {
    /// Returns `(receiver, argument)` regardless of acquisition order.
    fn sets(&self) -> (&Set<T>, &Set<T>) {
        match self {
            Self::Aliased(guard) => (&**guard, &**guard),
            Self::Distinct { this, other } => (&**this, &**other),
        }
    }
}

impl<T> ConcurrentSet<T> {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::from_set(Set::new())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_set(Set::with_capacity(capacity))
    }

    /// Wraps an existing [`Set`].
    #[must_use]
    pub fn from_set(set: Set<T>) -> Self {
        Self {
            inner: Mutex::new(set),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes every element.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Runs `function` with exclusive access to the underlying [`Set`].
    ///
    /// Use this to compose several steps into one atomic update.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(not(feature = "loom"))]
    /// # {
    /// use setkit::ConcurrentSet;
    ///
    /// let set: ConcurrentSet<i32> = [1, 2].into_iter().collect();
    /// let moved = set.with_lock(|inner| inner.remove(&1) && inner.add(10));
    /// assert!(moved);
    /// assert!(set.contains(&10));
    /// # }
    /// ```
    pub fn with_lock<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&mut Set<T>) -> R,
    {
        let mut guard = self.lock();
        function(&mut *guard)
    }

    /// Consumes the wrapper and returns the underlying [`Set`].
    #[must_use]
    pub fn into_inner(self) -> Set<T> {
        self.inner.into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, Set<T>> {
        self.inner.lock()
    }

    /// Locks `self` and `other` in address order.
    fn lock_pair<'a>(&'a self, other: &'a Self) -> LockedPair<'a, T> {
        if ptr::eq(self, other) {
            trace!("two-set operation on one instance, locking once");
            return LockedPair::Aliased(self.lock());
        }

        let this_address = ptr::from_ref(self).addr();
        let other_address = ptr::from_ref(other).addr();
        trace!(
            receiver = this_address,
            argument = other_address,
            "acquiring two set locks in address order"
        );

        if this_address < other_address {
            let this = self.lock();
            let other = other.lock();
            LockedPair::Distinct { this, other }
        } else {
            let other = other.lock();
            let this = self.lock();
            LockedPair::Distinct { this, other }
        }
    }
}

impl<T: Hash + Eq> ConcurrentSet<T> {
    /// Adds an element, returning `true` if it was not already present.
    pub fn add(&self, element: T) -> bool {
        self.lock().add(element)
    }

    /// Adds every element of `iter` under one lock acquisition.
    pub fn extend<I>(&self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.lock().extend(iter);
    }

    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(element)
    }

    /// Removes an element, returning `true` if it was present.
    pub fn remove<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().remove(element)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.lock().retain(predicate);
    }

    /// Removes and returns an arbitrary element, or `None` if empty.
    pub fn pop(&self) -> Option<T> {
        self.lock().pop()
    }

    /// Removes and returns an arbitrary element, or `T::default()` if empty.
    ///
    /// See [`Set::pop_or_default`] for the ambiguity this carries.
    pub fn pop_or_default(&self) -> T
    where
        T: Default,
    {
        self.lock().pop_or_default()
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        this.is_subset(other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// Delegates to `other.is_subset(self)`; the address-ordered locking
    /// makes the reversed receiver safe.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        this.is_disjoint(other)
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Both directions are checked under one acquisition of the two locks.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        this.is_equal(other)
    }

    /// Calls `function` on every element while holding the lock.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.lock().for_each(function);
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.lock().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.lock().all(predicate)
    }

    /// Folds every element into an accumulator seeded with `init`.
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.lock().fold(init, function)
    }

    /// Returns a new set holding `function` applied to each element.
    pub fn map<U, F>(&self, function: F) -> ConcurrentSet<U>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        let mapped = self.lock().map(function);
        ConcurrentSet::from_set(mapped)
    }
}

impl<T: Clone + Hash + Eq> ConcurrentSet<T> {
    /// Returns a clone of the stored element equal to `element`, if any.
    #[must_use]
    pub fn get<Q>(&self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().get(element).cloned()
    }

    /// Returns the elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        Self::from_set(this.intersection(other))
    }

    /// Returns the elements present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        Self::from_set(this.union(other))
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        Self::from_set(this.difference(other))
    }

    /// Returns the elements present in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let pair = self.lock_pair(other);
        let (this, other) = pair.sets();
        Self::from_set(this.symmetric_difference(other))
    }

    /// Returns an unsynchronized copy of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Set<T> {
        self.lock().clone()
    }

    /// Returns every element in a `Vec`, in no particular order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.lock().to_vec()
    }

    /// Returns a new set of the elements satisfying `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let filtered = self.lock().filter(predicate);
        Self::from_set(filtered)
    }

    /// Folds every element into an accumulator seeded with `T::default()`.
    pub fn reduce<F>(&self, function: F) -> T
    where
        T: Default,
        F: FnMut(T, T) -> T,
    {
        self.lock().reduce(function)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ConcurrentSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ConcurrentSet<T> {
    fn clone(&self) -> Self {
        Self::from_set(self.lock().clone())
    }
}

impl<T> From<Set<T>> for ConcurrentSet<T> {
    fn from(set: Set<T>) -> Self {
        Self::from_set(set)
    }
}

impl<T: Hash + Eq> From<Vec<T>> for ConcurrentSet<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_set(Set::from(elements))
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for ConcurrentSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_set(Set::from(elements))
    }
}

impl<T: Hash + Eq> FromIterator<T> for ConcurrentSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_set(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq> PartialEq for ConcurrentSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Hash + Eq> Eq for ConcurrentSet<T> {}

impl<T: fmt::Debug> fmt::Debug for ConcurrentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.lock(), formatter)
    }
}

impl<T: fmt::Display> fmt::Display for ConcurrentSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.lock(), formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ConcurrentSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&*self.lock(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ConcurrentSet<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Set<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_set)
    }
}

// =============================================================================
// Tests
// =============================================================================
