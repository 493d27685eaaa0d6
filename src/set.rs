//! Unsynchronized hash set.
//!
//! This module provides [`Set`], a mutable hash set with the full set
//! algebra (union, intersection, difference, symmetric difference and the
//! subset/superset/disjoint/equality predicates) plus functional helpers
//! (`filter`, `map`, `reduce`, `fold`, `any`, `all`, `for_each`).
//!
//! # Overview
//!
//! `Set` is a thin wrapper around [`indexmap::IndexSet`] using the
//! crate-wide [`DefaultHashBuilder`]. Entries are stored densely, so `pop`
//! and `remove` are O(1) and draining a set is linear in its length.
//! Mutating operations take `&mut self`,
//! so a `Set` shared between threads needs external synchronization; use
//! [`ConcurrentSet`](crate::ConcurrentSet) when several threads mutate the
//! same set.
//!
//! Binary operations never touch their operands: they allocate and return a
//! new set.
//!
//! # Examples
//!
//! ```rust
//! use setkit::Set;
//!
//! let mut set = Set::new();
//! set.add(1);
//! set.add(2);
//! set.add(2);
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains(&1));
//! assert!(!set.contains(&3));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use setkit::Set;
//!
//! let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
//!
//! assert_eq!(set_a.union(&set_b).len(), 4);               // {1, 2, 3, 4}
//! assert_eq!(set_a.intersection(&set_b).len(), 2);        // {2, 3}
//! assert_eq!(set_a.difference(&set_b).len(), 1);          // {1}
//! assert_eq!(set_a.symmetric_difference(&set_b).len(), 2); // {1, 4}
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use indexmap::IndexSet;
use indexmap::set as index_set;

use crate::hashing::DefaultHashBuilder;

// =============================================================================
// Set Definition
// =============================================================================

/// A mutable, unsynchronized hash set.
///
/// Each value appears at most once and no iteration order is implied or
/// preserved across operations.
///
/// # Time Complexity
///
/// | Operation              | Complexity (expected) |
/// |------------------------|-----------------------|
/// | `add`                  | O(1)                  |
/// | `contains`             | O(1)                  |
/// | `remove`               | O(1)                  |
/// | `pop`                  | O(1)                  |
/// | `len`                  | O(1)                  |
/// | `union`                | O(n + m)              |
/// | `intersection`         | O(min(n, m))          |
/// | `difference`           | O(n)                  |
/// | `symmetric_difference` | O(n + m)              |
/// | `is_subset`            | O(n)                  |
/// | `is_disjoint`          | O(min(n, m))          |
///
/// # Thread Safety
///
/// `Set<T>` is `Send`/`Sync` whenever `T` is, but it performs no locking:
/// mutation needs `&mut self`, so concurrent writers must wrap it in a lock
/// or use [`ConcurrentSet`](crate::ConcurrentSet) instead.
///
/// # Examples
///
/// ```rust
/// use setkit::Set;
///
/// let set = Set::singleton("apple");
/// assert!(set.contains("apple"));
/// assert!(!set.contains("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: IndexSet<T, DefaultHashBuilder>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexSet::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 2, 3].into_iter().collect();
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set: Set<i32> = (0..10).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the elements of the set, in no particular order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let sum: i32 = set.iter().sum();
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set = Set::singleton(42);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.add(element);
        set
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was not present before. Adding an
    /// element that is already present leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.add(7));
    /// assert!(!set.add(7));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn add(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<String> = ["a".to_string()].into_iter().collect();
    /// assert!(set.contains("a"));
    /// assert!(!set.contains("b"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Returns a reference to the stored element equal to `element`, if any.
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, element: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(element)
    }

    /// Removes an element from the set.
    ///
    /// Returns `true` if the element was present. Removing an absent element
    /// is a no-op. The last stored entry takes the removed one's slot, so
    /// iteration order may change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set: Set<i32> = [1, 2].into_iter().collect();
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.swap_remove(element)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }

    /// Removes and returns an arbitrary element, or `None` if the set is empty.
    ///
    /// Runs in O(1): the most recently stored entry is taken.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let mut set = Set::singleton(5);
    /// assert_eq!(set.pop(), Some(5));
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Removes and returns an arbitrary element, or `T::default()` if the set
    /// is empty.
    ///
    /// A popped element equal to the default value cannot be told apart from
    /// the empty case; check [`is_empty`](Self::is_empty) first or use
    /// [`pop`](Self::pop) when that matters.
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// The empty set is a subset of every set, including itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let subset: Set<i32> = [1, 2].into_iter().collect();
    /// let superset: Set<i32> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(subset.is_subset(&superset));
    /// assert!(!superset.is_subset(&subset));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Defined as `other.is_subset(self)`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// Stops at the first shared element found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2].into_iter().collect();
    /// let set_b: Set<i32> = [3, 4].into_iter().collect();
    /// let set_c: Set<i32> = [2, 3].into_iter().collect();
    ///
    /// assert!(set_a.is_disjoint(&set_b));
    /// assert!(!set_a.is_disjoint(&set_c));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }

    /// Returns `true` if both sets contain exactly the same elements.
    ///
    /// Equivalent to `self.is_subset(other) && other.is_subset(self)`.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }

    /// Calls `function` on every element, in no particular order.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(function);
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    ///
    /// Short-circuits on the first match; always `false` for an empty set.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Short-circuits on the first failure; always `true` for an empty set.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Folds every element into an accumulator seeded with `init`.
    ///
    /// The folding order is unspecified, so `function` should be
    /// associative and commutative for a deterministic result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let total = set.fold(100, |accumulator, element| accumulator + element);
    /// assert_eq!(total, 106);
    /// ```
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Returns a new set holding `function` applied to each element.
    ///
    /// Elements mapped to the same value are merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = [-2, -1, 1, 2].into_iter().collect();
    /// let magnitudes = set.map(|element| element.abs());
    /// assert_eq!(magnitudes.len(), 2);
    /// ```
    pub fn map<U, F>(&self, mut function: F) -> Set<U>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        let mut result = Set::with_capacity(self.len());
        for element in self {
            result.add(function(element));
        }
        result
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Returns the intersection of two sets.
    ///
    /// The intersection contains only elements that are in both sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection, Set::from([2, 3]));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        // Iterate over the smaller set for better performance
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller
            .iter()
            .filter(|element| larger.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the union of two sets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3].into_iter().collect();
    ///
    /// assert_eq!(set_a.union(&set_b), Set::from([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len().max(other.len()));
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// The operation is asymmetric: `a.difference(&b)` and `b.difference(&a)`
    /// generally differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::singleton(1));
    /// assert_eq!(set_b.difference(&set_a), Set::singleton(4));
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|element| !other.contains(*element))
            .cloned()
            .collect()
    }

    /// Returns the elements that are in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.inner
            .symmetric_difference(&other.inner)
            .cloned()
            .collect()
    }

    /// Returns every element in a `Vec`, in no particular order.
    ///
    /// The order may differ between calls.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a new set of the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = (1..=6).collect();
    /// let even = set.filter(|element| element % 2 == 0);
    /// assert_eq!(even, Set::from([2, 4, 6]));
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(*element))
            .cloned()
            .collect()
    }

    /// Folds every element into an accumulator seeded with `T::default()`.
    ///
    /// An empty set yields `T::default()`. The folding order is unspecified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::Set;
    ///
    /// let set: Set<i32> = (1..=4).collect();
    /// assert_eq!(set.reduce(|left, right| left + right), 10);
    ///
    /// let empty: Set<i32> = Set::new();
    /// assert_eq!(empty.reduce(|left, right| left + right), 0);
    /// ```
    pub fn reduce<F>(&self, mut function: F) -> T
    where
        T: Default,
        F: FnMut(T, T) -> T,
    {
        self.iter()
            .cloned()
            .fold(T::default(), |accumulator, element| {
                function(accumulator, element)
            })
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`Set`].
pub struct SetIterator<'a, T> {
    inner: index_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over a [`Set`].
pub struct SetIntoIterator<T> {
    inner: index_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Hash + Eq> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.union(other)`.
    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: Clone + Hash + Eq> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.intersection(other)`.
    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Clone + Hash + Eq> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.difference(other)`.
    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Clone + Hash + Eq> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    /// Returns `self.symmetric_difference(other)`.
    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Size hints come from the input and are not trusted.
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = seq.next_element()? {
            set.add(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
