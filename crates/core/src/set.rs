//! Immutable set preserving first-insertion order.
//!
//! A [`Set`] is a [`Sequence`] plus one invariant: no two elements are
//! value-equal. Operations that can introduce elements re-run
//! [`Sequence::unique`] on the result; operations that only drop or test
//! elements delegate straight through.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;
use crate::sequence::Sequence;

/// A collection of unique `T`, iterated in first-insertion order.
///
/// Uniqueness is decided by `PartialEq`, so elements need neither `Hash`
/// nor `Ord`. Both uniqueness and set equality assume that `PartialEq` is
/// reflexive; a value unequal to itself (`f64::NAN`) is never deduplicated.
///
/// # Example
///
/// ```
/// use bedrock_core::Set;
///
/// let a = Set::of([1, 2, 3, 2]);
/// let b = Set::of([3, 4]);
///
/// assert_eq!(a.to_vec(), vec![1, 2, 3]);
/// assert_eq!(a.intersection(&b).to_vec(), vec![3]);
/// assert_eq!(Set::of([1, 2, 3]), Set::of([3, 2, 1]));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    items: Sequence<T>,
}

impl<T: Clone + PartialEq> Set<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Sequence::new(),
        }
    }

    /// Build a set from any finite collection, dropping later duplicates.
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::normalized(Sequence::of(values))
    }

    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        Self::normalized(Sequence::from_slice(values))
    }

    fn normalized(items: Sequence<T>) -> Self {
        Self {
            items: items.unique(),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn find<F>(&self, pred: F) -> Optional<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.find(pred)
    }

    pub fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.items.any(pred)
    }

    pub fn all<F>(&self, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.items.all(pred)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    #[must_use]
    pub const fn as_sequence(&self) -> &Sequence<T> {
        &self.items
    }

    #[must_use]
    pub fn into_sequence(self) -> Sequence<T> {
        self.items
    }

    // ── Element-introducing transforms (re-normalized) ──────────────────

    /// Add `value`; a value already present leaves the set unchanged.
    #[must_use]
    pub fn add(&self, value: T) -> Self {
        if self.contains(&value) {
            self.clone()
        } else {
            Self {
                items: self.items.add(value),
            }
        }
    }

    pub fn map<U, F>(&self, f: F) -> Set<U>
    where
        U: Clone + PartialEq,
        F: Fn(&T) -> U,
    {
        Set::normalized(self.items.map(f))
    }

    pub fn flat_map<U, I, F>(&self, f: F) -> Set<U>
    where
        U: Clone + PartialEq,
        I: IntoIterator<Item = U>,
        F: Fn(&T) -> I,
    {
        Set::normalized(self.items.flat_map(f))
    }

    pub fn filter_map<U, F>(&self, f: F) -> Set<U>
    where
        U: Clone + PartialEq,
        F: Fn(&T) -> Optional<U>,
    {
        Set::normalized(self.items.filter_map(f))
    }

    /// Elements of `self`, then elements of `other` not already present.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        Self::normalized(self.items.append(&other.items))
    }

    /// Same as [`Set::append`].
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.append(other)
    }

    // ── Element-removing transforms ─────────────────────────────────────

    #[must_use]
    pub fn remove(&self, value: &T) -> Self {
        Self {
            items: self.items.remove(value),
        }
    }

    #[must_use]
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        Self {
            items: self.items.filter(pred),
        }
    }

    /// Already unique; kept so `unique()` is valid on either collection.
    #[must_use]
    pub fn unique(&self) -> Self {
        self.clone()
    }

    // ── Set algebra ─────────────────────────────────────────────────────

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|item| !other.contains(item))
    }

    /// Elements of `self` that are also in `other`, in `self`'s order.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filter(|item| other.contains(item))
    }

    /// Elements in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).append(&other.difference(self))
    }

    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.intersection(other).is_empty()
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.intersection(other) == *self
    }

    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.intersection(other) == *other
    }

    // ── Consumption ─────────────────────────────────────────────────────

    pub fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: Fn(A, &T) -> A,
    {
        self.items.fold(initial, f)
    }

    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.items.for_each(f);
    }
}

impl<T: Clone + PartialEq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Order-independent: equal sizes and every element of one is in the other.
impl<T: Clone + PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.all(|item| other.contains(item))
    }
}

impl<T: Clone + Eq> Eq for Set<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(", "))
    }
}

impl<T: Clone + PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Clone> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Clone + PartialEq> From<Vec<T>> for Set<T> {
    fn from(values: Vec<T>) -> Self {
        Self::of(values)
    }
}

impl<T: Clone + PartialEq> From<Sequence<T>> for Set<T> {
    fn from(sequence: Sequence<T>) -> Self {
        Self::normalized(sequence)
    }
}

impl<T: Clone> From<Set<T>> for Sequence<T> {
    fn from(set: Set<T>) -> Self {
        set.items
    }
}

impl<T: Clone + Serialize> Serialize for Set<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Clone + PartialEq + Deserialize<'de>> Deserialize<'de> for Set<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Sequence::<T>::deserialize(deserializer).map(Self::normalized)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use super::*;
    use crate::Integer;

    #[test]
    fn test_construction_drops_duplicates() {
        let set = Set::of([3, 1, 3, 2, 1]);
        assert_eq!(set.to_vec(), vec![3, 1, 2]);
        assert_eq!(Set::from(vec![1, 1]).len(), 1);
        assert_eq!(Set::from_slice(&["a", "a", "b"]).len(), 2);
        assert!(Set::<i32>::new().is_empty());
    }

    #[test]
    fn test_add_existing_is_noop() {
        let set = Set::of([1, 2]);
        assert_eq!(set.add(2).to_vec(), vec![1, 2]);
        assert_eq!(set.add(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_map_collapses_collisions() {
        let set = Set::of([-2, -1, 1, 2]);
        let magnitudes = set.map(|x: &i32| x.abs());
        assert_eq!(magnitudes.to_vec(), vec![2, 1]);
    }

    #[test]
    fn test_flat_map_and_filter_map_stay_unique() {
        let set = Set::of([1, 2]);
        assert_eq!(set.flat_map(|x| vec![*x, x + 1]).to_vec(), vec![1, 2, 3]);
        assert_eq!(set.filter_map(|_| Some(0)).to_vec(), vec![0]);
    }

    #[test]
    fn test_append_stays_unique() {
        let a = Set::of([1, 2, 3]);
        let b = Set::of([3, 4, 1]);
        assert_eq!(a.append(&b).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn test_remove_and_filter() {
        let set = Set::of([1, 2, 3, 4]);
        assert_eq!(set.remove(&2).to_vec(), vec![1, 3, 4]);
        assert_eq!(set.remove(&9), set);
        assert_eq!(set.filter(|x| x % 2 == 0).to_vec(), vec![2, 4]);
    }

    #[test]
    fn test_difference_and_intersection() {
        let a = Set::of([1, 2, 3, 4]);
        let b = Set::of([4, 3, 5]);
        assert_eq!(a.difference(&b).to_vec(), vec![1, 2]);
        assert_eq!(a.intersection(&b).to_vec(), vec![3, 4]);
        assert!(a.difference(&a).is_empty());
        assert_eq!(a.symmetric_difference(&b).to_vec(), vec![1, 2, 5]);
    }

    #[test]
    fn test_subset_superset_disjoint() {
        let small = Set::of([2, 1]);
        let big = Set::of([1, 2, 3]);
        let other = Set::of([7, 8]);

        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(big.is_superset(&small));
        assert!(!small.is_superset(&big));
        assert!(big.is_subset(&big));
        assert!(big.is_disjoint(&other));
        assert!(!big.is_disjoint(&small));
        assert!(Set::<i32>::new().is_subset(&other));
    }

    #[test]
    fn test_equality_is_order_independent() {
        assert_eq!(Set::of([1, 2, 3]), Set::of([3, 2, 1]));
        assert_ne!(Set::of([1, 2, 3]), Set::of([1, 2]));
        assert_ne!(Set::of([1, 2]), Set::of([1, 3]));
    }

    #[test]
    fn test_non_reflexive_elements_are_not_deduplicated() {
        let nan = Set::of([f64::NAN, f64::NAN]);
        assert_eq!(nan.len(), 2);
        assert!(!nan.contains(&f64::NAN));

        let floats = Set::of([0.5, 1.5, 0.5]);
        assert_eq!(floats.to_vec(), vec![0.5, 1.5]);
        assert_eq!(floats, floats.clone());
    }

    #[test]
    fn test_set_of_integers() {
        let set = Set::of([5, 5, -5].map(Integer::new));
        let abs = set.filter_map(|x| x.abs().ok());
        assert_eq!(abs.to_vec(), vec![Integer::new(5)]);
    }

    #[test]
    fn test_fold_any_all() {
        let set = Set::of([1, 2, 3, 3]);
        assert_eq!(set.fold(0, |acc, x| acc + x), 6);
        assert!(set.any(|x| *x == 3));
        assert!(set.all(|x| *x > 0));
    }

    #[test]
    fn test_display_and_debug() {
        let set = Set::of([1, 2]);
        assert_eq!(set.to_string(), "{1, 2}");
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[test]
    fn test_deserialize_reestablishes_uniqueness() {
        let set: Set<i32> = serde_json::from_str("[1, 2, 1, 3]").unwrap();
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_sequence_round_trip() {
        let seq = Sequence::of([1, 1, 2]);
        let set = Set::from(seq);
        let back: Sequence<i32> = set.into();
        assert_eq!(back.to_vec(), vec![1, 2]);
    }
}
