//! Immutable, insertion-ordered sequence.
//!
//! Every transform returns a new [`Sequence`]; the receiver is never
//! touched. Storage is a persistent `im::Vector`, so a "copy" shares
//! structure with its source instead of duplicating it.

use std::fmt;
use std::hash::{Hash, Hasher};

use either::Either;
use im::Vector;
use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::optional::Optional;
use crate::outcome::Outcome;

/// An ordered collection of `T` that permits duplicates.
///
/// # Design Principles
///
/// - **Immutable updates**: all methods take `&self` and return a new value
/// - **Zero panics**: positional access returns [`Outcome`] or [`Optional`]
/// - **Value equality**: two sequences are equal iff their elements are equal
///   in the same order
///
/// # Example
///
/// ```
/// use bedrock_core::{Error, Sequence};
///
/// let numbers = Sequence::of([1, 2, 3, 4]);
/// let evens = numbers.filter(|n| n % 2 == 0);
///
/// assert_eq!(evens.to_vec(), vec![2, 4]);
/// assert_eq!(numbers.len(), 4);
/// assert_eq!(numbers.get(9), Err(Error::index_out_of_bounds(9, 4)));
/// ```
#[derive(Clone)]
pub struct Sequence<T> {
    items: Vector<T>,
}

impl<T: Clone> Sequence<T> {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vector::new(),
        }
    }

    /// Build a sequence from any finite collection of values.
    pub fn of<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }

    /// Build a sequence by cloning a slice.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        values.iter().cloned().collect()
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

    /// Whether any element is value-equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Bounds-checked positional access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] carrying `index` and the current
    /// length when `index >= len()`.
    pub fn get(&self, index: usize) -> Outcome<&T> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, self.len()))
    }

    #[must_use]
    pub fn first(&self) -> Optional<&T> {
        self.items.front()
    }

    #[must_use]
    pub fn last(&self) -> Optional<&T> {
        self.items.back()
    }

    /// First element matching `pred`.
    pub fn find<F>(&self, pred: F) -> Optional<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().find(|item| pred(item))
    }

    /// Index of the first element matching `pred`.
    pub fn position<F>(&self, pred: F) -> Optional<usize>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().position(pred)
    }

    /// True if at least one element matches. Stops at the first match.
    pub fn any<F>(&self, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.iter().any(pred)
    }

    /// True if every element matches. Stops at the first mismatch; vacuously
    /// true when empty.
    pub fn all<F>(&self, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.iter().all(pred)
    }

    pub fn iter(&self) -> im::vector::Iter<'_, T> {
        self.items.iter()
    }

    /// Materialize the full ordered contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    // ── Transforms ──────────────────────────────────────────────────────

    /// Append one element.
    #[must_use]
    pub fn add(&self, value: T) -> Self {
        let mut items = self.items.clone();
        items.push_back(value);
        Self { items }
    }

    /// Remove every element value-equal to `value`.
    ///
    /// To drop a single occurrence, locate it with [`Sequence::position`] and
    /// call [`Sequence::remove_at`].
    #[must_use]
    pub fn remove(&self, value: &T) -> Self
    where
        T: PartialEq,
    {
        self.filter(|item| item != value)
    }

    /// Remove the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn remove_at(&self, index: usize) -> Outcome<Self> {
        if index < self.len() {
            let mut items = self.items.clone();
            items.remove(index);
            Ok(Self { items })
        } else {
            Err(Error::index_out_of_bounds(index, self.len()))
        }
    }

    /// Insert `value` before position `index`; `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `index > len()`.
    pub fn insert_at(&self, index: usize, value: T) -> Outcome<Self> {
        if index <= self.len() {
            let mut items = self.items.clone();
            items.insert(index, value);
            Ok(Self { items })
        } else {
            Err(Error::index_out_of_bounds(index, self.len()))
        }
    }

    #[must_use]
    pub fn filter<F>(&self, pred: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|item| pred(item)).cloned().collect()
    }

    pub fn map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: Clone,
        F: Fn(&T) -> U,
    {
        self.iter().map(f).collect()
    }

    /// Map each element to a collection and concatenate the results in order.
    pub fn flat_map<U, I, F>(&self, f: F) -> Sequence<U>
    where
        U: Clone,
        I: IntoIterator<Item = U>,
        F: Fn(&T) -> I,
    {
        self.iter().flat_map(f).collect()
    }

    /// Concatenate elements that are themselves collections.
    pub fn flatten<U>(&self) -> Sequence<U>
    where
        U: Clone,
        T: IntoIterator<Item = U>,
    {
        self.iter().cloned().flatten().collect()
    }

    /// Map to an Optional and keep only present results, in order.
    pub fn filter_map<U, F>(&self, f: F) -> Sequence<U>
    where
        U: Clone,
        F: Fn(&T) -> Optional<U>,
    {
        self.iter().filter_map(f).collect()
    }

    /// Left fold, strictly in order.
    pub fn fold<A, F>(&self, initial: A, f: F) -> A
    where
        F: Fn(A, &T) -> A,
    {
        self.iter().fold(initial, f)
    }

    /// Left fold that stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_fold<A, E, F>(&self, initial: A, f: F) -> Outcome<A, E>
    where
        F: Fn(A, &T) -> Outcome<A, E>,
    {
        self.iter().try_fold(initial, f)
    }

    /// Map with a fallible function, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(&self, f: F) -> Outcome<Sequence<U>, E>
    where
        U: Clone,
        F: Fn(&T) -> Outcome<U, E>,
    {
        self.iter().map(f).collect()
    }

    /// Drop later duplicates, keeping the first occurrence of each value.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: PartialEq,
    {
        let items = self.iter().fold(Vector::new(), |mut seen, item| {
            if !seen.iter().any(|kept| kept == item) {
                seen.push_back(item.clone());
            }
            seen
        });
        Self { items }
    }

    /// Concatenate: all of `self`, then all of `other`.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        items.append(other.items.clone());
        Self { items }
    }

    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// The first `count` elements (all of them if `count >= len()`).
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.iter().take(count).cloned().collect()
    }

    /// Everything after the first `count` elements.
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        self.iter().skip(count).cloned().collect()
    }

    /// Stable ascending sort.
    #[must_use]
    pub fn sorted(&self) -> Self
    where
        T: Ord,
    {
        let mut items = self.to_vec();
        items.sort();
        Self::from(items)
    }

    /// Stable sort by a derived key.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut items = self.to_vec();
        items.sort_by_key(key);
        Self::from(items)
    }

    /// Split into (matching, non-matching), both in original order.
    pub fn partition<F>(&self, pred: F) -> (Self, Self)
    where
        F: Fn(&T) -> bool,
    {
        let (matching, rest): (Vec<T>, Vec<T>) = self.iter().cloned().partition(|item| pred(item));
        (Self::from(matching), Self::from(rest))
    }

    /// Pair elements positionally; the result is as long as the shorter input.
    pub fn zip<U: Clone>(&self, other: &Sequence<U>) -> Sequence<(T, U)> {
        self.iter().cloned().zip(other.iter().cloned()).collect()
    }

    /// Run a side effect for each element, in order.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }
}

impl<T: Clone, E: Clone> Sequence<Outcome<T, E>> {
    /// Turn a sequence of outcomes into an outcome of a sequence.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` in order.
    pub fn collect_outcomes(&self) -> Outcome<Sequence<T>, E> {
        self.iter().cloned().collect()
    }

    /// Separate successes from failures, keeping the order within each side.
    #[must_use]
    pub fn partition_outcomes(&self) -> (Sequence<T>, Sequence<E>) {
        let (oks, errs): (Vec<T>, Vec<E>) =
            self.iter()
                .cloned()
                .partition_map(|outcome| match outcome {
                    Ok(value) => Either::Left(value),
                    Err(error) => Either::Right(error),
                });
        (Sequence::from(oks), Sequence::from(errs))
    }
}

impl<T: Clone> Sequence<Optional<T>> {
    /// Keep the present values, in order.
    #[must_use]
    pub fn flatten_optionals(&self) -> Sequence<T> {
        self.flatten()
    }
}

impl<T: Clone> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Clone + Eq> Eq for Sequence<T> {}

impl<T: Clone + Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        self.iter().for_each(|item| item.hash(state));
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

impl<T: Clone> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T: Clone> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.into_iter().collect()
    }
}

impl<T: Clone + Serialize> Serialize for Sequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Clone + Deserialize<'de>> Deserialize<'de> for Sequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from)
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
    fn test_construction() {
        assert!(Sequence::<i32>::new().is_empty());
        assert_eq!(Sequence::of([1, 2, 3]).len(), 3);
        assert_eq!(Sequence::from_slice(&[4, 5]).to_vec(), vec![4, 5]);
        assert_eq!(Sequence::from(vec!['a']).first(), Some(&'a'));
    }

    #[test]
    fn test_get_in_bounds() {
        let seq = Sequence::of([10, 20, 30]);
        assert_eq!(seq.get(0), Ok(&10));
        assert_eq!(seq.get(2), Ok(&30));
    }

    #[test]
    fn test_get_out_of_bounds_reports_index_and_size() {
        let seq = Sequence::of([10, 20, 30]);
        let error = seq.get(5).unwrap_err();
        assert_eq!(error, Error::index_out_of_bounds(5, 3));
        assert_eq!(error.to_string(), "Index 5 is out of bounds for size 3");
    }

    #[test]
    fn test_get_on_empty() {
        assert_eq!(
            Sequence::<i32>::new().get(0),
            Err(Error::index_out_of_bounds(0, 0))
        );
    }

    #[test]
    fn test_add_leaves_receiver_untouched() {
        let original = Sequence::of([1, 2]);
        let extended = original.add(3);
        assert_eq!(original.to_vec(), vec![1, 2]);
        assert_eq!(extended.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_drops_every_match() {
        let seq = Sequence::of([1, 2, 1, 3, 1]);
        assert_eq!(seq.remove(&1).to_vec(), vec![2, 3]);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_remove_at() {
        let seq = Sequence::of([1, 2, 1]);
        assert_eq!(seq.remove_at(0).map(|s| s.to_vec()), Ok(vec![2, 1]));
        assert_eq!(seq.remove_at(3), Err(Error::index_out_of_bounds(3, 3)));
    }

    #[test]
    fn test_insert_at() {
        let seq = Sequence::of([1, 3]);
        assert_eq!(seq.insert_at(1, 2).map(|s| s.to_vec()), Ok(vec![1, 2, 3]));
        assert_eq!(seq.insert_at(2, 4).map(|s| s.to_vec()), Ok(vec![1, 3, 4]));
        assert_eq!(seq.insert_at(3, 4), Err(Error::index_out_of_bounds(3, 2)));
    }

    #[test]
    fn test_filter_map_and_flat_map() {
        let seq = Sequence::of([1, 2, 3]);
        assert_eq!(seq.map(|x| x * 10).to_vec(), vec![10, 20, 30]);
        assert_eq!(seq.flat_map(|x| vec![*x; 2]).to_vec(), vec![1, 1, 2, 2, 3, 3]);
        assert_eq!(
            seq.filter_map(|x| (x % 2 == 1).then_some(x * 100)).to_vec(),
            vec![100, 300]
        );
    }

    #[test]
    fn test_flatten_nested_sequences() {
        let nested = Sequence::of([Sequence::of([1, 2]), Sequence::new(), Sequence::of([3])]);
        assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_optionals() {
        let seq = Sequence::of([Some(1), None, Some(3)]);
        assert_eq!(seq.flatten_optionals().to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_fold_is_left_to_right() {
        let seq = Sequence::of(["a", "b", "c"]);
        let joined = seq.fold(String::new(), |acc, s| acc + *s);
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_try_fold_with_checked_integers() {
        let seq = Sequence::of([Integer::MAX, Integer::ONE]);
        assert!(seq.try_fold(Integer::ZERO, |acc, x| acc.checked_add(*x)).is_err());
        let small = Sequence::of([Integer::new(2), Integer::new(3)]);
        assert_eq!(
            small.try_fold(Integer::ZERO, |acc, x| acc.checked_add(*x)),
            Ok(Integer::new(5))
        );
    }

    #[test]
    fn test_try_map_stops_at_first_error() {
        let divisors = Sequence::of([2, 0, 5].map(Integer::new));
        let result = divisors.try_map(|d| Integer::new(10).checked_div(*d));
        assert!(matches!(result, Err(Error::DivisionByZero { .. })));
    }

    #[test]
    fn test_any_all_on_empty() {
        let empty = Sequence::<i32>::new();
        assert!(!empty.any(|_| true));
        assert!(empty.all(|_| false));
    }

    #[test]
    fn test_unique_keeps_first_occurrence_order() {
        let seq = Sequence::of([3, 1, 3, 2, 1]);
        assert_eq!(seq.unique().to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_append_order() {
        let a = Sequence::of([1, 2]);
        let b = Sequence::of([3, 1]);
        assert_eq!(a.append(&b).to_vec(), vec![1, 2, 3, 1]);
        assert_eq!(b.append(&a).to_vec(), vec![3, 1, 1, 2]);
    }

    #[test]
    fn test_equality_is_order_dependent() {
        assert_ne!(Sequence::of([1, 2]), Sequence::of([2, 1]));
        assert_eq!(Sequence::of([1, 2]), Sequence::of([1, 2]));
        assert_ne!(Sequence::of([1, 2]), Sequence::of([1, 2, 2]));
    }

    #[test]
    fn test_positional_queries() {
        let seq = Sequence::of([5, 6, 7, 6]);
        assert_eq!(seq.first(), Some(&5));
        assert_eq!(seq.last(), Some(&6));
        assert_eq!(seq.find(|x| *x > 5), Some(&6));
        assert_eq!(seq.position(|x| *x == 7), Some(2));
        assert_eq!(seq.position(|x| *x == 9), None);
        assert_eq!(Sequence::<i32>::new().first(), None);
    }

    #[test]
    fn test_slicing_and_ordering() {
        let seq = Sequence::of([3, 1, 2]);
        assert_eq!(seq.reverse().to_vec(), vec![2, 1, 3]);
        assert_eq!(seq.take(2).to_vec(), vec![3, 1]);
        assert_eq!(seq.take(10).to_vec(), vec![3, 1, 2]);
        assert_eq!(seq.skip(1).to_vec(), vec![1, 2]);
        assert!(seq.skip(10).is_empty());
        assert_eq!(seq.sorted().to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.sorted_by_key(|x| -x).to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_keeps_equal_keys_in_insertion_order() {
        let pairs: Vec<(u32, u32)> = (0..200).map(|i| (i * 7919 % 5, i)).collect();
        let seq = Sequence::from(pairs.clone());

        let mut expected = pairs;
        expected.sort_by_key(|(k, _)| *k);

        assert_eq!(seq.sorted_by_key(|(k, _)| *k).to_vec(), expected);
        assert_eq!(
            seq.sorted_by_key(|(k, _)| *k).take(3).to_vec(),
            vec![(0, 0), (0, 5), (0, 10)]
        );
    }

    #[test]
    fn test_sorted_by_key_leaves_receiver_unchanged() {
        let seq = Sequence::of([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        let sorted = seq.sorted_by_key(|(k, _)| *k);
        assert_eq!(sorted.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
        assert_eq!(seq.first(), Some(&(2, 'a')));
    }

    #[test]
    fn test_partition_and_zip() {
        let seq = Sequence::of([1, 2, 3, 4]);
        let (even, odd) = seq.partition(|x| x % 2 == 0);
        assert_eq!(even.to_vec(), vec![2, 4]);
        assert_eq!(odd.to_vec(), vec![1, 3]);

        let zipped = seq.zip(&Sequence::of(['a', 'b']));
        assert_eq!(zipped.to_vec(), vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_collect_outcomes() {
        let all_ok: Sequence<Outcome<i32, &str>> = Sequence::of([Ok(1), Ok(2)]);
        assert_eq!(all_ok.collect_outcomes(), Ok(Sequence::of([1, 2])));

        let mixed: Sequence<Outcome<i32, &str>> = Sequence::of([Ok(1), Err("a"), Err("b")]);
        assert_eq!(mixed.collect_outcomes(), Err("a"));
    }

    #[test]
    fn test_partition_outcomes() {
        let mixed: Sequence<Outcome<i32, &str>> =
            Sequence::of([Ok(1), Err("a"), Ok(2), Err("b")]);
        let (oks, errs) = mixed.partition_outcomes();
        assert_eq!(oks.to_vec(), vec![1, 2]);
        assert_eq!(errs.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let mut visited = Vec::new();
        Sequence::of([1, 2, 3]).for_each(|x| visited.push(*x));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_and_debug() {
        let seq = Sequence::of([1, 2, 3]);
        assert_eq!(seq.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{seq:?}"), "[1, 2, 3]");
        assert_eq!(Sequence::<i32>::new().to_string(), "[]");
    }

    #[test]
    fn test_serde_as_plain_list() {
        let seq = Sequence::of([1, 2, 2]);
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "[1,2,2]");
        let back: Sequence<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn test_into_iterator() {
        let seq = Sequence::of([1, 2, 3]);
        let borrowed: i32 = (&seq).into_iter().sum();
        let owned: Vec<i32> = seq.into_iter().collect();
        assert_eq!(borrowed, 6);
        assert_eq!(owned, vec![1, 2, 3]);
    }
}
