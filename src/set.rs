//! Unsorted key-value set over a dynamic array
//!
//! [`ArraySet`] stores unique-key pairs in insertion order inside one
//! [`DynamicArraySequence`] and keeps no index structure at all: point
//! operations are linear scans, and the order-dependent queries sort a fresh
//! snapshot on demand. That makes every ordered query O(n log n), which is
//! exactly the tradeoff the structure is meant to demonstrate - compare with
//! a balanced tree where the sort is maintained incrementally.

use crate::error::{Result, SeqSetError};
use crate::sequence::{DynamicArraySequence, Sequence};
use std::fmt;

/// An owned key-value record stored in an [`ArraySet`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<K, V> {
    /// Lookup key, unique within a set
    pub key: K,
    /// Payload value
    pub value: V,
}

impl<K, V> Pair<K, V> {
    /// Create a pair from a key and a value
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Unsorted set of unique-key pairs with sort-on-demand ordered queries
///
/// Point lookups, upserts and deletes scan linearly (O(n)); `find_min` and
/// `find_max` scan with a comparator (O(n)); `iter_ord`, `find_next` and
/// `find_prev` sort a snapshot per call (O(n log n)). Missing keys are an
/// expected outcome and come back as `None`, never as an error; only
/// `find_min`/`find_max` on an empty set fail, with
/// [`SeqSetError::EmptyCollection`].
///
/// # Examples
///
/// ```rust
/// use seqset::ArraySet;
///
/// let mut set = ArraySet::new();
/// set.build(vec![("b", 2), ("a", 1)])?;
/// set.insert("c", 3)?;
/// set.insert("a", 10)?; // overwrites in place, size unchanged
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.get(&"a"), Some(&10));
/// assert_eq!(set.find_min()?.key, "a");
///
/// let keys: Vec<&str> = set.iter_ord().map(|pair| pair.key).collect();
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// # Ok::<(), seqset::SeqSetError>(())
/// ```
pub struct ArraySet<K, V> {
    pairs: DynamicArraySequence<Pair<K, V>>,
}

impl<K, V> ArraySet<K, V> {
    /// Create a new empty set
    pub fn new() -> Self {
        Self {
            pairs: DynamicArraySequence::new(),
        }
    }

    /// Number of pairs stored
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no pairs are stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in storage order
    ///
    /// Storage order is incidental (insertion order, minus deletions) and
    /// carries no meaning; use [`iter_ord`](Self::iter_ord) for key order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.pairs.as_slice().iter()
    }

    /// Remove all pairs
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

impl<K: PartialEq, V> ArraySet<K, V> {
    /// Insert a pair, overwriting the value in place if the key exists
    ///
    /// An existing key keeps its storage position; a new key is appended at
    /// the end. The set never holds two pairs with the same key. O(n).
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        for index in 0..self.pairs.len() {
            if self.pairs.get_at(index)?.key == key {
                return self.pairs.set_at(index, Pair::new(key, value));
            }
        }
        self.pairs.insert_last(Pair::new(key, value))
    }

    /// Clear the set and repopulate it from `items`
    ///
    /// Inserts one pair at a time, so duplicate keys in the input collapse
    /// to the last occurrence and the uniqueness invariant holds for any
    /// input. O(n²) worst case.
    pub fn build(&mut self, items: Vec<(K, V)>) -> Result<()> {
        self.clear();
        for (key, value) in items {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Find the stored pair with key `key`
    ///
    /// Returns the full record; see [`get`](Self::get) for the plain value.
    /// A missing key is `None`, never an error. O(n).
    pub fn find(&self, key: &K) -> Option<&Pair<K, V>> {
        self.iter().find(|pair| pair.key == *key)
    }

    /// Find the value stored under `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|pair| &pair.value)
    }

    /// Returns true if a pair with key `key` is stored
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Remove the pair with key `key`, if present
    ///
    /// Returns the removed pair, or `Ok(None)` as a no-op when the key is
    /// absent. O(n).
    pub fn delete(&mut self, key: &K) -> Result<Option<Pair<K, V>>> {
        for index in 0..self.pairs.len() {
            if self.pairs.get_at(index)?.key == *key {
                return self.pairs.delete_at(index).map(Some);
            }
        }
        Ok(None)
    }
}

impl<K: Ord, V> ArraySet<K, V> {
    /// The pair with the smallest key, by linear scan
    ///
    /// Fails with [`SeqSetError::EmptyCollection`] on an empty set. O(n) -
    /// deliberately not implemented via the sorted snapshot.
    pub fn find_min(&self) -> Result<&Pair<K, V>> {
        self.iter()
            .min_by(|a, b| a.key.cmp(&b.key))
            .ok_or_else(|| SeqSetError::empty_collection("find_min"))
    }

    /// The pair with the largest key, by linear scan
    ///
    /// Fails with [`SeqSetError::EmptyCollection`] on an empty set. O(n).
    pub fn find_max(&self) -> Result<&Pair<K, V>> {
        self.iter()
            .max_by(|a, b| a.key.cmp(&b.key))
            .ok_or_else(|| SeqSetError::empty_collection("find_max"))
    }
}

impl<K: Ord + Clone, V: Clone> ArraySet<K, V> {
    /// Snapshot of all pairs sorted by key. Ascending unless `descending`.
    fn sorted_snapshot(&self, descending: bool) -> Vec<Pair<K, V>> {
        let mut snapshot: Vec<Pair<K, V>> = self.iter().cloned().collect();
        if descending {
            snapshot.sort_by(|a, b| b.key.cmp(&a.key));
        } else {
            snapshot.sort_by(|a, b| a.key.cmp(&b.key));
        }
        snapshot
    }

    /// Iterate over all pairs in ascending key order
    ///
    /// Sorts a fresh snapshot per call - O(n log n), and the result does not
    /// observe later mutations.
    pub fn iter_ord(&self) -> OrderedIter<K, V> {
        OrderedIter {
            inner: self.sorted_snapshot(false).into_iter(),
        }
    }

    /// The pair whose key follows `key` in ascending key order
    ///
    /// `key` must match a stored key exactly: a key that is absent yields
    /// `None` even if it would fall between two stored keys, and the
    /// largest key also yields `None`. O(n log n).
    pub fn find_next(&self, key: &K) -> Option<Pair<K, V>> {
        let sorted = self.sorted_snapshot(false);
        let position = sorted.iter().position(|pair| pair.key == *key)?;
        sorted.get(position + 1).cloned()
    }

    /// The pair whose key precedes `key` in ascending key order
    ///
    /// Same exact-match contract as [`find_next`](Self::find_next): an
    /// absent `key` and the smallest key both yield `None`. O(n log n).
    pub fn find_prev(&self, key: &K) -> Option<Pair<K, V>> {
        let sorted = self.sorted_snapshot(true);
        let position = sorted.iter().position(|pair| pair.key == *key)?;
        sorted.get(position + 1).cloned()
    }
}

impl<K, V> Default for ArraySet<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArraySet<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}

impl<K: Clone, V: Clone> Clone for ArraySet<K, V> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for ArraySet<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|pair| other.get(&pair.key) == Some(&pair.value))
    }
}

/// Owning iterator over a sorted snapshot of an [`ArraySet`]
///
/// Produced by [`ArraySet::iter_ord`]; yields pairs in ascending key order
/// and does not observe mutations made after the snapshot was taken.
pub struct OrderedIter<K, V> {
    inner: std::vec::IntoIter<Pair<K, V>>,
}

impl<K, V> Iterator for OrderedIter<K, V> {
    type Item = Pair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedIter<K, V> {}

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for ArraySet<K, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for ArraySet<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SetVisitor<K, V>(std::marker::PhantomData<(K, V)>);

        impl<'de, K, V> serde::de::Visitor<'de> for SetVisitor<K, V>
        where
            K: serde::Deserialize<'de> + PartialEq,
            V: serde::Deserialize<'de>,
        {
            type Value = ArraySet<K, V>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of key-value pairs")
            }

            fn visit_seq<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut set = ArraySet::new();
                while let Some(pair) = access.next_element::<Pair<K, V>>()? {
                    set.insert(pair.key, pair.value)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor(std::marker::PhantomData))
    }
}
