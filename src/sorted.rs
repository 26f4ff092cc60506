//! Deterministic views over mapping types.
//!
//! Hash maps iterate in an unspecified order that can change between runs and
//! between insertions. Anything that renders, hashes, diffs or snapshots a map
//! should go through one of these helpers instead of iterating it directly.
//!
//! Every function accepts anything that iterates as `(K, V)` pairs: owned maps
//! (`hashbrown::HashMap`, `BTreeMap`, std maps) yield owned keys and values,
//! references to maps yield `(&K, &V)`. Keys are unique, so ascending key
//! order is a total, reproducible order.

use alloc::vec::Vec;

use crate::order::sort_by_ref;

/// One key/value pair of a mapping.
///
/// Converts from a `(key, value)` tuple; [`Entry::into_pair`] goes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    /// The mapping key.
    pub key: K,
    /// The value stored under [`Entry::key`].
    pub value: V,
}

impl<K, V> Entry<K, V> {
    /// Construct an entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Split into a `(key, value)` tuple.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

/// Project an entry to its key.
#[inline]
pub fn entry_key<K, V>(e: &Entry<K, V>) -> &K {
    &e.key
}

/// All entries of `m` in the map's native, unspecified order.
pub fn entries<K, V, M>(m: M) -> Vec<Entry<K, V>>
where
    M: IntoIterator<Item = (K, V)>,
{
    m.into_iter().map(Entry::from).collect()
}

/// All keys of `m`, ascending.
///
/// ```rust
/// use hashbrown::HashMap;
/// use lox::keys_sorted;
///
/// let m: HashMap<&str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
/// assert_eq!(keys_sorted(&m), vec![&"a", &"b", &"c"]);
/// ```
pub fn keys_sorted<K, V, M>(m: M) -> Vec<K>
where
    K: Ord,
    M: IntoIterator<Item = (K, V)>,
{
    let mut keys: Vec<K> = m.into_iter().map(|(k, _)| k).collect();
    keys.sort_unstable();
    keys
}

/// All entries of `m`, ascending by key.
pub fn entries_sorted_by_key<K, V, M>(m: M) -> Vec<Entry<K, V>>
where
    K: Ord,
    M: IntoIterator<Item = (K, V)>,
{
    let mut sorted = entries(m);
    sort_by_ref(&mut sorted, entry_key);
    sorted
}

/// The values of `m`, in ascending order of their keys.
///
/// ```rust
/// use hashbrown::HashMap;
/// use lox::values_sorted_by_key;
///
/// let m: HashMap<&str, i32> = [("b", 1), ("a", 9), ("c", 5)].into_iter().collect();
/// assert_eq!(values_sorted_by_key(m), vec![9, 1, 5]);
/// ```
pub fn values_sorted_by_key<K, V, M>(m: M) -> Vec<V>
where
    K: Ord,
    M: IntoIterator<Item = (K, V)>,
{
    entries_sorted_by_key(m)
        .into_iter()
        .map(|e| e.value)
        .collect()
}
