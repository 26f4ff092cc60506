//! Set and membership-predicate construction from sequences.
//!
//! - [`slice_to_set_by`] / [`slice_to_set`]: collect (derived) keys into a
//!   `hashbrown::HashSet`. Duplicate keys collapse silently.
//! - [`map_to_predicate`]: turn any keyed container into a `Fn(&K) -> bool`.
//! - [`slice_to_predicate_by`] / [`slice_to_predicate`]: the two steps fused.
//!
//! The builders always copy keys into a fresh set; the resulting predicate
//! owns it and does not borrow the input sequence.

use core::hash::{BuildHasher, Hash};

use alloc::collections::{BTreeMap, BTreeSet};
use hashbrown::{HashMap, HashSet};

use crate::compose::{compose, identity};

/// Key-membership test over a keyed container.
///
/// Implemented for the `hashbrown` and `alloc` collections (plus the `std`
/// hash collections with the `std` feature) and for shared references to any
/// implementor. Maps test their keys, sets test their elements.
pub trait Membership<K: ?Sized> {
    /// Whether `key` is present.
    fn contains_member(&self, key: &K) -> bool;
}

impl<K, V, S> Membership<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K, S> Membership<K> for HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: Ord, V> Membership<K> for BTreeMap<K, V> {
    fn contains_member(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord> Membership<K> for BTreeSet<K> {
    fn contains_member(&self, key: &K) -> bool {
        self.contains(key)
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Membership<K> for std::collections::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

#[cfg(feature = "std")]
impl<K, S> Membership<K> for std::collections::HashSet<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K: ?Sized, M: Membership<K> + ?Sized> Membership<K> for &M {
    fn contains_member(&self, key: &K) -> bool {
        (**self).contains_member(key)
    }
}

/// Collect `key_fn(element)` for every element into a new set.
///
/// ```rust
/// use lox::slice_to_set_by;
///
/// let words = ["apple", "avocado", "banana"];
/// let initials = slice_to_set_by(&words, |w| w.as_bytes()[0]);
/// assert_eq!(initials.len(), 2);
/// ```
pub fn slice_to_set_by<'s, V, K, F>(seq: &'s [V], key_fn: F) -> HashSet<K>
where
    K: Eq + Hash,
    F: Fn(&'s V) -> K,
{
    seq.iter().map(key_fn).collect()
}

/// Collect the elements themselves into a new set.
pub fn slice_to_set<V>(seq: &[V]) -> HashSet<V>
where
    V: Clone + Eq + Hash,
{
    slice_to_set_by(seq, compose(identity::<V>, V::clone))
}

/// Membership predicate over the keys of `m`.
///
/// The container is moved into the predicate. Pass a reference to keep using
/// it afterwards.
///
/// ```rust
/// use hashbrown::HashMap;
/// use lox::map_to_predicate;
///
/// let ports: HashMap<u16, &str> = [(80, "http"), (443, "https")].into_iter().collect();
/// let is_known = map_to_predicate(&ports);
/// assert!(is_known(&443));
/// assert!(!is_known(&8080));
/// ```
pub fn map_to_predicate<K, M>(m: M) -> impl Fn(&K) -> bool
where
    K: ?Sized,
    M: Membership<K>,
{
    move |k: &K| m.contains_member(k)
}

/// Predicate testing whether a candidate equals `key_fn(e)` for some `e` in `seq`.
pub fn slice_to_predicate_by<V, K, F>(seq: &[V], key_fn: F) -> impl Fn(&K) -> bool
where
    K: Eq + Hash,
    F: Fn(&V) -> K,
{
    map_to_predicate(slice_to_set_by(seq, key_fn))
}

/// Predicate testing whether a candidate is an element of `seq`.
///
/// ```rust
/// let is_vowel = lox::slice_to_predicate(&['a', 'e', 'i', 'o', 'u']);
/// assert!(is_vowel(&'e'));
/// assert!(!is_vowel(&'z'));
/// ```
pub fn slice_to_predicate<V>(seq: &[V]) -> impl Fn(&V) -> bool
where
    V: Clone + Eq + Hash,
{
    map_to_predicate(slice_to_set(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Host {
        name: String,
        zone: u8,
    }

    fn hosts() -> Vec<Host> {
        vec![
            Host { name: "alpha".into(), zone: 1 },
            Host { name: "beta".into(), zone: 2 },
            Host { name: "gamma".into(), zone: 1 },
        ]
    }

    #[test]
    fn test_slice_to_set_by_collapses_duplicate_keys() {
        let zones = slice_to_set_by(&hosts(), |h| h.zone);
        assert_eq!(zones.len(), 2);
        assert!(zones.contains(&1));
        assert!(zones.contains(&2));
    }

    #[test]
    fn test_slice_to_set_by_borrows_keys() {
        let hs = hosts();
        let names = slice_to_set_by(&hs, |h| h.name.as_str());
        assert!(names.contains("beta"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_slice_to_set_dedups() {
        let set = slice_to_set(&[3, 1, 3, 2, 1]);
        assert_eq!(set.len(), 3);
        for v in [1, 2, 3] {
            assert!(set.contains(&v));
        }
    }

    #[test]
    fn test_slice_to_set_empty_input() {
        let set = slice_to_set::<u8>(&[]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_map_to_predicate_tests_keys_not_values() {
        let m: HashMap<&str, &str> = [("k", "v")].into_iter().collect();
        let p = map_to_predicate(m);
        assert!(p(&"k"));
        assert!(!p(&"v"));
    }

    #[test]
    fn test_map_to_predicate_btree_containers() {
        let m: BTreeMap<i32, ()> = [(1, ()), (5, ())].into_iter().collect();
        let s: BTreeSet<i32> = [2, 4].into_iter().collect();
        let in_m = map_to_predicate(&m);
        let in_s = map_to_predicate(&s);
        assert!(in_m(&5) && !in_m(&2));
        assert!(in_s(&2) && !in_s(&5));
    }

    #[test]
    fn test_slice_to_predicate_by_matches_derived_key() {
        let in_zone = slice_to_predicate_by(&hosts(), |h| h.zone);
        assert!(in_zone(&1));
        assert!(!in_zone(&3));
    }

    #[test]
    fn test_slice_to_predicate_outlives_input() {
        let p = {
            let hs = hosts();
            slice_to_predicate(&hs)
        };
        assert!(p(&Host { name: "alpha".into(), zone: 1 }));
        assert!(!p(&Host { name: "alpha".into(), zone: 2 }));
    }
}
