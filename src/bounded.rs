//! Fixed-capacity set and predicate builders.
//!
//! Same semantics as [`slice_to_set_by`](crate::set::slice_to_set_by) and
//! [`slice_to_predicate_by`](crate::set::slice_to_predicate_by), but the set is
//! a `heapless::FnvIndexSet<K, N>` living inline, with no allocator involved.
//!
//! `N` bounds the number of **distinct** keys. Duplicates collapse before they
//! count against it, so a long sequence over a small key space fits. When the
//! distinct keys do not fit, the build fails with [`CapacityError`] rather than
//! silently dropping keys. `N` must be a power of two (a `heapless` requirement).

use core::fmt::{self, Display, Formatter};
use core::hash::{BuildHasher, Hash};

use heapless::{FnvIndexSet, IndexMap, IndexSet};

use crate::set::{map_to_predicate, Membership};

/// More distinct keys than the fixed-capacity set can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    /// Capacity of the set that overflowed.
    pub capacity: usize,
}

impl Display for CapacityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "more than {} distinct keys do not fit in the bounded set",
            self.capacity
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapacityError {}

impl<K, S, const N: usize> Membership<K> for IndexSet<K, S, N>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains(key)
    }
}

impl<K, V, S, const N: usize> Membership<K> for IndexMap<K, V, S, N>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn contains_member(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

/// Collect `key_fn(element)` for every element into a set of capacity `N`.
///
/// ```rust
/// use heapless::FnvIndexSet;
/// use lox::bounded::slice_to_set_by_bounded;
///
/// let levels = ["info", "warn", "info", "error", "warn"];
/// let distinct: FnvIndexSet<&str, 4> = slice_to_set_by_bounded(&levels, |l| *l).unwrap();
/// assert_eq!(distinct.len(), 3);
/// ```
pub fn slice_to_set_by_bounded<'s, const N: usize, V, K, F>(
    seq: &'s [V],
    key_fn: F,
) -> Result<FnvIndexSet<K, N>, CapacityError>
where
    K: Eq + Hash,
    F: Fn(&'s V) -> K,
{
    let mut set = FnvIndexSet::new();
    for v in seq {
        set.insert(key_fn(v))
            .map_err(|_| CapacityError { capacity: N })?;
    }
    Ok(set)
}

/// Membership predicate over the derived keys of `seq`, backed by a set of capacity `N`.
pub fn slice_to_predicate_by_bounded<const N: usize, V, K, F>(
    seq: &[V],
    key_fn: F,
) -> Result<impl Fn(&K) -> bool, CapacityError>
where
    K: Eq + Hash,
    F: Fn(&V) -> K,
{
    let set: FnvIndexSet<K, N> = slice_to_set_by_bounded(seq, key_fn)?;
    Ok(map_to_predicate(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_do_not_consume_capacity() {
        let xs = [1, 1, 2, 2, 3, 3, 1, 2];
        let set: FnvIndexSet<i32, 4> = slice_to_set_by_bounded(&xs, |x| *x).unwrap();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_exact_fit() {
        let xs = [10_u8, 20, 30, 40];
        let set: FnvIndexSet<u8, 4> = slice_to_set_by_bounded(&xs, |x| *x).unwrap();
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_overflow_reports_capacity() {
        let xs = [1, 2, 3, 4, 5];
        let err = slice_to_set_by_bounded::<4, _, _, _>(&xs, |x| *x).unwrap_err();
        assert_eq!(err, CapacityError { capacity: 4 });
    }

    #[test]
    fn test_bounded_predicate() {
        let names = ["ada", "bob"];
        let known = slice_to_predicate_by_bounded::<2, _, _, _>(&names, |n| n.len()).unwrap();
        assert!(known(&3));
        assert!(!known(&4));
    }

    #[test]
    fn test_capacity_error_display() {
        let msg = CapacityError { capacity: 8 }.to_string();
        assert!(msg.contains('8'), "msg={}", msg);
    }
}
