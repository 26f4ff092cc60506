//! Index-aware traversals, their index-free adapters, and the emptiness partition.
//!
//! The `_indexed` primitives hand the callback each element together with its
//! position. The `_without_index` forms wrap a unary callback with
//! [`ignore_index`] and delegate, so both families share one traversal.
//!
//! [`only_empty_by`] and [`without_empty_by`] split a sequence on whether a
//! derived key is the zero value of its type. For every input they partition
//! the sequence exactly: each element lands in one of the two results, and
//! relative order is preserved in both.
//!
//! All functions copy the kept elements into a new `Vec`; the input is never
//! modified.

use alloc::vec::Vec;

use crate::compose::{compose, ignore_index};
use crate::empty::{is_empty_value, is_not_empty_value, IsEmpty};

// ─── Index-aware primitives ─────────────────────────────────────────────────

/// Keep the elements for which `predicate(element, index)` holds.
pub fn filter_indexed<'s, T, P>(seq: &'s [T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&'s T, usize) -> bool,
{
    seq.iter()
        .enumerate()
        .filter(|&(i, v)| predicate(v, i))
        .map(|(_, v)| v.clone())
        .collect()
}

/// Apply `iteratee(element, index)` to every element, in order.
pub fn map_indexed<'s, T, R, F>(seq: &'s [T], iteratee: F) -> Vec<R>
where
    F: Fn(&'s T, usize) -> R,
{
    seq.iter().enumerate().map(|(i, v)| iteratee(v, i)).collect()
}

/// Map and filter in one pass: `Some` results are kept, `None` dropped.
pub fn filter_map_indexed<'s, T, R, F>(seq: &'s [T], f: F) -> Vec<R>
where
    F: Fn(&'s T, usize) -> Option<R>,
{
    seq.iter().enumerate().filter_map(|(i, v)| f(v, i)).collect()
}

// ─── Index-free adapters ────────────────────────────────────────────────────

/// Keep the elements for which `predicate(element)` holds, preserving order.
///
/// ```rust
/// use lox::filter_without_index;
///
/// let evens = filter_without_index(&[1, 2, 3, 4], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter_without_index<'s, T, P>(seq: &'s [T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&'s T) -> bool,
{
    filter_indexed(seq, ignore_index(predicate))
}

/// Apply `iteratee` to every element. The output has the input's length and order.
pub fn map_without_index<'s, T, R, F>(seq: &'s [T], iteratee: F) -> Vec<R>
where
    F: Fn(&'s T) -> R,
{
    map_indexed(seq, ignore_index(iteratee))
}

// ─── Emptiness partition ────────────────────────────────────────────────────

/// Keep only the elements whose `key_fn(element)` is the zero value of `R`.
///
/// ```rust
/// use lox::only_empty_by;
///
/// let rows = [("a", 0), ("b", 3), ("c", 0)];
/// let unset = only_empty_by(&rows, |r| r.1);
/// assert_eq!(unset, vec![("a", 0), ("c", 0)]);
/// ```
pub fn only_empty_by<'s, T, R, F>(seq: &'s [T], key_fn: F) -> Vec<T>
where
    T: Clone,
    R: Default + PartialEq,
    F: Fn(&'s T) -> R,
{
    filter_without_index(seq, compose(|k: R| is_empty_value(&k), key_fn))
}

/// Keep only the elements whose `key_fn(element)` is not the zero value of `R`.
pub fn without_empty_by<'s, T, R, F>(seq: &'s [T], key_fn: F) -> Vec<T>
where
    T: Clone,
    R: Default + PartialEq,
    F: Fn(&'s T) -> R,
{
    filter_without_index(seq, compose(|k: R| is_not_empty_value(&k), key_fn))
}

/// [`only_empty_by`] with an explicit emptiness test instead of `R::default()`.
///
/// Pass an [`Emptiness`](crate::Emptiness) when `R: Default`, or a
/// [`Sentinel`](crate::Sentinel) for key types without one.
///
/// ```rust
/// use lox::{only_empty_by_in, Sentinel};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Code(u16);
///
/// let codes = [Code(200), Code(0xFFFF), Code(404)];
/// let missing = only_empty_by_in(&codes, |c| c.clone(), &Sentinel(Code(0xFFFF)));
/// assert_eq!(missing, vec![Code(0xFFFF)]);
/// ```
pub fn only_empty_by_in<'s, T, R, F, E>(seq: &'s [T], key_fn: F, emptiness: &E) -> Vec<T>
where
    T: Clone,
    F: Fn(&'s T) -> R,
    E: IsEmpty<R> + ?Sized,
{
    filter_without_index(seq, |v| emptiness.is_empty_key(&key_fn(v)))
}

/// [`without_empty_by`] with an explicit emptiness test instead of `R::default()`.
pub fn without_empty_by_in<'s, T, R, F, E>(seq: &'s [T], key_fn: F, emptiness: &E) -> Vec<T>
where
    T: Clone,
    F: Fn(&'s T) -> R,
    E: IsEmpty<R> + ?Sized,
{
    filter_without_index(seq, |v| !emptiness.is_empty_key(&key_fn(v)))
}

/// Both halves of the emptiness partition in a single pass.
///
/// Returns `(only_empty, without_empty)`; `key_fn` runs once per element.
pub fn partition_empty_by<'s, T, R, F>(seq: &'s [T], key_fn: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    R: Default + PartialEq,
    F: Fn(&'s T) -> R,
{
    let (empty, filled): (Vec<T>, Vec<T>) = seq
        .iter()
        .cloned()
        .zip(seq.iter().map(|v| is_empty_value(&key_fn(v))))
        .fold((Vec::new(), Vec::new()), |(mut empty, mut filled), (v, is_empty)| {
            if is_empty {
                empty.push(v);
            } else {
                filled.push(v);
            }
            (empty, filled)
        });
    trace!(
        total = seq.len(),
        empty = empty.len(),
        filled = filled.len(),
        "partitioned by emptiness"
    );
    (empty, filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::empty::{Emptiness, Sentinel};

    #[derive(Clone, Debug, PartialEq)]
    struct Task {
        id: u32,
        owner: &'static str,
        estimate: Option<u8>,
    }

    fn tasks() -> Vec<Task> {
        vec![
            Task { id: 1, owner: "ana", estimate: Some(3) },
            Task { id: 2, owner: "", estimate: None },
            Task { id: 3, owner: "li", estimate: None },
            Task { id: 4, owner: "", estimate: Some(0) },
        ]
    }

    fn ids(ts: &[Task]) -> Vec<u32> {
        map_without_index(ts, |t| t.id)
    }

    #[test]
    fn test_filter_indexed_sees_positions() {
        let odd_positions = filter_indexed(&["a", "b", "c", "d"], |_, i| i % 2 == 1);
        assert_eq!(odd_positions, vec!["b", "d"]);
    }

    #[test]
    fn test_map_indexed_passes_index() {
        let tagged = map_indexed(&['x', 'y'], |c, i| (i, *c));
        assert_eq!(tagged, vec![(0, 'x'), (1, 'y')]);
    }

    #[test]
    fn test_filter_map_indexed_drops_none() {
        let parsed = filter_map_indexed(&["1", "x", "3"], |s, _| s.parse::<i32>().ok());
        assert_eq!(parsed, vec![1, 3]);
    }

    #[test]
    fn test_filter_without_index_preserves_order() {
        let kept = filter_without_index(&[5, 1, 4, 2, 3], |n| *n > 2);
        assert_eq!(kept, vec![5, 4, 3]);
    }

    #[test]
    fn test_map_without_index_is_one_to_one() {
        let input = [1, 2, 3];
        let out = map_without_index(&input, |n| n * 10);
        assert_eq!(out.len(), input.len());
        assert_eq!(out, vec![10, 20, 30]);
    }

    #[test]
    fn test_map_without_index_can_borrow() {
        let ts = tasks();
        let owners: Vec<&str> = map_without_index(&ts, |t| t.owner);
        assert_eq!(owners, vec!["ana", "", "li", ""]);
    }

    #[test]
    fn test_only_empty_by_string_key() {
        assert_eq!(ids(&only_empty_by(&tasks(), |t| t.owner)), vec![2, 4]);
    }

    #[test]
    fn test_without_empty_by_string_key() {
        assert_eq!(ids(&without_empty_by(&tasks(), |t| t.owner)), vec![1, 3]);
    }

    #[test]
    fn test_option_zero_is_none_not_some_zero() {
        assert_eq!(ids(&only_empty_by(&tasks(), |t| t.estimate)), vec![2, 3]);
        assert_eq!(ids(&without_empty_by(&tasks(), |t| t.estimate)), vec![1, 4]);
    }

    #[test]
    fn test_partition_matches_separate_calls() {
        let ts = tasks();
        let (empty, filled) = partition_empty_by(&ts, |t| t.owner);
        assert_eq!(empty, only_empty_by(&ts, |t| t.owner));
        assert_eq!(filled, without_empty_by(&ts, |t| t.owner));
        assert_eq!(empty.len() + filled.len(), ts.len());
    }

    #[test]
    fn test_sentinel_emptiness() {
        let readings = [-1, 0, 7, -1];
        let unset = Emptiness::Sentinel(-1);
        assert_eq!(only_empty_by_in(&readings, |r| *r, &unset), vec![-1, -1]);
        assert_eq!(without_empty_by_in(&readings, |r| *r, &unset), vec![0, 7]);
    }

    #[test]
    fn test_zero_emptiness_matches_default_helpers() {
        let readings = [0, 3, 0];
        let zero: Emptiness<i32> = Emptiness::Zero;
        assert_eq!(
            only_empty_by_in(&readings, |r| *r, &zero),
            only_empty_by(&readings, |r| *r)
        );
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Code(u16);

    #[test]
    fn test_sentinel_partition_of_key_without_default() {
        let xs = vec![Code(200), Code(0xFFFF), Code(404), Code(0xFFFF), Code(0)];
        let unset = Sentinel(Code(0xFFFF));

        let missing = only_empty_by_in(&xs, |c| c.clone(), &unset);
        let present = without_empty_by_in(&xs, |c| c.clone(), &unset);

        assert_eq!(missing, vec![Code(0xFFFF), Code(0xFFFF)]);
        assert_eq!(present, vec![Code(200), Code(404), Code(0)]);
        assert_eq!(missing.len() + present.len(), xs.len());
    }

    #[test]
    fn test_sentinel_struct_matches_sentinel_variant() {
        let readings = [-1, 0, 7, -1];
        assert_eq!(
            only_empty_by_in(&readings, |r| *r, &Sentinel(-1)),
            only_empty_by_in(&readings, |r| *r, &Emptiness::Sentinel(-1))
        );
    }

    #[test]
    fn test_empty_input() {
        let none: [Task; 0] = [];
        assert!(only_empty_by(&none, |t| t.id).is_empty());
        assert!(without_empty_by(&none, |t| t.id).is_empty());
        assert_eq!(partition_empty_by(&none, |t| t.id), (vec![], vec![]));
    }
}
