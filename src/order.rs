//! Ordering helpers.
//!
//! [`sort_by`] and [`sort_by_ref`] are the only helpers in the crate with a
//! side effect: they reorder their argument in place. Both sorts are stable, so
//! elements with equal keys keep their input order.

use core::cmp::Ordering;

/// Sort `seq` in place by ascending `key_fn(element)`.
///
/// The key is compared with `<` and `>`; anything else counts as equal.
/// `key_fn` is called on both sides of every comparison, so it should be cheap
/// and must be deterministic.
///
/// ```rust
/// use lox::sort_by;
///
/// let mut words = vec!["pear", "fig", "apple", "kiwi"];
/// sort_by(&mut words, |w| w.len());
/// assert_eq!(words, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<T, R, F>(seq: &mut [T], key_fn: F)
where
    R: Ord,
    F: Fn(&T) -> R,
{
    trace!(len = seq.len(), "sorting by derived key");
    seq.sort_by(|a, b| compare(&key_fn(a), &key_fn(b)));
}

/// [`sort_by`] for key selectors that borrow the key out of the element.
///
/// Avoids cloning keys such as `String` fields on every comparison.
///
/// ```rust
/// use lox::order::sort_by_ref;
///
/// let mut people = vec![("zoe".to_string(), 31), ("abe".to_string(), 40)];
/// sort_by_ref(&mut people, |p| p.0.as_str());
/// assert_eq!(people[0].0, "abe");
/// ```
pub fn sort_by_ref<T, R, F>(seq: &mut [T], key_fn: F)
where
    R: Ord + ?Sized,
    F: Fn(&T) -> &R,
{
    trace!(len = seq.len(), "sorting by borrowed key");
    seq.sort_by(|a, b| compare(key_fn(a), key_fn(b)));
}

fn compare<R: PartialOrd + ?Sized>(a: &R, b: &R) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// `a < b`.
///
/// ```rust
/// assert!(lox::less("abc", "abd"));
/// assert!(!lox::less(&2, &2));
/// ```
#[inline]
pub fn less<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}
