//! Conditional value selection: a value, or the empty value of its type.
//!
//! Two evaluation strategies are offered and they are **not** interchangeable:
//!
//! - [`if_or_empty`] / [`if_or`] take an already computed value. Whatever
//!   expression produced it ran before the call, whatever the condition.
//! - [`if_or_empty_f`] / [`if_or_f`] take a thunk and call it only when the
//!   condition holds.
//!
//! The `_empty` forms use `T::default()` as the empty value. The plain forms
//! take an explicit sentinel for types whose `Default` is not a meaningful
//! "nothing".

/// `result` if `condition` holds, otherwise `T::default()`.
///
/// ```rust
/// use lox::if_or_empty;
///
/// assert_eq!(if_or_empty(true, 5), 5);
/// assert_eq!(if_or_empty(false, 5), 0);
/// assert_eq!(if_or_empty(false, String::from("x")), "");
/// ```
#[inline]
pub fn if_or_empty<T: Default>(condition: bool, result: T) -> T {
    if_or(condition, result, T::default())
}

/// `f()` if `condition` holds, otherwise `T::default()`. `f` is not called
/// when the condition is false.
///
/// ```rust
/// use lox::if_or_empty_f;
///
/// let v: Vec<u8> = if_or_empty_f(false, || unreachable!());
/// assert!(v.is_empty());
/// ```
#[inline]
pub fn if_or_empty_f<T, F>(condition: bool, f: F) -> T
where
    T: Default,
    F: FnOnce() -> T,
{
    if_or_f(condition, f, T::default)
}

/// `result` if `condition` holds, otherwise the caller-supplied `empty`.
#[inline]
pub fn if_or<T>(condition: bool, result: T, empty: T) -> T {
    if condition {
        result
    } else {
        empty
    }
}

/// Lazy [`if_or`]: exactly one of `f` and `empty` is called.
#[inline]
pub fn if_or_f<T, F, E>(condition: bool, f: F, empty: E) -> T
where
    F: FnOnce() -> T,
    E: FnOnce() -> T,
{
    if condition {
        f()
    } else {
        empty()
    }
}
