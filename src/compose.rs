//! Function combinators.
//!
//! The building blocks the rest of the crate is written in terms of:
//!
//! - [`identity`]: the do-nothing key selector.
//! - [`compose`]: right-to-left composition, `compose(f, g)(x) == f(g(x))`.
//! - [`not`]: predicate negation.
//! - [`ignore_second`] / [`ignore_index`]: fit a unary function into a binary
//!   slot, typically an index-aware traversal callback.

/// Return the argument unchanged.
///
/// ```rust
/// assert_eq!(lox::identity(7), 7);
/// ```
#[inline]
pub fn identity<T>(v: T) -> T {
    v
}

/// Compose two unary functions right to left.
///
/// The returned function evaluates `g` first and feeds its result to `f`:
/// `compose(f, g)(x) == f(g(x))`.
///
/// ```rust
/// use lox::compose;
///
/// let double_then_describe = compose(|n: i32| n.to_string(), |n: i32| n * 2);
/// assert_eq!(double_then_describe(21), "42");
/// ```
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |v: A| f(g(v))
}

/// Negate a predicate.
pub fn not<T, F>(f: F) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    move |v: &T| !f(v)
}

/// Adapt a unary function to a binary signature by discarding the second argument.
pub fn ignore_second<A, B, R, F>(f: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> R,
{
    move |v: A, _: B| f(v)
}

/// [`ignore_second`] with the discarded argument fixed to a positional index.
///
/// This is the shape index-aware traversals such as
/// [`filter_indexed`](crate::filter::filter_indexed) expect.
#[inline]
pub fn ignore_index<A, R, F>(f: F) -> impl Fn(A, usize) -> R
where
    F: Fn(A) -> R,
{
    ignore_second::<A, usize, R, F>(f)
}
