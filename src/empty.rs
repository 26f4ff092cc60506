//! What counts as "empty" for a derived key.
//!
//! The default notion is the zero value of the type: `R::default()`
//! (`0`, `""`, `None`, an empty `Vec`). Some types have a `Default` that is a
//! perfectly ordinary value; [`Emptiness::Sentinel`] lets the caller name the
//! empty representative explicitly instead. Types with no `Default` at all use
//! [`Sentinel`], which only needs `PartialEq`.
//!
//! Both implement [`IsEmpty`], the test the `_in` partition helpers take.

/// Decides whether a derived key is the empty representative.
pub trait IsEmpty<R: ?Sized> {
    /// `true` when `v` counts as empty.
    fn is_empty_key(&self, v: &R) -> bool;
}

/// `true` when `v` equals the zero value of its type.
///
/// ```rust
/// use lox::is_empty_value;
///
/// assert!(is_empty_value(&0));
/// assert!(is_empty_value(&""));
/// assert!(is_empty_value(&None::<u8>));
/// assert!(!is_empty_value(&"x"));
/// ```
#[inline]
pub fn is_empty_value<R: Default + PartialEq>(v: &R) -> bool {
    *v == R::default()
}

/// `true` when `v` differs from the zero value of its type.
#[inline]
pub fn is_not_empty_value<R: Default + PartialEq>(v: &R) -> bool {
    !is_empty_value(v)
}

/// The empty representative used by the `_in` partition helpers.
///
/// ```rust
/// use lox::Emptiness;
///
/// let zero: Emptiness<i32> = Emptiness::default();
/// assert!(zero.is_empty(&0));
///
/// // -1 marks "unset" for this field, 0 is a real value.
/// let unset = Emptiness::Sentinel(-1);
/// assert!(unset.is_empty(&-1));
/// assert!(!unset.is_empty(&0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Emptiness<R> {
    /// Empty means `R::default()`.
    Zero,
    /// Empty means equal to this value.
    Sentinel(R),
}

impl<R> Default for Emptiness<R> {
    fn default() -> Self {
        Self::Zero
    }
}

impl<R: PartialEq> Emptiness<R> {
    /// Construct a sentinel-based emptiness.
    pub fn sentinel(value: R) -> Self {
        Self::Sentinel(value)
    }

    /// Whether `v` is the empty representative.
    ///
    /// For [`Emptiness::Zero`] this compares against `R::default()`.
    pub fn is_empty(&self, v: &R) -> bool
    where
        R: Default,
    {
        self.matches_sentinel(v).unwrap_or_else(|| is_empty_value(v))
    }

    /// Sentinel-only check that does not require `R: Default`.
    ///
    /// Returns `None` for [`Emptiness::Zero`], since there is nothing to compare
    /// against without a default.
    pub fn matches_sentinel(&self, v: &R) -> Option<bool> {
        match self {
            Self::Zero => None,
            Self::Sentinel(empty) => Some(v == empty),
        }
    }
}

impl<R: Default + PartialEq> IsEmpty<R> for Emptiness<R> {
    fn is_empty_key(&self, v: &R) -> bool {
        self.is_empty(v)
    }
}

/// Empty means equal to the wrapped value. No `Default` needed.
///
/// ```rust
/// use lox::{IsEmpty, Sentinel};
///
/// #[derive(PartialEq)]
/// struct Port(u16);
///
/// let unbound = Sentinel(Port(0));
/// assert!(unbound.is_empty_key(&Port(0)));
/// assert!(!unbound.is_empty_key(&Port(8080)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sentinel<R>(pub R);

impl<R: PartialEq> IsEmpty<R> for Sentinel<R> {
    fn is_empty_key(&self, v: &R) -> bool {
        *v == self.0
    }
}

impl<R> From<Sentinel<R>> for Emptiness<R> {
    fn from(Sentinel(value): Sentinel<R>) -> Self {
        Self::Sentinel(value)
    }
}
