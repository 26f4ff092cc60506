//! Runtime type narrowing over heterogeneous values.
//!
//! A value "narrows" to `R` when its dynamic type is confirmed to be `R` and a
//! reference of that type can be produced. [`Narrow`] is the seam:
//!
//! - **Open set**: `dyn Any` (and its `Send`/`Sync` variants) narrow to any
//!   `'static` type by exact `TypeId` match. Smart pointers and references to
//!   a narrowable value narrow through to it, so `Box<dyn Any>`,
//!   `Rc<dyn Any>`, `Arc<dyn Any + Send + Sync>` and `&dyn Any` all work.
//! - **Closed set**: implement `Narrow<R>` on your own enum, one impl per
//!   variant payload type. `R` may be unsized, which lets a variant narrow to
//!   a trait object it implements.
//!
//! Narrowing never fails loudly. A mismatch is `false` from [`instance_of`],
//! an omission from [`filter_by_type`], or the else branch of
//! [`if_instance_of_f`].
//!
//! ```rust
//! use std::any::Any;
//! use lox::filter_by_type;
//!
//! let mixed: Vec<Box<dyn Any>> = vec![
//!     Box::new(1_i32),
//!     Box::new("x"),
//!     Box::new(2_i32),
//!     Box::new(3.5_f64),
//!     Box::new(3_i32),
//! ];
//! assert_eq!(filter_by_type::<i32, _>(&mixed), vec![1, 2, 3]);
//! ```

use core::any::Any;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::filter::filter_map_indexed;

/// A value whose dynamic type may be `R`.
pub trait Narrow<R: ?Sized> {
    /// `Some` with the narrowed reference when the dynamic type matches `R`.
    fn narrow(&self) -> Option<&R>;
}

impl<R: Any> Narrow<R> for dyn Any {
    fn narrow(&self) -> Option<&R> {
        self.downcast_ref::<R>()
    }
}

impl<R: Any> Narrow<R> for dyn Any + Send {
    fn narrow(&self) -> Option<&R> {
        self.downcast_ref::<R>()
    }
}

impl<R: Any> Narrow<R> for dyn Any + Send + Sync {
    fn narrow(&self) -> Option<&R> {
        self.downcast_ref::<R>()
    }
}

impl<R: ?Sized, T: Narrow<R> + ?Sized> Narrow<R> for Box<T> {
    fn narrow(&self) -> Option<&R> {
        (**self).narrow()
    }
}

impl<R: ?Sized, T: Narrow<R> + ?Sized> Narrow<R> for Rc<T> {
    fn narrow(&self) -> Option<&R> {
        (**self).narrow()
    }
}

impl<R: ?Sized, T: Narrow<R> + ?Sized> Narrow<R> for Arc<T> {
    fn narrow(&self) -> Option<&R> {
        (**self).narrow()
    }
}

impl<R: ?Sized, T: Narrow<R> + ?Sized> Narrow<R> for &T {
    fn narrow(&self) -> Option<&R> {
        (**self).narrow()
    }
}

/// Whether `v`'s dynamic type matches `R`.
///
/// ```rust
/// use std::any::Any;
/// use lox::instance_of;
///
/// let v: Box<dyn Any> = Box::new(5_u8);
/// assert!(instance_of::<u8, _>(&v));
/// assert!(!instance_of::<u16, _>(&v));
/// ```
pub fn instance_of<R, T>(v: &T) -> bool
where
    R: ?Sized,
    T: Narrow<R> + ?Sized,
{
    v.narrow().is_some()
}

/// The narrowed values of the elements that match `R`, in input order.
///
/// Matches are cloned out; non-matching elements are skipped.
pub fn filter_by_type<R, T>(elems: &[T]) -> Vec<R>
where
    R: Clone,
    T: Narrow<R>,
{
    let narrowed: Vec<R> = filter_map_indexed(elems, |e, _| e.narrow().cloned());
    trace!(
        matched = narrowed.len(),
        dropped = elems.len() - narrowed.len(),
        "filtered by type"
    );
    narrowed
}

/// Owned [`filter_by_type`] over boxed `dyn Any` values.
///
/// Matching boxes are unwrapped without cloning; the rest are dropped.
pub fn into_filter_by_type<R: Any>(elems: Vec<Box<dyn Any>>) -> Vec<R> {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    let total = elems.len();
    let narrowed: Vec<R> = elems
        .into_iter()
        .filter_map(|b| b.downcast::<R>().ok())
        .map(|b| *b)
        .collect();
    trace!(
        matched = narrowed.len(),
        dropped = total - narrowed.len(),
        "filtered owned values by type"
    );
    narrowed
}

/// Call `if_fn` with the narrowed value when `v` matches `R`, otherwise call
/// `else_fn` with `v` itself. Exactly one of the two runs, exactly once.
///
/// ```rust
/// use std::any::Any;
/// use lox::if_instance_of_f;
///
/// let describe = |v: &Box<dyn Any>| {
///     if_instance_of_f::<i32, _, _>(v, |n| format!("int {}", n * 2), |_| "other".to_string())
/// };
/// assert_eq!(describe(&(Box::new(5_i32) as Box<dyn Any>)), "int 10");
/// assert_eq!(describe(&(Box::new("x") as Box<dyn Any>)), "other");
/// ```
pub fn if_instance_of_f<R, T, O>(
    v: &T,
    if_fn: impl FnOnce(&R) -> O,
    else_fn: impl FnOnce(&T) -> O,
) -> O
where
    R: ?Sized,
    T: Narrow<R> + ?Sized,
{
    match v.narrow() {
        Some(narrowed) => if_fn(narrowed),
        None => else_fn(v),
    }
}
