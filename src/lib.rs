//! # lox
//!
//! Small, generic functional helpers for everyday collection plumbing.
//!
//! ---
//!
//! ## Free functions, no framework
//!
//! Every helper is an independent generic function. None of them hold state,
//! none of them touch I/O, and all of them are referentially transparent
//! except [`sort_by`] and [`sort_by_ref`], which reorder their argument in place.
//!
//! Helpers are built on each other where it makes sense:
//!
//! ```text
//! identity ─┬─> slice_to_set ──> slice_to_predicate
//!           │        │
//!           │  map_to_predicate
//!           │
//! ignore_index ──> filter_without_index ──> only_empty_by / without_empty_by
//!                  map_without_index          (compose + is_empty_value)
//!
//! sort_by_ref ──> entries_sorted_by_key ──> values_sorted_by_key
//!    (entry_key)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key items | What it does |
//! |--------|-----------|--------------|
//! | [`compose`](mod@compose) | [`identity`], [`compose()`], [`not`], [`ignore_index`] | Function combinators |
//! | [`cond`] | [`if_or_empty`], [`if_or_empty_f`] | Value-or-zero selection, eager and lazy |
//! | [`empty`] | [`Emptiness`], [`Sentinel`], [`is_empty_value`] | What "empty" means for a key type |
//! | [`set`] | [`slice_to_set_by`], [`map_to_predicate`], [`Membership`] | Membership predicates from sequences |
//! | [`filter`] | [`filter_without_index`], [`only_empty_by`], [`without_empty_by`] | Index-free traversal, emptiness partition |
//! | [`order`] | [`sort_by`], [`sort_by_ref`], [`less`] | Stable in-place sort by derived key |
//! | [`narrow`] | [`Narrow`], [`filter_by_type`], [`if_instance_of_f`] | Runtime type narrowing |
//! | [`sorted`] | [`Entry`], [`keys_sorted`], [`values_sorted_by_key`] | Deterministic views over maps |
//! | `bounded` | `slice_to_set_by_bounded` | Heap-free set builders (requires `bounded` feature) |
//!
//! ## Quick tour
//!
//! ```rust
//! use hashbrown::HashMap;
//! use lox::{keys_sorted, slice_to_predicate_by, sort_by, without_empty_by};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { name: &'static str, email: &'static str }
//!
//! let users = vec![
//!     User { name: "bo", email: "" },
//!     User { name: "al", email: "al@example.com" },
//! ];
//!
//! let reachable = without_empty_by(&users, |u| u.email);
//! assert_eq!(reachable.len(), 1);
//!
//! let is_user = slice_to_predicate_by(&users, |u| u.name);
//! assert!(is_user(&"bo"));
//!
//! let mut by_name = users.clone();
//! sort_by(&mut by_name, |u| u.name);
//! assert_eq!(by_name[0].name, "al");
//!
//! let ages: HashMap<&str, u32> = [("b", 2), ("a", 1)].into_iter().collect();
//! assert_eq!(keys_sorted(ages), vec!["a", "b"]);
//! ```
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default and needs only `alloc`. Hash sets and
//! maps come from `hashbrown`. Enable `std` to also accept
//! `std::collections::{HashMap, HashSet}` as membership containers and to get
//! `std::error::Error` on the error types.
//!
//! ## Features
//!
//! - `std`: std collection impls and `std::error::Error`.
//! - `serde`: serialisation for [`Entry`], [`Emptiness`] and [`Sentinel`].
//! - `bounded`: fixed-capacity set builders backed by `heapless`.
//! - `tracing`: `trace`-level events for the operations that drop or reorder elements.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// Compiles to nothing unless the `tracing` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub mod compose;
pub mod cond;
pub mod empty;
pub mod filter;
pub mod narrow;
pub mod order;
pub mod set;
pub mod sorted;

/// Heap-free set and predicate builders over `heapless::FnvIndexSet`.
///
/// Enabled by `features = ["bounded"]`.
#[cfg(feature = "bounded")]
pub mod bounded;

pub use compose::{compose, identity, ignore_index, ignore_second, not};
pub use cond::{if_or, if_or_empty, if_or_empty_f, if_or_f};
pub use empty::{is_empty_value, is_not_empty_value, Emptiness, IsEmpty, Sentinel};
pub use filter::{
    filter_indexed, filter_map_indexed, filter_without_index, map_indexed, map_without_index,
    only_empty_by, only_empty_by_in, partition_empty_by, without_empty_by, without_empty_by_in,
};
pub use narrow::{filter_by_type, if_instance_of_f, instance_of, into_filter_by_type, Narrow};
pub use order::{less, sort_by, sort_by_ref};
pub use set::{
    map_to_predicate, slice_to_predicate, slice_to_predicate_by, slice_to_set, slice_to_set_by,
    Membership,
};
pub use sorted::{
    entries, entries_sorted_by_key, entry_key, keys_sorted, values_sorted_by_key, Entry,
};
