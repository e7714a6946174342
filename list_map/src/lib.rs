//! [ListMap] is an ordered map stored as two parallel lists, one holding the keys and one holding
//! the values, where position `i` of one list belongs to position `i` of the other.
//!
//! This is the shape that list-only persistence formats (and the property inspectors of visual
//! editors) can store and edit. Within the process the two lists are only reachable through a
//! regular map interface, so they can never get out of sync. With the `serde` feature enabled,
//! a [ListMap] serializes as a struct with a `keys` and a `values` field.
//!
//! All lookups are linear scans over the key list and no `Hash` or `Ord` bound is required.
//! This is intended for small maps, tens of entries, where the scan is cheap.
//!
//! Insertion appends to the end, removal preserves the order of the remaining entries. Keys are
//! kept unique by every operation of this crate, but lists loaded via [ListMap::from_parts] or
//! deserialization may contain repeated keys. In that case the first occurrence is the one that
//! is found, updated and removed.
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod error;
mod util;

#[cfg(feature = "serde")]
mod serde_impl;

pub mod list_map;

pub use error::Error;
pub use list_map::ListMap;
