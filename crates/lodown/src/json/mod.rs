//! The permissive, dynamically typed layer over `serde_json::Value`.
//!
//! `Value` implements [`Collection`](crate::Collection),
//! [`Mapping`](crate::Mapping), [`Record`](crate::Record),
//! [`Truthy`](crate::Truthy) and [`Typed`](crate::Typed), so the generic
//! functions at the crate root accept JSON documents directly and dispatch
//! between array and object traversal at runtime.
//!
//! The functions in this module cover the places where the duck-typed
//! contract differs from the typed one: arguments of the wrong shape degrade
//! to empty results instead of failing, and equality is strict (arrays and
//! objects compare by identity, numbers by numeric value).

mod ops;
mod value;

pub use ops::{
    as_sequence, contains, count_from, every, extend, first, index_of, last, pluck, some,
    strict_eq, unique,
};
pub use value::EntryKey;
