//! Collection utilities for ordered sequences and string-keyed mappings.
//!
//! Every operation is a free function. Sequences are slices (`&[T]`), and the
//! functions that also accept mappings (`each`, `every`, `some`, `extend`) go
//! through the [`Collection`] trait, so the sequence-vs-mapping choice is made
//! by the type at the call site rather than inspected at runtime.
//!
//! ## Modules
//!
//! - [`collection`]: the `Collection` trait and its sequence/mapping impls
//! - [`truthy`]: JavaScript-style truthiness for predicate results
//! - [`types`]: `identity`, `TypeTag` and the `Typed` trait
//! - [`slice`]: `first` / `last`
//! - [`iter`]: `each`
//! - [`search`]: `index_of` / `contains`
//! - [`filter`]: `filter`, `reject`, `partition`, `unique`
//! - [`transform`]: `map`, `pluck`
//! - [`quantify`]: `every`, `some`
//! - [`reduce`]: `reduce`, `fold`
//! - [`merge`]: `extend`
//! - [`json`]: the permissive variants over `serde_json::Value`
//!
//! Nothing here allocates shared state or performs I/O. Only `extend`
//! mutates an argument.

pub mod collection;
pub mod filter;
pub mod iter;
pub mod json;
pub mod merge;
pub mod quantify;
pub mod reduce;
pub mod search;
pub mod slice;
pub mod transform;
pub mod truthy;
pub mod types;

pub use collection::Collection;
pub use filter::{filter, partition, reject, unique, unique_by};
pub use iter::each;
pub use merge::{extend, Mapping};
pub use quantify::{every, every_truthy, some, some_truthy};
pub use reduce::{fold, reduce};
pub use search::{contains, index_of, index_of_by};
pub use slice::{first, last, Taken};
pub use transform::{map, pluck, Record};
pub use truthy::Truthy;
pub use types::{identity, type_of, Func, TypeTag, Typed};
