//! `map` and `pluck`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::iter::each;

/// A keyed record whose fields can be read by name.
pub trait Record {
    type Value;

    fn field(&self, key: &str) -> Option<&Self::Value>;
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn field(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

/// `func(element, index, sequence)` for each element, in order.
///
/// `func` runs exactly once per element.
pub fn map<T, U, F>(sequence: &[T], mut func: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut result = Vec::with_capacity(sequence.len());
    each(sequence, |element, index, sequence| {
        result.push(func(element, index, sequence));
    });
    result
}

/// The `key` field of every record; `None` where a record lacks it.
pub fn pluck<R>(sequence: &[R], key: &str) -> Vec<Option<R::Value>>
where
    R: Record,
    R::Value: Clone,
{
    map(sequence, |record, _, _| record.field(key).cloned())
}
