//! The `Collection` trait: keyed, short-circuitable traversal.
//!
//! Sequences are keyed by `usize` index and visited in ascending order.
//! Mappings are keyed by `&str` and visited in the mapping's own enumeration
//! order (sorted for `BTreeMap`, unspecified for `HashMap`, insertion order
//! for `serde_json::Map`). `serde_json::Value` picks between the two at
//! runtime; see [`crate::json`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::ops::ControlFlow;

/// A container whose entries can be visited as `(element, key)` pairs.
///
/// The traversal stops as soon as the visitor returns `ControlFlow::Break`,
/// which is what lets `every` and `some` short-circuit.
pub trait Collection {
    /// The element type.
    type Item;

    /// The position of an element: an index for sequences, a key for mappings.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Visit entries in order until `f` breaks.
    fn try_for_each_entry<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Sequences ───────────────────────────────────────────────────────────

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        for (index, element) in self.iter().enumerate() {
            f(element, index)?;
        }
        ControlFlow::Continue(())
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        self.as_slice().try_for_each_entry(f)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a> = usize where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        self.as_slice().try_for_each_entry(f)
    }

    fn len(&self) -> usize {
        N
    }
}

// ── Mappings ────────────────────────────────────────────────────────────

impl<V> Collection for BTreeMap<String, V> {
    type Item = V;
    type Key<'a> = &'a str where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        for (key, value) in self {
            f(value, key.as_str())?;
        }
        ControlFlow::Continue(())
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<V, S: BuildHasher> Collection for HashMap<String, V, S> {
    type Item = V;
    type Key<'a> = &'a str where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        for (key, value) in self {
            f(value, key.as_str())?;
        }
        ControlFlow::Continue(())
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_visits_in_index_order() {
        let items = ["a", "b", "c"];
        let mut visited = Vec::new();
        let _ = items[..].try_for_each_entry(|element, index| {
            visited.push((index, *element));
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(visited, vec![(0, "a"), (1, "b"), (2, "c")]);
        assert_eq!(Collection::len(&items[..]), 3);
    }

    #[test]
    fn btree_map_visits_in_key_order() {
        let mut map = BTreeMap::new();
        map.insert("zeta".to_string(), 1);
        map.insert("alpha".to_string(), 2);
        let mut keys = Vec::new();
        let _ = map.try_for_each_entry(|_, key| {
            keys.push(key.to_string());
            ControlFlow::<()>::Continue(())
        });
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn traversal_stops_on_break() {
        let items = vec![1, 2, 3, 4];
        let mut seen = Vec::new();
        let flow = items.try_for_each_entry(|element, index| {
            seen.push(*element);
            if index == 1 {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(1));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn empty_collections_report_empty() {
        let empty: Vec<u8> = Vec::new();
        assert!(Collection::is_empty(&empty));
        assert!(Collection::is_empty(&HashMap::<String, u8>::new()));
    }
}
