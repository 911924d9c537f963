//! `extend`: shallow merge of mappings into a target, in place.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::collection::Collection;
use crate::iter::each;

/// A collection that accepts assignments at one of its own keys.
pub trait Mapping: Collection {
    /// Set the entry at `key` to `value`, replacing any previous value.
    fn assign<'k>(&mut self, key: Self::Key<'k>, value: Self::Item)
    where
        Self: 'k;
}

impl<V> Mapping for BTreeMap<String, V> {
    fn assign<'k>(&mut self, key: Self::Key<'k>, value: Self::Item)
    where
        Self: 'k,
    {
        self.insert(key.to_owned(), value);
    }
}

impl<V, S: BuildHasher> Mapping for HashMap<String, V, S> {
    fn assign<'k>(&mut self, key: Self::Key<'k>, value: Self::Item)
    where
        Self: 'k,
    {
        self.insert(key.to_owned(), value);
    }
}

/// Copy every entry of each source into `target` and return `target`.
///
/// Sources are applied left to right, so later sources win on key
/// collisions. This is the only operation in the crate that mutates an
/// argument.
pub fn extend<'t, 's, M, I>(target: &'t mut M, sources: I) -> &'t mut M
where
    M: Mapping + 's,
    M::Item: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        each(source, |value, key, _| target.assign(key, value.clone()));
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn later_sources_overwrite_earlier() {
        let mut first = object(&[("a", "b"), ("c", "d")]);
        let second = object(&[("b", "c"), ("d", "e")]);
        let third = object(&[("c", "d"), ("e", "f")]);

        let merged = extend(&mut first, [&second, &third]).clone();

        let expected = object(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "f")]);
        assert_eq!(merged, expected);
        assert_eq!(first, expected);
    }

    #[test]
    fn returns_the_target_itself() {
        let mut target = object(&[("x", "1")]);
        let source = object(&[("x", "2")]);
        let target_ptr: *const BTreeMap<String, String> = &target;
        let returned = extend(&mut target, [&source]);
        assert!(std::ptr::eq(returned, target_ptr));
    }

    #[test]
    fn no_sources_is_a_no_op() {
        let mut target: HashMap<String, i32> = HashMap::new();
        target.insert("k".to_string(), 1);
        extend(&mut target, std::iter::empty());
        assert_eq!(target.len(), 1);
    }
}
