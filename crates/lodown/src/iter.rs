//! `each`: the traversal primitive the rest of the library is built on.

use std::ops::ControlFlow;

use crate::collection::Collection;

/// Call `action(element, key, collection)` for every entry of `collection`.
///
/// Sequences are visited by ascending index, mappings by key in the
/// mapping's enumeration order. Results are only observable through the
/// action's side effects.
pub fn each<'a, C, F>(collection: &'a C, mut action: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    let _ = collection.try_for_each_entry(|element, key| {
        action(element, key, collection);
        ControlFlow::<()>::Continue(())
    });
}
