//! `every` and `some`: short-circuiting quantifiers over any [`Collection`].

use std::ops::ControlFlow;

use crate::collection::Collection;
use crate::truthy::Truthy;

/// True unless some `test(element, key, collection)` is falsy.
///
/// Stops at the first falsy result. An empty collection passes.
pub fn every<'a, C, P, R>(collection: &'a C, mut test: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item, C::Key<'a>, &'a C) -> R,
    R: Truthy,
{
    collection
        .try_for_each_entry(|element, key| {
            if test(element, key, collection).is_truthy() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
}

/// True if some `test(element, key, collection)` is truthy.
///
/// Stops at the first truthy result. An empty collection fails.
pub fn some<'a, C, P, R>(collection: &'a C, mut test: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a C::Item, C::Key<'a>, &'a C) -> R,
    R: Truthy,
{
    collection
        .try_for_each_entry(|element, key| {
            if test(element, key, collection).is_truthy() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
}

/// [`every`] with the default test: each element's own truthiness.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |element, _, _| element.is_truthy())
}

/// [`some`] with the default test: each element's own truthiness.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |element, _, _| element.is_truthy())
}
