//! The filtering family: `filter`, `reject`, `partition`, `unique`.
//!
//! All of them return new vectors and leave the input untouched. `reject`
//! is `filter` with the test negated, and `partition` runs both, so a test
//! with side effects sees every element twice during a partition.

use crate::iter::each;
use crate::search::index_of_by;
use crate::truthy::Truthy;

/// Elements whose `test(element, index, sequence)` is truthy, in order.
pub fn filter<T, P, R>(sequence: &[T], mut test: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> R,
    R: Truthy,
{
    let mut result = Vec::new();
    each(sequence, |element, index, sequence| {
        if test(element, index, sequence).is_truthy() {
            result.push(element.clone());
        }
    });
    result
}

/// Elements whose `test(element, index, sequence)` is falsy, in order.
pub fn reject<T, P, R>(sequence: &[T], mut test: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> R,
    R: Truthy,
{
    filter(sequence, |element, index, sequence| {
        !test(element, index, sequence).is_truthy()
    })
}

/// `(filter(sequence, test), reject(sequence, test))`.
pub fn partition<T, P, R>(sequence: &[T], mut test: P) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> R,
    R: Truthy,
{
    let passed = filter(sequence, &mut test);
    let failed = reject(sequence, &mut test);
    (passed, failed)
}

/// First occurrence of each distinct value, in order of first appearance.
pub fn unique<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    unique_by(sequence, |a, b| a == b)
}

/// [`unique`] with a caller-supplied equality.
///
/// An element survives when searching for it finds its own index. Values
/// that are not equal to themselves (NaN) are never found and so dropped.
pub fn unique_by<T, F>(sequence: &[T], mut eq: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    filter(sequence, |element, index, sequence| {
        index_of_by(sequence, element, &mut eq) == Some(index)
    })
}
