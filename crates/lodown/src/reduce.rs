//! `reduce` and `fold`.

use crate::iter::each;

/// Fold `sequence` with `func(accumulator, element, index)`.
///
/// With `seed: None` the first element is the initial accumulator and
/// `func` first runs at index 1. With `Some(seed)` folding starts at index 0.
/// An empty sequence yields the seed, which is `None` when none was given.
pub fn reduce<T, F>(sequence: &[T], mut func: F, seed: Option<T>) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T, usize) -> T,
{
    let mut accumulator = seed;
    each(sequence, |element, index, _| {
        accumulator = Some(match accumulator.take() {
            Some(acc) => func(acc, element, index),
            None => element.clone(),
        });
    });
    accumulator
}

/// Seeded fold whose accumulator type may differ from the element type.
pub fn fold<T, A, F>(sequence: &[T], mut func: F, seed: A) -> A
where
    F: FnMut(A, &T, usize) -> A,
{
    sequence
        .iter()
        .enumerate()
        .fold(seed, |acc, (index, element)| func(acc, element, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseeded_sum() {
        assert_eq!(reduce(&[1, 2, 3, 4], |a, b, _| a + b, None), Some(10));
    }

    #[test]
    fn unseeded_skips_first_index() {
        let mut indices = Vec::new();
        reduce(
            &[1, 2, 3],
            |a, b, index| {
                indices.push(index);
                a + b
            },
            None,
        );
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn seeded_starts_at_index_zero() {
        let mut indices = Vec::new();
        let total = reduce(
            &[1, 2, 3],
            |a, b, index| {
                indices.push(index);
                a * b
            },
            Some(10),
        );
        assert_eq!(total, Some(60));
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn empty_sequence_returns_seed() {
        assert_eq!(reduce::<i32, _>(&[], |a, b, _| a + b, None), None);
        assert_eq!(reduce(&[], |a, b, _| a + b, Some(7)), Some(7));
    }

    #[test]
    fn single_element_without_seed() {
        assert_eq!(reduce(&["only"], |a, _, _| a, None), Some("only"));
    }

    #[test]
    fn fold_changes_accumulator_type() {
        let joined = fold(&[1, 2, 3], |acc: String, n, _| format!("{acc}{n}"), String::new());
        assert_eq!(joined, "123");
        assert_eq!(fold(&Vec::<i32>::new(), |acc, _, _| acc + 1, 0), 0);
    }
}
