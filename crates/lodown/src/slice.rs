//! `first` and `last`: take elements from either end of a sequence.

use serde::Serialize;

/// Result of `first` / `last`.
///
/// Without a count the caller gets the bare element at the end in question
/// (`One`), not a one-element sequence; with a count the caller always gets
/// a new sequence (`Many`), possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Taken<T> {
    One(Option<T>),
    Many(Vec<T>),
}

impl<T> Taken<T> {
    /// The elements as a sequence: `One(Some(x))` becomes `[x]`.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Taken::One(element) => element.into_iter().collect(),
            Taken::Many(elements) => elements,
        }
    }
}

/// Take `count` elements from the front of `sequence`.
///
/// - `None` returns the element at index 0 (`None` inside if empty).
/// - `Some(n)` with `n < 1` returns an empty sequence.
/// - `Some(n)` beyond the length returns a copy of the whole sequence.
pub fn first<T: Clone>(sequence: &[T], count: Option<i64>) -> Taken<T> {
    match count {
        None => Taken::One(sequence.first().cloned()),
        Some(n) if n < 1 => Taken::Many(Vec::new()),
        Some(n) => {
            let end = clamp_len(n, sequence.len());
            Taken::Many(sequence[..end].to_vec())
        }
    }
}

/// Take `count` elements from the back of `sequence`. Mirror of [`first`].
pub fn last<T: Clone>(sequence: &[T], count: Option<i64>) -> Taken<T> {
    match count {
        None => Taken::One(sequence.last().cloned()),
        Some(n) if n < 1 => Taken::Many(Vec::new()),
        Some(n) => {
            let take = clamp_len(n, sequence.len());
            Taken::Many(sequence[sequence.len() - take..].to_vec())
        }
    }
}

fn clamp_len(count: i64, len: usize) -> usize {
    usize::try_from(count).map_or(len, |n| n.min(len))
}
