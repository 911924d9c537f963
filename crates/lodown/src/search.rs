//! `index_of` and `contains`.

/// Lowest index whose element equals `value`, or `None`.
///
/// Stops at the first match.
pub fn index_of<T: PartialEq>(sequence: &[T], value: &T) -> Option<usize> {
    index_of_by(sequence, value, |a, b| a == b)
}

/// [`index_of`] with a caller-supplied equality.
pub fn index_of_by<T, F>(sequence: &[T], value: &T, mut eq: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    for (index, element) in sequence.iter().enumerate() {
        if eq(element, value) {
            return Some(index);
        }
    }
    None
}

/// True if `value` occurs in `sequence`.
pub fn contains<T: PartialEq>(sequence: &[T], value: &T) -> bool {
    index_of(sequence, value).is_some()
}
