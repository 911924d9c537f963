use serde_json::Value;
use tracing::debug;

use super::value::EntryKey;
use crate::filter::unique_by;
use crate::merge;
use crate::quantify;
use crate::search::index_of_by;
use crate::slice::{self, Taken};
use crate::transform;
use crate::truthy::Truthy;
use crate::types::Typed;

/// Strict equality: no coercion and no deep comparison.
///
/// Primitives compare by value (numbers numerically, so `1` equals `1.0`).
/// Arrays and objects are equal only to themselves, i.e. the same place in
/// memory.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            std::ptr::eq(a, b)
        }
        _ => false,
    }
}

/// The elements of an array; any other value reads as an empty sequence.
pub fn as_sequence(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items.as_slice(),
        other => {
            debug!(found = %other.type_tag(), "expected an array, using an empty sequence");
            &[]
        }
    }
}

/// Interpret a count argument.
///
/// Only JSON numbers count; anything else (absent, string, boolean...) means
/// "no count given". Fractions truncate toward zero.
pub fn count_from(count: Option<&Value>) -> Option<i64> {
    match count {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(other) => {
            debug!(found = %other.type_tag(), "count is not a number, treating as omitted");
            None
        }
        None => None,
    }
}

/// Count for `last`. Taking from the back starts at `len - count`, and a
/// fractional start truncates toward the front, so counts of one or more
/// round up (`1.5` takes two).
fn tail_count(count: Option<&Value>) -> Option<i64> {
    match count {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f >= 1.0 => Some(f.ceil() as i64),
            _ => count_from(count),
        },
        _ => count_from(count),
    }
}

/// [`crate::first`] over any JSON value. Non-arrays yield an empty sequence.
pub fn first(value: &Value, count: Option<&Value>) -> Taken<Value> {
    match value {
        Value::Array(items) => slice::first(items, count_from(count)),
        other => {
            debug!(found = %other.type_tag(), "first: not an array");
            Taken::Many(Vec::new())
        }
    }
}

/// [`crate::last`] over any JSON value. Non-arrays yield an empty sequence.
pub fn last(value: &Value, count: Option<&Value>) -> Taken<Value> {
    match value {
        Value::Array(items) => slice::last(items, tail_count(count)),
        other => {
            debug!(found = %other.type_tag(), "last: not an array");
            Taken::Many(Vec::new())
        }
    }
}

/// [`crate::every`] over a JSON document. Only arrays and objects can
/// pass; a primitive is not a collection and yields `false`.
pub fn every<'a, P, R>(value: &'a Value, test: P) -> bool
where
    P: FnMut(&'a Value, EntryKey<'a>, &'a Value) -> R,
    R: Truthy,
{
    if !value.type_tag().is_collection() {
        debug!(found = %value.type_tag(), "every: not a collection");
        return false;
    }
    quantify::every(value, test)
}

/// [`crate::some`] over a JSON document. Primitives yield `false`.
pub fn some<'a, P, R>(value: &'a Value, test: P) -> bool
where
    P: FnMut(&'a Value, EntryKey<'a>, &'a Value) -> R,
    R: Truthy,
{
    if !value.type_tag().is_collection() {
        debug!(found = %value.type_tag(), "some: not a collection");
        return false;
    }
    quantify::some(value, test)
}

/// Lowest index strictly equal to `value`.
pub fn index_of(sequence: &[Value], value: &Value) -> Option<usize> {
    index_of_by(sequence, value, strict_eq)
}

pub fn contains(sequence: &[Value], value: &Value) -> bool {
    index_of(sequence, value).is_some()
}

/// First occurrences under strict equality. Arrays and objects are never
/// duplicates of each other, however alike their contents.
pub fn unique(sequence: &[Value]) -> Vec<Value> {
    unique_by(sequence, strict_eq)
}

/// The `key` field of every element, `null` where it is missing.
pub fn pluck(sequence: &[Value], key: &str) -> Vec<Value> {
    transform::pluck(sequence, key)
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect()
}

/// Merge each source's entries into `target` and return it.
///
/// Object targets take every key. Array sources contribute their indices as
/// keys. Primitive sources contribute nothing and primitive targets are
/// returned untouched.
pub fn extend<'t>(target: &'t mut Value, sources: &[Value]) -> &'t mut Value {
    if !target.type_tag().is_collection() {
        debug!(kind = %target.type_tag(), "extend: target cannot take entries");
    }
    merge::extend(target, sources)
}
