//! Trait impls that make `serde_json::Value` a first-class collection.

use std::fmt;
use std::ops::ControlFlow;

use serde_json::{Map, Value};
use tracing::debug;

use crate::collection::Collection;
use crate::merge::Mapping;
use crate::transform::Record;
use crate::truthy::Truthy;
use crate::types::{TypeTag, Typed};

/// Position of an entry inside a JSON value: an array index or an object key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey<'a> {
    Index(usize),
    Name(&'a str),
}

impl EntryKey<'_> {
    /// The key as an array index, if it is one.
    ///
    /// Names count only in canonical form (`"2"`, not `"02"` or `"+2"`).
    pub fn as_index(self) -> Option<usize> {
        match self {
            EntryKey::Index(index) => Some(index),
            EntryKey::Name(name) => name
                .parse::<usize>()
                .ok()
                .filter(|index| index.to_string() == name),
        }
    }

    /// The key as a JSON value: a number for indices, a string for names.
    pub fn to_value(self) -> Value {
        match self {
            EntryKey::Index(index) => Value::from(index),
            EntryKey::Name(name) => Value::from(name),
        }
    }
}

impl fmt::Display for EntryKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKey::Index(index) => write!(f, "{index}"),
            EntryKey::Name(name) => f.write_str(name),
        }
    }
}

// ── Collection ──────────────────────────────────────────────────────────

impl Collection for Value {
    type Item = Value;
    type Key<'a> = EntryKey<'a> where Self: 'a;

    fn try_for_each_entry<'a, B, F>(&'a self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(&'a Self::Item, Self::Key<'a>) -> ControlFlow<B>,
    {
        match self {
            Value::Array(items) => {
                for (index, element) in items.iter().enumerate() {
                    f(element, EntryKey::Index(index))?;
                }
            }
            Value::Object(map) => {
                for (key, value) in map {
                    f(value, EntryKey::Name(key))?;
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;
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
        Map::len(self)
    }
}

// ── Mapping ─────────────────────────────────────────────────────────────

impl Mapping for Value {
    /// Objects take any key. Arrays take index keys up to their length
    /// (replacing or appending); JSON has no holes, so indices past the end
    /// are skipped. Primitives ignore assignments.
    fn assign<'k>(&mut self, key: Self::Key<'k>, value: Self::Item)
    where
        Self: 'k,
    {
        match self {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
            }
            Value::Array(items) => match key.as_index() {
                Some(index) if index < items.len() => items[index] = value,
                Some(index) if index == items.len() => items.push(value),
                _ => debug!(%key, len = items.len(), "assignment outside array bounds skipped"),
            },
            other => debug!(%key, kind = %other.type_tag(), "assignment to primitive skipped"),
        }
    }
}

impl Mapping for Map<String, Value> {
    fn assign<'k>(&mut self, key: Self::Key<'k>, value: Self::Item)
    where
        Self: 'k,
    {
        self.insert(key.to_owned(), value);
    }
}

// ── Record ──────────────────────────────────────────────────────────────

impl Record for Value {
    type Value = Value;

    fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => EntryKey::Name(key)
                .as_index()
                .and_then(|index| items.get(index)),
            _ => None,
        }
    }
}

impl Record for Map<String, Value> {
    type Value = Value;

    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

// ── Truthy / Typed ──────────────────────────────────────────────────────

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl Typed for Value {
    fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null => TypeTag::Null,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::String(_) => TypeTag::String,
            Value::Array(_) => TypeTag::Array,
            Value::Object(_) => TypeTag::Object,
        }
    }
}

impl Typed for Map<String, Value> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl Truthy for Map<String, Value> {
    fn is_truthy(&self) -> bool {
        true
    }
}
