//! Truthiness of predicate results.
//!
//! Predicates passed to `filter`, `every`, `some` and friends may return any
//! `Truthy` value, not only `bool`. The rules follow JavaScript: `false`,
//! zero, NaN, the empty string, `null` and `None` are falsy; everything else,
//! including empty arrays and objects, is truthy.

use std::collections::{BTreeMap, HashMap};

/// A value that can be coerced to a boolean.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! int_truthy {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

int_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

// Containers are objects: truthy even when empty.

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    fn is_truthy(&self) -> bool {
        true
    }
}
