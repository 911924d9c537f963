//! Identity and runtime type classification.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

/// Return `value` unchanged.
pub fn identity<T>(value: T) -> T {
    value
}

/// Classification of a value, separating arrays, objects and `null` from the
/// primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Array,
    Object,
    Null,
    Number,
    String,
    Boolean,
    Undefined,
    Function,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Undefined => "undefined",
            Self::Function => "function",
        }
    }

    /// True for the two collection kinds `each` can traverse.
    pub fn is_collection(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values that know their [`TypeTag`].
pub trait Typed {
    fn type_tag(&self) -> TypeTag;
}

/// Classify `value`.
pub fn type_of<T: Typed + ?Sized>(value: &T) -> TypeTag {
    value.type_tag()
}

/// Marks a callable so it classifies as `"function"`.
#[derive(Debug, Clone, Copy)]
pub struct Func<F>(pub F);

impl<F> Typed for Func<F> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Function
    }
}

macro_rules! typed_as {
    ($tag:ident: $($t:ty),*) => {
        $(impl Typed for $t {
            fn type_tag(&self) -> TypeTag {
                TypeTag::$tag
            }
        })*
    };
}

typed_as!(Number: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
typed_as!(String: str, String, char);
typed_as!(Boolean: bool);
typed_as!(Undefined: ());

impl<T: Typed> Typed for Option<T> {
    fn type_tag(&self) -> TypeTag {
        match self {
            Some(value) => value.type_tag(),
            None => TypeTag::Undefined,
        }
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn type_tag(&self) -> TypeTag {
        (**self).type_tag()
    }
}

impl<T> Typed for [T] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<T> Typed for Vec<T> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<T, const N: usize> Typed for [T; N] {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Array
    }
}

impl<V> Typed for BTreeMap<String, V> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}

impl<V, S> Typed for HashMap<String, V, S> {
    fn type_tag(&self) -> TypeTag {
        TypeTag::Object
    }
}
