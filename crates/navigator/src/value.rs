use derive_more::{Display, From};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A scalar carried by a leaf element
#[derive(Debug, Clone, PartialEq, Display, From)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// A boolean flag
    #[display(fmt = "{}", _0)]
    Bool(bool),

    /// A signed 32-bit integer
    #[display(fmt = "{}", _0)]
    Int(i32),

    /// An unsigned 32-bit integer
    #[display(fmt = "{}", _0)]
    UInt(u32),

    /// A signed 64-bit integer
    #[display(fmt = "{}", _0)]
    Long(i64),

    /// An unsigned 64-bit integer
    #[display(fmt = "{}", _0)]
    ULong(u64),

    /// A double precision float
    #[display(fmt = "{}", _0)]
    Double(f64),

    /// A string
    #[display(fmt = "{}", _0)]
    Text(String),
}

impl Value {
    /// Name of the Rust type stored in this value
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "i32",
            Value::UInt(_) => "u32",
            Value::Long(_) => "i64",
            Value::ULong(_) => "u64",
            Value::Double(_) => "f64",
            Value::Text(_) => "String",
        }
    }

    /// Borrow the string payload, if this is a `Text` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

/// Strict conversion out of a [`Value`]
///
/// A value converts only into the type of its own variant: an `Int` is not
/// readable as `u32`, `f64` or `String`. Absent values are rejected unless the
/// target is an `Option`.
pub trait FromValue: Sized {
    /// Type name reported when a conversion fails
    fn expected() -> &'static str;

    /// Convert a present value, or `None` when the variant does not match
    fn from_value(value: Value) -> Option<Self>;

    /// Result for an element that stores no scalar
    fn from_absent() -> Option<Self> {
        None
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                fn expected() -> &'static str {
                    stringify!($ty)
                }

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
    f64 => Double,
    String => Text,
}

impl FromValue for Value {
    fn expected() -> &'static str {
        "Value"
    }

    fn from_value(value: Value) -> Option<Self> {
        Some(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn expected() -> &'static str {
        T::expected()
    }

    fn from_value(value: Value) -> Option<Self> {
        T::from_value(value).map(Some)
    }

    fn from_absent() -> Option<Self> {
        Some(None)
    }
}
