use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Custom, CustomValue, TypeHandle};

/// The object shape of WSON: keys are kept sorted.
pub type Map = BTreeMap<String, Value>;

// -----------------------------------------------------------------------------
// Value

/// A WSON value.
///
/// Builtin shapes map one-to-one onto the text format. Everything else is a
/// [`Value::Custom`] and needs a connector to be encoded.
///
/// # Examples
///
/// ```
/// use wson_value::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("a".into(), Value::from(1));
/// map.insert("b".into(), Value::from("text"));
///
/// let value = Value::from(map);
/// assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
/// assert_eq!(value.kind(), "object");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    Undefined,
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Milliseconds since the Unix epoch.
    Date(i64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Custom(CustomValue),
}

impl Value {
    /// Wraps a user type as [`Value::Custom`].
    #[inline]
    pub fn custom<T: Custom>(value: T) -> Self {
        Self::Custom(CustomValue::new(value))
    }

    /// A short lowercase name of the variant, used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Date(_) => "date",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Custom(_) => "custom",
        }
    }

    /// Describes the value for diagnostics: the type name of a custom
    /// value, otherwise its [`kind`](Self::kind).
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Custom(custom) => custom.type_handle().short_name(),
            other => other.kind(),
        }
    }

    /// The [`TypeHandle`] of the custom instance, if this is one.
    #[inline]
    pub fn custom_type(&self) -> Option<TypeHandle> {
        match self {
            Self::Custom(custom) => Some(custom.type_handle()),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers widen to `f64`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_date(&self) -> Option<i64> {
        match self {
            Self::Date(ms) => Some(*ms),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_custom(&self) -> Option<&CustomValue> {
        match self {
            Self::Custom(custom) => Some(custom),
            _ => None,
        }
    }

    /// Downcasts a custom value to `T`.
    #[inline]
    pub fn downcast_ref<T: Custom>(&self) -> Option<&T> {
        self.as_custom().and_then(CustomValue::downcast_ref::<T>)
    }

    /// Looks up `key` in an object value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+ => $conv:expr) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant($conv(value))
                }
            }
        )+
    };
}

impl_from!(Bool: bool => |v| v);
impl_from!(Integer: i8, i16, i32, i64, u8, u16, u32 => i64::from);
impl_from!(Float: f32, f64 => f64::from);
impl_from!(String: String, &str => String::from);
impl_from!(Array: Vec<Value> => |v| v);
impl_from!(Object: Map => |v| v);
impl_from!(Custom: CustomValue => |v| v);

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Array(iter.into_iter().map(Into::into).collect())
    }
}

// -----------------------------------------------------------------------------
// Tests
