use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use wson_value::{TypeHandle, Value};

// -----------------------------------------------------------------------------
// Matcher

/// How a connector recognises the values it is responsible for.
///
/// # Examples
///
/// ```
/// use wson_connect::{Matcher, TypeHandle, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// let by = TypeHandle::of::<Point>();
/// assert!(Matcher::Exact.matches(by, &Value::custom(Point(0, 0))));
/// assert!(!Matcher::Exact.matches(by, &Value::from(1)));
///
/// let any = Matcher::predicate(|_| true);
/// assert!(any.matches(by, &Value::Null));
/// ```
#[derive(Clone, Default)]
pub enum Matcher {
    /// The value is a [`Value::Custom`] whose concrete type is the connector's `by`.
    #[default]
    Exact,
    /// The value is a [`Value::Object`] holding at least all these keys.
    Shape(Arc<[String]>),
    /// A pure user predicate.
    Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
}

impl Matcher {
    /// Creates a [`Matcher::Shape`] from the required keys.
    pub fn shape<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        Self::Shape(keys.into())
    }

    /// Creates a [`Matcher::Predicate`].
    #[inline]
    pub fn predicate(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::Predicate(Arc::new(f))
    }

    /// Whether `value` is recognised, for a connector whose type is `by`.
    pub fn matches(&self, by: TypeHandle, value: &Value) -> bool {
        match self {
            Self::Exact => value.custom_type() == Some(by),
            Self::Shape(keys) => match value {
                Value::Object(map) => keys.iter().all(|key| map.contains_key(key.as_str())),
                _ => false,
            },
            Self::Predicate(f) => f(value),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.write_str("Exact"),
            Self::Shape(keys) => f.debug_tuple("Shape").field(keys).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
