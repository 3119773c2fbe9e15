use alloc::vec::Vec;
use core::ops::Deref;

use wson_value::Value;

use crate::HookError;

// -----------------------------------------------------------------------------
// Args

/// The argument list handed to a connector's create function.
///
/// Typed accessors turn a missing or mistyped argument into a [`HookError`],
/// so create functions can use `?` throughout.
///
/// # Examples
///
/// ```
/// use wson_connect::{Args, Value};
///
/// let args = Args::new(vec![Value::from(3), Value::from("x")]);
/// assert_eq!(args.i64(0), Ok(3));
/// assert_eq!(args.str(1), Ok("x"));
/// assert!(args.i64(1).is_err());
/// assert!(args.i64(2).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args(Vec<Value>);

macro_rules! typed_getter {
    ($(#[$meta:meta])* $name:ident -> $ty:ty, $expected:literal, $conv:path) => {
        $(#[$meta])*
        pub fn $name(&self, index: usize) -> Result<$ty, HookError> {
            let value = self.value(index)?;
            $conv(value).ok_or(HookError::Type {
                index,
                expected: $expected,
                found: value.kind(),
            })
        }
    };
}

impl Args {
    #[inline]
    pub const fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Returns the argument at `index`, or [`HookError::Count`] if there is none.
    pub fn value(&self, index: usize) -> Result<&Value, HookError> {
        self.0.get(index).ok_or(HookError::Count {
            expected: index + 1,
            found: self.0.len(),
        })
    }

    /// Fails unless exactly `expected` arguments were given.
    pub fn expect_len(&self, expected: usize) -> Result<(), HookError> {
        if self.0.len() == expected {
            Ok(())
        } else {
            Err(HookError::Count {
                expected,
                found: self.0.len(),
            })
        }
    }

    typed_getter!(bool -> bool, "bool", Value::as_bool);
    typed_getter!(i64 -> i64, "integer", Value::as_i64);
    typed_getter!(
        /// Integers are accepted and widened.
        f64 -> f64, "number", Value::as_f64
    );
    typed_getter!(str -> &str, "string", Value::as_str);
    typed_getter!(date -> i64, "date", Value::as_date);

    #[inline]
    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl Deref for Args {
    type Target = [Value];

    #[inline]
    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Args {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

// -----------------------------------------------------------------------------
// Tests
